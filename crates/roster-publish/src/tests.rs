//! Unit tests for roster-publish.

use roster_core::{AgentStatus, OutputRecord};

use crate::{FieldType, SchemaField, roster_schema};

mod schema {
    use super::*;

    #[test]
    fn declares_exactly_the_record_fields() {
        let schema = roster_schema();
        let keys: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["agent", "group", "status"]);
    }

    #[test]
    fn status_is_the_only_optional_field() {
        let schema = roster_schema();
        assert!(!schema["agent"].optional);
        assert!(!schema["group"].optional);
        assert!(schema["status"].optional);
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let json = serde_json::to_value(roster_schema()).unwrap();
        assert_eq!(
            json["agent"],
            serde_json::json!({"type": "string", "name": "Agent", "optional": false})
        );
        assert_eq!(
            json["status"],
            serde_json::json!({"type": "string", "name": "Status", "optional": true})
        );
    }

    #[test]
    fn field_type_spelling() {
        let field = SchemaField::required(FieldType::Number, "Count");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
    }

    #[test]
    fn records_validate_against_the_schema_keys() {
        // Every record key must be a schema key, and required fields must
        // be present — the dashboard enforces this server-side, so pin it
        // here before the wire.
        let schema = roster_schema();
        let record = OutputRecord::new("alice", "Sales").with_status(AgentStatus::Available);
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in obj.keys() {
            assert!(schema.contains_key(key), "record field {key:?} not in schema");
        }
        for (key, field) in &schema {
            assert!(field.optional || obj.contains_key(key), "required field {key:?} missing");
        }
    }
}
