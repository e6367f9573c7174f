//! Unit tests for roster-core.

use chrono::{TimeZone, Utc};

use crate::{AgentStatus, GROUP_FALLBACK, OutputRecord, ReportingClock};

// ── AgentStatus ───────────────────────────────────────────────────────────────

mod status {
    use super::*;

    #[test]
    fn known_tokens_translate() {
        assert_eq!(AgentStatus::from_provider_token("available"), AgentStatus::Available);
        assert_eq!(AgentStatus::from_provider_token("online"), AgentStatus::Available);
        assert_eq!(AgentStatus::from_provider_token("on_call"), AgentStatus::Busy);
        assert_eq!(AgentStatus::from_provider_token("wrap_up"), AgentStatus::Wrapup);
        assert_eq!(AgentStatus::from_provider_token("offline"), AgentStatus::Offline);
        assert_eq!(AgentStatus::from_provider_token("not_available"), AgentStatus::Offline);
    }

    #[test]
    fn unrecognized_tokens_degrade_to_unknown() {
        assert_eq!(AgentStatus::from_provider_token("lunch"), AgentStatus::Unknown);
        assert_eq!(AgentStatus::from_provider_token(""), AgentStatus::Unknown);
        // Translation is exact — provider tokens are lowercase.
        assert_eq!(AgentStatus::from_provider_token("AVAILABLE"), AgentStatus::Unknown);
    }

    #[test]
    fn labels_are_uppercase_variant_names() {
        assert_eq!(AgentStatus::Available.label(), "AVAILABLE");
        assert_eq!(AgentStatus::Wrapup.label(), "WRAPUP");
        assert_eq!(AgentStatus::Unknown.to_string(), "UNKNOWN");
    }
}

// ── OutputRecord ──────────────────────────────────────────────────────────────

mod record {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        let rec = OutputRecord::new("alice", "SupportGroup");
        assert_eq!(rec.agent, "ALICE");
        assert_eq!(rec.group, "SUPPORTGROUP");
        assert_eq!(rec.status, "");
    }

    #[test]
    fn empty_group_falls_back_to_other() {
        assert_eq!(OutputRecord::new("bob", "").group, GROUP_FALLBACK);
        assert_eq!(OutputRecord::new("bob", "   ").group, GROUP_FALLBACK);
    }

    #[test]
    fn with_status_fills_label() {
        let rec = OutputRecord::new("alice", "Sales").with_status(AgentStatus::Available);
        assert_eq!(rec.status, "AVAILABLE");
    }

    #[test]
    fn serializes_with_schema_field_names() {
        let rec = OutputRecord::new("alice", "Sales").with_status(AgentStatus::Busy);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"agent": "ALICE", "group": "SALES", "status": "BUSY"})
        );
    }
}

// ── ReportingClock ────────────────────────────────────────────────────────────

mod clock {
    use super::*;

    #[test]
    fn hour_respects_configured_offset() {
        // 18:00 UTC == 13:00 at UTC-5.
        let instant = Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap();
        let clock = ReportingClock::from_offset_minutes(-300).unwrap();
        assert_eq!(clock.hour_of(instant), 13);

        let utc_clock = ReportingClock::from_offset_minutes(0).unwrap();
        assert_eq!(utc_clock.hour_of(instant), 18);
    }

    #[test]
    fn offset_wraps_across_midnight() {
        // 02:00 UTC == 21:00 the previous day at UTC-5.
        let instant = Utc.with_ymd_and_hms(2024, 3, 4, 2, 0, 0).unwrap();
        let clock = ReportingClock::from_offset_minutes(-300).unwrap();
        assert_eq!(clock.hour_of(instant), 21);
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert!(ReportingClock::from_offset_minutes(24 * 60).is_err());
    }
}
