//! Unit tests for roster-status.

use std::collections::HashMap;

use roster_core::AgentStatus;

use crate::{AvailabilityOverlay, DirectoryUser, StatusError, StatusProvider, StatusResult};

// ── Fake provider ─────────────────────────────────────────────────────────────

struct FakeProvider {
    users: Vec<DirectoryUser>,
    tokens: HashMap<u64, String>,
}

impl FakeProvider {
    fn new(users: Vec<DirectoryUser>, tokens: &[(u64, &str)]) -> Self {
        Self {
            users,
            tokens: tokens.iter().map(|(id, t)| (*id, t.to_string())).collect(),
        }
    }
}

impl StatusProvider for FakeProvider {
    fn directory(&self, _role: &str) -> StatusResult<Vec<DirectoryUser>> {
        Ok(self.users.clone())
    }

    fn status_token(&self, user_id: u64) -> StatusResult<String> {
        Ok(self.tokens.get(&user_id).cloned().unwrap_or_default())
    }
}

fn user(id: u64, full_name: &str, display_name: Option<&str>) -> DirectoryUser {
    DirectoryUser {
        id,
        full_name: full_name.to_string(),
        display_name: display_name.map(str::to_string),
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// ── Sheet-name resolution ─────────────────────────────────────────────────────

mod sheet_name {
    use super::*;

    #[test]
    fn prefers_configured_display_name() {
        assert_eq!(user(1, "Alice Smith", Some("Ali")).sheet_name(), "Ali");
    }

    #[test]
    fn falls_back_to_first_token_of_full_name() {
        assert_eq!(user(1, "Alice Smith", None).sheet_name(), "Alice");
        assert_eq!(user(1, "Alice Smith", Some("  ")).sheet_name(), "Alice");
        assert_eq!(user(1, "", None).sheet_name(), "");
    }
}

// ── Overlay ───────────────────────────────────────────────────────────────────

mod overlay {
    use super::*;

    #[test]
    fn resolves_name_to_id_to_status() {
        let provider = FakeProvider::new(
            vec![user(7, "Alice Smith", None), user(9, "Robert Jones", Some("Bob"))],
            &[(7, "available"), (9, "on_call")],
        );
        let overlay = AvailabilityOverlay::new(provider, "agent");
        let statuses = overlay.fetch_statuses(&names(&["Alice", "Bob"])).unwrap();
        assert_eq!(statuses["Alice"], AgentStatus::Available);
        assert_eq!(statuses["Bob"], AgentStatus::Busy);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        // Schedule cells are typically upper-cased already.
        let provider = FakeProvider::new(vec![user(7, "Alice Smith", None)], &[(7, "wrap_up")]);
        let overlay = AvailabilityOverlay::new(provider, "agent");
        let statuses = overlay.fetch_statuses(&names(&["ALICE"])).unwrap();
        assert_eq!(statuses["ALICE"], AgentStatus::Wrapup);
    }

    #[test]
    fn unrecognized_token_degrades_to_unknown() {
        let provider = FakeProvider::new(vec![user(7, "Alice Smith", None)], &[(7, "on_break")]);
        let overlay = AvailabilityOverlay::new(provider, "agent");
        let statuses = overlay.fetch_statuses(&names(&["Alice"])).unwrap();
        assert_eq!(statuses["Alice"], AgentStatus::Unknown);
    }

    #[test]
    fn scheduled_agent_missing_from_directory_is_fatal() {
        let provider = FakeProvider::new(vec![user(7, "Alice Smith", None)], &[(7, "available")]);
        let overlay = AvailabilityOverlay::new(provider, "agent");
        match overlay.fetch_statuses(&names(&["Alice", "Mallory"])) {
            Err(StatusError::AgentLookup { agent }) => assert_eq!(agent, "Mallory"),
            other => panic!("expected AgentLookup, got {other:?}"),
        }
    }

    #[test]
    fn statuses_are_keyed_by_schedule_spelling() {
        let provider = FakeProvider::new(vec![user(7, "Alice Smith", None)], &[(7, "offline")]);
        let overlay = AvailabilityOverlay::new(provider, "agent");
        let statuses = overlay.fetch_statuses(&names(&["alice"])).unwrap();
        // Key is the schedule's spelling, not the directory's.
        assert!(statuses.contains_key("alice"));
        assert_eq!(statuses.len(), 1);
    }
}
