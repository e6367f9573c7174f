//! The directory + status collaborator.
//!
//! [`StatusProvider`] is the seam the overlay talks through; tests use an
//! in-memory fake, production uses [`TicketingClient`] against the ticketing
//! platform's REST API (email/token basic auth).

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use tracing::debug;

use roster_core::RosterConfig;

use crate::StatusResult;

// ── Directory types ───────────────────────────────────────────────────────────

/// One user record from the role-filtered directory listing.
#[derive(Clone, Debug)]
pub struct DirectoryUser {
    pub id: u64,
    /// Full name as registered with the provider, e.g. `"Alice Smith"`.
    pub full_name: String,
    /// Explicitly configured display name, when the account has one.
    pub display_name: Option<String>,
}

impl DirectoryUser {
    /// The name the schedule sheet is expected to use for this user:
    /// the configured display name, else the first whitespace-delimited
    /// token of the full name.
    pub fn sheet_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.full_name.split_whitespace().next().unwrap_or(""),
        }
    }
}

/// Directory listing plus per-user live status.
pub trait StatusProvider {
    /// All users matching the given role filter.
    fn directory(&self, role: &str) -> StatusResult<Vec<DirectoryUser>>;

    /// The raw status token for one user.  Token translation happens in the
    /// overlay, not here.
    fn status_token(&self, user_id: u64) -> StatusResult<String>;
}

// ── HTTP implementation ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<UserWire>,
}

#[derive(Deserialize)]
struct UserWire {
    id: u64,
    name: String,
    #[serde(default)]
    user_fields: UserFields,
}

#[derive(Default, Deserialize)]
struct UserFields {
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct AvailabilityResponse {
    availability: AvailabilityWire,
}

#[derive(Deserialize)]
struct AvailabilityWire {
    #[serde(default)]
    status: String,
}

/// Blocking client for the ticketing platform's user and availability
/// endpoints.
pub struct TicketingClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: String,
}

impl TicketingClient {
    pub fn new(config: &RosterConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build();
        // Email/token basic auth: "email/token:api_token".
        let credentials =
            BASE64.encode(format!("{}/token:{}", config.ticketing_email, config.ticketing_token));
        Self {
            agent,
            base_url: config.ticketing_base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {credentials}"),
        }
    }
}

impl StatusProvider for TicketingClient {
    fn directory(&self, role: &str) -> StatusResult<Vec<DirectoryUser>> {
        let url = format!("{}/api/v2/users.json", self.base_url);
        debug!(%role, "fetching provider directory");
        let body: UsersResponse = self
            .agent
            .get(&url)
            .query("role", role)
            .set("Authorization", &self.auth_header)
            .call()?
            .into_json()?;

        Ok(body
            .users
            .into_iter()
            .map(|u| DirectoryUser {
                id: u.id,
                full_name: u.name,
                display_name: u.user_fields.display_name,
            })
            .collect())
    }

    fn status_token(&self, user_id: u64) -> StatusResult<String> {
        let url = format!(
            "{}/api/v2/channels/voice/availabilities/{}.json",
            self.base_url, user_id
        );
        let body: AvailabilityResponse = self
            .agent
            .get(&url)
            .set("Authorization", &self.auth_header)
            .call()?
            .into_json()?;
        Ok(body.availability.status)
    }
}
