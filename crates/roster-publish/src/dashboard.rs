//! Blocking client for a Geckoboard-style datasets API.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use roster_core::{OutputRecord, RosterConfig};

use crate::publisher::DatasetPublisher;
use crate::schema::SchemaDescriptor;
use crate::{PublishError, PublishResult};

pub struct DashboardClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: String,
}

impl DashboardClient {
    pub fn new(config: &RosterConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build();
        // API key as basic-auth username, empty password.
        let credentials = BASE64.encode(format!("{}:", config.dashboard_api_key));
        Self {
            agent,
            base_url: config.dashboard_base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    fn dataset_url(&self, name: &str) -> String {
        format!("{}/datasets/{}", self.base_url, name)
    }
}

impl DatasetPublisher for DashboardClient {
    fn ping(&self) -> PublishResult<()> {
        self.agent
            .get(&format!("{}/", self.base_url))
            .set("Authorization", &self.auth_header)
            .call()
            .map_err(PublishError::Connectivity)?;
        Ok(())
    }

    fn find_or_create(&self, name: &str, schema: &SchemaDescriptor) -> PublishResult<()> {
        debug!(dataset = name, "ensuring dataset exists");
        self.agent
            .put(&self.dataset_url(name))
            .set("Authorization", &self.auth_header)
            .send_json(serde_json::json!({ "fields": schema }))?;
        Ok(())
    }

    fn replace(&self, name: &str, records: &[OutputRecord]) -> PublishResult<()> {
        debug!(dataset = name, rows = records.len(), "replacing dataset contents");
        self.agent
            .put(&format!("{}/data", self.dataset_url(name)))
            .set("Authorization", &self.auth_header)
            .send_json(serde_json::json!({ "data": records }))?;
        Ok(())
    }

    fn delete(&self, name: &str) -> PublishResult<()> {
        debug!(dataset = name, "deleting dataset");
        self.agent
            .delete(&self.dataset_url(name))
            .set("Authorization", &self.auth_header)
            .call()?;
        Ok(())
    }
}
