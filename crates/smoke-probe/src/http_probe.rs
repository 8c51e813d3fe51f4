use crate::{ProbeError, ProbeResult, Result as ProbeErrorResult};

use std::time::Duration;

use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use smoke_config::HttpProbeConfig;

pub const HTTP_PROBE_NAME: &str = "http";

/// One-shot probe of the paginated messages resource.
///
/// Issues a single GET; there are no retries, one attempt is definitive.
/// Every outcome, including transport failure, is folded into the returned
/// [`ProbeResult`].
pub struct HttpProbe {
    base_url: String,
    config: HttpProbeConfig,
    client: ReqwestClient,
}

impl HttpProbe {
    pub fn new(base_url: &str, config: HttpProbeConfig) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
            client: ReqwestClient::new(),
        }
    }

    /// Run the probe to completion. Never returns an error: transport and
    /// application failures become failed results with their diagnostics.
    pub async fn run(&self) -> ProbeResult {
        let url = self.messages_url();
        info!("GET {}", url);

        match self.fetch(&url).await {
            Ok(detail) => ProbeResult::pass(HTTP_PROBE_NAME, detail),
            Err(e) => ProbeResult::fail(HTTP_PROBE_NAME, e.to_string()),
        }
    }

    async fn fetch(&self, url: &str) -> ProbeErrorResult<String> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProbeError::application(status.as_u16(), body));
        }

        // The payload is arbitrary JSON, not schema-validated. A success
        // body that fails to parse is a protocol oddity worth flagging but
        // never fatal: fall back to the raw text.
        match serde_json::from_str::<Value>(&body) {
            Ok(payload) => Ok(serde_json::to_string_pretty(&payload)?),
            Err(e) => {
                warn!("response body is not valid JSON ({}), reporting raw text", e);
                Ok(body)
            }
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/api/messages/user/{}?page={}&size={}",
            self.base_url, self.config.user_id, self.config.page, self.config.size
        )
    }
}
