use std::process::ExitCode;

use log::{info, warn};
use smoke_config::Config;
use smoke_probe::{EventSink, HttpProbe, ProbeResult, RealtimeProbe};

/// Sequences the probes and reports their outcomes.
///
/// The probes share no state and never run concurrently: the HTTP probe is
/// awaited fully, including its own timeout handling, before the realtime
/// probe starts.
pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Vec<ProbeResult> {
        self.banner();

        info!("probing messages API at {}", self.config.base_url);
        let http = HttpProbe::new(&self.config.base_url, self.config.http.clone());
        let http_result = http.run().await;
        info!("{}", http_result);

        let realtime = RealtimeProbe::new(
            &self.config.base_url,
            self.config.realtime.clone(),
            EventSink::logging(),
        );
        info!("probing push channel at {}", realtime.url());
        let realtime_result = realtime.spawn().join().await;
        info!("{}", realtime_result);

        vec![http_result, realtime_result]
    }

    /// Map probe outcomes to the process exit status per the configured
    /// policy.
    pub fn exit_code(&self, results: &[ProbeResult]) -> ExitCode {
        if self.gates_on(results) {
            warn!("strict mode: at least one probe failed");
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// True when the configured policy turns these results into a failure
    /// exit status.
    pub(crate) fn gates_on(&self, results: &[ProbeResult]) -> bool {
        self.config.runner.strict && results.iter().any(|result| !result.succeeded)
    }

    fn banner(&self) {
        info!(
            "smoke harness v{} starting against {}",
            env!("CARGO_PKG_VERSION"),
            self.config.base_url
        );
        self.config.log_summary();
    }
}
