use std::path::PathBuf;

use clap::Parser;
use smoke_config::Config;

#[derive(Parser)]
#[command(name = "smoke")]
#[command(about = "Connection smoke-test harness for the messages API and push channel")]
#[command(version)]
pub struct Cli {
    /// Base URL of the service under test (e.g. http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,

    /// Path to a TOML config file (./smoke.toml is picked up automatically)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// User whose messages the HTTP probe fetches
    #[arg(long)]
    pub user_id: Option<u64>,

    /// Page number for the messages request
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size for the messages request
    #[arg(long)]
    pub size: Option<u32>,

    /// Token sent in the websocket auth frame
    #[arg(long)]
    pub token: Option<String>,

    /// Seconds the realtime probe listens before requesting close
    #[arg(long)]
    pub listen_window: Option<u64>,

    /// Exit non-zero when any probe fails
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the JSON results document
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    /// Flags win over file and environment values.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref server) = self.server {
            config.base_url = server.clone();
        }
        if let Some(user_id) = self.user_id {
            config.http.user_id = user_id;
        }
        if let Some(page) = self.page {
            config.http.page = page;
        }
        if let Some(size) = self.size {
            config.http.size = size;
        }
        if let Some(ref token) = self.token {
            config.realtime.token = token.clone();
        }
        if let Some(listen_window) = self.listen_window {
            config.realtime.listen_window_secs = listen_window;
        }
        if self.strict {
            config.runner.strict = true;
        }
    }
}
