//! Shared start-up for the folio binaries: logging, configuration, and the
//! answerer built from the configured profile.

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

use folio_assistant::QueryAnswerer;
use folio_core::config::Config;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Directory holding config.toml and config.<env>.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

impl ConfigArgs {
    pub fn load(&self) -> anyhow::Result<Config> {
        let config = Config::load_in(&self.config_dir)
            .map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
        tracing::debug!(env = config.env_name(), dir = %self.config_dir.display(), "configuration loaded");
        Ok(config)
    }
}

/// `RUST_LOG` wins; otherwise folio crates log at info.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,folio=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn build_answerer(config: &Config) -> anyhow::Result<QueryAnswerer> {
    let content = config.content()?;
    let answerer = QueryAnswerer::from_content(content);
    tracing::info!(
        name = %answerer.content().name,
        documents = answerer.index().documents().len(),
        vocabulary = answerer.index().vocabulary().len(),
        "corpus index ready"
    );
    Ok(answerer)
}
