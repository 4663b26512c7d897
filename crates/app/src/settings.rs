//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the TOML file
//! (`config/splitsafe.toml` unless `--config` says otherwise), `SPLITSAFE_*`
//! environment variables and finally the command line flags.
use engine::Currency;
use serde::Deserialize;

use crate::{cli::GlobalArgs, error::Result, i18n::Language};

const DEFAULT_CONFIG_PATH: &str = "config/splitsafe.toml";
const DEFAULT_STATE_PATH: &str = "config/splitsafe_state.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub state_path: String,
    pub language: Language,
    pub currency: Currency,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: DEFAULT_STATE_PATH.to_string(),
            language: Language::En,
            currency: Currency::Usd,
            log_level: "warn".to_string(),
        }
    }
}

pub fn load(args: &GlobalArgs) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SPLITSAFE"));
    let settings: AppConfig = builder.build()?.try_deserialize()?;

    Ok(apply_overrides(settings, args))
}

fn apply_overrides(mut settings: AppConfig, args: &GlobalArgs) -> AppConfig {
    if let Some(state) = &args.state {
        settings.state_path = state.clone();
    }
    if let Some(language) = args.lang {
        settings.language = language;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }
    settings
}
