use pair_tab_entities::prelude::GroupLabel;

#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub snapshot_path: String,
    pub logging_config: String,
    pub default_group: GroupLabel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_path: "tournament.json".into(),
            logging_config: "info,pair_tab_app_backend=debug".into(),
            default_group: GroupLabel::default(),
        }
    }
}

pub(crate) fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var("PAIR_TAB_CONFIG")?;
    let config = std::fs::read_to_string(config_path)?;
    let config = serde_yaml::from_str::<Config>(&config)?;
    Ok(config)
}

pub fn read_config() -> Config {
    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Logging is configured from the config, so this goes to stderr
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}
