use lazy_static::lazy_static;
use serde::Deserialize;
use shared_kernel::configuration::config;

#[derive(Deserialize)]
pub struct Settings {
    pub locality: LocalityApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalityApiConfig {
    pub host: String,
}

lazy_static! {
    pub static ref SETTINGS_CONFIG: Settings = config::<Settings>().unwrap();
}
