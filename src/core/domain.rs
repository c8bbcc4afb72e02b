use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the lending service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub http_port: u16,
    pub max_recommendations: usize,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            http_port: 8080,
            max_recommendations: 5,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Configuration::new();
        if let Some(port) = std::env::var("HTTP_PORT").ok().and_then(|p| p.parse().ok()) {
            config.http_port = port;
        }
        if let Some(max) = std::env::var("MAX_RECOMMENDATIONS").ok().and_then(|m| m.parse().ok()) {
            config.max_recommendations = max;
        }
        config
    }
}
