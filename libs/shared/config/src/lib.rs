use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub emergency_hotline: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            emergency_hotline: "108".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    warn!("PORT is not a valid port number, using default");
                    None
                }
            })
            .unwrap_or(3000);

        let emergency_hotline = env::var("EMERGENCY_HOTLINE").unwrap_or_else(|_| {
            warn!("EMERGENCY_HOTLINE not set, using default");
            "108".to_string()
        });

        Self {
            port,
            emergency_hotline,
        }
    }
}
