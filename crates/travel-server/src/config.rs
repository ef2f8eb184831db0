//! Server Configuration

use std::path::PathBuf;

use travel_core::ApiConfig;

/// Static host configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the built frontend (`index.html`, wasm, js)
    pub static_dir: PathBuf,

    /// Content API the frontend talks to; reported by `/health`
    pub api: ApiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("dist"),
            api: ApiConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            api: ApiConfig::from_env(),
        }
    }

    /// The SPA shell
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
