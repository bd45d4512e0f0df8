use serde::Deserialize;

pub mod backend;
pub mod confirm;
pub mod cookie;
pub mod extractor;
pub mod handler;
pub mod i18n;
pub mod server;

/// Process settings, read once at start.
#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Handed to the browser as is.
    #[serde(default)]
    pub upload_url: Option<String>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<AppConfig>()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            upload_url: None,
        }
    }
}
