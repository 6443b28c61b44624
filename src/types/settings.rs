use serde::{Deserialize, Serialize};

/// Top-level settings container.
///
/// Every section and field falls back to its default, so a settings file
/// only needs to name what it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LinkshelfSettings {
    pub general: GeneralSettings,
    pub logging: LoggingSettings,
    pub rpc: RpcSettings,
}

/// How new link ids are generated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Start with the four starter links instead of an empty shelf.
    pub seed_sample_links: bool,
    pub id_scheme: IdScheme,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            seed_sample_links: true,
            id_scheme: IdScheme::Uuid,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RpcSettings {
    pub max_requests_per_second: u32,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            max_requests_per_second: 200,
        }
    }
}
