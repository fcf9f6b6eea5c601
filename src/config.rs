//! Plugin configuration surface.
//!
//! One option, owned and persisted by the host: the OpenAI API key. An empty
//! key means "not configured" and must short-circuit before any request is
//! built (enforced in [`crate::command`]).

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// OpenAI API key. Secret: hosts should mark it hidden in any
    /// configuration UI.
    #[serde(default)]
    pub api_key: String,
}

impl PluginConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the key from `OPENAI_API_KEY`; absent means unconfigured.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl std::fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConfig")
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}
