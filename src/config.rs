//! Credential and endpoint configuration, sourced from the environment

use log::debug;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const API_BASE_VAR: &str = "GROQ_API_BASE";
pub const DEFAULT_API_BASE: &str
  = "https://api.groq.com/openai/v1";

/// Probe configuration
#[derive(Clone)]
pub struct ProbeConfig
{   /// Bearer token for the Authorization header
    pub api_key: String
  , /// API base URL, without trailing slash
    pub api_base: String
}

impl ProbeConfig
{   /// Build a config for an explicit key and base
    pub fn new(
      api_key: impl Into<String>
    , api_base: impl Into<String>
    ) -> Self
    {   let api_base: String = api_base.into();
        ProbeConfig
        {   api_key: api_key.into()
          , api_base: api_base.trim_end_matches('/').to_string()
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .map(|k| k.trim().to_string())
          .filter(|k| !k.is_empty())
          .ok_or_else(|| {
            crate::error::Error::MissingApiKey(
              API_KEY_VAR.to_string()
            )
          })?;

        let api_base = lookup(API_BASE_VAR)
          .map(|b| b.trim().to_string())
          .filter(|b| !b.is_empty())
          .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        debug!("Using API base: {}", api_base);
        Ok(Self::new(api_key, api_base))
    }

    /// Full chat-completions URL
    pub fn endpoint(&self) -> String
    {   format!("{}/chat/completions", self.api_base)
    }
}

// Keeps the key out of debug logs.
impl std::fmt::Debug for ProbeConfig
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("ProbeConfig")
          .field("api_key", &"<redacted>")
          .field("api_base", &self.api_base)
          .finish()
    }
}
