//! Configuration loading: `folio.toml` with environment overrides.

pub mod constants;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use constants::{endpoints, env_vars, CONFIG_FILE_NAME};

/// Chat backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Completion relay endpoint (`POST` with a `messages` array).
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,
}

fn default_chat_endpoint() -> String {
    endpoints::DEFAULT_CHAT_ENDPOINT.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_chat_endpoint(),
        }
    }
}

/// Form relay settings. Submission is disabled until an access key is
/// configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub access_key: Option<String>,
}

fn default_form_endpoint() -> String {
    endpoints::DEFAULT_FORM_ENDPOINT.to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: default_form_endpoint(),
            access_key: None,
        }
    }
}

/// Top-level configuration for the folio binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub form: FormConfig,
    /// Optional path to a TOML profile overriding the built-in record.
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
}

impl FolioConfig {
    /// Load configuration with the usual precedence: explicit path, then
    /// `folio.toml` in the working directory, then defaults. Environment
    /// variables override whatever the file provided.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var(env_vars::CHAT_ENDPOINT) {
            if !endpoint.is_empty() {
                self.chat.endpoint = endpoint;
            }
        }
        if let Ok(endpoint) = env::var(env_vars::FORM_ENDPOINT) {
            if !endpoint.is_empty() {
                self.form.endpoint = endpoint;
            }
        }
        if let Ok(key) = env::var(env_vars::FORM_ACCESS_KEY) {
            if !key.is_empty() {
                self.form.access_key = Some(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment variables are process-global, so the tests that touch
    // them take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_point_at_known_endpoints() {
        let config = FolioConfig::default();
        assert_eq!(config.chat.endpoint, endpoints::DEFAULT_CHAT_ENDPOINT);
        assert_eq!(config.form.endpoint, endpoints::DEFAULT_FORM_ENDPOINT);
        assert!(config.form.access_key.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[chat]
endpoint = "https://chat.example.com/v1"
"#
        )
        .unwrap();

        let config = FolioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chat.endpoint, "https://chat.example.com/v1");
        assert_eq!(config.form.endpoint, endpoints::DEFAULT_FORM_ENDPOINT);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = FolioConfig::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn env_values_override_file_and_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[chat]
endpoint = "https://file.example.com/chat"

[form]
access_key = "file-key"
"#
        )
        .unwrap();

        unsafe {
            env::set_var(env_vars::CHAT_ENDPOINT, "https://env.example.com/chat");
            env::set_var(env_vars::FORM_ACCESS_KEY, "env-key");
            env::remove_var(env_vars::FORM_ENDPOINT);
        }
        let config = FolioConfig::load(Some(file.path())).unwrap();
        unsafe {
            env::remove_var(env_vars::CHAT_ENDPOINT);
            env::remove_var(env_vars::FORM_ACCESS_KEY);
        }

        // Env wins over both the file value and the default.
        assert_eq!(config.chat.endpoint, "https://env.example.com/chat");
        assert_eq!(config.form.access_key.as_deref(), Some("env-key"));
        // Untouched values keep their file/default sources.
        assert_eq!(config.form.endpoint, endpoints::DEFAULT_FORM_ENDPOINT);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        unsafe {
            env::set_var(env_vars::CHAT_ENDPOINT, "");
            env::set_var(env_vars::FORM_ACCESS_KEY, "");
        }
        let mut config = FolioConfig::default();
        config.apply_env_overrides();
        unsafe {
            env::remove_var(env_vars::CHAT_ENDPOINT);
            env::remove_var(env_vars::FORM_ACCESS_KEY);
        }

        assert_eq!(config.chat.endpoint, endpoints::DEFAULT_CHAT_ENDPOINT);
        assert!(config.form.access_key.is_none());
    }
}
