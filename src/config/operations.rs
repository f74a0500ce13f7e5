//! Config loading, resolution, and serialization.

use super::model::Config;
use crate::error::{CodepromptError, Result};
use crate::prompt::{ActionKind, TemplateKey};
use std::path::Path;
use tracing::{debug, info, warn};

/// Config file looked up in the current directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = ".codeprompt.yaml";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "CODEPROMPT_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded config
    /// * `Err(CodepromptError::ConfigError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CodepromptError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            CodepromptError::ConfigError(msg) => {
                CodepromptError::ConfigError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the config for this invocation.
    ///
    /// An explicitly named file must exist. Without one, `.codeprompt.yaml`
    /// in `dir` is used when present, and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!(path = %candidate.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            CodepromptError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CodepromptError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Keys whose override is present but empty; these fall back to the default.
    pub fn ignored_overrides(&self) -> Vec<TemplateKey> {
        let custom = &self.custom_prompts;
        let present = [
            (TemplateKey::Action(ActionKind::Explain), &custom.explain),
            (TemplateKey::Action(ActionKind::Fix), &custom.fix),
            (TemplateKey::Action(ActionKind::Improve), &custom.improve),
            (TemplateKey::Enhance, &custom.enhance),
        ];
        present
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_some_and(str::is_empty))
            .map(|(key, _)| key)
            .collect()
    }

    /// Log a warning for every override that will be ignored.
    pub fn warn_ignored_overrides(&self) {
        for key in self.ignored_overrides() {
            warn!(%key, "custom prompt is empty and will be ignored");
        }
    }
}
