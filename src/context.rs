//! Invocation context resolution for codeprompt.
//!
//! Every command runs against one resolved context: the working directory
//! that relative input paths are read from, the loaded config, and the
//! template registry the prompts are built from.

use crate::config::Config;
use crate::error::{CodepromptError, Result};
use crate::prompt::{CustomPrompts, TemplateRegistry};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved state shared by all commands.
#[derive(Debug, Clone)]
pub struct PromptContext {
    /// Absolute directory used to resolve relative paths.
    pub working_dir: PathBuf,

    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,

    /// Built-in templates.
    pub registry: TemplateRegistry,
}

impl PromptContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(PromptContext)` - Successfully resolved context
    /// * `Err(CodepromptError::IoError)` - The working directory is unavailable
    /// * `Err(CodepromptError::ConfigError)` - The config file is unreadable or invalid
    pub fn resolve(explicit_config: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            CodepromptError::IoError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(explicit_config, cwd)
    }

    /// Resolve the context from a specific directory.
    ///
    /// This is useful for testing or when the working directory is known.
    pub fn resolve_from<P: AsRef<Path>>(explicit_config: Option<&Path>, cwd: P) -> Result<Self> {
        let working_dir = cwd.as_ref().to_path_buf();
        let explicit = explicit_config.map(|p| absolutize(&working_dir, p));
        let config = Config::resolve(explicit.as_deref(), &working_dir)?;

        Ok(Self::with_config(working_dir, config))
    }

    /// Build a context around an already-loaded config.
    pub fn with_config(working_dir: PathBuf, config: Config) -> Self {
        Self {
            working_dir,
            config,
            registry: TemplateRegistry::builtin(),
        }
    }

    /// The user's template overrides.
    pub fn custom_prompts(&self) -> Option<&CustomPrompts> {
        Some(&self.config.custom_prompts)
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn input_path(&self, path: &Path) -> PathBuf {
        absolutize(&self.working_dir, path)
    }

    /// Read a UTF-8 input file named on the command line.
    pub fn read_input(&self, path: &Path) -> Result<String> {
        let full = self.input_path(path);
        std::fs::read_to_string(&full).map_err(|e| {
            CodepromptError::IoError(format!("failed to read '{}': {}", full.display(), e))
        })
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CONFIG_FILE, LogLevel};
    use crate::prompt::{ActionKind, TemplateKey};
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_without_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = PromptContext::resolve_from(None, dir.path()).unwrap();

        assert_eq!(ctx.working_dir, dir.path());
        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.registry, TemplateRegistry::builtin());
    }

    #[test]
    fn resolve_from_reads_relative_explicit_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("prompts.yaml"),
            "custom_prompts:\n  enhance: \"Sharpen:\"\n",
        )
        .unwrap();

        let ctx =
            PromptContext::resolve_from(Some(Path::new("prompts.yaml")), dir.path()).unwrap();
        assert_eq!(
            ctx.custom_prompts().and_then(|c| c.get(TemplateKey::Enhance)),
            Some("Sharpen:")
        );
    }

    #[test]
    fn input_path_keeps_absolute_paths() {
        let dir = TempDir::new().unwrap();
        let ctx = PromptContext::with_config(dir.path().to_path_buf(), Config::default());

        let abs = dir.path().join("a.txt");
        assert_eq!(ctx.input_path(&abs), abs);
        assert_eq!(ctx.input_path(Path::new("b.txt")), dir.path().join("b.txt"));
    }

    #[test]
    fn read_input_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let ctx = PromptContext::with_config(dir.path().to_path_buf(), Config::default());

        let err = ctx.read_input(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, CodepromptError::IoError(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    #[serial]
    fn resolve_uses_current_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "log_level: debug\ncustom_prompts:\n  FIX: \"fix ${selectedText}\"\n",
        )
        .unwrap();

        let _guard = DirGuard::new(dir.path());
        let ctx = PromptContext::resolve(None).unwrap();

        assert_eq!(ctx.config.log_level, LogLevel::Debug);
        assert_eq!(
            ctx.registry.code_action(ctx.custom_prompts(), ActionKind::Fix),
            "fix ${selectedText}"
        );
    }
}
