//! Render configuration loaded from a `javadsl.toml` file.
//!
//! ```toml
//! indent = { spaces = 4 }
//! skip_java_lang_imports = true
//! file_comment = "Generated code. Do not edit."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Indent, Result};

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "javadsl.toml";

/// Options controlling how Java files are laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation used for every nesting level.
    pub indent: Indent,
    /// Reference `java.lang` types by simple name without listing their imports.
    pub skip_java_lang_imports: bool,
    /// Comment emitted at the top of every generated file.
    pub file_comment: Option<String>,
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_filename(content, CONFIG_FILE_NAME)
    }

    /// Parse a configuration with a custom filename for error reporting.
    pub fn from_toml_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str_with_filename(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Set the indentation.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Elide `java.lang` imports.
    pub fn with_skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.skip_java_lang_imports = skip;
        self
    }

    /// Set the file comment.
    pub fn with_file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.indent, Indent::JAVA);
        assert!(!config.skip_java_lang_imports);
        assert!(config.file_comment.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = RenderConfig::from_toml_str(
            r#"
            indent = { spaces = 4 }
            skip_java_lang_imports = true
            file_comment = "Generated code"
            "#,
        )
        .unwrap();

        assert_eq!(config.indent, Indent::Spaces(4));
        assert!(config.skip_java_lang_imports);
        assert_eq!(config.file_comment.as_deref(), Some("Generated code"));
    }

    #[test]
    fn test_parse_uncommon_indent_width() {
        let config = RenderConfig::from_toml_str("indent = { spaces = 6 }").unwrap();
        assert_eq!(config.indent, Indent::Spaces(6));
        assert_eq!(config.indent.unit(), "      ");
    }

    #[test]
    fn test_parse_tab_indent() {
        let config = RenderConfig::from_toml_str(r#"indent = "tab""#).unwrap();
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = RenderConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
        assert_eq!(err.to_string(), "failed to parse javadsl.toml");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "skip_java_lang_imports = true\n").unwrap();

        let config = RenderConfig::load(&path).unwrap();
        assert!(config.skip_java_lang_imports);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = RenderConfig::load(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_builder_methods() {
        let config = RenderConfig::default()
            .with_indent(Indent::Tab)
            .with_skip_java_lang_imports(true)
            .with_file_comment("hi");
        assert_eq!(config.indent, Indent::Tab);
        assert!(config.skip_java_lang_imports);
        assert_eq!(config.file_comment.as_deref(), Some("hi"));
    }
}
