//! Compilation options.
//!
//! Options can be built in code or read from a YAML or JSON file:
//!
//! ```yaml
//! output: map
//! resolveAliases: false
//! format: tokens-studio
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::format::TokenFormat;
use crate::generate::OutputStyle;

/// Settings for one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Flat variables or nested maps. Defaults to variables.
    pub output: OutputStyle,
    /// Whether to substitute `{alias}` references before generating. Defaults to true.
    pub resolve_aliases: bool,
    /// Dialect of the input. Detected from the document when absent.
    pub format: Option<TokenFormat>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: OutputStyle::Variables,
            resolve_aliases: true,
            format: None,
        }
    }
}

impl Options {
    /// Parses options from YAML (or JSON) content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TokenError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads options from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            TokenError::Parse { message, .. } => TokenError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.output, OutputStyle::Variables);
        assert!(options.resolve_aliases);
        assert!(options.format.is_none());
    }

    #[test]
    fn test_from_yaml_full() {
        let options = Options::from_yaml(
            r#"
            output: map
            resolveAliases: false
            format: tokens-studio
            "#,
        )
        .unwrap();
        assert_eq!(options.output, OutputStyle::Map);
        assert!(!options.resolve_aliases);
        assert_eq!(options.format, Some(TokenFormat::TokensStudio));
    }

    #[test]
    fn test_from_yaml_partial_keeps_defaults() {
        let options = Options::from_yaml("output: map").unwrap();
        assert_eq!(options.output, OutputStyle::Map);
        assert!(options.resolve_aliases);
    }

    #[test]
    fn test_from_json() {
        let options = Options::from_yaml(r#"{ "output": "variables", "resolveAliases": false }"#)
            .unwrap();
        assert_eq!(options.output, OutputStyle::Variables);
        assert!(!options.resolve_aliases);
    }

    #[test]
    fn test_empty_content_is_default() {
        assert_eq!(Options::from_yaml("  \n").unwrap(), Options::default());
    }

    #[test]
    fn test_invalid_output_value() {
        let result = Options::from_yaml("output: css");
        assert!(matches!(result, Err(TokenError::Parse { .. })));
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output: [").unwrap();
        let err = Options::from_file(file.path()).unwrap_err();
        match err {
            TokenError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_missing_file() {
        let result = Options::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(TokenError::Load { .. })));
    }
}
