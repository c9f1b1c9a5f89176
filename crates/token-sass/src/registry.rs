//! Loading token documents from disk and looking them up by name.
//!
//! [`load_document`] reads a single JSON or YAML file into a JSON value.
//! [`TokenRegistry`] resolves document names against inline sources and a
//! list of directories, and caches compiled output per resolved file.
//!
//! # Resolution
//!
//! 1. **Inline documents** (added via [`TokenRegistry::add_inline`]) have highest priority
//! 2. **File documents** are searched in directory registration order (first directory wins)
//! 3. Names may carry a `tokens:` prefix and may include or omit the extension
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Parsed as |
//! |----------|-----------|-----------|
//! | 1 (highest) | `.tokens.json` | JSON |
//! | 2 | `.json` | JSON |
//! | 3 | `.yaml` | YAML |
//! | 4 (lowest) | `.yml` | YAML |
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = TokenRegistry::new();
//! registry.add_dir("./tokens")?;
//!
//! let compiled = registry.compile("tokens:colors")?;
//! println!("{}", compiled.contents);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::compile::{compile, Compiled};
use crate::error::{Result, TokenError};
use crate::options::Options;

/// Recognized token file extensions in priority order.
pub const TOKEN_EXTENSIONS: &[&str] = &[".tokens.json", ".json", ".yaml", ".yml"];

/// Optional scheme prefix accepted on document names.
pub const SCHEME_PREFIX: &str = "tokens:";

/// Serialization of a token document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Json,
    Yaml,
}

impl DocumentKind {
    /// Picks the kind from a file extension. Unknown extensions are `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentKind::Json),
            "yaml" | "yml" => Some(DocumentKind::Yaml),
            _ => None,
        }
    }
}

/// Parses in-memory content into a JSON value.
///
/// YAML mappings keep their key order.
pub fn parse_document(content: &str, kind: DocumentKind) -> Result<Value> {
    let parsed: std::result::Result<Value, String> = match kind {
        DocumentKind::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentKind::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| TokenError::Parse {
        path: None,
        message,
    })
}

/// Reads and parses a token file.
///
/// `.yaml` and `.yml` files are parsed as YAML; everything else as JSON.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| TokenError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    let kind = DocumentKind::from_path(path).unwrap_or(DocumentKind::Json);
    tracing::debug!(path = %path.display(), ?kind, "loading token document");

    parse_document(&content, kind).map_err(|e| match e {
        TokenError::Parse { message, .. } => TokenError::Parse {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}

fn strip_extension(name: &str) -> &str {
    TOKEN_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

fn base_name(name: &str) -> &str {
    let name = name.strip_prefix(SCHEME_PREFIX).unwrap_or(name);
    strip_extension(name)
}

/// Named token documents from inline sources and directories.
///
/// Compiled output of file documents is cached by resolved path until
/// [`invalidate`](TokenRegistry::invalidate) or
/// [`clear_cache`](TokenRegistry::clear_cache) is called.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    inline: HashMap<String, Value>,
    dirs: Vec<PathBuf>,
    cache: HashMap<PathBuf, Compiled>,
    options: Options,
}

impl TokenRegistry {
    /// Creates an empty registry with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that compiles with `options`.
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Adds an inline document from JSON or YAML content.
    ///
    /// Inline documents shadow file documents with the same name.
    pub fn add_inline(
        &mut self,
        name: impl Into<String>,
        content: &str,
        kind: DocumentKind,
    ) -> Result<()> {
        let document = parse_document(content, kind)?;
        self.add_document(name, document);
        Ok(())
    }

    /// Adds an already parsed document.
    pub fn add_document(&mut self, name: impl Into<String>, document: Value) {
        let name = name.into();
        self.inline.insert(base_name(&name).to_string(), document);
    }

    /// Adds a directory to search for token files.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Load`] if `path` is not a directory.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(TokenError::Load {
                message: format!("{} is not a directory", path.display()),
            });
        }
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Finds the file a name refers to, if any.
    pub fn resolve_path(&self, name: &str) -> Option<PathBuf> {
        let base = base_name(name);
        self.dirs.iter().find_map(|dir| {
            TOKEN_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}{}", base, ext)))
                .find(|candidate| candidate.is_file())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inline.contains_key(base_name(name)) || self.resolve_path(name).is_some()
    }

    /// Returns the parsed document for `name`.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(document) = self.inline.get(base_name(name)) {
            return Ok(document.clone());
        }
        let path = self.resolve_path(name).ok_or_else(|| TokenError::NotFound {
            name: name.to_string(),
        })?;
        load_document(path)
    }

    /// Compiles the document for `name`, reusing cached output for files.
    pub fn compile(&mut self, name: &str) -> Result<Compiled> {
        if let Some(document) = self.inline.get(base_name(name)) {
            return compile(document, &self.options);
        }

        let path = self.resolve_path(name).ok_or_else(|| TokenError::NotFound {
            name: name.to_string(),
        })?;
        if let Some(compiled) = self.cache.get(&path) {
            tracing::trace!(path = %path.display(), "compiled tokens served from cache");
            return Ok(compiled.clone());
        }

        let document = load_document(&path)?;
        let compiled = compile(&document, &self.options)?;
        self.cache.insert(path, compiled.clone());
        Ok(compiled)
    }

    /// Drops cached output for one resolved file. Returns whether anything was cached.
    pub fn invalidate<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.cache.remove(path.as_ref()).is_some()
    }

    /// Drops all cached output.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached compilations.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
