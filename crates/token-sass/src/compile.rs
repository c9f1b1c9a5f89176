//! The detect → extract → resolve → generate pipeline.

use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::extract::extract;
use crate::format::{detect, TokenFormat};
use crate::generate::{generate, OutputStyle};
use crate::options::Options;
use crate::resolve::resolve_aliases;

/// Stylesheet syntax of compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    /// Sass, block syntax.
    #[default]
    Scss,
}

impl Syntax {
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Scss => "scss",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// The rendered stylesheet fragment.
    pub contents: String,
    /// Syntax of `contents`; always SCSS.
    pub syntax: Syntax,
    /// Dialect the document was read as.
    pub format: TokenFormat,
    /// Number of tokens emitted.
    pub token_count: usize,
}

/// Compiles token documents with a fixed set of [`Options`].
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use token_sass::{Compiler, OutputStyle};
///
/// let document = json!({
///     "spacing": {
///         "$type": "dimension",
///         "sm": { "$value": "4px" },
///         "md": { "$value": "{spacing.sm}" }
///     }
/// });
///
/// let compiled = Compiler::new().output(OutputStyle::Map).compile(&document).unwrap();
/// assert_eq!(compiled.contents, "$spacing: (\n  sm: 4px,\n  md: 4px,\n);\n");
/// assert_eq!(compiled.syntax.as_str(), "scss");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: Options,
}

impl Compiler {
    /// Creates a compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler from existing options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Sets the output style, returning the compiler for chaining.
    pub fn output(mut self, output: OutputStyle) -> Self {
        self.options.output = output;
        self
    }

    /// Enables or disables alias resolution.
    pub fn resolve_aliases(mut self, enabled: bool) -> Self {
        self.options.resolve_aliases = enabled;
        self
    }

    /// Skips detection and reads documents as `format`.
    pub fn format(mut self, format: TokenFormat) -> Self {
        self.options.format = Some(format);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compiles one parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::CircularReference`](crate::TokenError::CircularReference)
    /// when alias resolution is enabled and references form a cycle.
    pub fn compile(&self, document: &Value) -> Result<Compiled> {
        compile(document, &self.options)
    }
}

/// Compiles one parsed document with `options`.
pub fn compile(document: &Value, options: &Options) -> Result<Compiled> {
    let format = options.format.unwrap_or_else(|| detect(document));
    tracing::debug!(format = %format, "compiling token document");

    let mut records = extract(document, format);
    if options.resolve_aliases {
        resolve_aliases(&mut records)?;
    }

    Ok(Compiled {
        contents: generate(&records, options.output),
        syntax: Syntax::Scss,
        format,
        token_count: records.len(),
    })
}
