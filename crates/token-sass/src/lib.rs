//! # Token Sass - Design Tokens to SCSS
//!
//! `token-sass` compiles design-token documents into SCSS variables or maps.
//! Two token dialects are understood, and the input dialect is detected from
//! the document itself.
//!
//! ## Pipeline
//!
//! Every compilation runs the same stages:
//!
//! 1. [`detect`]: classify the document as [`TokenFormat::Dtcg`] or [`TokenFormat::TokensStudio`]
//! 2. [`extract`]: walk the tree into an ordered list of [`TokenRecord`]s
//! 3. [`resolve_aliases`]: replace `{group.token}` references with their targets
//! 4. [`convert`]: render each value as an SCSS literal according to its [`TokenType`]
//! 5. [`generate`]: emit flat variables or nested maps, see [`OutputStyle`]
//!
//! [`Compiler`] and [`compile`] wire the stages together.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use token_sass::{compile, Options};
//!
//! let document = json!({
//!     "color": {
//!         "$type": "color",
//!         "blue": { "$value": "#0066cc" },
//!         "primary": { "$value": "{color.blue}" }
//!     }
//! });
//!
//! let compiled = compile(&document, &Options::default()).unwrap();
//! assert_eq!(compiled.contents, "$color-blue: #0066cc;\n$color-primary: #0066cc;\n");
//! ```
//!
//! ## Loading From Disk
//!
//! [`load_document`] reads a single `.json`, `.yaml` or `.yml` file.
//! [`TokenRegistry`] looks documents up by name across directories and caches
//! compiled output.
//!
//! ## Errors
//!
//! The pipeline itself fails only on circular aliases
//! ([`TokenError::CircularReference`]). Loading and configuration add parse,
//! I/O and lookup errors.

mod compile;
pub mod convert;
mod error;
pub mod extract;
pub mod format;
pub mod generate;
pub mod naming;
mod options;
pub mod registry;
pub mod resolve;
pub mod token;

pub use compile::{compile, Compiled, Compiler, Syntax};
pub use convert::{convert, infer_subtype, stringify};
pub use error::{Result, TokenError};
pub use extract::extract;
pub use format::{detect, TokenFormat};
pub use generate::{generate, OutputStyle};
pub use options::Options;
pub use registry::{
    load_document, parse_document, DocumentKind, TokenRegistry, SCHEME_PREFIX, TOKEN_EXTENSIONS,
};
pub use resolve::resolve_aliases;
pub use token::{TokenRecord, TokenType};
