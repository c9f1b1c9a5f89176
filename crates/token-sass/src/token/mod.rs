//! Token records and the type catalog.
//!
//! - [`TokenRecord`]: a single token with its path, type and value
//! - [`TokenType`]: the closed catalog of token categories

mod kind;
mod record;

pub use kind::TokenType;
pub use record::TokenRecord;
