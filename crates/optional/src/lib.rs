//! optional: a present-or-empty value container.
//!
//! [`Optional<T>`] holds either one value or nothing, and offers combinators
//! (`map`, `flat_map`, `filter`, `do_if_present`, `do_if_empty`) plus fallback
//! extraction (`or_else`, `or_else_get`, `or_else_throw`) so absence can be
//! handled without explicit checks at every call site. `get` is the only
//! operation that fails on its own.

pub mod error;
mod fmt;
pub mod optional;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, Result};
pub use optional::{empty, option_of, Optional};
