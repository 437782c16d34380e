//! Failures raised by the container itself.

use thiserror::Error;

/// The only failure the container produces on its own. Errors from caller
/// callables and `or_else_throw` suppliers are passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no value present")]
    NoSuchElement,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
