//! Human-readable rendering.

use core::fmt;

use crate::optional::Optional;

/// `Present { value=<v> }` or `Empty option`.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present {{ value={value} }}"),
            Optional::Empty => f.write_str("Empty option"),
        }
    }
}
