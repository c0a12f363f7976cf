//! Unrecoverable, caller-requested termination.

use std::{any::Any, error::Error, panic};
use thiserror::Error;

/// The payload of a [`fatal`] unwind.
///
/// This is never returned as an `Err`. It only travels as a panic
/// payload and can be recovered with [`Fatal::recover`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Fatal(Box<dyn Error + Send + Sync>);

impl Fatal {
    /// The error the fatal condition was raised with.
    #[must_use]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Unwraps the carried error.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
        self.0
    }

    /// Extracts a [`Fatal`] from a caught panic payload.
    ///
    /// # Errors
    ///
    /// Returns the payload unchanged if the panic was not raised
    /// by [`fatal`].
    pub fn recover(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Fatal>().map(|fatal| *fatal)
    }
}

/// Raises a fatal condition carrying `err`.
///
/// This ignores every enable-flag and writes nothing to any
/// logger output. The calling flow unwinds with a [`Fatal`]
/// payload, or aborts if the binary is built with `panic = "abort"`.
#[track_caller]
pub fn fatal<E>(err: E) -> !
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    panic::panic_any(Fatal(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    #[test]
    fn ordinary_panics_are_not_fatal() {
        let payload = catch_unwind(|| panic!("plain")).unwrap_err();
        let payload = Fatal::recover(payload).unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"plain"));
    }
}
