//! Error decorator that keeps the original error together with the place in
//! the code where it was raised.
//!
//! Infrastructure errors (I/O, JSON, database drivers) are wrapped before they
//! cross a layer boundary so that the operator log shows both the underlying
//! cause and the call site:
//!
//! ```rust
//! use docsrc_located_error::{Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum SourcesError {
//!     #[error("language sources file is empty")]
//!     Empty,
//! }
//!
//! let err: LocatedError<SourcesError> = Located(SourcesError::Empty).into();
//!
//! assert!(err.to_string().contains("language sources file is empty, "));
//! assert!(err.to_string().contains("src/lib.rs"));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

/// A shareable, type-erased error.
pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Marker wrapper used to build a [`LocatedError`] from a concrete error.
pub struct Located<E>(pub E);

/// An error together with the location where it was captured.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    /// The place in the code where the error was captured.
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The wrapped error.
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.source
    }
}

impl<'a, E> std::fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

impl<'a, E> From<Located<E>> for LocatedError<'a, E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn from(located: Located<E>) -> Self {
        let err = LocatedError {
            source: Arc::new(located.0),
            location: Box::new(*Location::caller()),
        };
        debug!("{err}");
        err
    }
}

impl<'a> From<DynError> for LocatedError<'a, dyn std::error::Error + Send + Sync> {
    #[track_caller]
    fn from(source: DynError) -> Self {
        LocatedError {
            source,
            location: Box::new(*Location::caller()),
        }
    }
}
