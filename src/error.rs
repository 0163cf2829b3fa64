//! Error types for urn-rs
//!
//! This module defines all error types used throughout the library.
//! Every failure carries enough structure to branch on programmatically,
//! while its `Display` output is the stable diagnostic text.

use crate::patterns::{NID_PATTERN, NSS_PATTERN};
use std::fmt;
use thiserror::Error;

/// Result type alias using urn Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for URN operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction from parts failed
    #[error("can't create URN, reason: {0}")]
    Create(#[source] ComponentError),

    /// The raw input is not shaped like `urn:<nid>:<nss>`
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The namespace identifier is invalid
    #[error(transparent)]
    Nid(#[from] NidError),

    /// The namespace-specific string is invalid
    #[error(transparent)]
    Nss(#[from] NssError),
}

impl Error {
    /// The NID error behind this failure, looking through the create envelope
    pub fn nid_error(&self) -> Option<&NidError> {
        match self {
            Error::Nid(err) | Error::Create(ComponentError::Nid(err)) => Some(err),
            _ => None,
        }
    }

    /// The NSS error behind this failure, looking through the create envelope
    pub fn nss_error(&self) -> Option<&NssError> {
        match self {
            Error::Nss(err) | Error::Create(ComponentError::Nss(err)) => Some(err),
            _ => None,
        }
    }

    /// Whether the raw input failed the structural checks
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// Validation failure of a single URN component
///
/// This is the reason carried by [`Error::Create`]. An NSS grammar failure
/// is rendered without the offending NSS here; the parse-time message
/// names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Invalid NID
    Nid(NidError),

    /// Invalid NSS
    Nss(NssError),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::Nid(err) => write!(f, "{}", err),
            ComponentError::Nss(NssError::Pattern { .. }) => {
                write!(f, "NSS doesn't satisfy the regexp rule: {}", NSS_PATTERN)
            }
            ComponentError::Nss(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ComponentError {}

impl From<NidError> for ComponentError {
    fn from(err: NidError) -> Self {
        ComponentError::Nid(err)
    }
}

impl From<NssError> for ComponentError {
    fn from(err: NssError) -> Self {
        ComponentError::Nss(err)
    }
}

impl From<ComponentError> for Error {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::Nid(err) => Error::Nid(err),
            ComponentError::Nss(err) => Error::Nss(err),
        }
    }
}

/// Structural errors of the raw text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than three `:`-separated segments
    #[error("invalid URN format, should be urn:<nid>:<nss>")]
    InvalidFormat,

    /// The leading segment is not the literal `urn`
    #[error("URN '{raw}' must have prefix - urn")]
    MissingPrefix {
        /// The trimmed input that was rejected
        raw: String,
    },
}

/// Namespace identifier errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NidError {
    /// Shorter than the minimum length
    #[error("length of NID must be more than {} letters long", below(.min))]
    TooShort {
        /// Byte length of the rejected NID
        len: usize,
        /// Minimum accepted length
        min: usize,
    },

    /// Longer than the maximum length
    #[error("NID must be not greater than {max} letters long")]
    TooLong {
        /// Byte length of the rejected NID
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Starts with the experimental `x-` prefix
    #[error("NID {prefix} is experimental")]
    Experimental {
        /// The prefix, as registered
        prefix: &'static str,
    },

    /// Starts with `xy-`
    #[error("NID {nid} mustn't start with: {prefix}")]
    XyPrefix {
        /// The rejected NID
        nid: String,
        /// The prefix, as registered
        prefix: &'static str,
    },

    /// Starts with the reserved `urn-` prefix
    #[error("NID {prefix} is reserved")]
    Reserved {
        /// The prefix, as registered
        prefix: &'static str,
    },

    /// Contains characters outside the NID grammar
    #[error("NID {nid} doesn't satisfy pattern: {}", NID_PATTERN)]
    Pattern {
        /// The rejected NID
        nid: String,
    },
}

/// Largest length still too short, as printed in the diagnostic
fn below(min: &usize) -> usize {
    min.saturating_sub(1)
}

/// Namespace-specific string errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NssError {
    /// Empty after trimming
    #[error("NSS must be at least one character long")]
    Empty,

    /// Contains characters outside the NSS grammar or a broken `%XX` escape
    #[error("NSS {nss} doesn't satisfy the regexp rule: {}", NSS_PATTERN)]
    Pattern {
        /// The rejected NSS
        nss: String,
    },
}
