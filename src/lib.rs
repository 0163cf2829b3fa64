//! # urn-rs
//!
//! Parsing, validation and serialization of Uniform Resource Names.
//!
//! URNs follow the RFC 2141 syntax `urn:<NID>:<NSS>`; the namespace
//! identifier is further restricted by RFC 3406 (length bounds and the
//! reserved `urn-` and experimental `x-` prefixes).
//!
//! ## Features
//!
//! - Construction from parts with full NID/NSS validation
//! - Parsing from text, with a strict variant applying the construction rules
//! - Typed errors with stable diagnostic messages
//! - `Display`, `FromStr` and serde support (a URN is a JSON string)
//!
//! ## Example
//!
//! ```rust
//! use urn::Urn;
//!
//! let urn = Urn::parse("urn:newtonworld228:lol%AC_45:rRR")?;
//! assert_eq!(urn.nid(), "newtonworld228");
//! assert_eq!(urn.nss(), "lol%AC_45:rRR");
//!
//! let err = Urn::new("n", "user:test_-user").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "can't create URN, reason: length of NID must be more than 2 letters long"
//! );
//! # Ok::<(), urn::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod patterns;
pub mod urn;

// Re-exports for convenience
pub use error::{ComponentError, Error, FormatError, NidError, NssError, Result};
pub use limits::Limits;
pub use urn::Urn;

/// Version of the urn-rs library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
