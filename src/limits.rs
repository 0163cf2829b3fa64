//! Length limits for URN components
//!
//! RFC 3406 section 4.3 bounds the namespace identifier to 32 characters;
//! this crate additionally requires at least 3. The namespace-specific
//! string only has to be non-empty.

use crate::error::{NidError, NssError};

/// Minimum NID length in bytes
pub const MIN_NID_LENGTH: usize = 3;

/// Maximum NID length in bytes
pub const MAX_NID_LENGTH: usize = 32;

/// Minimum NSS length in bytes
pub const MIN_NSS_LENGTH: usize = 1;

/// Component length bounds applied during construction
///
/// Limits can only tighten the RFC 3406 bounds: a minimum below
/// [`MIN_NID_LENGTH`] or a maximum above [`MAX_NID_LENGTH`] is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Minimum NID length in bytes
    pub min_nid_length: usize,

    /// Maximum NID length in bytes
    pub max_nid_length: usize,

    /// Minimum NSS length in bytes
    pub min_nss_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_nid_length: MIN_NID_LENGTH,
            max_nid_length: MAX_NID_LENGTH,
            min_nss_length: MIN_NSS_LENGTH,
        }
    }
}

impl Limits {
    /// Create a new Limits with the RFC 3406 bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective minimum NID length, never below [`MIN_NID_LENGTH`]
    pub fn nid_min(&self) -> usize {
        self.min_nid_length.max(MIN_NID_LENGTH)
    }

    /// Effective maximum NID length, never above [`MAX_NID_LENGTH`]
    pub fn nid_max(&self) -> usize {
        self.max_nid_length.min(MAX_NID_LENGTH)
    }

    /// Effective minimum NSS length, never below [`MIN_NSS_LENGTH`]
    pub fn nss_min(&self) -> usize {
        self.min_nss_length.max(MIN_NSS_LENGTH)
    }

    /// Check if an NID length is within limits
    pub fn check_nid_length(&self, len: usize) -> Result<(), NidError> {
        if len < self.nid_min() {
            Err(NidError::TooShort {
                len,
                min: self.nid_min(),
            })
        } else if len > self.nid_max() {
            Err(NidError::TooLong {
                len,
                max: self.nid_max(),
            })
        } else {
            Ok(())
        }
    }

    /// Check if an NSS length is within limits
    pub fn check_nss_length(&self, len: usize) -> Result<(), NssError> {
        if len < self.nss_min() {
            Err(NssError::Empty)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.min_nid_length, 3);
        assert_eq!(limits.max_nid_length, 32);
        assert_eq!(limits, Limits::new());
    }

    #[test]
    fn test_check_nid_length() {
        let limits = Limits::default();
        assert_eq!(limits.check_nid_length(0), Err(NidError::TooShort { len: 0, min: 3 }));
        assert_eq!(limits.check_nid_length(2), Err(NidError::TooShort { len: 2, min: 3 }));
        assert!(limits.check_nid_length(3).is_ok());
        assert!(limits.check_nid_length(32).is_ok());
        assert_eq!(limits.check_nid_length(33), Err(NidError::TooLong { len: 33, max: 32 }));
    }

    #[test]
    fn test_limits_only_tighten() {
        let loose = Limits {
            min_nid_length: 2,
            max_nid_length: 64,
            min_nss_length: 0,
        };
        assert_eq!(loose.check_nid_length(2), Err(NidError::TooShort { len: 2, min: 3 }));
        assert_eq!(loose.check_nid_length(33), Err(NidError::TooLong { len: 33, max: 32 }));
        assert_eq!(loose.check_nss_length(0), Err(NssError::Empty));

        let tight = Limits {
            min_nid_length: 4,
            max_nid_length: 8,
            ..Limits::default()
        };
        assert_eq!(tight.check_nid_length(3), Err(NidError::TooShort { len: 3, min: 4 }));
        assert_eq!(tight.check_nid_length(9), Err(NidError::TooLong { len: 9, max: 8 }));
        assert!(tight.check_nid_length(8).is_ok());
    }

    #[test]
    fn test_check_nss_length() {
        let limits = Limits::default();
        assert_eq!(limits.check_nss_length(0), Err(NssError::Empty));
        assert!(limits.check_nss_length(1).is_ok());
    }
}
