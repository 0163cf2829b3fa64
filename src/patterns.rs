//! URN component grammar
//!
//! Character-level validation for namespace identifiers (NID) and
//! namespace-specific strings (NSS) following RFC 2141, plus the NID
//! prefixes RFC 3406 sets aside.

use crate::error::{NidError, NssError};
use crate::limits::Limits;
use once_cell::sync::Lazy;
use regex::Regex;

/// NID grammar: an alphanumeric followed by 1 to 31 alphanumerics or hyphens
pub const NID_PATTERN: &str = r"^[a-zA-Z0-9]{1}[a-zA-Z0-9\-]{1,31}$";

/// NSS grammar: `%XX` escapes or unreserved characters (RFC 2141 `<reserved>` excluded)
pub const NSS_PATTERN: &str = r"^(?:%[0-9A-Fa-f]{2}|[a-zA-Z0-9\-+(),.:=@;$_!*'])+$";

/// Reserved NID prefix (RFC 3406 section 4.3)
pub const RESERVED_NID_PREFIX: &str = "urn-";

/// Experimental NID prefix (RFC 3406 section 4.1)
pub const EXPERIMENTAL_NID_PREFIX: &str = "x-";

/// NID prefix reserved by this crate
pub const XY_NID_PREFIX: &str = "xy-";

static NID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NID_PATTERN).unwrap());

static NSS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NSS_PATTERN).unwrap());

/// Check if a string matches the NID grammar
pub fn is_valid_nid(nid: &str) -> bool {
    NID_REGEX.is_match(nid)
}

/// Check if a string matches the NSS grammar
pub fn is_valid_nss(nss: &str) -> bool {
    NSS_REGEX.is_match(nss)
}

/// Case-insensitive ASCII prefix test that never splits a UTF-8 sequence
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Match an NID against the disallowed prefixes
///
/// Prefixes are tested in the order experimental, `xy-`, reserved; the
/// first match decides the error.
pub fn check_nid_prefix(nid: &str) -> Result<(), NidError> {
    if starts_with_ignore_case(nid, EXPERIMENTAL_NID_PREFIX) {
        return Err(NidError::Experimental {
            prefix: EXPERIMENTAL_NID_PREFIX,
        });
    }

    if starts_with_ignore_case(nid, XY_NID_PREFIX) {
        return Err(NidError::XyPrefix {
            nid: nid.to_string(),
            prefix: XY_NID_PREFIX,
        });
    }

    if starts_with_ignore_case(nid, RESERVED_NID_PREFIX) {
        return Err(NidError::Reserved {
            prefix: RESERVED_NID_PREFIX,
        });
    }

    Ok(())
}

/// Validate an NID against the grammar only
pub fn check_nid_pattern(nid: &str) -> Result<(), NidError> {
    if is_valid_nid(nid) {
        Ok(())
    } else {
        Err(NidError::Pattern {
            nid: nid.to_string(),
        })
    }
}

/// Validate an NSS against the grammar only
pub fn check_nss_pattern(nss: &str) -> Result<(), NssError> {
    if is_valid_nss(nss) {
        Ok(())
    } else {
        Err(NssError::Pattern {
            nss: nss.to_string(),
        })
    }
}

/// Full construction-time NID validation: length, prefixes, then grammar
pub fn validate_nid(nid: &str, limits: &Limits) -> Result<(), NidError> {
    limits.check_nid_length(nid.len())?;
    check_nid_prefix(nid)?;
    check_nid_pattern(nid)
}

/// Full construction-time NSS validation: length, then grammar
pub fn validate_nss(nss: &str, limits: &Limits) -> Result<(), NssError> {
    limits.check_nss_length(nss.len())?;
    check_nss_pattern(nss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_nid() {
        assert!(is_valid_nid("newtonworld"));
        assert!(is_valid_nid("isbn"));
        assert!(is_valid_nid("a-b"));
        assert!(is_valid_nid("ab"));
        assert!(is_valid_nid("urn-nid"));

        assert!(!is_valid_nid(""));
        assert!(!is_valid_nid("a"));
        assert!(!is_valid_nid("-abc"));
        assert!(!is_valid_nid("_$nid"));
        assert!(!is_valid_nid("née"));
        assert!(!is_valid_nid(&"a".repeat(33)));
        assert!(is_valid_nid(&"a".repeat(32)));
    }

    #[test]
    fn test_is_valid_nss() {
        assert!(is_valid_nss("user:test_-user"));
        assert!(is_valid_nss("lol%AC_45:rRR"));
        assert!(is_valid_nss("a%2c"));
        assert!(is_valid_nss("(+),.:=@;$_!*'"));

        assert!(!is_valid_nss(""));
        assert!(!is_valid_nss("%%lol?kek"));
        assert!(!is_valid_nss("abc%2"));
        assert!(!is_valid_nss("abc%zz"));
        assert!(!is_valid_nss("a/b"));
        assert!(!is_valid_nss("a b"));
        assert!(!is_valid_nss("a\"b"));
    }

    #[test]
    fn test_check_nid_prefix_order() {
        assert_eq!(
            check_nid_prefix("X-nid"),
            Err(NidError::Experimental { prefix: "x-" })
        );
        assert_eq!(
            check_nid_prefix("XY-nid"),
            Err(NidError::XyPrefix {
                nid: "XY-nid".to_string(),
                prefix: "xy-"
            })
        );
        assert_eq!(
            check_nid_prefix("Urn-nid"),
            Err(NidError::Reserved { prefix: "urn-" })
        );
        assert!(check_nid_prefix("xyz").is_ok());
        assert!(check_nid_prefix("urn").is_ok());
        assert!(check_nid_prefix("ü-x").is_ok());
    }

    #[test]
    fn test_validate_nid() {
        let limits = Limits::default();
        assert!(validate_nid("newtonworld", &limits).is_ok());
        assert!(matches!(
            validate_nid("n", &limits),
            Err(NidError::TooShort { len: 1, .. })
        ));
        assert!(matches!(
            validate_nid("x-", &limits),
            Err(NidError::TooShort { .. })
        ));
        assert!(matches!(
            validate_nid("_$nid", &limits),
            Err(NidError::Pattern { .. })
        ));
    }

    #[test]
    fn test_validate_nss() {
        let limits = Limits::default();
        assert!(validate_nss("abc", &limits).is_ok());
        assert_eq!(validate_nss("", &limits), Err(NssError::Empty));
        assert!(matches!(
            validate_nss("?", &limits),
            Err(NssError::Pattern { .. })
        ));
    }
}
