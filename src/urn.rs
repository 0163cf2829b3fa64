//! The URN value type
//!
//! A [`Urn`] is an immutable `urn:<nid>:<nss>` value. It is built either
//! from its two components with [`Urn::new`], which applies every
//! construction rule, or from raw text with [`Urn::parse`], which checks the
//! structure and the component grammars.

use crate::error::{ComponentError, Error, FormatError, Result};
use crate::limits::Limits;
use crate::patterns;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Literal scheme segment of every URN
pub const URN_PREFIX: &str = "urn";

/// Separator between the scheme, NID and NSS
pub const URN_DELIMITER: char = ':';

/// Number of structural segments in `urn:<nid>:<nss>`
const URN_PARTS: usize = 3;

/// A Uniform Resource Name (RFC 2141)
///
/// Equality and hashing compare the raw component bytes; no case folding
/// or percent-decoding takes place.
///
/// ```
/// use urn::Urn;
///
/// let urn = Urn::new("newtonworld", "user:test_-user")?;
/// assert_eq!(urn.to_string(), "urn:newtonworld:user:test_-user");
///
/// let parsed: Urn = "urn:newtonworld:user:test_-user".parse()?;
/// assert_eq!(parsed, urn);
/// # Ok::<(), urn::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urn {
    nid: String,
    nss: String,
}

impl Urn {
    /// Create a URN from its namespace identifier and namespace-specific string
    ///
    /// Both parts are trimmed. The NID must be 3 to 32 bytes, must not start
    /// with `x-`, `xy-` or `urn-` (ignoring ASCII case) and must match the NID
    /// grammar; the NSS must be non-empty and match the NSS grammar.
    pub fn new(nid: &str, nss: &str) -> Result<Self> {
        Self::with_limits(nid, nss, &Limits::default())
    }

    /// Create a URN, validating component lengths against `limits`
    ///
    /// `limits` can narrow the NID length range but never widen it past
    /// 3 to 32 bytes.
    pub fn with_limits(nid: &str, nss: &str, limits: &Limits) -> Result<Self> {
        let nid = nid.trim();
        let nss = nss.trim();

        let validated = patterns::validate_nid(nid, limits)
            .map_err(ComponentError::from)
            .and_then(|()| patterns::validate_nss(nss, limits).map_err(ComponentError::from));

        if let Err(reason) = validated {
            let err = Error::Create(reason);
            tracing::debug!(nid, nss, error = %err, "rejected URN components");
            return Err(err);
        }

        Ok(Self {
            nid: nid.to_string(),
            nss: nss.to_string(),
        })
    }

    /// Parse a URN from its text form
    ///
    /// The input is trimmed and split on the first two colons. Only the
    /// component grammars are checked; the NID length and prefix rules of
    /// [`Urn::new`] are not applied. Use [`Urn::parse_strict`] for those.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let result = Self::parse_components(raw).and_then(|(nid, nss)| {
            patterns::check_nid_pattern(nid)?;
            patterns::check_nss_pattern(nss)?;
            Ok(Self {
                nid: nid.to_string(),
                nss: nss.to_string(),
            })
        });

        match &result {
            Ok(_) => tracing::trace!(input = raw, "parsed URN"),
            Err(err) => tracing::debug!(input = raw, error = %err, "rejected URN"),
        }

        result
    }

    /// Parse a URN and apply the full construction rules to its components
    ///
    /// Errors are returned without the "can't create URN" envelope.
    pub fn parse_strict(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let limits = Limits::default();
        let result = Self::parse_components(raw).and_then(|(nid, nss)| {
            patterns::validate_nid(nid, &limits)?;
            patterns::validate_nss(nss, &limits)?;
            Ok(Self {
                nid: nid.to_string(),
                nss: nss.to_string(),
            })
        });

        if let Err(err) = &result {
            tracing::debug!(input = raw, error = %err, "rejected URN in strict mode");
        }

        result
    }

    /// Parse a URN, panicking if it is invalid
    ///
    /// Only for inputs whose validity is a program invariant, such as
    /// literals in source code.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message when [`Urn::parse`] fails.
    pub fn must_parse(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Split trimmed input into its NID and NSS segments
    fn parse_components(raw: &str) -> Result<(&str, &str)> {
        let mut tokens = raw.splitn(URN_PARTS, URN_DELIMITER);

        let (prefix, nid, nss) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(prefix), Some(nid), Some(nss)) => (prefix, nid, nss),
            _ => return Err(FormatError::InvalidFormat.into()),
        };

        if prefix != URN_PREFIX {
            return Err(FormatError::MissingPrefix {
                raw: raw.to_string(),
            }
            .into());
        }

        Ok((nid, nss))
    }

    /// The namespace identifier
    pub fn nid(&self) -> &str {
        &self.nid
    }

    /// The namespace-specific string, still percent-encoded
    pub fn nss(&self) -> &str {
        &self.nss
    }

    /// Consume the URN, returning `(nid, nss)`
    pub fn into_parts(self) -> (String, String) {
        (self.nid, self.nss)
    }

    /// Render the URN as a JSON string literal
    ///
    /// Neither grammar admits `"`, `\` or control characters, so the text
    /// form is emitted between quotes without escaping.
    pub fn to_json(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len() + 2);
        out.push(b'"');
        out.extend_from_slice(URN_PREFIX.as_bytes());
        out.push(b':');
        out.extend_from_slice(self.nid.as_bytes());
        out.push(b':');
        out.extend_from_slice(self.nss.as_bytes());
        out.push(b'"');
        out
    }

    /// Length of the text form in bytes
    fn encoded_len(&self) -> usize {
        URN_PREFIX.len() + self.nid.len() + self.nss.len() + 2
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            URN_PREFIX, URN_DELIMITER, self.nid, URN_DELIMITER, self.nss
        )
    }
}

impl FromStr for Urn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Urn {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Urn::parse(&s).map_err(de::Error::custom)
    }
}
