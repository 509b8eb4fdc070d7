//! Cart line identifiers.
//!
//! Lines are keyed by an opaque short string generated when the line is first
//! inserted. The format matches what the browser storefront wrote into local
//! storage (nine lowercase base-36 characters), so carts saved by it load
//! unchanged.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CartLineId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartLineIdError {
    /// The input string is empty.
    #[error("cart line id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("cart line id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[A-Za-z0-9_-]`.
    #[error("cart line id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Identifier of a single line in the cart.
///
/// Stable for the lifetime of the line; used as the key for removal and
/// quantity updates.
///
/// ## Examples
///
/// ```
/// use hana_store_core::CartLineId;
///
/// let id = CartLineId::generate();
/// assert_eq!(id.as_str().len(), CartLineId::GENERATED_LENGTH);
///
/// assert!(CartLineId::parse("k3j9x0a1b").is_ok());
/// assert!(CartLineId::parse("").is_err());
/// assert!(CartLineId::parse("has space").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CartLineId(String);

impl CartLineId {
    /// Length of freshly generated identifiers.
    pub const GENERATED_LENGTH: usize = 9;

    /// Maximum accepted length when parsing.
    pub const MAX_LENGTH: usize = 64;

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let raw = (0..Self::GENERATED_LENGTH)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .collect();
        Self(raw)
    }

    /// Parse a `CartLineId` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains characters other than ASCII
    /// alphanumerics, `-` and `_`.
    pub fn parse(s: &str) -> Result<Self, CartLineIdError> {
        if s.is_empty() {
            return Err(CartLineIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(CartLineIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(CartLineIdError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CartLineId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CartLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CartLineId {
    type Err = CartLineIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CartLineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_lowercase_base36() {
        for _ in 0..100 {
            let id = CartLineId::generate();
            assert_eq!(id.as_str().len(), CartLineId::GENERATED_LENGTH);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_generate_draws_digits_and_letters_evenly() {
        let chars: Vec<char> = (0..2000)
            .flat_map(|_| CartLineId::generate().into_inner().into_bytes())
            .map(char::from)
            .collect();
        let digits = chars.iter().filter(|c| c.is_ascii_digit()).count();

        // 10 of 36 symbols are digits
        #[allow(clippy::cast_precision_loss)]
        let share = digits as f64 / chars.len() as f64;
        assert!((0.24..0.32).contains(&share), "digit share {share}");
    }

    #[test]
    fn test_generate_differs() {
        assert_ne!(CartLineId::generate(), CartLineId::generate());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(CartLineId::parse(""), Err(CartLineIdError::Empty));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "a".repeat(CartLineId::MAX_LENGTH + 1);
        assert!(matches!(
            CartLineId::parse(&long),
            Err(CartLineIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        assert_eq!(
            CartLineId::parse("abc/def"),
            Err(CartLineIdError::InvalidCharacter('/'))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let id = CartLineId::parse("x7k2m9q0a").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"x7k2m9q0a\"");

        let parsed: CartLineId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
