//! User-facing notices raised by cart actions.

use core::fmt;

use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeLevel {
    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    /// Create a notice.
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Product was added to the cart.
    #[must_use]
    pub fn added_to_cart(name: &str) -> Self {
        Self::new(
            NoticeLevel::Success,
            "Success!",
            format!("{name} added to cart!"),
        )
    }

    /// The cart was opened while empty.
    #[must_use]
    pub fn empty_cart() -> Self {
        Self::new(
            NoticeLevel::Info,
            "Your Cart is Empty",
            "Add some elegant pieces to your cart to get started.",
        )
    }

    /// Checkout was requested with nothing in the cart.
    #[must_use]
    pub fn empty_checkout() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "Empty Cart",
            "Your cart is empty. Please add some items before checkout.",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.title, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_to_cart() {
        let notice = Notice::added_to_cart("Necklace");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "Necklace added to cart!");
    }

    #[test]
    fn test_empty_checkout() {
        let notice = Notice::empty_checkout();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Empty Cart");
    }

    #[test]
    fn test_display() {
        let notice = Notice::empty_cart();
        assert_eq!(
            notice.to_string(),
            "[info] Your Cart is Empty: Add some elegant pieces to your cart to get started."
        );
    }
}
