//! Display targets refreshed after every cart mutation.
//!
//! Targets are addressed by CSS-style selector, like the cart badge and total
//! elements on the storefront pages. A page that does not carry a target
//! simply ignores the update.

use std::collections::{BTreeMap, HashMap};

/// Selector for the item count badge.
pub const DEFAULT_COUNT_SELECTOR: &str = ".cart-count";
/// Selector for the formatted cart total.
pub const DEFAULT_TOTAL_SELECTOR: &str = ".cart-total";

/// Something that can show cart state.
pub trait CartDisplay {
    /// Replace the text of the target matched by `selector`.
    ///
    /// Returns `false` if no such target exists.
    fn set_text(&mut self, selector: &str, text: &str) -> bool;

    /// Set an attribute on the target matched by `selector`.
    ///
    /// Returns `false` if no such target exists.
    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> bool;
}

impl<D: CartDisplay + ?Sized> CartDisplay for &mut D {
    fn set_text(&mut self, selector: &str, text: &str) -> bool {
        (**self).set_text(selector, text)
    }

    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> bool {
        (**self).set_attribute(selector, name, value)
    }
}

/// Selectors of the targets the cart manager updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTargets {
    /// Target receiving the unit count.
    pub count_selector: String,
    /// Target receiving the formatted total.
    pub total_selector: String,
}

impl Default for DisplayTargets {
    fn default() -> Self {
        Self {
            count_selector: DEFAULT_COUNT_SELECTOR.to_string(),
            total_selector: DEFAULT_TOTAL_SELECTOR.to_string(),
        }
    }
}

/// A display with no targets at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl CartDisplay for NoDisplay {
    fn set_text(&mut self, _selector: &str, _text: &str) -> bool {
        false
    }

    fn set_attribute(&mut self, _selector: &str, _name: &str, _value: &str) -> bool {
        false
    }
}

/// Text and attributes of one display target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Current text content
    pub text: String,
    /// Attributes set on the target, by name
    pub attributes: BTreeMap<String, String>,
}

/// A fixed set of targets held in memory.
///
/// Only selectors registered up front receive updates; everything else is
/// reported as absent.
#[derive(Debug, Clone, Default)]
pub struct ElementDisplay {
    elements: HashMap<String, Element>,
}

impl ElementDisplay {
    /// Create a display without targets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a display carrying the given targets.
    #[must_use]
    pub fn with_targets<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = selectors
            .into_iter()
            .map(|selector| (selector.into(), Element::default()))
            .collect();
        Self { elements }
    }

    /// Register an empty target.
    pub fn add_target(&mut self, selector: impl Into<String>) {
        self.elements.entry(selector.into()).or_default();
    }

    /// The target matched by `selector`, if present.
    #[must_use]
    pub fn element(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    /// Current text of the target matched by `selector`.
    #[must_use]
    pub fn text(&self, selector: &str) -> Option<&str> {
        self.elements.get(selector).map(|el| el.text.as_str())
    }

    /// Current value of an attribute on the target matched by `selector`.
    #[must_use]
    pub fn attribute(&self, selector: &str, name: &str) -> Option<&str> {
        self.elements
            .get(selector)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }
}

impl CartDisplay for ElementDisplay {
    fn set_text(&mut self, selector: &str, text: &str) -> bool {
        self.elements.get_mut(selector).is_some_and(|el| {
            text.clone_into(&mut el.text);
            true
        })
    }

    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> bool {
        self.elements.get_mut(selector).is_some_and(|el| {
            el.attributes.insert(name.to_string(), value.to_string());
            true
        })
    }
}
