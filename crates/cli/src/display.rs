//! Display sink that reports cart refreshes through tracing.
//!
//! The terminal stands in for a page carrying both the count badge and the
//! total, so every target is reported as present.

use hana_store_storefront::CartDisplay;
use tracing::debug;

/// Logs every display update at debug level.
#[derive(Debug, Default)]
pub struct TracingDisplay {
    updates: usize,
}

impl TracingDisplay {
    /// Number of updates received so far.
    #[must_use]
    pub const fn updates(&self) -> usize {
        self.updates
    }
}

impl CartDisplay for TracingDisplay {
    fn set_text(&mut self, selector: &str, text: &str) -> bool {
        self.updates += 1;
        debug!(selector, text, "Cart display updated");
        true
    }

    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> bool {
        self.updates += 1;
        debug!(selector, attribute = name, value, "Cart display attribute updated");
        true
    }
}
