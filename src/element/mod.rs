//! # Model Element Trait
//!
//! The view of a deployment element that property resolution needs: its
//! explicitly set properties, in stored order, and the hosts that determine
//! which declarations apply to it.
//!
//! Any model representation can be queried by implementing this trait;
//! [`Element`](crate::model::Element) is the in-crate implementation.

use std::borrow::Cow;

use crate::model::{Element, Host, Property};

/// Read-only access to a deployment element.
///
/// Implementations must not change between calls once the model has
/// finished loading.
pub trait ModelElement: Send + Sync {
    /// Explicit properties in stored order. Duplicate names are allowed;
    /// readers take the first.
    fn explicit_properties(&self) -> &[Property];

    /// Hosts this element belongs to. Empty means the element's type is unknown.
    fn hosts(&self) -> &[Host];

    /// Human-readable label, used in logs and errors.
    fn label(&self) -> Cow<'_, str>;
}

impl ModelElement for Element {
    fn explicit_properties(&self) -> &[Property] {
        &self.properties
    }

    fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}#{}", self.name, self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementId;

    #[test]
    fn test_element_label() {
        let elem = Element::new(ElementId(7), "ping").with_host(Host::Methods);
        assert_eq!(elem.label(), "ping#7");
        assert_eq!(ModelElement::hosts(&elem), &[Host::Methods]);
        assert!(elem.explicit_properties().is_empty());
    }
}
