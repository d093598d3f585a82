//! Deployment element with its explicitly set properties.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Host, PropertyDecl, PropertyValue};

/// Opaque element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A property set directly on an element.
///
/// The declaration is shared with the specification that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub decl: Arc<PropertyDecl>,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(decl: Arc<PropertyDecl>, value: impl Into<PropertyValue>) -> Self {
        Self { decl, value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

/// A node of the deployment model (interface, method, argument, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    /// Structural host first, then type-based hosts.
    pub hosts: SmallVec<[Host; 2]>,
    pub properties: Vec<Property>,
}

impl Element {
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hosts: SmallVec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.hosts.push(host);
        self
    }

    pub fn with_property(mut self, decl: Arc<PropertyDecl>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push(Property::new(decl, value));
        self
    }

    pub fn has_host(&self, host: &Host) -> bool {
        self.hosts.iter().any(|h| h == host)
    }

    /// First explicit property with the given name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.name() == name).map(|p| &p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_match() {
        let decl = Arc::new(PropertyDecl::new("Timeout", Host::Methods));
        let elem = Element::new(ElementId(1), "ping")
            .with_host(Host::Methods)
            .with_property(decl.clone(), 10)
            .with_property(decl, 20);
        assert_eq!(elem.get("Timeout"), Some(&PropertyValue::integer(10)));
        assert_eq!(elem.get("Other"), None);
        assert!(elem.has_host(&Host::Methods));
        assert!(!elem.has_host(&Host::Arguments));
    }
}
