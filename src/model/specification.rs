//! Deployment specification: the set of property declarations.

use serde::{Deserialize, Serialize};

use super::{Host, PropertyDecl};
use crate::Result;

/// A deployment specification.
///
/// Declarations are kept in the order they were declared; lookups that scan
/// them rely on that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    #[serde(default)]
    pub declarations: Vec<PropertyDecl>,
}

impl Specification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, decl: PropertyDecl) -> Self {
        self.declarations.push(decl);
        self
    }

    /// Declarations for one host, in declaration order.
    pub fn declarations_for<'a>(&'a self, host: &'a Host) -> impl Iterator<Item = &'a PropertyDecl> + 'a {
        self.declarations.iter().filter(move |d| &d.host == host)
    }

    /// Load a specification from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyValue;
    use pretty_assertions::assert_eq;

    fn sample() -> Specification {
        Specification::new("org.example.ipc")
            .with_declaration(PropertyDecl::new("Timeout", Host::Methods).with_default(30))
            .with_declaration(PropertyDecl::new("Mode", Host::Interfaces).optional())
            .with_declaration(PropertyDecl::new("Priority", Host::Methods))
    }

    #[test]
    fn test_declarations_for_keeps_order() {
        let spec = sample();
        let names: Vec<&str> = spec
            .declarations_for(&Host::Methods)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Timeout", "Priority"]);
    }

    #[test]
    fn test_json_roundtrip() {
        let spec = sample();
        let json = spec.to_json().unwrap();
        let back = Specification::from_json(&json).unwrap();
        assert_eq!(back, spec);
        assert_eq!(
            back.declarations[0].default_value(),
            Some(&PropertyValue::integer(30))
        );
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Specification::from_json("{not json").is_err());
    }
}
