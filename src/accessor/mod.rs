//! # Property Accessor
//!
//! Type-safe reads of deployment properties for one specification.
//!
//! Resolution order for a property on an element:
//!
//! 1. the first explicit property with that name on the element;
//! 2. otherwise the first default found among the applicable declarations
//!    with that name, in declaration order;
//! 3. otherwise absent.
//!
//! Typed reads then project the raw value onto the requested kind and shape.
//! "Not set" and "set with another kind" both come back as `Ok(None)`; `Err`
//! is reserved for caller or integration bugs.

pub mod projection;

use std::sync::Arc;

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::element::ModelElement;
use crate::index::{DeclarationIndex, HostIndex};
use crate::model::{PropertyValue, Specification};
use crate::{Error, Result};

pub use projection::{project_array, project_single, AsBool, AsEnum, AsInt, AsString, Projection};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Set on the element.
    Explicit,
    /// Declared as the default in the specification.
    Default,
}

/// A raw property value together with its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub value: &'a PropertyValue,
    pub origin: Origin,
}

/// One row of an element's effective property table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveProperty<'a> {
    pub name: &'a str,
    pub value: &'a PropertyValue,
    pub origin: Origin,
}

/// Resolves typed property values against one deployment specification.
///
/// Holds no state besides the specification and the index, so a single
/// accessor can serve any number of threads.
#[derive(Debug, Clone)]
pub struct PropertyAccessor<I = HostIndex> {
    spec: Arc<Specification>,
    index: I,
}

impl PropertyAccessor<HostIndex> {
    /// Accessor using host-based declaration lookup.
    pub fn new(spec: Arc<Specification>) -> Self {
        Self::with_index(spec, HostIndex::new())
    }
}

impl<I: DeclarationIndex> PropertyAccessor<I> {
    /// Accessor with a custom declaration index.
    pub fn with_index(spec: Arc<Specification>, index: I) -> Self {
        Self { spec, index }
    }

    pub fn specification(&self) -> &Specification {
        &self.spec
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    // ========================================================================
    // Typed reads: single values
    // ========================================================================

    pub fn get_boolean(&self, element: &dyn ModelElement, property: &str) -> Result<Option<bool>> {
        self.get_single::<AsBool>(element, property)
    }

    pub fn get_integer(&self, element: &dyn ModelElement, property: &str) -> Result<Option<i64>> {
        self.get_single::<AsInt>(element, property)
    }

    pub fn get_string(&self, element: &dyn ModelElement, property: &str) -> Result<Option<String>> {
        self.get_single::<AsString>(element, property)
    }

    /// Name of the enum literal the property is set to.
    pub fn get_enum(&self, element: &dyn ModelElement, property: &str) -> Result<Option<String>> {
        self.get_single::<AsEnum>(element, property)
    }

    // ========================================================================
    // Typed reads: arrays
    // ========================================================================

    pub fn get_boolean_array(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<Vec<bool>>> {
        self.get_array::<AsBool>(element, property)
    }

    pub fn get_integer_array(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<Vec<i64>>> {
        self.get_array::<AsInt>(element, property)
    }

    pub fn get_string_array(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<Vec<String>>> {
        self.get_array::<AsString>(element, property)
    }

    pub fn get_enum_array(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<Vec<String>>> {
        self.get_array::<AsEnum>(element, property)
    }

    // ========================================================================
    // Generic reads
    // ========================================================================

    /// Resolve and project onto a single value of kind `K`.
    pub fn get_single<K: Projection>(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<K::Output>> {
        let Some(raw) = self.get_value(element, property)? else {
            return Ok(None);
        };
        let projected = project_single::<K>(raw);
        if projected.is_none() {
            debug!(property, requested = %K::KIND, found = %raw, "single value does not match requested kind");
        }
        Ok(projected)
    }

    /// Resolve and project onto an array of kind `K`, all or nothing.
    pub fn get_array<K: Projection>(
        &self,
        element: &dyn ModelElement,
        property: &str,
    ) -> Result<Option<Vec<K::Output>>> {
        let Some(raw) = self.get_value(element, property)? else {
            return Ok(None);
        };
        let projected = project_array::<K>(raw);
        if projected.is_none() {
            debug!(property, requested = %K::KIND, found = %raw, "array value does not match requested kind");
        }
        Ok(projected)
    }

    // ========================================================================
    // Raw resolution
    // ========================================================================

    /// The property's raw value: explicit, else default, else `None`.
    pub fn get_value<'a>(
        &'a self,
        element: &'a dyn ModelElement,
        property: &str,
    ) -> Result<Option<&'a PropertyValue>> {
        Ok(self.resolve(element, property)?.map(|r| r.value))
    }

    /// Like [`get_value`](Self::get_value), also reporting where the value came from.
    ///
    /// The declaration index is consulted only when the element has no
    /// explicit value, so an unresolvable element still answers for its
    /// explicit properties.
    pub fn resolve<'a>(
        &'a self,
        element: &'a dyn ModelElement,
        property: &str,
    ) -> Result<Option<Resolved<'a>>> {
        if property.is_empty() {
            return Err(Error::EmptyPropertyName);
        }

        if let Some(prop) = element.explicit_properties().iter().find(|p| p.name() == property) {
            trace!(element = %element.label(), property, "explicit value");
            return Ok(Some(Resolved { value: &prop.value, origin: Origin::Explicit }));
        }

        // A name match without a default keeps scanning: layered
        // specifications may declare the same name more than once.
        let decls = self.index.applicable_declarations(&self.spec, element)?;
        for decl in decls.into_iter().filter(|d| d.name == property) {
            if let Some(value) = decl.default_value() {
                trace!(element = %element.label(), property, "default value");
                return Ok(Some(Resolved { value, origin: Origin::Default }));
            }
        }

        trace!(element = %element.label(), property, "no value");
        Ok(None)
    }

    /// Every property with a value on the element: explicit ones in stored
    /// order, then defaults of the remaining declarations in declaration order.
    /// Each name appears once, with the value [`resolve`](Self::resolve) would return.
    pub fn effective_properties<'a>(
        &'a self,
        element: &'a dyn ModelElement,
    ) -> Result<Vec<EffectiveProperty<'a>>> {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut rows = Vec::new();

        for prop in element.explicit_properties() {
            if seen.insert(prop.name()) {
                rows.push(EffectiveProperty {
                    name: prop.name(),
                    value: &prop.value,
                    origin: Origin::Explicit,
                });
            }
        }

        for decl in self.index.applicable_declarations(&self.spec, element)? {
            if seen.contains(decl.name.as_str()) {
                continue;
            }
            if let Some(value) = decl.default_value() {
                seen.insert(&decl.name);
                rows.push(EffectiveProperty {
                    name: &decl.name,
                    value,
                    origin: Origin::Default,
                });
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementId, Host, PropertyDecl, Scalar};
    use pretty_assertions::assert_eq;

    fn accessor() -> (PropertyAccessor, Arc<PropertyDecl>) {
        let retry = PropertyDecl::new("Retry", Host::Methods);
        let spec = Specification::new("test")
            .with_declaration(retry.clone())
            .with_declaration(PropertyDecl::new("Timeout", Host::Methods).with_default(30))
            .with_declaration(PropertyDecl::new("Mode", Host::Methods).optional());
        (PropertyAccessor::new(Arc::new(spec)), Arc::new(retry))
    }

    #[test]
    fn test_explicit_then_default_then_none() {
        let (acc, retry) = accessor();
        let elem = Element::new(ElementId(1), "ping")
            .with_host(Host::Methods)
            .with_property(retry, vec![1, 2, 3]);

        let r = acc.resolve(&elem, "Retry").unwrap().unwrap();
        assert_eq!(r.origin, Origin::Explicit);

        let t = acc.resolve(&elem, "Timeout").unwrap().unwrap();
        assert_eq!(t.origin, Origin::Default);
        assert_eq!(t.value, &PropertyValue::integer(30));

        assert_eq!(acc.resolve(&elem, "Mode").unwrap(), None);
        assert_eq!(acc.resolve(&elem, "Unknown").unwrap(), None);
    }

    #[test]
    fn test_empty_name_is_error() {
        let (acc, _) = accessor();
        let elem = Element::new(ElementId(1), "ping").with_host(Host::Methods);
        assert!(matches!(acc.get_integer(&elem, ""), Err(Error::EmptyPropertyName)));
    }

    #[test]
    fn test_unresolved_element_only_fails_on_default_lookup() {
        let (acc, retry) = accessor();
        let orphan = Element::new(ElementId(9), "orphan").with_property(retry, vec![4]);

        assert_eq!(acc.get_integer_array(&orphan, "Retry").unwrap(), Some(vec![4]));
        assert!(matches!(
            acc.get_integer(&orphan, "Timeout"),
            Err(Error::UnresolvedElementType { .. })
        ));
    }

    #[test]
    fn test_default_scan_skips_name_match_without_default() {
        let spec = Specification::new("layered")
            .with_declaration(PropertyDecl::new("Level", Host::Interfaces).optional())
            .with_declaration(PropertyDecl::new("Level", Host::Interfaces).with_default(PropertyValue::enumerator("Info")));
        let acc = PropertyAccessor::new(Arc::new(spec));
        let iface = Element::new(ElementId(2), "Api").with_host(Host::Interfaces);

        assert_eq!(acc.get_enum(&iface, "Level").unwrap(), Some("Info".to_string()));
    }

    #[test]
    fn test_effective_properties() {
        let (acc, retry) = accessor();
        let elem = Element::new(ElementId(1), "ping")
            .with_host(Host::Methods)
            .with_property(retry.clone(), vec![1])
            .with_property(retry, vec![2]);

        let rows = acc.effective_properties(&elem).unwrap();
        let summary: Vec<(&str, Origin)> = rows.iter().map(|r| (r.name, r.origin)).collect();
        assert_eq!(summary, vec![("Retry", Origin::Explicit), ("Timeout", Origin::Default)]);
        assert_eq!(rows[0].value, &PropertyValue::Array(vec![Scalar::Integer(1)]));
    }
}
