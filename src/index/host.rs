//! Host-based declaration index.
//!
//! This is the reference implementation of `DeclarationIndex`. A declaration
//! applies to an element when the declaration's host is one of the element's
//! hosts.
//!
//! ## Limitations
//!
//! - **No specification inheritance**: only the declarations of the given
//!   specification are considered.
//! - **Linear scan**: every lookup walks all declarations. Specifications are
//!   small, so nothing is cached.

use crate::element::ModelElement;
use crate::model::{PropertyDecl, Specification};
use crate::{Error, Result};
use super::DeclarationIndex;

/// Matches declarations to elements by host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostIndex;

impl HostIndex {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationIndex for HostIndex {
    fn applicable_declarations<'s>(
        &self,
        spec: &'s Specification,
        element: &dyn ModelElement,
    ) -> Result<Vec<&'s PropertyDecl>> {
        let hosts = element.hosts();
        if hosts.is_empty() {
            return Err(Error::UnresolvedElementType {
                element: element.label().into_owned(),
                spec: spec.name.clone(),
            });
        }

        // Specification order, not host order.
        Ok(spec
            .declarations
            .iter()
            .filter(|d| hosts.contains(&d.host))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementId, Host};

    fn spec() -> Specification {
        Specification::new("s")
            .with_declaration(PropertyDecl::new("Width", Host::Integers))
            .with_declaration(PropertyDecl::new("Direction", Host::Arguments))
            .with_declaration(PropertyDecl::new("Timeout", Host::Methods))
            .with_declaration(PropertyDecl::new("Signed", Host::Integers))
    }

    #[test]
    fn test_filters_by_all_hosts_in_spec_order() {
        let spec = spec();
        let arg = Element::new(ElementId(1), "count")
            .with_host(Host::Arguments)
            .with_host(Host::Integers);

        let names: Vec<&str> = HostIndex::new()
            .applicable_declarations(&spec, &arg)
            .unwrap()
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Width", "Direction", "Signed"]);
    }

    #[test]
    fn test_host_without_declarations_is_empty() {
        let spec = spec();
        let iface = Element::new(ElementId(2), "Api").with_host(Host::Interfaces);
        let decls = HostIndex.applicable_declarations(&spec, &iface).unwrap();
        assert!(decls.is_empty());
    }

    #[test]
    fn test_no_hosts_is_unresolved() {
        let spec = spec();
        let orphan = Element::new(ElementId(3), "orphan");
        let err = HostIndex.applicable_declarations(&spec, &orphan).unwrap_err();
        assert!(matches!(err, Error::UnresolvedElementType { .. }));
    }
}
