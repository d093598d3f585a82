//! # Declaration Index Trait
//!
//! The contract between the property accessor and whatever knows which
//! declarations of a specification apply to a given element.
//!
//! ## Implementations
//!
//! | Index | Module | Description |
//! |-------|--------|-------------|
//! | `HostIndex` | `host` | Filters declarations by the element's hosts |

pub mod host;

use crate::element::ModelElement;
use crate::model::{PropertyDecl, Specification};
use crate::Result;

pub use host::HostIndex;

/// Lookup of the declarations applicable to an element.
///
/// Returned declarations are ordered; the accessor scans them first-match.
/// An element whose type cannot be resolved at all is an integration bug and
/// must be reported as [`Error::UnresolvedElementType`](crate::Error::UnresolvedElementType),
/// never as an empty list.
pub trait DeclarationIndex: Send + Sync {
    fn applicable_declarations<'s>(
        &self,
        spec: &'s Specification,
        element: &dyn ModelElement,
    ) -> Result<Vec<&'s PropertyDecl>>;
}

impl<T: DeclarationIndex + ?Sized> DeclarationIndex for std::sync::Arc<T> {
    fn applicable_declarations<'s>(
        &self,
        spec: &'s Specification,
        element: &dyn ModelElement,
    ) -> Result<Vec<&'s PropertyDecl>> {
        (**self).applicable_declarations(spec, element)
    }
}
