//! # deploymodel-rs — Typed Property Resolution for Deployment Models
//!
//! Reads deployment properties off model elements with the precedence a
//! deployment specification defines: explicit value, then declared default,
//! then nothing. Every read names the kind and shape it expects and gets
//! `None` back when the value is missing or of another kind.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `ModelElement` and `DeclarationIndex` are the contracts
//!    with whatever loads the model
//! 2. **Closed value type**: `PropertyValue` is a sum type, projections match
//!    on it exhaustively
//! 3. **Absent is a value**: unset and mistyped both read as `Ok(None)`;
//!    `Err` means a caller or integration bug
//! 4. **Read-only**: nothing here mutates the model, so an accessor can be
//!    shared across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use deploymodel::{Element, ElementId, Host, PropertyAccessor, PropertyDecl, Specification};
//!
//! # fn example() -> deploymodel::Result<()> {
//! let retry = Arc::new(PropertyDecl::new("Retry", Host::Methods));
//! let spec = Specification::new("org.example.ipc")
//!     .with_declaration((*retry).clone())
//!     .with_declaration(PropertyDecl::new("Timeout", Host::Methods).with_default(30));
//!
//! let method = Element::new(ElementId(1), "ping")
//!     .with_host(Host::Methods)
//!     .with_property(retry, vec![1, 2, 3]);
//!
//! let accessor = PropertyAccessor::new(Arc::new(spec));
//! assert_eq!(accessor.get_integer_array(&method, "Retry")?, Some(vec![1, 2, 3]));
//! assert_eq!(accessor.get_integer(&method, "Timeout")?, Some(30));
//! assert_eq!(accessor.get_string(&method, "Timeout")?, None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod element;
pub mod index;
pub mod accessor;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Element, ElementId, EnumLiteral, Host, Property, PropertyDecl, PropertyFlag,
    PropertyValue, Scalar, ScalarKind, Shape, Specification,
};

// ============================================================================
// Re-exports: Collaborator traits
// ============================================================================

pub use element::ModelElement;
pub use index::{DeclarationIndex, HostIndex};

// ============================================================================
// Re-exports: Accessor
// ============================================================================

pub use accessor::{EffectiveProperty, Origin, PropertyAccessor, Resolved};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Property name must not be empty")]
    EmptyPropertyName,

    #[error("Cannot resolve type of element {element} in deployment spec {spec}")]
    UnresolvedElementType { element: String, spec: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
