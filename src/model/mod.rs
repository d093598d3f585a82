//! # Deployment Model
//!
//! Plain data describing a deployment: specifications with their property
//! declarations, and elements carrying explicitly set property values.
//!
//! Design rule: this module is pure data — no I/O, no state, no lookups
//! beyond simple accessors. Resolution lives in [`crate::accessor`].

pub mod value;
pub mod declaration;
pub mod specification;
pub mod element;

pub use value::{EnumLiteral, PropertyValue, Scalar, ScalarKind, Shape};
pub use declaration::{Host, PropertyDecl, PropertyFlag};
pub use specification::Specification;
pub use element::{Element, ElementId, Property};
