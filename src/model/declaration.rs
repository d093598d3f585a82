//! Property declarations and the hosts they apply to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PropertyValue;

/// The kind of model element a property declaration applies to.
///
/// Type-based hosts (`Strings`, `Integers`, ...) apply to any element whose
/// type falls in that category, in addition to its structural host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Host {
    Providers,
    Instances,
    Interfaces,
    TypeCollections,
    Attributes,
    Methods,
    Broadcasts,
    Arguments,
    Structs,
    Unions,
    StructFields,
    UnionFields,
    Arrays,
    Enumerations,
    Enumerators,
    Typedefs,
    Strings,
    Numbers,
    Integers,
    Floats,
    Booleans,
    ByteBuffers,
    /// Host defined by an extension of the deployment language.
    Custom(String),
}

impl Host {
    pub fn keyword(&self) -> &str {
        match self {
            Host::Providers => "providers",
            Host::Instances => "instances",
            Host::Interfaces => "interfaces",
            Host::TypeCollections => "type_collections",
            Host::Attributes => "attributes",
            Host::Methods => "methods",
            Host::Broadcasts => "broadcasts",
            Host::Arguments => "arguments",
            Host::Structs => "structs",
            Host::Unions => "unions",
            Host::StructFields => "struct_fields",
            Host::UnionFields => "union_fields",
            Host::Arrays => "arrays",
            Host::Enumerations => "enumerations",
            Host::Enumerators => "enumerators",
            Host::Typedefs => "typedefs",
            Host::Strings => "strings",
            Host::Numbers => "numbers",
            Host::Integers => "integers",
            Host::Floats => "floats",
            Host::Booleans => "booleans",
            Host::ByteBuffers => "byte_buffers",
            Host::Custom(name) => name,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Modifier attached to a property declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyFlag {
    /// The property may be left unset.
    Optional,
    /// Fallback used when the element sets no explicit value.
    Default(PropertyValue),
}

impl PropertyFlag {
    pub fn default_value(&self) -> Option<&PropertyValue> {
        match self {
            PropertyFlag::Default(v) => Some(v),
            PropertyFlag::Optional => None,
        }
    }
}

/// Specification-level definition of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub host: Host,
    #[serde(default)]
    pub flags: Vec<PropertyFlag>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, host: Host) -> Self {
        Self {
            name: name.into(),
            host,
            flags: Vec::new(),
        }
    }

    pub fn with_flag(mut self, flag: PropertyFlag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn with_default(self, value: impl Into<PropertyValue>) -> Self {
        self.with_flag(PropertyFlag::Default(value.into()))
    }

    pub fn optional(self) -> Self {
        self.with_flag(PropertyFlag::Optional)
    }

    /// First default carried by the flags, in flag order.
    pub fn default_value(&self) -> Option<&PropertyValue> {
        self.flags.iter().find_map(PropertyFlag::default_value)
    }

    pub fn is_optional(&self) -> bool {
        self.flags.iter().any(|f| matches!(f, PropertyFlag::Optional))
    }
}
