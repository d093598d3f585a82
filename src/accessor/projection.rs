//! Type-checked projection of raw property values.
//!
//! A projection never converts between kinds. A raw value either matches the
//! requested kind and shape exactly, or the projection yields `None`.

use crate::model::{PropertyValue, Scalar, ScalarKind};

/// A scalar kind that raw values can be projected onto.
pub trait Projection {
    type Output;

    const KIND: ScalarKind;

    fn project(scalar: &Scalar) -> Option<Self::Output>;
}

/// Boolean token, `true` only for the exact token `"true"`.
#[derive(Debug, Clone, Copy)]
pub struct AsBool;

#[derive(Debug, Clone, Copy)]
pub struct AsInt;

#[derive(Debug, Clone, Copy)]
pub struct AsString;

/// Enum literal, projected to its name.
#[derive(Debug, Clone, Copy)]
pub struct AsEnum;

impl Projection for AsBool {
    type Output = bool;
    const KIND: ScalarKind = ScalarKind::Boolean;

    fn project(scalar: &Scalar) -> Option<bool> {
        scalar.as_bool()
    }
}

impl Projection for AsInt {
    type Output = i64;
    const KIND: ScalarKind = ScalarKind::Integer;

    fn project(scalar: &Scalar) -> Option<i64> {
        scalar.as_int()
    }
}

impl Projection for AsString {
    type Output = String;
    const KIND: ScalarKind = ScalarKind::String;

    fn project(scalar: &Scalar) -> Option<String> {
        scalar.as_str().map(str::to_owned)
    }
}

impl Projection for AsEnum {
    type Output = String;
    const KIND: ScalarKind = ScalarKind::Enum;

    fn project(scalar: &Scalar) -> Option<String> {
        scalar.as_enum().map(str::to_owned)
    }
}

/// Project a single-shaped value. Arrays never project as singles.
pub fn project_single<K: Projection>(raw: &PropertyValue) -> Option<K::Output> {
    K::project(raw.as_single()?)
}

/// Project an array-shaped value, all or nothing.
///
/// One element of the wrong kind discards the whole array.
pub fn project_array<K: Projection>(raw: &PropertyValue) -> Option<Vec<K::Output>> {
    raw.as_array()?.iter().map(K::project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumLiteral;

    #[test]
    fn test_single_requires_single_shape() {
        let v = PropertyValue::integer(5);
        assert_eq!(project_single::<AsInt>(&v), Some(5));
        assert_eq!(project_array::<AsInt>(&v), None);
        assert_eq!(project_single::<AsString>(&v), None);
    }

    #[test]
    fn test_array_is_atomic() {
        let ok = PropertyValue::from(vec!["a", "b"]);
        assert_eq!(
            project_array::<AsString>(&ok),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let mixed = PropertyValue::Array(vec![Scalar::from("a"), Scalar::Integer(1)]);
        assert_eq!(project_array::<AsString>(&mixed), None);
        assert_eq!(project_array::<AsInt>(&mixed), None);
    }

    #[test]
    fn test_empty_array_projects_for_every_kind() {
        let empty = PropertyValue::Array(vec![]);
        assert_eq!(project_array::<AsBool>(&empty), Some(vec![]));
        assert_eq!(project_array::<AsEnum>(&empty), Some(vec![]));
    }

    #[test]
    fn test_bool_tokens() {
        let tokens = ["true", "True", "TRUE", "false", "", "1"];
        let got: Vec<Option<bool>> = tokens
            .iter()
            .map(|t| project_single::<AsBool>(&PropertyValue::boolean(*t)))
            .collect();
        assert_eq!(
            got,
            vec![Some(true), Some(false), Some(false), Some(false), Some(false), Some(false)]
        );
    }

    #[test]
    fn test_enum_projects_name() {
        let v = PropertyValue::Array(vec![
            Scalar::Enum(EnumLiteral::new("Low")),
            Scalar::Enum(EnumLiteral::new("High")),
        ]);
        assert_eq!(
            project_array::<AsEnum>(&v),
            Some(vec!["Low".to_string(), "High".to_string()])
        );
        assert_eq!(project_single::<AsEnum>(&PropertyValue::string("Low")), None);
        assert_eq!(AsEnum::KIND, ScalarKind::Enum);
    }
}
