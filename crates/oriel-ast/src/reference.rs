//! Identifier and function reference annotations

use oriel_types::Value;
use serde::{Deserialize, Serialize};

/// What an identifier or call site resolved to during checking: a
/// qualified name, a set of function overload ids, or a constant such
/// as an enum value folded at check time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceInfo {
    /// Qualified identifier name, empty for function references
    pub name: String,
    /// Overload ids, deduplicated, first-seen order
    pub overload_ids: Vec<String>,
    /// Constant the reference folded to, if any
    pub value: Option<Value>,
}

impl ReferenceInfo {
    /// A reference to an identifier, optionally carrying the constant
    /// it resolved to.
    pub fn new_ident_reference(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            overload_ids: Vec::new(),
            value,
        }
    }

    /// A reference to a set of function overloads.
    pub fn new_function_reference<I, S>(overloads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut info = Self::default();
        for id in overloads {
            info.add_overload(id);
        }
        info
    }

    /// Append an overload id unless it is already present.
    pub fn add_overload(&mut self, overload_id: impl Into<String>) {
        let overload_id = overload_id.into();
        if !self.overload_ids.contains(&overload_id) {
            self.overload_ids.push(overload_id);
        }
    }
}

/// Equality treats the overload ids as a set: order is preserved for
/// determinism but carries no meaning.
impl PartialEq for ReferenceInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.overload_ids.len() == other.overload_ids.len()
            && other
                .overload_ids
                .iter()
                .all(|id| self.overload_ids.contains(id))
            && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_overload_dedups() {
        let mut info = ReferenceInfo::default();
        info.add_overload("add_int64");
        info.add_overload("add_int64");
        assert_eq!(info.overload_ids, vec!["add_int64"]);
    }

    #[test]
    fn test_function_reference_preserves_first_seen_order() {
        let info = ReferenceInfo::new_function_reference(["add_double", "add_int64", "add_double"]);
        assert_eq!(info.overload_ids, vec!["add_double", "add_int64"]);
    }

    #[test]
    fn test_equality_ignores_overload_order() {
        let a = ReferenceInfo::new_function_reference(["add_int64", "add_double"]);
        let b = ReferenceInfo::new_function_reference(["add_double", "add_int64"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_checks_membership_not_just_length() {
        let a = ReferenceInfo::new_function_reference(["add_int64", "add_double"]);
        let b = ReferenceInfo::new_function_reference(["add_int64", "add_uint64"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_on_name_and_value() {
        let a = ReferenceInfo::new_ident_reference("x", None);
        let b = ReferenceInfo::new_ident_reference("x", None);
        let c = ReferenceInfo::new_ident_reference("y", None);
        let d = ReferenceInfo::new_ident_reference("x", Some(Value::Int(1)));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(d, ReferenceInfo::new_ident_reference("x", Some(Value::Int(1))));
    }
}
