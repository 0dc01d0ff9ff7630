//! vCard parameter types (RFC 6350 §5).

mod address_type;
mod registry;
mod versioned;


use std::collections::HashSet;

pub use address_type::AddressTypeParameter;
pub use registry::ParameterRegistry;
pub use versioned::{ParameterCategory, ValueOrigin, VersionedValue};

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

/// The parameters attached to one property, keyed by uppercased name.
///
/// Keeps the order in which parameter names were first added. Each name
/// appears at most once; repeated values accumulate on that entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCardParameters {
    params: Vec<VCardParameter>,
}

impl VCardParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(VCardParameter::value)
    }

    /// Returns every value of a parameter, empty if it is absent.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|p| p.values.as_slice())
            .unwrap_or_default()
    }

    /// Returns whether a parameter carries the value (case-insensitive).
    #[must_use]
    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        self.get(name).is_some_and(|p| p.has_value(value))
    }

    /// Appends a value to a parameter, creating the parameter if needed.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        if let Some(param) = self.get_mut(name) {
            param.values.push(value.into());
        } else {
            self.params.push(VCardParameter::new(name, value));
        }
    }

    /// Replaces all values of a parameter; `None` removes it.
    pub fn set(&mut self, name: &str, value: Option<impl Into<String>>) {
        match value {
            Some(value) => {
                if let Some(param) = self.get_mut(name) {
                    param.values = vec![value.into()];
                } else {
                    self.params.push(VCardParameter::new(name, value));
                }
            }
            None => self.remove_all(name),
        }
    }

    /// Removes every occurrence of a value (case-insensitive). The parameter
    /// itself is dropped once it has no values left.
    pub fn remove_value(&mut self, name: &str, value: &str) {
        if let Some(param) = self.get_mut(name) {
            param.values.retain(|v| !v.eq_ignore_ascii_case(value));
        }
        self.params.retain(|p| !p.values.is_empty());
    }

    /// Removes the first occurrence of a value (case-insensitive). The
    /// parameter itself is dropped once it has no values left.
    pub fn remove_first_value(&mut self, name: &str, value: &str) {
        if let Some(param) = self.get_mut(name) {
            let index = param.values.iter().position(|v| v.eq_ignore_ascii_case(value));
            if let Some(index) = index {
                param.values.remove(index);
            }
        }
        self.params.retain(|p| !p.values.is_empty());
    }

    /// Removes a parameter and all of its values.
    pub fn remove_all(&mut self, name: &str) {
        self.params.retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    /// Resolves the values of a category's parameter through its registry.
    #[must_use]
    pub fn resolve<T: ParameterCategory>(&self) -> HashSet<T> {
        let registry = T::registry();
        self.values(T::NAME)
            .iter()
            .map(|v| registry.get(v))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VCardParameter> {
        self.params.iter()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut VCardParameter> {
        self.params
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Common parameter names as constants.
pub mod names {
    pub const TYPE: &str = "TYPE";
    pub const PREF: &str = "PREF";
    pub const ALTID: &str = "ALTID";
    pub const LANGUAGE: &str = "LANGUAGE";
    pub const PID: &str = "PID";
    pub const GEO: &str = "GEO";
    pub const TZ: &str = "TZ";
    pub const LABEL: &str = "LABEL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_single_value() {
        let param = VCardParameter::new("type", "home");
        assert_eq!(param.name, "TYPE");
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = VCardParameter::multi("TYPE", vec!["home".into(), "work".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("HOME"));
        assert!(param.has_value("work"));
        assert!(!param.has_value("cell"));
    }

    #[test]
    fn parameters_accumulate_under_one_name() {
        let mut params = VCardParameters::new();
        params.add("type", "home");
        params.add("TYPE", "postal");
        params.add("LABEL", "1 Main St");

        assert_eq!(params.values("Type"), ["home", "postal"]);
        assert_eq!(params.iter().count(), 2);
        assert_eq!(params.first("label"), Some("1 Main St"));
    }

    #[test]
    fn parameters_set_replaces_and_clears() {
        let mut params = VCardParameters::new();
        params.add("TZ", "America/New_York");
        params.add("TZ", "-0500");

        params.set("TZ", Some("Europe/Paris"));
        assert_eq!(params.values("TZ"), ["Europe/Paris"]);

        params.set("TZ", None::<String>);
        assert!(params.get("TZ").is_none());
        assert!(params.is_empty());
    }

    #[test]
    fn parameters_remove_value_ignores_case() {
        let mut params = VCardParameters::new();
        params.add("TYPE", "HOME");
        params.add("TYPE", "work");

        params.remove_value("TYPE", "home");
        assert_eq!(params.values("TYPE"), ["work"]);
        assert!(!params.contains_value("TYPE", "home"));

        params.remove_value("TYPE", "WORK");
        assert!(params.get("TYPE").is_none());
    }

    #[test]
    fn parameters_remove_first_value_keeps_repeats() {
        let mut params = VCardParameters::new();
        params.add("TYPE", "HOME");
        params.add("TYPE", "work");
        params.add("TYPE", "home");

        params.remove_first_value("TYPE", "home");
        assert_eq!(params.values("TYPE"), ["work", "home"]);

        params.remove_first_value("TYPE", "home");
        params.remove_first_value("TYPE", "work");
        assert!(params.get("TYPE").is_none());
    }

    #[test]
    fn missing_parameter_has_no_values() {
        let params = VCardParameters::new();
        assert!(params.values("PID").is_empty());
        assert_eq!(params.first("PID"), None);
    }

    #[test]
    fn resolve_maps_text_through_registry() {
        let mut params = VCardParameters::new();
        params.add(names::TYPE, "Work");
        params.add(names::TYPE, "dom");

        let types = params.resolve::<AddressTypeParameter>();
        assert_eq!(types.len(), 2);
        assert!(types.contains(&AddressTypeParameter::WORK));
        assert!(types.contains(&AddressTypeParameter::DOM));
    }
}
