//! Parameter values whose legality depends on the vCard version.

use std::borrow::Cow;
use std::hash::Hash;

use super::registry::ParameterRegistry;
use crate::rfc::vcard::core::version::VCardVersion;

/// Where a parameter value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// Defined by a vCard RFC; fixed spelling and version support.
    WellKnown,
    /// Any other text, minted on first lookup and assumed supported everywhere.
    Custom,
}

/// One legal value of a parameter category, e.g. `home` for ADR `TYPE`.
///
/// Values are interned: each lives for the rest of the process and is only
/// ever handed out by reference, so two values are the same value exactly
/// when they are the same object. Only this crate creates them; callers get
/// them from a category's constants or its registry.
///
/// ```compile_fail
/// use kunai_rfc::rfc::vcard::{VCardVersion, VersionedValue};
///
/// static SECOND_HOME: VersionedValue =
///     VersionedValue::well_known("home", &[VCardVersion::V2_1]);
/// ```
#[derive(Debug)]
pub struct VersionedValue {
    value: Cow<'static, str>,
    supported: &'static [VCardVersion],
    origin: ValueOrigin,
}

impl VersionedValue {
    /// Creates a well-known value.
    ///
    /// An empty `supported` slice means every version supports the value.
    #[must_use]
    pub(crate) const fn well_known(value: &'static str, supported: &'static [VCardVersion]) -> Self {
        Self {
            value: Cow::Borrowed(value),
            supported,
            origin: ValueOrigin::WellKnown,
        }
    }

    /// Creates a custom value. The version that introduced it is unknown, so
    /// it is treated as supported everywhere.
    pub(crate) fn custom(value: impl Into<String>) -> Self {
        Self {
            value: Cow::Owned(value.into()),
            supported: &[],
            origin: ValueOrigin::Custom,
        }
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the versions this value is defined for. Empty means all.
    #[must_use]
    pub const fn supported_versions(&self) -> &'static [VCardVersion] {
        self.supported
    }

    #[must_use]
    pub const fn origin(&self) -> ValueOrigin {
        self.origin
    }

    /// Returns whether the value may appear in a vCard of the given version.
    #[must_use]
    pub fn is_supported(&self, version: VCardVersion) -> bool {
        self.supported.is_empty() || self.supported.contains(&version)
    }

    /// Case-insensitive comparison against raw parameter text.
    pub(crate) fn matches(&self, text: &str) -> bool {
        self.value.eq_ignore_ascii_case(text)
    }
}

pub(crate) mod sealed {
    use super::VersionedValue;

    /// Wraps an interned value in its category handle. Only the registry
    /// calls this, with values it owns.
    pub trait Sealed {
        fn from_value(value: &'static VersionedValue) -> Self;
    }
}

/// A family of parameter values sharing one registry, such as the values of
/// the ADR `TYPE` parameter.
///
/// Implementors are cheap handles around a `&'static VersionedValue` whose
/// `Eq` and `Hash` compare the referenced object, not its text. The trait is
/// sealed: categories are defined in this crate.
///
/// ```compile_fail
/// use kunai_rfc::rfc::vcard::{ParameterCategory, ParameterRegistry, VersionedValue};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// struct Forged(&'static VersionedValue);
///
/// impl ParameterCategory for Forged {
///     const NAME: &'static str = "TYPE";
///     fn well_known() -> &'static [Self] { &[] }
///     fn as_value(self) -> &'static VersionedValue { self.0 }
///     fn registry() -> &'static ParameterRegistry<Self> { unimplemented!() }
/// }
/// ```
pub trait ParameterCategory: sealed::Sealed + Copy + Eq + Hash + Send + Sync + 'static {
    /// Parameter name the values are attached under.
    const NAME: &'static str;

    /// The values predefined by the vCard RFCs.
    fn well_known() -> &'static [Self];

    fn as_value(self) -> &'static VersionedValue;

    /// The process-wide registry for this category.
    fn registry() -> &'static ParameterRegistry<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEGACY_ONLY: VersionedValue =
        VersionedValue::well_known("legacy", &[VCardVersion::V2_1, VCardVersion::V3]);

    #[test]
    fn empty_support_means_every_version() {
        let value = VersionedValue::well_known("everywhere", &[]);
        for version in VCardVersion::ALL {
            assert!(value.is_supported(version));
        }
    }

    #[test]
    fn restricted_support() {
        assert!(LEGACY_ONLY.is_supported(VCardVersion::V2_1));
        assert!(LEGACY_ONLY.is_supported(VCardVersion::V3));
        assert!(!LEGACY_ONLY.is_supported(VCardVersion::V4));
        assert_eq!(LEGACY_ONLY.origin(), ValueOrigin::WellKnown);
    }

    #[test]
    fn custom_value_keeps_spelling() {
        let value = VersionedValue::custom("X-Vacation");
        assert_eq!(value.value(), "X-Vacation");
        assert_eq!(value.origin(), ValueOrigin::Custom);
        assert!(value.supported_versions().is_empty());
        assert!(value.matches("x-vacation"));
        assert!(!value.matches("x-vacations"));
    }
}
