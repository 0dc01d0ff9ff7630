//! Values of the `TYPE` parameter on ADR (and LABEL) properties.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use super::registry::ParameterRegistry;
use super::versioned::sealed::Sealed;
use super::versioned::{ParameterCategory, ValueOrigin, VersionedValue};
use crate::rfc::vcard::core::version::VCardVersion;

/// Versions that still define the delivery-kind types dropped by RFC 6350.
const LEGACY: &[VCardVersion] = &[VCardVersion::V2_1, VCardVersion::V3];

static HOME_VALUE: VersionedValue = VersionedValue::well_known("home", &[]);
static WORK_VALUE: VersionedValue = VersionedValue::well_known("work", &[]);
static DOM_VALUE: VersionedValue = VersionedValue::well_known("dom", LEGACY);
static INTL_VALUE: VersionedValue = VersionedValue::well_known("intl", LEGACY);
static POSTAL_VALUE: VersionedValue = VersionedValue::well_known("postal", LEGACY);
static PARCEL_VALUE: VersionedValue = VersionedValue::well_known("parcel", LEGACY);
static PREF_VALUE: VersionedValue = VersionedValue::well_known("pref", LEGACY);

static WELL_KNOWN: [AddressTypeParameter; 7] = [
    AddressTypeParameter::HOME,
    AddressTypeParameter::WORK,
    AddressTypeParameter::DOM,
    AddressTypeParameter::INTL,
    AddressTypeParameter::POSTAL,
    AddressTypeParameter::PARCEL,
    AddressTypeParameter::PREF,
];

static REGISTRY: LazyLock<ParameterRegistry<AddressTypeParameter>> =
    LazyLock::new(|| ParameterRegistry::new(AddressTypeParameter::well_known()));

/// An ADR `TYPE` value.
///
/// Handles compare by identity: every handle for `"home"`, `"HOME"` or
/// `"Home"` obtained through [`AddressTypeParameter::get`] is equal to
/// [`AddressTypeParameter::HOME`], and two custom values are equal only if
/// the registry minted them from the same text.
#[derive(Clone, Copy)]
pub struct AddressTypeParameter(&'static VersionedValue);

impl AddressTypeParameter {
    /// Supported in 2.1, 3.0 and 4.0.
    pub const HOME: Self = Self(&HOME_VALUE);
    /// Supported in 2.1, 3.0 and 4.0.
    pub const WORK: Self = Self(&WORK_VALUE);
    /// Supported in 2.1 and 3.0.
    pub const DOM: Self = Self(&DOM_VALUE);
    /// Supported in 2.1 and 3.0.
    pub const INTL: Self = Self(&INTL_VALUE);
    /// Supported in 2.1 and 3.0.
    pub const POSTAL: Self = Self(&POSTAL_VALUE);
    /// Supported in 2.1 and 3.0.
    pub const PARCEL: Self = Self(&PARCEL_VALUE);
    /// Supported in 2.1 and 3.0. Version 4.0 expresses preference through
    /// the `PREF` parameter instead.
    pub const PREF: Self = Self(&PREF_VALUE);

    /// Searches the well-known values only; see [`ParameterRegistry::find`].
    #[must_use]
    pub fn find(value: &str) -> Option<Self> {
        REGISTRY.find(value)
    }

    /// Returns the canonical value, creating a custom one if needed; see
    /// [`ParameterRegistry::get`].
    #[must_use]
    pub fn get(value: &str) -> Self {
        REGISTRY.get(value)
    }

    /// Returns the well-known values.
    #[must_use]
    pub fn all() -> &'static [Self] {
        REGISTRY.all()
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.0.value()
    }

    #[must_use]
    pub fn supported_versions(self) -> &'static [VCardVersion] {
        self.0.supported_versions()
    }

    #[must_use]
    pub fn is_supported(self, version: VCardVersion) -> bool {
        self.0.is_supported(version)
    }

    #[must_use]
    pub fn is_well_known(self) -> bool {
        self.0.origin() == ValueOrigin::WellKnown
    }
}

impl ParameterCategory for AddressTypeParameter {
    const NAME: &'static str = "TYPE";

    fn well_known() -> &'static [Self] {
        &WELL_KNOWN
    }

    fn as_value(self) -> &'static VersionedValue {
        self.0
    }

    fn registry() -> &'static ParameterRegistry<Self> {
        &REGISTRY
    }
}

impl Sealed for AddressTypeParameter {
    fn from_value(value: &'static VersionedValue) -> Self {
        Self(value)
    }
}

impl PartialEq for AddressTypeParameter {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for AddressTypeParameter {}

impl Hash for AddressTypeParameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl fmt::Debug for AddressTypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AddressTypeParameter")
            .field(&self.value())
            .finish()
    }
}

impl fmt::Display for AddressTypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
