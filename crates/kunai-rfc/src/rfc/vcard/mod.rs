//! vCard parameter values and property validation (RFC 6350).
//!
//! ## Overview
//!
//! vCard parameter values such as the ADR `TYPE` values are interned per
//! category: [`AddressTypeParameter::get`] always returns the same object for
//! the same text (ignoring ASCII case), so values compare by identity.
//! Each value records which vCard versions define it, and properties
//! validate their attached values against a target [`VCardVersion`].
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::validation::Validate;
//! use kunai_rfc::rfc::vcard::{AddressProperty, AddressTypeParameter, VCardVersion};
//!
//! let mut adr = AddressProperty::new();
//! adr.street_address = Some("123 Main St".to_string());
//! adr.add_type(AddressTypeParameter::WORK);
//! adr.add_type(AddressTypeParameter::get("x-warehouse"));
//! adr.add_type(AddressTypeParameter::INTL);
//!
//! let warnings = adr.warnings(VCardVersion::V4);
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].value, "intl");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`AddressProperty`, `AddressTypeParameter`, `VCardVersion`, etc.)

pub mod core;

// Re-export commonly used types
pub use self::core::{
    AddressProperty, AddressTypeParameter, ParameterCategory, ParameterRegistry, VCardParameter,
    VCardParameters, VCardVersion, ValueOrigin, VersionedValue,
};
