//! vCard parameter values and property validation.
//!
//! ```rust
//! use kunai_rfc::rfc::validation::Validate;
//! use kunai_rfc::rfc::vcard::{AddressProperty, AddressTypeParameter, VCardVersion};
//!
//! let mut adr = AddressProperty::new();
//! adr.add_type(AddressTypeParameter::get("HOME"));
//! adr.add_type(AddressTypeParameter::DOM);
//!
//! assert!(adr.types().contains(&AddressTypeParameter::HOME));
//! assert_eq!(adr.warnings(VCardVersion::V4).len(), 1);
//! assert!(adr.warnings(VCardVersion::V3).is_empty());
//! ```

pub mod error;
pub mod rfc;
