//! Core vCard types (RFC 6350).

pub mod address;
pub mod parameter;
pub mod version;


pub use address::{ADR, AddressProperty};
pub use parameter::{
    AddressTypeParameter, ParameterCategory, ParameterRegistry, VCardParameter, VCardParameters,
    ValueOrigin, VersionedValue,
};
pub use version::VCardVersion;
