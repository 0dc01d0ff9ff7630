//! ## Summary
//! Decides whether validation warnings are fatal.

use kunai_core::config::ValidationConfig;
use kunai_core::error::CoreError;

use super::{Validate, ValidationWarning};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::VCardVersion;

/// ## Summary
/// Target version plus strictness for a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    pub target: VCardVersion,
    /// When set, any warning fails the check.
    pub strict: bool,
}

impl ValidationPolicy {
    #[must_use]
    pub const fn lenient(target: VCardVersion) -> Self {
        Self {
            target,
            strict: false,
        }
    }

    #[must_use]
    pub const fn strict(target: VCardVersion) -> Self {
        Self {
            target,
            strict: true,
        }
    }

    /// ## Summary
    /// Builds a policy from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if `target_version` is not a known vCard version.
    pub fn from_config(config: &ValidationConfig) -> RfcResult<Self> {
        let target = VCardVersion::from_str(&config.target_version).ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "unknown vCard version: {}",
                config.target_version
            ))
        })?;

        Ok(Self {
            target,
            strict: config.strict,
        })
    }

    /// ## Summary
    /// Validates `property` against the target version.
    ///
    /// ## Errors
    /// In strict mode, returns `RfcError::ValidationError` listing every
    /// warning if there is at least one.
    pub fn check<P: Validate>(&self, property: &P) -> RfcResult<Vec<ValidationWarning>> {
        let warnings = property.warnings(self.target);

        tracing::debug!(
            version = %self.target,
            strict = self.strict,
            count = warnings.len(),
            "Validated property"
        );

        if self.strict && !warnings.is_empty() {
            let message = warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            return Err(RfcError::ValidationError(message));
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{AddressProperty, AddressTypeParameter};

    fn config(version: &str, strict: bool) -> ValidationConfig {
        ValidationConfig {
            target_version: version.to_string(),
            strict,
        }
    }

    fn legacy_address() -> AddressProperty {
        let mut adr = AddressProperty::new();
        adr.add_type(AddressTypeParameter::HOME);
        adr.add_type(AddressTypeParameter::PARCEL);
        adr
    }

    #[test]
    fn from_config_parses_version() {
        let policy = ValidationPolicy::from_config(&config("3.0", true)).unwrap();
        assert_eq!(policy, ValidationPolicy::strict(VCardVersion::V3));
    }

    #[test]
    fn from_config_rejects_unknown_version() {
        let result = ValidationPolicy::from_config(&config("5.0", false));
        assert!(matches!(
            result,
            Err(RfcError::CoreError(CoreError::InvalidInput(_)))
        ));
    }

    #[test]
    fn lenient_returns_warnings() {
        let policy = ValidationPolicy::lenient(VCardVersion::V4);
        let warnings = policy.check(&legacy_address()).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].value, "parcel");
    }

    #[test_log::test]
    fn strict_fails_on_warning() {
        let policy = ValidationPolicy::strict(VCardVersion::V4);
        match policy.check(&legacy_address()) {
            Err(RfcError::ValidationError(message)) => {
                assert!(message.contains("\"parcel\""));
                assert!(message.contains("4.0"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_passes_when_supported() {
        let policy = ValidationPolicy::strict(VCardVersion::V3);
        assert!(policy.check(&legacy_address()).unwrap().is_empty());
    }
}
