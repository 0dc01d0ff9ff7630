//! Command-line handling for `kunai`.

use clap::Parser;
use kunai_rfc::error::RfcResult;
use kunai_rfc::rfc::validation::{TracingSink, ValidationPolicy, ValidationWarning, WarningSink};
use kunai_rfc::rfc::vcard::{AddressProperty, AddressTypeParameter, VCardVersion};

/// Validates ADR `TYPE` values against a vCard version.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "kunai", version, about = "Check ADR TYPE values against a vCard version")]
pub struct Args {
    /// Target version (2.1, 3.0 or 4.0); overrides the configured one.
    #[arg(long, value_name = "VERSION", value_parser = parse_version)]
    pub target: Option<VCardVersion>,
    /// Fail when any value is unsupported.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// ADR `TYPE` values to check.
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,
}

impl Args {
    /// Applies the command-line overrides on top of the configured policy.
    #[must_use]
    pub fn apply(&self, policy: ValidationPolicy) -> ValidationPolicy {
        ValidationPolicy {
            target: self.target.unwrap_or(policy.target),
            strict: policy.strict || self.strict,
        }
    }
}

fn parse_version(value: &str) -> Result<VCardVersion, String> {
    VCardVersion::from_str(value).ok_or_else(|| format!("unknown vCard version: {value}"))
}

/// ## Summary
/// Builds an ADR carrying `types` and validates it under `policy`, logging
/// every warning.
///
/// ## Errors
/// Returns an error in strict mode if any type is unsupported.
pub fn check_types(
    types: &[String],
    policy: ValidationPolicy,
) -> RfcResult<Vec<ValidationWarning>> {
    let mut adr = AddressProperty::new();
    for text in types {
        let type_value = AddressTypeParameter::get(text);
        tracing::debug!(
            value = %type_value,
            well_known = type_value.is_well_known(),
            "Attaching TYPE value"
        );
        adr.add_type(type_value);
    }

    let warnings = policy.check(&adr)?;
    let mut sink = TracingSink;
    for warning in &warnings {
        sink.warn(warning.clone());
    }
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("kunai").chain(list.iter().copied()))
    }

    #[test]
    fn parse_flags_and_types() {
        let parsed = parse(&["home", "--target", "3.0", "--strict", "dom"]).unwrap();
        assert_eq!(parsed.target, Some(VCardVersion::V3));
        assert!(parsed.strict);
        assert_eq!(parsed.types, ["home", "dom"]);
    }

    #[test]
    fn parse_defaults() {
        let parsed = parse(&["x-dock"]).unwrap();
        assert_eq!(parsed.target, None);
        assert!(!parsed.strict);
        assert_eq!(parsed.types, ["x-dock"]);
    }

    #[test]
    fn parse_rejects_bad_target() {
        assert!(parse(&["--target", "9.9"]).is_err());
        assert!(parse(&["--target"]).is_err());
    }

    #[test]
    fn parse_rejects_unknown_flags() {
        let err = parse(&["--verbose", "home"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn overrides_apply_on_top_of_config() {
        let parsed = parse(&["--target", "2.1"]).unwrap();
        let policy = parsed.apply(ValidationPolicy::strict(VCardVersion::V4));
        assert_eq!(policy, ValidationPolicy::strict(VCardVersion::V2_1));
    }

    #[test_log::test]
    fn check_types_reports_legacy_values() {
        let warnings = check_types(
            &args(&["HOME", "Postal", "pref", "x-dock"]),
            ValidationPolicy::lenient(VCardVersion::V4),
        )
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].value, "postal");
    }

    #[test]
    fn check_types_strict_fails() {
        let result = check_types(
            &args(&["intl"]),
            ValidationPolicy::strict(VCardVersion::V4),
        );
        assert!(result.is_err());
    }
}
