//! ## Summary
//! Validation warnings and the sinks that collect them.

use std::fmt;

use crate::rfc::vcard::core::VCardVersion;

/// ## Summary
/// A parameter value that the target version does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Name of the property carrying the value (e.g. `ADR`).
    pub property: &'static str,
    /// The offending value as spelled on the property.
    pub value: String,
    /// The version validated against.
    pub version: VCardVersion,
}

impl ValidationWarning {
    #[must_use]
    pub fn unsupported_type(
        property: &'static str,
        value: impl Into<String>,
        version: VCardVersion,
    ) -> Self {
        Self {
            property,
            value: value.into(),
            version,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type value \"{}\" is not supported in version {}.",
            self.value, self.version
        )
    }
}

/// ## Summary
/// Receives warnings emitted during validation.
///
/// The sink owns formatting and delivery; validators only call [`warn`].
///
/// [`warn`]: WarningSink::warn
pub trait WarningSink {
    fn warn(&mut self, warning: ValidationWarning);
}

impl WarningSink for Vec<ValidationWarning> {
    fn warn(&mut self, warning: ValidationWarning) {
        self.push(warning);
    }
}

impl WarningSink for Vec<String> {
    fn warn(&mut self, warning: ValidationWarning) {
        self.push(warning.to_string());
    }
}

/// Logs each warning at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: ValidationWarning) {
        tracing::warn!(
            property = warning.property,
            value = %warning.value,
            version = %warning.version,
            "{warning}"
        );
    }
}

/// Adapts a closure into a [`WarningSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(ValidationWarning)> WarningSink for FnSink<F> {
    fn warn(&mut self, warning: ValidationWarning) {
        (self.0)(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dom_in_v4() -> ValidationWarning {
        ValidationWarning::unsupported_type("ADR", "dom", VCardVersion::V4)
    }

    #[test]
    fn warning_message() {
        assert_eq!(
            dom_in_v4().to_string(),
            "Type value \"dom\" is not supported in version 4.0."
        );
    }

    #[test]
    fn string_sink_formats() {
        let mut sink: Vec<String> = Vec::new();
        sink.warn(dom_in_v4());
        assert_eq!(sink, ["Type value \"dom\" is not supported in version 4.0."]);
    }

    #[test]
    fn closure_sink_receives_warning() {
        let mut seen = Vec::new();
        let mut sink = FnSink(|w: ValidationWarning| seen.push(w.value));
        sink.warn(dom_in_v4());
        drop(sink);
        assert_eq!(seen, ["dom"]);
    }

    #[test_log::test]
    fn tracing_sink_accepts_warning() {
        let mut sink = TracingSink;
        sink.warn(dom_in_v4());
    }
}
