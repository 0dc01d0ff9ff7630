//! Validation of vCard properties against a target version.
//!
//! Validation never fails outright: problems are reported as
//! [`ValidationWarning`]s through a caller-supplied [`WarningSink`], and the
//! caller decides whether they are fatal (see [`ValidationPolicy`]).

pub mod policy;
pub mod warning;

pub use policy::ValidationPolicy;
pub use warning::{FnSink, TracingSink, ValidationWarning, WarningSink};

use crate::rfc::vcard::core::VCardVersion;

/// ## Summary
/// A property that can check its own contents against a vCard version.
pub trait Validate {
    /// Reports every problem found for `version` to `sink`.
    ///
    /// Must not change the property.
    fn validate<S: WarningSink + ?Sized>(&self, version: VCardVersion, sink: &mut S);

    /// Runs [`Validate::validate`] and collects the warnings.
    #[must_use]
    fn warnings(&self, version: VCardVersion) -> Vec<ValidationWarning> {
        let mut warnings: Vec<ValidationWarning> = Vec::new();
        self.validate(version, &mut warnings);
        warnings
    }
}
