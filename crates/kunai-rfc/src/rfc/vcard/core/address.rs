//! Address property (ADR, RFC 6350 §6.3.1).

use std::collections::HashSet;

use super::parameter::{AddressTypeParameter, VCardParameters, names};
use super::version::VCardVersion;
use crate::rfc::validation::{Validate, ValidationWarning, WarningSink};

/// Property name of an address.
pub const ADR: &str = "ADR";

/// An ADR property: the seven address components plus the parameters
/// attached to them.
///
/// All components are optional. `TYPE` values are stored as text on the
/// parameter list and resolved through [`AddressTypeParameter::get`] when
/// read, so values written by a parser compare by identity like the ones
/// added through [`AddressProperty::add_type`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressProperty {
    /// Optional property group (e.g., "item1" in "item1.ADR").
    pub group: Option<String>,
    /// Post office box.
    pub po_box: Option<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended_address: Option<String>,
    /// Street address.
    pub street_address: Option<String>,
    /// Locality (city).
    pub locality: Option<String>,
    /// Region (state or province).
    pub region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
    params: VCardParameters,
}

impl AddressProperty {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every address component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.po_box,
            &self.extended_address,
            &self.street_address,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|c| c.as_deref().is_none_or(str::is_empty))
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.street_address,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .filter_map(|c| c.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// The raw parameter list, for codecs reading or writing parameter text.
    #[must_use]
    pub fn params(&self) -> &VCardParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut VCardParameters {
        &mut self.params
    }

    // --- TYPE ---

    /// Returns the attached `TYPE` values.
    #[must_use]
    pub fn types(&self) -> HashSet<AddressTypeParameter> {
        self.params.resolve()
    }

    /// Attaches a `TYPE` value.
    ///
    /// Every call stores one occurrence, even for a value that is already
    /// attached; [`AddressProperty::types`] collapses repeats. Paired with
    /// [`AddressProperty::remove_type`] this leaves the attached set as it was.
    pub fn add_type(&mut self, type_value: AddressTypeParameter) {
        self.params.add(names::TYPE, type_value.value());
    }

    /// Detaches one stored occurrence of a `TYPE` value, whatever case it was
    /// stored in.
    pub fn remove_type(&mut self, type_value: AddressTypeParameter) {
        self.params.remove_first_value(names::TYPE, type_value.value());
    }

    // --- LABEL ---

    /// Returns the formatted delivery label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.params.first(names::LABEL)
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.params.set(names::LABEL, label);
    }

    // --- GEO ---

    /// Returns the latitude and longitude from the `GEO` parameter.
    ///
    /// Returns `None` if the parameter is missing or is not a `geo:` URI.
    #[must_use]
    pub fn geo(&self) -> Option<(f64, f64)> {
        let uri = self.params.first(names::GEO)?;
        let parsed = parse_geo_uri(uri);
        if parsed.is_none() {
            tracing::trace!(value = uri, "Ignoring malformed GEO parameter");
        }
        parsed
    }

    pub fn set_geo(&mut self, latitude: f64, longitude: f64) {
        self.params
            .set(names::GEO, Some(format!("geo:{latitude},{longitude}")));
    }

    pub fn remove_geo(&mut self) {
        self.params.remove_all(names::GEO);
    }

    // --- TZ ---

    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.params.first(names::TZ)
    }

    pub fn set_timezone(&mut self, timezone: Option<String>) {
        self.params.set(names::TZ, timezone);
    }

    // --- ALTID ---

    /// Returns the identifier grouping alternate representations of this
    /// address (e.g. the same address in several languages).
    #[must_use]
    pub fn alt_id(&self) -> Option<&str> {
        self.params.first(names::ALTID)
    }

    pub fn set_alt_id(&mut self, alt_id: Option<String>) {
        self.params.set(names::ALTID, alt_id);
    }

    // --- LANGUAGE ---

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.params.first(names::LANGUAGE)
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.params.set(names::LANGUAGE, language);
    }

    // --- PREF ---

    /// Returns the PREF value if present (1-100, lower is preferred).
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.params.first(names::PREF).and_then(|v| v.parse().ok())
    }

    pub fn set_pref(&mut self, pref: Option<u8>) {
        self.params.set(names::PREF, pref.map(|p| p.to_string()));
    }

    // --- PID ---

    /// Returns the `(local id, client PID map reference)` pairs.
    ///
    /// Entries that are not of the form `<n>.<n>` are skipped.
    #[must_use]
    pub fn pids(&self) -> Vec<(u32, u32)> {
        self.params
            .values(names::PID)
            .iter()
            .filter_map(|v| {
                let pid = parse_pid(v);
                if pid.is_none() {
                    tracing::trace!(value = %v, "Ignoring malformed PID parameter value");
                }
                pid
            })
            .collect()
    }

    pub fn add_pid(&mut self, local_id: u32, client_pid_map_ref: u32) {
        self.params
            .add(names::PID, format!("{local_id}.{client_pid_map_ref}"));
    }

    pub fn remove_pids(&mut self) {
        self.params.remove_all(names::PID);
    }
}

impl Validate for AddressProperty {
    fn validate<S: WarningSink + ?Sized>(&self, version: VCardVersion, sink: &mut S) {
        for type_value in self.types() {
            // 4.0 carries this as the PREF parameter, so it is never unsupported.
            if type_value == AddressTypeParameter::PREF {
                tracing::trace!(%version, "Skipping TYPE=pref during validation");
                continue;
            }

            if !type_value.is_supported(version) {
                sink.warn(ValidationWarning::unsupported_type(
                    ADR,
                    type_value.value(),
                    version,
                ));
            }
        }
    }
}

fn parse_geo_uri(uri: &str) -> Option<(f64, f64)> {
    let scheme = uri.get(..4)?;
    if !scheme.eq_ignore_ascii_case("geo:") {
        return None;
    }

    // Drop URI parameters such as ";u=35".
    let coords = uri[4..].split(';').next()?;
    let mut parts = coords.split(',');
    let latitude = parts.next()?.trim().parse().ok()?;
    let longitude = parts.next()?.trim().parse().ok()?;
    Some((latitude, longitude))
}

fn parse_pid(value: &str) -> Option<(u32, u32)> {
    let (local, client) = value.split_once('.')?;
    Some((local.trim().parse().ok()?, client.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_one_line() {
        let addr = AddressProperty {
            street_address: Some("123 Main St".to_string()),
            locality: Some("Anytown".to_string()),
            region: Some("CA".to_string()),
            postal_code: Some("12345".to_string()),
            country: Some("USA".to_string()),
            ..AddressProperty::default()
        };
        assert_eq!(addr.one_line(), "123 Main St, Anytown, CA, 12345, USA");
        assert!(!addr.is_empty());
    }

    #[test]
    fn address_empty() {
        let mut addr = AddressProperty::new();
        assert!(addr.is_empty());

        addr.locality = Some(String::new());
        assert!(addr.is_empty());
        assert_eq!(addr.one_line(), "");
    }

    #[test]
    fn geo_uri_parsing() {
        assert_eq!(
            parse_geo_uri("geo:37.386013,-122.082932"),
            Some((37.386_013, -122.082_932))
        );
        assert_eq!(parse_geo_uri("GEO:1.5,2;u=35"), Some((1.5, 2.0)));
        assert_eq!(parse_geo_uri("geo:1.5"), None);
        assert_eq!(parse_geo_uri("http://example.com"), None);
        assert_eq!(parse_geo_uri("geo"), None);
    }

    #[test]
    fn pid_parsing() {
        assert_eq!(parse_pid("1.2"), Some((1, 2)));
        assert_eq!(parse_pid("3"), None);
        assert_eq!(parse_pid("a.b"), None);
    }
}
