//! vCard format revisions.

use std::fmt;

/// vCard version.
///
/// Variants are declared oldest first, so the derived ordering follows
/// publication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (Versit).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Every known version, oldest first.
    pub const ALL: [Self; 3] = [Self::V2_1, Self::V3, Self::V4];

    /// Parses from version string.
    #[must_use]
    #[expect(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V2_1),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VCardVersion::from_str(s).ok_or(())
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trip() {
        for version in VCardVersion::ALL {
            assert_eq!(VCardVersion::from_str(version.as_str()), Some(version));
        }
    }

    #[test]
    fn version_parse_trims() {
        assert_eq!(VCardVersion::from_str(" 3.0 "), Some(VCardVersion::V3));
        assert_eq!(VCardVersion::from_str("5.0"), None);
        assert_eq!("2.1".parse::<VCardVersion>(), Ok(VCardVersion::V2_1));
    }

    #[test]
    fn versions_ordered_oldest_first() {
        assert!(VCardVersion::V2_1 < VCardVersion::V3);
        assert!(VCardVersion::V3 < VCardVersion::V4);
        assert_eq!(VCardVersion::default(), VCardVersion::V4);
    }
}
