use serde::{Deserialize, Serialize};

/// Cost sector used to filter and aggregate per-locality figures.
///
/// The set is closed: adding a sector means updating every `match` below
/// and every place that enumerates [`Sector::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sector {
    #[default]
    #[serde(rename = "All Sectors")]
    AllSectors,
    #[serde(rename = "Lost Labor")]
    LostLabor,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Child Services & K12")]
    ChildServicesK12,
    #[serde(rename = "Criminal Justice")]
    CriminalJustice,
}

impl Sector {
    /// Wire literal, identical to the serde representation
    pub fn label(&self) -> &'static str {
        match self {
            Sector::AllSectors => "All Sectors",
            Sector::LostLabor => "Lost Labor",
            Sector::Healthcare => "Healthcare",
            Sector::ChildServicesK12 => "Child Services & K12",
            Sector::CriminalJustice => "Criminal Justice",
        }
    }

    /// Stable short code, safe to use in CSS classes and query strings
    pub fn code(&self) -> &'static str {
        match self {
            Sector::AllSectors => "all",
            Sector::LostLabor => "labor",
            Sector::Healthcare => "healthcare",
            Sector::ChildServicesK12 => "child-services",
            Sector::CriminalJustice => "justice",
        }
    }

    /// All five sectors in display order.
    pub fn all() -> [Sector; 5] {
        [
            Sector::AllSectors,
            Sector::LostLabor,
            Sector::Healthcare,
            Sector::ChildServicesK12,
            Sector::CriminalJustice,
        ]
    }

    /// The four sectors a cost figure can be attributed to.
    pub fn specific() -> [Sector; 4] {
        [
            Sector::LostLabor,
            Sector::Healthcare,
            Sector::ChildServicesK12,
            Sector::CriminalJustice,
        ]
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Sector::AllSectors)
    }

    /// Parse from either the wire literal or the short code.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|sector| sector.label() == s || sector.code() == s)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_sectors() {
        assert_eq!(Sector::default(), Sector::AllSectors);
    }

    #[test]
    fn test_serde_uses_display_literals() {
        for sector in Sector::all() {
            let json = serde_json::to_string(&sector).unwrap();
            assert_eq!(json, format!("\"{}\"", sector.label()));
            let back: Sector = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sector);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!(Sector::from_label("Education").is_none());
        assert!(serde_json::from_str::<Sector>("\"Education\"").is_err());
        assert_eq!(Sector::from_label(" justice "), Some(Sector::CriminalJustice));
    }

    #[test]
    fn test_specific_excludes_all() {
        assert!(Sector::specific().iter().all(|s| !s.is_all()));
    }
}
