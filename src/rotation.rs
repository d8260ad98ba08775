use serde::{Deserialize, Serialize};
use std::fmt;

/// Which facility a rotation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Tgh,
    Va,
    Both,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Tgh => "TGH",
            Location::Va => "VA",
            Location::Both => "Both",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps internal rotation codes to their display names. Unmapped inputs pass
/// through trimmed but otherwise unchanged.
pub fn canonicalize(raw: &str) -> String {
    let name = raw.trim();
    match name {
        "TGH-6 Consults" => "TGH Senior".to_string(),
        "TGH-5 S&G" => "Jarstad / Agi".to_string(),
        "VA-4/VA Surgery" => "VA A (McDowell)".to_string(),
        "VA-5/VA Clinic" => "VA B (Mercer)".to_string(),
        other => other.to_string(),
    }
}

/// Classifies a raw or canonical rotation name by facility.
///
/// The neuro check runs first: a name carrying both "neuro" and a VA marker
/// still resolves to `Both`. The "va " marker catches "VA A" / "VA B", which
/// have no hyphen.
pub fn classify_location(rotation: &str) -> Location {
    let name = rotation.to_lowercase();
    if name.contains("neuro") {
        return Location::Both;
    }
    if name.contains("rcg")
        || name.contains("plastics")
        || name.contains("va-")
        || name.contains("va ")
    {
        return Location::Va;
    }
    Location::Tgh
}
