//! Load cases

use serde::{Deserialize, Serialize};

/// Category of applied load before factoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadCaseKind {
    Dead,
    Live,
    Wind,
    Seismic,
}

impl LoadCaseKind {
    /// Short code-style label (DL, LL, WL, EQL)
    pub fn label(&self) -> &'static str {
        match self {
            LoadCaseKind::Dead => "DL",
            LoadCaseKind::Live => "LL",
            LoadCaseKind::Wind => "WL",
            LoadCaseKind::Seismic => "EQL",
        }
    }
}

/// A load case groups related loads under a common name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Unique load case id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Load category
    pub kind: LoadCaseKind,
}

impl LoadCase {
    /// Create a new load case
    pub fn new(id: u32, name: &str, kind: LoadCaseKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
        }
    }

    pub fn dead(id: u32) -> Self {
        Self::new(id, "Dead Load", LoadCaseKind::Dead)
    }

    pub fn live(id: u32) -> Self {
        Self::new(id, "Live Load", LoadCaseKind::Live)
    }

    pub fn wind(id: u32) -> Self {
        Self::new(id, "Wind Load", LoadCaseKind::Wind)
    }

    pub fn seismic(id: u32) -> Self {
        Self::new(id, "Seismic Load", LoadCaseKind::Seismic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LoadCaseKind::Dead.label(), "DL");
        assert_eq!(LoadCaseKind::Seismic.label(), "EQL");
    }

    #[test]
    fn test_constructors() {
        let case = LoadCase::live(2);
        assert_eq!(case.kind, LoadCaseKind::Live);
        assert_eq!(case.name, "Live Load");
    }
}
