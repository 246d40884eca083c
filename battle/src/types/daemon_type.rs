//! Daemon types and the sparse effectiveness chart

use std::collections::HashMap;

/// Daemon types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DaemonType {
    Virus = 0,
    Malware = 1,
    Worm = 2,
    Firewall = 3,
    Shell = 4,
    Encryption = 5,
    Crypto = 6,
    Neural = 7,
    Ghost = 8,
    Physical = 9,
    Utility = 10,
}

impl DaemonType {
    /// All 11 daemon types
    pub const ALL: [DaemonType; 11] = [
        DaemonType::Virus,
        DaemonType::Malware,
        DaemonType::Worm,
        DaemonType::Firewall,
        DaemonType::Shell,
        DaemonType::Encryption,
        DaemonType::Crypto,
        DaemonType::Neural,
        DaemonType::Ghost,
        DaemonType::Physical,
        DaemonType::Utility,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [DaemonType] {
        &Self::ALL
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "virus" => Some(DaemonType::Virus),
            "malware" => Some(DaemonType::Malware),
            "worm" => Some(DaemonType::Worm),
            "firewall" => Some(DaemonType::Firewall),
            "shell" => Some(DaemonType::Shell),
            "encryption" => Some(DaemonType::Encryption),
            "crypto" => Some(DaemonType::Crypto),
            "neural" => Some(DaemonType::Neural),
            "ghost" => Some(DaemonType::Ghost),
            "physical" => Some(DaemonType::Physical),
            "utility" => Some(DaemonType::Utility),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DaemonType::Virus => "Virus",
            DaemonType::Malware => "Malware",
            DaemonType::Worm => "Worm",
            DaemonType::Firewall => "Firewall",
            DaemonType::Shell => "Shell",
            DaemonType::Encryption => "Encryption",
            DaemonType::Crypto => "Crypto",
            DaemonType::Neural => "Neural",
            DaemonType::Ghost => "Ghost",
            DaemonType::Physical => "Physical",
            DaemonType::Utility => "Utility",
        }
    }
}

impl std::fmt::Display for DaemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One non-neutral chart entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMatchup {
    pub attacking: DaemonType,
    pub defending: DaemonType,
    pub multiplier: f64,
}

/// Sparse effectiveness chart
///
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective.
/// Pairs that were never set are neutral.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<TypeMatchup>", into = "Vec<TypeMatchup>")
)]
pub struct TypeChart {
    entries: HashMap<(DaemonType, DaemonType), f64>,
}

impl TypeChart {
    /// Create an empty (all-neutral) chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, attacking: DaemonType, defending: DaemonType, multiplier: f64) -> Self {
        self.set(attacking, defending, multiplier);
        self
    }

    /// Set the multiplier for one attacking/defending pair
    pub fn set(&mut self, attacking: DaemonType, defending: DaemonType, multiplier: f64) {
        self.entries.insert((attacking, defending), multiplier);
    }

    /// Get type effectiveness against a single defending type
    pub fn effectiveness(&self, attacking: DaemonType, defending: DaemonType) -> f64 {
        self.entries
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Get type effectiveness against multiple defending types (multiplied)
    pub fn effectiveness_multi(&self, attacking: DaemonType, defenders: &[DaemonType]) -> f64 {
        defenders
            .iter()
            .map(|t| self.effectiveness(attacking, *t))
            .product()
    }

    /// Number of explicit entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate explicit entries
    pub fn matchups(&self) -> impl Iterator<Item = TypeMatchup> + '_ {
        self.entries
            .iter()
            .map(|(&(attacking, defending), &multiplier)| TypeMatchup {
                attacking,
                defending,
                multiplier,
            })
    }
}

impl From<Vec<TypeMatchup>> for TypeChart {
    fn from(matchups: Vec<TypeMatchup>) -> Self {
        let mut chart = TypeChart::new();
        for m in matchups {
            chart.set(m.attacking, m.defending, m.multiplier);
        }
        chart
    }
}

impl From<TypeChart> for Vec<TypeMatchup> {
    fn from(chart: TypeChart) -> Self {
        chart.matchups().collect()
    }
}
