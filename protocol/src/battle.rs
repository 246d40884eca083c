//! Shared vocabulary for battle messages

use serde::{Deserialize, Serialize};

/// Which combatant a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side of the field
    pub fn opponent(&self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }
}

/// Kind of encounter, gating Capture and Run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Wild,
    Trainer,
    Training,
}

impl SessionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wild" => Some(SessionKind::Wild),
            "trainer" => Some(SessionKind::Trainer),
            "training" => Some(SessionKind::Training),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Wild => "wild",
            SessionKind::Trainer => "trainer",
            SessionKind::Training => "training",
        }
    }

    /// Whether the player may try to capture the enemy daemon
    pub fn allows_capture(&self) -> bool {
        matches!(self, SessionKind::Wild)
    }

    /// Whether the player may try to flee
    pub fn allows_run(&self) -> bool {
        matches!(self, SessionKind::Wild)
    }
}

/// Stats that programs can raise or lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Attack,
    Defense,
    Speed,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "attack" | "atk" => Some(Stat::Attack),
            "defense" | "def" => Some(Stat::Defense),
            "speed" | "spe" => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        }
    }
}

/// Sticky combat condition. A daemon carries at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Loses 1/16 of max HP at the end of every turn
    Corrupted,
    /// 30% chance to lose its action each turn
    Locked,
    /// Always acts last
    Lagging,
}

impl Status {
    /// Parse a status tag, case-insensitive ("corrupted", "LOCKED", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "corrupted" => Some(Status::Corrupted),
            "locked" => Some(Status::Locked),
            "lagging" => Some(Status::Lagging),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Corrupted => "Corrupted",
            Status::Locked => "Locked",
            Status::Lagging => "Lagging",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Messaging tier for a type-effectiveness multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
    NoEffect,
}

impl Effectiveness {
    /// Classify a combined multiplier: >1.5 super, 0 immune, <0.6 resisted
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier <= 0.0 {
            Effectiveness::NoEffect
        } else if multiplier > 1.5 {
            Effectiveness::SuperEffective
        } else if multiplier < 0.6 {
            Effectiveness::NotVeryEffective
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Computed stats of a daemon at its current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatLine {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl StatLine {
    /// Value for one of the stage-able stats
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        }
    }
}
