use serde::{Deserialize, Serialize};

/// Actions the player side can submit to a battle session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Intent {
    /// Use the known program at this index
    Fight { program: usize },

    /// Bring in the roster member at this index
    Switch { roster: usize },

    /// Try to capture the wild daemon (Wild sessions only)
    Capture,

    /// Try to flee (Wild sessions only)
    Run,
}

impl Intent {
    /// Short name used in logs and rejections
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fight { .. } => "fight",
            Self::Switch { .. } => "switch",
            Self::Capture => "capture",
            Self::Run => "run",
        }
    }
}
