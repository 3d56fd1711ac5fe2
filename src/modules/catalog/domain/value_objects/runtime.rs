use serde::{Deserialize, Serialize};

/// Running time in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Runtime(u32);

impl Runtime {
    /// TMDB reports 0 when the runtime is unknown
    pub fn from_minutes(minutes: Option<u32>) -> Option<Self> {
        minutes.filter(|m| *m > 0).map(Runtime)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// `2h 11min`
    pub fn label(&self) -> String {
        format!("{}h {}min", self.0 / 60, self.0 % 60)
    }
}
