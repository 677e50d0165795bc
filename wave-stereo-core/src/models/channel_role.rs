use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a stereo frame collapses into a single mono sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelRole {
    /// The left sample of each frame.
    Left,
    /// The right sample of each frame.
    Right,
    /// `(L + R) / 2`, truncated toward zero.
    #[default]
    HalfSum,
    /// `(L - R) / 2`, truncated toward zero.
    HalfDifference,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 4] = [Self::Left, Self::Right, Self::HalfSum, Self::HalfDifference];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::HalfSum => "half-sum",
            Self::HalfDifference => "half-difference",
        }
    }
}

impl fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "half-sum" | "sum" => Ok(Self::HalfSum),
            "half-difference" | "diff" | "difference" => Ok(Self::HalfDifference),
            other => Err(format!(
                "unknown channel role '{other}' (expected left, right, half-sum or half-difference)"
            )),
        }
    }
}
