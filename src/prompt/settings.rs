//! Global video settings supported by the generation API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

// =============================================================================
// VIDEO LENGTH
// =============================================================================

/// Supported clip lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoLength {
    Four,
    Six,
    Eight,
}

impl VideoLength {
    /// All supported lengths, shortest first.
    pub const ALL: [VideoLength; 3] = [VideoLength::Four, VideoLength::Six, VideoLength::Eight];

    /// Maps a raw seconds value onto a supported length (exact match only).
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|length| length.seconds() as f64 == seconds)
    }

    /// Length in whole seconds.
    pub fn seconds(self) -> u32 {
        match self {
            VideoLength::Four => 4,
            VideoLength::Six => 6,
            VideoLength::Eight => 8,
        }
    }
}

impl fmt::Display for VideoLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds())
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Output resolution preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
}

impl Resolution {
    pub const ALL: [Resolution; 2] = [Resolution::Hd720, Resolution::Hd1080];

    /// Wire representation ("720p" / "1080p").
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Hd720 => "720p",
            Resolution::Hd1080 => "1080p",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.as_str() == s)
            .ok_or_else(|| PromptError::unsupported_setting("resolution", s))
    }
}

// =============================================================================
// ASPECT RATIO
// =============================================================================

/// Frame aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Landscape, AspectRatio::Portrait];

    /// Wire representation ("16:9" / "9:16").
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| PromptError::unsupported_setting("aspect ratio", s))
    }
}
