//! Frame rate catalog.
//!
//! The broadcast frame rates supported by this crate form a closed set.
//! Each entry carries a nominal (possibly fractional) rate used for duration
//! math, a rounded integer rate used as the modulus for HH:MM:SS:FF
//! decomposition, and a drop-frame count for the NTSC drop-frame variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A broadcast frame rate.
///
/// The 29.97 and 59.94 rates exist in both drop-frame (DF) and
/// non-drop-frame (NDF) flavors; they share the same nominal rate and differ
/// only in how frame numbers are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps (NTSC film)
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps drop-frame (NTSC)
    Fps29_97Df,
    /// 29.97 fps non-drop-frame (NTSC)
    Fps29_97Ndf,
    /// 30 fps
    Fps30,
    /// 48 fps (HFR film)
    Fps48,
    /// 50 fps (PAL HFR)
    Fps50,
    /// 59.94 fps drop-frame (NTSC HFR)
    Fps59_94Df,
    /// 59.94 fps non-drop-frame (NTSC HFR)
    Fps59_94Ndf,
    /// 60 fps
    Fps60,
}

impl FrameRate {
    /// Every frame rate in the catalog, in ascending nominal order.
    pub const ALL: [FrameRate; 11] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97Df,
        Self::Fps29_97Ndf,
        Self::Fps30,
        Self::Fps48,
        Self::Fps50,
        Self::Fps59_94Df,
        Self::Fps59_94Ndf,
        Self::Fps60,
    ];

    /// The true frames-per-second value, used for duration conversions.
    #[must_use]
    pub fn nominal_rate(&self) -> f64 {
        match self {
            Self::Fps23_976 => 23.976,
            Self::Fps24 => 24.0,
            Self::Fps25 => 25.0,
            Self::Fps29_97Df | Self::Fps29_97Ndf => 29.97,
            Self::Fps30 => 30.0,
            Self::Fps48 => 48.0,
            Self::Fps50 => 50.0,
            Self::Fps59_94Df | Self::Fps59_94Ndf => 59.94,
            Self::Fps60 => 60.0,
        }
    }

    /// The ceiling of the nominal rate, used as the modulus for all
    /// HH:MM:SS:FF decomposition.
    #[must_use]
    pub fn rounded_rate(&self) -> i64 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97Df | Self::Fps29_97Ndf | Self::Fps30 => 30,
            Self::Fps48 => 48,
            Self::Fps50 => 50,
            Self::Fps59_94Df | Self::Fps59_94Ndf | Self::Fps60 => 60,
        }
    }

    /// How many frame numbers are skipped at the start of each minute not
    /// divisible by ten. Zero for non-drop-frame rates.
    #[must_use]
    pub fn drop_frame_count(&self) -> i64 {
        match self {
            Self::Fps29_97Df => 2,
            Self::Fps59_94Df => 4,
            _ => 0,
        }
    }

    /// Check whether this rate counts frames with drop-frame compensation.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame_count() != 0
    }

    /// The display name of this rate.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fps23_976 => "23.976",
            Self::Fps24 => "24",
            Self::Fps25 => "25",
            Self::Fps29_97Df => "29.97 DF",
            Self::Fps29_97Ndf => "29.97 NDF",
            Self::Fps30 => "30",
            Self::Fps48 => "48",
            Self::Fps50 => "50",
            Self::Fps59_94Df => "59.94 DF",
            Self::Fps59_94Ndf => "59.94 NDF",
            Self::Fps60 => "60",
        }
    }

    /// Look up a catalog entry by its display name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rate| rate.label() == label)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
