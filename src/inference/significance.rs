//! Significance codes for p-values.

use std::fmt;

/// Significance code of a p-value.
///
/// | p                  | code  |
/// |--------------------|-------|
/// | p > 0.05           | `ns`  |
/// | 0.01 < p ≤ 0.05    | `*`   |
/// | 0.001 < p ≤ 0.01   | `**`  |
/// | p ≤ 0.001          | `***` |
///
/// A NaN p-value fails every comparison and is coded `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Significance {
    NotSignificant,
    Significant,
    VerySignificant,
    HighlySignificant,
    Undefined,
}

/// Legend printed under the significance codes.
pub const SIGNIFICANCE_LEGEND: &str =
    "ns = not significant, * = p <= 0.05, ** = p <= 0.01, *** = p <= 0.001";

/// Classify a p-value. The upper bound of each starred band is inclusive.
pub fn significance(p: f64) -> Significance {
    if p > 0.05 {
        Significance::NotSignificant
    } else if p <= 0.05 && p > 0.01 {
        Significance::Significant
    } else if p <= 0.01 && p > 0.001 {
        Significance::VerySignificant
    } else if p <= 0.001 {
        Significance::HighlySignificant
    } else {
        Significance::Undefined
    }
}

impl Significance {
    /// The code as printed in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Significance::NotSignificant => "ns",
            Significance::Significant => "*",
            Significance::VerySignificant => "**",
            Significance::HighlySignificant => "***",
            Significance::Undefined => "error",
        }
    }

    /// True for any starred code.
    pub fn is_significant(self) -> bool {
        matches!(
            self,
            Significance::Significant
                | Significance::VerySignificant
                | Significance::HighlySignificant
        )
    }
}

impl From<f64> for Significance {
    fn from(p: f64) -> Self {
        significance(p)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
