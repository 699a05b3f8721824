//! Face-shape classification labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the six classification outcomes the analysis simulator can emit.
///
/// The recommendation resolver additionally understands free-text labels
/// such as "Rectangular" or "Oblong" that this enum never produces; see
/// `framefit-web`'s resolver for that lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Triangular,
}

impl FaceShape {
    /// All labels the simulator draws from, in a fixed order.
    pub const ALL: [Self; 6] = [
        Self::Oval,
        Self::Round,
        Self::Square,
        Self::Heart,
        Self::Diamond,
        Self::Triangular,
    ];

    /// Canonical display name of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oval => "Oval",
            Self::Round => "Round",
            Self::Square => "Square",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
            Self::Triangular => "Triangular",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
