//! Rate kinds quoted on a curve.

use serde::{Deserialize, Serialize};

/// Which rate a curve lookup reads.
///
/// Bid and ask rates are supplied with the curve data; the mid rate is
/// derived at construction as the bid/ask average and is never supplied
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RateKind {
    /// Quoted bid rate.
    Bid,
    /// Quoted ask rate.
    Ask,
    /// Mid rate, `(bid + ask) / 2`.
    #[default]
    Mid,
}

impl RateKind {
    /// All rate kinds, in quote order.
    pub const ALL: [RateKind; 3] = [RateKind::Bid, RateKind::Ask, RateKind::Mid];

    /// Returns true if the rate is supplied with the quotes rather than
    /// derived from them.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        matches!(self, Self::Bid | Self::Ask)
    }
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bid => "Bid",
            Self::Ask => "Ask",
            Self::Mid => "Mid",
        };
        write!(f, "{name}")
    }
}
