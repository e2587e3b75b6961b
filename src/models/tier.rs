//! Spending style applied on top of the itemized costs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Economy,
    #[default]
    Standard,
    Luxury,
}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [
        PricingTier::Economy,
        PricingTier::Standard,
        PricingTier::Luxury,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PricingTier::Economy => "economy",
            PricingTier::Standard => "standard",
            PricingTier::Luxury => "luxury",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PricingTier::Economy => "💰 Икономично",
            PricingTier::Standard => "🏨 Стандартно",
            PricingTier::Luxury => "💎 Луксозно",
        }
    }

    /// Selector label without the pictogram
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            PricingTier::Economy => "Икономично",
            PricingTier::Standard => "Стандартно",
            PricingTier::Luxury => "Луксозно",
        }
    }

    /// Scalar applied to the whole trip total
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            PricingTier::Economy => 0.85,
            PricingTier::Standard => 1.0,
            PricingTier::Luxury => 1.3,
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PricingTier {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PricingTier::ALL
            .into_iter()
            .find(|tier| {
                tier.id().eq_ignore_ascii_case(key) || tier.local_name() == key || tier.label() == key
            })
            .ok_or_else(|| {
                PlannerError::invalid_input(format!(
                    "Unknown pricing tier '{key}'. Must be one of: economy, standard, luxury"
                ))
            })
    }
}
