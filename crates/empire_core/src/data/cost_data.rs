//! Cost attributes as written in data files, and range checks shared by
//! every entry type.

use serde::{Deserialize, Serialize};

use crate::buildable::{BuildableId, Cost, Prerequisites};
use crate::error::ConfigError;
use crate::ids::AdvanceId;

/// Data-driven cost definition.
///
/// # Example RON
///
/// ```ron
/// CostData(
///     productivity: 120,
///     maintenance: 2,
///     purchase: 480,
///     sell: 120,
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostData {
    /// Production points required.
    pub productivity: i64,
    /// Upkeep per turn.
    #[serde(default)]
    pub maintenance: i64,
    /// Treasury price to buy outright.
    pub purchase: i64,
    /// Refund on demolition or disband.
    pub sell: i64,
}

impl CostData {
    /// Costs following the pricing convention.
    #[must_use]
    pub const fn standard(productivity: i64, maintenance: i64) -> Self {
        Self {
            productivity,
            maintenance,
            purchase: productivity * 4,
            sell: productivity,
        }
    }

    /// Check ranges and the pricing convention, pushing every problem found.
    pub(crate) fn resolve(&self, id: BuildableId, errors: &mut Vec<ConfigError>) -> Option<Cost> {
        let productivity = checked::<u32>(id, "productivity", self.productivity, errors);
        let maintenance = checked::<u32>(id, "maintenance", self.maintenance, errors);
        let purchase = checked::<u32>(id, "purchase", self.purchase, errors);
        let sell = checked::<u32>(id, "sell", self.sell, errors);

        let cost = Cost {
            productivity: productivity?,
            maintenance: maintenance?,
            purchase: purchase?,
            sell: sell?,
        };
        if !cost.follows_price_convention() {
            errors.push(ConfigError::PriceConvention {
                id,
                productivity: cost.productivity,
                purchase: cost.purchase,
                sell: cost.sell,
            });
            return None;
        }
        Some(cost)
    }
}

/// Resolve the `requires` / `obsoleted_by` pair of an entry.
pub(crate) fn resolve_prerequisites(
    id: BuildableId,
    requires: Option<&AdvanceId>,
    obsoleted_by: Option<&AdvanceId>,
    errors: &mut Vec<ConfigError>,
) -> Option<Prerequisites> {
    if obsoleted_by.is_some() && id.is_stateless() {
        errors.push(ConfigError::ObsoleteOnNonUnit { id });
        return None;
    }
    if let (Some(req), Some(obs)) = (requires, obsoleted_by) {
        if req == obs {
            errors.push(ConfigError::SelfObsoleting {
                id,
                advance: req.clone(),
            });
            return None;
        }
    }
    Some(Prerequisites {
        requires: requires.cloned(),
        obsoleted_by: obsoleted_by.cloned(),
    })
}

/// Convert a data value into its field type, recording negative or
/// oversized values.
pub(crate) fn checked<T: TryFrom<i64>>(
    id: BuildableId,
    field: &'static str,
    value: i64,
    errors: &mut Vec<ConfigError>,
) -> Option<T> {
    if value < 0 {
        errors.push(ConfigError::NegativeValue { id, field, value });
        return None;
    }
    match T::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(ConfigError::ValueOutOfRange { id, field, value });
            None
        }
    }
}
