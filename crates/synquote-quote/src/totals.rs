//! Quote totals.

use crate::line_item::{CostType, LineItem};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use synquote_core::SystemType;

/// Rolled-up quote pricing, rounded to pennies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Net one-time total.
    pub one_off: Decimal,
    /// Net monthly total.
    pub monthly: Decimal,
    /// Annual SMC (maintenance) cost; zero for cloud systems, where
    /// maintenance is bundled into the recurring charge.
    pub smc: Decimal,
}

fn to_pennies(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum line items into one-off/monthly totals and the on-prem SMC cost.
///
/// SMC is charged as a percentage of each one-off row's net price, only
/// for rows that carry an SMC rate and only on on-prem systems.
#[must_use]
pub fn compute_totals(items: &[LineItem], system_type: Option<SystemType>) -> QuoteTotals {
    let mut one_off = Decimal::ZERO;
    let mut monthly = Decimal::ZERO;
    let mut smc = Decimal::ZERO;

    for item in items {
        let net = item.net_total();
        match item.cost_type {
            CostType::OneOff => {
                one_off += net;
                if item.smc_percent > Decimal::ZERO {
                    smc += net * item.smc_percent / Decimal::ONE_HUNDRED;
                }
            }
            CostType::Monthly => monthly += net,
        }
    }

    if system_type != Some(SystemType::OnPrem) {
        smc = Decimal::ZERO;
    }

    QuoteTotals {
        one_off: to_pennies(one_off),
        monthly: to_pennies(monthly),
        smc: to_pennies(smc),
    }
}
