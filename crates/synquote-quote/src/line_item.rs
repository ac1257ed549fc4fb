//! Priced quote rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use synquote_catalog::PricingMethod;

/// How a row lands on the customer's bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    /// Billed once.
    OneOff,
    /// Billed monthly.
    Monthly,
}

impl CostType {
    /// Derive the cost type from a product's pricing method.
    #[must_use]
    pub fn from_method(method: PricingMethod) -> Self {
        if method.is_recurring() {
            CostType::Monthly
        } else {
            CostType::OneOff
        }
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CostType::OneOff => write!(f, "One-Off"),
            CostType::Monthly => write!(f, "Monthly"),
        }
    }
}

/// One priced row on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Price-list article number.
    pub article_number: String,
    /// Display name (quote model name for hardware, product name for
    /// software).
    pub model: String,
    /// Row description.
    pub description: String,
    /// Pricing method from the catalog, `Upfront` when unlisted.
    pub method: PricingMethod,
    /// Unit list price in GBP, zero when unlisted.
    pub msrp: Decimal,
    /// Standard discount percentage.
    pub discount_percent: Decimal,
    /// Unit quantity.
    pub quantity: u32,
    /// Billing classification derived from `method`.
    pub cost_type: CostType,
    /// SMC percentage carried from the catalog.
    pub smc_percent: Decimal,
}

impl LineItem {
    /// Net unit price after the standard discount.
    #[must_use]
    pub fn net_unit_price(&self) -> Decimal {
        self.msrp * (Decimal::ONE_HUNDRED - self.discount_percent) / Decimal::ONE_HUNDRED
    }

    /// Net row total after discount.
    #[must_use]
    pub fn net_total(&self) -> Decimal {
        self.net_unit_price() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(msrp: Decimal, discount: Decimal, quantity: u32) -> LineItem {
        LineItem {
            article_number: "S03850".to_string(),
            model: "SynConSC-HW".to_string(),
            description: "Two-door controller".to_string(),
            method: PricingMethod::Upfront,
            msrp,
            discount_percent: discount,
            quantity,
            cost_type: CostType::OneOff,
            smc_percent: Decimal::ZERO,
        }
    }

    #[test]
    fn test_net_total_applies_discount() {
        let row = item(dec!(100.00), dec!(15), 3);
        assert_eq!(row.net_unit_price(), dec!(85.00));
        assert_eq!(row.net_total(), dec!(255.00));
    }

    #[test]
    fn test_zero_discount_passes_msrp_through() {
        let row = item(dec!(19.99), Decimal::ZERO, 2);
        assert_eq!(row.net_total(), dec!(39.98));
    }

    #[test]
    fn test_cost_type_derivation() {
        assert_eq!(
            CostType::from_method(PricingMethod::Upfront),
            CostType::OneOff
        );
        assert_eq!(
            CostType::from_method(PricingMethod::Recurring),
            CostType::Monthly
        );
    }
}
