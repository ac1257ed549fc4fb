//! Line-item derivation from an allocation.

use crate::line_item::{CostType, LineItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use synquote_catalog::{
    Catalog, PricingMethod, SoftwareModule, part_for, platform_article, user_licence_article,
};
use synquote_core::SystemType;
use synquote_engine::Allocation;
use tracing::debug;

/// Platform licensing choices attached to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licensing {
    pub system_type: SystemType,
    /// Number of licensed system users; no user row is added at zero.
    pub system_users: u32,
}

/// One selected software add-on.
///
/// `quantity` only matters for per-unit modules; per-system modules are
/// always quoted at quantity 1.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareSelection {
    pub module: &'static SoftwareModule,
    pub quantity: u32,
}

/// Default pricing method for software rows missing from the catalog:
/// cloud articles recur, on-prem articles are bought upfront.
fn default_software_method(system_type: SystemType) -> PricingMethod {
    match system_type {
        SystemType::Cloud => PricingMethod::Recurring,
        SystemType::OnPrem => PricingMethod::Upfront,
    }
}

/// Build one row from a catalog lookup, absorbing a miss into zero prices
/// and the caller's fallbacks.
fn row(
    catalog: &Catalog,
    article_number: &str,
    fallback_model: &str,
    fallback_description: &str,
    fallback_method: PricingMethod,
    quantity: u32,
) -> LineItem {
    let product = catalog.lookup(article_number);
    if product.is_none() {
        debug!(article_number, "article missing from catalog, quoting at zero");
    }
    let method = product.map_or(fallback_method, |p| p.method);
    LineItem {
        article_number: article_number.to_string(),
        model: fallback_model.to_string(),
        description: product
            .filter(|p| !p.description_en.is_empty())
            .map_or_else(|| fallback_description.to_string(), |p| p.description_en.clone()),
        method,
        msrp: product.map_or(Decimal::ZERO, |p| p.msrp_gbp),
        discount_percent: product.map_or(Decimal::ZERO, |p| p.discount_percent),
        quantity,
        cost_type: CostType::from_method(method),
        smc_percent: product.map_or(Decimal::ZERO, |p| p.smc_percent),
    }
}

/// Derive the priced rows for an allocation plus licensing and add-ons.
///
/// One row per non-zero allocation entry, a platform row (quantity 1) and
/// a user-licence row (quantity = users) when licensing is chosen, and one
/// row per selected software module. Rows are sorted by pricing method
/// (one-time before recurring) then article number.
#[must_use]
pub fn build_line_items(
    allocation: &Allocation,
    licensing: Option<Licensing>,
    software: &[SoftwareSelection],
    catalog: &Catalog,
) -> Vec<LineItem> {
    let mut items = Vec::new();

    for (model, quantity) in allocation.iter() {
        let part = part_for(model);
        items.push(row(
            catalog,
            part.article_number,
            part.quote_model_name,
            "Unknown hardware",
            PricingMethod::Upfront,
            quantity,
        ));
    }

    if let Some(licensing) = licensing {
        let method = default_software_method(licensing.system_type);
        items.push(row(
            catalog,
            platform_article(licensing.system_type),
            "Platform",
            "Synguard platform licence",
            method,
            1,
        ));
        if licensing.system_users > 0 {
            items.push(row(
                catalog,
                user_licence_article(licensing.system_type),
                "User Licence",
                "Synguard user licence",
                method,
                licensing.system_users,
            ));
        }
        for selection in software {
            let quantity = if selection.module.per_unit {
                selection.quantity
            } else {
                1
            };
            if quantity == 0 {
                continue;
            }
            items.push(row(
                catalog,
                selection.module.article_for(licensing.system_type),
                selection.module.name,
                selection.module.summary,
                method,
                quantity,
            ));
        }
    }

    items.sort_by(|a, b| {
        a.method
            .cmp(&b.method)
            .then_with(|| a.article_number.cmp(&b.article_number))
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use synquote_catalog::{Product, software_module};
    use synquote_core::{CommsType, Deployment, Protocol, Requirement};
    use synquote_engine::Engine;

    fn sample_allocation() -> Allocation {
        let mut engine = Engine::new().unwrap();
        let req = Requirement::new()
            .with_topology(Protocol::Osdp, Deployment::InOnly, CommsType::Rs485)
            .with_doors(12)
            .with_io(20, 0);
        engine.allocate(&req)
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_products([
            Product::new("S03835", "SynApp-DIN-HW")
                .with_description("SynApp DIN gateway")
                .with_msrp_gbp(dec!(845.00))
                .with_discount(dec!(10)),
            Product::new("S03855", "SynConEvo-DIN-HW")
                .with_description("SynConEvo eight-door controller")
                .with_msrp_gbp(dec!(1250.00)),
            Product::new("S03869", "SynIO-DIN-HW")
                .with_description("SynIO expansion module")
                .with_msrp_gbp(dec!(320.00)),
            Product::new("S00531", "Synguard-Platform")
                .with_description("Synguard platform")
                .with_msrp_gbp(dec!(2000.00))
                .with_smc(dec!(20)),
            Product::new("S00524H", "H-Synguard")
                .with_description("Synguard user licence (cloud)")
                .with_method(PricingMethod::Recurring)
                .with_msrp_gbp(dec!(1.50)),
        ])
    }

    #[test]
    fn test_hardware_rows_join_catalog() {
        let items = build_line_items(&sample_allocation(), None, &[], &sample_catalog());

        // SynApp, SynConEvo and SynIO all allocated and priced.
        assert_eq!(items.len(), 3);
        let evo = items.iter().find(|i| i.article_number == "S03855").unwrap();
        assert_eq!(evo.quantity, 2);
        assert_eq!(evo.msrp, dec!(1250.00));
        assert_eq!(evo.model, "SynConEvo-DIN-HW");
        assert_eq!(evo.cost_type, CostType::OneOff);
    }

    #[test]
    fn test_missing_article_quotes_at_zero() {
        // Empty catalog: every row survives with zero prices and fallback
        // descriptions, never an error.
        let items = build_line_items(&sample_allocation(), None, &[], &Catalog::new());
        assert_eq!(items.len(), 3);
        for item in &items {
            assert_eq!(item.msrp, Decimal::ZERO);
            assert_eq!(item.description, "Unknown hardware");
        }
    }

    #[test]
    fn test_licensing_adds_platform_and_user_rows() {
        let licensing = Licensing {
            system_type: SystemType::Cloud,
            system_users: 50,
        };
        let items = build_line_items(
            &sample_allocation(),
            Some(licensing),
            &[],
            &sample_catalog(),
        );

        let platform = items.iter().find(|i| i.article_number == "S00531H").unwrap();
        assert_eq!(platform.quantity, 1);
        // Not listed in the sample catalog: falls back to the cloud
        // default of a recurring charge.
        assert_eq!(platform.cost_type, CostType::Monthly);

        let users = items.iter().find(|i| i.article_number == "S00524H").unwrap();
        assert_eq!(users.quantity, 50);
        assert_eq!(users.cost_type, CostType::Monthly);
    }

    #[test]
    fn test_zero_users_adds_no_user_row() {
        let licensing = Licensing {
            system_type: SystemType::OnPrem,
            system_users: 0,
        };
        let items = build_line_items(
            &sample_allocation(),
            Some(licensing),
            &[],
            &sample_catalog(),
        );
        assert!(items.iter().all(|i| i.article_number != "S00524"));
    }

    #[test]
    fn test_software_modules_follow_hosting() {
        let licensing = Licensing {
            system_type: SystemType::OnPrem,
            system_users: 5,
        };
        let selections = [
            SoftwareSelection {
                module: software_module("Visitor").unwrap(),
                quantity: 25,
            },
            SoftwareSelection {
                module: software_module("Multi realm").unwrap(),
                quantity: 99, // per-system module, quantity pinned to 1
            },
        ];
        let items = build_line_items(
            &sample_allocation(),
            Some(licensing),
            &selections,
            &sample_catalog(),
        );

        let visitor = items
            .iter()
            .find(|i| i.article_number == "SW-VIS-BASE")
            .unwrap();
        assert_eq!(visitor.quantity, 25);

        let realm = items.iter().find(|i| i.article_number == "SW-AC-MR").unwrap();
        assert_eq!(realm.quantity, 1);
    }

    #[test]
    fn test_rows_sorted_one_time_first_then_article() {
        let licensing = Licensing {
            system_type: SystemType::Cloud,
            system_users: 10,
        };
        let items = build_line_items(
            &sample_allocation(),
            Some(licensing),
            &[],
            &sample_catalog(),
        );

        let first_recurring = items
            .iter()
            .position(|i| i.method == PricingMethod::Recurring);
        if let Some(split) = first_recurring {
            assert!(
                items[split..]
                    .iter()
                    .all(|i| i.method == PricingMethod::Recurring)
            );
        }
        for pair in items.windows(2) {
            if pair[0].method == pair[1].method {
                assert!(pair[0].article_number <= pair[1].article_number);
            }
        }
    }
}
