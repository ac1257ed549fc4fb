//! Product records and the article-number catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How a product is charged.
///
/// `Ord` puts one-time purchases before recurring charges, which is the
/// fixed row order on rendered quotes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum PricingMethod {
    /// One-time purchase.
    #[default]
    Upfront,
    /// Recurring (monthly) charge.
    Recurring,
}

impl PricingMethod {
    /// Returns `true` for recurring charges.
    #[inline]
    #[must_use]
    pub fn is_recurring(self) -> bool {
        matches!(self, PricingMethod::Recurring)
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PricingMethod::Upfront => write!(f, "Upfront"),
            PricingMethod::Recurring => write!(f, "Recurring"),
        }
    }
}

/// One price-list entry, keyed by article number.
///
/// Mirrors the commercial price list columns: article number, product
/// name, English description, pricing method, MSRP in both currencies,
/// standard discount and SMC (maintenance) percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Article number, e.g. "S03835".
    pub article_number: String,

    /// Product display name, e.g. "SynApp-DIN-HW".
    pub model: String,

    /// English catalog description.
    #[serde(default)]
    pub description_en: String,

    /// One-off or recurring charge.
    #[serde(default)]
    pub method: PricingMethod,

    /// List price in GBP.
    #[serde(default)]
    pub msrp_gbp: Decimal,

    /// List price in EUR.
    #[serde(default)]
    pub msrp_eur: Decimal,

    /// Standard discount percentage (0-100).
    #[serde(default)]
    pub discount_percent: Decimal,

    /// SMC (software maintenance contract) percentage applied to the net
    /// one-off price of on-prem systems.
    #[serde(default)]
    pub smc_percent: Decimal,
}

impl Product {
    /// Create a product with required fields; prices default to zero.
    pub fn new(article_number: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            article_number: article_number.into(),
            model: model.into(),
            description_en: String::new(),
            method: PricingMethod::Upfront,
            msrp_gbp: Decimal::ZERO,
            msrp_eur: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            smc_percent: Decimal::ZERO,
        }
    }

    /// Set the English description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_en = description.into();
        self
    }

    /// Set the pricing method.
    #[must_use]
    pub fn with_method(mut self, method: PricingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the GBP list price.
    #[must_use]
    pub fn with_msrp_gbp(mut self, msrp: Decimal) -> Self {
        self.msrp_gbp = msrp;
        self
    }

    /// Set the standard discount percentage.
    #[must_use]
    pub fn with_discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Set the SMC percentage.
    #[must_use]
    pub fn with_smc(mut self, percent: Decimal) -> Self {
        self.smc_percent = percent;
        self
    }
}

/// Immutable price-list snapshot, looked up by article number.
///
/// Treated as read-only per invocation: the engine and the line-item
/// builder never mutate it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// An empty catalog (every lookup misses).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from product records. Later duplicates of an
    /// article number replace earlier ones.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Insert or replace a product.
    pub fn insert(&mut self, product: Product) {
        self.products
            .insert(product.article_number.clone(), product);
    }

    /// Look up a product by article number. A miss is a valid outcome,
    /// not an error.
    #[must_use]
    pub fn lookup(&self, article_number: &str) -> Option<&Product> {
        self.products.get(article_number)
    }

    /// Number of products in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` when no products are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
