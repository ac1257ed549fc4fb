//! Assembled quote values.

use crate::builder::Licensing;
use crate::line_item::LineItem;
use crate::totals::{QuoteTotals, compute_totals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use synquote_core::{Requirement, SystemType};
use uuid::Uuid;

/// Snapshot of the configuration a quote was derived from.
///
/// Stored alongside the priced rows so a quote stays explainable after
/// the catalog or the matrix moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDetails {
    pub requirement: Requirement,
    pub system_type: Option<SystemType>,
    pub system_users: u32,
}

impl SystemDetails {
    /// Snapshot a requirement with no licensing chosen yet.
    #[must_use]
    pub fn from_requirement(requirement: Requirement) -> Self {
        Self {
            requirement,
            system_type: None,
            system_users: 0,
        }
    }

    /// Attach licensing choices.
    #[must_use]
    pub fn with_licensing(mut self, licensing: Licensing) -> Self {
        self.system_type = Some(licensing.system_type);
        self.system_users = licensing.system_users;
        self
    }
}

/// A complete priced quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    /// Project name, as entered by the sales user.
    pub name: String,
    pub created: DateTime<Utc>,
    /// Quotes are currently GBP-only.
    pub currency: String,
    pub system: SystemDetails,
    pub items: Vec<LineItem>,
    pub totals: QuoteTotals,
}

impl Quote {
    /// Assemble a quote from derived rows, stamping id and timestamp and
    /// computing totals.
    #[must_use]
    pub fn assemble(name: impl Into<String>, system: SystemDetails, items: Vec<LineItem>) -> Self {
        let totals = compute_totals(&items, system.system_type);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created: Utc::now(),
            currency: "GBP".to_string(),
            system,
            items,
            totals,
        }
    }
}
