//! Priced quote assembly.
//!
//! Downstream consumer of the allocation engine: joins each allocated
//! device against the catalog, adds platform and user-licence rows plus
//! selected software modules, orders the rows (one-time before recurring,
//! article number as tiebreak) and rolls the result up into one-off and
//! monthly totals with the on-prem SMC cost.
//!
//! Pricing here is deliberately simple arithmetic; everything with
//! engineering depth lives upstream in `synquote-engine`.

pub mod builder;
pub mod line_item;
pub mod quote;
pub mod totals;

pub use builder::{Licensing, SoftwareSelection, build_line_items};
pub use line_item::{CostType, LineItem};
pub use quote::{Quote, SystemDetails};
pub use totals::{QuoteTotals, compute_totals};
