//! Requirements-to-hardware allocation engine.
//!
//! Given the eligible device set for a topology (from `synquote-topology`)
//! and a numeric [`Requirement`](synquote_core::Requirement), this crate
//! computes the minimal device counts: the chosen door-controller model and
//! quantity, the SynApp gateway count (conditionally required, fanning out
//! past its management limits) and the SynIO expansion count sized from
//! leftover I/O demand.
//!
//! # Data flow
//!
//! ```text
//! Requirement ─┬─> TopologyResolver ──> &[DeviceCapability] ─┐
//!              │                                             ├─> allocate ──> Allocation
//!              └─────────────────────────────────────────────┘
//! ```
//!
//! Allocation is a pure function: identical inputs always produce identical
//! output, there is no hidden state, and nothing is mutated. The [`Engine`]
//! wrapper adds a memo cache keyed on the full requirement so event-driven
//! recomputation stays cheap.
//!
//! # Failure semantics
//!
//! The engine never fails. An empty eligible set yields an all-zero
//! allocation; an unsatisfiable requirement yields the best-effort
//! allocation, with the gap surfaced through [`ResourceSummary::shortfalls`].

pub mod allocation;
pub mod cache;
pub mod summary;

pub use allocation::{Allocation, allocate, expansion_units, gateway_units};
pub use cache::Engine;
pub use summary::{Resource, ResourceSummary, Shortfall, summarize};
