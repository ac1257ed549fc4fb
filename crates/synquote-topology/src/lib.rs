//! Topology resolution for the Synguard controller range.
//!
//! Controller capacities are not fixed per model: the same device has
//! different effective door, reader and wiegand-port capacities depending on
//! the protocol, deployment and comms type it is wired into. This crate owns
//! the compatibility matrix that maps each (protocol, deployment, comms)
//! combination to its eligible device set, plus the gating rules that
//! constrain which selections a caller may offer next.
//!
//! # Data flow
//!
//! ```text
//! Requirement ──> TopologyResolver::resolve ──> &[DeviceCapability] ──> engine
//! ```
//!
//! Resolution is total: an incomplete or unsupported combination yields an
//! empty device set, never an error. Callers treat an empty set as "not yet
//! configurable".

pub mod capability;
pub mod gating;
pub mod matrix;

pub use capability::DeviceCapability;
pub use gating::{
    available_comms, available_deployments, normalize_requirement, out_readers_supported,
    target_capacities,
};
pub use matrix::TopologyResolver;
