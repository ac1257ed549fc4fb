//! Selection gating rules.
//!
//! The configuration flow fixes protocol, then deployment, then comms type;
//! each choice narrows what the next selector may offer. These rules are the
//! single shared copy used by every front end, so a partially filled
//! configuration degrades the option lists instead of producing errors.

use crate::capability::DeviceCapability;
use synquote_core::{CommsType, Deployment, Protocol, Requirement};

/// Deployments available under the current protocol/comms selection.
///
/// Both deployments are offered except on Wiegand-over-IP estates, which
/// cannot wire out readers at all.
#[must_use]
pub fn available_deployments(
    protocol: Option<Protocol>,
    comms: Option<CommsType>,
) -> Vec<Deployment> {
    match (protocol, comms) {
        (Some(Protocol::Wiegand), Some(CommsType::Ip)) => vec![Deployment::InOnly],
        _ => vec![Deployment::InOnly, Deployment::InAndOut],
    }
}

/// Comms types available under the current protocol/deployment selection.
///
/// Empty until a protocol is chosen (and, for Wiegand, a deployment too).
#[must_use]
pub fn available_comms(
    protocol: Option<Protocol>,
    deployment: Option<Deployment>,
) -> Vec<CommsType> {
    match protocol {
        Some(Protocol::Wiegand) => match deployment {
            Some(Deployment::InOnly) => vec![CommsType::Ip, CommsType::Rs485],
            Some(Deployment::InAndOut) => vec![CommsType::Rs485],
            None => vec![],
        },
        Some(Protocol::Osdp) => vec![CommsType::Ip, CommsType::Rs485, CommsType::Mixed],
        None => vec![],
    }
}

/// Whether the current selection supports out readers.
///
/// Wiegand needs the in-and-out deployment; OSDP supports out readers
/// unless the deployment is pinned to in-only.
#[must_use]
pub fn out_readers_supported(
    protocol: Option<Protocol>,
    deployment: Option<Deployment>,
) -> bool {
    match protocol {
        Some(Protocol::Wiegand) => deployment == Some(Deployment::InAndOut),
        Some(Protocol::Osdp) => deployment != Some(Deployment::InOnly),
        None => false,
    }
}

/// Distinct door capacities a caller may pin as a target, ascending.
///
/// Only genuine door controllers count: the gateway and the expansion I/O
/// module are excluded, as are zero-door records.
#[must_use]
pub fn target_capacities(eligible: &[DeviceCapability]) -> Vec<u32> {
    let mut capacities: Vec<u32> = eligible
        .iter()
        .filter(|d| d.is_door_controller())
        .map(|d| d.doors)
        .collect();
    capacities.sort_unstable();
    capacities.dedup();
    capacities
}

/// Normalize a requirement against the gating rules.
///
/// Clamps out readers to the door count and zeroes them when the selected
/// topology has no out-reader support. The engine assumes its input has
/// been normalized this way.
#[must_use]
pub fn normalize_requirement(req: Requirement) -> Requirement {
    let mut req = req.clamped();
    if !out_readers_supported(req.protocol, req.deployment) {
        req.readers_out = 0;
    }
    req
}
