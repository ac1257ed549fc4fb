//! Device-count allocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use synquote_core::{
    Deployment, Model, Protocol, Requirement,
    constants::{SYNAPP_MAX_DOOR_CONTROLLERS, SYNAPP_MAX_READERS},
};
use synquote_topology::DeviceCapability;
use tracing::{debug, trace};

/// Unit counts per model, the engine's output.
///
/// Covers the whole model range; absent models count as zero. Iteration is
/// in [`Model`] display order (gateway first, expansion I/O last).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    counts: BTreeMap<Model, u32>,
}

impl Allocation {
    /// An all-zero allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit count for a model.
    #[must_use]
    pub fn count(&self, model: Model) -> u32 {
        self.counts.get(&model).copied().unwrap_or(0)
    }

    /// Iterate over models with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (Model, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&model, &count)| (model, count))
    }

    /// Total units across all models.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Returns `true` when no device is allocated.
    ///
    /// Callers must distinguish "nothing demanded" from "nothing eligible"
    /// by inspecting the requirement, not this flag.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    /// Door-controller models in use (non-gateway, non-expansion, count > 0).
    #[must_use]
    pub fn door_controller_models(&self) -> Vec<Model> {
        self.iter()
            .filter(|(model, _)| !model.is_gateway() && !model.is_expansion_io())
            .map(|(model, _)| model)
            .collect()
    }

    fn set(&mut self, model: Model, count: u32) {
        self.counts.insert(model, count);
    }

    fn add(&mut self, model: Model, quantity: u32) {
        *self.counts.entry(model).or_insert(0) += quantity;
    }
}

/// SynApp units needed for a managed estate.
///
/// One SynApp manages at most [`SYNAPP_MAX_DOOR_CONTROLLERS`] downstream
/// controllers and [`SYNAPP_MAX_READERS`] readers; whichever limit bites
/// harder wins. `baseline` keeps at least one unit when the topology
/// already forced a gateway in.
#[must_use]
pub fn gateway_units(dependent_controllers: u32, total_readers: u32, baseline: bool) -> u32 {
    let by_controllers = if dependent_controllers > 0 {
        dependent_controllers.div_ceil(SYNAPP_MAX_DOOR_CONTROLLERS)
    } else {
        0
    };
    let by_readers = if total_readers > 0 {
        total_readers.div_ceil(SYNAPP_MAX_READERS)
    } else {
        0
    };
    by_controllers.max(by_readers).max(u32::from(baseline))
}

/// SynIO units needed to cover I/O demand left unmet by the built-in
/// points of already-allocated devices.
#[must_use]
pub fn expansion_units(
    required_inputs: u32,
    required_outputs: u32,
    provided_inputs: u32,
    provided_outputs: u32,
) -> u32 {
    let unmet_inputs = required_inputs.saturating_sub(provided_inputs);
    let unmet_outputs = required_outputs.saturating_sub(provided_outputs);
    if unmet_inputs == 0 && unmet_outputs == 0 {
        return 0;
    }
    let by_inputs = unmet_inputs.div_ceil(Model::SynIO.base_inputs());
    let by_outputs = unmet_outputs.div_ceil(Model::SynIO.base_outputs());
    by_inputs.max(by_outputs)
}

/// Built-in I/O points contributed by allocated devices, SynIO excluded.
fn builtin_io(allocation: &Allocation, exclude_gateway: bool) -> (u32, u32) {
    let mut inputs = 0;
    let mut outputs = 0;
    for (model, quantity) in allocation.iter() {
        if model.is_expansion_io() {
            continue;
        }
        if model.is_gateway() && exclude_gateway {
            continue;
        }
        inputs += quantity * model.base_inputs();
        outputs += quantity * model.base_outputs();
    }
    (inputs, outputs)
}

/// Compute the device counts satisfying a requirement.
///
/// Pure and total: no validation is performed, and an empty `eligible` set
/// yields an all-zero allocation. Callers are expected to pass a
/// requirement normalized by
/// [`normalize_requirement`](synquote_topology::normalize_requirement).
///
/// The requirement's topology fields drive only the Wiegand in-and-out
/// packing rule; eligibility itself is fully described by `eligible`.
#[must_use]
pub fn allocate(eligible: &[DeviceCapability], req: &Requirement) -> Allocation {
    let mut allocation = Allocation::new();
    if eligible.is_empty() {
        trace!("no eligible devices, returning all-zero allocation");
        return allocation;
    }
    if req.is_empty_demand() {
        // Nothing demanded, nothing shipped: zero doors and zero extra
        // I/O must never produce a lone gateway.
        trace!("empty demand, returning all-zero allocation");
        return allocation;
    }

    let exclude_gateway = req.exclude_gateway_door;
    let gateway = eligible.iter().find(|d| d.is_gateway());
    let gateway_forced = eligible.iter().any(|d| d.requires_gateway);

    // Step 1: baseline gateway inclusion.
    let baseline_gateway = if gateway_forced {
        1
    } else {
        match gateway {
            Some(g) if g.doors > 0 && !exclude_gateway => 1,
            _ => 0,
        }
    };
    allocation.set(Model::SynApp, baseline_gateway);

    // Step 2: the gateway's own door reduces the demand on controllers.
    let mut doors_to_allocate = req.doors;
    if baseline_gateway > 0
        && let Some(g) = gateway
        && g.doors > 0
        && doors_to_allocate > 0
        && !exclude_gateway
    {
        doors_to_allocate = doors_to_allocate.saturating_sub(g.doors);
    }

    // Step 3: pick the door-controller model. Fall back to the gateway
    // itself only when nothing else can supply doors.
    let mut candidates: Vec<&DeviceCapability> =
        eligible.iter().filter(|d| d.is_door_controller()).collect();
    if candidates.is_empty()
        && let Some(g) = gateway
        && g.doors > 0
        && !exclude_gateway
    {
        candidates.push(g);
    }

    let selected = req
        .target_doors_per_controller
        .and_then(|target| candidates.iter().copied().find(|d| d.doors == target))
        .or_else(|| {
            // Highest capacity wins; first listed wins ties.
            let mut best: Option<&DeviceCapability> = None;
            for device in candidates.iter().copied() {
                if best.is_none_or(|b| device.doors > b.doors) {
                    best = Some(device);
                }
            }
            best
        });

    // Step 4: door-controller quantity.
    if let Some(selected) = selected
        && req.doors > 0
    {
        let wiegand_in_out = req.protocol == Some(Protocol::Wiegand)
            && req.deployment == Some(Deployment::InAndOut)
            && selected.model == Model::SynConSC;
        let quantity = if wiegand_in_out {
            // One unit per out-capable door, remaining in-only doors
            // packed two per unit.
            let in_out_units = req.readers_out;
            let in_only_doors = req.doors.saturating_sub(req.readers_out);
            in_out_units + in_only_doors.div_ceil(2)
        } else if doors_to_allocate > 0 && selected.doors > 0 {
            doors_to_allocate.div_ceil(selected.doors)
        } else {
            0
        };
        if quantity > 0 {
            allocation.add(selected.model, quantity);
        }
        debug!(
            model = %selected.model,
            quantity,
            wiegand_in_out,
            "selected door controller"
        );
    }

    // Step 5: reconcile the gateway count. A pure standalone estate needs
    // none; otherwise the management limits decide.
    let standalone_only = allocation.door_controller_models() == [Model::SynOne]
        && eligible
            .iter()
            .any(|d| d.model == Model::SynOne && !d.requires_gateway);
    if standalone_only {
        allocation.set(Model::SynApp, 0);
    } else {
        let dependent_units: u32 = eligible
            .iter()
            .filter(|d| d.requires_gateway && !d.is_gateway())
            .map(|d| allocation.count(d.model))
            .sum();
        let baseline = allocation.count(Model::SynApp) > 0;
        let gateways = gateway_units(dependent_units, req.total_readers(), baseline);
        allocation.set(Model::SynApp, gateways);
        trace!(dependent_units, gateways, "reconciled gateway count");
    }

    // Step 6: expansion I/O sized from whatever demand is still unmet.
    let (provided_inputs, provided_outputs) = builtin_io(&allocation, exclude_gateway);
    let expansion = expansion_units(
        req.extra_inputs,
        req.extra_outputs,
        provided_inputs,
        provided_outputs,
    );
    allocation.set(Model::SynIO, expansion);

    debug!(total_units = allocation.total_units(), "allocation complete");
    allocation
}
