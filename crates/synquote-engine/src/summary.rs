//! Provided-versus-required resource accounting.
//!
//! The engine never rejects an unsatisfiable requirement; it returns the
//! best-effort allocation and leaves the caller to surface the gap. This
//! module computes what an allocation actually provides under its topology
//! and lists every resource that falls short.

use crate::allocation::Allocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use synquote_core::{Protocol, Requirement, constants::WIEGAND_PORTS_PER_IN_OUT_DOOR};
use synquote_topology::DeviceCapability;

/// A resource dimension tracked by the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    Doors,
    /// Wiegand in readers (ports in in-only use).
    WiegandReadersIn,
    /// Wiegand out readers (port pairs).
    WiegandReadersOut,
    /// OSDP readers, in and out combined.
    OsdpReaders,
    Inputs,
    Outputs,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resource::Doors => write!(f, "Doors"),
            Resource::WiegandReadersIn => write!(f, "Wiegand readers (in)"),
            Resource::WiegandReadersOut => write!(f, "Wiegand readers (out)"),
            Resource::OsdpReaders => write!(f, "OSDP readers"),
            Resource::Inputs => write!(f, "Inputs"),
            Resource::Outputs => write!(f, "Outputs"),
        }
    }
}

/// One resource whose provision falls short of the requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub resource: Resource,
    pub required: u32,
    pub provided: u32,
}

/// Totals provided by an allocation under one topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Doors terminated.
    pub doors: u32,
    /// Readers served: OSDP readers under OSDP, wiegand ports under Wiegand.
    pub readers: u32,
    /// Raw wiegand ports.
    pub wiegand_ports: u32,
    /// In-only readers supportable on those ports (one port each).
    pub wiegand_in_only_support: u32,
    /// In-and-out door pairs supportable on those ports (two ports each).
    pub wiegand_in_out_pairs: u32,
    /// Built-in auxiliary inputs.
    pub inputs: u32,
    /// Built-in auxiliary outputs.
    pub outputs: u32,
}

impl ResourceSummary {
    /// Resources the allocation fails to cover, in display order.
    ///
    /// Empty when the requirement is fully satisfied. The reader rows
    /// depend on the protocol: Wiegand compares port counts (and pairs for
    /// out readers), OSDP compares reader counts.
    #[must_use]
    pub fn shortfalls(&self, req: &Requirement) -> Vec<Shortfall> {
        let mut out = Vec::new();
        let mut check = |resource, required, provided| {
            if provided < required {
                out.push(Shortfall {
                    resource,
                    required,
                    provided,
                });
            }
        };

        check(Resource::Doors, req.doors, self.doors);
        match req.protocol {
            Some(Protocol::Wiegand) => {
                check(
                    Resource::WiegandReadersIn,
                    req.readers_in(),
                    self.wiegand_in_only_support,
                );
                if req.readers_out > 0 {
                    check(
                        Resource::WiegandReadersOut,
                        req.readers_out,
                        self.wiegand_in_out_pairs,
                    );
                }
            }
            Some(Protocol::Osdp) => {
                check(Resource::OsdpReaders, req.total_readers(), self.readers);
            }
            None => {}
        }
        check(Resource::Inputs, req.extra_inputs, self.inputs);
        check(Resource::Outputs, req.extra_outputs, self.outputs);
        out
    }

    /// Returns `true` when every requirement dimension is covered.
    #[must_use]
    pub fn satisfies(&self, req: &Requirement) -> bool {
        self.shortfalls(req).is_empty()
    }
}

/// Compute what `allocation` provides under the given eligible set.
///
/// Devices absent from `eligible` (the SynIO expansion module, or a model
/// carried over from a previous topology) contribute no doors or readers,
/// but their built-in I/O points still count. The gateway's contribution is
/// zeroed entirely when the requirement excludes its door.
#[must_use]
pub fn summarize(
    eligible: &[DeviceCapability],
    allocation: &Allocation,
    req: &Requirement,
) -> ResourceSummary {
    let mut summary = ResourceSummary::default();

    for (model, quantity) in allocation.iter() {
        if model.is_gateway() && req.exclude_gateway_door {
            continue;
        }
        let capability = eligible.iter().find(|d| d.model == model);
        let (doors, readers, wiegand_ports) = match capability {
            Some(cap) => {
                let readers = match req.protocol {
                    Some(Protocol::Osdp) => cap.readers,
                    Some(Protocol::Wiegand) => cap.wiegand_ports,
                    None => 0,
                };
                (cap.doors, readers, cap.wiegand_ports)
            }
            None => (0, 0, 0),
        };
        summary.doors += quantity * doors;
        summary.readers += quantity * readers;
        summary.wiegand_ports += quantity * wiegand_ports;
        summary.inputs += quantity * model.base_inputs();
        summary.outputs += quantity * model.base_outputs();
    }

    summary.wiegand_in_only_support = summary.wiegand_ports;
    summary.wiegand_in_out_pairs = summary.wiegand_ports / WIEGAND_PORTS_PER_IN_OUT_DOOR;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;
    use synquote_core::{CommsType, Deployment, Model};
    use synquote_topology::TopologyResolver;

    fn setup(req: &Requirement) -> (Vec<DeviceCapability>, Allocation) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms).to_vec();
        let allocation = allocate(&eligible, req);
        (eligible, allocation)
    }

    #[test]
    fn test_satisfied_osdp_requirement_has_no_shortfall() {
        let req = Requirement::new()
            .with_topology(Protocol::Osdp, Deployment::InOnly, CommsType::Rs485)
            .with_doors(12);
        let (eligible, allocation) = setup(&req);
        let summary = summarize(&eligible, &allocation, &req);

        // 1 gateway door + 2 × SynConEvo = 17 doors, 2 + 32 readers.
        assert_eq!(summary.doors, 17);
        assert_eq!(summary.readers, 34);
        assert!(summary.satisfies(&req));
    }

    #[test]
    fn test_standalone_shortfall_is_surfaced() {
        // Wiegand over IP, 5 doors: the gateway-door subtraction leaves
        // 4 SynOne units and the summary reports the gap.
        let req = Requirement::new()
            .with_topology(Protocol::Wiegand, Deployment::InOnly, CommsType::Ip)
            .with_doors(5);
        let (eligible, allocation) = setup(&req);
        let summary = summarize(&eligible, &allocation, &req);

        assert_eq!(summary.doors, 4);
        let shortfalls = summary.shortfalls(&req);
        assert!(shortfalls.iter().any(|s| {
            s.resource == Resource::Doors && s.required == 5 && s.provided == 4
        }));
    }

    #[test]
    fn test_wiegand_pairs_halve_port_support() {
        let req = Requirement::new()
            .with_topology(Protocol::Wiegand, Deployment::InAndOut, CommsType::Rs485)
            .with_doors(5)
            .with_readers_out(2);
        let (eligible, allocation) = setup(&req);
        let summary = summarize(&eligible, &allocation, &req);

        // 4 SynConSC units × 2 ports.
        assert_eq!(summary.wiegand_ports, 8);
        assert_eq!(summary.wiegand_in_only_support, 8);
        assert_eq!(summary.wiegand_in_out_pairs, 4);
        assert!(summary.satisfies(&req));
    }

    #[test]
    fn test_excluded_gateway_contributes_nothing() {
        let req = Requirement::new()
            .with_topology(Protocol::Osdp, Deployment::InOnly, CommsType::Rs485)
            .with_doors(1)
            .without_gateway_door();
        let (eligible, allocation) = setup(&req);
        assert_eq!(allocation.count(Model::SynApp), 1);
        let summary = summarize(&eligible, &allocation, &req);

        // Only the SynConEvo's door and readers count.
        assert_eq!(summary.doors, 8);
        assert_eq!(summary.readers, 16);
    }

    #[test]
    fn test_expansion_io_counts_toward_inputs() {
        let req = Requirement::new()
            .with_topology(Protocol::Osdp, Deployment::InOnly, CommsType::Rs485)
            .with_io(20, 0);
        let (eligible, allocation) = setup(&req);
        assert_eq!(allocation.count(Model::SynIO), 2);
        let summary = summarize(&eligible, &allocation, &req);

        assert_eq!(summary.inputs, 32);
        assert_eq!(summary.outputs, 32);
        assert!(summary.satisfies(&req));
    }

    #[test]
    fn test_io_shortfall_reported() {
        let req = Requirement::new()
            .with_topology(Protocol::Osdp, Deployment::InOnly, CommsType::Rs485)
            .with_io(20, 0);
        let summary = ResourceSummary {
            inputs: 6,
            ..ResourceSummary::default()
        };
        let shortfalls = summary.shortfalls(&req);
        assert!(shortfalls.iter().any(|s| {
            s.resource == Resource::Inputs && s.required == 20 && s.provided == 6
        }));
    }
}
