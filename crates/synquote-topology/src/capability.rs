//! Effective device capabilities under one topology.

use serde::{Deserialize, Serialize};
use synquote_core::Model;

/// A controller model's effective capacities under one specific
/// protocol × deployment × comms combination.
///
/// The numbers here are contextual, not per-model constants: a SynConSC
/// terminates two doors in a Wiegand in-only estate but only one door in a
/// Wiegand in-and-out estate, because each in-and-out door consumes a pair
/// of its wiegand ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapability {
    /// Controller model.
    pub model: Model,
    /// Doors terminated per unit in this topology.
    pub doors: u32,
    /// Readers served per unit in this topology.
    pub readers: u32,
    /// Wiegand ports per unit (always 0 under OSDP).
    pub wiegand_ports: u32,
    /// Whether deploying this device forces a SynApp into the estate.
    pub requires_gateway: bool,
}

impl DeviceCapability {
    /// A device that reports through a SynApp gateway.
    #[must_use]
    pub fn managed(model: Model, doors: u32, readers: u32, wiegand_ports: u32) -> Self {
        Self {
            model,
            doors,
            readers,
            wiegand_ports,
            requires_gateway: true,
        }
    }

    /// A device that runs without a SynApp gateway.
    #[must_use]
    pub fn standalone(model: Model, doors: u32, readers: u32, wiegand_ports: u32) -> Self {
        Self {
            model,
            doors,
            readers,
            wiegand_ports,
            requires_gateway: false,
        }
    }

    /// Returns `true` when this record describes the gateway itself.
    #[inline]
    #[must_use]
    pub fn is_gateway(&self) -> bool {
        self.model.is_gateway()
    }

    /// Returns `true` for devices that can be picked to supply door
    /// capacity (anything but the gateway and the expansion I/O module,
    /// with at least one door).
    #[must_use]
    pub fn is_door_controller(&self) -> bool {
        !self.model.is_gateway() && !self.model.is_expansion_io() && self.doors > 0
    }
}
