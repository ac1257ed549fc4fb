use crate::{
    Result,
    constants::{SYNIO_INPUTS_PER_UNIT, SYNIO_OUTPUTS_PER_UNIT},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reader wiring protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Wiegand wiring, one physical port per reader direction.
    Wiegand,
    /// OSDP (RS-485 based reader protocol), no wiegand ports involved.
    Osdp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::Wiegand => write!(f, "Wiegand"),
            Protocol::Osdp => write!(f, "OSDP"),
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wiegand" => Ok(Protocol::Wiegand),
            "osdp" => Ok(Protocol::Osdp),
            _ => Err(Error::InvalidProtocol(s.to_string())),
        }
    }
}

/// Reader deployment topology.
///
/// Determines whether doors carry an in reader only, or an in and an out
/// reader pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deployment {
    /// In readers only.
    InOnly,
    /// In and out readers.
    InAndOut,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Deployment::InOnly => write!(f, "In"),
            Deployment::InAndOut => write!(f, "In & out"),
        }
    }
}

impl std::str::FromStr for Deployment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Quote sheets use "In"/"In Only" and "In & out"/"In & Out"
        // interchangeably; accept all spellings.
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "in only" => Ok(Deployment::InOnly),
            "in & out" | "in and out" | "in&out" => Ok(Deployment::InAndOut),
            _ => Err(Error::InvalidDeployment(s.to_string())),
        }
    }
}

/// Controller communication type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommsType {
    /// IP-connected controllers.
    Ip,
    /// RS-485 bus behind a gateway.
    Rs485,
    /// Mixed estate of RS-485 and IP controllers.
    Mixed,
}

impl fmt::Display for CommsType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommsType::Ip => write!(f, "IP"),
            CommsType::Rs485 => write!(f, "RS-485"),
            CommsType::Mixed => write!(f, "Mixed (RS-485 & IP)"),
        }
    }
}

impl std::str::FromStr for CommsType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ip" => Ok(CommsType::Ip),
            "rs-485" | "rs485" => Ok(CommsType::Rs485),
            "mixed" | "mixed (rs-485 & ip)" => Ok(CommsType::Mixed),
            _ => Err(Error::InvalidCommsType(s.to_string())),
        }
    }
}

/// Platform hosting model, selects software articles and SMC applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    Cloud,
    OnPrem,
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SystemType::Cloud => write!(f, "Cloud"),
            SystemType::OnPrem => write!(f, "On-Prem"),
        }
    }
}

impl std::str::FromStr for SystemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloud" => Ok(SystemType::Cloud),
            "on-prem" | "onprem" | "on prem" => Ok(SystemType::OnPrem),
            _ => Err(Error::InvalidSystemType(s.to_string())),
        }
    }
}

/// Synguard controller range.
///
/// `Ord` follows declaration order, which is the display order used in
/// hardware summaries (gateway first, expansion I/O last).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Model {
    /// Head-end gateway; downstream controllers report through it. Provides
    /// limited local door capacity in some topologies.
    SynApp,
    /// Standalone single-door controller, runs without a SynApp.
    SynOne,
    /// Two-door RS-485 controller.
    SynConSC,
    /// Four-door RS-485 controller.
    SynConDuoDuo,
    /// Eight-door high-capacity controller (OSDP only).
    SynConEvo,
    /// Expansion I/O module, not tied to a specific door.
    SynIO,
}

impl Model {
    /// All models in display order.
    pub const ALL: [Model; 6] = [
        Model::SynApp,
        Model::SynOne,
        Model::SynConSC,
        Model::SynConDuoDuo,
        Model::SynConEvo,
        Model::SynIO,
    ];

    /// Returns `true` for the gateway model.
    #[inline]
    #[must_use]
    pub fn is_gateway(self) -> bool {
        matches!(self, Model::SynApp)
    }

    /// Returns `true` for the expansion I/O model.
    #[inline]
    #[must_use]
    pub fn is_expansion_io(self) -> bool {
        matches!(self, Model::SynIO)
    }

    /// Built-in auxiliary input points per unit.
    ///
    /// Door controllers dedicate their onboard inputs to door sensors and
    /// REX buttons, so only SynIO contributes free input points.
    #[must_use]
    pub fn base_inputs(self) -> u32 {
        match self {
            Model::SynIO => SYNIO_INPUTS_PER_UNIT,
            _ => 0,
        }
    }

    /// Built-in auxiliary output points per unit.
    ///
    /// Door controllers dedicate their onboard relays to locks, so only
    /// SynIO contributes free output points.
    #[must_use]
    pub fn base_outputs(self) -> u32 {
        match self {
            Model::SynIO => SYNIO_OUTPUTS_PER_UNIT,
            _ => 0,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Model::SynApp => "SynApp",
            Model::SynOne => "SynOne",
            Model::SynConSC => "SynConSC",
            Model::SynConDuoDuo => "SynConDuoDuo",
            Model::SynConEvo => "SynConEvo",
            Model::SynIO => "SynIO",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synapp" => Ok(Model::SynApp),
            "synone" => Ok(Model::SynOne),
            "synconsc" => Ok(Model::SynConSC),
            "synconduoduo" => Ok(Model::SynConDuoDuo),
            "synconevo" => Ok(Model::SynConEvo),
            "synio" => Ok(Model::SynIO),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

/// One configuration session's requirements.
///
/// A `Requirement` is a plain immutable value: rebuild it whenever a field
/// changes and rerun the engine. The allocation result is a pure function
/// of this value and the topology matrix, so there is no derived state to
/// keep in sync.
///
/// In readers are not stored: every door carries exactly one in reader, so
/// [`Requirement::readers_in`] always equals `doors`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Number of physical doors to terminate.
    pub doors: u32,
    /// Number of doors that additionally need an out reader (≤ `doors`).
    pub readers_out: u32,
    /// Auxiliary inputs required beyond built-in door sensors/REX.
    pub extra_inputs: u32,
    /// Auxiliary outputs required beyond built-in lock relays.
    pub extra_outputs: u32,
    /// Reader protocol, `None` while the form is incomplete.
    pub protocol: Option<Protocol>,
    /// Reader deployment, `None` while the form is incomplete.
    pub deployment: Option<Deployment>,
    /// Comms type, `None` while the form is incomplete.
    pub comms: Option<CommsType>,
    /// Preferred doors-per-controller capacity. Ignored unless it matches
    /// an eligible model's effective door capacity.
    pub target_doors_per_controller: Option<u32>,
    /// Zero the SynApp's own door/reader/I/O contribution even when the
    /// unit itself is still required.
    pub exclude_gateway_door: bool,
}

impl Requirement {
    /// Create an empty requirement (all counts zero, nothing selected).
    #[must_use]
    pub fn new() -> Self {
        Self {
            doors: 0,
            readers_out: 0,
            extra_inputs: 0,
            extra_outputs: 0,
            protocol: None,
            deployment: None,
            comms: None,
            target_doors_per_controller: None,
            exclude_gateway_door: false,
        }
    }

    /// Set the door count.
    #[must_use]
    pub fn with_doors(mut self, doors: u32) -> Self {
        self.doors = doors;
        self
    }

    /// Set the out-reader count.
    #[must_use]
    pub fn with_readers_out(mut self, readers_out: u32) -> Self {
        self.readers_out = readers_out;
        self
    }

    /// Set auxiliary input/output demands.
    #[must_use]
    pub fn with_io(mut self, inputs: u32, outputs: u32) -> Self {
        self.extra_inputs = inputs;
        self.extra_outputs = outputs;
        self
    }

    /// Select the full topology triple.
    #[must_use]
    pub fn with_topology(
        mut self,
        protocol: Protocol,
        deployment: Deployment,
        comms: CommsType,
    ) -> Self {
        self.protocol = Some(protocol);
        self.deployment = Some(deployment);
        self.comms = Some(comms);
        self
    }

    /// Set the target doors-per-controller hint.
    #[must_use]
    pub fn with_target_capacity(mut self, capacity: u32) -> Self {
        self.target_doors_per_controller = Some(capacity);
        self
    }

    /// Exclude the gateway's own door/reader/I/O contribution.
    #[must_use]
    pub fn without_gateway_door(mut self) -> Self {
        self.exclude_gateway_door = true;
        self
    }

    /// In readers, derived: one per door.
    #[inline]
    #[must_use]
    pub fn readers_in(&self) -> u32 {
        self.doors
    }

    /// Total readers required, in plus out.
    #[inline]
    #[must_use]
    pub fn total_readers(&self) -> u32 {
        self.readers_in() + self.readers_out
    }

    /// Returns `true` once protocol, deployment and comms are all chosen.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.protocol.is_some() && self.deployment.is_some() && self.comms.is_some()
    }

    /// Returns `true` when nothing is demanded (no doors, no extra I/O).
    #[must_use]
    pub fn is_empty_demand(&self) -> bool {
        self.doors == 0 && self.extra_inputs == 0 && self.extra_outputs == 0
    }

    /// Clamp dependent fields: out readers can never exceed doors.
    ///
    /// Topology-dependent normalization (zeroing out readers on in-only
    /// deployments) lives with the gating rules in `synquote-topology`.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        if self.readers_out > self.doors {
            self.readers_out = self.doors;
        }
        self
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::new()
    }
}
