//! The protocol × deployment × comms compatibility matrix.
//!
//! Every combination is listed explicitly, either as a supported device set
//! or as intentionally unsupported. [`TopologyResolver::new`] checks the
//! table for completeness and structural soundness, so a missing combination
//! is a construction-time error rather than a silent empty result at
//! resolution time.

use crate::capability::DeviceCapability;
use std::collections::HashMap;
use synquote_core::{CommsType, Deployment, Error, Model, Protocol, Result};

/// Explicit support status for one matrix combination.
#[derive(Debug, Clone)]
enum Support {
    Supported(Vec<DeviceCapability>),
    /// The combination is known and deliberately offers no hardware
    /// (e.g. Wiegand in-and-out cannot run over IP).
    Unsupported,
}

type MatrixKey = (Protocol, Deployment, CommsType);

/// Validated lookup table from topology to eligible devices.
#[derive(Debug, Clone)]
pub struct TopologyResolver {
    table: HashMap<MatrixKey, Support>,
}

impl TopologyResolver {
    /// Build and validate the compatibility matrix.
    ///
    /// # Errors
    /// Returns `Error::TopologyMatrix` if the table misses a combination,
    /// contains a duplicate or empty device set, lacks a gateway record in
    /// a supported set, offers SynConEvo under Wiegand, or carries wiegand
    /// ports on an OSDP entry.
    pub fn new() -> Result<Self> {
        let resolver = Self {
            table: build_table(),
        };
        resolver.validate()?;
        Ok(resolver)
    }

    /// Resolve the eligible device set for a (possibly incomplete)
    /// configuration.
    ///
    /// Total over all inputs: any `None`, or any combination the matrix
    /// marks unsupported, yields the empty slice. Callers must treat an
    /// empty result as "not yet configurable", not as an error.
    #[must_use]
    pub fn resolve(
        &self,
        protocol: Option<Protocol>,
        deployment: Option<Deployment>,
        comms: Option<CommsType>,
    ) -> &[DeviceCapability] {
        let (Some(protocol), Some(deployment), Some(comms)) = (protocol, deployment, comms)
        else {
            return &[];
        };
        match self.table.get(&(protocol, deployment, comms)) {
            Some(Support::Supported(devices)) => devices,
            Some(Support::Unsupported) | None => &[],
        }
    }

    /// Like [`resolve`](Self::resolve) but keyed by a complete triple.
    #[must_use]
    pub fn resolve_exact(
        &self,
        protocol: Protocol,
        deployment: Deployment,
        comms: CommsType,
    ) -> &[DeviceCapability] {
        self.resolve(Some(protocol), Some(deployment), Some(comms))
    }

    fn validate(&self) -> Result<()> {
        for protocol in [Protocol::Wiegand, Protocol::Osdp] {
            for deployment in [Deployment::InOnly, Deployment::InAndOut] {
                for comms in [CommsType::Ip, CommsType::Rs485, CommsType::Mixed] {
                    let key = (protocol, deployment, comms);
                    let support = self.table.get(&key).ok_or_else(|| {
                        Error::TopologyMatrix(format!(
                            "missing combination {protocol} / {deployment} / {comms}"
                        ))
                    })?;
                    if let Support::Supported(devices) = support {
                        validate_device_set(key, devices)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn validate_device_set(key: MatrixKey, devices: &[DeviceCapability]) -> Result<()> {
    let (protocol, deployment, comms) = key;
    let describe = |msg: &str| {
        Error::TopologyMatrix(format!("{protocol} / {deployment} / {comms}: {msg}"))
    };

    if devices.is_empty() {
        return Err(describe("supported combination with empty device set"));
    }

    let gateways = devices.iter().filter(|d| d.is_gateway()).count();
    if gateways != 1 {
        return Err(describe("expected exactly one gateway record"));
    }

    for (i, device) in devices.iter().enumerate() {
        if devices[..i].iter().any(|d| d.model == device.model) {
            return Err(describe("duplicate model in device set"));
        }
        if device.is_gateway() && !device.requires_gateway {
            return Err(describe("gateway record must require itself"));
        }
        if protocol == Protocol::Wiegand && device.model == Model::SynConEvo {
            return Err(describe("SynConEvo is never offered on Wiegand estates"));
        }
        if protocol == Protocol::Osdp && device.wiegand_ports != 0 {
            return Err(describe("OSDP devices carry no wiegand ports"));
        }
    }
    Ok(())
}

fn build_table() -> HashMap<MatrixKey, Support> {
    use CommsType::{Ip, Mixed, Rs485};
    use Deployment::{InAndOut, InOnly};
    use Model::{SynApp, SynConDuoDuo, SynConEvo, SynConSC, SynOne};
    use Protocol::{Osdp, Wiegand};

    let mut table = HashMap::new();

    // Wiegand, in readers only. Over IP the only controllers are the
    // gateway's own door and the standalone SynOne; over RS-485 the
    // two-door SynConSC hangs off the gateway bus.
    table.insert(
        (Wiegand, InOnly, Ip),
        Support::Supported(vec![
            DeviceCapability::managed(SynApp, 1, 1, 1),
            DeviceCapability::standalone(SynOne, 1, 1, 1),
        ]),
    );
    table.insert(
        (Wiegand, InOnly, Rs485),
        Support::Supported(vec![
            DeviceCapability::managed(SynApp, 1, 1, 1),
            DeviceCapability::managed(SynConSC, 2, 2, 2),
        ]),
    );
    table.insert((Wiegand, InOnly, Mixed), Support::Unsupported);

    // Wiegand, in and out readers: RS-485 only. Each door consumes an
    // in+out wiegand pair, halving the SynConSC's door capacity; the
    // SynApp contributes nothing of its own in this mode.
    table.insert((Wiegand, InAndOut, Ip), Support::Unsupported);
    table.insert(
        (Wiegand, InAndOut, Rs485),
        Support::Supported(vec![
            DeviceCapability::managed(SynApp, 0, 0, 0),
            DeviceCapability::managed(SynConSC, 1, 2, 2),
        ]),
    );
    table.insert((Wiegand, InAndOut, Mixed), Support::Unsupported);

    // OSDP capacities do not depend on deployment, only on comms.
    let osdp_ip = vec![
        DeviceCapability::managed(SynApp, 1, 2, 0),
        DeviceCapability::managed(SynConEvo, 8, 16, 0),
        DeviceCapability::standalone(SynOne, 1, 2, 0),
    ];
    let osdp_rs485 = vec![
        DeviceCapability::managed(SynApp, 1, 2, 0),
        DeviceCapability::managed(SynConSC, 2, 4, 0),
        DeviceCapability::managed(SynConDuoDuo, 4, 8, 0),
        DeviceCapability::managed(SynConEvo, 8, 16, 0),
    ];
    let osdp_mixed = vec![
        DeviceCapability::managed(SynApp, 1, 2, 0),
        DeviceCapability::managed(SynConSC, 2, 4, 0),
        DeviceCapability::managed(SynConDuoDuo, 4, 8, 0),
        DeviceCapability::managed(SynConEvo, 8, 16, 0),
        DeviceCapability::standalone(SynOne, 1, 2, 0),
    ];

    for deployment in [InOnly, InAndOut] {
        table.insert((Osdp, deployment, Ip), Support::Supported(osdp_ip.clone()));
        table.insert(
            (Osdp, deployment, Rs485),
            Support::Supported(osdp_rs485.clone()),
        );
        table.insert(
            (Osdp, deployment, Mixed),
            Support::Supported(osdp_mixed.clone()),
        );
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TopologyResolver {
        TopologyResolver::new().unwrap()
    }

    #[test]
    fn test_construction_validates() {
        assert!(TopologyResolver::new().is_ok());
    }

    #[test]
    fn test_incomplete_configuration_yields_empty() {
        let r = resolver();
        assert!(r.resolve(None, None, None).is_empty());
        assert!(
            r.resolve(Some(Protocol::Wiegand), None, Some(CommsType::Ip))
                .is_empty()
        );
        assert!(
            r.resolve(Some(Protocol::Osdp), Some(Deployment::InOnly), None)
                .is_empty()
        );
    }

    #[test]
    fn test_unsupported_combination_yields_empty() {
        let r = resolver();
        assert!(
            r.resolve_exact(Protocol::Wiegand, Deployment::InAndOut, CommsType::Ip)
                .is_empty()
        );
        assert!(
            r.resolve_exact(Protocol::Wiegand, Deployment::InOnly, CommsType::Mixed)
                .is_empty()
        );
    }

    #[test]
    fn test_wiegand_in_and_out_halves_synconsc() {
        let r = resolver();
        let devices = r.resolve_exact(Protocol::Wiegand, Deployment::InAndOut, CommsType::Rs485);
        let sc = devices
            .iter()
            .find(|d| d.model == Model::SynConSC)
            .unwrap();
        assert_eq!(sc.doors, 1);
        assert_eq!(sc.readers, 2);
        assert_eq!(sc.wiegand_ports, 2);

        let gateway = devices.iter().find(|d| d.is_gateway()).unwrap();
        assert_eq!(gateway.doors, 0);
    }

    #[test]
    fn test_osdp_capacities_independent_of_deployment() {
        let r = resolver();
        for comms in [CommsType::Ip, CommsType::Rs485, CommsType::Mixed] {
            assert_eq!(
                r.resolve_exact(Protocol::Osdp, Deployment::InOnly, comms),
                r.resolve_exact(Protocol::Osdp, Deployment::InAndOut, comms),
            );
        }
    }
}
