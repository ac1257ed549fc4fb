//! Property-based tests for the allocation engine.
//!
//! These tests use proptest to generate requirements across the full input
//! space and verify the invariants that hold for every valid combination.

use proptest::prelude::*;
use synquote_core::{CommsType, Deployment, Model, Protocol, Requirement};
use synquote_engine::{allocate, summarize};
use synquote_topology::{TopologyResolver, normalize_requirement};

fn any_protocol() -> impl Strategy<Value = Protocol> {
    prop_oneof![Just(Protocol::Wiegand), Just(Protocol::Osdp)]
}

fn any_deployment() -> impl Strategy<Value = Deployment> {
    prop_oneof![Just(Deployment::InOnly), Just(Deployment::InAndOut)]
}

fn any_comms() -> impl Strategy<Value = CommsType> {
    prop_oneof![
        Just(CommsType::Ip),
        Just(CommsType::Rs485),
        Just(CommsType::Mixed),
    ]
}

/// A fully configured requirement with bounded demands.
fn any_requirement() -> impl Strategy<Value = Requirement> {
    (
        any_protocol(),
        any_deployment(),
        any_comms(),
        0u32..500,
        0u32..500,
        0u32..200,
        0u32..200,
        prop::option::of(0u32..10),
        any::<bool>(),
    )
        .prop_map(
            |(protocol, deployment, comms, doors, readers_out, inputs, outputs, hint, exclude)| {
                let mut req = Requirement::new()
                    .with_topology(protocol, deployment, comms)
                    .with_doors(doors)
                    .with_readers_out(readers_out)
                    .with_io(inputs, outputs);
                req.target_doors_per_controller = hint;
                req.exclude_gateway_door = exclude;
                normalize_requirement(req)
            },
        )
}

proptest! {
    /// Property: allocation is a pure function — identical inputs always
    /// produce identical output.
    #[test]
    fn prop_allocation_is_deterministic(req in any_requirement()) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);
        prop_assert_eq!(allocate(eligible, &req), allocate(eligible, &req));
    }

    /// Property: a requirement with zero doors and zero extra I/O yields
    /// an all-zero allocation on every topology.
    #[test]
    fn prop_zero_demand_is_all_zero(
        protocol in any_protocol(),
        deployment in any_deployment(),
        comms in any_comms(),
    ) {
        let resolver = TopologyResolver::new().unwrap();
        let req = normalize_requirement(
            Requirement::new().with_topology(protocol, deployment, comms),
        );
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);
        prop_assert!(allocate(eligible, &req).is_all_zero());
    }

    /// Property: adding doors never shrinks the selected door-controller
    /// quantity.
    #[test]
    fn prop_door_count_is_monotone(req in any_requirement(), extra in 1u32..50) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);

        let smaller = allocate(eligible, &req);
        let bigger_req = normalize_requirement(
            req.clone().with_doors(req.doors + extra),
        );
        let bigger = allocate(eligible, &bigger_req);

        for model in Model::ALL {
            if !model.is_gateway() && !model.is_expansion_io() {
                prop_assert!(
                    bigger.count(model) >= smaller.count(model),
                    "{} shrank from {} to {} when doors grew",
                    model,
                    smaller.count(model),
                    bigger.count(model),
                );
            }
        }
    }

    /// Property: whenever any device is eligible and doors are demanded,
    /// door capacity is provided, and a valid target hint is always
    /// respected exactly.
    #[test]
    fn prop_doors_demand_is_met_or_surfaced(req in any_requirement()) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);
        let allocation = allocate(eligible, &req);
        let summary = summarize(eligible, &allocation, &req);

        if eligible.is_empty() {
            prop_assert!(allocation.is_all_zero());
        } else if req.doors > 0 && !req.exclude_gateway_door {
            // Either the demand is met or the summary owns the shortfall.
            let covered = summary.doors >= req.doors;
            let surfaced = summary
                .shortfalls(&req)
                .iter()
                .any(|s| s.provided == summary.doors);
            prop_assert!(covered || surfaced);
        }
    }

    /// Property: at most one door-controller model is ever selected.
    #[test]
    fn prop_single_door_controller_model(req in any_requirement()) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);
        let allocation = allocate(eligible, &req);
        prop_assert!(allocation.door_controller_models().len() <= 1);
    }

    /// Property: expansion units never exceed what raw demand alone would
    /// require (built-in contributions only reduce the count).
    #[test]
    fn prop_expansion_bounded_by_raw_demand(req in any_requirement()) {
        let resolver = TopologyResolver::new().unwrap();
        let eligible = resolver.resolve(req.protocol, req.deployment, req.comms);
        let allocation = allocate(eligible, &req);
        if eligible.is_empty() {
            return Ok(());
        }
        let raw = req.extra_inputs.div_ceil(16).max(req.extra_outputs.div_ceil(16));
        prop_assert!(allocation.count(Model::SynIO) <= raw);
    }
}
