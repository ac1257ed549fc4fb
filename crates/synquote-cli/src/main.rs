//! Command-line front end for the quote engine.
//!
//! A thin adapter: flags become a [`Requirement`], the engine derives the
//! hardware, and the result prints as a bill of materials with an optional
//! priced quote preview when a catalog snapshot is supplied.
//!
//! ```sh
//! synquote --protocol osdp --deployment "in & out" --comms mixed \
//!     --doors 24 --readers-out 6 --inputs 10 --outputs 4 \
//!     --system-type cloud --users 50 --catalog pricelist.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use synquote_catalog::{Catalog, Product, software_module};
use synquote_core::{CommsType, Deployment, Protocol, Requirement, SystemType};
use synquote_engine::{Allocation, Engine, ResourceSummary, Shortfall};
use synquote_quote::{Licensing, Quote, SoftwareSelection, SystemDetails, build_line_items};
use synquote_topology::normalize_requirement;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "synquote", version, about = "Synguard hardware quote configurator")]
struct Cli {
    /// Reader protocol (wiegand, osdp).
    #[arg(long)]
    protocol: Option<Protocol>,

    /// Reader deployment (in, "in & out").
    #[arg(long)]
    deployment: Option<Deployment>,

    /// Comms type (ip, rs-485, mixed).
    #[arg(long)]
    comms: Option<CommsType>,

    /// Number of doors.
    #[arg(long, default_value_t = 0)]
    doors: u32,

    /// Number of doors that also need an out reader.
    #[arg(long, default_value_t = 0)]
    readers_out: u32,

    /// Auxiliary inputs beyond built-in door sensors/REX.
    #[arg(long, default_value_t = 0)]
    inputs: u32,

    /// Auxiliary outputs beyond built-in lock relays.
    #[arg(long, default_value_t = 0)]
    outputs: u32,

    /// Preferred doors per controller; ignored if no eligible model
    /// matches.
    #[arg(long)]
    target_capacity: Option<u32>,

    /// Exclude the SynApp's built-in door and resources.
    #[arg(long)]
    exclude_gateway_door: bool,

    /// Platform hosting (cloud, on-prem); enables software line items.
    #[arg(long)]
    system_type: Option<SystemType>,

    /// Number of licensed system users.
    #[arg(long, default_value_t = 0)]
    users: u32,

    /// Software add-on selection, repeatable: NAME or NAME=QTY
    /// (e.g. --software "Visitor=25" --software "Multi realm").
    #[arg(long = "software")]
    software: Vec<String>,

    /// Project name stamped on the quote.
    #[arg(long, default_value = "Untitled")]
    name: String,

    /// Price-list snapshot (JSON array of products).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Emit the full result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    requirement: Requirement,
    allocation: Allocation,
    summary: ResourceSummary,
    shortfalls: Vec<Shortfall>,
    quote: Quote,
}

fn parse_software(entries: &[String]) -> Result<Vec<SoftwareSelection>> {
    entries
        .iter()
        .map(|entry| {
            let (name, quantity) = match entry.split_once('=') {
                Some((name, qty)) => {
                    let quantity: u32 = qty
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid software quantity in '{entry}'"))?;
                    (name.trim(), quantity)
                }
                None => (entry.trim(), 1),
            };
            let module = software_module(name)
                .with_context(|| format!("unknown software module '{name}'"))?;
            Ok(SoftwareSelection { module, quantity })
        })
        .collect()
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let products: Vec<Product> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    debug!(products = products.len(), "catalog loaded");
    Ok(Catalog::from_products(products))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut requirement = Requirement::new()
        .with_doors(cli.doors)
        .with_readers_out(cli.readers_out)
        .with_io(cli.inputs, cli.outputs);
    requirement.protocol = cli.protocol;
    requirement.deployment = cli.deployment;
    requirement.comms = cli.comms;
    requirement.target_doors_per_controller = cli.target_capacity;
    requirement.exclude_gateway_door = cli.exclude_gateway_door;
    let requirement = normalize_requirement(requirement);

    let mut engine = Engine::new()?;
    let (allocation, summary) = engine.allocate_with_summary(&requirement);
    let shortfalls = summary.shortfalls(&requirement);

    let catalog = load_catalog(cli.catalog.as_ref())?;
    let licensing = cli.system_type.map(|system_type| Licensing {
        system_type,
        system_users: cli.users,
    });
    let software = parse_software(&cli.software)?;
    let items = build_line_items(&allocation, licensing, &software, &catalog);

    let mut system = SystemDetails::from_requirement(requirement.clone());
    if let Some(licensing) = licensing {
        system = system.with_licensing(licensing);
    }
    let quote = Quote::assemble(cli.name.clone(), system, items);

    if cli.json {
        let report = Report {
            requirement,
            allocation,
            summary,
            shortfalls,
            quote,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !requirement.is_configured() {
        println!("Configuration incomplete: choose protocol, deployment and comms type.");
        if !requirement.is_empty_demand() {
            println!("(demand entered but no hardware can be derived yet)");
        }
        return Ok(());
    }

    println!("Calculated hardware");
    if allocation.is_all_zero() {
        println!("  (none)");
    }
    for (model, quantity) in allocation.iter() {
        println!("  {model}: {quantity}");
    }

    println!("\nResource summary (provided)");
    println!("  doors: {}", summary.doors);
    println!("  readers: {}", summary.readers);
    if requirement.protocol == Some(Protocol::Wiegand) {
        println!("  wiegand ports: {}", summary.wiegand_ports);
        println!("  in & out pairs: {}", summary.wiegand_in_out_pairs);
    }
    println!("  inputs: {}", summary.inputs);
    println!("  outputs: {}", summary.outputs);

    if shortfalls.is_empty() {
        println!("\nAll requirements covered.");
    } else {
        println!("\nShortfalls");
        for shortfall in &shortfalls {
            println!(
                "  {}: required {}, provided {}",
                shortfall.resource, shortfall.required, shortfall.provided
            );
        }
    }

    if !quote.items.is_empty() {
        println!("\nQuote preview ({})", quote.currency);
        for item in &quote.items {
            println!(
                "  {:<14} {:<20} x{:<5} {:>10.2}  {}",
                item.article_number,
                item.model,
                item.quantity,
                item.net_total(),
                item.cost_type,
            );
        }
        println!("\n  One-off total: {:.2}", quote.totals.one_off);
        println!("  Monthly total: {:.2}", quote.totals.monthly);
        if quote.system.system_type == Some(SystemType::OnPrem) {
            println!("  SMC cost: {:.2}", quote.totals.smc);
        }
    }

    Ok(())
}
