//! Product catalog collaborator.
//!
//! The quote engine itself never touches prices; this crate supplies the
//! price list it is joined against. A [`Catalog`] maps article numbers to
//! [`Product`] records (list price, discount, one-off versus recurring
//! classification); the part [`registry`] maps controller models to their
//! hardware article numbers, and [`software`] carries the platform,
//! user-licence and add-on module articles for cloud and on-prem systems.
//!
//! A missing catalog entry is never fatal: lookups return `None` and the
//! line-item builder substitutes zero prices and fallback descriptions.

pub mod product;
pub mod registry;
pub mod software;

pub use product::{Catalog, PricingMethod, Product};
pub use registry::{HARDWARE_PARTS, HardwarePart, part_for};
pub use software::{
    SOFTWARE_MODULES, SoftwareModule, platform_article, software_module, user_licence_article,
};
