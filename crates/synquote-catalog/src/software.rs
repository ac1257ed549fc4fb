//! Software articles: platform, user licences and optional add-on modules.
//!
//! Every software product exists twice on the price list, once for cloud
//! and once for on-prem hosting; the cloud variant carries an `H` suffix
//! (or `-C` for add-on modules). Selection between the two is driven by
//! the quoted [`SystemType`].

use synquote_core::SystemType;

/// Base platform article, on-prem hosting.
pub const PLATFORM_ARTICLE_ON_PREM: &str = "S00531";

/// Base platform article, cloud hosting.
pub const PLATFORM_ARTICLE_CLOUD: &str = "S00531H";

/// Per-user licence article, on-prem hosting.
pub const USER_LICENCE_ARTICLE_ON_PREM: &str = "S00524";

/// Per-user licence article, cloud hosting.
pub const USER_LICENCE_ARTICLE_CLOUD: &str = "S00524H";

/// Platform article for a hosting model.
#[must_use]
pub fn platform_article(system_type: SystemType) -> &'static str {
    match system_type {
        SystemType::Cloud => PLATFORM_ARTICLE_CLOUD,
        SystemType::OnPrem => PLATFORM_ARTICLE_ON_PREM,
    }
}

/// User-licence article for a hosting model.
#[must_use]
pub fn user_licence_article(system_type: SystemType) -> &'static str {
    match system_type {
        SystemType::Cloud => USER_LICENCE_ARTICLE_CLOUD,
        SystemType::OnPrem => USER_LICENCE_ARTICLE_ON_PREM,
    }
}

/// An optional software add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareModule {
    /// Functional category shown on the selection form.
    pub category: &'static str,
    /// Module name, unique within the matrix.
    pub name: &'static str,
    /// Article number under cloud hosting.
    pub article_cloud: &'static str,
    /// Article number under on-prem hosting.
    pub article_on_prem: &'static str,
    /// Whether the module is licensed per unit (quantity applies) or
    /// per system (quantity fixed at 1).
    pub per_unit: bool,
    /// Short description for tooltips and quote rows.
    pub summary: &'static str,
}

impl SoftwareModule {
    /// Article number for a hosting model.
    #[must_use]
    pub fn article_for(&self, system_type: SystemType) -> &'static str {
        match system_type {
            SystemType::Cloud => self.article_cloud,
            SystemType::OnPrem => self.article_on_prem,
        }
    }
}

/// The add-on module matrix.
pub const SOFTWARE_MODULES: [SoftwareModule; 5] = [
    SoftwareModule {
        category: "Access Control",
        name: "Multi realm",
        article_cloud: "SW-AC-MR-C",
        article_on_prem: "SW-AC-MR",
        per_unit: false,
        summary: "Enables multi-site with advanced data segregation",
    },
    SoftwareModule {
        category: "Access Control",
        name: "Advanced Event Tree",
        article_cloud: "SW-AC-ET-C",
        article_on_prem: "SW-AC-ET",
        per_unit: false,
        summary: "Create advanced I/O configurations",
    },
    SoftwareModule {
        category: "Visitor Management",
        name: "Visitor",
        article_cloud: "SW-VIS-BASE-C",
        article_on_prem: "SW-VIS-BASE",
        per_unit: true,
        summary: "Number of visitors active on the system",
    },
    SoftwareModule {
        category: "Visitor Management",
        name: "Visitor Self Service",
        article_cloud: "SW-VIS-SS-C",
        article_on_prem: "SW-VIS-SS",
        per_unit: false,
        summary: "Self-service terminal for visitor check-in",
    },
    SoftwareModule {
        category: "Wireless Locks",
        name: "Salto",
        article_cloud: "SW-WL-SALTO-C",
        article_on_prem: "SW-WL-SALTO",
        per_unit: true,
        summary: "Per Salto lock licence",
    },
];

/// Find a module by name.
#[must_use]
pub fn software_module(name: &str) -> Option<&'static SoftwareModule> {
    SOFTWARE_MODULES.iter().find(|module| module.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_articles_by_hosting() {
        assert_eq!(platform_article(SystemType::OnPrem), "S00531");
        assert_eq!(platform_article(SystemType::Cloud), "S00531H");
        assert_eq!(user_licence_article(SystemType::OnPrem), "S00524");
        assert_eq!(user_licence_article(SystemType::Cloud), "S00524H");
    }

    #[test]
    fn test_module_article_selection() {
        let visitor = software_module("Visitor").unwrap();
        assert_eq!(visitor.article_for(SystemType::Cloud), "SW-VIS-BASE-C");
        assert_eq!(visitor.article_for(SystemType::OnPrem), "SW-VIS-BASE");
        assert!(visitor.per_unit);
    }

    #[test]
    fn test_module_names_unique() {
        for (i, module) in SOFTWARE_MODULES.iter().enumerate() {
            assert!(
                SOFTWARE_MODULES[..i]
                    .iter()
                    .all(|other| other.name != module.name)
            );
        }
    }

    #[test]
    fn test_unknown_module_is_none() {
        assert!(software_module("Teleportation").is_none());
    }
}
