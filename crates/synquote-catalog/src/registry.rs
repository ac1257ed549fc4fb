//! Hardware part registry.
//!
//! Maps each controller model to the article number and quote display name
//! used on the commercial price list. The allocation engine works in
//! [`Model`] terms; this table is the join key into the catalog.

use synquote_core::Model;

/// Commercial identity of one controller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwarePart {
    pub model: Model,
    /// Price-list article number for the hardware item.
    pub article_number: &'static str,
    /// Display name used on quote rows.
    pub quote_model_name: &'static str,
}

/// The full Synguard hardware range, in display order.
pub const HARDWARE_PARTS: [HardwarePart; 6] = [
    HardwarePart {
        model: Model::SynApp,
        article_number: "S03835",
        quote_model_name: "SynApp-DIN-HW",
    },
    HardwarePart {
        model: Model::SynOne,
        article_number: "S12345",
        quote_model_name: "Synone-HW",
    },
    HardwarePart {
        model: Model::SynConSC,
        article_number: "S03850",
        quote_model_name: "SynConSC-HW",
    },
    HardwarePart {
        model: Model::SynConDuoDuo,
        article_number: "S03846",
        quote_model_name: "SynCon-HW",
    },
    HardwarePart {
        model: Model::SynConEvo,
        article_number: "S03855",
        quote_model_name: "SynConEvo-DIN-HW",
    },
    HardwarePart {
        model: Model::SynIO,
        article_number: "S03869",
        quote_model_name: "SynIO-DIN-HW",
    },
];

/// Registry entry for a model. Total: the registry covers the whole range.
#[must_use]
pub fn part_for(model: Model) -> &'static HardwarePart {
    match model {
        Model::SynApp => &HARDWARE_PARTS[0],
        Model::SynOne => &HARDWARE_PARTS[1],
        Model::SynConSC => &HARDWARE_PARTS[2],
        Model::SynConDuoDuo => &HARDWARE_PARTS[3],
        Model::SynConEvo => &HARDWARE_PARTS[4],
        Model::SynIO => &HARDWARE_PARTS[5],
    }
}
