//! Form Collector

use crate::models::IncidentTelemetry;
use crate::view::FieldSource;

/// Names of the form controls, in payload order
pub const FIELD_NAMES: [&str; 7] = [
    "Category",
    "MitreTechniques",
    "ActionGrouped",
    "EntityType",
    "OSFamily",
    "SuspicionLevel",
    "CountryCode",
];

/// Read the seven controls verbatim. No validation, no trimming.
pub fn collect<F: FieldSource + ?Sized>(fields: &F) -> IncidentTelemetry {
    IncidentTelemetry {
        category: fields.value("Category"),
        mitre_techniques: fields.value("MitreTechniques"),
        action_grouped: fields.value("ActionGrouped"),
        entity_type: fields.value("EntityType"),
        os_family: fields.value("OSFamily"),
        suspicion_level: fields.value("SuspicionLevel"),
        country_code: fields.value("CountryCode"),
    }
}

pub fn is_field_name(name: &str) -> bool {
    FIELD_NAMES.contains(&name)
}
