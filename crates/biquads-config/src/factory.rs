//! Factory filter definitions bundled with the library.
//!
//! Common corrective and tone-shaping EQ moves, always available without
//! external files.

use crate::definition::FilterDefinition;
use crate::error::ConfigError;

/// Names of the factory definitions.
pub static FACTORY_DEFINITION_NAMES: &[&str] = &[
    "rumble_cut",
    "hum_50",
    "hum_60",
    "bass_boost",
    "mud_cut",
    "presence",
    "de_ess",
    "air",
    "phone_band",
];

/// TOML content, embedded at compile time.
static FACTORY_DEFINITIONS_TOML: &[(&str, &str)] = &[
    ("rumble_cut", RUMBLE_CUT),
    ("hum_50", HUM_50),
    ("hum_60", HUM_60),
    ("bass_boost", BASS_BOOST),
    ("mud_cut", MUD_CUT),
    ("presence", PRESENCE),
    ("de_ess", DE_ESS),
    ("air", AIR),
    ("phone_band", PHONE_BAND),
];

const RUMBLE_CUT: &str = r#"
name = "Rumble Cut"
description = "Removes subsonic rumble and handling noise"
shape = "highpass"
cutoff = 40.0
q = 0.7071067811865476
"#;

const HUM_50: &str = r#"
name = "Hum 50"
description = "Narrow notch for 50 Hz mains hum"
shape = "notch"
cutoff = 50.0
q = 10.0
"#;

const HUM_60: &str = r#"
name = "Hum 60"
description = "Narrow notch for 60 Hz mains hum"
shape = "notch"
cutoff = 60.0
q = 10.0
"#;

const BASS_BOOST: &str = r#"
name = "Bass Boost"
description = "Broad low shelf lift"
shape = "lowshelf"
cutoff = 100.0
gain = 4.0
"#;

const MUD_CUT: &str = r#"
name = "Mud Cut"
description = "One-octave dip in the low mids"
shape = "peaking"
cutoff = 300.0
bandwidth = 1.0
gain = -3.0
"#;

const PRESENCE: &str = r#"
name = "Presence"
description = "Gentle upper-mid lift"
shape = "peaking"
cutoff = 3000.0
q = 1.2
gain = 2.5
"#;

const DE_ESS: &str = r#"
name = "De-ess"
description = "Static sibilance dip"
shape = "peaking"
cutoff = 6500.0
q = 3.0
gain = -4.0
"#;

const AIR: &str = r#"
name = "Air"
description = "High shelf for top-end sheen"
shape = "highshelf"
cutoff = 10000.0
gain = 3.0
"#;

const PHONE_BAND: &str = r#"
name = "Phone Band"
description = "Telephone-style band pass"
shape = "bandpass"
cutoff = 1200.0
bandwidth = 2.0
"#;

/// All factory definitions.
pub fn factory_definitions() -> Vec<FilterDefinition> {
    FACTORY_DEFINITIONS_TOML
        .iter()
        .filter_map(|(_, toml)| FilterDefinition::from_toml(toml).ok())
        .collect()
}

/// Get a factory definition by name, case-insensitively.
///
/// Matches either the identifier (`"hum_60"`) or the display name (`"Hum 60"`).
///
/// ```rust
/// use biquads_config::factory_definition;
///
/// let air = factory_definition("air").unwrap();
/// assert_eq!(air.name.as_deref(), Some("Air"));
/// assert!(factory_definition("warp drive").is_err());
/// ```
pub fn factory_definition(name: &str) -> Result<FilterDefinition, ConfigError> {
    for (id, toml) in FACTORY_DEFINITIONS_TOML {
        let def = FilterDefinition::from_toml(toml)?;
        if id.eq_ignore_ascii_case(name)
            || def
                .name
                .as_deref()
                .is_some_and(|display| display.eq_ignore_ascii_case(name))
        {
            return Ok(def);
        }
    }
    Err(ConfigError::DefinitionNotFound(name.to_string()))
}

/// Check if a name refers to a factory definition.
pub fn is_factory_definition(name: &str) -> bool {
    factory_definition(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_factory_definitions_parse() {
        assert_eq!(factory_definitions().len(), FACTORY_DEFINITION_NAMES.len());
    }

    #[test]
    fn test_all_factory_definitions_build() {
        for def in factory_definitions() {
            let filter = def.build();
            assert!(filter.is_ok(), "{:?} failed: {:?}", def.name, filter.err());
        }
    }

    #[test]
    fn test_names_match_table() {
        for (name, (id, _)) in FACTORY_DEFINITION_NAMES.iter().zip(FACTORY_DEFINITIONS_TOML) {
            assert_eq!(name, id);
        }
    }

    #[test]
    fn test_lookup_by_id_and_display_name() {
        assert!(is_factory_definition("hum_60"));
        assert!(is_factory_definition("HUM_60"));
        assert!(is_factory_definition("Hum 60"));
        assert!(!is_factory_definition("hum_70"));
    }

    #[test]
    fn test_every_definition_is_named() {
        for def in factory_definitions() {
            assert!(def.name.is_some());
            assert!(def.description.is_some());
        }
    }
}
