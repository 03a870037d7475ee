//! Film format presets and format-file loading.
//!
//! The built-in presets cover the carriers the 23C is normally used with.
//! A JSON file holding an array of [`FormatParameters`] can replace them
//! for one-off carriers.

use std::fs;
use std::path::Path;

use crate::carrier::FormatParameters;
use crate::error::{CarrierResult, ParameterError};

/// Film gate clearance added to the nominal strip width.
const FILM_CLEARANCE: f64 = 0.010;

/// The standard carrier set: 35mm, 120 6x7cm, and 120 6x6cm.
pub fn presets() -> Vec<FormatParameters> {
    vec![
        FormatParameters {
            name: "23C_35mm".to_string(),
            cut_width: 1.425,
            cut_height: 0.945,
            film_width: 1.378 + FILM_CLEARANCE,
            aligner_diameter: 0.500,
            extra_pins: true,
        },
        FormatParameters {
            name: "23C_120_6x7cm".to_string(),
            cut_width: 2.675,
            cut_height: 2.200,
            film_width: 2.425 + FILM_CLEARANCE,
            aligner_diameter: 0.750,
            extra_pins: false,
        },
        FormatParameters {
            name: "23C_120_6x6cm".to_string(),
            cut_width: 2.200,
            cut_height: 2.200,
            film_width: 2.425 + FILM_CLEARANCE,
            aligner_diameter: 0.750,
            extra_pins: false,
        },
    ]
}

/// Loads a format list from a JSON array file and validates every entry.
pub fn load_from_file(path: &Path) -> CarrierResult<Vec<FormatParameters>> {
    let data = fs::read_to_string(path)?;
    let formats: Vec<FormatParameters> = serde_json::from_str(&data)?;

    if formats.is_empty() {
        return Err(ParameterError::InvalidValue {
            name: "formats".to_string(),
            reason: format!("{} contains no formats", path.display()),
        }
        .into());
    }
    for format in &formats {
        format.validate()?;
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn presets_are_valid() {
        let presets = presets();
        assert_eq!(presets.len(), 3);
        for p in &presets {
            p.validate().unwrap();
        }
        assert_eq!(presets[0].name, "23C_35mm");
        assert!(presets[0].extra_pins);
        assert!((presets[0].film_width - 1.388).abs() < 1e-12);
        assert!(!presets[1].extra_pins);
        assert_eq!(presets[1].cut_width, 2.675);
        assert_eq!(presets[2].cut_width, presets[2].cut_height);
    }

    #[test]
    fn load_from_file_round_trips_presets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&presets()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_from_file(file.path()).unwrap();
        assert_eq!(loaded, presets());
    }

    #[test]
    fn load_from_file_rejects_bad_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name":"bad","cut_width":-1.0,"cut_height":1.0,"film_width":1.0,"aligner_diameter":0.5}]"#)
            .unwrap();
        assert!(load_from_file(file.path()).is_err());

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        empty.write_all(b"[]").unwrap();
        assert!(load_from_file(empty.path()).is_err());
    }

    #[test]
    fn extra_pins_defaults_to_false_when_omitted() {
        let parsed: Vec<FormatParameters> = serde_json::from_str(
            r#"[{"name":"x","cut_width":1.0,"cut_height":1.0,"film_width":1.0,"aligner_diameter":0.5}]"#,
        )
        .unwrap();
        assert!(!parsed[0].extra_pins);
    }
}
