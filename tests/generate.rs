//! End-to-end generation tests: run a batch job into a temp directory and
//! inspect the written SVG documents.

use std::fs;

use carriergen::{formats, CarrierJob, FormatParameters};

fn preset(name: &str) -> FormatParameters {
    formats::presets()
        .into_iter()
        .find(|f| f.name == name)
        .unwrap()
}

#[test]
fn thirty_five_millimeter_produces_four_documents() {
    let dir = tempfile::tempdir().unwrap();
    CarrierJob::new(vec![preset("23C_35mm")], dir.path())
        .run()
        .unwrap();

    for layer in ["top", "bottom", "ring", "all"] {
        let path = dir.path().join(format!("23C_35mm_{layer}.svg"));
        assert!(path.is_file(), "missing {layer} document");
    }

    let top = fs::read_to_string(dir.path().join("23C_35mm_top.svg")).unwrap();
    // Extra pins enabled: outline, cutout, aligners, extra pins.
    assert_eq!(top.matches("<path ").count(), 4);
    assert!(top.contains("width=\"8.600000in\""));
    assert!(top.contains("height=\"6.500000in\""));
    assert!(top.contains("<!-- Paddle outline -->"));
    assert!(top.contains("<!-- Film cutout 1.4250x0.9450\" -->"));

    let ring = fs::read_to_string(dir.path().join("23C_35mm_ring.svg")).unwrap();
    assert_eq!(ring.matches("<path ").count(), 2);
}

#[test]
fn top_has_three_paths_without_extra_pins() {
    let dir = tempfile::tempdir().unwrap();
    CarrierJob::new(vec![preset("23C_120_6x6cm")], dir.path())
        .run()
        .unwrap();

    let top = fs::read_to_string(dir.path().join("23C_120_6x6cm_top.svg")).unwrap();
    assert_eq!(top.matches("<path ").count(), 3);
}

#[test]
fn regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let job_formats = vec![preset("23C_35mm")];

    CarrierJob::new(job_formats.clone(), first.path())
        .run()
        .unwrap();
    CarrierJob::new(job_formats, second.path()).run().unwrap();

    for layer in ["top", "bottom", "ring", "all"] {
        let name = format!("23C_35mm_{layer}.svg");
        let a = fs::read_to_string(first.path().join(&name)).unwrap();
        let b = fs::read_to_string(second.path().join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn oversized_aligner_pins_still_generate() {
    let dir = tempfile::tempdir().unwrap();
    let mut params = preset("23C_35mm");
    params.name = "oversize".to_string();
    params.aligner_diameter = 5.0;

    CarrierJob::new(vec![params], dir.path()).run().unwrap();
    assert!(dir.path().join("oversize_top.svg").is_file());
}

#[test]
fn invalid_format_fails_the_batch_but_not_other_formats() {
    let dir = tempfile::tempdir().unwrap();
    let mut bad = preset("23C_35mm");
    bad.name = "bad".to_string();
    bad.cut_width = -1.0;

    let result = CarrierJob::new(vec![bad, preset("23C_120_6x7cm")], dir.path()).run();
    assert!(result.is_err());
    // The valid format was still generated.
    assert!(dir.path().join("23C_120_6x7cm_top.svg").is_file());
    assert!(!dir.path().join("bad_top.svg").exists());
}
