//! End-to-end parsing and validation of spec documents.

use pretty_assertions::assert_eq;

use texsynth_spec::hash::canonical_spec_hash;
use texsynth_spec::{
    parse_and_validate, ColorSpace, DynamicRange, ErrorCode, NoiseKind, NoiseSize, Recipe,
    SpecError, WarningCode,
};

const GRADIENT_DOC: &str = r#"{
  "spec_version": 1,
  "asset_id": "sunset-ramp",
  "dynamic_range": "ldr",
  "recipe": {
    "kind": "texture.gradient_v1",
    "params": {
      "width": 256, "height": 4, "axis": "horizontal",
      "position_mode": "percent", "color_space": "hsv",
      "anchors": [
        { "position": 0.0, "color": [1.0, 0.5, 0.0, 1.0] },
        { "position": 1.0, "color": [0.2, 0.0, 0.6, 1.0] }
      ]
    }
  }
}"#;

const NOISE_DOC: &str = r#"{
  "spec_version": 1,
  "asset_id": "cloud-volume",
  "dynamic_range": "hdr",
  "recipe": {
    "kind": "texture.noise_v1",
    "params": { "noise": "simplex", "size": [32, 32, 16], "channels": 2, "seed": 42 }
  }
}"#;

fn error_codes(err: SpecError) -> Vec<ErrorCode> {
    match err {
        SpecError::ValidationFailed(errors) => errors.into_iter().map(|e| e.code).collect(),
        other => panic!("expected validation failure, got {}", other),
    }
}

#[test]
fn test_gradient_document_parses() {
    let (spec, warnings) = parse_and_validate(GRADIENT_DOC).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(spec.asset_id, "sunset-ramp");

    let Recipe::Gradient(gradient) = &spec.recipe else {
        panic!("expected gradient recipe");
    };
    assert_eq!(gradient.color_space, ColorSpace::Hsv);
    assert_eq!(gradient.anchors.len(), 2);
}

#[test]
fn test_noise_document_parses_with_defaults() {
    let (spec, _) = parse_and_validate(NOISE_DOC).unwrap();
    assert_eq!(spec.dynamic_range, DynamicRange::Hdr);

    let Recipe::Noise(noise) = &spec.recipe else {
        panic!("expected noise recipe");
    };
    assert_eq!(noise.noise, NoiseKind::Simplex);
    assert_eq!(noise.size, NoiseSize::Volume([32, 32, 16]));
    assert_eq!(noise.scale, [5.0; 4]);
    assert_eq!(noise.offset, [0.0; 4]);
    assert!(!noise.wrap);
    assert_eq!(noise.seed, Some(42));
}

#[test]
fn test_unknown_noise_kind_is_coded() {
    let doc = NOISE_DOC.replace("\"simplex\"", "\"worley\"");
    assert_eq!(error_codes(parse_and_validate(&doc).unwrap_err()), vec![
        ErrorCode::UnsupportedNoiseKind
    ]);
}

#[test]
fn test_document_level_errors_accumulate() {
    let doc = GRADIENT_DOC
        .replace("\"spec_version\": 1", "\"spec_version\": 3")
        .replace("sunset-ramp", "Sunset");
    let codes = error_codes(parse_and_validate(&doc).unwrap_err());
    assert_eq!(codes, vec![
        ErrorCode::UnsupportedSpecVersion,
        ErrorCode::InvalidAssetId
    ]);
}

#[test]
fn test_recipe_errors_carry_prefixed_paths() {
    let doc = GRADIENT_DOC.replace("\"position\": 1.0", "\"position\": 1.5");
    match parse_and_validate(&doc).unwrap_err() {
        SpecError::ValidationFailed(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, ErrorCode::AnchorOutOfRange);
            assert_eq!(
                errors[0].path.as_deref(),
                Some("recipe.params.anchors[1].position")
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_hdr_anchor_in_ldr_document_warns() {
    let doc = GRADIENT_DOC.replace("[1.0, 0.5, 0.0, 1.0]", "[4.0, 0.5, 0.0, 1.0]");
    let (_, warnings) = parse_and_validate(&doc).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, WarningCode::HdrColorInLdrOutput);

    let hdr = doc.replace("\"ldr\"", "\"hdr\"");
    let (_, warnings) = parse_and_validate(&hdr).unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_unknown_field_is_a_parse_error() {
    let doc = GRADIENT_DOC.replace("\"axis\"", "\"direction\"");
    assert!(matches!(
        parse_and_validate(&doc),
        Err(SpecError::JsonParse(_))
    ));
}

#[test]
fn test_hash_ignores_formatting() {
    let (spec, _) = parse_and_validate(GRADIENT_DOC).unwrap();
    let compact: String = GRADIENT_DOC.split_whitespace().collect();
    let (reparsed, _) = parse_and_validate(&compact).unwrap();

    assert_eq!(
        canonical_spec_hash(&spec).unwrap(),
        canonical_spec_hash(&reparsed).unwrap()
    );
}
