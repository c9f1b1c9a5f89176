//! End-to-end tests for the token compilation pipeline.

use serde_json::json;
use token_sass::{
    compile, convert, detect, extract, generate, resolve_aliases, Compiler, Options, OutputStyle,
    TokenError, TokenFormat, TokenRecord, TokenType,
};

fn record(path: &str, token_type: TokenType, value: serde_json::Value) -> TokenRecord {
    TokenRecord::new(path.split('.').map(String::from).collect(), token_type, value)
}

// ============================================================================
// Detection
// ============================================================================

#[test]
fn detect_prefers_dtcg_marker_anywhere() {
    let doc = json!({
        "legacy": { "gap": { "value": "4px", "type": "spacing" } },
        "modern": { "deep": { "gap": { "$value": "4px" } } }
    });
    assert_eq!(detect(&doc), TokenFormat::Dtcg);
}

#[test]
fn detect_tokens_studio_and_empty() {
    let studio = json!({ "gap": { "value": "4px", "type": "spacing" } });
    assert_eq!(detect(&studio), TokenFormat::TokensStudio);
    assert_eq!(detect(&json!({})), TokenFormat::Dtcg);
}

// ============================================================================
// Aliases
// ============================================================================

#[test]
fn chained_aliases_resolve_to_final_value() {
    let mut records = vec![
        record("color.action", TokenType::Color, json!("{color.primary}")),
        record("color.blue", TokenType::Color, json!("#0066cc")),
        record("color.primary", TokenType::Color, json!("{color.blue}")),
    ];
    resolve_aliases(&mut records).unwrap();
    for r in &records {
        assert_eq!(r.value, json!("#0066cc"), "token {}", r.key());
    }
}

#[test]
fn mutual_aliases_are_a_cycle() {
    let doc = json!({ "a": { "$value": "{b}" }, "b": { "$value": "{a}" } });
    let err = compile(&doc, &Options::default()).unwrap_err();
    assert!(matches!(err, TokenError::CircularReference { .. }));
    assert!(err.to_string().starts_with("circular reference: "));
}

#[test]
fn unresolvable_alias_is_left_verbatim() {
    let doc = json!({ "x": { "$type": "color", "$value": "{nonexistent.token}" } });
    let compiled = compile(&doc, &Options::default()).unwrap();
    assert_eq!(compiled.contents, "$x: {nonexistent.token};\n");
}

#[test]
fn resolving_twice_changes_nothing() {
    let mut records = vec![
        record("size.base", TokenType::Dimension, json!("8px")),
        record("size.gap", TokenType::Dimension, json!("{size.base}")),
        record(
            "shadow.card",
            TokenType::Shadow,
            json!({ "color": "{color.missing}", "blur": "{size.base}" }),
        ),
    ];
    resolve_aliases(&mut records).unwrap();
    let once = records.clone();
    resolve_aliases(&mut records).unwrap();
    assert_eq!(records, once);
    assert_eq!(
        records[2].value,
        json!({ "color": "{color.missing}", "blur": "8px" })
    );
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn descendant_type_overrides_for_that_leaf_only() {
    let doc = json!({
        "base": {
            "$type": "dimension",
            "small": { "$value": "4px" },
            "ratio": { "$value": 1.5, "$type": "number" },
            "large": { "$value": "16px" }
        }
    });
    let records = extract(&doc, TokenFormat::Dtcg);
    let types: Vec<TokenType> = records.iter().map(|r| r.token_type).collect();
    assert_eq!(
        types,
        vec![TokenType::Dimension, TokenType::Number, TokenType::Dimension]
    );
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn srgb_color_objects_round_trip() {
    let opaque = json!({ "colorSpace": "srgb", "components": [1, 0, 0] });
    assert_eq!(convert(&opaque, TokenType::Color), "#ff0000");

    let translucent = json!({ "colorSpace": "srgb", "components": [1, 0, 0], "alpha": 0.5 });
    assert_eq!(convert(&translucent, TokenType::Color), "rgba(255, 0, 0, 0.5)");
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn empty_sequence_generates_nothing() {
    assert_eq!(generate(&[], OutputStyle::Variables), "");
    assert_eq!(generate(&[], OutputStyle::Map), "");
}

#[test]
fn spacing_flat_and_grouped() {
    let records = vec![
        record("spacing.sm", TokenType::Dimension, json!("4px")),
        record("spacing.md", TokenType::Dimension, json!("8px")),
    ];
    assert_eq!(
        generate(&records, OutputStyle::Variables),
        "$spacing-sm: 4px;\n$spacing-md: 8px;\n"
    );
    assert_eq!(
        generate(&records, OutputStyle::Map),
        "$spacing: (\n  sm: 4px,\n  md: 8px,\n);\n"
    );
}

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn dtcg_document_to_variables() {
    let doc = json!({
        "$description": "Brand tokens",
        "color": {
            "$type": "color",
            "brand": { "$value": { "colorSpace": "srgb", "components": [0, 0.4, 0.8] } },
            "link": { "$value": "{color.brand}" }
        },
        "font": {
            "body": {
                "$type": "fontFamily",
                "$value": ["Inter", "sans-serif"]
            }
        },
        "motion": {
            "ease": { "$type": "cubicBezier", "$value": [0.4, 0, 0.2, 1] },
            "fast": { "$type": "duration", "$value": { "value": 150, "unit": "ms" } }
        }
    });

    let compiled = Compiler::new().compile(&doc).unwrap();
    let expected = "\
$color-brand: #0066cc;
$color-link: #0066cc;
$font-body: (\"Inter\", sans-serif);
$motion-ease: cubic-bezier(0.4, 0, 0.2, 1);
$motion-fast: 150ms;
";
    assert_eq!(compiled.contents, expected);
    assert_eq!(compiled.format, TokenFormat::Dtcg);
    assert_eq!(compiled.token_count, 5);
}

#[test]
fn tokens_studio_document_to_maps() {
    let doc = json!({
        "spacing": {
            "sm": { "value": "4px", "type": "spacing" },
            "md": { "value": "8px", "type": "spacing" }
        },
        "type": {
            "body": {
                "value": {
                    "fontFamily": "Inter",
                    "fontWeight": 400,
                    "fontSize": "{spacing.md}",
                    "lineHeight": 1.5
                },
                "type": "typography"
            }
        },
        "opacity": {
            "muted": { "value": 0.6, "type": "opacity" }
        }
    });

    let compiled = Compiler::new()
        .output(OutputStyle::Map)
        .compile(&doc)
        .unwrap();
    let expected = "\
$spacing: (
  sm: 4px,
  md: 8px,
);

$type: (
  body: (
    font-family: Inter,
    font-weight: 400,
    font-size: 8px,
    line-height: 1.5,
  ),
);

$opacity: (
  muted: 0.6,
);
";
    assert_eq!(compiled.contents, expected);
    assert_eq!(compiled.format, TokenFormat::TokensStudio);
}
