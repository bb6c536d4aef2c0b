//! Behaviour of icon normalization on realistic Font Awesome markup.

use badgesmith_markup::{Element, MarkupError, normalize_icon};
use proptest::prelude::*;

const PYTHON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><!--! Font Awesome Free 6.5.1 by @fontawesome - https://fontawesome.com License - https://fontawesome.com/license/free Copyright 2023 Fonticons, Inc. --><path d="M439.8 200.5c-7.7-30.9-22.3-54.2-53.4-54.2h-40.1v47.4z"/><path d="M194.3 400.3c11.4 0 20.7 9.3 20.7 20.7z"/></svg>"#;

// ── Given a multi-path icon, every path is recolored ────────────────

#[test]
fn given_multi_path_icon_when_normalized_then_every_path_has_fill() {
    let out = normalize_icon(PYTHON, 12, "#ffffff").expect("normalize");
    let svg = Element::parse(&out).expect("output parses");
    assert_eq!(svg.count_named("path"), 2);
    let mut fills = Vec::new();
    let mut svg = svg;
    svg.for_each_named_mut("path", &mut |p: &mut Element| {
        fills.push(p.attr("fill").map(str::to_string));
    });
    assert_eq!(fills, vec![Some("#ffffff".to_string()); 2]);
}

#[test]
fn given_icon_when_normalized_then_width_and_height_equal_size() {
    let out = normalize_icon(PYTHON, 12, "#ffffff").expect("normalize");
    let svg = Element::parse(&out).expect("output parses");
    assert_eq!(svg.attr("width"), Some("12"));
    assert_eq!(svg.attr("height"), Some("12"));
    assert_eq!(svg.attr("viewBox"), Some("0 0 448 512"));
}

#[test]
fn given_icon_with_license_comment_when_normalized_then_comment_survives() {
    let out = normalize_icon(PYTHON, 12, "#ffffff").expect("normalize");
    assert!(out.contains("<!--! Font Awesome Free"));
}

#[test]
fn given_icon_when_normalized_then_output_is_root_svg_only() {
    let out = normalize_icon(PYTHON, 12, "#fff").expect("normalize");
    assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(out.ends_with("</svg>"));
}

#[test]
fn given_small_icon_when_normalized_then_markup_matches_snapshot() {
    let raw = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M0 0h16v16H0z"/></svg>"#;
    let out = normalize_icon(raw, 12, "#8855ff").expect("normalize");
    insta::assert_snapshot!(out, @r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="12" height="12"><path d="M0 0h16v16H0z" fill="#8855ff"/></svg>"##);
}

// ── Given content that is not an SVG, normalization fails ──────────

#[test]
fn given_html_error_page_when_normalized_then_missing_root() {
    let err = normalize_icon("<html><body>404</body></html>", 12, "#000").unwrap_err();
    assert!(matches!(err, MarkupError::MissingRoot));
    assert_eq!(err.to_string(), "no <svg> root element found");
}

#[test]
fn given_plain_text_when_normalized_then_malformed() {
    let err = normalize_icon("404: Not Found", 12, "#000").unwrap_err();
    assert!(err.to_string().starts_with("malformed SVG markup"));
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn normalization_is_idempotent(
        size in 1u32..256,
        color in "#[0-9a-f]{6}",
        paths in 0usize..5,
    ) {
        let body: String = (0..paths).map(|i| format!("<path d=\"M{i} 0h1v1z\" fill=\"red\"/>")).collect();
        let raw = format!("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"99\" viewBox=\"0 0 1 1\">{body}</svg>");
        let once = normalize_icon(&raw, size, &color).expect("first pass");
        let twice = normalize_icon(&once, size, &color).expect("second pass");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn size_always_applied(size in 1u32..1024, width in 1u32..1024) {
        let raw = format!("<svg width=\"{width}\" height=\"{width}\"><path/></svg>");
        let out = normalize_icon(&raw, size, "#000").expect("normalize");
        let svg = Element::parse(&out).expect("reparse");
        let expected = size.to_string();
        prop_assert_eq!(svg.attr("width"), Some(expected.as_str()));
        prop_assert_eq!(svg.attr("height"), Some(expected.as_str()));
    }
}
