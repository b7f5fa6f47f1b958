//! SVG regression tests over the bundled demo templates.
//!
//! Every file in `demos/` must load, render to a well-formed document and
//! survive a save round-trip. Known features of individual demos are checked
//! by substring so the tests do not pin exact float formatting.

use std::fs;
use std::path::Path;

use label_designer::persist::{load_json, save};
use label_designer::{
    print, render_json, render_svg, RenderConfig, TemplateRecord, TemplateType, ViewState, Zoom,
};
use serde_json::json;

fn demo(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

fn demo_files() -> Vec<String> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

#[test]
fn all_demos_render() {
    let files = demo_files();
    assert!(files.len() >= 3, "found {:?}", files);

    for name in files {
        let svg = render_json(&demo(&name)).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"), "{}", name);
        assert!(svg.trim_end().ends_with("</svg>"), "{}", name);
    }
}

#[test]
fn all_demos_survive_save_round_trip() {
    for name in demo_files() {
        let template = load_json(&demo(&name)).unwrap();
        let json = save(&template).to_json().unwrap();
        let restored = TemplateRecord::from_json(&json).unwrap();
        assert_eq!(restored.design, template.elements(), "{}", name);
    }
}

#[test]
fn rendering_is_deterministic() {
    let source = demo("repair_ticket.json");
    assert_eq!(render_json(&source).unwrap(), render_json(&source).unwrap());
}

#[test]
fn product_tag_features() {
    let svg = render_json(&demo("product_tag.json")).unwrap();

    assert!(svg.contains(r#"width="60" height="40""#));
    assert!(svg.contains(r#"rx="2""#));
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains("4006381333931"));
    // Underline is drawn as its own line under the price
    assert!(svg.contains("ld-line"));
}

#[test]
fn repair_ticket_features() {
    let svg = render_json(&demo("repair_ticket.json")).unwrap();

    assert!(svg.contains("rotate(-12)"));
    assert!(svg.contains(r#"opacity="0.8""#));
    assert!(svg.contains(r#"font-style="italic""#));
    assert!(svg.contains("ld-circle"));
    assert!(svg.contains("FRAGILE"));
}

#[test]
fn repair_ticket_merges_print_data() {
    let template = load_json(&demo("repair_ticket.json")).unwrap();
    let job = print(&template, json!({"job": "R-77", "customer": "Grace"}));
    let svg = render_svg(
        &job.resolved_template(),
        &ViewState::default(),
        &RenderConfig::default(),
    );

    assert!(svg.contains("Job R-77"));
    assert!(svg.contains("Grace"));
    assert!(!svg.contains("{{"));
}

#[test]
fn blank_custom_is_sanitized_on_save() {
    let template = load_json(&demo("blank_custom.json")).unwrap();
    assert_eq!(template.kind, TemplateType::Custom);

    let record = save(&template);
    assert!(!record.name.trim().is_empty());
    assert_eq!(record.width, 1000.0);
    assert_eq!(record.height, 10.0);
}

#[test]
fn blank_custom_draws_no_shapes() {
    let config = RenderConfig::default().with_grid_enabled(false);
    let svg = render_svg(
        &load_json(&demo("blank_custom.json")).unwrap(),
        &ViewState::default(),
        &config,
    );

    // Image reserves space only; a transparent rectangle paints nothing
    assert!(!svg.contains("ld-rect"));
    assert!(!svg.contains("ld-outline"));
}

#[test]
fn zoom_scales_device_size_only() {
    let source = demo("product_tag.json");
    let config = RenderConfig::default();
    let template = load_json(&source).unwrap();

    let half = render_svg(&template, &ViewState::new(Zoom::new(50)), &config);
    let double = render_svg(&template, &ViewState::new(Zoom::new(200)), &config);

    assert!(half.contains(r#"viewBox="0 0 30 20""#));
    assert!(double.contains(r#"viewBox="0 0 120 80""#));
}
