use std::collections::HashMap;
use std::path::PathBuf;

use shotmap::config::{AppConfig, DEFAULT_MATCH_ID};
use shotmap::event_fetch::{EventSource, STATSBOMB_EVENTS_URL};
use shotmap::figure::OutputFormat;
use shotmap::style::Color;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_match_the_classic_shot_map() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.match_id, DEFAULT_MATCH_ID);
    assert_eq!(
        config.source,
        EventSource::Remote {
            base_url: STATSBOMB_EVENTS_URL.to_string()
        }
    );
    assert_eq!(config.format, OutputFormat::Png);
    assert_eq!(config.style.primary_color, Color::RED);
    assert_eq!(config.style.opponent_color, Color::BLUE);
    assert_eq!(config.style.circle_radius, 2.0);
    assert!(!config.export_xlsx);
}

#[test]
fn environment_values_are_applied() {
    let config = AppConfig::from_lookup(lookup(&[
        ("SHOTMAP_MATCH_ID", "7298"),
        ("SHOTMAP_PRIMARY_TEAM", "Sweden"),
        ("SHOTMAP_FORMAT", "svg"),
        ("SHOTMAP_EXPORT_XLSX", "yes"),
        ("SHOTMAP_OPPONENT_COLOR", "#112233"),
        ("SHOTMAP_MISS_OPACITY", "0.35"),
        ("SHOTMAP_OUT_DIR", "  "),
    ]))
    .unwrap();
    assert_eq!(config.match_id, 7298);
    assert_eq!(config.primary_team.as_deref(), Some("Sweden"));
    assert_eq!(config.format, OutputFormat::Svg);
    assert!(config.export_xlsx);
    assert_eq!(config.style.opponent_color, Color::rgb(0x11, 0x22, 0x33));
    assert!((config.style.miss_opacity - 0.35).abs() < 1e-6);
    assert_eq!(config.out_dir, PathBuf::from("shot_maps"));
}

#[test]
fn events_file_wins_over_base_url() {
    let config = AppConfig::from_lookup(lookup(&[
        ("SHOTMAP_EVENTS_BASE_URL", "https://mirror.test/events"),
        ("SHOTMAP_EVENTS_FILE", "data/69301.json"),
    ]))
    .unwrap();
    assert_eq!(config.source, EventSource::File(PathBuf::from("data/69301.json")));
}

#[test]
fn base_url_argument_replaces_environment_events_file() {
    let mut config =
        AppConfig::from_lookup(lookup(&[("SHOTMAP_EVENTS_FILE", "data/69301.json")])).unwrap();
    config
        .apply_args(&args(&["--base-url=https://mirror.test/events"]))
        .unwrap();
    assert_eq!(
        config.source,
        EventSource::Remote {
            base_url: "https://mirror.test/events".to_string()
        }
    );
}

#[test]
fn events_argument_wins_over_base_url_argument() {
    let mut config = AppConfig::default();
    config
        .apply_args(&args(&[
            "--events",
            "local.json",
            "--base-url=https://mirror.test/events",
        ]))
        .unwrap();
    assert_eq!(config.source, EventSource::File(PathBuf::from("local.json")));
}

#[test]
fn invalid_values_name_the_key() {
    let err = AppConfig::from_lookup(lookup(&[("SHOTMAP_MATCH_ID", "abc")])).unwrap_err();
    assert!(err.to_string().contains("SHOTMAP_MATCH_ID"));
    let err = AppConfig::from_lookup(lookup(&[("SHOTMAP_MISS_OPACITY", "1.5")])).unwrap_err();
    assert!(err.to_string().contains("SHOTMAP_MISS_OPACITY"));
    assert!(AppConfig::from_lookup(lookup(&[("SHOTMAP_CIRCLE_RADIUS", "-1")])).is_err());
    assert!(AppConfig::from_lookup(lookup(&[("SHOTMAP_WIDTH_PX", "50")])).is_err());
}

#[test]
fn arguments_override_environment() {
    let mut config = AppConfig::from_lookup(lookup(&[("SHOTMAP_MATCH_ID", "1")])).unwrap();
    config
        .apply_args(&args(&[
            "--match-id=69301",
            "--team",
            "England",
            "--xlsx",
            "--out",
            "maps",
            "--width=1600",
        ]))
        .unwrap();
    assert_eq!(config.match_id, 69301);
    assert_eq!(config.primary_team.as_deref(), Some("England"));
    assert!(config.export_xlsx);
    assert_eq!(config.out_dir, PathBuf::from("maps"));
    assert_eq!(config.layout.width_px, 1600);
}

#[test]
fn bad_arguments_are_rejected() {
    let mut config = AppConfig::default();
    assert!(config.apply_args(&args(&["--bogus=1"])).is_err());
    assert!(config.apply_args(&args(&["--team"])).is_err());
    assert!(config.apply_args(&args(&["--format=bmp"])).is_err());
}
