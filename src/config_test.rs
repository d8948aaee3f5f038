use super::*;

#[test]
fn defaults_match_shipped_site() {
    let config = SiteConfig::default();
    assert_eq!(config.preloader_delay_ms, 600);
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.back_to_top_threshold_px, 400.0);
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.counter_threshold, 0.4);
    assert_eq!(config.counter_frames, 60);
    assert_eq!(config.level_filter(), log::LevelFilter::Info);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = SiteConfig::from_json(r#"{ "preloader_delay_ms": 250, "log_level": "debug" }"#).unwrap();
    assert_eq!(config.preloader_delay_ms, 250);
    assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.counter_frames, 60);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SiteConfig::from_json(r#"{ "preloader_delay": 250 }"#).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, UiError::ConfigValue { field: "reveal_threshold", .. }));
}

#[test]
fn zero_counter_frames_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "counter_frames": 0 }"#).unwrap_err();
    assert!(matches!(err, UiError::ConfigValue { field: "counter_frames", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, UiError::ConfigValue { field: "log_level", .. }));
}

#[test]
fn load_without_block_uses_defaults_silently() {
    let (config, err) = SiteConfig::load(None);
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());

    let (config, err) = SiteConfig::load(Some("   "));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());
}

#[test]
fn load_with_malformed_block_falls_back_and_reports() {
    let (config, err) = SiteConfig::load(Some("{ not json"));
    assert_eq!(config, SiteConfig::default());
    assert!(matches!(err, Some(UiError::Config(_))));
}

#[test]
fn load_with_valid_block_applies_it() {
    let (config, err) = SiteConfig::load(Some(r#"{ "theme_storage_key": "folio-theme" }"#));
    assert_eq!(config.theme_storage_key, "folio-theme");
    assert!(err.is_none());
}
