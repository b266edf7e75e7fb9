use std::collections::HashMap;

use super::*;

#[test]
fn default_strategy_is_300ms_timer() {
    let strategy = ResizeStrategy::default();
    assert_eq!(strategy, ResizeStrategy::Delay(Duration::from_millis(300)));
    assert_eq!(strategy.kind(), "delay");
    assert_eq!(strategy.delay_millis(), 300);
}

#[test]
fn default_config_uses_page_contract() {
    let config = SidebarConfig::default();
    assert_eq!(config.toggle_id, "sidebarToggle");
    assert_eq!(config.marker_class, "sb-sidenav-toggled");
    assert_eq!(config.storage_key, "sb|sidebar-toggle");
    assert_eq!(config.transition_target_id, "layoutSidenav_nav");
}

#[test]
fn transition_end_reports_fallback_as_delay() {
    let strategy = ResizeStrategy::TransitionEnd { fallback: Duration::from_millis(450) };
    assert_eq!(strategy.kind(), "transitionend");
    assert_eq!(strategy.delay(), Duration::from_millis(450));
}

#[test]
fn delay_millis_saturates() {
    let strategy = ResizeStrategy::Delay(Duration::from_secs(u64::MAX / 1000));
    assert_eq!(strategy.delay_millis(), u32::MAX);
}

#[test]
fn from_kind_rejects_unknown() {
    assert_eq!(ResizeStrategy::from_kind("animationend", Duration::ZERO), None);
}

#[test]
fn data_attrs_round_trip_through_kind_and_delay() {
    let strategy = ResizeStrategy::TransitionEnd { fallback: Duration::from_millis(500) };
    let delay = strategy.delay_millis().to_string();
    assert_eq!(ResizeStrategy::from_data_attrs(Some(strategy.kind()), Some(&delay)), strategy);
}

#[test]
fn data_attrs_missing_use_defaults() {
    assert_eq!(ResizeStrategy::from_data_attrs(None, None), ResizeStrategy::default());
}

#[test]
fn data_attrs_bad_delay_keeps_kind() {
    let strategy = ResizeStrategy::from_data_attrs(Some("transitionend"), Some("soon"));
    assert_eq!(strategy, ResizeStrategy::TransitionEnd { fallback: Duration::from_millis(300) });
}

#[test]
fn data_attrs_unknown_kind_keeps_delay() {
    let strategy = ResizeStrategy::from_data_attrs(Some("bogus"), Some("120"));
    assert_eq!(strategy, ResizeStrategy::Delay(Duration::from_millis(120)));
}

#[test]
fn with_resize_replaces_only_strategy() {
    let resize = ResizeStrategy::Delay(Duration::from_millis(10));
    let config = SidebarConfig::default().with_resize(resize);
    assert_eq!(config.resize, resize);
    assert_eq!(config.toggle_id, DEFAULT_TOGGLE_ID);
}

// =============================================================
// Config carried on <body>
// =============================================================

struct Attrs(HashMap<&'static str, &'static str>);

impl DataAttrs for Attrs {
    fn data_attr(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|v| (*v).to_owned())
    }
}

#[test]
fn config_reads_resize_from_body_attrs() {
    let body = Attrs(HashMap::from([(DATA_RESIZE_STRATEGY, "transitionend"), (DATA_RESIZE_DELAY_MS, "800")]));
    let config = SidebarConfig::from_data_attrs(&body);
    assert_eq!(config.resize, ResizeStrategy::TransitionEnd { fallback: Duration::from_millis(800) });
    assert_eq!(config.toggle_id, DEFAULT_TOGGLE_ID);
}

#[test]
fn config_without_attrs_is_default() {
    let body = Attrs(HashMap::new());
    assert_eq!(SidebarConfig::from_data_attrs(&body), SidebarConfig::default());
}
