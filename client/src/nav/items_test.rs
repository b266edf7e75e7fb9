use super::*;

// =============================================================
// Default menu
// =============================================================

#[test]
fn default_menu_has_two_sections_of_three() {
    let grouped = sections(&sidebar_items());
    assert_eq!(grouped.len(), 2);
    assert!(grouped.iter().all(|s| s.links.len() == 3));
    assert_eq!(grouped[0].header.as_ref().map(|h| h.label.as_str()), Some("Dashboard"));
}

#[test]
fn only_later_sections_get_margin_top() {
    let grouped = sections(&sidebar_items());
    let margins: Vec<bool> = grouped
        .iter()
        .map(|s| s.header.as_ref().is_some_and(|h| h.margin_top))
        .collect();
    assert_eq!(margins, vec![false, true]);
}

#[test]
fn default_links_are_absolute_paths() {
    for item in sidebar_items() {
        if let NavItem::Link(link) = item {
            assert!(link.href.starts_with('/'), "{}", link.href);
        }
    }
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn links_before_first_header_get_headerless_section() {
    let items = vec![NavItem::link("Home", "/", ""), NavItem::header("More", false), NavItem::link("A", "/a", "")];
    let grouped = sections(&items);
    assert_eq!(grouped.len(), 2);
    assert!(grouped[0].header.is_none());
    assert_eq!(grouped[0].links[0].label, "Home");
    assert_eq!(grouped[1].links[0].href, "/a");
}

#[test]
fn empty_header_section_is_kept() {
    let grouped = sections(&[NavItem::header("Empty", false)]);
    assert_eq!(grouped.len(), 1);
    assert!(grouped[0].links.is_empty());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn serializes_with_type_tag() {
    let json = serde_json::to_value(NavItem::link("Overview", "/dashboard/overview", "📊")).unwrap();
    assert_eq!(json["type"], "link");
    assert_eq!(json["href"], "/dashboard/overview");

    let json = serde_json::to_value(NavItem::header("Dashboard", true)).unwrap();
    assert_eq!(json["type"], "header");
    assert_eq!(json["margin_top"], true);
}

#[test]
fn header_margin_top_defaults_false() {
    let item: NavItem = serde_json::from_str(r#"{"type":"header","label":"Dashboard"}"#).unwrap();
    assert_eq!(item, NavItem::header("Dashboard", false));
}

#[test]
fn unknown_type_is_rejected() {
    assert!(serde_json::from_str::<NavItem>(r#"{"type":"divider"}"#).is_err());
}

// =============================================================
// Active link
// =============================================================

#[test]
fn exact_path_is_active() {
    assert!(is_active("/dashboard/overview", "/dashboard/overview"));
    assert!(is_active("/dashboard/overview", "/dashboard/overview/"));
}

#[test]
fn nested_path_is_active() {
    assert!(is_active("/member", "/member/schedule"));
}

#[test]
fn sibling_with_shared_prefix_is_not_active() {
    assert!(!is_active("/dashboard/plan", "/dashboard/planner"));
    assert!(!is_active("/dashboard/overview", "/dashboard/planner"));
}

#[test]
fn root_href_only_matches_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/dashboard/overview"));
}
