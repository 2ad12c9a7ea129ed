use super::*;

// =============================================================
// Stored value parsing
// =============================================================

#[test]
fn missing_entry_means_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn only_exact_escuro_means_dark() {
    assert_eq!(Theme::from_stored(Some("escuro")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("claro")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Escuro")), Theme::Light);
    assert_eq!(Theme::from_stored(Some(" escuro")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn storage_values_round_trip_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.storage_value())), theme);
    }
}

#[test]
fn labels_name_the_active_theme() {
    assert_eq!(Theme::Light.label(), "Tema: Claro");
    assert_eq!(Theme::Dark.label(), "Tema: Escuro");
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggling_twice_restores_original() {
    for start in [Theme::Light, Theme::Dark] {
        assert_eq!(toggle(toggle(start)), start);
    }
}

#[test]
fn odd_toggle_count_stores_opposite_value() {
    let mut theme = Theme::from_stored(Some("escuro"));
    for _ in 0..3 {
        theme = toggle(theme);
    }
    assert_eq!(theme.storage_value(), "claro");
}

#[test]
fn body_class_decides_theme() {
    assert_eq!(Theme::from_body_class(true), Theme::Dark);
    assert_eq!(Theme::from_body_class(false), Theme::Light);
}

#[test]
fn click_on_page_already_dark_switches_to_light() {
    // Markup ships `tema-escuro` on <body> while nothing is stored, so the
    // button still reads "Tema: Claro". The page class wins.
    let shown = Theme::from_stored(None);
    assert_eq!(shown.label(), "Tema: Claro");
    let next = toggle(Theme::from_body_class(true));
    assert_eq!(next, Theme::Light);
    assert_eq!(next.storage_value(), "claro");
    assert_eq!(next.label(), "Tema: Claro");
}

// =============================================================
// Browser helpers outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_is_light_without_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn toggle_page_falls_back_to_shown_theme_without_browser() {
    assert_eq!(applied(), None);
    assert_eq!(toggle_page(Theme::Light), Theme::Dark);
    assert_eq!(toggle_page(Theme::Dark), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Dark);
    persist(Theme::Dark);
    attach(&PageConfig::default());
}
