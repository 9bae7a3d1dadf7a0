use super::*;

#[test]
fn stored_dark_maps_to_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn stored_light_maps_to_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn missing_value_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn unrecognized_values_default_to_light() {
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
}

#[test]
fn persisted_strings_are_lowercase_names() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn storage_key_is_stable() {
    // Previously generated pages persisted under the same key.
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

#[test]
fn toggled_flips_and_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn only_dark_reports_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
