use super::*;
use theme::Theme;

fn custom_config() -> ThemeConfig {
    ThemeConfig {
        control_id: "tt".to_owned(),
        storage_key: "ui-theme".to_owned(),
        default_theme: Theme::Dark,
        ..ThemeConfig::default()
    }
}

#[test]
fn embedded_config_reads_back_with_the_rendered_control_id() {
    let server = custom_config();
    let browser = parse_embedded(Some(&embedded_json(&server))).unwrap();

    assert_eq!(browser, server);
    assert_eq!(browser.control_id, "tt");
    assert_eq!(
        crate::components::theme_toggle::initial_label(&browser),
        crate::components::theme_toggle::initial_label(&server)
    );
}

#[test]
fn missing_or_blank_meta_means_default_config() {
    assert_eq!(parse_embedded(None).unwrap(), ThemeConfig::default());
    assert_eq!(parse_embedded(Some("  ")).unwrap(), ThemeConfig::default());
}

#[test]
fn rejected_meta_content_is_an_error() {
    assert!(matches!(
        parse_embedded(Some(r#"{"control_id":""}"#)),
        Err(ThemeError::InvalidConfig(_))
    ));
}

#[test]
fn root_attribute_uses_configured_default_theme() {
    assert_eq!(root_theme_attribute(&custom_config()), Some("dark"));
    assert_eq!(root_theme_attribute(&ThemeConfig::default()), Some("light"));
}

#[test]
fn custom_root_attribute_is_left_to_the_browser_binding() {
    let config = ThemeConfig { attribute: "data-theme".to_owned(), ..ThemeConfig::default() };
    assert_eq!(root_theme_attribute(&config), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn non_browser_theme_config_is_default() {
    assert_eq!(theme_config(), ThemeConfig::default());
}
