use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_directions() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert!(Theme::Light.toggled().is_dark());
}

#[test]
fn string_forms_match_storage_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn parse_accepts_case_and_whitespace_variants() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!("sepia".parse::<Theme>(), Err(ThemeError::UnknownTheme("sepia".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(ThemeError::UnknownTheme("x".into()).to_string(), "unknown theme: \"x\"");
    assert_eq!(ThemeError::StorageUnavailable.to_string(), "persistent storage unavailable");
}
