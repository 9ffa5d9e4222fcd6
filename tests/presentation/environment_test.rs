use scriba::presentation::Environment;

#[test]
fn given_known_aliases_when_parsing_then_maps_to_environment() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Dev".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" test ".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("PRODUCTION".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
}
