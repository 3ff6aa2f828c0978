//! End-to-end composition tests
//!
//! Exercises the flow a host application runs at startup: validate
//! settings, load resource files into a registry, construct a session,
//! translate, switch languages and persist the chosen language through
//! a preference-store subscriber.

use std::path::Path;
use std::sync::Arc;

use assert_matches::assert_matches;
use langswitch::config::{LocaleConfig, LoggingConfig, PreferencesConfig, Settings};
use langswitch::{
    load_registry, FilePreferences, LangswitchError, MemoryPreferences, PreferenceStore, Session,
    TranslationParams,
};

fn write_locales(dir: &Path) {
    std::fs::write(
        dir.join("en.json"),
        r#"{"greeting": "Hello {{name}}", "menu": {"exit": "Exit"}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("pt-BR.json"),
        r#"{"greeting": "Olá {{name}}", "menu": {"exit": "Sair"}}"#,
    )
    .unwrap();
}

fn create_settings(resource_dir: &Path, prefs_path: &Path) -> Settings {
    Settings {
        locale: LocaleConfig {
            initial_language: "pt-BR".to_string(),
            fallback_language: "en".to_string(),
            supported_languages: vec!["en".to_string(), "pt-BR".to_string()],
            resource_dir: resource_dir.display().to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_path: "logs".to_string(),
        },
        preferences: Some(PreferencesConfig {
            file_path: prefs_path.display().to_string(),
            language_key: "language".to_string(),
        }),
    }
}

fn name_params(name: &str) -> TranslationParams {
    TranslationParams::from_iter([("name".to_string(), name.to_string())])
}

#[tokio::test]
async fn full_startup_flow_translates_and_switches() {
    let dir = tempfile::tempdir().unwrap();
    write_locales(dir.path());
    let settings = create_settings(dir.path(), &dir.path().join("prefs.json"));
    settings.validate().unwrap();

    let registry = load_registry(&settings.locale).await.unwrap();
    let session = Session::new(
        registry,
        settings.locale.initial_language.clone(),
        settings.locale.fallback_language.clone(),
    )
    .unwrap();

    let params = name_params("Rodrigo");
    assert_eq!(
        session.translate_with("greeting", Some(&params)),
        "Olá Rodrigo"
    );
    assert_eq!(session.translate("menu.exit"), "Sair");

    session.set_language("en").unwrap();
    assert_eq!(
        session.translate_with("greeting", Some(&params)),
        "Hello Rodrigo"
    );
    assert_eq!(session.translate("menu.exit"), "Exit");
}

#[tokio::test]
async fn chosen_language_survives_a_restart_via_preferences() {
    let dir = tempfile::tempdir().unwrap();
    write_locales(dir.path());
    let prefs_path = dir.path().join("prefs.json");
    let settings = create_settings(dir.path(), &prefs_path);

    // First run: start from the configured initial language, then the
    // user switches and a subscriber persists the choice.
    {
        let registry = load_registry(&settings.locale).await.unwrap();
        let store = Arc::new(FilePreferences::new(&prefs_path));
        let initial = store.get_or("language", &settings.locale.initial_language);
        let session = Session::new(registry, initial, "en").unwrap();

        let persist = Arc::clone(&store);
        session.subscribe(move |language| persist.set("language", language));

        session.set_language("en").unwrap();
    }

    // Second run: the remembered language wins over the configured one.
    {
        let registry = load_registry(&settings.locale).await.unwrap();
        let store = FilePreferences::new(&prefs_path);
        let initial = store.get_or("language", &settings.locale.initial_language);
        assert_eq!(initial, "en");

        let session = Session::new(registry, initial, "en").unwrap();
        assert_eq!(session.current_language(), "en");
    }
}

#[tokio::test]
async fn missing_keys_degrade_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    write_locales(dir.path());
    let settings = create_settings(dir.path(), &dir.path().join("prefs.json"));

    let registry = load_registry(&settings.locale).await.unwrap();
    let session = Session::new(registry, "pt-BR", "en").unwrap();

    assert_eq!(session.translate("not.a.key"), "not.a.key");
    assert_matches!(
        session.set_language("fr"),
        Err(LangswitchError::UnknownLanguage { language }) if language == "fr"
    );
    assert_eq!(session.current_language(), "pt-BR");
}

#[test]
fn independent_sessions_do_not_interfere() {
    let make_registry = || {
        let registry = langswitch::Registry::new();
        registry.register(
            "en",
            langswitch::ResourceSet::from_iter([("greeting", "Hello")]),
        );
        registry.register(
            "pt-BR",
            langswitch::ResourceSet::from_iter([("greeting", "Olá")]),
        );
        registry
    };

    let store = MemoryPreferences::new();
    let first = Session::new(make_registry(), "en", "en").unwrap();
    let second = Session::new(make_registry(), "pt-BR", "en").unwrap();

    first.set_language("pt-BR").unwrap();
    store.set("language", &first.current_language());

    assert_eq!(first.translate("greeting"), "Olá");
    assert_eq!(second.current_language(), "pt-BR");
    assert_eq!(store.get_or("language", "en"), "pt-BR");
}
