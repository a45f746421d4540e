use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn builds_default_list_endpoint_with_key_and_language() {
    let settings = ClientSettings {
        api_key: "abc123".into(),
        ..ClientSettings::default()
    };

    let url = settings.list_endpoint().expect("endpoint");
    assert_eq!(
        url.as_str(),
        "https://api.themoviedb.org/3/movie/popular?api_key=abc123&language=en-US&page=1"
    );
}

#[test]
fn omits_empty_api_key_and_tolerates_extra_slashes() {
    let settings = ClientSettings {
        api_base_url: "http://127.0.0.1:9000/3/".into(),
        list_path: "/movie/top_rated".into(),
        ..ClientSettings::default()
    };

    let url = settings.list_endpoint().expect("endpoint");
    assert_eq!(url.path(), "/3/movie/top_rated");
    assert!(!url.query().unwrap_or_default().contains("api_key"));
}

#[test]
fn list_endpoint_always_requests_the_first_page() {
    let mut settings = ClientSettings::default();
    settings.apply_env(env_from(&[("APP__PAGE", "3")]));

    let url = settings.list_endpoint().expect("endpoint");
    let pages: Vec<String> = url
        .query_pairs()
        .filter(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(pages, vec!["1".to_string()]);
}

#[test]
fn rejects_unparseable_base_url() {
    let settings = ClientSettings {
        api_base_url: "not a url".into(),
        ..ClientSettings::default()
    };

    assert!(matches!(
        settings.list_endpoint(),
        Err(SettingsError::InvalidEndpoint { .. })
    ));
}

#[test]
fn file_values_override_only_the_keys_present() {
    let mut settings = ClientSettings::default();
    settings
        .apply_toml("api_key = \"from-file\"\nlanguage = \"ru-RU\"\n")
        .expect("parse");

    assert_eq!(settings.api_key, "from-file");
    assert_eq!(settings.language, "ru-RU");
    assert_eq!(settings.list_path, ClientSettings::default().list_path);
}

#[test]
fn malformed_file_is_an_error() {
    let mut settings = ClientSettings::default();
    assert!(settings.apply_toml("api_key = 5").is_err());
}

#[test]
fn app_prefixed_env_wins_over_tmdb_key() {
    let mut settings = ClientSettings::default();
    settings.apply_env(env_from(&[
        ("TMDB_API_KEY", "tmdb-key"),
        ("APP__API_KEY", "app-key"),
        ("APP__POSTER_SIZE", "w342"),
    ]));

    assert_eq!(settings.api_key, "app-key");
    assert_eq!(settings.poster_size, "w342");
    assert_eq!(settings.language, "en-US");
}

#[test]
fn explicit_missing_config_file_is_reported() {
    let path = env::temp_dir().join("movie_browser_does_not_exist.toml");
    assert!(matches!(
        load_settings(Some(&path)),
        Err(SettingsError::Read { .. })
    ));
}

#[test]
fn loads_explicit_config_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("movie_browser_config_test_{suffix}.toml"));
    fs::write(&path, "list_path = \"movie/upcoming\"\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.list_path, "movie/upcoming");

    fs::remove_file(path).expect("cleanup");
}
