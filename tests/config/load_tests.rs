//! Settings Loading Tests
//!
//! Defaults, coercion and aggregate failures observed through `ConfigLoader`.

use file_share_bot::config::{ConfigLoader, Settings};
use file_share_bot::shared::error::{ConfigError, FieldErrorKind};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::common::{env_loader, env_with, env_without, required_env, SRV_URL};

fn load(env: Vec<(&'static str, &'static str)>) -> Result<Settings, ConfigError> {
    env_loader(env).load()
}

#[test]
fn test_required_only_uses_defaults() {
    let settings = load(required_env()).unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert!(settings.server.http_enabled);
    assert!(settings.access.rate_limiter);
    assert_eq!(settings.bot.api_id, 25482744);
    assert_eq!(settings.bot.workers, 8);
    assert_eq!(settings.bot.max_message_cache_size, 100);
    assert_eq!(settings.database.url.as_str(), SRV_URL);
    assert_eq!(settings.database.name, "file-share");
    assert_eq!(settings.access.backup_channel, -1002485552269);
    assert!(!settings.access.private_request);
    assert!(settings.access.protect_content);
    assert!(settings.access.auto_generate_link);
}

#[test]
fn test_optional_fields_overridden() {
    let settings = load(env_with(&[
        ("PORT", "9000"),
        ("HOSTNAME", "127.0.0.1"),
        ("HTTP_SERVER", "0"),
        ("RATE_LIMITER", "off"),
    ]))
    .unwrap();

    assert_eq!(settings.server_addr(), "127.0.0.1:9000");
    assert!(!settings.server.http_enabled);
    assert!(!settings.access.rate_limiter);
}

#[test_case("5", vec![5] ; "single integer")]
#[test_case("[5, 6, 7]", vec![5, 6, 7] ; "json list")]
#[test_case("1, 2,3", vec![1, 2, 3] ; "comma separated")]
fn test_admin_list_shapes(raw: &'static str, expected: Vec<i64>) {
    let settings = load(env_with(&[("ROOT_ADMINS_ID", raw)])).unwrap();
    assert_eq!(settings.access.root_admins, expected);
}

#[test]
fn test_force_sub_channels_comma_separated() {
    let settings = load(env_with(&[(
        "FORCE_SUB_CHANNELS",
        "-1002209844539, -1002209844540",
    )]))
    .unwrap();

    assert_eq!(
        settings.access.force_sub_channels,
        vec![-1002209844539, -1002209844540]
    );
}

#[test]
fn test_malformed_list_names_raw_value() {
    let err = load(env_with(&[("FORCE_SUB_CHANNELS", "1,a,3")])).unwrap_err();

    let field = err.field("FORCE_SUB_CHANNELS").unwrap();
    assert!(matches!(&field.kind, FieldErrorKind::Format { value, .. } if value == "1,a,3"));
    assert!(err.to_string().contains("1,a,3"));
}

#[test_case("mongodb+srv://cluster0.example.net/db", true ; "srv accepted")]
#[test_case("mongodb://cluster0.example.net/db", false ; "plain mongodb rejected")]
#[test_case("http://cluster0.example.net", false ; "http rejected")]
fn test_database_url_scheme(url: &'static str, accepted: bool) {
    let result = load(env_with(&[("MONGO_DB_URL", url)]));

    assert_eq!(result.is_ok(), accepted);
    if let Err(err) = result {
        assert_eq!(err.field_errors().len(), 1);
        assert!(err.field("MONGO_DB_URL").is_some());
    }
}

#[test]
fn test_missing_bot_token_fails() {
    let err = load(env_without(&["BOT_TOKEN"])).unwrap_err();

    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field("BOT_TOKEN").unwrap().kind, FieldErrorKind::Missing);
    assert!(err.to_string().contains("BOT_TOKEN: field required"));
}

#[test]
fn test_all_failures_reported_together() {
    let env: Vec<_> = env_with(&[("API_ID", "not-a-number"), ("PROTECT_CONTENT", "maybe")])
        .into_iter()
        .filter(|(key, _)| !["MONGO_DB_NAME", "API_HASH"].contains(key))
        .collect();

    let err = load(env).unwrap_err();
    let mut fields: Vec<&str> = err.field_errors().iter().map(|e| e.field).collect();
    fields.sort_unstable();

    assert_eq!(
        fields,
        vec!["API_HASH", "API_ID", "MONGO_DB_NAME", "PROTECT_CONTENT"]
    );
    assert!(matches!(
        err.field("API_ID").unwrap().kind,
        FieldErrorKind::Coercion { .. }
    ));
}

#[test]
fn test_channel_registry_discarded_on_load() {
    let settings = load(env_with(&[(
        "CHANNELS_N_INVITE",
        r#"{"updates": {"is_private": true, "invite_link": "https://t.me/+abc", "channel_id": -100}}"#,
    )]))
    .unwrap();

    assert!(settings.channels.is_empty());
}

#[test]
fn test_channel_registry_writable_after_load() {
    use file_share_bot::domain::ChannelInfo;

    let settings = load(required_env()).unwrap();
    let shared = settings.clone();

    shared.channels.insert(
        "updates",
        ChannelInfo {
            is_private: false,
            invite_link: "https://t.me/+abc".into(),
            channel_id: -1002209844539,
        },
    );

    assert_eq!(settings.channels.len(), 1);
    assert_eq!(
        settings.channels.get("updates").map(|c| c.channel_id),
        Some(-1002209844539)
    );
}

#[test]
fn test_lowercase_keys_accepted() {
    let env: Vec<(String, String)> = required_env()
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_string()))
        .collect();

    let settings = ConfigLoader::new()
        .without_env_file()
        .with_env(env)
        .load()
        .unwrap();

    assert_eq!(settings.bot.session, "file-share");
}
