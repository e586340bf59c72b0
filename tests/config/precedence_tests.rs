//! Source Precedence Tests
//!
//! `.env` file values versus environment variables.

use file_share_bot::config::ConfigLoader;
use file_share_bot::shared::error::ConfigError;
use pretty_assertions::assert_eq;

use crate::common::{env_without, required_env, EnvDir};

fn env_file_contents(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\"\n"))
        .collect()
}

#[test]
fn test_env_file_alone_is_enough() {
    let dir = EnvDir::new(&format!(
        "# bot deploy config\n\n{}",
        env_file_contents(&required_env())
    ));

    let settings = dir.loader().load().unwrap();

    assert_eq!(settings.bot.token, "7999015273:TEST-TOKEN");
    assert_eq!(settings.access.root_admins, vec![2009509228]);
}

#[test]
fn test_environment_overrides_env_file() {
    let dir = EnvDir::new(&env_file_contents(&[("BOT_SESSION", "from-file"), ("PORT", "7000")]));

    let mut env = env_without(&["BOT_SESSION"]);
    env.push(("BOT_SESSION", "from-env"));

    let settings = dir.loader().with_env(env).load().unwrap();

    assert_eq!(settings.bot.session, "from-env");
    assert_eq!(settings.server.port, 7000);
}

#[test]
fn test_layers_merge_per_key() {
    let dir = EnvDir::new(&env_file_contents(&[
        ("MONGO_DB_NAME", "from-file"),
        ("FORCE_SUB_CHANNELS", "1, 2,3"),
    ]));

    let env = env_without(&["MONGO_DB_NAME", "FORCE_SUB_CHANNELS"]);
    let settings = dir.loader().with_env(env).load().unwrap();

    assert_eq!(settings.database.name, "from-file");
    assert_eq!(settings.access.force_sub_channels, vec![1, 2, 3]);
}

#[test]
fn test_missing_env_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let settings = ConfigLoader::new()
        .with_env_file(dir.path().join(".env"))
        .with_env(required_env())
        .load()
        .unwrap();

    assert_eq!(settings.database.name, "file-share");
}

#[test]
fn test_broken_env_file_is_reported() {
    let dir = EnvDir::new("PORT=8080\nTHIS LINE IS BROKEN\n");

    let err = dir.loader().with_env(required_env()).load().unwrap_err();

    assert!(matches!(err, ConfigError::EnvFile { .. }));
    assert!(err.field_errors().is_empty());
}

#[test]
fn test_required_field_missing_from_both_layers() {
    let dir = EnvDir::new(&env_file_contents(&[("PORT", "9000")]));

    let err = dir
        .loader()
        .with_env(env_without(&["BOT_TOKEN"]))
        .load()
        .unwrap_err();

    assert_eq!(err.field_errors().len(), 1);
    assert_eq!(err.field_errors()[0].field, "BOT_TOKEN");
}
