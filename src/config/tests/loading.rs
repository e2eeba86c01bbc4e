//! Tests for loading configuration from the environment and CLI arguments.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::StargazerConfig;

/// Loads configuration with an isolated home directory and the given
/// environment overrides.
fn load_isolated(env: &[(&str, Option<&str>)], cli_args: &[&str]) -> StargazerConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("STARGAZER_TOKEN", None),
        ("STARGAZER_API_URL", None),
        ("STARGAZER_ORG", None),
        ("STARGAZER_REPO", None),
    ];
    vars.retain(|(name, _)| !env.iter().any(|(override_name, _)| override_name == name));
    vars.extend_from_slice(env);
    let _guard = env_lock::lock_env(vars);

    let mut args: Vec<OsString> = vec![OsString::from("stargazer")];
    args.extend(cli_args.iter().map(OsString::from));

    StargazerConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn environment_variables_prefill_search_form() {
    let config = load_isolated(
        &[
            ("STARGAZER_ORG", Some("octocat")),
            ("STARGAZER_REPO", Some("Hello-World")),
        ],
        &[],
    );

    assert_eq!(config.org.as_deref(), Some("octocat"));
    assert_eq!(config.repo.as_deref(), Some("Hello-World"));
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_isolated(
        &[("STARGAZER_API_URL", Some("https://env.example"))],
        &["--api-url", "https://cli.example", "-o", "rust-lang"],
    );

    assert_eq!(config.api_url, "https://cli.example");
    assert_eq!(config.org.as_deref(), Some("rust-lang"));
}

#[rstest]
fn api_url_defaults_when_no_source_sets_it() {
    let config = load_isolated(&[], &[]);

    assert_eq!(config.api_url, "https://api.github.com");
}
