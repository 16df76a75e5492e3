//! Environment overrides for Settings.
//!
//! Kept in its own test binary: the variables set here are process-wide and
//! would leak into the file-based config tests running in parallel.

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use routeroot::config::{local_config_path, OutputFormat, Settings};

#[test]
fn given_routeroot_env_vars_when_load_then_env_wins_over_local_config() {
    // Arrange
    let project = TempDir::new().unwrap();
    fs::write(
        local_config_path(project.path()),
        r#"
routes_file = "local.toml"
format = "markup"

[boundary]
enabled = false
fallback = "Local"
"#,
    )
    .unwrap();
    env::set_var("ROUTEROOT_FORMAT", "tree");
    env::set_var("ROUTEROOT_ROUTES_FILE", "env/routes.toml");
    env::set_var("ROUTEROOT_BOUNDARY__ENABLED", "true");
    env::set_var("ROUTEROOT_BOUNDARY__FALLBACK", "From env");

    // Act
    let settings = Settings::load_from(None, Some(project.path()));

    // Clean up
    for key in [
        "ROUTEROOT_FORMAT",
        "ROUTEROOT_ROUTES_FILE",
        "ROUTEROOT_BOUNDARY__ENABLED",
        "ROUTEROOT_BOUNDARY__FALLBACK",
    ] {
        env::remove_var(key);
    }

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.format, OutputFormat::Tree);
    assert_eq!(settings.routes_file, PathBuf::from("env/routes.toml"));
    assert!(settings.boundary.enabled);
    assert_eq!(settings.boundary.fallback.as_deref(), Some("From env"));

    // Without overrides the local file applies again
    let settings = Settings::load_from(None, Some(project.path())).expect("load settings");
    assert_eq!(settings.format, OutputFormat::Markup);
    assert_eq!(settings.routes_file, PathBuf::from("local.toml"));
    assert!(!settings.boundary.enabled);
}
