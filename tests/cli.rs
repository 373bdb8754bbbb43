use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const ENV_VARS: [&str; 5] = [
    "TRANSITCTL_CONFIG",
    "TRANSITCTL_PORTAL",
    "TRANSITCTL_API_HOST",
    "TRANSITCTL_FORMAT",
    "TRANSITCTL_DEBUG",
];

fn write_config(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "state_dir: {}\n{}preferences:\n  page_size: 20\n",
        dir.join("state").display(),
        extra
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn store_credential(dir: &Path, key: &str, value: &str) {
    let state = dir.join("state");
    fs::create_dir_all(&state).expect("failed to create state dir");
    fs::write(state.join(key), value).expect("failed to write credential");
}

fn transitctl(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("transitctl"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--config").arg(config_path);
    cmd
}

#[test]
fn version_prints_package_version() {
    Command::new(assert_cmd::cargo::cargo_bin!("transitctl"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn status_without_session() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = transitctl(&config_path).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("http://localhost:8080"));
    assert!(stdout.contains("Not signed in"));

    Ok(())
}

#[test]
fn status_reports_restored_session() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "portal: owner\n");
    store_credential(temp.path(), "token", "owner-tok");

    let assert = transitctl(&config_path)
        .args(["status", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["portal"], "owner");
    assert_eq!(value["data"]["authenticated"], true);
    assert_eq!(value["data"]["verified"], false);

    Ok(())
}

#[test]
fn portals_keep_separate_sessions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    store_credential(temp.path(), "adminToken", "admin-tok");

    transitctl(&config_path)
        .args(["--portal", "owner", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));

    Ok(())
}

#[test]
fn logout_removes_credential_and_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    store_credential(temp.path(), "adminToken", "admin-tok");

    transitctl(&config_path)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    assert!(!temp.path().join("state").join("adminToken").exists());

    transitctl(&config_path)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active admin session"));

    Ok(())
}

#[test]
fn logout_succeeds_with_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "portal: [unclosed")?;
    let default_state = temp.path().join(".transitctl");
    fs::create_dir_all(&default_state)?;
    fs::write(default_state.join("token"), "owner-tok")?;

    transitctl(&config_path)
        .env("HOME", temp.path())
        .args(["logout", "--portal", "owner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out of the owner portal"));

    assert!(!default_state.join("token").exists());

    Ok(())
}

#[test]
fn config_set_then_show() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    transitctl(&config_path)
        .args(["config", "set", "portal", "owner"])
        .assert()
        .success();
    transitctl(&config_path)
        .args(["config", "set", "page_size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));

    let assert = transitctl(&config_path)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"]["portal"], "owner");
    assert_eq!(value["data"]["preferences"]["page_size"], 20);

    Ok(())
}

#[test]
fn protected_command_requires_session() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    transitctl(&config_path)
        .args(["user", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not logged in"));

    Ok(())
}

#[test]
fn owner_command_rejected_on_admin_portal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    store_credential(temp.path(), "adminToken", "admin-tok");

    transitctl(&config_path)
        .args(["fleet", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--portal owner"));

    Ok(())
}

#[test]
fn completion_generates_script() {
    Command::new(assert_cmd::cargo::cargo_bin!("transitctl"))
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transitctl"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_persists_credential() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let login = server
        .mock("POST", "/admin/auth/login")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "username": "root",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body(r#"{"admin": {"id": 1, "username": "root"}, "token": "admin-jwt"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    transitctl(&config_path)
        .args(["login", "--username", "root", "--password-stdin"])
        .env("TRANSITCTL_API_HOST", server.url())
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("root"));

    login.assert();
    let stored = fs::read_to_string(temp.path().join("state").join("adminToken"))?;
    assert_eq!(stored, "admin-jwt");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_failure_shows_server_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/bus-owner/auth/login")
        .with_status(401)
        .with_body(r#"{"message": "invalid credentials"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    transitctl(&config_path)
        .args(["--portal", "owner", "login", "-u", "fleet", "--password-stdin"])
        .env("TRANSITCTL_API_HOST", server.url())
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credentials"));

    assert!(!temp.path().join("state").join("token").exists());

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn user_list_sends_stored_credential() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let users = server
        .mock("GET", "/admin/users")
        .match_header("authorization", "Bearer admin-tok")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("page".into(), "2".into()),
            mockito::Matcher::UrlEncoded("page_size".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "users": [
                    {"id": 7, "name": "Rahim", "email": "rahim@example.com", "mobile": "01700000000", "is_student": true, "balance": 120.0}
                ],
                "total": 21, "page": 2, "page_size": 20, "total_pages": 2
            }"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    store_credential(temp.path(), "adminToken", "admin-tok");

    transitctl(&config_path)
        .args(["user", "list", "--page", "2"])
        .env("TRANSITCTL_API_HOST", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahim"))
        .stdout(predicate::str::contains("Page 2 of 2"));

    users.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn rejected_credential_is_forgotten() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _buses = server
        .mock("GET", "/admin/buses")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "token expired"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    store_credential(temp.path(), "adminToken", "stale-tok");

    transitctl(&config_path)
        .args(["bus", "list"])
        .env("TRANSITCTL_API_HOST", server.url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("transitctl login"));

    assert!(!temp.path().join("state").join("adminToken").exists());

    Ok(())
}
