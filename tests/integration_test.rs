//! Integration tests for brave-hello.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use brave_hello::{Platform, Variant, render};

const ENV_VARS: [&str; 4] = [
    "BRAVE_HELLO_VARIANT",
    "BRAVE_HELLO_RUNTIME_VERSION",
    "BRAVE_HELLO_OS",
    "BRAVE_HELLO_ARCH",
];

#[test]
fn test_scenario_linux_amd64() {
    let platform = Platform::new("go1.21", "linux", "amd64").expect("platform");
    assert_eq!(
        render(&platform, Variant::Classic),
        "Hello brave new world! It is working on go1.21 linux/amd64!\n"
    );
    assert_eq!(
        render(&platform, Variant::Browser),
        render(&platform, Variant::Classic)
    );
}

#[test]
fn test_scenario_js() {
    let platform = Platform::new("go1.21", "js", "js").expect("platform");
    assert_eq!(
        render(&platform, Variant::Browser),
        "Hello brave new world! It is working on go1.21 js/js! That means you can execute it in browsers.\n"
    );
}

/// Library-level command tests.
mod cli_tests {
    use brave_hello::cli::commands::execute;
    use brave_hello::cli::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_execute_parsed_flags() {
        let cli = Cli::try_parse_from([
            "brave-hello",
            "--variant",
            "browser",
            "--runtime-version",
            "go1.21",
            "--os",
            "js",
            "--arch",
            "js",
        ])
        .expect("parse");
        let out = execute(&cli).expect("execute");
        assert!(out.ends_with(" That means you can execute it in browsers.\n"));
    }

    #[test]
    fn test_execute_json_message_matches_text() {
        let text_cli = Cli::try_parse_from(["brave-hello", "--os", "plan9", "--arch", "mips"])
            .expect("parse");
        let json_cli = Cli::try_parse_from([
            "brave-hello",
            "--format",
            "json",
            "--os",
            "plan9",
            "--arch",
            "mips",
        ])
        .expect("parse");

        let text = execute(&text_cli).expect("text");
        let json = execute(&json_cli).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["message"].as_str(), Some(text.as_str()));
    }
}

/// Binary tests driving the built executable.
mod bin_tests {
    use super::ENV_VARS;
    use assert_cmd::Command;
    use brave_hello::Platform;
    use predicates::prelude::*;

    fn cmd() -> Command {
        let mut cmd = Command::cargo_bin("brave-hello").expect("binary built");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("BRAVE_HELLO_LOG").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_bare_invocation_prints_classic_line() {
        let expected = format!(
            "Hello brave new world! It is working on {}!\n",
            Platform::detect()
        );
        cmd()
            .assert()
            .success()
            .stdout(expected)
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_runs_are_identical() {
        let first = cmd().output().expect("first run");
        let second = cmd().output().expect("second run");
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn test_classic_scenario_via_flags() {
        cmd()
            .args(["--runtime-version", "go1.21", "--os", "linux", "--arch", "amd64"])
            .assert()
            .success()
            .stdout("Hello brave new world! It is working on go1.21 linux/amd64!\n");
    }

    #[test]
    fn test_browser_scenario_via_env() {
        cmd()
            .env("BRAVE_HELLO_VARIANT", "browser")
            .env("BRAVE_HELLO_RUNTIME_VERSION", "go1.21")
            .env("BRAVE_HELLO_OS", "js")
            .env("BRAVE_HELLO_ARCH", "js")
            .assert()
            .success()
            .stdout(
                "Hello brave new world! It is working on go1.21 js/js! That means you can execute it in browsers.\n",
            );
    }

    #[test]
    fn test_browser_variant_off_js_has_no_clause() {
        cmd()
            .args(["--variant", "browser", "--arch", "wasm32"])
            .assert()
            .success()
            .stdout(predicate::str::contains("browsers").not());
    }

    #[test]
    fn test_json_output() {
        cmd()
            .args(["--format", "json", "--arch", "js", "--variant", "browser"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"browser\":true"))
            .stdout(predicate::str::contains("\"variant\":\"browser\""));
    }

    #[test]
    fn test_unknown_variant_fails() {
        cmd()
            .args(["--variant", "fancy"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("unknown greeting variant: fancy"));
    }

    #[test]
    fn test_empty_env_override_is_unset() {
        let expected = format!(
            "Hello brave new world! It is working on {}!\n",
            Platform::detect()
        );
        cmd()
            .env("BRAVE_HELLO_ARCH", "")
            .env("BRAVE_HELLO_OS", "")
            .env("BRAVE_HELLO_RUNTIME_VERSION", "")
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn test_blank_override_fails_as_json() {
        cmd()
            .args(["--format", "json", "--os", "  "])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("target os must not be empty"));
    }

    #[test]
    fn test_verbose_logs_to_stderr_only() {
        let expected = format!(
            "Hello brave new world! It is working on {}!\n",
            Platform::detect()
        );
        cmd()
            .arg("--verbose")
            .assert()
            .success()
            .stdout(expected)
            .stderr(predicate::str::contains("rendered greeting"));
    }

    #[test]
    fn test_verbose_raises_env_log_level() {
        cmd()
            .env("RUST_LOG", "warn")
            .arg("--verbose")
            .assert()
            .success()
            .stderr(predicate::str::contains("rendered greeting"));
    }

    #[test]
    fn test_unknown_format_is_usage_error() {
        cmd()
            .args(["--format", "yaml"])
            .assert()
            .failure()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_positional_argument_is_usage_error() {
        cmd().arg("extra").assert().failure().code(2);
    }

    #[test]
    fn test_version_flag() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("brave-hello "));
    }
}
