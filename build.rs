//! Captures the compiler release so the binary can report what it was built with.

#![allow(clippy::print_stdout)]

use std::env;
use std::process::Command;

const FALLBACK: &str = "rust-unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|stdout| parse_release(&stdout))
        .unwrap_or_else(|| FALLBACK.to_string());

    println!("cargo:rustc-env=BRAVE_HELLO_RUSTC_VERSION={version}");
}

/// `rustc 1.88.0 (6b00bc388 2025-06-23)` becomes `rust1.88.0`.
fn parse_release(stdout: &str) -> Option<String> {
    let mut words = stdout.split_whitespace();
    if words.next()? != "rustc" {
        return None;
    }
    let release = words.next()?;
    Some(format!("rust{release}"))
}
