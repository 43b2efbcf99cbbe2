//! Stamps the crate version and short commit hash into the build.
//!
//! `PORTFOLIO_VERSION` overrides the package version, e.g. from a release tag.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=PORTFOLIO_VERSION");

    let version = env::var("PORTFOLIO_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_default();
    println!("cargo:rustc-env=PORTFOLIO_VERSION={version}");

    let sha = short_sha().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=PORTFOLIO_GIT_SHA={sha}");
}

fn short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
