//! Build script for songbook-server
//!
//! Stamps the binary with the identification logged at startup:
//! - `GIT_HASH`: short commit of the checkout, or `unknown` outside git
//! - `BUILD_TIMESTAMP`: UTC time of the build (RFC 3339, seconds)
//! - `BUILD_PROFILE`: cargo profile (debug/release)

use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned())
}

fn main() {
    let git_hash = git_short_hash().unwrap_or_else(|| "unknown".to_owned());

    // UTC keeps timestamps comparable across build hosts
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_owned());

    println!("cargo:rustc-env=GIT_HASH={git_hash}");
    println!("cargo:rustc-env=BUILD_TIMESTAMP={built_at}");
    println!("cargo:rustc-env=BUILD_PROFILE={profile}");

    // No rerun-if-changed: the script runs on every build so the stamp stays current
}
