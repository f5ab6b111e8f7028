//! Build script that stamps the version string shown by `jwtauth --version`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=JWTAUTH_BUILD_VERSION");

    let version = std::env::var("JWTAUTH_BUILD_VERSION").unwrap_or_else(|_| {
        let pkg = env!("CARGO_PKG_VERSION");
        match git_commit() {
            Some(commit) => format!("{pkg}+g{commit}"),
            None => pkg.to_string(),
        }
    });

    println!("cargo:rustc-env=JWTAUTH_VERSION={}", version);
}

/// Short hash of HEAD, if built from a git checkout.
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}
