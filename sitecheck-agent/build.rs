// Stamps SITECHECK_VERSION into the binary. Release builds may replace the
// patch segment through SITECHECK_PATCH_VERSION; it must stay numeric so the
// reported version remains valid semver.

use std::env;

const PATCH_OVERRIDE: &str = "SITECHECK_PATCH_VERSION";

fn main() {
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");

    let (major_minor, patch) = match version.rsplit_once('.') {
        Some((head, tail)) if head.contains('.') => (head.to_string(), tail.to_string()),
        _ => panic!("Cargo.toml version must be MAJOR.MINOR.PATCH, got: {version}"),
    };

    let patch = match env::var(PATCH_OVERRIDE) {
        Ok(value) if !value.trim().is_empty() => {
            let value = value.trim();
            if value.parse::<u32>().is_err() {
                panic!("{PATCH_OVERRIDE} must be a number, got: {value}");
            }
            value.to_string()
        }
        _ => patch,
    };

    println!("cargo:rustc-env=SITECHECK_VERSION={major_minor}.{patch}");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed={PATCH_OVERRIDE}");
}
