//! Generates `compile_time` constants from `config/<profile>.toml`
//!
//! The profile comes from `TOYLEX_BUILD_PROFILE` (default `development`) and
//! the directory from `TOYLEX_CONFIG_DIR` (default `config`, relative to the
//! workspace root).

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Profile {
    file_processing: FileProcessing,
    lexical: Lexical,
    logging: Logging,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FileProcessing {
    max_file_size: u64,
    large_file_threshold: u64,
    max_line_count: usize,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Lexical {
    max_suggestion_distance: usize,
    max_recovery_attempts: usize,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Logging {
    log_buffer_size: usize,
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TOYLEX_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=TOYLEX_CONFIG_DIR");

    if let Err(message) = run() {
        panic!("toy_lexer build configuration: {}", message);
    }
}

fn run() -> Result<(), String> {
    let profile_name = env::var("TOYLEX_BUILD_PROFILE").unwrap_or_else(|_| "development".into());
    let config_dir = env::var("TOYLEX_CONFIG_DIR").unwrap_or_else(|_| "config".into());

    let path = profile_path(&config_dir, &profile_name)?;
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rustc-env=TOYLEX_BUILD_PROFILE={}", profile_name);
    println!("cargo:rustc-env=TOYLEX_CONFIG_DIR={}", config_dir);

    let text = fs::read_to_string(&path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let profile: Profile =
        toml::from_str(&text).map_err(|e| format!("invalid TOML in {}: {}", path.display(), e))?;

    let violations = check_limits(&profile, &profile_name);
    if !violations.is_empty() {
        return Err(format!("{}:\n  {}", path.display(), violations.join("\n  ")));
    }

    let out_dir = env::var("OUT_DIR").map_err(|e| format!("OUT_DIR: {}", e))?;
    let out_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&out_path, render_constants(&profile, &profile_name))
        .map_err(|e| format!("cannot write {}: {}", out_path.display(), e))
}

/// Config directories are resolved against the workspace root, one level
/// above this crate
fn profile_path(config_dir: &str, profile: &str) -> Result<PathBuf, String> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").map_err(|e| format!("CARGO_MANIFEST_DIR: {}", e))?;
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .ok_or("crate has no parent directory")?;

    let path = workspace_root
        .join(config_dir)
        .join(format!("{}.toml", profile));
    if !path.is_file() {
        return Err(format!("profile '{}' not found at {}", profile, path.display()));
    }
    Ok(path)
}

fn check_limits(profile: &Profile, name: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let mut require = |ok: bool, message: &str| {
        if !ok {
            violations.push(message.to_string());
        }
    };

    let files = &profile.file_processing;
    require(files.max_file_size <= 1_000_000_000, "max_file_size exceeds 1 GB");
    require(
        files.large_file_threshold <= files.max_file_size,
        "large_file_threshold exceeds max_file_size",
    );
    require(files.max_line_count > 0, "max_line_count must be positive");

    let lexical = &profile.lexical;
    require(
        (1..=8).contains(&lexical.max_suggestion_distance),
        "max_suggestion_distance must be within 1..=8",
    );
    require(
        (1..=1_000).contains(&lexical.max_recovery_attempts),
        "max_recovery_attempts must be within 1..=1000",
    );

    require(
        profile.logging.security_min_log_level <= 2,
        "security_min_log_level must be 0, 1 or 2",
    );

    if name == "production" {
        require(
            files.max_file_size <= 50_000_000,
            "production max_file_size must not exceed 50 MB",
        );
    }

    violations
}

fn render_constants(profile: &Profile, name: &str) -> String {
    let mut out = format!("// Generated by build.rs from the '{}' profile. Do not edit.\n\n", name);

    let modules: [(&str, Vec<(&str, &str, String)>); 3] = [
        (
            "file_processing",
            vec![
                ("MAX_FILE_SIZE", "u64", profile.file_processing.max_file_size.to_string()),
                (
                    "LARGE_FILE_THRESHOLD",
                    "u64",
                    profile.file_processing.large_file_threshold.to_string(),
                ),
                ("MAX_LINE_COUNT", "usize", profile.file_processing.max_line_count.to_string()),
            ],
        ),
        (
            "lexical",
            vec![
                (
                    "MAX_SUGGESTION_DISTANCE",
                    "usize",
                    profile.lexical.max_suggestion_distance.to_string(),
                ),
                (
                    "MAX_RECOVERY_ATTEMPTS",
                    "usize",
                    profile.lexical.max_recovery_attempts.to_string(),
                ),
            ],
        ),
        (
            "logging",
            vec![
                ("LOG_BUFFER_SIZE", "usize", profile.logging.log_buffer_size.to_string()),
                (
                    "MAX_LOG_MESSAGE_LENGTH",
                    "usize",
                    profile.logging.max_log_message_length.to_string(),
                ),
                (
                    "SECURITY_MIN_LOG_LEVEL",
                    "u8",
                    profile.logging.security_min_log_level.to_string(),
                ),
            ],
        ),
    ];

    out.push_str("pub mod compile_time {\n");
    for (module, constants) in modules {
        let _ = writeln!(out, "    pub mod {} {{", module);
        for (constant, ty, value) in constants {
            let _ = writeln!(out, "        pub const {}: {} = {};", constant, ty, value);
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");

    out
}
