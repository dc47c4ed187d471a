//! Build script for chessclock-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Parses and validates clock.toml, embedding it as `CLOCK_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chessclock_core::config::ClockConfig;
use chessclock_core::Rgb;

fn main() {
    setup_linker();
    embed_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse clock.toml, validate it and generate `clock_config.rs`
fn embed_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a clock.toml configuration file.          ║\n\
            ║  Please create one in the chessclock-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Missing keys take their defaults through `#[serde(default)]`
    let config: ClockConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid clock.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid clock configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("║  • {:<62} ║", e)
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("clock_config.rs"), render_config(&config)).unwrap();

    println!(
        "cargo:warning=clock.toml validated: {}s per player, {}s steps",
        config.starting_seconds, config.step_seconds
    );
}

/// Rust source for the validated configuration
fn render_config(config: &ClockConfig) -> String {
    format!(
        "/// Clock configuration from clock.toml\n\
         pub const CLOCK_CONFIG: ClockConfig = ClockConfig {{\n    \
             starting_seconds: {},\n    \
             step_seconds: {},\n    \
             tick_period_ms: {},\n    \
             indicator_period_ms: {},\n    \
             palette: Palette {{\n        \
                 player_a: {},\n        \
                 player_b: {},\n    \
             }},\n\
         }};\n",
        config.starting_seconds,
        config.step_seconds,
        config.tick_period_ms,
        config.indicator_period_ms,
        render_rgb(config.palette.player_a),
        render_rgb(config.palette.player_b),
    )
}

fn render_rgb(color: Rgb) -> String {
    format!("Rgb::new({}, {}, {})", color.r, color.g, color.b)
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
