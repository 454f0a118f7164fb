//! Build script for strobe-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the strobe-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_required_sections(&config);
    validate_panel(&config);
    validate_ui(&config);

    println!("cargo:warning=panel.toml validated successfully");
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

/// Panic with a boxed list of errors if there are any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    for section in ["panel", "ui"] {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }

    if let Some(table) = config.as_table() {
        for key in table.keys() {
            if key != "panel" && key != "ui" {
                errors.push(format!("Unknown top-level key '{}'", key));
            }
        }
    }

    report("Missing required sections in panel.toml", &errors);
}

/// Check an optional integer key lies in `min..=max`
fn check_range(
    errors: &mut Vec<String>,
    section: &str,
    table: &toml::value::Table,
    key: &str,
    min: i64,
    max: i64,
) {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max))
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
        None => {}
    }
}

/// Validate the [panel] section
fn validate_panel(config: &toml::Value) {
    let panel = match config.get("panel") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    for key in panel.keys() {
        if ![
            "width",
            "height",
            "rotation",
            "reset_hold_ms",
            "swreset_delay_ms",
        ]
        .contains(&key.as_str())
        {
            errors.push(format!("[panel] unknown key '{}'", key));
        }
    }

    check_range(&mut errors, "panel", panel, "width", 1, 1024);
    check_range(&mut errors, "panel", panel, "height", 1, 1024);
    check_range(&mut errors, "panel", panel, "reset_hold_ms", 0, 10_000);
    check_range(&mut errors, "panel", panel, "swreset_delay_ms", 0, 10_000);

    if let Some(rotation) = panel.get("rotation") {
        match rotation.as_str() {
            Some("swap_flip") | Some("identity") => {}
            _ => errors.push("[panel] rotation must be 'swap_flip' or 'identity'".to_string()),
        }
    }

    report("Invalid panel configuration", &errors);
}

/// Validate the [ui] section
fn validate_ui(config: &toml::Value) {
    let ui = match config.get("ui") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    for key in ui.keys() {
        if ![
            "origin_x",
            "origin_y",
            "row_spacing",
            "foreground",
            "background",
            "action_color",
            "submenu_color",
            "selection_marker",
        ]
        .contains(&key.as_str())
        {
            errors.push(format!("[ui] unknown key '{}'", key));
        }
    }

    check_range(&mut errors, "ui", ui, "origin_x", 0, 1023);
    check_range(&mut errors, "ui", ui, "origin_y", 0, 1023);
    check_range(&mut errors, "ui", ui, "row_spacing", 8, 255);
    for color in ["foreground", "background", "action_color", "submenu_color"] {
        check_range(&mut errors, "ui", ui, color, 0, 0xFFFF);
    }

    if let Some(marker) = ui.get("selection_marker") {
        match marker.as_str() {
            Some(s) if s.chars().count() == 1 => {}
            _ => errors.push("[ui] selection_marker must be a single character".to_string()),
        }
    }

    report("Invalid ui configuration", &errors);
}
