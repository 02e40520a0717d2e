//! Build script for puffer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates train.toml at compile time
//! - Bakes the validated tuning into `$OUT_DIR/tuning.rs`

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use puffer_core::config::{DelayCurve, InterludeKind, Tuning};

fn main() {
    setup_linker();
    let tuning = load_tuning();
    generate_tuning(&tuning);
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

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate train.toml
fn load_tuning() -> Tuning {
    println!("cargo:rerun-if-changed=train.toml");

    let config_path = Path::new("train.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: train.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a train.toml tuning file.                 ║\n\
            ║  Please create one in the puffer-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read train.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let tuning: Tuning = match toml::from_str(&content) {
        Ok(tuning) => tuning,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid tuning in train.toml                             ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = tuning.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: train.toml failed validation                             ║\n\
            ║                                                                  ║\n\
            ║  {:<64} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e)
        );
    }

    println!(
        "cargo:warning=train.toml validated: started after {} passes, stopped after {}",
        tuning.started_count(),
        tuning.stopped_count()
    );

    tuning
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

fn curve_literal(curve: &DelayCurve) -> String {
    format!(
        "DelayCurve {{ max: {}, min: {}, inc: {} }}",
        curve.max, curve.min, curve.inc
    )
}

/// Write the tuning as a Rust constructor the firmware includes
fn generate_tuning(tuning: &Tuning) {
    let mut interludes = String::new();
    for window in &tuning.interludes {
        let ctor = match window.kind {
            InterludeKind::Ring => "ring",
            InterludeKind::Whistle => "whistle",
        };
        writeln!(
            interludes,
            "            Interlude::{}({}, {}),",
            ctor, window.start, window.stop
        )
        .unwrap();
    }

    let code = format!(
        "// Generated from train.toml by build.rs\n\
         \n\
         use puffer_core::config::{{DelayCurve, Interlude, Tuning}};\n\
         \n\
         /// Tuning validated at build time\n\
         pub fn embedded_tuning() -> Tuning {{\n\
         \x20   Tuning {{\n\
         \x20       motor_start_duty: {},\n\
         \x20       motor_max_duty: {},\n\
         \x20       motor_start_period: {},\n\
         \x20       motor_stop_period: {},\n\
         \x20       starting: {},\n\
         \x20       stopping: {},\n\
         \x20       sensor_window_ticks: {},\n\
         \x20       tick_rate_hz: {},\n\
         \x20       settle_ms: {},\n\
         \x20       idle_grace_ms: {},\n\
         \x20       idle_poll_ms: {},\n\
         \x20       // Parsed into the same bounded Vec, so it always fits\n\
         \x20       interludes: [\n\
         {}\
         \x20       ]\n\
         \x20       .into_iter()\n\
         \x20       .collect(),\n\
         \x20   }}\n\
         }}\n",
        tuning.motor_start_duty,
        tuning.motor_max_duty,
        tuning.motor_start_period,
        tuning.motor_stop_period,
        curve_literal(&tuning.starting),
        curve_literal(&tuning.stopping),
        tuning.sensor_window_ticks,
        tuning.tick_rate_hz,
        tuning.settle_ms,
        tuning.idle_grace_ms,
        tuning.idle_poll_ms,
        interludes,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("tuning.rs"), code).unwrap();
}
