//! # Takeoff CLI
//!
//! Thin terminal consumer for the takeoff engine: load a scaffold
//! configuration JSON, run the calculation and validation, print the bill of
//! materials and transport advice. With no arguments a built-in demo
//! configuration runs, which doubles as a smoke test of the whole pipeline.
//!
//! ```text
//! takeoff_cli [CONFIG.json] [--json] [--csv [PATH]]
//! ```

use std::env;
use std::fs;
use std::process;

use chrono::Local;
use takeoff_core::calculations::CalculationResult;
use takeoff_core::export;
use takeoff_core::validation::{ValidationResult, Verdict};
use takeoff_core::{calculate, validate, CalcError, ScaffoldConfig};

struct CliArgs {
    config_path: Option<String>,
    json: bool,
    csv: Option<Option<String>>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        config_path: None,
        json: false,
        csv: None,
    };

    let mut args = env::args().skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--csv" => {
                let path = match args.peek() {
                    Some(next) if !next.starts_with('-') => args.next(),
                    _ => None,
                };
                parsed.csv = Some(path);
            }
            "--help" | "-h" => {
                return Err("usage: takeoff_cli [CONFIG.json] [--json] [--csv [PATH]]".to_string())
            }
            other if !other.starts_with('-') && parsed.config_path.is_none() => {
                parsed.config_path = Some(other.to_string());
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

/// Built-in demo: 10 × 1800 mm spans, 3 levels, two 900 mm columns.
fn demo_config() -> ScaffoldConfig {
    ScaffoldConfig::from_json_str(
        r#"{
            "span1800": 10,
            "levelCount": 3,
            "frameCols": { "900": 2 },
            "tsumaCount": 2
        }"#,
    )
    .expect("demo config is well-formed")
}

fn load_config(path: &str) -> Result<ScaffoldConfig, CalcError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    ScaffoldConfig::from_json_str(&json)
}

fn print_validation(validation: &ValidationResult) {
    let mut notes = Vec::new();
    match validation.custom_height_status {
        Verdict::Under => notes.push(format!(
            "custom height rows are short by {} level(s)",
            validation.remaining_levels
        )),
        Verdict::Over => notes.push(format!(
            "custom height rows exceed the level count by {} level(s)",
            -validation.remaining_levels
        )),
        Verdict::Ok => {}
    }
    match validation.jack_base_status {
        Verdict::Under => notes.push(format!(
            "jack bases short: {} declared, {} needed",
            validation.jack_base_provided, validation.jack_base_needed
        )),
        Verdict::Over => notes.push(format!(
            "jack bases over-supplied: {} declared, {} needed",
            validation.jack_base_provided, validation.jack_base_needed
        )),
        Verdict::Ok => {}
    }

    if notes.is_empty() {
        println!("Validation: OK");
    } else {
        println!("Validation:");
        for note in notes {
            println!("  [WARN] {}", note);
        }
    }
}

fn print_bill(result: &CalculationResult) {
    println!("═══════════════════════════════════════════════════════");
    println!("  BILL OF MATERIALS");
    println!("═══════════════════════════════════════════════════════");
    println!("{:<28} {:>8} {:>9} {:>10}", "Material", "Qty", "Unit kg", "Total kg");
    for item in &result.materials {
        println!(
            "{:<28} {:>8} {:>9.2} {:>10.2}",
            item.name, item.quantity, item.unit_weight, item.total_weight
        );
    }
    println!("───────────────────────────────────────────────────────");
    println!("{:<28} {:>8} {:>9} {:>10.2}", "Total weight", "", "", result.total_weight);
    println!();
    println!("Spans:        {} ({} mm run)", result.span_total, result.span_mm_total);
    println!("Stack height: {} mm", result.total_height);
    println!("Jack bases:   {}", result.jack_base_count);
    println!();
    println!("Transport (crane truck): {}", result.transport_unic);
    println!("Transport (flatbed):     {}", result.transport_flatbed);
    if result.split_options.is_empty() {
        println!("Split plans:  none needed");
    } else {
        println!("Split plans:");
        for plan in &result.split_options {
            println!("  - {}", plan);
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    println!("Takeoff CLI - Frame Scaffold Quantity Calculator");
    println!("================================================");
    println!();

    let config = match &args.config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
                process::exit(1);
            }
        },
        None => {
            println!("No configuration given. Running built-in demo...");
            println!();
            demo_config()
        }
    };

    let result = calculate(&config);
    let validation = validate(&config);

    print_bill(&result);
    println!();
    print_validation(&validation);

    if args.json {
        println!();
        println!("JSON Output (for API use):");
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
        if let Ok(json) = serde_json::to_string_pretty(&validation) {
            println!("{}", json);
        }
    }

    if let Some(csv_path) = args.csv {
        let path = csv_path
            .unwrap_or_else(|| export::csv_filename(Local::now().date_naive()));
        let csv = export::render_csv(&result, &config.memo);
        match fs::write(&path, csv) {
            Ok(()) => println!("CSV written to {}", path),
            Err(e) => {
                eprintln!("Error: {}", CalcError::file_error("write", &path, e.to_string()));
                process::exit(1);
            }
        }
    }
}
