use std::process::ExitCode;

use squadgen::config::GeneratorConfig;
use squadgen::{batch, logger};

// No flags on purpose: sample sizes and the output path are fixed
// configuration, read from squadgen.toml / SQUADGEN_CONFIG.
fn main() -> ExitCode {
    let _ = logger::configure_from_env();
    let config = match GeneratorConfig::load(None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {e}");
            return ExitCode::from(2);
        }
    };
    match batch::run(&config) {
        Ok(report) => {
            let json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into());
            println!("{json}");
            if report.all_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
