//! RxCompass Core - Analysis Driver
//!
//! Runs the region analysis over a saved prediction-response JSON file
//! and prints the per-patient reports. Stands in for the web front-end
//! during development; the real renderer consumes the same reports.

use rxcompass_core::{api, constants};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| "Usage: rxcompass-core <prediction-response.json>".to_string())?;

    let body = std::fs::read_to_string(&path).map_err(|e| format!("File read error: {}", e))?;

    let response = api::parse_prediction_response(&body)?;
    log::info!("Parsed {} patient record(s)", response.total_patients);

    let reports = api::analyze_response(&response);
    for report in &reports {
        log::info!(
            "Patient {}: {} ({:.1}% confidence), {} region(s) highlighted",
            report.patient_id,
            report.prediction,
            report.confidence,
            report
                .regions
                .iter()
                .filter(|v| v.severity > rxcompass_core::Severity::None)
                .count()
        );
    }

    let json =
        serde_json::to_string_pretty(&reports).map_err(|e| format!("JSON error: {}", e))?;
    println!("{}", json);

    Ok(())
}
