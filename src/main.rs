//! Thin inference shell: load artifacts once, read one customer profile as
//! JSON (argv path or stdin), print the risk assessment as JSON on stdout.
//! Artifact failures are fatal; a prediction failure is reported for that
//! request without discarding the loaded state.

use churn_risk::logging::LogEvent;
use churn_risk::{ChurnConfig, RawProfile, RiskEngine, StructuredLogger};
use chrono::Utc;
use serde::Serialize;
use std::io::Read;
use tracing::error;

#[derive(Serialize)]
struct AssessmentOutput {
    probability: f32,
    level: churn_risk::RiskLevel,
    recommendation: String,
    assessed_at: String,
}

fn read_profile() -> Result<RawProfile, Box<dyn std::error::Error + Send + Sync>> {
    let data = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CHURN_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ChurnConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    // Fatal: refuse to serve anything until both artifacts load.
    let artifacts = match churn_risk::artifacts::load_shared(&config) {
        Ok(a) => a,
        Err(e) => {
            error!(error = %e, "artifact load failed, not serving");
            return Err(e.into());
        }
    };

    let engine = RiskEngine::new(config.risk.clone());
    let profile = read_profile()?;

    match engine.assess_profile(&profile, &artifacts) {
        Ok(assessment) => {
            // One ndjson audit line per assessment, independent of the
            // tracing filter level.
            let audit = LogEvent {
                ts: Utc::now().to_rfc3339(),
                level: "info",
                message: "churn risk assessed",
                probability: Some(assessment.probability),
                risk_level: Some(assessment.level.as_str()),
                recommendation: Some(&assessment.recommendation),
                error: None,
            };
            StructuredLogger::emit_json(&audit, &mut std::io::stderr());
            let out = AssessmentOutput {
                probability: assessment.probability,
                level: assessment.level,
                recommendation: assessment.recommendation,
                assessed_at: Utc::now().to_rfc3339(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
        Err(e) => {
            // Recoverable in a serving host; for a one-shot CLI call it is
            // still a nonzero exit, but the loaded artifacts stay valid.
            error!(error = %e, "assessment failed for this request");
            Err(e.into())
        }
    }
}
