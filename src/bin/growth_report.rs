// Growth Report CLI
//
// Purpose: Run a growth check, weight check or height prediction from a JSON
// request and print the result as pretty JSON.
// Usage: cargo run --bin growth_report -- request.json
//        cat request.json | cargo run --bin growth_report
//        cargo run --bin growth_report -- --weight request.json

use anyhow::{bail, Context, Result};
use growth_scorer_rust::validation::{
    GrowthCheckRequest, HeightPredictionRequest, WeightCheckRequest,
};
use growth_scorer_rust::{assess_growth, check_weight, predict_height, AppConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "growth_report", about = "Growth check, weight check or height prediction from a JSON request")]
struct Cli {
    /// Treat the request as a weight-only check
    #[arg(long)]
    weight: bool,

    /// Request file; omit or pass "-" to read stdin
    request: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_scorer_rust=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let weight_only = cli.weight;

    let raw = match cli.request.filter(|path| path.as_os_str() != "-") {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Request is not valid JSON")?;
    let fallback = AppConfig::from_env().gender_fallback;

    // Height requests are recognised by childAgeMonths
    let output = if value.get("childAgeMonths").is_some() {
        let request: HeightPredictionRequest = serde_json::from_value(value)?;
        let input = request.validate(fallback)?;
        serde_json::to_value(predict_height(&input))?
    } else if weight_only {
        let request: WeightCheckRequest = serde_json::from_value(value)?;
        let input = request.validate(fallback)?;
        serde_json::to_value(check_weight(input.age_months, input.gender, input.weight_kg))?
    } else if value.get("age").is_some() {
        let request: GrowthCheckRequest = serde_json::from_value(value)?;
        let input = request.validate(fallback)?;
        serde_json::to_value(assess_growth(input.age_months, input.gender, &input.measurements)?)?
    } else {
        bail!("Unrecognised request: expected 'age' or 'childAgeMonths'");
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_flag_and_path() {
        let cli = Cli::try_parse_from(["growth_report", "--weight", "req.json"]).unwrap();
        assert!(cli.weight);
        assert_eq!(cli.request, Some(PathBuf::from("req.json")));

        let cli = Cli::try_parse_from(["growth_report"]).unwrap();
        assert!(!cli.weight);
        assert!(cli.request.is_none());
    }

    #[test]
    fn test_unknown_flags_are_rejected_not_read_as_paths() {
        assert!(Cli::try_parse_from(["growth_report", "--wieght", "req.json"]).is_err());

        let err = Cli::try_parse_from(["growth_report", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = Cli::try_parse_from(["growth_report", "-"]).unwrap();
        assert_eq!(cli.request, Some(PathBuf::from("-")));
    }
}
