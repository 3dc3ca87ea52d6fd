use anyhow::{bail, Context, Result};

use crate::scoring::aggregator::MergePolicy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub seed_sample_data: bool,
    pub merge_policy: MergePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let seed_sample_data = lookup("SEED_SAMPLE_DATA")
            .map(|v| parse_bool(&v).context("SEED_SAMPLE_DATA must be true or false"))
            .transpose()?
            .unwrap_or(true);

        let merge_policy = match lookup("SCORE_MERGE_POLICY").as_deref() {
            None | Some("overwrite") => MergePolicy::Overwrite,
            Some("weighted") => {
                let resume = parse_weight(lookup("RESUME_WEIGHT"), "RESUME_WEIGHT", 0.3)?;
                let evaluation =
                    parse_weight(lookup("EVALUATION_WEIGHT"), "EVALUATION_WEIGHT", 0.7)?;
                if resume + evaluation <= 0.0 {
                    bail!("RESUME_WEIGHT + EVALUATION_WEIGHT must be positive");
                }
                MergePolicy::Weighted { resume, evaluation }
            }
            Some(other) => bail!("SCORE_MERGE_POLICY must be 'overwrite' or 'weighted', got '{other}'"),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            seed_sample_data,
            merge_policy,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}

fn parse_weight(value: Option<String>, key: &str, default: f64) -> Result<f64> {
    let Some(value) = value else {
        return Ok(default);
    };
    let weight: f64 = value
        .parse()
        .with_context(|| format!("{key} must be a number"))?;
    if !weight.is_finite() || weight < 0.0 {
        bail!("{key} must be a finite, non-negative number");
    }
    Ok(weight)
}
