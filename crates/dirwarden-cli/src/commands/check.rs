use std::path::{Path, PathBuf};

use anyhow::Result;

use policy_engine::{Classification, Classifier};

use super::config::load_effective;

pub struct CheckInputs {
    pub config_path: Option<PathBuf>,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub force: bool,
}

pub fn execute(inputs: CheckInputs) -> Result<()> {
    let config = load_effective(inputs.config_path)?;
    let classifier = Classifier::from_config(&config);
    let target = inputs.path.unwrap_or_else(|| PathBuf::from("."));

    let allow_override = inputs.force && config.guard.allow_override;
    if inputs.force && !allow_override {
        tracing::warn!("--force ignored: overrides are disabled in config");
    }

    let classification = classifier.classify(&target)?;
    println!("{}", render(&target, &classification, inputs.json)?);

    classifier.guard(&target, allow_override)?;
    Ok(())
}

fn render(target: &Path, classification: &Classification, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(classification)?);
    }
    let output = match &classification.matched_path {
        Some(matched) if classification.is_dangerous => {
            format!("Dangerous: {} ({})", classification.reason, matched.display())
        }
        _ => format!("Safe: {}", target.display()),
    };
    Ok(output)
}
