use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::workflow::WizardOption;

/// Minimum Jaro-Winkler similarity for a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.8;

/// Resolve free text to an option id.
///
/// Tries an exact id or label match first (case-insensitive), then the
/// closest id above the similarity threshold.
pub fn resolve_option(input: &str, options: &[WizardOption], kind: &str) -> Result<&'static str> {
    let needle = input.trim().to_lowercase();

    if let Some(option) = options
        .iter()
        .find(|o| o.id == needle || o.label.to_lowercase() == needle)
    {
        return Ok(option.id);
    }

    let best = options
        .iter()
        .map(|o| (o, jaro_winkler(o.id, &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((option, _)) => Ok(option.id),
        None => {
            let known: Vec<&str> = options.iter().map(|o| o.id).collect();
            Err(PlanError::InvalidInput(format!(
                "unknown {} '{}' (expected one of: {})",
                kind,
                input,
                known.join(", ")
            )))
        }
    }
}
