//! Parsing and ranking of the engine's survivor report.

use serde::Serialize;

use crate::core::classifier::{KeywordClassifier, SurvivorClassifier};

/// Marker prefix on report lines that describe a surviving mutant.
const SURVIVED_MARKER: &str = "SURVIVED:";
/// Phrase (matched case-insensitively) meaning there is nothing to rank.
const NO_SURVIVORS_PHRASE: &str = "no surviving mutants";

/// One ranked survivor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritizedSurvivor {
    /// Text after the first colon of the report line, trimmed. Identifiers
    /// containing further colons are kept verbatim.
    pub mutant_id: String,
    /// Higher means more material.
    pub score: u32,
    pub reason: String,
    /// The original report line.
    pub raw: String,
}

/// Ranked survivors plus a human-readable status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prioritization {
    pub prioritized: Vec<PrioritizedSurvivor>,
    pub message: String,
}

/// Rank the survivors in `report` with the default keyword heuristic.
pub fn prioritize(report: &str) -> Prioritization {
    prioritize_with(report, &KeywordClassifier)
}

/// Rank the survivors in `report` using `classifier` for scoring.
///
/// A blank report, or one containing "no surviving mutants" (any case), is
/// a designated empty success, not an error. Lines that are blank or do
/// not start with `SURVIVED:` are skipped. The sort is stable: entries
/// with equal scores keep report order.
pub fn prioritize_with(report: &str, classifier: &impl SurvivorClassifier) -> Prioritization {
    if report.trim().is_empty() || report.to_lowercase().contains(NO_SURVIVORS_PHRASE) {
        return Prioritization {
            prioritized: Vec::new(),
            message: "No surviving mutants found.".to_string(),
        };
    }

    let mut prioritized = Vec::new();
    for line in report.lines() {
        if line.trim().is_empty() || !line.starts_with(SURVIVED_MARKER) {
            continue;
        }
        let mutant_id = line
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default()
            .to_string();
        let classification = classifier.classify(line);
        prioritized.push(PrioritizedSurvivor {
            mutant_id,
            score: classification.score,
            reason: classification.reason.to_string(),
            raw: line.to_string(),
        });
    }

    prioritized.sort_by(|a, b| b.score.cmp(&a.score));
    Prioritization {
        prioritized,
        message: "Survivors prioritized by likely materiality.".to_string(),
    }
}
