//! Heuristic classification of survivor report lines.

/// Outcome of classifying one survivor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Higher means more material.
    pub score: u32,
    pub reason: &'static str,
}

/// Scoring seam for survivor lines.
///
/// Ranking in [`crate::core::prioritizer`] only depends on this trait, so
/// the signal can be swapped (e.g. for one that inspects the actual code
/// diff) without touching the sort.
pub trait SurvivorClassifier {
    fn classify(&self, line: &str) -> Classification;
}

/// Keywords that mark a mutation as touching logging or debug output only.
const NOISE_KEYWORDS: [&str; 5] = ["log", "debug", "print", "logger", "logging"];

/// Classifies by keyword presence in the report line text.
///
/// Only the surface text of the line is inspected, never the mutated code.
/// Keywords match whole word tokens (runs of alphanumerics), so an
/// identifier like `core_logic` does not trip on the `log` inside `logic`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl SurvivorClassifier for KeywordClassifier {
    fn classify(&self, line: &str) -> Classification {
        let lowered = line.to_lowercase();
        let noisy = lowered
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| NOISE_KEYWORDS.contains(&token));
        if noisy {
            Classification {
                score: 0,
                reason: "Likely log/debug only, deprioritized.",
            }
        } else {
            Classification {
                score: 1,
                reason: "Potentially material logic, prioritize.",
            }
        }
    }
}
