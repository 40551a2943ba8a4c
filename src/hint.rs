use rand::seq::SliceRandom;
use thiserror::Error;

/// Shown whenever a provider fails; advisory text never gates progression.
pub const FALLBACK_HINT: &str = "Sorry, no hint right now. Trust your eyes and try again!";

#[derive(Debug, Error)]
pub enum HintError {
    #[error("hint provider unavailable: {0}")]
    Unavailable(String),
}

/// Best-effort hint source for the mascot speech bubble. Implementations may
/// fail; the caller degrades to `FALLBACK_HINT`.
pub trait HintProvider {
    fn hint(&self, prompt: &str, context: &str) -> Result<String, HintError>;
}

/// Offline provider: nudges keyed on what the prompt asks about, with a
/// random encouragement so repeated requests do not read identically.
pub struct MascotHints;

const ENCOURAGEMENTS: [&str; 4] = [
    "You are closer than you think.",
    "Take it one cell at a time.",
    "Look again, slowly.",
    "Small steps add up.",
];

impl MascotHints {
    fn nudge_for(prompt: &str) -> &'static str {
        let lower = prompt.to_lowercase();
        if lower.contains("perimeter") {
            "Walk around the edge of the shape and add up every side."
        } else if lower.contains("area") {
            "Count the unit squares the shape covers inside its border."
        } else if lower.contains("mirror") || lower.contains("reflect") || lower.contains("symmet")
        {
            "Each cell jumps to the matching spot on the other side of the line."
        } else if lower.contains("turn") || lower.contains("rotate") || lower.contains("angle") {
            "A quarter turn is 90 degrees. How many quarter turns do you need?"
        } else if lower.contains("slide") || lower.contains("move") {
            "Sliding changes position, never the shape itself."
        } else {
            "Re-read the question and look for the quantity it asks about."
        }
    }
}

impl HintProvider for MascotHints {
    fn hint(&self, prompt: &str, _context: &str) -> Result<String, HintError> {
        let mut rng = rand::thread_rng();
        let cheer = ENCOURAGEMENTS
            .choose(&mut rng)
            .ok_or_else(|| HintError::Unavailable("no encouragement available".to_string()))?;
        Ok(format!("{} {}", Self::nudge_for(prompt), cheer))
    }
}

/// Degrade a provider failure into visible, recoverable text.
pub fn hint_or_fallback(provider: &dyn HintProvider, prompt: &str, context: &str) -> String {
    provider
        .hint(prompt, context)
        .unwrap_or_else(|_| FALLBACK_HINT.to_string())
}
