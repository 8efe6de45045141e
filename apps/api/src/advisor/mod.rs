// Advisory layer: future-skill prediction, interview question generation,
// and the rule-based mentor. Everything here is deterministic template
// expansion over static tables — no model inference, no network calls.

pub mod handlers;
pub mod interview;
pub mod mentor;
pub mod progression;
