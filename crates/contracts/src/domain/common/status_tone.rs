use serde::{Deserialize, Serialize};

/// Colour family of a status badge.
///
/// The domain decides which tone a status gets; the UI maps the tone onto
/// its badge classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Info,
    Error,
    Neutral,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Info => "info",
            StatusTone::Error => "error",
            StatusTone::Neutral => "neutral",
        }
    }
}
