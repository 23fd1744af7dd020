use serde::{Deserialize, Serialize};

/// How a stat card formats its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Two decimals, prefixed with the currency symbol.
    Money { currency: String },
    Integer,
}

/// Visual status of an indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

impl IndicatorStatus {
    /// Status implied by the sign of a period-over-period change.
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            IndicatorStatus::Good
        } else if change_percent < 0.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Neutral
        }
    }
}

/// One headline figure of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    pub value: f64,
    /// Change relative to the previous month, as a percentage.
    pub change_percent: f64,
}

impl Indicator {
    pub fn status(&self) -> IndicatorStatus {
        IndicatorStatus::from_change(self.change_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_change_sign() {
        assert_eq!(IndicatorStatus::from_change(20.1), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_change(-2.1), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::from_change(0.0), IndicatorStatus::Neutral);
    }
}
