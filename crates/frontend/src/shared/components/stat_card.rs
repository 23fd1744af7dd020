use crate::shared::components::table::number_format::{format_change, format_money, format_number_int};
use crate::shared::icons::icon;
use contracts::shared::indicators::{Indicator, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } if currency == "$" => format_money(value),
        ValueFormat::Money { currency } => {
            format!("{} {}", format_number_int(value.round()), currency)
        }
        ValueFormat::Integer => format_number_int(value),
    }
}

/// Dashboard headline card: label, icon, value and month-over-month trend.
#[component]
pub fn StatCard(indicator: Indicator) -> impl IntoView {
    let status = indicator.status();
    let (trend_icon, change_class) = match status {
        IndicatorStatus::Good => ("trending-up", "stat-card__change stat-card__change--up"),
        IndicatorStatus::Bad => ("trending-down", "stat-card__change stat-card__change--down"),
        IndicatorStatus::Neutral => ("", "stat-card__change stat-card__change--flat"),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__top">
                <span class="stat-card__label">{indicator.label.clone()}</span>
                <span class="stat-card__icon">{icon(&indicator.icon)}</span>
            </div>
            <div class="stat-card__value">{format_value(indicator.value, &indicator.format)}</div>
            <div class="stat-card__subtitle">
                <span class=change_class>
                    {icon(trend_icon)}
                    {format_change(indicator.change_percent)}
                </span>
                " depuis le mois dernier"
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let dollars = ValueFormat::Money { currency: "$".into() };
        assert_eq!(format_value(45231.89, &dollars), "$45,231.89");
        assert_eq!(format_value(2350.0, &ValueFormat::Integer), "2,350");
        let euros = ValueFormat::Money { currency: "€".into() };
        assert_eq!(format_value(1234.4, &euros), "1,234 €");
    }
}
