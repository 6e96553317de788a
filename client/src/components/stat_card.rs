//! Headline number cards for the overview and statistics pages.

use leptos::prelude::*;

use crate::services::overview::Trend;

/// Overview card with a week-over-week trend line.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] description: String,
    icon: &'static str,
    trend: Trend,
    trend_value: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__head">
                <h3 class="stat-card__title">{title}</h3>
                <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <p class="stat-card__value">{value}</p>
            <p class="stat-card__description">{description}</p>
            <Show when=move || !trend_value.is_empty()>
                <p class=trend.css_class()>{format!("{} {trend_value} from last week", trend.arrow())}</p>
            </Show>
        </div>
    }
}

/// Accent colour of a [`SummaryCard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Highlight,
}

impl Accent {
    fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "card summary-card summary-card--primary",
            Self::Secondary => "card summary-card summary-card--secondary",
            Self::Highlight => "card summary-card summary-card--accent",
        }
    }
}

/// Plain statistic card with a coloured edge.
#[component]
pub fn SummaryCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] description: String,
    accent: Accent,
) -> impl IntoView {
    view! {
        <div class=accent.css_class()>
            <h3 class="summary-card__title">{title}</h3>
            <p class="summary-card__value">{value}</p>
            <p class="summary-card__description">{description}</p>
        </div>
    }
}
