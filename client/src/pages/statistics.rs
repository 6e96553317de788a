//! Statistics report: user and date-range filters over summary cards and
//! four charts.

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

use chrono::{Days, NaiveDate, Utc};
use leptos::prelude::*;

use crate::components::charts::{BarChart, ChartEmpty, LineChart, PieChart};
use crate::components::loader::Loader;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::{Accent, SummaryCard};
use crate::components::toast_host::{notify, use_toasts};
use crate::services::statistics::{DEFAULT_RANGE_DAYS, RECOMMENDED_MAX_GRAMS, StatisticsSnapshot, UserFilter};
use crate::services::users::{UserAccount, UserService};
use crate::state::toast::ToastKind;
use crate::util::chart::{ChartPoint, LineSeries, palette_color};
use crate::util::format::{date_input_value, format_axis_date, format_grams, format_medium_date, parse_date_input};

const RECOMMENDED_COLOR: &str = "#ef4444";

/// Inclusive report window picked on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// The last [`DEFAULT_RANGE_DAYS`] days up to `today`.
    pub fn ending(today: NaiveDate) -> Self {
        let from = today.checked_sub_days(Days::new(DEFAULT_RANGE_DAYS)).unwrap_or(today);
        Self { from, to: today }
    }

    /// Apply an edited start date, never later than the end date; blank
    /// input keeps the current one.
    #[must_use]
    pub fn with_from(self, raw: &str) -> Self {
        parse_date_input(raw).map_or(self, |from| Self { from: from.min(self.to), ..self })
    }

    /// Apply an edited end date, clamped to `from..=today`.
    #[must_use]
    pub fn with_to(self, raw: &str, today: NaiveDate) -> Self {
        parse_date_input(raw).map_or(self, |to| Self { to: to.min(today).max(self.from), ..self })
    }
}

/// Chart series for the daily line chart: intake plus the flat recommended ceiling.
pub fn daily_series(snapshot: &StatisticsSnapshot) -> (Vec<String>, Vec<LineSeries>) {
    let labels = snapshot.daily_consumption.iter().map(|d| format_axis_date(d.date)).collect();
    let values: Vec<f64> = snapshot.daily_consumption.iter().map(|d| d.sugar_amount).collect();
    let ceiling = vec![RECOMMENDED_MAX_GRAMS; values.len()];
    let series = vec![
        LineSeries { name: "Sugar (g)".to_owned(), values, color: palette_color(0), filled: true, dashed: false },
        LineSeries {
            name: format!("Recommended Max ({RECOMMENDED_MAX_GRAMS}g)"),
            values: ceiling,
            color: RECOMMENDED_COLOR,
            filled: false,
            dashed: true,
        },
    ];
    (labels, series)
}

fn render_report(snapshot: StatisticsSnapshot) -> impl IntoView {
    let (daily_labels, daily) = daily_series(&snapshot);
    let has_daily = !snapshot.daily_consumption.is_empty();

    let weekly: Vec<ChartPoint> =
        snapshot.weekly_consumption.iter().map(|w| ChartPoint::new(w.week.clone(), w.sugar_amount)).collect();
    let sources: Vec<(String, f64)> = snapshot.sugar_sources.iter().map(|s| (s.source.clone(), s.percentage)).collect();
    let (trend_labels, trend_values): (Vec<String>, Vec<f64>) =
        snapshot.monthly_trend.iter().map(|m| (m.month.clone(), m.average_daily_consumption)).unzip();
    let trend = vec![LineSeries {
        name: "Average Daily Sugar (g)".to_owned(),
        values: trend_values,
        color: palette_color(2),
        filled: true,
        dashed: false,
    }];

    view! {
        <div class="card-grid card-grid--three">
            <SummaryCard
                title="Average Daily Consumption"
                value=format_grams(snapshot.daily_average)
                description="of sugar per day"
                accent=Accent::Primary
            />
            <SummaryCard
                title="Total Consumption"
                value=format_grams(snapshot.total_consumption)
                description="during selected period"
                accent=Accent::Secondary
            />
            <SummaryCard
                title="Highest Day"
                value=format_grams(snapshot.max_daily_consumption)
                description=format!("on {}", format_medium_date(snapshot.max_consumption_date))
                accent=Accent::Highlight
            />
        </div>

        <section class="card panel">
            <h2 class="panel__title">"Daily Sugar Consumption"</h2>
            {if has_daily {
                view! { <LineChart labels=daily_labels series=daily legend=true/> }.into_any()
            } else {
                view! { <ChartEmpty/> }.into_any()
            }}
        </section>

        <div class="panel-grid">
            <section class="card panel">
                <h2 class="panel__title">"Weekly Consumption"</h2>
                {if weekly.is_empty() {
                    view! { <ChartEmpty/> }.into_any()
                } else {
                    view! { <BarChart points=weekly/> }.into_any()
                }}
            </section>
            <section class="card panel">
                <h2 class="panel__title">"Sugar Sources"</h2>
                {if sources.is_empty() {
                    view! { <ChartEmpty/> }.into_any()
                } else {
                    view! { <PieChart slices=sources donut=true/> }.into_any()
                }}
            </section>
        </div>

        <section class="card panel">
            <h2 class="panel__title">"Consumption Trends"</h2>
            {if trend_labels.is_empty() {
                view! { <ChartEmpty/> }.into_any()
            } else {
                view! { <LineChart labels=trend_labels series=trend/> }.into_any()
            }}
        </section>
    }
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let toasts = use_toasts();
    let today = Utc::now().date_naive();

    let users = RwSignal::new(Vec::<UserAccount>::new());
    let user_filter = RwSignal::new(UserFilter::All);
    let range = RwSignal::new(DateRange::ending(today));
    let report = RwSignal::new(None::<StatisticsSnapshot>);
    let loading = RwSignal::new(true);

    Effect::new({
        let service = expect_context::<UserService>();
        move || {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                users.set(service.fetch_users().await);
            });
        }
    });

    // Refetch whenever the user or window changes.
    Effect::new(move || {
        let filter = user_filter.get();
        let DateRange { from, to } = range.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::services::statistics::fetch_statistics(&filter, from, to).await;
            if range.get_untracked() != (DateRange { from, to }) || user_filter.get_untracked() != filter {
                return;
            }
            match result {
                Ok(snapshot) => report.set(Some(snapshot)),
                Err(e) => {
                    log::warn!("statistics fetch failed: {e}");
                    report.set(None);
                    notify(toasts, ToastKind::Error, "Failed to load statistics data");
                }
            }
            loading.set(false);
        });
    });

    view! {
        <PageHeader
            title="Sugar Consumption Statistics"
            description="View detailed statistics and trends of sugar consumption"
        />

        <section class="card filters">
            <div class="filters__grid">
                <label class="field">
                    <span class="field__label">"Select User"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| user_filter.set(UserFilter::from_select_value(&event_target_value(&ev)))
                    >
                        <option value="all" selected=move || user_filter.with(|f| *f == UserFilter::All)>
                            "All Users"
                        </option>
                        <For each=move || users.get() key=|u| u.id.clone() let:user>
                            {
                                let id = user.id.clone();
                                view! {
                                    <option
                                        value=user.id
                                        selected=move || user_filter.with(|f| f.select_value() == id)
                                    >
                                        {user.username}
                                    </option>
                                }
                            }
                        </For>
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"From Date"</span>
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || date_input_value(range.get().from)
                        prop:max=move || date_input_value(range.get().to)
                        on:change=move |ev| range.update(|r| *r = r.with_from(&event_target_value(&ev)))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"To Date"</span>
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || date_input_value(range.get().to)
                        prop:min=move || date_input_value(range.get().from)
                        prop:max=date_input_value(today)
                        on:change=move |ev| range.update(|r| *r = r.with_to(&event_target_value(&ev), today))
                    />
                </label>
            </div>
        </section>

        {move || {
            if loading.get() {
                view! { <div class="card panel"><Loader/></div> }.into_any()
            } else {
                match report.get() {
                    Some(snapshot) => render_report(snapshot).into_any(),
                    None => view! { <div class="card panel empty-state">"No statistics data available"</div> }
                        .into_any(),
                }
            }
        }}
    }
}
