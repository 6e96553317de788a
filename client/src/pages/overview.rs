//! Landing page of the dashboard: headline cards and three charts.

use leptos::prelude::*;

use crate::components::charts::{BarChart, LineChart, PieChart};
use crate::components::loader::Loader;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::services::overview::OverviewSnapshot;
use crate::state::auth::AuthState;
use crate::util::chart::{LineSeries, palette_color};

const CARD_ICONS: [&str; 4] = ["⚡", "↗", "⛁", "⌖"];

fn render_overview(snapshot: OverviewSnapshot) -> impl IntoView {
    let cards = snapshot
        .stats
        .into_iter()
        .zip(CARD_ICONS)
        .map(|(stat, icon)| {
            view! {
                <StatCard
                    title=stat.title
                    value=stat.value
                    description=stat.description
                    icon=icon
                    trend=stat.trend
                    trend_value=stat.trend_value
                />
            }
        })
        .collect_view();

    let (labels, values): (Vec<String>, Vec<f64>) =
        snapshot.weekday_sugar.into_iter().map(|p| (p.label, p.value)).unzip();
    let weekly = vec![LineSeries {
        name: "Sugar (g)".to_owned(),
        values,
        color: palette_color(0),
        filled: false,
        dashed: false,
    }];
    let sources: Vec<(String, f64)> = snapshot.sources.into_iter().map(|s| (s.source, s.percentage)).collect();

    view! {
        <div class="card-grid card-grid--four">{cards}</div>
        <div class="panel-grid">
            <section class="card panel">
                <h2 class="panel__title">"Weekly Sugar Consumption"</h2>
                <LineChart labels=labels series=weekly/>
            </section>
            <section class="card panel">
                <h2 class="panel__title">"Monthly Sugar Consumption"</h2>
                <BarChart points=snapshot.weekly_sugar/>
            </section>
        </div>
        <section class="card panel">
            <h2 class="panel__title">"Sugar Sources Distribution"</h2>
            <PieChart slices=sources/>
        </section>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let overview = RwSignal::new(None::<OverviewSnapshot>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        overview.set(Some(crate::services::overview::fetch_overview().await));
    });

    let greeting = move || format!("Welcome back, {}!", auth.with(|a| a.username().unwrap_or_default().to_owned()));

    view! {
        <Show
            when=move || overview.with(Option::is_some)
            fallback=|| view! { <Loader text="Loading dashboard data..."/> }
        >
            <PageHeader
                title=greeting()
                description="Here's an overview of your sugar consumption data"
            />
            {move || overview.get().map(render_overview)}
        </Show>
    }
}
