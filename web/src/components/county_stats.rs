use leptos::prelude::*;
use shared_types::CountyStats;

#[component]
pub fn CountyStatsPanel(county: Option<CountyStats>, case_percentage: Option<f64>) -> impl IntoView {
    let Some(county) = county else {
        return view! {
            <div class="county-panel county-panel--empty">
                <p>"County statistics are unavailable for this location."</p>
            </div>
        }
        .into_any();
    };

    view! {
        <div class="county-panel">
            <h2 class="county-panel__title">{county.display_name()}</h2>
            <div class="county-panel__stats">
                <div class="stat-item">
                    <span class="stat-number">{county.cases}</span>
                    <span>"total cases"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{county.active_cases}</span>
                    <span>"active cases"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{county.deaths}</span>
                    <span>"deaths"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{county.population}</span>
                    <span>"population"</span>
                </div>
            </div>
            <p class="county-panel__proportion">
                {match case_percentage {
                    Some(percentage) => format!("{percentage}% of the county population has had a reported case."),
                    None => "Case proportion unavailable.".to_string(),
                }}
            </p>
        </div>
    }
    .into_any()
}
