use crate::dashboards::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesOverviewDashboard />
    }
}
