use crate::dashboards::d400_sales_overview::api;
use crate::shared::api_utils::{parse_range_query, range_query};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::date_range::PickerConfig;
use crate::shared::date_utils::browser_locale;
use chrono::NaiveDate;
use contracts::shared::date_range::DateRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

/// Sales overview page: period filter anchored at the latest imported sales date
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let period = RwSignal::new(parse_range_query(&search));
    let latest_date = RwSignal::new(None::<NaiveDate>);
    let (error, set_error) = signal(None::<String>);

    let locale = browser_locale();
    let config = PickerConfig::builder().locale(locale).build();

    // Load latest data date on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_latest_data_date().await {
                Ok(Some(date)) => latest_date.set(Some(date)),
                Ok(None) => log::info!("D400: no sales data yet, quick-picks anchored at today"),
                Err(err) => {
                    log::error!("Failed to load D400 latest date: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    let on_period_change = Callback::new(move |range: DateRange| {
        period.set(range);
        replace_query(&range_query(&range));
    });

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <h2 class="page__title">"Ringkasan Penjualan"</h2>
            </div>

            <DateRangePicker
                value=Signal::derive(move || period.get())
                on_change=on_period_change
                latest_data_date=Signal::derive(move || latest_date.get())
                config=config
            />

            {move || latest_date.get().map(|date| view! {
                <div style="font-size: 0.75rem; color: var(--color-text-secondary);">
                    {locale.format_date(date)}
                </div>
            })}

            {move || error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}
        </div>
    }
}

fn replace_query(query: &str) {
    let new_url = if query.is_empty() {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    } else {
        format!("?{}", query)
    };
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::warn!("D400: failed to update period in URL: {:?}", e);
            }
        }
    }
}
