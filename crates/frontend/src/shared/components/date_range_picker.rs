use crate::shared::date_range::{DayState, PickerConfig, PickerController, PresetKind};
use chrono::{Datelike, NaiveDate};
use contracts::shared::date_range::DateRange;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker - единый компонент выбора периода для всех дашбордов
///
/// Trigger button with the committed period, and a dialog with quick-picks on the
/// left and a month calendar on the right. Edits go to a draft; the caller's
/// `on_change` runs only when the draft is committed (Apply, or quick-pick/Clear
/// for pickers configured with `CommitMode::Immediate`).
#[component]
pub fn DateRangePicker(
    /// Committed period, owned by the caller
    #[prop(into)]
    value: Signal<DateRange>,

    /// Called once per committed change
    on_change: Callback<DateRange>,

    /// Most recent date present in the data; anchors quick-picks and disables later days
    #[prop(optional, into)]
    latest_data_date: MaybeProp<NaiveDate>,

    /// Picker settings; defaults to the full catalog, Indonesian labels, staged commits
    #[prop(optional)]
    config: Option<PickerConfig>,

    /// Опциональная метка для компонента
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| {
        PickerConfig::builder()
            .latest_data_date(latest_data_date.get_untracked())
            .build()
    });
    let controller = RwSignal::new(PickerController::new(config));
    let show_picker = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(date) = latest_data_date.get() {
            controller.update(|c| c.set_latest_data_date(date));
        }
    });

    // Dialog dismissed from outside (backdrop, Esc) counts as Cancel
    Effect::new(move |_| {
        if !show_picker.get() && controller.with_untracked(|c| c.is_open()) {
            controller.update(|c| c.cancel());
        }
    });

    let commit = move |committed: Option<DateRange>| {
        if let Some(range) = committed {
            log!("period committed: {:?}", range);
            on_change.run(range);
        }
        show_picker.set(controller.with_untracked(|c| c.is_open()));
    };

    let on_open = move |_| {
        let committed = value.get_untracked();
        controller.update(|c| c.open(&committed));
        show_picker.set(true);
    };

    let on_preset = move |kind: PresetKind| {
        commit(controller.try_update(|c| c.select_preset_kind(kind)).flatten());
    };

    let on_clear = move |_| {
        commit(controller.try_update(|c| c.clear()).flatten());
    };

    let on_apply = move |_| {
        commit(controller.try_update(|c| c.apply()).flatten());
    };

    let on_cancel = move |_| {
        controller.update(|c| c.cancel());
        show_picker.set(false);
    };

    let trigger_text = move || controller.with(|c| c.display_label(&value.get()));
    let active_text = move || controller.with(|c| c.active_label(&value.get()));

    let presets_view = move || {
        let c = controller.get();
        let active = c.active_preset(&c.draft());
        c.options()
            .into_iter()
            .map(|option| {
                let kind = option.kind;
                let appearance = if active == Some(kind) {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Subtle
                };
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=appearance
                        on_click=move |_| on_preset(kind)
                        attr:style="width: 100%; justify-content: flex-start;"
                    >
                        {option.label}
                    </Button>
                }
            })
            .collect_view()
    };

    let calendar_view = move || {
        let c = controller.get();
        let locale = c.locale();
        let month = c.view_month();
        let weeks = match c.grid() {
            Ok(grid) => grid.weeks(),
            Err(err) => {
                log!("calendar grid unavailable: {}", err);
                Vec::new()
            }
        };

        view! {
            <div class="date-range-picker__calendar">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| controller.update(|c| c.show_previous_month())
                    >
                        "‹"
                    </Button>
                    <div class="date-range-picker__month-title">
                        {format!("{} {}", locale.month_name(month.month), month.year)}
                    </div>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| controller.update(|c| c.show_next_month())
                    >
                        "›"
                    </Button>
                </Flex>
                <div class="date-range-picker__week date-range-picker__weekdays">
                    {locale
                        .weekday_short()
                        .into_iter()
                        .map(|name| view! { <span>{name}</span> })
                        .collect_view()}
                </div>
                {weeks
                    .into_iter()
                    .map(|week| {
                        view! {
                            <div class="date-range-picker__week">
                                {week
                                    .into_iter()
                                    .map(|cell| match cell {
                                        Some(date) => {
                                            let state = c.day_state(date);
                                            view! {
                                                <button
                                                    class=day_class(state)
                                                    disabled=state.disabled
                                                    on:click=move |_| controller.update(|c| c.click_date(date))
                                                >
                                                    {date.day()}
                                                </button>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <span class="date-range-picker__day date-range-picker__day--blank"></span>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let locale = controller.with_untracked(|c| c.locale());

    view! {
        <style>
            "
            .date-range-picker__week { display: grid; grid-template-columns: repeat(7, 32px); gap: 2px; }
            .date-range-picker__weekdays span { text-align: center; font-size: 0.75rem; color: var(--colorNeutralForeground3, #707070); }
            .date-range-picker__month-title { font-weight: 500; }
            .date-range-picker__day {
                width: 32px; height: 32px; border: none; background: transparent;
                border-radius: var(--borderRadiusMedium, 4px); cursor: pointer; font-size: 0.875rem;
            }
            .date-range-picker__day:disabled { color: var(--colorNeutralForegroundDisabled, #bdbdbd); cursor: default; }
            .date-range-picker__day--selected { font-weight: 600; }
            .date-range-picker__day--in-range { background: var(--colorBrandBackground2, #ebf3fc); border-radius: 0; }
            .date-range-picker__day--start, .date-range-picker__day--end {
                background: var(--colorBrandBackground, #0f6cbd); color: #fff;
            }
            .date-range-picker__day--start { border-radius: 4px 0 0 4px; }
            .date-range-picker__day--end { border-radius: 0 4px 4px 0; }
            .date-range-picker__day--start.date-range-picker__day--end { border-radius: 4px; }
            .date-range-picker__day--blank { cursor: default; }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Secondary on_click=on_open>
                    {trigger_text}
                </Button>
                <span style="font-size: 0.75rem; color: var(--colorNeutralForeground3, #707070);">
                    {active_text}
                </span>
            </Flex>
        </Flex>

        <Dialog open=show_picker>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{trigger_text}</DialogTitle>
                    <DialogContent>
                        <Flex gap=FlexGap::Large>
                            <Flex vertical=true gap=FlexGap::Small attr:style="min-width: 160px;">
                                {presets_view}
                            </Flex>
                            {calendar_view}
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=on_clear>
                            {locale.clear_label()}
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_apply>
                            {locale.apply_label()}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=on_cancel>
                            {locale.cancel_label()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

fn day_class(state: DayState) -> String {
    let mut class = String::from("date-range-picker__day");
    if state.selected {
        class.push_str(" date-range-picker__day--selected");
    }
    if state.range_start {
        class.push_str(" date-range-picker__day--start");
    }
    if state.range_end {
        class.push_str(" date-range-picker__day--end");
    }
    if state.in_range {
        class.push_str(" date-range-picker__day--in-range");
    }
    class
}
