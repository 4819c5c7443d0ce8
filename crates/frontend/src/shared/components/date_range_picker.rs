use chrono::{Datelike, Duration, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils;

/// DateRangePicker - reusable period selector: two date inputs plus quick
/// buttons for the previous month, the current month, and clearing the
/// period ("" on both sides = no period filter).
#[component]
pub fn DateRangePicker(
    /// "From" value in yyyy-mm-dd format ("" = unset)
    #[prop(into)]
    date_from: Signal<String>,

    /// "To" value in yyyy-mm-dd format ("" = unset)
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback on range change (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label for the component
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let set_month = move |year: i32, month: u32| {
        let month_start = NaiveDate::from_ymd_opt(year, month, 1);
        let month_end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).map(|d| d - Duration::days(1))
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).map(|d| d - Duration::days(1))
        };
        if let (Some(start), Some(end)) = (month_start, month_end) {
            on_change.run((
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            ));
        }
    };

    let on_current_month = move |_| {
        let now = date_utils::today();
        set_month(now.year(), now.month());
    };

    // Steps back one month from the currently selected "from" date,
    // or from today when the period is unset.
    let on_previous_month = move |_| {
        let anchor = date_utils::parse_input_date(&date_from.get_untracked())
            .unwrap_or_else(date_utils::today);
        let (year, month) = if anchor.month() == 1 {
            (anchor.year() - 1, 12)
        } else {
            (anchor.year(), anchor.month() - 1)
        };
        set_month(year, month);
    };

    let on_clear = move |_| {
        on_change.run((String::new(), String::new()));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"\u{2013}"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_previous_month(())
                    >
                        "-1M"
                    </Button>

                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_current_month(())
                    >
                        "0M"
                    </Button>

                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_clear(())
                    >
                        "\u{00d7}"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
