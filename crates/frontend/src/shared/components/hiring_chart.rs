use contracts::dashboards::d100_management_reports::MonthlyHiring;
use leptos::prelude::*;

use crate::shared::date_utils::format_month;

const CHART_HEIGHT: f64 = 280.0;
const BAR_AREA_HEIGHT: f64 = 240.0;
const BAR_WIDTH: f64 = 36.0;
const BAR_GAP: f64 = 18.0;

/// Bar height in pixels, scaled against the series maximum.
fn bar_height(total: u32, max_total: u32) -> f64 {
    if max_total == 0 {
        return 0.0;
    }
    f64::from(total) / f64::from(max_total) * BAR_AREA_HEIGHT
}

/// Monthly hiring bar chart rendered as inline SVG; one bar per month,
/// value on top, month label under the baseline.
#[component]
pub fn HiringChart(
    /// Time series, expected in chronological order
    #[prop(into)]
    data: Signal<Vec<MonthlyHiring>>,
) -> impl IntoView {
    let bars = move || {
        let rows = data.get();
        let max_total = rows.iter().map(|r| r.total).max().unwrap_or(0);
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let height = bar_height(row.total, max_total);
                let x = BAR_GAP + (BAR_WIDTH + BAR_GAP) * i as f64;
                let y = BAR_AREA_HEIGHT - height;
                (row, x, y, height)
            })
            .collect::<Vec<_>>()
    };

    let width = move || BAR_GAP + (BAR_WIDTH + BAR_GAP) * data.get().len() as f64;

    view! {
        <div class="hiring-chart">
            <svg
                width=move || width().to_string()
                height=CHART_HEIGHT.to_string()
                role="img"
            >
                {move || bars()
                    .into_iter()
                    .map(|(row, x, y, height)| {
                        view! {
                            <g>
                                <rect
                                    class="hiring-chart__bar"
                                    x=x.to_string()
                                    y=y.to_string()
                                    width=BAR_WIDTH.to_string()
                                    height=height.to_string()
                                    rx="3"
                                />
                                <text
                                    class="hiring-chart__value"
                                    x=(x + BAR_WIDTH / 2.0).to_string()
                                    y=(y - 6.0).max(12.0).to_string()
                                    text-anchor="middle"
                                >
                                    {row.total.to_string()}
                                </text>
                                <text
                                    class="hiring-chart__label"
                                    x=(x + BAR_WIDTH / 2.0).to_string()
                                    y=(BAR_AREA_HEIGHT + 20.0).to_string()
                                    text-anchor="middle"
                                >
                                    {format_month(&row.month)}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_against_the_series_maximum() {
        assert_eq!(bar_height(10, 10), BAR_AREA_HEIGHT);
        assert_eq!(bar_height(5, 10), BAR_AREA_HEIGHT / 2.0);
        assert_eq!(bar_height(0, 10), 0.0);
    }

    #[test]
    fn empty_series_does_not_divide_by_zero() {
        assert_eq!(bar_height(0, 0), 0.0);
    }
}
