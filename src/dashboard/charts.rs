//! The category breakdown pie chart and its legend.
//!
//! The chart is generated as JSON configuration for the ECharts library. It is
//! rendered as an empty container followed by an inline script that draws the
//! chart into it. The script runs both on page load and when HTMX swaps in
//! new dashboard content, so the chart is redrawn after every intent.

use charming::{
    Chart,
    component::Title,
    element::{Color, JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::prelude::ToPrimitive;

use crate::{dashboard::aggregation::CategoryExpense, html::format_currency_rounded};

/// The HTML element ID of the breakdown chart container.
pub(super) const CATEGORY_CHART_ID: &str = "category-chart";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the expenses by category section: the pie chart and a legend.
///
/// Shows a placeholder instead of the chart when there are no expenses.
pub(super) fn category_breakdown_view(breakdown: &[CategoryExpense]) -> Markup {
    html!(
        section id="category-breakdown" class="mb-8"
        {
            h2 class="mb-4 text-xl font-semibold text-white" { "Expenses by Category" }

            @if breakdown.is_empty() {
                p class="py-12 text-center text-gray-400" { "No expenses recorded yet." }
            } @else {
                @let chart = DashboardChart {
                    id: CATEGORY_CHART_ID,
                    options: category_chart(breakdown).to_string(),
                };

                div class="grid grid-cols-1 md:grid-cols-2 gap-4 items-center"
                {
                    div id=(chart.id) class="min-h-[300px]" {}

                    (category_legend(breakdown))
                }

                (chart_script(&chart))
            }
        }
    )
}

fn category_legend(breakdown: &[CategoryExpense]) -> Markup {
    html!(
        ul id="category-legend" class="space-y-2"
        {
            @for expense in breakdown {
                li class="flex items-center justify-between text-gray-200"
                {
                    span class="flex items-center gap-2"
                    {
                        span
                            class="inline-block w-3 h-3 rounded-full"
                            style={ "background-color: " (expense.color()) }
                        {}
                        (expense.icon()) " " (expense.label())
                    }
                    span class="font-medium" { (format_currency_rounded(expense.value)) }
                }
            }
        }
    )
}

/// Generates the inline script that draws `chart` into its container.
///
/// Each HTMX swap brings a new container, so the chart drawn by the previous
/// script is disposed first. The window resize listener is only added once.
fn chart_script(chart: &DashboardChart) -> Markup {
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{id}");
            if (!chartDom || typeof echarts === "undefined") {{
                return;
            }}
            const charts = window.dashboardCharts || (window.dashboardCharts = {{}});
            const previous = charts["{id}"];
            if (previous && !previous.isDisposed()) {{
                previous.dispose();
            }}
            const chart = echarts.init(chartDom, "dark");
            const option = {options};
            option.backgroundColor = "transparent";
            chart.setOption(option);
            charts["{id}"] = chart;

            if (!window.dashboardChartsResize) {{
                window.dashboardChartsResize = () => Object.values(window.dashboardCharts)
                    .filter((instance) => !instance.isDisposed())
                    .forEach((instance) => instance.resize());
                window.addEventListener("resize", window.dashboardChartsResize);
            }}
        }})();"#,
        id = chart.id,
        options = chart.options
    );

    html!(script { (PreEscaped(script)) })
}

/// Builds a pie chart of `breakdown`, one slice per category in its own colour.
pub(super) fn category_chart(breakdown: &[CategoryExpense]) -> Chart {
    let colors: Vec<Color> = breakdown
        .iter()
        .map(|expense| Color::from(expense.color()))
        .collect();
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|expense| (expense.value.to_f64().unwrap_or_default(), expense.label()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending").left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .color(colors)
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
