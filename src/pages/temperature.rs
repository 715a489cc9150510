//! Server-rendered temperature comparison page.
//!
//! The page is self-contained apart from Chart.js, which draws the two line
//! charts from the series embedded in the final inline script.

use common::{ComparisonRow, HistoricalRow, TemperatureReport};
use model::official::HISTORY_YEARS;

use crate::helpers::html::{html_escape, script_json};

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Render the full page for `report`.
pub fn render_report_page(report: &TemperatureReport) -> serde_json::Result<String> {
    let country = html_escape(&report.country_name);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="Predicted vs Official Temperature Data Comparison">
    <title>Temperature Data</title>
    <script src="{chart_js}"></script>
    <style>{css}</style>
    <script>{chart_builders}</script>
</head>
<body>
    <h2>Predicted vs Official Temperature Data Comparison</h2>
    {search_form}
    <h3>Temperature Data for {country}</h3>
    {comparison_table}
    <div class="chart-container"><canvas id="temperatureChart"></canvas></div>
    <h3>Historical Official Temperatures ({first} - {last}) for {country}</h3>
    <div class="scrollable-table">
    {history_table}
    </div>
    <div class="chart-container"><canvas id="historicalTemperatureChart"></canvas></div>
    {chart_data}
</body>
</html>
"#,
        chart_js = CHART_JS_URL,
        css = inline_css(),
        chart_builders = chart_builders(),
        search_form = render_search_form(),
        country = country,
        comparison_table = render_comparison_table(&report.comparison),
        first = HISTORY_YEARS.start(),
        last = HISTORY_YEARS.end(),
        history_table = render_history_table(&report.history),
        chart_data = render_chart_data(report)?,
    ))
}

/// Page shown when the report could not be produced. Carries no detail
/// about the failure.
pub fn render_error_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Temperature Data</title>
    <style>{css}</style>
</head>
<body>
    <h2>Predicted vs Official Temperature Data Comparison</h2>
    <p class="error">The temperature data is unavailable right now. Please try again later.</p>
</body>
</html>
"#,
        css = inline_css(),
    )
}

fn render_search_form() -> &'static str {
    r#"<form action="" method="get">
        <label for="countryName">Enter Country Name:</label>
        <input type="text" id="countryName" name="countryName" required>
        <input type="submit" value="Search">
    </form>"#
}

fn render_comparison_table(rows: &[ComparisonRow]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.year,
                html_escape(&row.predicted.to_string()),
                html_escape(&row.official.to_string()),
            )
        })
        .collect();

    format!(
        "<table id=\"comparisonTable\"><thead><tr><th>Year</th><th>Predicted Temperature (°C)</th>\
         <th>Official Temperature (°C)</th></tr></thead><tbody>{body}</tbody></table>"
    )
}

fn render_history_table(rows: &[HistoricalRow]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                row.year,
                html_escape(&row.official.to_string()),
            )
        })
        .collect();

    format!(
        "<table id=\"historyTable\"><thead><tr><th>Year</th><th>Temperature (°C)</th></tr></thead>\
         <tbody>{body}</tbody></table>"
    )
}

fn render_chart_data(report: &TemperatureReport) -> serde_json::Result<String> {
    let comparison = report.comparison_chart();
    let history = report.history_chart();

    Ok(format!(
        r#"<script>
        document.addEventListener('DOMContentLoaded', function () {{
            drawComparisonChart({predicted}, {official}, {years});
            drawHistoryChart({history}, {history_years});
        }});
    </script>"#,
        predicted = script_json(&comparison.predicted)?,
        official = script_json(&comparison.official)?,
        years = script_json(&comparison.years)?,
        history = script_json(&history.official)?,
        history_years = script_json(&history.years)?,
    ))
}

fn chart_builders() -> &'static str {
    r#"
        function lineDataset(label, data, color) {
            return {
                label: label,
                data: data,
                borderColor: 'rgba(' + color + ', 1)',
                backgroundColor: 'rgba(' + color + ', 0.2)',
                fill: false
            };
        }

        function drawLineChart(canvasId, labels, datasets) {
            const ctx = document.getElementById(canvasId).getContext('2d');
            new Chart(ctx, {
                type: 'line',
                data: { labels: labels, datasets: datasets },
                options: {
                    responsive: true,
                    maintainAspectRatio: false,
                    scales: { y: { beginAtZero: false } }
                }
            });
        }

        function drawComparisonChart(predicted, official, years) {
            drawLineChart('temperatureChart', years, [
                lineDataset('Predicted Temperature (°C)', predicted, '255, 99, 132'),
                lineDataset('Official Temperature (°C)', official, '54, 162, 235')
            ]);
        }

        function drawHistoryChart(official, years) {
            drawLineChart('historicalTemperatureChart', years, [
                lineDataset('Official Temperature (°C)', official, '75, 192, 192')
            ]);
        }
    "#
}

fn inline_css() -> &'static str {
    r#"
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f0f2f5; color: #333; }
        h2, h3 { color: #444; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background-color: #007bff; color: #fff; text-transform: uppercase; }
        td { background-color: #fff; }
        tr:nth-child(even) td { background-color: #f2f2f2; }
        tr:hover td { background-color: #ddd; }
        .chart-container { width: 100%; height: 400px; margin: 20px 0; }
        .scrollable-table { max-height: 500px; overflow: auto; }
        .error { color: #c00000; }
    "#
}
