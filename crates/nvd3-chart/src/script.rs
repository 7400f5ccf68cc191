//! Script and element templates.

use nvd3_model::Result;

use crate::chart::Chart;
use crate::series::ChartSeries;

/// Serializes the series as the chart's `data` literal.
///
/// `</` is escaped so a label cannot close the surrounding `<script>` element.
pub fn data_literal(chart: &Chart) -> Result<String> {
    let data: Vec<&ChartSeries> = chart.series().collect();
    Ok(serde_json::to_string(&data)?.replace("</", "<\\/"))
}

pub(crate) fn javascript(chart: &Chart) -> Result<String> {
    let mut lines = vec![
        "<script>".to_string(),
        "\tnv.addGraph(function() {".to_string(),
        format!("\t\tvar data={};", data_literal(chart)?),
        format!("\t\tvar chart = nv.models.{}();", chart.model()),
    ];

    for axis in chart.axes() {
        let config = axis.to_config();
        if config.is_empty() {
            lines.push(format!("\t\tchart.{};", axis.name()));
            continue;
        }
        lines.push(format!("\t\tchart.{}", axis.name()));
        let last = config.len() - 1;
        for (position, (option, value)) in config.iter().enumerate() {
            let end = if position == last { ";" } else { "" };
            lines.push(format!("\t\t\t.{option}({value}){end}"));
        }
    }

    lines.push(format!(
        "\n\t\td3.select('#{} svg')",
        single_quoted_content(chart.chart_id())
    ));
    lines.push("\t\t  .datum(data)".to_string());
    lines.push("\t\t  .call(chart);".to_string());
    lines.push("\n\t\tnv.utils.windowResize(chart.update);".to_string());
    lines.push("\n\t\treturn chart;".to_string());
    lines.push("\t});".to_string());
    lines.push("</script>".to_string());

    Ok(lines.join("\n"))
}

pub(crate) fn html(chart_id: &str) -> String {
    format!("<div id=\"{}\"><svg/></div>", attribute_value(chart_id))
}

/// Escapes text for the inside of a single-quoted JavaScript string.
fn single_quoted_content(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped.replace("</", "<\\/")
}

/// Escapes text for a double-quoted HTML attribute.
fn attribute_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
