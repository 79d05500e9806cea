//! HTML dashboard: one Plotly chart per unit, all on the same 22:00-22:00
//! time axis. Plotly itself is loaded from the configured CDN.

use crate::config::Config;
use crate::core::calculator::cycle::CycleWindow;
use crate::core::logic::Analysis;
use crate::models::interval::{Interval, UnitPhases};
use crate::models::unit::UnitId;
use chrono::NaiveDateTime;
use serde_json::{Value, json};

const PLOT_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const PREHEAT_FILL: &str = "rgba(255,0,0,0.3)";
const RUN_FILL: &str = "rgba(0,200,0,0.3)";
const SEPARATOR: &str = "\n<hr style='margin:40px 0;'>\n";

fn plot_ts(ts: NaiveDateTime) -> String {
    ts.format(PLOT_TS_FORMAT).to_string()
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON safe to inline in a `<script>` block.
fn script_json(v: &Value) -> String {
    v.to_string().replace("</", "<\\/")
}

/// Per-unit chart samples in display time, with the log message as hover text.
struct Samples {
    xs: Vec<String>,
    actual: Vec<Option<f64>>,
    target: Vec<Option<f64>>,
    messages: Vec<String>,
}

fn temperature_trace(
    name: &str,
    samples: &Samples,
    ys: &[Option<f64>],
    line: Value,
) -> Option<Value> {
    if ys.iter().all(Option::is_none) {
        return None;
    }
    Some(json!({
        "type": "scatter",
        "mode": "lines",
        "name": name,
        "x": samples.xs,
        "y": ys,
        "text": samples.messages,
        "hovertemplate": "%{y} °C<br>%{text}<extra></extra>",
        "line": line,
        "connectgaps": false,
    }))
}

fn band(window: &CycleWindow, iv: &Interval, fill: &str) -> Value {
    let (s, e) = window.remap_interval(iv);
    json!({
        "type": "rect",
        "xref": "x",
        "yref": "paper",
        "x0": plot_ts(s),
        "x1": plot_ts(e),
        "y0": 0,
        "y1": 1,
        "fillcolor": fill,
        "line": { "width": 0 },
    })
}

fn program_label(window: &CycleWindow, iv: &Interval, program: &str) -> Value {
    let (s, e) = window.remap_interval(iv);
    let mid = s + (e - s) / 2;
    json!({
        "x": plot_ts(mid),
        "y": 0.95,
        "yref": "paper",
        "text": format!("<b>{}</b>", escape_html(program)),
        "showarrow": false,
        "font": { "size": 14, "color": "darkgreen" },
        "bgcolor": "rgba(255,255,255,0.7)",
        "bordercolor": "darkgreen",
        "borderwidth": 1,
        "borderpad": 3,
    })
}

/// Traces and layout for one unit.
pub fn unit_figure(analysis: &Analysis, unit: &UnitId, phases: &UnitPhases, cfg: &Config) -> Value {
    let window = &analysis.window;

    // Remapping folds several calendar days into one, so re-sort by display time
    let mut events: Vec<_> = analysis
        .events_of(unit)
        .map(|e| (window.remap(e.timestamp), e))
        .collect();
    events.sort_by_key(|(t, _)| *t);

    let samples = Samples {
        xs: events.iter().map(|(t, _)| plot_ts(*t)).collect(),
        actual: events.iter().map(|(_, e)| e.actual_temp).collect(),
        target: events.iter().map(|(_, e)| e.target_temp).collect(),
        messages: events.iter().map(|(_, e)| escape_html(&e.message)).collect(),
    };

    let data: Vec<Value> = [
        temperature_trace(
            "Ist °C",
            &samples,
            &samples.actual,
            json!({ "color": "orange", "width": 2 }),
        ),
        temperature_trace(
            "Soll °C",
            &samples,
            &samples.target,
            json!({ "color": "blue", "dash": "dot", "width": 1.5 }),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut shapes: Vec<Value> = phases
        .preheats
        .iter()
        .map(|iv| band(window, iv, PREHEAT_FILL))
        .collect();
    shapes.extend(phases.runs.iter().map(|iv| band(window, iv, RUN_FILL)));

    let annotations: Vec<Value> = phases
        .runs
        .iter()
        .filter_map(|iv| iv.program.as_deref().map(|p| program_label(window, iv, p)))
        .collect();

    let layout = json!({
        "title": { "text": escape_html(&unit.label()) },
        "height": cfg.chart_height,
        "margin": { "l": 80, "r": 30, "t": 50, "b": 40 },
        "template": "plotly_white",
        "legend": { "orientation": "h", "y": -0.25 },
        "xaxis": {
            "title": { "text": "Zeit" },
            "type": "date",
            "tickformat": "%H:%M",
            "dtick": u64::from(cfg.x_tick_hours) * 3_600_000,
            "range": [plot_ts(window.start), plot_ts(window.end)],
        },
        "yaxis": {
            "title": { "text": "Temperatur °C" },
            "range": [cfg.y_axis_min, cfg.y_axis_max],
            "dtick": cfg.y_axis_tick,
        },
        "shapes": shapes,
        "annotations": annotations,
    });

    json!({ "data": data, "layout": layout })
}

fn chart_block(idx: usize, figure: &Value) -> String {
    let div_id = format!("unit-{idx}");
    format!(
        "<div id=\"{div_id}\"></div>\n<script>Plotly.newPlot(\"{div_id}\", {}, {});</script>",
        script_json(&figure["data"]),
        script_json(&figure["layout"]),
    )
}

/// Complete, self-contained dashboard page.
pub fn render_dashboard(analysis: &Analysis, cfg: &Config) -> String {
    let blocks: Vec<String> = analysis
        .units_in_order()
        .into_iter()
        .enumerate()
        .map(|(idx, (unit, phases))| chart_block(idx, &unit_figure(analysis, unit, phases, cfg)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Ofen-Dashboard</title>
    <script src="{cdn}"></script>
</head>
<body style="font-family:Arial; margin:20px;">
    <h1>Ofen-Dashboard</h1>
    <p>Analysierter 24h-Zeitraum: {window}</p>
    <p>Vorheizen = Rot | Laufzeit = Grün | Ist/Soll-Temperatur = Linien</p>
{charts}
</body>
</html>
"#,
        cdn = escape_html(&cfg.plotly_cdn),
        window = analysis.window.describe(),
        charts = blocks.join(SEPARATOR),
    )
}
