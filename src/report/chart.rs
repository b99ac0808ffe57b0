use std::fs;
use std::path::Path;

use crate::model::scores::{ScoreKind, ScoreSeries};
use crate::report::ReportError;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARKER_RADIUS: f64 = 4.0;
const MAX_X_TICKS: usize = 10;
const Y_TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

fn series_color(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Rouge1 => "#1f77b4",
        ScoreKind::Rouge2 => "#ff7f0e",
        ScoreKind::RougeL => "#2ca02c",
    }
}

/// Maps sample index and score into pixel space. The y domain is fixed to
/// `[0, 1]`; the x domain pads half a sample on both sides.
struct Frame {
    x_min: f64,
    x_max: f64,
}

impl Frame {
    fn new(n_samples: usize) -> Self {
        let last = n_samples.saturating_sub(1) as f64;
        Self {
            x_min: -0.5,
            x_max: last + 0.5,
        }
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, index: f64) -> f64 {
        MARGIN_LEFT + (index - self.x_min) / (self.x_max - self.x_min) * Self::plot_width()
    }

    fn y(&self, score: f64) -> f64 {
        MARGIN_TOP + (1.0 - score.clamp(0.0, 1.0)) * Self::plot_height()
    }
}

/// Renders the per-sample scores as a standalone SVG line chart.
pub fn render_chart_svg(series: &ScoreSeries, model: &str) -> String {
    let frame = Frame::new(series.len());
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    ));
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"
    ));

    push_grid(&mut out, &frame, series.len());
    push_axes(&mut out);

    if !series.is_empty() {
        for kind in ScoreKind::ALL {
            push_series(&mut out, &frame, kind, series.get(kind));
        }
    }

    push_legend(&mut out);

    out.push_str(&format!(
        "<text class=\"title\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"18\">ROUGE Scores: {}</text>\n",
        WIDTH / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        escape_xml(model)
    ));
    out.push_str(&format!(
        "<text class=\"x-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">Test Sample Index</text>\n",
        MARGIN_LEFT + Frame::plot_width() / 2.0,
        HEIGHT - 20.0
    ));
    let y_mid = MARGIN_TOP + Frame::plot_height() / 2.0;
    out.push_str(&format!(
        "<text class=\"y-label\" x=\"20\" y=\"{y_mid:.1}\" text-anchor=\"middle\" font-size=\"14\" transform=\"rotate(-90 20 {y_mid:.1})\">ROUGE F1 Score</text>\n"
    ));

    out.push_str("</svg>\n");
    out
}

pub fn write_chart(path: &Path, svg: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Write {
            path: parent.display().to_string(),
            source,
        })?;
    }
    fs::write(path, svg).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Integer sample indices to label, thinned so at most `MAX_X_TICKS` remain.
pub fn x_ticks(n_samples: usize) -> Vec<usize> {
    if n_samples == 0 {
        return Vec::new();
    }
    let step = n_samples.div_ceil(MAX_X_TICKS).max(1);
    (0..n_samples).step_by(step).collect()
}

fn push_grid(out: &mut String, frame: &Frame, n_samples: usize) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    out.push_str("<g class=\"grid\" stroke=\"#dddddd\" stroke-width=\"1\">\n");
    for tick in Y_TICKS {
        let y = frame.y(tick);
        out.push_str(&format!(
            "<line x1=\"{left:.1}\" y1=\"{y:.1}\" x2=\"{right:.1}\" y2=\"{y:.1}\"/>\n"
        ));
    }
    for tick in x_ticks(n_samples) {
        let x = frame.x(tick as f64);
        out.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{top:.1}\" x2=\"{x:.1}\" y2=\"{bottom:.1}\"/>\n"
        ));
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"ticks\" font-size=\"12\" fill=\"#333333\">\n");
    for tick in Y_TICKS {
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{tick:.1}</text>\n",
            left - 8.0,
            frame.y(tick) + 4.0
        ));
    }
    for tick in x_ticks(n_samples) {
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{tick}</text>\n",
            frame.x(tick as f64),
            bottom + 18.0
        ));
    }
    out.push_str("</g>\n");
}

fn push_axes(out: &mut String) {
    out.push_str(&format!(
        "<rect class=\"axes\" x=\"{MARGIN_LEFT:.1}\" y=\"{MARGIN_TOP:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\"/>\n",
        Frame::plot_width(),
        Frame::plot_height()
    ));
}

fn push_series(out: &mut String, frame: &Frame, kind: ScoreKind, values: &[f64]) {
    let color = series_color(kind);
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", frame.x(i as f64), frame.y(v)))
        .collect::<Vec<_>>();

    out.push_str(&format!(
        "<g class=\"series\" data-label=\"{}\">\n",
        kind.label()
    ));
    out.push_str(&format!(
        "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"2\" points=\"{}\"/>\n",
        points.join(" ")
    ));
    for (i, &v) in values.iter().enumerate() {
        out.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{MARKER_RADIUS}\" fill=\"{color}\"/>\n",
            frame.x(i as f64),
            frame.y(v)
        ));
    }
    out.push_str("</g>\n");
}

fn push_legend(out: &mut String) {
    let box_w = 120.0;
    let row_h = 22.0;
    let x0 = WIDTH - MARGIN_RIGHT - box_w - 10.0;
    let y0 = MARGIN_TOP + 10.0;

    out.push_str("<g class=\"legend\" font-size=\"13\">\n");
    out.push_str(&format!(
        "<rect x=\"{x0:.1}\" y=\"{y0:.1}\" width=\"{box_w:.1}\" height=\"{:.1}\" fill=\"white\" fill-opacity=\"0.85\" stroke=\"#cccccc\"/>\n",
        row_h * ScoreKind::ALL.len() as f64 + 8.0
    ));
    for (row, kind) in ScoreKind::ALL.iter().enumerate() {
        let y = y0 + 16.0 + row as f64 * row_h;
        let color = series_color(*kind);
        out.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{color}\" stroke-width=\"2\"/>\n",
            x0 + 8.0,
            x0 + 36.0
        ));
        out.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{y:.1}\" r=\"{MARKER_RADIUS}\" fill=\"{color}\"/>\n",
            x0 + 22.0
        ));
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
            x0 + 44.0,
            y + 4.0,
            kind.label()
        ));
    }
    out.push_str("</g>\n");
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/chart.rs"]
mod tests;
