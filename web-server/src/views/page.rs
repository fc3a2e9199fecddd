//! Predictor page
//!
//! One page: sidebar panels, two columns of widgets, the Predict button and
//! at most one outcome block.

use heart_risk_core::constants::{
    APP_NAME, FALLBACK_ACCURACY, FALLBACK_ALGORITHM, FALLBACK_DATASET, FALLBACK_METRICS,
};
use heart_risk_core::features::{FieldDomain, FieldSpec, FIELD_SPECS};
use heart_risk_core::{ModelMetadata, RiskLabel};

use super::escape_html;
use crate::models::form::{format_value, FormValues};

const STYLE: &str = include_str!("style.css");

/// Widgets in the left column; the rest go right
pub const FIRST_COLUMN_LEN: usize = 7;

/// Generic notice shown when the classifier call fails
pub const FAILURE_NOTICE: &str = "Prediction failed. Please try again.";

/// What to show below the form
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Prediction(RiskLabel),
    Invalid(String),
    Failed,
}

/// Render the full page
pub fn render_page(values: &FormValues, outcome: Option<&Outcome>, model: &ModelMetadata) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", APP_NAME));
    html.push_str(&format!("<style>\n{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<div class=\"layout\">\n");

    html.push_str(&render_sidebar(model));

    html.push_str("<main class=\"block-container\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", APP_NAME));
    html.push_str(
        "<p class=\"subtitle\">AI-powered heart disease risk assessment based on clinical data</p>\n",
    );

    html.push_str("<form method=\"post\" action=\"/predict\">\n<div class=\"columns\">\n");
    let (left, right) = FIELD_SPECS.split_at(FIRST_COLUMN_LEN);
    html.push_str(&render_column(left, 0, values));
    html.push_str(&render_column(right, FIRST_COLUMN_LEN, values));
    html.push_str("</div>\n");
    html.push_str(
        "<button type=\"submit\" class=\"predict-button\">Predict Heart Disease</button>\n",
    );
    html.push_str("</form>\n");

    if let Some(outcome) = outcome {
        html.push_str(&render_outcome(outcome));
    }

    html.push_str("<hr>\n<p class=\"footer\">Developed with \u{2764}\u{fe0f} by <b>Aniket Lad</b></p>\n");
    html.push_str("</main>\n</div>\n</body>\n</html>\n");

    html
}

fn render_column(specs: &[FieldSpec], offset: usize, values: &FormValues) -> String {
    let mut html = String::from("<div class=\"column\">\n");
    for (i, spec) in specs.iter().enumerate() {
        html.push_str(&render_field(spec, values.get(offset + i)));
    }
    html.push_str("</div>\n");
    html
}

fn render_field(spec: &FieldSpec, current: &str) -> String {
    let widget = match spec.domain {
        FieldDomain::IntRange { min, max } => format!(
            "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" required>",
            name = spec.name,
            value = escape_html(current),
        ),
        FieldDomain::FloatRange { min, max, step } => format!(
            "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min:.1}\" max=\"{max:.1}\" step=\"{step}\" value=\"{value}\" required>",
            name = spec.name,
            value = escape_html(current),
        ),
        FieldDomain::Choice { options } => {
            let current = current.parse::<f64>().ok();
            let mut select = format!("<select id=\"{name}\" name=\"{name}\">", name = spec.name);
            for option in options {
                let text = format_value(spec, *option as f64);
                let selected = if current == Some(*option as f64) { " selected" } else { "" };
                select.push_str(&format!(
                    "<option value=\"{text}\"{selected}>{text}</option>"
                ));
            }
            select.push_str("</select>");
            select
        }
    };

    format!(
        "<div class=\"field\"><label for=\"{}\">{}</label>{}</div>\n",
        spec.name,
        escape_html(spec.label),
        widget
    )
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Prediction(label) => {
            let class = if label.is_high() { "high" } else { "low" };
            format!(
                "<h3>Prediction Result</h3>\n<div class=\"result {}\" role=\"status\"><strong>{}</strong><br>{}</div>\n",
                class,
                label.headline(),
                label.message()
            )
        }
        Outcome::Invalid(reason) => format!(
            "<div class=\"result invalid\" role=\"alert\"><strong>Invalid input</strong><br>{}</div>\n",
            escape_html(reason)
        ),
        Outcome::Failed => format!(
            "<div class=\"result failed\" role=\"alert\">{}</div>\n",
            FAILURE_NOTICE
        ),
    }
}

fn render_sidebar(model: &ModelMetadata) -> String {
    let algorithm = model.algorithm.as_deref().unwrap_or(FALLBACK_ALGORITHM);
    let dataset = model.dataset.as_deref().unwrap_or(FALLBACK_DATASET);
    let accuracy = model.reported_accuracy.unwrap_or(FALLBACK_ACCURACY) * 100.0;
    let metrics = if model.evaluation_metrics.is_empty() {
        FALLBACK_METRICS.join(", ")
    } else {
        model.evaluation_metrics.join(", ")
    };

    format!(
        r#"<aside class="sidebar">
<h2>About This Application</h2>
<div class="sidebar-content">
<b>Title:</b> Heart Disease Risk Prediction Using Machine Learning<br>
<b>Objective:</b> Predicts the likelihood of heart disease based on clinical parameters.<br>
<b>Dataset:</b> {dataset}<br>
<b>Technologies:</b> Rust, Axum
</div>
<div class="model-info-box">
<b>Model Information</b><br>
Algorithm: {algorithm}<br>
Accuracy: {accuracy:.0}% (Test Data)<br>
Evaluation Metrics: {metrics}
</div>
<div class="disclaimer">
<b>Disclaimer:</b><br>
This application is for academic and research purposes only.<br>
It is not a medical diagnostic tool.
</div>
</aside>
"#,
        dataset = escape_html(dataset),
        algorithm = escape_html(algorithm),
        accuracy = accuracy,
        metrics = escape_html(&metrics),
    )
}
