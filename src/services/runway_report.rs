use std::io;

use chrono::NaiveDate;
use clap::ValueEnum;
use thiserror::Error;

use crate::domain::projection::RunwayResult;
use crate::services::formatters::{format_currency, format_date, format_percent};
use crate::services::runway_pdf::{generate_pdf_report, RunwayPdfError};

pub const REPORT_TITLE: &str = "Startup Runway Analysis";
pub const REPORT_FOOTER: &str = "© Financial Runway Calculator";

#[derive(Error, Debug)]
pub enum RunwayReportError {
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Pdf(#[from] RunwayPdfError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Html,
    Json,
    Yaml,
    Pdf,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// Label / value rows of the "Input Parameters" section.
pub fn input_rows(result: &RunwayResult) -> Vec<(&'static str, String)> {
    let scenario = &result.scenario;
    vec![
        ("Total Available Cash", format_currency(scenario.total_cash)),
        ("Monthly Burn Rate", format_currency(scenario.monthly_burn)),
        ("Additional Funding", format_currency(scenario.additional_funding)),
        ("Monthly Growth Rate", format_percent(scenario.growth_rate)),
        ("Monthly Revenue", format_currency(scenario.monthly_revenue)),
    ]
}

/// Label / value rows of the "Runway Analysis Results" section.
pub fn result_rows(result: &RunwayResult) -> Vec<(&'static str, String)> {
    vec![
        ("Runway Duration", format!("{} months", result.runway_months)),
        ("Estimated End Date", format_date(result.runway_date)),
    ]
}

pub(crate) fn projection_rows(result: &RunwayResult) -> Vec<[String; 5]> {
    result
        .projected_data
        .iter()
        .map(|entry| {
            [
                format!("Month {}", entry.month + 1),
                format_date(entry.date),
                format_currency(entry.revenue),
                format_currency(entry.burn),
                format_currency(entry.remaining),
            ]
        })
        .collect()
}

pub(crate) const PROJECTION_HEADERS: [&str; 5] = ["Month", "Date", "Revenue", "Burn", "Remaining Cash"];

pub fn generate_markdown_report(result: &RunwayResult, generated_on: NaiveDate) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {REPORT_TITLE}"));
    lines.push(String::new());
    lines.push(format!("Generated on: {}", format_date(generated_on)));
    lines.push(String::new());

    lines.push("## Input Parameters".to_string());
    lines.push(String::new());
    lines.push("| Parameter | Value |".to_string());
    lines.push("|-----------|-------|".to_string());
    for (label, value) in input_rows(result) {
        lines.push(format!("| {label} | {value} |"));
    }
    lines.push(String::new());

    lines.push("## Runway Analysis Results".to_string());
    lines.push(String::new());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    for (label, value) in result_rows(result) {
        lines.push(format!("| {label} | {value} |"));
    }
    lines.push(String::new());

    lines.push("## Monthly Cash Projection".to_string());
    lines.push(String::new());
    lines.push(format!("| {} |", PROJECTION_HEADERS.join(" | ")));
    lines.push(format!(
        "|{}|",
        PROJECTION_HEADERS.map(|header| "-".repeat(header.len() + 2)).join("|")
    ));
    for row in projection_rows(result) {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(REPORT_FOOTER.to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Standalone HTML document; also used as the email body.
pub fn generate_html_report(result: &RunwayResult, generated_on: NaiveDate) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{REPORT_TITLE}</title>\n"));
    html.push_str(HTML_STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<div class=\"header\"><h1>{REPORT_TITLE}</h1></div>\n"));
    html.push_str("<div class=\"container\">\n");
    html.push_str(&format!(
        "<p class=\"generated\">Generated on: {}</p>\n",
        format_date(generated_on)
    ));

    html.push_str("<div class=\"section\">\n<h2>Input Parameters</h2>\n");
    html.push_str(&html_table(
        &["Parameter", "Value"],
        input_rows(result)
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), value])
            .collect(),
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Runway Analysis Results</h2>\n");
    html.push_str(&html_table(
        &["Metric", "Value"],
        result_rows(result)
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), value])
            .collect(),
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Monthly Cash Projection</h2>\n");
    html.push_str(&html_table(
        &PROJECTION_HEADERS,
        projection_rows(result).into_iter().map(Vec::from).collect(),
    ));
    html.push_str("</div>\n</div>\n");

    html.push_str(&format!("<div class=\"footer\"><p>{REPORT_FOOTER}</p></div>\n"));
    html.push_str("</body>\n</html>\n");
    html
}

const HTML_STYLE: &str = r#"<style>
  body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
  .header { background-color: #245e4f; color: white; padding: 20px; text-align: center; }
  .container { max-width: 600px; margin: 0 auto; padding: 20px; }
  .section { margin-bottom: 30px; }
  table { width: 100%; border-collapse: collapse; }
  th { background-color: #245e4f; color: white; text-align: left; padding: 10px; }
  td { padding: 10px; border-bottom: 1px solid #ddd; }
  .footer { background-color: #f2f2f2; padding: 15px; text-align: center; font-size: 12px; }
</style>
"#;

fn html_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = String::from("<table>\n<tr>");
    for header in headers {
        table.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    table.push_str("</tr>\n");
    for row in rows {
        table.push_str("<tr>");
        for cell in row {
            table.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</table>\n");
    table
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_report(
    result: &RunwayResult,
    format: ReportFormat,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, RunwayReportError> {
    Ok(match format {
        ReportFormat::Markdown => generate_markdown_report(result, generated_on).into_bytes(),
        ReportFormat::Html => generate_html_report(result, generated_on).into_bytes(),
        ReportFormat::Json => serde_json::to_vec_pretty(result)?,
        ReportFormat::Yaml => serde_yaml::to_string(result)?.into_bytes(),
        ReportFormat::Pdf => generate_pdf_report(result, generated_on)?,
    })
}

pub async fn write_runway_report(
    output_path: &str,
    result: &RunwayResult,
    format: ReportFormat,
    generated_on: NaiveDate,
) -> Result<(), RunwayReportError> {
    let contents = render_report(result, format, generated_on)?;
    tokio::fs::write(output_path, contents).await?;
    Ok(())
}
