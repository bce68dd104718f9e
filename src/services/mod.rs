pub mod email_dispatch;
pub mod formatters;
pub mod notification;
pub mod runway_chart;
pub mod runway_pdf;
pub mod runway_projection;
pub mod runway_report;
pub mod scenario_yaml;
