use chrono::Local;

use crate::commands::base_commands::Commands;
use crate::commands::calculate_cmd::calculate_runway;
use crate::services::notification::Notification;
use crate::services::runway_report::write_runway_report;

pub async fn export_command(cmd: Commands) {
    if let Commands::Export {
        scenario,
        output,
        format,
    } = cmd
    {
        let Some(result) = calculate_runway(&scenario).await else {
            return;
        };
        let output =
            output.unwrap_or_else(|| format!("runway-analysis.{}", format.extension()));
        let generated_on = Local::now().date_naive();
        match write_runway_report(&output, &result, format, generated_on).await {
            Ok(()) => {
                log::info!("exported {format:?} report");
                Notification::report_exported(&output).emit();
            }
            Err(e) => {
                eprintln!("Failed to export runway report: {e}");
                Notification::export_error().emit();
            }
        }
    }
}
