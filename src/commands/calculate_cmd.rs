use crate::commands::base_commands::{Commands, ScenarioArgs};
use crate::commands::report_format::format_runway_summary;
use crate::domain::projection::RunwayResult;
use crate::services::notification::Notification;
use crate::services::runway_projection::project_runway;

/// Resolves the inputs and runs the projection. Input problems are reported
/// as a calculation error notification and yield `None`.
pub async fn calculate_runway(args: &ScenarioArgs) -> Option<RunwayResult> {
    let (scenario, start_date) = match args.resolve().await {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Failed to resolve runway inputs: {e}");
            Notification::calculation_error().emit();
            return None;
        }
    };

    let result = project_runway(&scenario, start_date);
    log::debug!(
        "projected {} months from {}, runway {} months",
        result.projected_data.len(),
        start_date,
        result.runway_months
    );
    Some(result)
}

pub async fn calculate_command(cmd: Commands) {
    if let Commands::Calculate { scenario, output } = cmd {
        let Some(result) = calculate_runway(&scenario).await else {
            return;
        };
        println!("{}", format_runway_summary(&result));

        let Some(output) = output else {
            return;
        };
        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize runway projection: {e:?}");
                Notification::export_error().emit();
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&output, yaml).await {
            eprintln!("Failed to write runway projection: {e:?}");
            Notification::export_error().emit();
        } else {
            log::info!("wrote projection with {} months", result.projected_data.len());
            println!("Runway projection written to {output}");
        }
    }
}
