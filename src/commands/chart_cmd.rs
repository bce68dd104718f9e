use crate::commands::base_commands::Commands;
use crate::commands::calculate_cmd::calculate_runway;
use crate::services::runway_chart::write_runway_chart_png;

pub async fn chart_command(cmd: Commands) {
    if let Commands::Chart {
        scenario,
        output,
        months,
    } = cmd
    {
        let Some(result) = calculate_runway(&scenario).await else {
            return;
        };
        match write_runway_chart_png(&output, &result, months).await {
            Ok(()) => println!("Runway chart written to {output}"),
            Err(e) => eprintln!("Failed to plot runway chart: {e}"),
        }
    }
}
