use chrono::Local;

use crate::commands::base_commands::Commands;
use crate::commands::calculate_cmd::calculate_runway;
use crate::services::email_dispatch::{send_runway_email, OutboxMailer};

pub async fn email_command(cmd: Commands) {
    if let Commands::Email {
        scenario,
        to,
        outbox,
    } = cmd
    {
        let Some(result) = calculate_runway(&scenario).await else {
            return;
        };
        let mailer = OutboxMailer::new(&outbox);
        let notification =
            send_runway_email(&mailer, &to, &result, Local::now().date_naive()).await;
        notification.emit();
    }
}
