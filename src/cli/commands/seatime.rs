use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{SeaTimeLog, SeaTimeLogPayload};

#[derive(Subcommand)]
pub enum SeaTimeCommands {
    #[command(about = "List sea time log entries")]
    List,

    #[command(about = "Show one sea time log entry")]
    Get {
        #[arg(help = "Log entry ID")]
        id: i64,
    },

    #[command(about = "Create a log entry from a JSON payload")]
    Create {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Replace a log entry from a JSON payload")]
    Update {
        #[arg(help = "Log entry ID")]
        id: i64,
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a log entry")]
    Delete {
        #[arg(help = "Log entry ID")]
        id: i64,
    },
}

pub async fn handle(cmd: SeaTimeCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: SeaTimeCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SeaTimeCommands::List => {
            let logs = ctx.gateway.list_sea_time_logs().await?;
            if logs.is_empty() {
                return output_empty_collection(&output_format, "sea_time_logs", "No sea time logged yet");
            }
            output_value(&output_format, "sea_time_logs", &logs, |items| print_table(items))
        }
        SeaTimeCommands::Get { id } => {
            let log = ctx.gateway.get_sea_time_log(id).await?;
            output_value(&output_format, "sea_time_log", &log, |l| print_table(std::slice::from_ref(l)))
        }
        SeaTimeCommands::Create { file } => {
            let payload: SeaTimeLogPayload = read_payload(file.as_deref())?;
            let log = ctx.gateway.create_sea_time_log(&payload).await?;
            output_success(
                &output_format,
                &format!("Logged service on {} (id {})", log.vessel_name, log.id),
                Some(json!({ "sea_time_log": log })),
            )
        }
        SeaTimeCommands::Update { id, file } => {
            let payload: SeaTimeLogPayload = read_payload(file.as_deref())?;
            let log = ctx.gateway.update_sea_time_log(id, &payload).await?;
            output_success(
                &output_format,
                &format!("Updated sea time log {}", log.id),
                Some(json!({ "sea_time_log": log })),
            )
        }
        SeaTimeCommands::Delete { id } => {
            ctx.gateway.delete_sea_time_log(id).await?;
            output_success(&output_format, &format!("Deleted sea time log {}", id), Some(json!({ "id": id })))
        }
    }
}

fn print_table(logs: &[SeaTimeLog]) {
    println!("{:<6} {:<24} {:<10} {:<14} {:<12} {}", "ID", "VESSEL", "IMO", "RANK", "SIGN ON", "SIGN OFF");
    println!("{}", "-".repeat(84));
    for l in logs {
        println!(
            "{:<6} {:<24} {:<10} {:<14} {:<12} {}",
            l.id, l.vessel_name, l.imo, l.rank, l.sign_on, l.sign_off
        );
    }
}
