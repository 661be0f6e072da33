use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::quota::{AlertLevel, UploadGate};

#[derive(Subcommand)]
pub enum StorageCommands {
    #[command(about = "Show storage usage against the configured quota")]
    Status,

    #[command(about = "Check whether a file may be uploaded, without uploading it")]
    Check {
        #[arg(help = "Path to the candidate file")]
        path: PathBuf,
    },
}

pub async fn handle(cmd: StorageCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: StorageCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    let gate = UploadGate::new(ctx.gateway.clone(), ctx.policy.clone());
    let policy = gate.policy();

    match cmd {
        StorageCommands::Status => {
            let (usage_mb, level) = gate.usage().await?;
            let percent = policy.usage_percent(usage_mb);

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({
                        "usage_mb": usage_mb,
                        "max_storage_mb": policy.max_storage_mb,
                        "usage_percent": percent,
                        "remaining_mb": policy.remaining_mb(usage_mb),
                        "level": level,
                    }))?);
                }
                OutputFormat::Text => {
                    println!(
                        "Storage: {:.1}MB of {}MB used ({:.1}%)",
                        usage_mb, policy.max_storage_mb, percent
                    );
                    match level {
                        AlertLevel::Normal => {}
                        AlertLevel::Warning => println!(
                            "Warning: usage is above {}%. Consider archiving old documents.",
                            policy.warning_threshold
                        ),
                        AlertLevel::Critical => println!(
                            "Critical: usage is above {}%. New uploads may be refused.",
                            policy.critical_threshold
                        ),
                    }
                }
            }
            Ok(())
        }
        StorageCommands::Check { path } => {
            let (candidate, _) = load_upload(&path)?;
            let level = gate.check(&candidate).await?;

            output_success(
                &output_format,
                &format!("{} ({}) can be uploaded", candidate.file_name, candidate.content_type),
                Some(json!({ "candidate": candidate, "level": level })),
            )
        }
    }
}
