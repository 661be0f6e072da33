use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{ResumeDraft, ResumeDraftCreate, ResumeDraftUpdate};

#[derive(Subcommand)]
pub enum ResumeCommands {
    #[command(about = "List resume drafts")]
    List,

    #[command(about = "Show one resume draft with its data")]
    Get {
        #[arg(help = "Draft ID")]
        id: i64,
    },

    #[command(about = "Create a draft from a JSON payload")]
    Create {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a draft from a JSON payload")]
    Update {
        #[arg(help = "Draft ID")]
        id: i64,
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a draft")]
    Delete {
        #[arg(help = "Draft ID")]
        id: i64,
    },
}

pub async fn handle(cmd: ResumeCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: ResumeCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ResumeCommands::List => {
            let drafts = ctx.gateway.list_resumes().await?;
            if drafts.is_empty() {
                return output_empty_collection(&output_format, "resumes", "No resume drafts saved");
            }
            output_value(&output_format, "resumes", &drafts, |items| print_table(items))
        }
        ResumeCommands::Get { id } => {
            let draft = ctx.gateway.get_resume(id).await?;
            output_value(&output_format, "resume", &draft, |d| {
                print_table(std::slice::from_ref(d));
                if let Ok(data) = serde_json::to_string_pretty(&d.data) {
                    println!("\n{}", data);
                }
            })
        }
        ResumeCommands::Create { file } => {
            let draft: ResumeDraftCreate = read_payload(file.as_deref())?;
            let created = ctx.gateway.create_resume(&draft).await?;
            output_success(
                &output_format,
                &format!("Saved resume draft {} (id {})", created.name, created.id),
                Some(json!({ "resume": created })),
            )
        }
        ResumeCommands::Update { id, file } => {
            let update: ResumeDraftUpdate = read_payload(file.as_deref())?;
            let updated = ctx.gateway.update_resume(id, &update).await?;
            output_success(
                &output_format,
                &format!("Updated resume draft {}", updated.id),
                Some(json!({ "resume": updated })),
            )
        }
        ResumeCommands::Delete { id } => {
            ctx.gateway.delete_resume(id).await?;
            output_success(&output_format, &format!("Deleted resume draft {}", id), Some(json!({ "id": id })))
        }
    }
}

fn print_table(drafts: &[ResumeDraft]) {
    println!("{:<6} {:<30} {:<28} {}", "ID", "NAME", "CREATED", "UPDATED");
    println!("{}", "-".repeat(90));
    for d in drafts {
        println!("{:<6} {:<30} {:<28} {}", d.id, d.name, d.created_at, d.updated_at);
    }
}
