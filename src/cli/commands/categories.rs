use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{Category, CategoryCreate, CategoryScope, CategoryUpdate};

#[derive(Subcommand)]
pub enum CategoryCommands {
    #[command(about = "List categories (both scopes unless --scope is given)")]
    List {
        #[arg(long, help = "document or certificate")]
        scope: Option<CategoryScope>,
    },

    #[command(about = "Create a category from a JSON payload")]
    Create {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a category from a JSON payload")]
    Update {
        #[arg(help = "Category ID")]
        id: i64,
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a user category (system categories are refused by the backend)")]
    Delete {
        #[arg(help = "Category ID")]
        id: i64,
    },
}

pub async fn handle(cmd: CategoryCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: CategoryCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        CategoryCommands::List { scope } => {
            let categories = match scope {
                Some(scope) => ctx.gateway.list_categories(scope).await?,
                None => {
                    let (mut documents, certificates) = futures::future::try_join(
                        ctx.gateway.list_categories(CategoryScope::Document),
                        ctx.gateway.list_categories(CategoryScope::Certificate),
                    )
                    .await?;
                    documents.extend(certificates);
                    documents
                }
            };

            if categories.is_empty() {
                return output_empty_collection(&output_format, "categories", "No categories found");
            }
            output_value(&output_format, "categories", &categories, |items| print_table(items))
        }
        CategoryCommands::Create { file } => {
            let category: CategoryCreate = read_payload(file.as_deref())?;
            let created = ctx.gateway.create_category(&category).await?;
            output_success(
                &output_format,
                &format!("Created {} category {} (id {})", created.scope, created.label, created.id),
                Some(json!({ "category": created })),
            )
        }
        CategoryCommands::Update { id, file } => {
            let update: CategoryUpdate = read_payload(file.as_deref())?;
            let updated = ctx.gateway.update_category(id, &update).await?;
            output_success(
                &output_format,
                &format!("Updated category {}", updated.id),
                Some(json!({ "category": updated })),
            )
        }
        CategoryCommands::Delete { id } => {
            ctx.gateway.delete_category(id).await?;
            output_success(&output_format, &format!("Deleted category {}", id), Some(json!({ "id": id })))
        }
    }
}

fn print_table(categories: &[Category]) {
    println!("{:<6} {:<24} {:<12} {:<10} {:<12} {}", "ID", "LABEL", "SCOPE", "COLOR", "ICON", "PATTERN");
    println!("{}", "-".repeat(80));
    for c in categories {
        let marker = if c.is_system { "*" } else { " " };
        println!(
            "{}{:<5} {:<24} {:<12} {:<10} {:<12} {}",
            marker,
            c.id,
            c.label,
            c.scope,
            c.color,
            c.icon,
            c.pattern.as_deref().unwrap_or("")
        );
    }
}
