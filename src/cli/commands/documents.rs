use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{Document, DocumentPatch, DocumentPayload, RecordStatus};
use crate::quota::UploadGate;

#[derive(Subcommand)]
pub enum DocumentCommands {
    #[command(about = "List documents")]
    List {
        #[arg(long, help = "Only archived (true) or only active (false) documents")]
        archived: Option<bool>,
    },

    #[command(about = "Show one document")]
    Get {
        #[arg(help = "Document ID")]
        id: i64,
    },

    #[command(about = "Create a document from a JSON payload")]
    Create {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Patch a document from a JSON payload")]
    Update {
        #[arg(help = "Document ID")]
        id: i64,
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Move a document to the archive")]
    Archive {
        #[arg(help = "Document ID")]
        id: i64,
    },

    #[command(about = "Restore a document from the archive")]
    Unarchive {
        #[arg(help = "Document ID")]
        id: i64,
    },

    #[command(about = "Delete a document")]
    Delete {
        #[arg(help = "Document ID")]
        id: i64,
    },

    #[command(about = "Upload a document file after checking type, size and quota")]
    Upload {
        #[arg(help = "Path to the document file")]
        path: PathBuf,
        #[arg(long, help = "Document name (defaults to the file name)")]
        name: Option<String>,
        #[arg(long = "type", help = "Document type, e.g. Passport")]
        doc_type: String,
        #[arg(long, default_value = "Category", help = "Category label")]
        category: String,
        #[arg(long, default_value = "", help = "Expiry date (YYYY-MM-DD)")]
        expiry: String,
        #[arg(long, help = "Issue date (defaults to now)")]
        issue_date: Option<String>,
    },
}

pub async fn handle(cmd: DocumentCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: DocumentCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DocumentCommands::List { archived } => {
            let documents = ctx.gateway.list_documents(archived).await?;
            if documents.is_empty() {
                return output_empty_collection(&output_format, "documents", "No documents found");
            }
            output_value(&output_format, "documents", &documents, |items| print_table(items))
        }
        DocumentCommands::Get { id } => {
            let document = ctx.gateway.get_document(id).await?;
            output_value(&output_format, "document", &document, |d| print_table(std::slice::from_ref(d)))
        }
        DocumentCommands::Create { file } => {
            let payload: DocumentPayload = read_payload(file.as_deref())?;
            let candidate = embedded_upload(&payload.doc_name, &payload.doc)?;
            let gate = UploadGate::new(ctx.gateway.clone(), ctx.policy.clone());
            let document = gate.upload_document(&candidate, &payload).await?;
            output_success(
                &output_format,
                &format!("Created document {} (id {})", document.doc_name, document.id),
                Some(json!({ "document": document })),
            )
        }
        DocumentCommands::Update { id, file } => {
            let patch: DocumentPatch = read_payload(file.as_deref())?;
            if let Some(body) = &patch.doc {
                let candidate = embedded_upload(patch.doc_name.as_deref().unwrap_or_default(), body)?;
                UploadGate::new(ctx.gateway.clone(), ctx.policy.clone()).check(&candidate).await?;
            }
            let document = ctx.gateway.update_document(id, &patch).await?;
            output_success(
                &output_format,
                &format!("Updated document {}", document.id),
                Some(json!({ "document": document })),
            )
        }
        DocumentCommands::Archive { id } => set_archived(ctx, &output_format, id, true).await,
        DocumentCommands::Unarchive { id } => set_archived(ctx, &output_format, id, false).await,
        DocumentCommands::Delete { id } => {
            ctx.gateway.delete_document(id).await?;
            output_success(&output_format, &format!("Deleted document {}", id), Some(json!({ "id": id })))
        }
        DocumentCommands::Upload { path, name, doc_type, category, expiry, issue_date } => {
            let (candidate, encoded) = load_upload(&path)?;
            let now = chrono::Utc::now();
            let payload = DocumentPayload {
                doc_id: format!("DOC-{}", now.timestamp_millis()),
                doc: encoded,
                doc_type,
                category,
                status: RecordStatus::Valid,
                expiry,
                doc_name: name.unwrap_or_else(|| candidate.file_name.clone()),
                issue_date: issue_date.unwrap_or_else(now_iso),
                upload_date: now.to_rfc3339(),
                hidden: false,
            };

            let gate = UploadGate::new(ctx.gateway.clone(), ctx.policy.clone());
            let document = gate.upload_document(&candidate, &payload).await?;
            output_success(
                &output_format,
                &format!("Uploaded {} as document {}", candidate.file_name, document.id),
                Some(json!({ "document": document })),
            )
        }
    }
}

async fn set_archived(ctx: &Context, output_format: &OutputFormat, id: i64, archived: bool) -> anyhow::Result<()> {
    let document = ctx.gateway.set_document_archived(id, archived).await?;
    let verb = if archived { "Archived" } else { "Restored" };
    output_success(
        output_format,
        &format!("{} document {}", verb, document.id),
        Some(json!({ "document": document })),
    )
}

fn print_table(documents: &[Document]) {
    println!("{:<6} {:<28} {:<14} {:<14} {:<10} {}", "ID", "NAME", "TYPE", "CATEGORY", "STATUS", "EXPIRY");
    println!("{}", "-".repeat(90));
    for d in documents {
        let archived = if d.archived { " (archived)" } else { "" };
        println!(
            "{:<6} {:<28} {:<14} {:<14} {:<10} {}{}",
            d.id,
            d.doc_name,
            d.doc_type,
            d.category,
            d.status.as_str(),
            d.expiry,
            archived
        );
    }
}
