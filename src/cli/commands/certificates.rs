use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{Certificate, CertificatePayload, RecordStatus};
use crate::quota::UploadGate;

#[derive(Subcommand)]
pub enum CertificateCommands {
    #[command(about = "List certificates")]
    List,

    #[command(about = "Show one certificate")]
    Get {
        #[arg(help = "Certificate ID")]
        id: i64,
    },

    #[command(about = "Create a certificate from a JSON payload")]
    Create {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Replace a certificate from a JSON payload")]
    Update {
        #[arg(help = "Certificate ID")]
        id: i64,
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a certificate")]
    Delete {
        #[arg(help = "Certificate ID")]
        id: i64,
    },

    #[command(about = "Upload a certificate file after checking type, size and quota")]
    Upload {
        #[arg(help = "Path to the certificate file")]
        path: PathBuf,
        #[arg(long, help = "Certificate name (defaults to the file name)")]
        name: Option<String>,
        #[arg(long = "type", help = "Certificate type, e.g. STCW")]
        cert_type: String,
        #[arg(long, help = "Issuing authority")]
        issued_by: String,
        #[arg(long, help = "Expiry date (YYYY-MM-DD)")]
        expiry: String,
        #[arg(long, help = "Issue date (defaults to now)")]
        issue_date: Option<String>,
    },
}

pub async fn handle(cmd: CertificateCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: CertificateCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        CertificateCommands::List => {
            let certificates = ctx.gateway.list_certificates().await?;
            if certificates.is_empty() {
                return output_empty_collection(&output_format, "certificates", "No certificates found");
            }
            output_value(&output_format, "certificates", &certificates, |items| print_table(items))
        }
        CertificateCommands::Get { id } => {
            let certificate = ctx.gateway.get_certificate(id).await?;
            output_value(&output_format, "certificate", &certificate, |c| print_table(std::slice::from_ref(c)))
        }
        CertificateCommands::Create { file } => {
            let payload: CertificatePayload = read_payload(file.as_deref())?;
            let candidate = embedded_upload(&payload.cert_name, &payload.cert)?;
            let gate = UploadGate::new(ctx.gateway.clone(), ctx.policy.clone());
            let certificate = gate.upload_certificate(&candidate, &payload).await?;
            output_success(
                &output_format,
                &format!("Created certificate {} (id {})", certificate.cert_name, certificate.id),
                Some(json!({ "certificate": certificate })),
            )
        }
        CertificateCommands::Update { id, file } => {
            let payload: CertificatePayload = read_payload(file.as_deref())?;
            let candidate = embedded_upload(&payload.cert_name, &payload.cert)?;
            UploadGate::new(ctx.gateway.clone(), ctx.policy.clone()).check(&candidate).await?;
            let certificate = ctx.gateway.update_certificate(id, &payload).await?;
            output_success(
                &output_format,
                &format!("Updated certificate {}", certificate.id),
                Some(json!({ "certificate": certificate })),
            )
        }
        CertificateCommands::Delete { id } => {
            ctx.gateway.delete_certificate(id).await?;
            output_success(&output_format, &format!("Deleted certificate {}", id), Some(json!({ "id": id })))
        }
        CertificateCommands::Upload { path, name, cert_type, issued_by, expiry, issue_date } => {
            let (candidate, encoded) = load_upload(&path)?;
            let now = now_iso();
            let payload = CertificatePayload {
                cert: encoded,
                cert_type,
                issued_by,
                status: RecordStatus::Valid,
                expiry,
                cert_name: name.unwrap_or_else(|| candidate.file_name.clone()),
                issue_date: issue_date.unwrap_or_else(|| now.clone()),
                upload_date: now,
                hidden: false,
            };

            let gate = UploadGate::new(ctx.gateway.clone(), ctx.policy.clone());
            let certificate = gate.upload_certificate(&candidate, &payload).await?;
            output_success(
                &output_format,
                &format!("Uploaded {} as certificate {}", candidate.file_name, certificate.id),
                Some(json!({ "certificate": certificate })),
            )
        }
    }
}

fn print_table(certificates: &[Certificate]) {
    println!("{:<6} {:<30} {:<12} {:<10} {}", "ID", "NAME", "TYPE", "STATUS", "EXPIRY");
    println!("{}", "-".repeat(74));
    for c in certificates {
        let hidden = if c.hidden { " (hidden)" } else { "" };
        println!(
            "{:<6} {:<30} {:<12} {:<10} {}{}",
            c.id,
            c.cert_name,
            c.cert_type,
            c.status.as_str(),
            c.expiry,
            hidden
        );
    }
}
