use clap::Subcommand;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::DashboardSummary;

#[derive(Subcommand)]
pub enum DashboardCommands {
    #[command(about = "Sea time, certificate and document statistics with expiry alerts")]
    Summary,
}

pub async fn handle(cmd: DashboardCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || async move {
        match cmd {
            DashboardCommands::Summary => {
                let summary = ctx.gateway.dashboard_summary().await?;
                output_value(&output_format, "summary", &summary, print_summary)
            }
        }
    })
    .await
}

fn print_summary(summary: &DashboardSummary) {
    let sea = &summary.sea_time;
    println!("Sea time: {} days", sea.total_days);
    if let Some(vessel) = &sea.last_vessel {
        println!("Last vessel: {} ({})", vessel, sea.last_rank.as_deref().unwrap_or("-"));
    }

    let certs = &summary.certificates;
    print!(
        "Certificates: {} total, {} valid, {} expiring, {} expired",
        certs.total, certs.valid, certs.expiring, certs.expired
    );
    match certs.compliance_percent {
        Some(percent) => println!(" ({}% compliant)", percent),
        None => println!(),
    }

    let docs = &summary.documents;
    println!(
        "Documents: {} total, {} valid, {} expiring, {} expired",
        docs.total, docs.valid, docs.expiring, docs.expired
    );

    if let Some(nri) = &summary.nri_status {
        let retained = if nri.is_retained { "retained" } else { "not retained" };
        println!(
            "NRI: {} days between {} and {} ({}, {} days remaining)",
            nri.days, nri.start_date, nri.end_date, retained, nri.days_remaining
        );
    }

    if !summary.alerts.is_empty() {
        println!("\nExpiry alerts:");
        for alert in &summary.alerts {
            println!("  [{}] {} in {} days", alert.kind, alert.name, alert.days_remaining);
        }
    }
}
