use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::{Profile, ProfileUpdate, ProfileView};
use crate::profile::{save_profile, ProfileSync};

#[derive(Subcommand)]
pub enum ProfileCommands {
    #[command(about = "Show the signed-in profile")]
    Show,

    #[command(about = "Update the profile from a JSON payload")]
    Update {
        #[arg(long, help = "Payload file (reads stdin if omitted)")]
        file: Option<PathBuf>,
    },
}

pub async fn handle(cmd: ProfileCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    guarded(ctx, || run(cmd, ctx, output_format)).await
}

async fn run(cmd: ProfileCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ProfileCommands::Show => {
            let profile = ctx.gateway.get_profile().await?;
            output_value(&output_format, "profile", &profile, print_profile)
        }
        ProfileCommands::Update { file } => {
            let update: ProfileUpdate = read_payload(file.as_deref())?;

            // The header badge: refreshed by the broadcast, not by the save
            let badge = ProfileSync::mount(ctx.gateway.clone(), &ctx.bus).await;
            let profile = save_profile(&ctx.gateway, &ctx.bus, &update).await?;

            if !badge.wait_for_fetches(2, Duration::from_secs(5)).await {
                tracing::warn!("Profile view was not refreshed after update");
            }
            let view = badge.view().unwrap_or_else(|| ProfileView::from(&profile));

            output_success(
                &output_format,
                &format!("Updated profile for {}", view.display_name()),
                Some(json!({ "profile": profile, "view": view })),
            )
        }
    }
}

fn print_profile(profile: &Profile) {
    let view = ProfileView::from(profile);
    println!("{} [{}]", view.display_name(), view.initials());
    println!("Email: {}", profile.email);

    let optional = [
        ("Job title", &profile.job_title),
        ("Phone", &profile.phone),
        ("Date of birth", &profile.dob),
        ("Gender", &profile.gender),
        ("Address", &profile.address),
        ("Avatar", &profile.avatar_url),
        ("Bio", &profile.bio),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }

    if !profile.skills.is_empty() {
        println!("Skills: {}", profile.skills.join(", "));
    }
}
