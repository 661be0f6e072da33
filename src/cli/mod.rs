pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::ApiGateway;
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::events::{EventBus, ProfileChanged};
use crate::quota::QuotaPolicy;
use crate::session::SessionService;

#[derive(Parser)]
#[command(name = "mtp")]
#[command(about = "MarineTracker CLI - crew records against the MarineTracker backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in, sign out and session status")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Certificate records")]
    Certificates {
        #[command(subcommand)]
        cmd: commands::certificates::CertificateCommands,
    },

    #[command(about = "Document records, archiving and uploads")]
    Documents {
        #[command(subcommand)]
        cmd: commands::documents::DocumentCommands,
    },

    #[command(about = "Sea time log entries")]
    Seatime {
        #[command(subcommand)]
        cmd: commands::seatime::SeaTimeCommands,
    },

    #[command(about = "Show or update the signed-in profile")]
    Profile {
        #[command(subcommand)]
        cmd: commands::profile::ProfileCommands,
    },

    #[command(about = "Document and certificate categories")]
    Categories {
        #[command(subcommand)]
        cmd: commands::categories::CategoryCommands,
    },

    #[command(about = "Resume drafts")]
    Resumes {
        #[command(subcommand)]
        cmd: commands::resumes::ResumeCommands,
    },

    #[command(about = "Dashboard statistics")]
    Dashboard {
        #[command(subcommand)]
        cmd: commands::dashboard::DashboardCommands,
    },

    #[command(about = "Storage usage and upload eligibility")]
    Storage {
        #[command(subcommand)]
        cmd: commands::storage::StorageCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Everything a command handler needs, wired once per invocation
pub struct Context {
    pub session: Arc<SessionService>,
    pub gateway: Arc<ApiGateway>,
    pub bus: EventBus<ProfileChanged>,
    pub policy: QuotaPolicy,
}

impl Context {
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let session = Arc::new(SessionService::from_config(config)?);
        let gateway = Arc::new(ApiGateway::from_config(config, session.clone())?);

        Ok(Self {
            session,
            gateway,
            bus: EventBus::new(),
            policy: QuotaPolicy::from_config(config),
        })
    }
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let ctx = Context::from_config(config)?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &ctx, output_format).await,
        Commands::Certificates { cmd } => commands::certificates::handle(cmd, &ctx, output_format).await,
        Commands::Documents { cmd } => commands::documents::handle(cmd, &ctx, output_format).await,
        Commands::Seatime { cmd } => commands::seatime::handle(cmd, &ctx, output_format).await,
        Commands::Profile { cmd } => commands::profile::handle(cmd, &ctx, output_format).await,
        Commands::Categories { cmd } => commands::categories::handle(cmd, &ctx, output_format).await,
        Commands::Resumes { cmd } => commands::resumes::handle(cmd, &ctx, output_format).await,
        Commands::Dashboard { cmd } => commands::dashboard::handle(cmd, &ctx, output_format).await,
        Commands::Storage { cmd } => commands::storage::handle(cmd, &ctx, output_format).await,
    }
}
