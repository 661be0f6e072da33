use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{Context, OutputFormat};
use crate::models::RegisterRequest;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Sign in and store the session token")]
    Login {
        #[arg(help = "Email address")]
        email: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Keep the session across restarts and remember the email")]
        remember: bool,
    },

    #[command(about = "Create a new account")]
    Register {
        #[arg(help = "Email address")]
        email: String,
        #[arg(long, help = "First name")]
        first_name: String,
        #[arg(long, help = "Last name")]
        last_name: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Phone number")]
        phone: Option<String>,
        #[arg(long, help = "Job title")]
        job_title: Option<String>,
    },

    #[command(about = "Discard the stored session token")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,
}

pub async fn handle(cmd: AuthCommands, ctx: &Context, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password, remember } => {
            let password = resolve_password(password)?;
            let token = ctx.gateway.sign_in(&email, &password, remember).await?;

            output_success(
                &output_format,
                &format!("Signed in as {}", email),
                Some(json!({
                    "email": email,
                    "persistent": remember,
                    "token_type": token.token_type,
                })),
            )
        }
        AuthCommands::Register { email, first_name, last_name, password, phone, job_title } => {
            let request = RegisterRequest {
                first_name,
                last_name,
                email,
                password: resolve_password(password)?,
                phone,
                job_title,
            };
            let profile = ctx.gateway.register(&request).await?;

            output_success(
                &output_format,
                &format!("Registered {} (id {})", profile.email, profile.id),
                Some(json!({ "profile": profile })),
            )
        }
        AuthCommands::Logout => {
            ctx.gateway.sign_out()?;
            output_success(&output_format, "Signed out", None)
        }
        AuthCommands::Status => {
            let authenticated = ctx.session.is_authenticated();
            let persistent = ctx.session.is_persistent();
            let remembered = ctx.session.remembered_user();

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({
                        "authenticated": authenticated,
                        "persistent": persistent,
                        "remembered_user": remembered,
                        "backend": ctx.gateway.base_url(),
                    }))?);
                }
                OutputFormat::Text => {
                    println!("Backend: {}", ctx.gateway.base_url());
                    if authenticated {
                        let kind = if persistent { "persistent" } else { "this session only" };
                        println!("Signed in ({})", kind);
                    } else {
                        println!("Not signed in");
                    }
                    if let Some(email) = remembered {
                        println!("Remembered user: {}", email);
                    }
                }
            }
            Ok(())
        }
    }
}
