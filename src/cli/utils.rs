use anyhow::Context as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::future::Future;
use std::io::{BufRead, Read};
use std::path::Path;

use crate::cli::{Context, OutputFormat};
use crate::quota::UploadCandidate;
use crate::session::{Navigator, Route, SessionGuard};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(body)) = (data, response.as_object_mut()) {
                body.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                collection_name: []
            }))?);
        }
        OutputFormat::Text => {
            println!("{}", message);
        }
    }
    Ok(())
}

/// Output a record or collection: JSON under `key`, or via the text renderer
pub fn output_value<T, F>(
    output_format: &OutputFormat,
    key: &str,
    value: &T,
    render_text: F,
) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ key: value }))?);
        }
        OutputFormat::Text => render_text(value),
    }
    Ok(())
}

/// Decode a JSON payload from `file`, or from stdin when no file is given
pub fn read_payload<T: DeserializeOwned>(file: Option<&Path>) -> anyhow::Result<T> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read payload from stdin")?;
            buffer
        }
    };

    parse_payload(&raw)
}

pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).context("Invalid JSON payload")
}

/// Use the provided password, or read the first line of stdin
pub fn resolve_password(provided: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = provided {
        return Ok(password);
    }

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("Password is required (use --password or pipe it on stdin)");
    }
    Ok(password)
}

/// Load a local file as an upload candidate plus its base64 payload
pub fn load_upload(path: &Path) -> anyhow::Result<(UploadCandidate, String)> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();

    let candidate = UploadCandidate::new(file_name, content_type, bytes.len() as u64);
    Ok((candidate, BASE64_STANDARD.encode(&bytes)))
}

/// Candidate for a file body already embedded in a JSON payload, either bare
/// base64 or a `data:<type>;base64,` URL. The content type comes from the
/// data URL header, else from the file name.
pub fn embedded_upload(file_name: &str, encoded: &str) -> anyhow::Result<UploadCandidate> {
    let (declared_type, body) = match encoded.strip_prefix("data:").and_then(|rest| rest.split_once(',')) {
        Some((header, body)) => (header.split(';').next().filter(|t| !t.is_empty()), body),
        None => (None, encoded),
    };

    let bytes = BASE64_STANDARD
        .decode(body.trim())
        .with_context(|| format!("File body for {} is not valid base64", file_name))?;
    let content_type = match declared_type {
        Some(declared) => declared.to_string(),
        None => mime_guess::from_path(file_name).first_or_octet_stream().to_string(),
    };

    Ok(UploadCandidate::new(file_name, content_type, bytes.len() as u64))
}

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Terminal stand-in for client-side navigation
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => eprintln!("Not signed in. Run `mtp auth login <email>` first."),
            Route::Dashboard => eprintln!("Signed in. Try `mtp dashboard summary`."),
        }
    }
}

/// Run a protected command body only when a session token is present
pub async fn guarded<F, Fut>(ctx: &Context, body: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let mut guard = SessionGuard::new(ctx.session.clone());
    match guard.render(&CliNavigator, body) {
        Some(command) => command.await,
        None => Ok(()),
    }
}
