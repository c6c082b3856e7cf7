//! Lexdoc CLI — command-line client for the case document service.
//!
//! Set LEXDOC_TOKEN, LEXDOC_USER_ID, LEXDOC_ROLE and LEXDOC_API_URL.
//! Uses Bearer token auth.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexdoc_client::ApiClient;
use lexdoc_cli::{init_tracing, parse_document_id, truncate_string};
use lexdoc_core::models::{Preview, QueuedFile};
use lexdoc_core::DocumentApi;
use lexdoc_preview::generate_preview;
use lexdoc_services::{DocumentBrowser, ProgressMap, TypeFilter, UploadQueue, Uploader};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lexdoc", about = "Case document CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, stage and upload files to a case
    Upload {
        /// Case ID to attach the documents to
        #[arg(long)]
        case: i64,
        /// Paths of the files to upload
        files: Vec<std::path::PathBuf>,
    },
    /// Generate a local preview of a file without uploading it
    Preview {
        /// Path to the file to preview
        file: std::path::PathBuf,
    },
    /// List a case's documents with optional filtering
    List {
        /// Case ID
        #[arg(long)]
        case: i64,
        /// Case-insensitive substring to match against name or type
        #[arg(long, default_value = "")]
        query: String,
        /// Document type to match exactly, or ALL
        #[arg(long, default_value = "ALL")]
        r#type: String,
    },
    /// Get a case's total document count
    Count {
        /// Case ID
        #[arg(long)]
        case: i64,
    },
    /// Get a single document's details by ID
    Get {
        /// Document UUID
        id: String,
    },
    /// Download a document and preview its content
    View {
        /// Document UUID
        id: String,
    },
    /// Save a document to a local file
    Download {
        /// Document UUID
        id: String,
        /// Destination path
        output: std::path::PathBuf,
    },
    /// Delete a document by ID
    Delete {
        /// Document UUID
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env().context(
        "Failed to create API client. Set LEXDOC_TOKEN, LEXDOC_USER_ID, LEXDOC_ROLE and LEXDOC_API_URL",
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { case, files } => {
            let role = client.session().role;
            let uploader_id = client.session().user_id;

            let mut queue = UploadQueue::new();
            let report = queue.submit(&files, role);

            if report.accepted.is_empty() {
                print_json(&serde_json::json!({ "intake": report }))?;
                return Ok(());
            }

            let mut browser = DocumentBrowser::new(case);
            let mut progress = ProgressMap::default();
            let outcome = Uploader::new()
                .upload_all(&mut queue, &mut progress, &mut browser, &client, uploader_id)
                .await;

            print_json(&serde_json::json!({
                "intake": report,
                "outcome": outcome,
                "documents": browser.documents(),
            }))?;
        }
        Commands::Preview { file } => {
            let staged = QueuedFile::from_path(&file)
                .with_context(|| format!("Cannot read file: {}", file.display()))?;
            let preview = generate_preview(&staged).await;
            if let Preview::Text { content, .. } = &preview {
                tracing::info!(excerpt = %truncate_string(content, 120), "text preview generated");
            }
            print_json(&preview)?;
        }
        Commands::List { case, query, r#type } => {
            let mut browser = DocumentBrowser::new(case);
            browser.refresh(&client).await?;
            let filter = TypeFilter::parse(&r#type);
            print_json(&serde_json::json!({
                "documents": browser.filter(&query, &filter),
                "availableTypes": browser.distinct_types(),
            }))?;
        }
        Commands::Count { case } => {
            let browser = DocumentBrowser::new(case);
            let count = browser.document_count(&client).await;
            print_json(&serde_json::json!({ "caseId": case, "count": count }))?;
        }
        Commands::Get { id } => {
            let document_id = parse_document_id(&id)?;
            let response = client.document_details(document_id).await?;
            print_json(&response)?;
        }
        Commands::View { id } => {
            let document_id = parse_document_id(&id)?;
            let preview = lexdoc_services::preview_document(&client, document_id).await;
            print_json(&preview)?;
        }
        Commands::Download { id, output } => {
            let document_id = parse_document_id(&id)?;
            let bytes = lexdoc_services::save_document(&client, document_id, &output).await?;
            print_json(&serde_json::json!({
                "saved": output,
                "bytes": bytes,
            }))?;
        }
        Commands::Delete { id, yes } => {
            let document_id = parse_document_id(&id)?;
            lexdoc_services::delete_document(&client, document_id, yes).await?;
            print_json(
                &serde_json::json!({ "success": true, "message": format!("Document {} deleted", document_id) }),
            )?;
        }
    }

    Ok(())
}
