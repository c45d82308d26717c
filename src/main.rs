//! MediCompanion - terminal front-end
//!
//! Chat with the care agent and browse the data API from a terminal.

use std::path::Path;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use medicompanion::chat::FAILURE_NOTICE;
use medicompanion::{AppState, Attachment, ChatSession, Config, DataClient, NamedAttachment};

const HELP: &str = "Commands: /attach <path>, /doctors, /appointments, /reports, /report <filename>, /help, /quit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medicompanion=info".into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting MediCompanion");

    let config = Config::from_env()?;
    info!(agent = %config.agent_api_url, data = %config.data_api_url, "Configuration loaded successfully");

    let state = AppState::new(config)?;
    let mut chat = state.chat();
    info!(session_id = %state.agent_client.session_id(), "Conversation ready");

    if let Some(welcome) = chat.messages().first() {
        println!("agent> {}", welcome.text);
    }
    println!("{}", HELP);

    let mut staged: Option<NamedAttachment> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/attach", path) => staged = stage_attachment(path.trim()).await,
            ("/doctors", _) => print_doctors(&state.data_client).await,
            ("/appointments", _) => print_appointments(&state.data_client).await,
            ("/reports", _) => print_reports(&state.data_client).await,
            ("/report", filename) => print_report(&state.data_client, filename.trim()).await,
            _ => send(&mut chat, line, &mut staged).await,
        }
    }

    info!("MediCompanion shutdown complete");
    Ok(())
}

async fn send(chat: &mut ChatSession, text: &str, staged: &mut Option<NamedAttachment>) {
    if text.is_empty() && staged.is_none() {
        return;
    }

    match chat.send(text, staged.take()).await {
        Ok(reply) => println!("agent> {}", reply.text),
        Err(e) => {
            warn!(error = %e, "Chat exchange failed");
            println!("system> {}", chat.notify(FAILURE_NOTICE).text);
        }
    }
}

async fn stage_attachment(path: &str) -> Option<NamedAttachment> {
    if path.is_empty() {
        println!("usage: /attach <path>");
        return None;
    }

    match Attachment::from_file(path).await {
        Ok(attachment) => {
            let name = Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string());
            println!("attached {} ({})", name, attachment.mime_type);
            Some(NamedAttachment { name, attachment })
        }
        Err(e) => {
            warn!(error = %e, path = %path, "Could not read attachment");
            println!("could not read {}: {}", path, e);
            None
        }
    }
}

async fn print_doctors(data: &DataClient) {
    for (name, doctor) in data.get_doctors().await {
        println!("{} - {} [{}]", name, doctor.specialty, doctor.free_time.join(", "));
    }
}

async fn print_appointments(data: &DataClient) {
    let appointments = data.get_appointments().await;
    if appointments.is_empty() {
        println!("no appointments");
    }
    for appt in appointments {
        println!("{} at {} (booked {})", appt.doctor, appt.time_slot, appt.booked_at);
    }
}

async fn print_reports(data: &DataClient) {
    match data.get_reports_summary().await {
        Some(summaries) if !summaries.is_empty() => {
            for s in summaries {
                println!(
                    "{}: {} | {} | {}",
                    s.filename.as_deref().unwrap_or("?"),
                    s.date,
                    s.diagnosis,
                    s.medicines
                );
            }
        }
        Some(_) => println!("no reports"),
        None => println!("reports unavailable"),
    }
}

async fn print_report(data: &DataClient, filename: &str) {
    if filename.is_empty() {
        println!("usage: /report <filename>");
        return;
    }

    match data.get_report_content(filename).await {
        Some(content) => println!("{}", content),
        None => println!("report {} not found", filename),
    }
}
