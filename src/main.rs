// MITK Assistant - Main Entry Point
// Terminal chat client for the MITK college assistant

mod api_client;
mod config;
mod pipeline;
mod state;
mod ui;

use std::io::Write;

use api_client::BackendClient;
use config::ClientConfig;
use mitk_backend::knowledge::FaqStore;
use owo_colors::OwoColorize;
use pipeline::Resolver;
use state::ChatSession;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Longest message accepted from the prompt, in characters
const MAX_INPUT_CHARS: usize = 500;

/// One line of user input
#[derive(Debug, PartialEq)]
enum Input<'a> {
    /// Blank line
    Empty,
    /// Start a new chat
    NewChat,
    /// Toggle English/Kannada
    ToggleLanguage,
    /// Show confidence and sources of the last answer
    Sources,
    /// Leave the REPL
    Quit,
    /// Anything starting with `/` that is not a known command
    Unknown(&'a str),
    /// Over the length limit
    TooLong(usize),
    /// A question for the assistant
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Empty,
        "/new" => Input::NewChat,
        "/lang" => Input::ToggleLanguage,
        "/sources" => Input::Sources,
        "/quit" | "/exit" => Input::Quit,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        text => {
            let chars = text.chars().count();
            if chars > MAX_INPUT_CHARS {
                Input::TooLong(chars)
            } else {
                Input::Message(text)
            }
        }
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{} ", "you>".bold())?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with answers; quiet by default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::debug!(?config, "Client configuration loaded");

    let faq = FaqStore::load_or_empty(&config.faq_path);
    let remote = BackendClient::new(
        &config.backend_url,
        config.chat_timeout,
        config.health_timeout,
    );
    let resolver = Resolver::new(faq, remote, config.history_window);

    let mut session = ChatSession::new(config.backend_enabled);
    println!("{}", ui::status_badge(session.remote_status()));
    resolver.establish_health(&mut session).await;
    println!("{}", ui::render_welcome(&session));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::NewChat => {
                session.reset();
                println!("{}", ui::render_welcome(&session));
            }
            Input::ToggleLanguage => {
                let language = session.toggle_language();
                println!("{}", ui::render_language_notice(language));
            }
            Input::Sources => match session.last_response() {
                Some(response) => println!("{}", ui::render_sources(response)),
                None => println!("{}", "No answer yet.".dimmed()),
            },
            Input::Unknown(cmd) => {
                println!("Unknown command {}. {}", cmd, ui::render_help());
            }
            Input::TooLong(chars) => {
                println!(
                    "{}",
                    format!(
                        "Message is too long ({} characters, limit {}).",
                        chars, MAX_INPUT_CHARS
                    )
                    .yellow()
                );
            }
            Input::Message(text) => {
                let was_available = session.remote_status().is_available();
                println!("{}", "AI is thinking...".dimmed());

                let response = resolver.resolve(&mut session, text).await;

                if was_available && !session.remote_status().is_available() {
                    println!(
                        "{} {}",
                        ui::status_badge(session.remote_status()),
                        session.language.strings().backend_offline
                    );
                }
                println!("\n{}\n", ui::render_answer(&response));
            }
        }
        prompt()?;
    }

    println!("Goodbye!");
    Ok(())
}
