mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use omniwriter_core::{ContentType, Language, Length, Tone};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omniwriter")]
#[command(about = "Multilingual AI writing assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON API for the browser front end
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Generate one piece of writing and print it
    Generate {
        prompt: String,
        #[arg(short, long, default_value_t = Language::default())]
        language: Language,
        #[arg(short = 't', long = "type", default_value_t = ContentType::default())]
        content_type: ContentType,
        #[arg(long, default_value_t = Tone::default())]
        tone: Tone,
        #[arg(long, default_value_t = Length::default())]
        length: Length,
        /// Ground the answer with web search
        #[arg(long)]
        search: bool,
        /// Spend a thinking budget; takes precedence over --search
        #[arg(long)]
        thinking: bool,
        /// Also store the result in history
        #[arg(long)]
        save: bool,
    },
    /// Print the most recent history records
    History {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Delete one history record
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(&config, &host, port.unwrap_or(config.port)).await?;
        },
        Commands::Generate {
            prompt,
            language,
            content_type,
            tone,
            length,
            search,
            thinking,
            save,
        } => {
            let request = omniwriter_core::GenerationRequest::new(prompt)
                .with_language(language)
                .with_content_type(content_type)
                .with_tone(tone)
                .with_length(length)
                .with_search(search)
                .with_extended_reasoning(thinking);
            commands::generate::run(&config, &request, save).await?;
        },
        Commands::History { limit } => commands::history::run_list(&config, limit).await?,
        Commands::Delete { id } => commands::history::run_delete(&config, &id).await?,
    }

    Ok(())
}
