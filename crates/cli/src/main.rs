use clap::Parser;
use commands::Commands;
use error::CliError;
use hek_query::Walker;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod document;
mod error;
mod output;

/// Environment variable holding the log filter, e.g. `HEKQ_LOG=hek_query=debug`.
const LOG_ENV: &str = "HEKQ_LOG";

#[derive(Parser)]
#[command(
    name = "hekq",
    version = "0.1.0",
    about = "Build and serialize event knowledgebase queries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            query,
            output,
            pairs,
            simplify,
        } => {
            let mut attr = document::load(&query)?;
            if simplify {
                attr = attr.simplify();
            }

            let blocks = Walker::new().create(&attr)?;
            info!("Query {} serialized into {} request(s)", query, blocks.len());
            output::write_blocks(&blocks, output.as_deref(), pairs)?;
        }
        Commands::Fields { category } => {
            print!("{}", output::format_fields(category.as_deref())?);
        }
        Commands::Events => {
            println!("{}", output::format_events());
        }
    }

    Ok(())
}
