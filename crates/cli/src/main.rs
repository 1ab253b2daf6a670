use crate::{
    compile::{Overrides, compile_file, load_config},
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use rql_compiler::{CompilerRegistry, register_builtin_dialects};
use tracing_subscriber::EnvFilter;

mod commands;
mod compile;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "rql", version = "0.1.0", about = "RQL to SQL filter compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout only carries SQL.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = CompilerRegistry::global();
    register_builtin_dialects(registry)?;

    match cli.command {
        Commands::Compile {
            input,
            config,
            dialect,
            fields,
            max_records,
            output,
        } => {
            let config = load_config(
                config.as_deref(),
                Overrides {
                    dialect,
                    fields,
                    max_records,
                },
            )?;
            let sql = compile_file(registry, &config, &input)?;
            output::emit(&sql, output.as_deref())?;
        }
        Commands::Dialects { json } => {
            let listing = output::dialect_list(&registry.dialects(), json)?;
            output::emit(&listing, None)?;
        }
    }

    Ok(())
}
