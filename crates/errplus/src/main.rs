//! errplus - decode and encode structured error payloads.

use clap::Parser;
use errplus::cli::{
    Cli, Commands, handle_decode_command, handle_encode_command, read_input, requeue_flag,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { text, format } => {
            let text = read_input(text, std::io::stdin())?;
            match handle_decode_command(&text, format) {
                Ok(output) => println!("{}", output),
                Err(failure) => {
                    println!("{}", failure);
                    std::process::exit(1);
                }
            }
        }
        Commands::Encode {
            info,
            code,
            cause,
            requeue,
            no_requeue,
            config,
        } => {
            let requeue = requeue_flag(requeue, no_requeue);
            println!(
                "{}",
                handle_encode_command(&info, code, cause, requeue, config)?
            );
        }
    }

    Ok(())
}
