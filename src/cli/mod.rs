pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Build { .. }) => {
            commands::handle_build_command(command, cli.config.as_ref()).await;
        }
        Some(command @ types::Commands::Render { .. }) => {
            commands::handle_render_command(command, cli.config.as_ref()).await;
        }
        Some(command @ types::Commands::Outline { .. }) => {
            commands::handle_outline_command(command, cli.config.as_ref()).await;
        }
        Some(command @ types::Commands::Tags { .. }) => {
            commands::handle_tags_command(command, cli.config.as_ref()).await;
        }
        None => {
            // Default to build with default options if no command provided
            let command = types::Commands::Build {
                destination: None,
                drafts: false,
                quiet: false,
                verbose: false,
            };
            commands::handle_build_command(&command, cli.config.as_ref()).await;
        }
    }
}
