// Module declarations
mod assets;
mod cli;
mod config;
mod content;
mod document;
mod render;
mod site;
mod tags;
mod toc;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
