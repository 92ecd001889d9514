//! Prints the federation SDL of the users subgraph.
//!
//! Usage: cargo run --bin export_schema [output_path]

use anyhow::Context;
use std::sync::Arc;

use users_subgraph::modules::users::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use users_subgraph::shell::graphql::{AppState, build_schema, federation_sdl};

fn main() -> anyhow::Result<()> {
    let schema = build_schema(AppState::new(Arc::new(InMemoryUserDirectory::new())))?;
    let sdl = federation_sdl(&schema);

    match std::env::args().nth(1) {
        Some(out_path) => {
            std::fs::write(&out_path, &sdl).with_context(|| format!("failed to write {out_path}"))?;
            eprintln!("Schema exported to {out_path} ({} bytes)", sdl.len());
        }
        None => println!("{sdl}"),
    }
    Ok(())
}
