// ABOUTME: Server binary for the Protein Planner API
// ABOUTME: Loads .env and environment configuration, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Protein Planner API Server Binary
//!
//! Starts the HTTP API that computes daily protein targets and themed macro
//! meal plans.

use anyhow::Result;
use clap::Parser;
use protein_api::{config::ServerConfig, constants::endpoints, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "protein-api-server")]
#[command(about = "Protein Planner API - daily protein targets and macro meal plans over HTTP")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                host: None,
                http_port: None,
            }
        }
    };

    // A missing .env file is normal outside local development
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    info!("Starting Protein Planner API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Greeting:          GET  http://{host}:{port}/");
    info!("   Hello:             GET  http://{host}:{port}{}", endpoints::HELLO);
    info!("   Protein Plan:      POST http://{host}:{port}{}", endpoints::PROTEIN);
    info!("   Health Check:      GET  http://{host}:{port}{}", endpoints::HEALTH_CHECK);
    info!("   Readiness:         GET  http://{host}:{port}{}", endpoints::READY_CHECK);
    info!("   Diagnostics:       GET  http://{host}:{port}{}", endpoints::DIAGNOSTICS);
    info!("=== End of Endpoint List ===");
}
