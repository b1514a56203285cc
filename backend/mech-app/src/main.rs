//! mech - swing and pitch mechanics coaching client
//!
//! # Examples
//!
//! ```bash
//! mech register --full-name "Alex Johnson" --email alex@x.com --username alexj --password pw
//! mech sign-in --username alexj --password pw --pretty
//! mech upload --kind swing --file ./swing.mp4 --file ./swing-2.mp4
//! mech analysis --index 0
//! mech profile --pretty
//! ```

mod cli;
mod commands;
mod error;
mod handlers;
mod logger;
mod media;
mod services;

#[cfg(test)]
mod tests;

use crate::{cli::Cli, commands::Commands, error::Result as AppErrorResult, services::Services};

use mech_auth::FormFields;
use mech_capture::UploadSettings;
use mech_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> AppErrorResult<Value> {
    // Analysis and the player card are static and need neither configuration nor a backend
    match command {
        Commands::Analysis { index } => return handlers::analysis(index),
        Commands::Profile => return Ok(handlers::profile()),
        _ => {}
    }

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting mech v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let services = Services::connect(&config).await?;
    debug!("Backend services wired");

    match command {
        Commands::Register {
            full_name,
            email,
            username,
            password,
        } => {
            let flow = services.auth_flow(&config);
            let fields = FormFields::registration(&full_name, &email, &username, &password);
            handlers::register(&flow, fields).await
        }
        Commands::SignIn {
            username,
            password,
            sign_out,
        } => {
            let flow = services.auth_flow(&config);
            let fields = FormFields::sign_in(&username, &password);
            handlers::sign_in(&flow, fields, sign_out).await
        }
        Commands::Upload { kind, file, source } => {
            let settings = UploadSettings {
                file_extension: config.storage.file_extension.clone(),
                content_type: config.storage.content_type.clone(),
            };
            handlers::upload(services.storage.clone(), settings, &kind, file, &source).await
        }
        Commands::Analysis { index } => handlers::analysis(index),
        Commands::Profile => Ok(handlers::profile()),
    }
}
