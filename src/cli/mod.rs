use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

/// Command-line client for a running Tryitter API server
#[derive(Parser)]
#[command(name = "tryitter", about = "Tryitter API client")]
pub struct Cli {
    /// Base URL of the server
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check server and storage health")]
    Health,

    #[command(about = "Login and print a bearer token")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password")]
        password: String,
    },

    #[command(about = "Update your status message")]
    Status {
        #[arg(help = "Your user id")]
        id: Uuid,
        #[arg(help = "New status message")]
        message: String,
        #[arg(long, help = "Bearer token from login")]
        token: String,
    },

    #[command(about = "Delete your account")]
    Delete {
        #[arg(help = "Your user id")]
        id: Uuid,
        #[arg(long, help = "Bearer token from login")]
        token: String,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/health", cli.url))
                .send()
                .await
                .context("health request failed")?;
            let status = res.status();
            let body: Value = res.json().await.context("invalid health response")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            if status != StatusCode::OK {
                bail!("server degraded ({})", status);
            }
        }
        Commands::Login { username, password } => {
            let res = client
                .post(format!("{}/auth/login", cli.url))
                .json(&json!({ "username": username, "password": password }))
                .send()
                .await
                .context("login request failed")?;
            if res.status() == StatusCode::UNAUTHORIZED {
                bail!("invalid credentials");
            }
            let body: Value = res.json().await.context("invalid login response")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Status { id, message, token } => {
            let res = client
                .patch(format!("{}/users/{}/status", cli.url, id))
                .bearer_auth(token)
                .json(&json!({ "statusMessage": message }))
                .send()
                .await
                .context("status request failed")?;
            match res.status() {
                StatusCode::NO_CONTENT => println!("status updated"),
                StatusCode::UNAUTHORIZED => bail!("unauthorized: token does not own user {}", id),
                other => {
                    let body: Value = res.json().await.unwrap_or(Value::Null);
                    bail!("status update failed ({}): {}", other, body);
                }
            }
        }
        Commands::Delete { id, token } => {
            let res = client
                .delete(format!("{}/users/{}", cli.url, id))
                .bearer_auth(token)
                .send()
                .await
                .context("delete request failed")?;
            match res.status() {
                StatusCode::NO_CONTENT => println!("user {} deleted", id),
                StatusCode::UNAUTHORIZED => bail!("unauthorized: token does not own user {}", id),
                other => bail!("delete failed ({})", other),
            }
        }
    }

    Ok(())
}
