//! Push variable command handler

use std::path::Path;

use log::{debug, warn};

use crate::cli::{Cli, Command};
use crate::error::Result;
use crate::hcp::workspaces::resolve_targets;
use crate::hcp::TfeClient;

use super::models::{read_value_file, VariableCategory};

/// Run the push_var command: create the same variable on every target
/// workspace
pub async fn run_push_var_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::PushVar(args) = &cli.command else {
        unreachable!()
    };

    let value = if args.file {
        debug!("Reading value of '{}' from {}", args.name, args.value);
        read_value_file(Path::new(&args.value))?
    } else {
        args.value.clone()
    };
    let category = if args.env {
        VariableCategory::Env
    } else {
        VariableCategory::Terraform
    };

    let targets = resolve_targets(&args.workspaces, args.dirs, &cli.search_suffix)?;
    if targets.is_empty() {
        warn!("No workspaces to push variable '{}' to", args.name);
    }

    for target in &targets {
        let name = target.name();
        println!("Pushing key = {} into workspace = {}", args.name, name);
        client
            .push_variable(&name, &args.name, &value, category, args.sensitive)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_push_var_from_file_strips_newline() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "ws-7", "type": "workspaces", "attributes": {"name": "app"}}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/vars"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "attributes": {
                        "key": "API_KEY",
                        "value": "secret",
                        "category": "env",
                        "hcl": false,
                        "sensitive": true
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "var-1",
                    "type": "vars",
                    "attributes": {"key": "API_KEY", "value": null, "category": "env", "sensitive": true}
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("api_key");
        fs::write(&file, "secret\n").unwrap();

        let cli = Cli::parse_from([
            "tfws",
            "--org",
            "acme",
            "push_var",
            "app",
            "--name",
            "API_KEY",
            "--value",
            file.to_str().unwrap(),
            "--file",
            "--env",
            "--sensitive",
        ]);
        run_push_var_command(&client, &cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_push_var_missing_value_file_sends_nothing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let cli = Cli::parse_from([
            "tfws",
            "--org",
            "acme",
            "push_var",
            "app",
            "-n",
            "K",
            "-v",
            "/nonexistent/value/file",
            "-f",
        ]);
        assert!(run_push_var_command(&client, &cli).await.is_err());
    }
}
