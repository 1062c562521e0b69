//! Workspace command handlers

use std::path::Path;

use log::{debug, warn};

use crate::cli::{Cli, Command};
use crate::discovery::{scan_directories, workspace_name};
use crate::error::Result;
use crate::hcp::traits::TfeResource;
use crate::hcp::TfeClient;

use super::definitions::{load_workspace_definitions, WorkspaceDefinition};
use super::models::{CreateOutcome, WorkspaceUpdate};
use super::resolver::resolve_targets;

/// Load the workspaces file up front so a malformed file fails before any
/// request is sent
fn load_optional_definitions(path: Option<&Path>) -> Result<Vec<WorkspaceDefinition>> {
    match path {
        Some(path) => load_workspace_definitions(path),
        None => Ok(Vec::new()),
    }
}

/// Progress line for one create call
fn create_outcome_line(name: &str, outcome: CreateOutcome, ssh_key: Option<&str>) -> String {
    let line = match outcome {
        CreateOutcome::Created => format!("Creating workspace = {}", name),
        CreateOutcome::AlreadyExists => format!("Workspace = {} already exists", name),
    };
    match ssh_key {
        Some(key) => format!("{} with ssh_key = {}", line, key),
        None => line,
    }
}

/// Progress line for one update call
fn update_line(name: &str, ssh_key: Option<&str>) -> String {
    match ssh_key {
        Some(key) => format!("Updating workspace = {} with ssh_key = {}", name, key),
        None => format!("Updating workspace = {}", name),
    }
}

/// Run the create command: one workspace per discovered directory, then
/// every definition of the workspaces file
pub async fn run_create_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Create(args) = &cli.command else {
        unreachable!()
    };

    let definitions = load_optional_definitions(args.workspaces_file.as_deref())?;
    let directories = scan_directories(&args.directories, &cli.search_suffix)?;
    debug!(
        "Creating {} workspaces from directories and {} from file",
        directories.len(),
        definitions.len()
    );

    if directories.is_empty() && definitions.is_empty() {
        warn!("No directories containing *{} files found", cli.search_suffix);
    }

    for dir in &directories {
        let name = workspace_name(dir);
        let outcome = client
            .create_workspace_for_directory(
                dir,
                args.oauth_token_id.as_deref(),
                args.ssh_key.as_deref(),
            )
            .await?;
        println!(
            "{}",
            create_outcome_line(&name, outcome, args.ssh_key.as_deref())
        );
    }

    for def in &definitions {
        let outcome = client
            .create_workspace(def.name(), def.to_attributes()?, None)
            .await?;
        println!("{}", create_outcome_line(def.name(), outcome, None));
    }

    Ok(())
}

/// Run the update command
pub async fn run_update_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Update(args) = &cli.command else {
        unreachable!()
    };

    let definitions = load_optional_definitions(args.workspaces_file.as_deref())?;
    let targets = resolve_targets(&args.workspaces, args.dirs, &cli.search_suffix)?;
    let update = WorkspaceUpdate {
        vcs_repo: client.vcs_repo(args.oauth_token_id.as_deref())?,
        execution_mode: args.exec_mode,
    };

    if targets.is_empty() && definitions.is_empty() {
        warn!("No workspaces to update");
    }

    for target in &targets {
        let name = target.name();
        println!("{}", update_line(&name, args.ssh_key.as_deref()));
        debug!("Update attributes: {}", serde_json::to_string(&update)?);
        client
            .update_workspace(&name, &update, args.ssh_key.as_deref())
            .await?;
    }

    for def in &definitions {
        println!("{}", update_line(def.name(), None));
        client
            .patch_workspace(def.name(), def.to_attributes()?)
            .await?;
    }

    Ok(())
}

/// Run the delete command
pub async fn run_delete_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Delete(args) = &cli.command else {
        unreachable!()
    };

    let definitions = load_optional_definitions(args.workspaces_file.as_deref())?;
    let targets = resolve_targets(&args.workspaces, args.dirs, &cli.search_suffix)?;

    if targets.is_empty() && definitions.is_empty() {
        warn!("No workspaces to delete");
    }

    let names = targets
        .iter()
        .map(|t| t.name())
        .chain(definitions.iter().map(|d| d.name().to_string()));

    for name in names {
        println!("Deleting workspace = {}", name);
        client.delete_workspace(&name).await?;
    }

    Ok(())
}

/// Run the list command: one workspace name per line
pub async fn run_list_command(client: &TfeClient) -> Result<()> {
    for workspace in client.list_workspaces().await? {
        println!("{}", workspace.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_create_outcome_line() {
        assert_eq!(
            create_outcome_line("infra-prod", CreateOutcome::Created, None),
            "Creating workspace = infra-prod"
        );
        assert_eq!(
            create_outcome_line("infra-prod", CreateOutcome::AlreadyExists, None),
            "Workspace = infra-prod already exists"
        );
        assert_eq!(
            create_outcome_line("infra-prod", CreateOutcome::AlreadyExists, Some("deploy")),
            "Workspace = infra-prod already exists with ssh_key = deploy"
        );
    }

    #[test]
    fn test_update_line() {
        assert_eq!(update_line("app", None), "Updating workspace = app");
        assert_eq!(
            update_line("app", Some("deploy")),
            "Updating workspace = app with ssh_key = deploy"
        );
    }

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["tfws", "--org", "acme"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[tokio::test]
    async fn test_create_invalid_file_sends_nothing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("infra");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.tf"), "").unwrap();
        let file = tmp.path().join("ws.yaml");
        fs::write(&file, "- attributes:\n    description: no name\n").unwrap();

        let cli = cli(&[
            "create",
            dir.to_str().unwrap(),
            "--workspaces-file",
            file.to_str().unwrap(),
        ]);
        assert!(run_create_command(&client, &cli).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_stops_at_first_failure() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/workspaces/first"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/workspaces/second"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let cli = cli(&["delete", "first", "second"]);
        assert!(run_delete_command(&client, &cli).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_directories_and_file() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let tmp = TempDir::new().unwrap();
        let prod = tmp.path().join("prod");
        fs::create_dir_all(&prod).unwrap();
        fs::write(prod.join("main.tf"), "").unwrap();
        let file = tmp.path().join("ws.yaml");
        fs::write(&file, "- attributes:\n    name: extra\n").unwrap();

        let dir_name = workspace_name(&prod);
        Mock::given(method("DELETE"))
            .and(path(format!(
                "/organizations/acme/workspaces/{}",
                urlencoding::encode(&dir_name)
            )))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/workspaces/extra"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cli = cli(&[
            "delete",
            "-d",
            prod.to_str().unwrap(),
            "--workspaces-file",
            file.to_str().unwrap(),
        ]);
        run_delete_command(&client, &cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_from_file_patches_attributes() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/organizations/acme/workspaces/shared"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {"name": "shared", "execution-mode": "local"}
                }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("ws.yaml");
        fs::write(
            &file,
            "- attributes:\n    name: shared\n    execution-mode: local\n",
        )
        .unwrap();

        let cli = cli(&["update", "--workspaces-file", file.to_str().unwrap()]);
        run_update_command(&client, &cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_command() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "ws-1", "type": "workspaces", "attributes": {"name": "a"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        run_list_command(&client).await.unwrap();
    }
}
