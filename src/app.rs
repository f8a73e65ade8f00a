use colored::Colorize;

use crate::ado::{self, Client, GitRepository, TeamProject};
use crate::config::{ConfigStore, KEY_ORG_URL, KEY_PAT};
use crate::error::{Error, Result};
use crate::git;
use crate::model::{LinkParams, RepoDefinition, WorkItemDefinition};
use crate::ui;

/// `init`: prompt for the organization URL and PAT, persist both, then
/// validate the pair by listing the organization's projects
pub fn run_init(store: &mut dyn ConfigStore) -> Result<()> {
    ui::init_render_config();

    let current = store.config().clone();

    let org_url = ui::prompt_org_url(&current.org_url)?;
    store.set(KEY_ORG_URL, &org_url)?;

    let pat = ui::prompt_pat(&current.pat)?;
    store.set(KEY_PAT, &pat)?;

    println!("Validating connection to Azure DevOps...");
    let client = Client::new(&org_url, &pat);
    if let Err(err) = client.list_projects() {
        println!(
            "{}",
            "Connection failed. Please check your configuration and try again.".red()
        );
        return Err(err);
    }

    println!(
        "{} Configuration successfully initialized.",
        ">".bright_green()
    );
    Ok(())
}

/// `link`: resolve the local repository against the configured
/// organization, then attach a branch artifact link to the work item
pub fn run_link(store: &dyn ConfigStore, params: &LinkParams) -> Result<()> {
    let config = store.config();
    if config.org_url.is_empty() || config.pat.is_empty() {
        return Err(Error::Config(
            "no organization configured, run `ado-link init` first".into(),
        ));
    }

    // Local resolution happens before any network call
    let repo = git::open_repository(".")?;
    let resolved = git::resolve_remote(&repo, &config.organization_name())?;
    let branch_name = branch_for_link(&resolved.branch_name, params);

    println!(
        "{} Found remote: {}",
        ">".bright_green(),
        resolved.url.bright_yellow()
    );
    println!(
        "{} Linking branch: {}",
        ">".bright_green(),
        branch_name.bright_cyan()
    );

    let client = Client::new(&config.org_url, &config.pat);

    println!("Getting work item...");
    let item = client.get_work_item(params.work_item_id)?;
    let work_item = WorkItemDefinition {
        work_item_id: item.id,
        project_name: item.fields.team_project,
    };
    println!(
        "{} Found work item: {} ({})",
        ">".bright_green(),
        item.fields.title.bright_cyan(),
        work_item.project_name.bright_cyan()
    );

    println!("Getting project...");
    let projects = client.list_projects()?;
    let project = find_project(&projects, &resolved.project_name)?;
    println!(
        "{} Found project: {} ({})",
        ">".bright_green(),
        project.name.bright_cyan(),
        project.id
    );

    println!("Getting repository...");
    let repositories = client.list_repositories()?;
    let repository = find_repository(&repositories, &resolved.repository_name)?;
    println!(
        "{} Found repository: {} ({})",
        ">".bright_green(),
        repository.name.bright_cyan(),
        repository.id
    );

    let definition = RepoDefinition {
        project_id: project.id.clone(),
        repository_id: repository.id.clone(),
        branch_name,
    };

    println!("Updating work item...");
    let document = ado::branch_link_document(&definition);
    client.update_work_item(work_item.work_item_id, &document)?;

    println!(
        "{} Successfully linked branch to work item.",
        ">".bright_green()
    );
    Ok(())
}

/// `config get`: print a stored setting
pub fn run_config_get(store: &dyn ConfigStore, key: &str) -> Result<()> {
    println!("{}", store.get(key)?);
    Ok(())
}

/// `config set`: write a stored setting
pub fn run_config_set(store: &mut dyn ConfigStore, key: &str, value: &str) -> Result<()> {
    store.set(key, value)
}

/// The branch name going into the artifact link: the `--name` override
/// when given, otherwise the branch HEAD points at
fn branch_for_link(head_branch: &str, params: &LinkParams) -> String {
    match &params.branch_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => head_branch.to_string(),
    }
}

fn find_project<'a>(projects: &'a [TeamProject], name: &str) -> Result<&'a TeamProject> {
    projects
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::ProjectNotFound(name.to_string()))
}

fn find_repository<'a>(repositories: &'a [GitRepository], name: &str) -> Result<&'a GitRepository> {
    repositories
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| Error::RepositoryNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MemoryStore};

    fn params(work_item_id: i32) -> LinkParams {
        LinkParams {
            work_item_id,
            branch_name: None,
            clean: true,
        }
    }

    #[test]
    fn test_link_requires_configuration() {
        let store = MemoryStore::default();
        let result = run_link(&store, &params(42));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_find_project_by_name() {
        let projects = vec![
            TeamProject {
                id: "a".into(),
                name: "One".into(),
            },
            TeamProject {
                id: "b".into(),
                name: "Two".into(),
            },
        ];
        assert_eq!(find_project(&projects, "Two").unwrap().id, "b");
        assert!(matches!(
            find_project(&projects, "Three"),
            Err(Error::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_find_repository_by_name() {
        let repositories = vec![GitRepository {
            id: "r1".into(),
            name: "my-repo".into(),
        }];
        assert_eq!(find_repository(&repositories, "my-repo").unwrap().id, "r1");
        assert!(matches!(
            find_repository(&repositories, "other"),
            Err(Error::RepositoryNotFound(_))
        ));
    }

    #[test]
    fn test_branch_override() {
        let head = "topic";
        assert_eq!(branch_for_link(head, &params(1)), "topic");

        let with_name = LinkParams {
            work_item_id: 1,
            branch_name: Some("feature/login".into()),
            clean: true,
        };
        assert_eq!(branch_for_link(head, &with_name), "feature/login");
    }

    #[test]
    fn test_config_set_get_round_trip() {
        let mut store = MemoryStore::new(Config::default());
        run_config_set(&mut store, KEY_ORG_URL, "https://dev.azure.com/myorg").unwrap();
        assert_eq!(
            store.get(KEY_ORG_URL).unwrap(),
            "https://dev.azure.com/myorg"
        );
    }
}
