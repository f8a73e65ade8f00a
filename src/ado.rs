//! Thin client for the Azure DevOps REST API (v7.1).
//!
//! Three reads (projects, repositories, work item) and one write (the
//! json-patch appending an artifact link to a work item's relations).
//! Authentication is HTTP Basic with an empty username and the PAT as
//! password. Failures are not retried.

use base64::Engine;
use reqwest::blocking::{Client as HttpClient, Response};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::RepoDefinition;

const API_VERSION: &str = "7.1";

// Response types

#[derive(Debug, Clone, Deserialize)]
pub struct TeamProject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRepository {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct ListResponse<T> {
    value: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct WorkItem {
    pub id: i32,
    pub fields: WorkItemFields,
}

#[derive(Debug, Deserialize)]
pub struct WorkItemFields {
    #[serde(rename = "System.Title")]
    pub title: String,
    #[serde(rename = "System.TeamProject")]
    pub team_project: String,
}

// Patch document

#[derive(Debug, Serialize)]
pub struct JsonPatchOperation {
    pub op: String,
    pub path: String,
    pub value: serde_json::Value,
}

/// The artifact link URL for a branch:
/// `vstfs:///Git/Ref/{projectId}/{repositoryId}/GB{branchName}`
pub fn artifact_url(project_id: &str, repository_id: &str, branch_name: &str) -> String {
    format!(
        "vstfs:///Git/Ref/{}/{}/GB{}",
        project_id, repository_id, branch_name
    )
}

/// The json-patch document appending a branch artifact link to a work
/// item's relations list
pub fn branch_link_document(repo: &RepoDefinition) -> Vec<JsonPatchOperation> {
    vec![JsonPatchOperation {
        op: "add".to_string(),
        path: "/relations/-".to_string(),
        value: serde_json::json!({
            "rel": "ArtifactLink",
            "url": artifact_url(&repo.project_id, &repo.repository_id, &repo.branch_name),
            "attributes": {
                "name": "Branch",
                "comment": "Linked via ado-link",
            },
        }),
    }]
}

pub struct Client {
    base_url: String,
    auth_header: String,
    http: HttpClient,
}

impl Client {
    pub fn new(org_url: &str, pat: &str) -> Self {
        let creds = format!(":{}", pat);
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        Self {
            base_url: org_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {}", encoded),
            http: HttpClient::new(),
        }
    }

    /// List the organization's team projects
    pub fn list_projects(&self) -> Result<Vec<TeamProject>> {
        let url = format!(
            "{}/_apis/projects?api-version={}",
            self.base_url, API_VERSION
        );
        let resp = self.get(&url)?;
        let list: ListResponse<TeamProject> = check_status(resp)?.json()?;
        Ok(list.value)
    }

    /// List the organization's git repositories across all projects
    pub fn list_repositories(&self) -> Result<Vec<GitRepository>> {
        let url = format!(
            "{}/_apis/git/repositories?api-version={}",
            self.base_url, API_VERSION
        );
        let resp = self.get(&url)?;
        let list: ListResponse<GitRepository> = check_status(resp)?.json()?;
        Ok(list.value)
    }

    /// Fetch a single work item by id
    pub fn get_work_item(&self, id: i32) -> Result<WorkItem> {
        let url = format!(
            "{}/_apis/wit/workitems/{}?api-version={}",
            self.base_url, id, API_VERSION
        );
        let resp = self.get(&url)?;
        let item: WorkItem = check_status(resp)?.json()?;
        Ok(item)
    }

    /// Append the given patch document to a work item
    pub fn update_work_item(&self, id: i32, document: &[JsonPatchOperation]) -> Result<()> {
        let url = format!(
            "{}/_apis/wit/workitems/{}?api-version={}",
            self.base_url, id, API_VERSION
        );
        let resp = self
            .http
            .patch(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json-patch+json")
            .body(serde_json::to_vec(document)?)
            .send()?;
        check_status(resp)?;
        Ok(())
    }

    fn get(&self, url: &str) -> Result<Response> {
        let resp = self
            .http
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send()?;
        Ok(resp)
    }
}

fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_url_format() {
        assert_eq!(artifact_url("P", "R", "B"), "vstfs:///Git/Ref/P/R/GBB");
        assert_eq!(
            artifact_url("proj-id", "repo-id", "feature/login"),
            "vstfs:///Git/Ref/proj-id/repo-id/GBfeature/login"
        );
    }

    #[test]
    fn test_branch_link_document_shape() {
        let repo = RepoDefinition {
            project_id: "pid".into(),
            repository_id: "rid".into(),
            branch_name: "topic".into(),
        };
        let document = branch_link_document(&repo);
        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "op": "add",
                "path": "/relations/-",
                "value": {
                    "rel": "ArtifactLink",
                    "url": "vstfs:///Git/Ref/pid/rid/GBtopic",
                    "attributes": {
                        "name": "Branch",
                        "comment": "Linked via ado-link",
                    },
                },
            }])
        );
    }

    #[test]
    fn test_work_item_fields_deserialize() {
        let raw = r#"{
            "id": 42,
            "fields": {
                "System.Title": "Fix the login page",
                "System.TeamProject": "MyProject",
                "System.State": "Active"
            }
        }"#;
        let item: WorkItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.fields.title, "Fix the login page");
        assert_eq!(item.fields.team_project, "MyProject");
    }

    #[test]
    fn test_list_response_deserialize() {
        let raw = r#"{
            "count": 2,
            "value": [
                {"id": "a", "name": "One"},
                {"id": "b", "name": "Two"}
            ]
        }"#;
        let list: ListResponse<TeamProject> = serde_json::from_str(raw).unwrap();
        assert_eq!(list.value.len(), 2);
        assert_eq!(list.value[1].name, "Two");
    }
}
