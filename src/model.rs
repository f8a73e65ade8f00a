/// Identity of the local repository as resolved against Azure DevOps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDefinition {
    /// The Azure DevOps project id (GUID)
    pub project_id: String,
    /// The Azure DevOps repository id (GUID)
    pub repository_id: String,
    /// The branch being linked (short name, no refs/heads/ prefix)
    pub branch_name: String,
}

/// The work item a branch is being linked to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItemDefinition {
    pub work_item_id: i32,
    /// Team project the work item lives in (System.TeamProject)
    pub project_name: String,
}

/// Parameters for the `link` command, built once from CLI flags
#[derive(Debug, Clone)]
pub struct LinkParams {
    pub work_item_id: i32,
    /// Overrides the HEAD branch name when set
    pub branch_name: Option<String>,
    /// Reserved for branch creation; linking ignores it
    pub clean: bool,
}
