//! Project store: the loaded list plus the view filtered by the search box

use crate::domain::{Entity, Project, ProjectId};

/// Projects whose name contains `query`, ignoring case. Order is preserved.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStore {
    all: Vec<Project>,
    query: String,
    visible: Vec<Project>,
}

impl ProjectStore {
    /// Full list in server order
    pub fn all(&self) -> &[Project] {
        &self.all
    }

    /// Filtered view shown to the user
    pub fn visible(&self) -> &[Project] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.all.iter().find(|p| p.id() == id)
    }

    /// Replace everything with a freshly loaded list
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.all = projects;
        self.refilter();
    }

    /// Recompute the filtered view for `query`; never touches the server
    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn append(&mut self, project: Project) {
        self.all.push(project);
        self.refilter();
    }

    /// Swap the entry with id `target` for `project`. Returns false if absent.
    pub fn replace(&mut self, target: &ProjectId, project: Project) -> bool {
        let Some(slot) = self.all.iter_mut().find(|p| p.id() == target) else {
            return false;
        };
        *slot = project;
        self.refilter();
        true
    }

    pub fn remove(&mut self, id: &ProjectId) -> bool {
        let before = self.all.len();
        self.all.retain(|p| p.id() != id);
        self.visible.retain(|p| p.id() != id);
        self.all.len() != before
    }

    fn refilter(&mut self) {
        self.visible = filter_projects(&self.all, &self.query);
    }
}
