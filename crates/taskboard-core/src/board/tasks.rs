//! Task store scoped to the selected project.
//!
//! Every selection change bumps a generation counter. Requests remember the
//! [`TaskTicket`] they were issued under and their results are only applied
//! while that ticket is still current.

use crate::domain::{Entity, ProjectId, Task, TaskId};

/// Identifies the selection a task request was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTicket {
    pub project: ProjectId,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    selected: Option<ProjectId>,
    generation: u64,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn selected(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Select `project`, dropping whatever was loaded for the previous one
    pub fn select(&mut self, project: ProjectId) -> TaskTicket {
        self.generation += 1;
        self.selected = Some(project.clone());
        self.tasks.clear();
        TaskTicket { project, generation: self.generation }
    }

    /// Deselect; the store holds nothing afterwards
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.tasks.clear();
    }

    /// Ticket for the current selection, if any
    pub fn ticket(&self) -> Option<TaskTicket> {
        self.selected.clone().map(|project| TaskTicket { project, generation: self.generation })
    }

    pub fn is_current(&self, ticket: &TaskTicket) -> bool {
        ticket.generation == self.generation && self.selected.as_ref() == Some(&ticket.project)
    }

    /// Install a loaded list; stale tickets are ignored
    pub fn fill(&mut self, ticket: &TaskTicket, tasks: Vec<Task>) -> bool {
        self.apply(ticket, |list| *list = tasks)
    }

    pub fn append(&mut self, ticket: &TaskTicket, task: Task) -> bool {
        self.apply(ticket, |list| list.push(task))
    }

    /// Swap the entry with id `target` for the server's version
    pub fn replace(&mut self, ticket: &TaskTicket, target: &TaskId, task: Task) -> bool {
        self.apply(ticket, |list| {
            if let Some(slot) = list.iter_mut().find(|t| t.id() == target) {
                *slot = task;
            }
        })
    }

    pub fn remove(&mut self, ticket: &TaskTicket, id: &TaskId) -> bool {
        self.apply(ticket, |list| list.retain(|t| t.id() != id))
    }

    /// Patch only the completion flag of one entry
    pub fn set_completed(&mut self, ticket: &TaskTicket, id: &TaskId, completed: bool) -> bool {
        self.apply(ticket, |list| {
            if let Some(task) = list.iter_mut().find(|t| t.id() == id) {
                task.completed = completed;
            }
        })
    }

    fn apply(&mut self, ticket: &TaskTicket, f: impl FnOnce(&mut Vec<Task>)) -> bool {
        if !self.is_current(ticket) {
            log::warn!("dropping stale task response for project {}", ticket.project);
            return false;
        }
        f(&mut self.tasks);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        Task { id: TaskId::from(id), title: title.into(), description: None, completed: false }
    }

    #[test]
    fn test_stale_list_is_ignored() {
        let mut store = TaskStore::default();
        let first = store.select(ProjectId::from("p1"));
        let second = store.select(ProjectId::from("p2"));

        assert!(store.fill(&second, vec![task("b", "from p2")]));
        assert!(!store.fill(&first, vec![task("a", "from p1")]));

        assert_eq!(store.tasks(), &[task("b", "from p2")]);
        assert_eq!(store.selected(), Some(&ProjectId::from("p2")));
    }

    #[test]
    fn test_reselecting_same_project_invalidates_old_ticket() {
        let mut store = TaskStore::default();
        let old = store.select(ProjectId::from("p1"));
        let _new = store.select(ProjectId::from("p1"));

        assert!(!store.is_current(&old));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut store = TaskStore::default();
        let ticket = store.select(ProjectId::from("p1"));
        store.fill(&ticket, vec![task("a", "A")]);

        store.clear();

        assert!(store.tasks().is_empty());
        assert_eq!(store.ticket(), None);
        assert!(!store.append(&ticket, task("b", "B")));
    }
}
