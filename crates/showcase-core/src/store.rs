use tracing::{debug, error, info, warn};

use crate::filter::{TaskFilter, TaskListView, task_list_view};
use crate::ids::IdGenerator;
use crate::storage::TaskRepository;
use crate::task::{Task, TaskId};

/// Ordered task list backed by a [`TaskRepository`].
///
/// Every mutation that changes the list writes the whole list back through
/// the repository. The mutators report whether anything changed so the
/// caller knows when to redraw.
#[derive(Debug)]
pub struct TaskStore<R, G> {
    repo: R,
    ids: G,
    tasks: Vec<Task>,
}

impl<R, G> TaskStore<R, G>
where
    R: TaskRepository,
    G: IdGenerator,
{
    /// Reads the stored list once. Missing, unreadable or malformed data all
    /// start the store empty.
    #[tracing::instrument(skip_all)]
    pub fn load(repo: R, mut ids: G) -> Self {
        let tasks = match repo.load() {
            Ok(tasks) => tasks,
            Err(error) => {
                warn!(error = ?error, "stored tasks unusable; starting empty");
                vec![]
            }
        };

        for task in &tasks {
            ids.observe(task.id);
        }

        info!(count = tasks.len(), "task store loaded");

        Self { repo, ids, tasks }
    }

    /// Appends a task for non-blank `text`. Blank input is ignored, and so
    /// is any input once the id generator has nothing left to hand out.
    #[tracing::instrument(skip(self, text))]
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!("ignoring blank task input");
            return None;
        }

        let Some(id) = self.ids.next_id() else {
            warn!(count = self.tasks.len(), "no unused task id left; task not added");
            return None;
        };
        let task = Task::from_input(id, text)?;
        self.tasks.push(task);
        debug!(%id, count = self.tasks.len(), "added task");
        self.persist();
        Some(id)
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(%id, "toggle of unknown task ignored");
            return false;
        };

        task.toggle();
        debug!(%id, completed = task.completed, "toggled task");
        self.persist();
        true
    }

    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!(%id, "remove of unknown task ignored");
            return false;
        }

        debug!(%id, count = self.tasks.len(), "removed task");
        self.persist();
        true
    }

    /// Writes the full list, replacing whatever was stored. A failed write
    /// is logged and the in-memory list is kept as is.
    pub fn persist(&self) {
        if let Err(error) = self.repo.save(&self.tasks) {
            error!(error = ?error, count = self.tasks.len(), "failed to persist tasks");
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn view(&self, filter: TaskFilter, empty_message: &str) -> TaskListView {
        task_list_view(&self.tasks, filter, empty_message)
    }
}
