use crate::domain::{Task, TaskPatch};
use crate::errors::StorageError;
use crate::persistence::TaskStore;

/// Owns the authoritative task collection and keeps it synchronized with
/// the persistent store. Every mutation persists the full collection;
/// storage failures are queued as notices instead of failing the
/// operation, so mutations always succeed from the caller's perspective.
pub struct TaskRepository {
    store: TaskStore,
    tasks: Vec<Task>,
    notices: Vec<StorageError>,
}

impl TaskRepository {
    /// Load the collection from the store. A read failure queues a notice
    /// and substitutes the seed collection.
    pub fn open(store: TaskStore) -> Self {
        let outcome = store.load();
        Self {
            store,
            tasks: outcome.tasks,
            notices: outcome.notice.into_iter().collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Create a task from already-validated text and prepend it to the
    /// collection (newest first)
    pub fn add(&mut self, raw_text: &str) -> &Task {
        let task = Task::new(raw_text);
        self.tasks.insert(0, task);
        self.persist();
        &self.tasks[0]
    }

    /// Merge a patch into the task with the given id, refreshing its
    /// `updated_at`. Unknown ids are silently ignored.
    pub fn apply(&mut self, id: &str, patch: TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.apply(patch);
            self.persist();
        }
    }

    /// Flip the completion flag of the task with the given id
    pub fn toggle(&mut self, id: &str) {
        if let Some(completed) = self.get(id).map(|task| task.completed) {
            self.apply(id, TaskPatch::completed(!completed));
        }
    }

    /// Remove the task with the given id, if present
    pub fn remove(&mut self, id: &str) {
        self.tasks.retain(|task| task.id != id);
        self.persist();
    }

    /// Drain queued non-fatal storage notices
    pub fn take_notices(&mut self) -> Vec<StorageError> {
        std::mem::take(&mut self.notices)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.tasks) {
            self.notices.push(e);
        }
    }
}
