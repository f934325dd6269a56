use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID, assigned at creation, stable for the task's lifetime
    pub id: String,
    /// Task description (trimmed; validated by the caller before it gets here)
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// When the task was last edited or toggled
    pub updated_at: DateTime<Utc>,
}

/// Named partial update applied to an existing task. Only the fields that
/// are set are merged; `id` and `created_at` are never touched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that replaces the task text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion flag
    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }
}

impl Task {
    /// Create a new task from already-validated text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            text: text.trim().to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this task, refreshing `updated_at`
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(text) = patch.text {
            self.text = text.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the task has been mutated since creation
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn backdated(text: &str) -> Task {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Task {
            id: "t1".to_string(),
            text: text.to_string(),
            completed: false,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_new_task() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.id.is_empty());
        assert!(!task.was_edited());
    }

    #[test]
    fn test_new_task_trims_text() {
        let task = Task::new("  Buy milk  ");
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn test_new_tasks_have_distinct_ids() {
        let a = Task::new("First");
        let b = Task::new("Second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_text_patch() {
        let mut task = backdated("Old text");
        task.apply(TaskPatch::text("New text"));

        assert_eq!(task.text, "New text");
        assert_eq!(task.id, "t1");
        assert_eq!(
            task.created_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
        );
        assert!(task.updated_at > task.created_at);
        assert!(task.was_edited());
    }

    #[test]
    fn test_apply_completed_patch() {
        let mut task = backdated("Task");
        task.apply(TaskPatch::completed(true));

        assert!(task.completed);
        assert_eq!(task.text, "Task");
        assert!(task.updated_at > task.created_at);
    }

    #[test]
    fn test_apply_trims_new_text() {
        let mut task = backdated("Task");
        task.apply(TaskPatch::text("  spaced out  "));
        assert_eq!(task.text, "spaced out");
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let mut task = Task::new("Task");
        assert!(task.updated_at >= task.created_at);

        task.apply(TaskPatch::completed(true));
        assert!(task.updated_at >= task.created_at);

        task.apply(TaskPatch::text("Renamed"));
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_serde_uses_camel_case_wire_format() {
        let task = backdated("Wire check");
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"2025-01-01T12:00:00Z\""));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }
}
