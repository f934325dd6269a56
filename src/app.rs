use crate::domain::{
    project, validate_text, Filter, Projection, Task, TaskPatch, UiMode, ValidationError,
};
use crate::repository::TaskRepository;
use crate::ticker;
use std::time::{Duration, Instant};

/// How long a notice toast stays on screen in milliseconds
const NOTICE_TTL_MS: u64 = 2500;

/// A transient user-facing notice (storage errors, action confirmations)
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub shown_at: Instant,
}

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    /// Id of the task being edited (None when adding)
    pub editing_id: Option<String>,
    /// Validation failure from the last submit attempt
    pub error: Option<ValidationError>,
}

/// A submission waiting out the save delay
#[derive(Debug, Clone)]
struct PendingSubmit {
    text: String,
    editing_id: Option<String>,
    deadline: Instant,
}

/// Main application state
pub struct AppState {
    pub repo: TaskRepository,
    pub filter: Filter,
    /// Position within the visible (filtered) list
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub pending_delete: Option<String>,
    pending_submit: Option<PendingSubmit>,
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn new(repo: TaskRepository) -> Self {
        let mut app = Self {
            repo,
            filter: Filter::All,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            pending_delete: None,
            pending_submit: None,
            notices: Vec::new(),
        };
        // Surface any read failure from the startup load
        app.drain_storage_notices();
        app
    }

    /// Current projection of the collection under the active filter
    pub fn projection(&self) -> Projection {
        project(self.repo.tasks(), self.filter)
    }

    /// Task currently under the cursor, if any
    pub fn selected_task(&self) -> Option<&Task> {
        let projection = self.projection();
        projection
            .visible
            .get(self.selected_index)
            .and_then(|&index| self.repo.tasks().get(index))
    }

    /// Id of the task currently under the cursor, if any
    pub fn selected_id(&self) -> Option<String> {
        self.selected_task().map(|task| task.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let visible = self.projection().visible.len();
        if visible > 0 && self.selected_index < visible - 1 {
            self.selected_index += 1;
        }
    }

    /// Keep the cursor inside the visible list after a mutation or filter
    /// change shrank it
    fn clamp_selection(&mut self) {
        let visible = self.projection().visible.len();
        if visible == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected_index = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Open the form for a new task
    pub fn start_add(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            editing_id: None,
            error: None,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the form pre-filled with the selected task's text
    pub fn start_edit(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            self.input_form = Some(InputFormState {
                text: task.text,
                editing_id: Some(task.id),
                error: None,
            });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Whether a submission is currently waiting out the save delay
    pub fn is_busy(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Add a character to the form text. Typing clears a shown validation
    /// error, like re-editing a rejected field.
    pub fn form_add_char(&mut self, c: char) {
        if self.is_busy() {
            return;
        }
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
            form.error = None;
        }
    }

    pub fn form_backspace(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(form) = &mut self.input_form {
            form.text.pop();
            form.error = None;
        }
    }

    /// Validate the form and start the delayed submission. Rejected input
    /// surfaces on the form and nothing is mutated; accepted input is
    /// applied when the delay elapses.
    pub fn submit_form(&mut self) {
        if self.is_busy() {
            // One submission in flight per form
            return;
        }
        if let Some(form) = &mut self.input_form {
            match validate_text(&form.text) {
                Ok(()) => {
                    self.pending_submit = Some(PendingSubmit {
                        text: form.text.clone(),
                        editing_id: form.editing_id.clone(),
                        deadline: Instant::now() + ticker::submit_delay(),
                    });
                }
                Err(e) => form.error = Some(e),
            }
        }
    }

    /// Close the form. Ignored while a submission is in flight: the delay
    /// always completes and the submission always finalizes.
    pub fn cancel_form(&mut self) {
        if self.is_busy() {
            return;
        }
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Apply the pending submission once its deadline has passed. The
    /// mutation and its persistence happen together here, atomically from
    /// the caller's perspective.
    fn finalize_pending_submit(&mut self, now: Instant) {
        let due = self
            .pending_submit
            .as_ref()
            .map_or(false, |pending| now >= pending.deadline);
        if !due {
            return;
        }

        if let Some(pending) = self.pending_submit.take() {
            match pending.editing_id {
                Some(id) => {
                    self.repo.apply(&id, TaskPatch::text(pending.text));
                    self.push_notice("Task Updated", "Your task has been successfully updated.");
                }
                None => {
                    let text = self.repo.add(&pending.text).text.clone();
                    self.push_notice(
                        "Task Added",
                        format!("\"{}\" has been added to your tasks.", text),
                    );
                }
            }
            self.drain_storage_notices();
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
            self.clamp_selection();
        }
    }

    /// Finalize any pending submission immediately (test support)
    #[cfg(test)]
    pub fn finalize_now(&mut self) {
        if let Some(deadline) = self.pending_submit.as_ref().map(|pending| pending.deadline) {
            self.finalize_pending_submit(deadline);
        }
    }

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.repo.toggle(&id);
            self.drain_storage_notices();
            if let Some(task) = self.repo.get(&id) {
                let (title, verb) = if task.completed {
                    ("Task Completed", "completed")
                } else {
                    ("Task Marked Active", "reactivated")
                };
                let body = format!("\"{}\" has been {}.", task.text, verb);
                self.push_notice(title, body);
            }
            self.clamp_selection();
        }
    }

    /// Ask for confirmation before deleting the selected task
    pub fn ask_delete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            let text = self.repo.get(&id).map(|task| task.text.clone());
            self.repo.remove(&id);
            self.drain_storage_notices();
            if let Some(text) = text {
                self.push_notice("Task Deleted", format!("\"{}\" has been deleted.", text));
            }
            self.clamp_selection();
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn push_notice(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.notices.push(Notice {
            title: title.into(),
            body: body.into(),
            shown_at: Instant::now(),
        });
    }

    /// Move queued storage errors onto the notice stack
    fn drain_storage_notices(&mut self) {
        for err in self.repo.take_notices() {
            let notice = Notice {
                title: err.title().to_string(),
                body: err.to_string(),
                shown_at: Instant::now(),
            };
            self.notices.push(notice);
        }
    }

    /// Advance time-based state: expire old notices and finalize a due
    /// submission
    pub fn tick(&mut self) {
        let now = Instant::now();
        let ttl = Duration::from_millis(NOTICE_TTL_MS);
        self.notices
            .retain(|notice| now.duration_since(notice.shown_at) < ttl);
        self.finalize_pending_submit(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::TaskStore;
    use tempfile::{tempdir, TempDir};

    fn empty_app() -> (AppState, TempDir) {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        store.save(&[]).unwrap();
        (AppState::new(TaskRepository::open(store)), dir)
    }

    fn far_future() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    fn submit_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.form_add_char(c);
        }
        app.submit_form();
    }

    #[test]
    fn test_add_flow_applies_after_delay() {
        let (mut app, _dir) = empty_app();

        app.start_add();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        submit_text(&mut app, "Buy milk");

        // Nothing is mutated while the submission waits out the delay
        assert!(app.is_busy());
        assert!(app.repo.tasks().is_empty());

        app.finalize_pending_submit(far_future());
        assert!(!app.is_busy());
        assert_eq!(app.repo.tasks().len(), 1);
        assert_eq!(app.repo.tasks()[0].text, "Buy milk");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert!(app.notices.iter().any(|n| n.title == "Task Added"));
    }

    #[test]
    fn test_validation_failure_blocks_mutation() {
        let (mut app, _dir) = empty_app();

        app.start_add();
        submit_text(&mut app, "hi");

        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.error, Some(ValidationError::TooShort));
        assert!(!app.is_busy());
        assert!(app.repo.tasks().is_empty());

        // Typing clears the error
        app.form_add_char('!');
        assert!(app.input_form.as_ref().unwrap().error.is_none());
    }

    #[test]
    fn test_submit_is_single_flight() {
        let (mut app, _dir) = empty_app();

        app.start_add();
        submit_text(&mut app, "Buy milk");
        assert!(app.is_busy());

        // A second submit and further edits are ignored while in flight
        app.submit_form();
        app.form_add_char('x');
        app.cancel_form();
        assert!(app.input_form.is_some());

        app.finalize_pending_submit(far_future());
        assert_eq!(app.repo.tasks().len(), 1);
        assert_eq!(app.repo.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_submission_not_applied_before_deadline() {
        let (mut app, _dir) = empty_app();

        app.start_add();
        submit_text(&mut app, "Buy milk");

        app.finalize_pending_submit(Instant::now());
        assert!(app.is_busy());
        assert!(app.repo.tasks().is_empty());
    }

    #[test]
    fn test_edit_flow_updates_text() {
        let (mut app, _dir) = empty_app();
        let id = app.repo.add("Old text").id.clone();

        app.start_edit();
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.text, "Old text");
        assert_eq!(form.editing_id.as_deref(), Some(id.as_str()));

        for _ in 0.."Old text".len() {
            app.form_backspace();
        }
        submit_text(&mut app, "New text");
        app.finalize_pending_submit(far_future());

        assert_eq!(app.repo.get(&id).unwrap().text, "New text");
        assert_eq!(app.repo.tasks().len(), 1);
    }

    #[test]
    fn test_toggle_selected_pushes_notice() {
        let (mut app, _dir) = empty_app();
        app.repo.add("Toggle me");

        app.toggle_selected();
        assert!(app.repo.tasks()[0].completed);
        assert!(app.notices.iter().any(|n| n.title == "Task Completed"));

        app.toggle_selected();
        assert!(!app.repo.tasks()[0].completed);
        assert!(app.notices.iter().any(|n| n.title == "Task Marked Active"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut app, _dir) = empty_app();
        app.repo.add("Delete me");

        app.ask_delete();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        assert!(app.pending_delete.is_some());

        app.cancel_delete();
        assert_eq!(app.repo.tasks().len(), 1);
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.ask_delete();
        app.confirm_delete();
        assert!(app.repo.tasks().is_empty());
        assert!(app.notices.iter().any(|n| n.title == "Task Deleted"));
    }

    #[test]
    fn test_filter_resets_selection() {
        let (mut app, _dir) = empty_app();
        app.repo.add("First");
        app.repo.add("Second");
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.cycle_filter();
        assert_eq!(app.filter, Filter::Active);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let (mut app, _dir) = empty_app();
        app.move_selection_down();
        assert_eq!(app.selected_index, 0);

        app.repo.add("Only task");
        app.move_selection_down();
        assert_eq!(app.selected_index, 0);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_selection_follows_filtered_list() {
        let (mut app, _dir) = empty_app();
        app.repo.add("Open task");
        app.repo.add("Soon done");
        app.set_filter(Filter::Active);
        app.move_selection_down();

        // Completing the second visible task shrinks the active list
        app.toggle_selected();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.projection().visible.len(), 1);
    }

    #[test]
    fn test_notices_expire_on_tick() {
        let (mut app, _dir) = empty_app();
        app.push_notice("Test", "Body");
        app.notices[0].shown_at = Instant::now() - Duration::from_secs(10);

        app.tick();
        assert!(app.notices.is_empty());
    }
}
