use super::enums::Filter;
use super::task::Task;

/// Per-status task counts for the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Why the visible list is empty, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty (first run)
    NoTasks,
    /// Everything is completed and the Active filter is selected
    NoActive,
    /// Nothing is completed yet and the Completed filter is selected
    NoCompleted,
}

impl EmptyState {
    /// Headline shown in the empty list area
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks yet",
            EmptyState::NoActive => "No active tasks",
            EmptyState::NoCompleted => "No completed tasks",
        }
    }

    /// Supporting line under the headline
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoTasks => "Add your first task to get started!",
            EmptyState::NoActive => "All your tasks are completed!",
            EmptyState::NoCompleted => "Complete some tasks to see them here.",
        }
    }
}

/// Derived view of the collection under a filter
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Indexes into the collection, filtered, in collection order
    pub visible: Vec<usize>,
    pub counts: StatusCounts,
    pub empty_state: Option<EmptyState>,
}

/// Project the collection through a filter. Pure: no side effects, and the
/// same inputs always produce the same projection.
pub fn project(tasks: &[Task], filter: Filter) -> Projection {
    let visible: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task.completed))
        .map(|(index, _)| index)
        .collect();

    let completed = tasks.iter().filter(|task| task.completed).count();
    let counts = StatusCounts {
        all: tasks.len(),
        active: tasks.len() - completed,
        completed,
    };

    let empty_state = if tasks.is_empty() {
        Some(EmptyState::NoTasks)
    } else if visible.is_empty() && filter == Filter::Active {
        Some(EmptyState::NoActive)
    } else if visible.is_empty() && filter == Filter::Completed {
        Some(EmptyState::NoCompleted)
    } else {
        None
    };

    Projection {
        visible,
        counts,
        empty_state,
    }
}
