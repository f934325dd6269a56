use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, checkbox_done_style, default_style, done_style, empty_title_style, hint_style,
    meta_style, selected_style, title_style,
};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Format a timestamp relative to `now` ("Just now", "3h ago", ...)
fn relative_date_at(stamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(stamp);
    let hours = elapsed.num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        stamp.format("%Y-%m-%d").to_string()
    }
}

fn relative_date(stamp: DateTime<Utc>) -> String {
    relative_date_at(stamp, Utc::now())
}

/// Build the metadata suffix for a task row
fn task_meta(task: &Task) -> String {
    let mut meta = format!("Created {}", relative_date(task.created_at));
    if task.was_edited() {
        meta.push_str(&format!(" · Updated {}", relative_date(task.updated_at)));
    }
    meta
}

fn task_row<'a>(task: &'a Task, selected: bool) -> ListItem<'a> {
    let checkbox = if task.completed {
        Span::styled("✔ ", checkbox_done_style())
    } else {
        Span::styled("☐ ", default_style())
    };

    let text_style = if selected {
        selected_style()
    } else if task.completed {
        done_style()
    } else {
        default_style()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        checkbox,
        Span::styled(task.text.as_str(), text_style),
        Span::raw("  "),
        Span::styled(task_meta(task), meta_style()),
    ]);

    ListItem::new(line)
}

/// Render the task list pane, or the empty-state message when nothing is
/// visible under the current filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let projection = app.projection();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Tasks ", title_style()));

    if let Some(empty) = projection.empty_state {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(empty.title(), empty_title_style())),
            Line::from(Span::styled(empty.hint(), hint_style())),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = projection
        .visible
        .iter()
        .enumerate()
        .filter_map(|(row, &index)| {
            app.repo
                .tasks()
                .get(index)
                .map(|task| task_row(task, row == app.selected_index))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
