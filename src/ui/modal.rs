use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation modal
pub fn render_confirm_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let task_text = app
        .pending_delete
        .as_deref()
        .and_then(|id| app.repo.get(id))
        .map(|task| task.text.clone());

    if let Some(task_text) = task_text {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("  Delete this task?"));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  \""),
            Span::styled(task_text, modal_title_style()),
            Span::raw("\""),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  This cannot be undone."));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Delete  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Delete Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
