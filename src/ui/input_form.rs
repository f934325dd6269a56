use crate::app::AppState;
use crate::domain::{UiMode, MAX_TEXT_CHARS};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding or editing a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if app.ui_mode == UiMode::EditingTask {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("Description:"));

        let input_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.text, modal_title_style()),
            if app.is_busy() {
                Span::raw("")
            } else {
                Span::styled("█", modal_title_style()) // Cursor
            },
        ]);
        lines.push(input_line);

        let char_count = format!("{}/{}", form.text.chars().count(), MAX_TEXT_CHARS);
        lines.push(Line::from(Span::styled(char_count, hint_style())));
        lines.push(Line::raw(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(error.to_string(), error_style())));
        } else if app.is_busy() {
            lines.push(Line::from(Span::styled("Saving…", hint_style())));
        } else {
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
