use crate::app::AppState;
use crate::ui::styles::{error_style, notice_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the transient notice toasts (newest last, bounded by the area
/// height)
pub fn render_notices(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = area.height as usize;
    let start = app.notices.len().saturating_sub(visible);

    let lines: Vec<Line> = app.notices[start..]
        .iter()
        .map(|notice| {
            let style = if notice.title == "Storage Error" {
                error_style()
            } else {
                notice_style()
            };
            Line::from(vec![
                Span::styled(format!(" {}", notice.title), style),
                Span::raw(format!(" — {}", notice.body)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    f.render_widget(paragraph, area);
}
