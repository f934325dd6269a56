use crate::app::AppState;
use crate::domain::{Filter, StatusCounts};
use crate::ui::styles::{active_filter_style, inactive_filter_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn count_for(filter: Filter, counts: &StatusCounts) -> usize {
    match filter {
        Filter::All => counts.all,
        Filter::Active => counts.active,
        Filter::Completed => counts.completed,
    }
}

/// Render the filter bar with per-status counts
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let counts = app.projection().counts;

    let mut spans = vec![Span::raw(" ")];
    for filter in Filter::all() {
        let label = format!(" {} ({}) ", filter.label(), count_for(*filter, &counts));
        let style = if *filter == app.filter {
            active_filter_style()
        } else {
            inactive_filter_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
