use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::progress::active_level_id;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(course) = app.active_course() else {
        return;
    };
    let levels = course.flattened_levels();
    let active_id = active_level_id(&levels, &app.progress);

    // One list item per level, in path order, with world headers folded
    // into the first level of each world.
    let mut items: Vec<ListItem> = Vec::with_capacity(levels.len());
    for world in &course.worlds {
        let mut first_in_world = true;
        for level in world.levels() {
            let completed = app.progress.is_completed(level.id);
            let is_active = active_id == Some(level.id);

            let (marker, style) = if completed {
                ("✓", Style::default().fg(Color::Green))
            } else if is_active {
                ("▶", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("🔒", Style::default().fg(Color::DarkGray))
            };

            let mut lines = Vec::new();
            if first_in_world {
                lines.push(Line::from(Span::styled(
                    format!("{} {}", world.icon, world.title),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                first_in_world = false;
            }
            let mut spans = vec![
                Span::styled(format!("  {} ", marker), style),
                Span::styled(level.title, style),
            ];
            if is_active {
                spans.push(Span::styled(
                    "  START",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
            items.push(ListItem::new(lines));
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} path ", course.title))
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.path_list.selected);
    f.render_stateful_widget(list, area, &mut state);
}
