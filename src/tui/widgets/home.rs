use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .course_list
        .items
        .iter()
        .filter_map(|&idx| app.courses.get(idx))
        .map(|course| {
            let completed = course
                .flattened_levels()
                .iter()
                .filter(|l| app.progress.is_completed(l.id))
                .count();
            let total = course.level_count();

            let status = if course.coming_soon {
                Span::styled("coming soon", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    format!("{}/{} levels", completed, total),
                    Style::default().fg(Color::Green),
                )
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", course.icon)),
                    Span::styled(
                        format!("{:<16}", course.title),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    status,
                ]),
                Line::from(Span::styled(
                    format!("   {}", course.description),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pick a course ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(app.course_list.selected);
    f.render_stateful_widget(list, area, &mut state);
}
