use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::{App, ONBOARDING_STEPS};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let step = &ONBOARDING_STEPS[app.onboarding_step];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let intro = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🦉 {}", step.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(step.question)),
    ];
    let header = Paragraph::new(intro)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = step
        .options
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {}. ", i + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*label),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, chunks[1]);

    // Page dots
    let dots: String = (0..ONBOARDING_STEPS.len())
        .map(|i| if i == app.onboarding_step { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let footer = Paragraph::new(dots)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}
