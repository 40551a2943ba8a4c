use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::widgets::{home, onboarding, path, question};
use super::{App, View};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_status_bar(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_help_bar(f, app, chunks[2]);

    if app.show_streak {
        draw_streak_overlay(f, app);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.view {
        View::Home | View::Onboarding => "Mathtrail".to_string(),
        View::Path => app
            .active_course()
            .map(|c| format!("Mathtrail · {}", c.title))
            .unwrap_or_else(|| "Mathtrail".to_string()),
        View::Question => app
            .current_level()
            .map(|l| format!("Mathtrail · {}", l.title))
            .unwrap_or_else(|| "Mathtrail".to_string()),
        View::ComingSoon => "Mathtrail · Coming soon".to_string(),
        View::About => "Mathtrail · About".to_string(),
    };

    let status = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(
            format!("🔥 {}", app.progress.streak),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  "),
        Span::styled(
            format!("⭐ {}", app.progress.score),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let bar = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Home => home::draw(f, app, area),
        View::Path => path::draw(f, app, area),
        View::Question => question::draw(f, app, area),
        View::Onboarding => onboarding::draw(f, app, area),
        View::ComingSoon => draw_coming_soon(f, area),
        View::About => draw_about(f, area),
    }
}

fn draw_coming_soon(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🚧 Coming soon!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sage is still drawing the map for this course."),
        Line::from("Check back after the next update."),
    ];
    let para = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_about(f: &mut Frame, area: Rect) {
    let para = Paragraph::new("Mathtrail — a gamified path through mathematics.")
        .block(Block::default().borders(Borders::ALL).title(" About "));
    f.render_widget(para, area);
}

fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if app.show_streak {
        spans.push(Span::raw("Press any key to continue"));
    } else {
        match app.view {
            View::Home => {
                spans.extend(vec![
                    Span::styled("j/k", Style::default().fg(Color::Cyan)),
                    Span::raw(" Courses  "),
                    Span::styled("<CR>", Style::default().fg(Color::Cyan)),
                    Span::raw(" Open  "),
                ]);
            }
            View::Path => {
                spans.extend(vec![
                    Span::styled("j/k", Style::default().fg(Color::Cyan)),
                    Span::raw(" Levels  "),
                    Span::styled("<CR>", Style::default().fg(Color::Cyan)),
                    Span::raw(" Start  "),
                    Span::styled("<Esc>", Style::default().fg(Color::Cyan)),
                    Span::raw(" Home  "),
                ]);
            }
            View::Question => {
                if app.session.is_complete() {
                    spans.extend(vec![
                        Span::styled("<CR>", Style::default().fg(Color::Cyan)),
                        Span::raw(" Continue  "),
                    ]);
                } else {
                    if app.board.is_some() {
                        spans.extend(vec![
                            Span::styled("arrows/space", Style::default().fg(Color::Cyan)),
                            Span::raw(" Board  "),
                            Span::styled("x", Style::default().fg(Color::Cyan)),
                            Span::raw(" Reset  "),
                        ]);
                    }
                    if app
                        .current_question()
                        .is_some_and(|q| !q.options.is_empty())
                    {
                        spans.extend(vec![
                            Span::styled("1-9", Style::default().fg(Color::Cyan)),
                            Span::raw(" Answer  "),
                        ]);
                    }
                    spans.extend(vec![
                        Span::styled("<CR>", Style::default().fg(Color::Cyan)),
                        Span::raw(" Check  "),
                        Span::styled("?", Style::default().fg(Color::Cyan)),
                        Span::raw(" Hint  "),
                        Span::styled("<Esc>", Style::default().fg(Color::Cyan)),
                        Span::raw(" Back  "),
                    ]);
                }
            }
            View::ComingSoon => {
                spans.extend(vec![
                    Span::styled("<Esc>", Style::default().fg(Color::Cyan)),
                    Span::raw(" Home  "),
                ]);
            }
            View::Onboarding => {
                spans.extend(vec![
                    Span::styled("1-9", Style::default().fg(Color::Cyan)),
                    Span::raw(" Choose  "),
                ]);
            }
            View::About => {}
        }
        spans.push(Span::styled("q", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" Quit"));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn draw_streak_overlay(f: &mut Frame, app: &App) {
    let area = centered_rect(40, 9, f.area());
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🔥 Streak!",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} days in a row", app.progress.streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}
