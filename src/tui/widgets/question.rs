use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::board::Board;
use crate::models::Template;
use crate::session::Status;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress gauge
            Constraint::Length(4), // Prompt
            Constraint::Min(0),    // Board / options
            Constraint::Length(3), // Mascot line
        ])
        .split(area);

    draw_gauge(f, app, chunks[0]);
    draw_prompt(f, app, chunks[1]);

    if let (Some(board), Some(template)) = (&app.board, question.template.as_ref()) {
        if question.options.is_empty() {
            draw_board(f, app, board, template, chunks[2]);
        } else {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2]);
            draw_board(f, app, board, template, halves[0]);
            draw_options(f, app, halves[1]);
        }
    } else {
        draw_options(f, app, chunks[2]);
    }

    draw_mascot(f, app, chunks[3]);
}

fn draw_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (position, total) = app.question_position();
    let ratio = if total == 0 {
        0.0
    } else {
        position as f64 / total as f64
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{}/{}", position, total));
    f.render_widget(gauge, area);
}

fn draw_prompt(f: &mut Frame, app: &App, area: Rect) {
    let Some(question) = app.current_question() else {
        return;
    };
    let mut lines = vec![Line::from(Span::styled(
        question.prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(sub) = question.sub_prompt {
        lines.push(Line::from(Span::styled(
            sub,
            Style::default().fg(Color::DarkGray),
        )));
    }
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_options(f: &mut Frame, app: &App, area: Rect) {
    let Some(question) = app.current_question() else {
        return;
    };
    if question.options.is_empty() {
        return;
    }

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let selected = app.session.selected() == Some(i);
            let style = match (app.session.status(), selected) {
                (Status::Correct, true) => Style::default().fg(Color::Black).bg(Color::Green),
                (Status::Wrong, true) => Style::default().fg(Color::Black).bg(Color::Red),
                (_, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
                _ => Style::default().fg(Color::White),
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {}. {} ", i + 1, opt),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Answers "));
    f.render_widget(list, area);
}

fn draw_board(f: &mut Frame, app: &App, board: &Board, template: &Template, area: Rect) {
    let lines = match template {
        Template::Rotate { .. } => rotate_lines(board),
        Template::Mirror { source_points, .. } => {
            grid_lines(board, app.cursor, Some(source_points.as_slice()), true)
        }
        Template::Match { target_offset, .. } => match_lines(board, *target_offset),
        Template::Measure { .. } | Template::Build { .. } => {
            let mut lines = grid_lines(board, app.cursor, None, false);
            lines.push(Line::from(""));
            lines.push(metrics_line(board));
            lines
        }
    };

    let para = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Discovery board · {} ", template.label())),
    );
    f.render_widget(para, area);
}

/// Square grid of cells; the mirror variant draws the source shape on the
/// left and a fold line down the middle.
fn grid_lines(
    board: &Board,
    cursor: (i32, i32),
    source: Option<&[crate::models::Point]>,
    fold: bool,
) -> Vec<Line<'static>> {
    let size = board.grid_size();
    let mid = size / 2;
    let mut lines = Vec::with_capacity(size as usize);

    for y in 0..size {
        let mut spans = Vec::new();
        for x in 0..size {
            if fold && x == mid {
                spans.push(Span::styled("┊", Style::default().fg(Color::Magenta)));
            }
            let is_source = source
                .map(|pts| pts.iter().any(|p| p.x == x && p.y == y))
                .unwrap_or(false);
            let is_set = board.has_point(x, y);
            let is_cursor = cursor == (x, y);

            let (glyph, style) = if is_set {
                ("■ ", Style::default().fg(Color::Cyan))
            } else if is_source {
                ("● ", Style::default().fg(Color::Yellow))
            } else {
                ("· ", Style::default().fg(Color::DarkGray))
            };
            let style = if is_cursor {
                style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                style
            };
            spans.push(Span::styled(glyph, style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn rotate_lines(board: &Board) -> Vec<Line<'static>> {
    let angle = board.rotation().rem_euclid(360);
    let arrow = match angle {
        90 => "▶",
        180 => "▼",
        270 => "◀",
        _ => "▲",
    };
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("      {}      ", arrow),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   rotation: {}°", angle)),
    ]
}

/// The movable shape is a 2x2 block; the ghost outline marks where it
/// should land.
fn match_lines(board: &Board, target: crate::models::Point) -> Vec<Line<'static>> {
    let size = board.grid_size();
    let base = size / 2 - 1;
    let offset = board.offset();
    let mut lines = Vec::with_capacity(size as usize);

    for y in 0..size {
        let mut spans = Vec::new();
        for x in 0..size {
            let in_shape = (base + offset.x..base + offset.x + 2).contains(&x)
                && (base + offset.y..base + offset.y + 2).contains(&y);
            let in_ghost = (base + target.x..base + target.x + 2).contains(&x)
                && (base + target.y..base + target.y + 2).contains(&y);

            let (glyph, style) = if in_shape {
                ("■ ", Style::default().fg(Color::Cyan))
            } else if in_ghost {
                ("▢ ", Style::default().fg(Color::Yellow))
            } else {
                ("· ", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(glyph, style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn metrics_line(board: &Board) -> Line<'static> {
    Line::from(vec![
        Span::styled("perimeter ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.1}", board.perimeter()),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled("area ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.1}", board.area()),
            Style::default().fg(Color::White),
        ),
    ])
}

fn draw_mascot(f: &mut Frame, app: &App, area: Rect) {
    let (line, color) = match app.session.status() {
        Status::Correct => {
            let text = app
                .current_question()
                .map(|q| format!("Wonderful! ✨ {}", q.explanation))
                .unwrap_or_else(|| "Wonderful! ✨".to_string());
            (text, Color::Green)
        }
        Status::Wrong => (
            app.mascot_line
                .clone()
                .unwrap_or_else(|| "Hmm, not quite. Look again!".to_string()),
            Color::Red,
        ),
        Status::Idle => (
            app.mascot_line
                .clone()
                .unwrap_or_else(|| "Ready? Let's discover together!".to_string()),
            Color::White,
        ),
    };

    let para = Paragraph::new(Line::from(Span::styled(
        line,
        Style::default().fg(color),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Sage 🦉 "));
    f.render_widget(para, area);
}
