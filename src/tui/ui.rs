//! Stateless UI rendering for the terminal surface.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_match::{Mark, Position};

/// Draws one frame from the surface state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Names
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if app.name_entry_visible() {
        draw_names(frame, chunks[1], app);
    }

    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(help_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn help_text(app: &App) -> String {
    match app.focus() {
        Focus::Names => "Type names, Tab to switch, Enter to Play, Esc to quit".to_string(),
        Focus::Board => {
            let mut help = String::from("Arrows to move, Enter to mark");
            if app.restart_visible() {
                help.push_str(", r to restart");
            }
            if app.name_entry_visible() {
                help.push_str(", n for new names");
            }
            help.push_str(", q to quit");
            help
        }
    }
}

fn draw_names(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .names()
        .iter()
        .zip([Mark::X, Mark::O])
        .enumerate()
        .map(|(i, (name, mark))| {
            let editing = app.focus() == Focus::Names && app.field() == i;
            let style = if editing {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            let caret = if editing { "_" } else { "" };
            Line::from(vec![
                Span::raw(format!("Player {} ({mark}): ", i + 1)),
                Span::styled(format!("{name}{caret}"), style),
            ])
        })
        .collect();

    let inputs = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(inputs, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let cols: Vec<_> = [rows[0], rows[2], rows[4]]
        .into_iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                ])
                .split(row)
        })
        .collect();

    for pos in Position::iter() {
        let row = &cols[pos.row()];
        draw_cell(frame, row[pos.col() * 2], app, pos);
        if pos.col() < 2 {
            draw_separator_vertical(frame, row[pos.col() * 2 + 1]);
        }
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.board().cell(pos).mark() {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Mark::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let in_line = app.highlighted().is_some_and(|line| line.contains(&pos));
    let style = if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
