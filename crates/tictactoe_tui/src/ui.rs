//! Stateless rendering of the app.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tictactoe_engine::{Player, Position};

use crate::app::{App, Popup};

const HELP: &str = "Arrows move | Enter/Space or 1-9 play | q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(popup) = app.popup() {
        draw_popup(frame, area, popup);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

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

    let available = app.engine().available_moves();
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row, &available);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, available: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos, available);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, available: &[Position]) {
    let engine = app.engine();
    let playable = available.contains(&pos);
    let winning = engine
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let cell = engine.cell_at(pos);
    let symbol = match cell.player() {
        Some(player) => player.to_string(),
        None if playable => (pos.to_index() + 1).to_string(),
        None => "·".to_string(),
    };
    let mut base_style = match cell.player() {
        None => Style::default().fg(Color::DarkGray),
        Some(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if !playable && !winning {
        base_style = base_style.add_modifier(Modifier::DIM);
    }

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !engine.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Pad to the full cell so the highlight covers a block, not one glyph
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(
            format!("{:^width$}", symbol, width = area.width as usize),
            style,
        )),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_popup(frame: &mut Frame, area: Rect, popup: Popup) {
    let popup_area = center_rect(area, 44, 6);
    let border = match popup {
        Popup::IllegalMove => Color::Red,
        Popup::GameOver(_) => Color::Green,
        Popup::ConfirmQuit => Color::Yellow,
    };

    let body = Paragraph::new(popup.message())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(popup.title()),
        );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(body, popup_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
