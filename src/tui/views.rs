//! Rendering for the demo host
//!
//! Draws the visible slice of the page, then the tour overlay on top of
//! it, then the status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tour::stage::Stage;

use super::app::App;
use super::layout::page_to_screen;
use super::page::{Node, Page};

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let page_area = chunks[0];
    app.page.set_viewport(page_area);

    render_page(frame, &app.page, page_area);
    app.tour.render(frame, &app.page, page_area);
    render_status_bar(frame, app, chunks[1]);
}

/// Draw every page region visible under the current scroll
fn render_page(frame: &mut Frame, page: &Page, area: Rect) {
    let scroll = page.scroll_offset();

    for node in page.nodes() {
        let Some(screen) = page_to_screen(node.rect, scroll) else {
            continue;
        };
        let visible = screen.intersection(area);
        if visible.is_empty() {
            continue;
        }

        let (border_color, title_color) = if node.parent.is_some() {
            (Color::DarkGray, Color::Gray)
        } else {
            (Color::Blue, Color::White)
        };

        let block = Block::default()
            .title(format!(" {} ", node.title))
            .title_style(Style::default().fg(title_color))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(visible);
        frame.render_widget(block, visible);

        if !inner.is_empty() {
            frame.render_widget(
                Paragraph::new(node_filler(node)).style(Style::default().fg(Color::DarkGray)),
                inner,
            );
        }
    }
}

/// Static placeholder content per region
fn node_filler(node: &Node) -> Vec<Line<'static>> {
    match node.name {
        "stat-active" => vec![Line::from("  1,204"), Line::from("  +3.1% this week")],
        "stat-errors" => vec![Line::from("  0.4%"), Line::from("  -0.1% this week")],
        "stat-uptime" => vec![Line::from("  99.97%"), Line::from("  30-day window")],
        "activity" => vec![
            Line::from(" 09:14  deploy finished (web-7)"),
            Line::from(" 09:02  alert resolved: latency"),
            Line::from(" 08:45  new user: m.ortiz"),
            Line::from(" 08:31  report exported (Q3)"),
            Line::from(" 08:12  settings changed by admin"),
        ],
        "chart" => vec![
            Line::from("      *"),
            Line::from("   *  *  *        *"),
            Line::from("   *  *  *  *  *  *  *"),
            Line::from("   M  T  W  T  F  S  S"),
        ],
        "footer" => vec![Line::from(" Acme Dashboard - demo data only")],
        _ => Vec::new(),
    }
}

/// Draw the key-hint status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else if app.tour.is_active() {
        Line::from(vec![
            Span::styled("->", Style::default().fg(Color::Green)),
            Span::raw(" next  "),
            Span::styled("<-", Style::default().fg(Color::Cyan)),
            Span::raw(" back  "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" dismiss  "),
            Span::raw("click outside to leave  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Green)),
            Span::raw(" start tour  "),
            Span::raw("arrows scroll  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}
