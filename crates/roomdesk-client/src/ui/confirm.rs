use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

pub fn draw_delete_popup(frame: &mut Frame, room_name: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(255, 150, 100)))
        .title(" Remove Room ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 150, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let question = Paragraph::new(Line::from(vec![
        Span::styled("  Delete '", Style::default().fg(Color::Rgb(180, 180, 200))),
        Span::styled(
            room_name.to_string(),
            Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("'?", Style::default().fg(Color::Rgb(180, 180, 200))),
    ]));
    frame.render_widget(question, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled("[Y]", Style::default().fg(Color::Rgb(255, 150, 100))),
        Span::styled(" Delete  ", Style::default().fg(Color::Rgb(120, 120, 140))),
        Span::styled("[N]/[Esc]", Style::default().fg(Color::Rgb(100, 255, 150))),
        Span::styled(" Keep it", Style::default().fg(Color::Rgb(120, 120, 140))),
    ]));
    frame.render_widget(help, chunks[2]);
}
