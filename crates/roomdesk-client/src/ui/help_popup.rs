use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

pub fn draw_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, popup_area);

    let sections = vec![
        (
            "ROOM LIST",
            Color::Rgb(100, 200, 255),
            vec![
                ("[j]/[k], arrows", "Move between rooms"),
                ("[Enter]", "Open the reservation form"),
                ("[N]", "Create a new room"),
                ("[E]", "Edit the selected room"),
                ("[D]", "Delete the selected room (asks first)"),
                ("[R]", "Reload rooms from the server"),
                ("[F] or [/]", "Jump to the filter form"),
                ("[C]", "Clear all filters"),
            ],
        ),
        (
            "FILTER FORM",
            Color::Rgb(200, 150, 255),
            vec![
                ("[Tab]/[Shift+Tab]", "Move between filter fields"),
                ("Left/Right", "Pick a building or feature"),
                ("typing", "Name substring / max capacity"),
                ("[Enter]", "Apply the filter"),
                ("[Esc]", "Back to the list without applying"),
            ],
        ),
        (
            "ROOM FORM",
            Color::Rgb(100, 255, 150),
            vec![
                ("[Tab]", "Move between fields"),
                ("[Space]", "Toggle a feature tag"),
                ("[Enter]", "Save (or add the typed feature)"),
                ("[Esc]", "Cancel"),
            ],
        ),
    ];

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (title, color, items) in &sections {
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for (key, desc) in items {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:<20}", key),
                    Style::default().fg(Color::Rgb(200, 200, 220)),
                ),
                Span::styled(*desc, Style::default().fg(Color::Rgb(150, 150, 170))),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press [?] or any key to close",
        Style::default().fg(Color::Rgb(100, 100, 120)),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
            .title(" Help - Roomdesk Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(255, 220, 50))
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(paragraph, popup_area);
}
