use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveField {
    ReservedBy,
    Date,
    Start,
    End,
}

impl ReserveField {
    const ORDER: [ReserveField; 4] = [
        ReserveField::ReservedBy,
        ReserveField::Date,
        ReserveField::Start,
        ReserveField::End,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Reservation form. The booking service has no reservations endpoint, so
/// submitting goes nowhere; the form exists so the flow can be exercised.
#[derive(Debug, Clone)]
pub struct ReserveForm {
    pub room_name: String,
    pub reserved_by: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub active_field: ReserveField,
}

impl ReserveForm {
    pub fn new(room_name: String) -> Self {
        Self {
            room_name,
            reserved_by: String::new(),
            date: String::new(),
            start: String::new(),
            end: String::new(),
            active_field: ReserveField::ReservedBy,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn type_char(&mut self, c: char) {
        self.active_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_mut().pop();
    }

    fn active_mut(&mut self) -> &mut String {
        match self.active_field {
            ReserveField::ReservedBy => &mut self.reserved_by,
            ReserveField::Date => &mut self.date,
            ReserveField::Start => &mut self.start,
            ReserveField::End => &mut self.end,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(50, 60, frame.area());
        frame.render_widget(Clear, area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
            .title(format!(" Reserve '{}' ", self.room_name))
            .title_style(
                Style::default()
                    .fg(Color::Rgb(255, 220, 50))
                    .add_modifier(Modifier::BOLD),
            );
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Reserved by
                Constraint::Length(3), // Date
                Constraint::Length(3), // Start
                Constraint::Length(3), // End
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let fields = [
            (ReserveField::ReservedBy, " Reserved by ", &self.reserved_by, chunks[0]),
            (ReserveField::Date, " Date (YYYY-MM-DD) ", &self.date, chunks[1]),
            (ReserveField::Start, " From (HH:MM) ", &self.start, chunks[2]),
            (ReserveField::End, " Until (HH:MM) ", &self.end, chunks[3]),
        ];
        for (field, label, value, rect) in fields {
            let active = self.active_field == field;
            let style = if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Rgb(80, 80, 100))
            };
            let widget = Paragraph::new(value.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(label),
            );
            frame.render_widget(widget, rect);
            if active {
                frame.set_cursor_position((rect.x + value.len() as u16 + 1, rect.y + 1));
            }
        }

        let help = Paragraph::new("  [Tab] Next field  [Enter] Done  [Esc] Cancel")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }
}
