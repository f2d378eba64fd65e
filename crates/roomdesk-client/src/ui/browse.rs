use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use roomdesk_common::room::Room;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseFocus {
    Filters,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Building,
    Name,
    Feature,
    Capacity,
}

impl FilterField {
    const ORDER: [FilterField; 4] = [
        FilterField::Building,
        FilterField::Name,
        FilterField::Feature,
        FilterField::Capacity,
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

/// The main screen: filter controls on top, matching rooms below. The filter
/// control values live here; criteria objects are built from them on each
/// apply and thrown away afterwards.
#[derive(Debug, Clone)]
pub struct BrowseScreen {
    pub focus: BrowseFocus,
    pub active_field: FilterField,
    /// Selected building, empty for "any".
    pub building: String,
    pub name: String,
    /// Selected feature tag, empty for "any".
    pub feature: String,
    pub capacity: String,
    pub table_state: TableState,
    pub status_message: Option<String>,
}

impl BrowseScreen {
    pub fn new() -> Self {
        Self {
            focus: BrowseFocus::Results,
            active_field: FilterField::Building,
            building: String::new(),
            name: String::new(),
            feature: String::new(),
            capacity: String::new(),
            table_state: TableState::default(),
            status_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn type_char(&mut self, c: char) {
        match self.active_field {
            FilterField::Name => self.name.push(c),
            FilterField::Capacity => self.capacity.push(c),
            // Building and feature are selects, fed from the snapshot
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FilterField::Name => {
                self.name.pop();
            }
            FilterField::Capacity => {
                self.capacity.pop();
            }
            _ => {}
        }
    }

    pub fn cycle(&mut self, buildings: &[String], features: &[String], forward: bool) {
        match self.active_field {
            FilterField::Building => {
                self.building = cycle_select(&self.building, buildings, forward);
            }
            FilterField::Feature => {
                self.feature = cycle_select(&self.feature, features, forward);
            }
            _ => {}
        }
    }

    pub fn clear_filters(&mut self) {
        self.building.clear();
        self.name.clear();
        self.feature.clear();
        self.capacity.clear();
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Clamp the selection after the visible list changed size.
    pub fn reset_selection(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            match self.table_state.selected() {
                Some(i) if i < len => {}
                _ => self.table_state.select(Some(0)),
            }
        }
    }

    pub fn draw(
        &self,
        frame: &mut Frame,
        rooms: &[Room],
        total: usize,
    ) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Length(3), // Filter form
                Constraint::Min(5),    // Results table
                Constraint::Length(3), // Help bar
            ])
            .split(area);

        // Title
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "  ROOMDESK ",
                Style::default()
                    .fg(Color::Rgb(255, 220, 50))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("showing {} of {} rooms", rooms.len(), total),
                Style::default().fg(Color::Rgb(180, 180, 200)),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 80))),
        );
        frame.render_widget(title, chunks[0]);

        self.draw_filter_form(frame, chunks[1]);
        self.draw_results(frame, chunks[2], rooms);
        self.draw_help_bar(frame, chunks[3]);
    }

    fn draw_filter_form(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
            ])
            .split(area);

        let specs = [
            (FilterField::Building, " Building ", select_label(&self.building), fields[0]),
            (FilterField::Name, " Name ", self.name.clone(), fields[1]),
            (FilterField::Feature, " Feature ", select_label(&self.feature), fields[2]),
            (FilterField::Capacity, " Max Cap. ", self.capacity.clone(), fields[3]),
        ];

        for (field, title, value, rect) in specs {
            let active = self.focus == BrowseFocus::Filters && self.active_field == field;
            let border_style = if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Rgb(80, 80, 100))
            };
            let widget = Paragraph::new(value).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );
            frame.render_widget(widget, rect);

            // Cursor only makes sense on the typed fields
            if active && matches!(field, FilterField::Name | FilterField::Capacity) {
                let len = match field {
                    FilterField::Name => self.name.len(),
                    _ => self.capacity.len(),
                };
                frame.set_cursor_position((rect.x + len as u16 + 1, rect.y + 1));
            }
        }
    }

    fn draw_results(&self, frame: &mut Frame, area: ratatui::layout::Rect, rooms: &[Room]) {
        if rooms.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "  No rooms match the current filter.",
                Style::default().fg(Color::Rgb(120, 120, 140)),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
                    .title(" Rooms ")
                    .title_style(Style::default().fg(Color::Rgb(180, 180, 200))),
            );
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Name").style(Style::default().fg(Color::Rgb(180, 180, 200))),
            Cell::from("Building").style(Style::default().fg(Color::Rgb(180, 180, 200))),
            Cell::from("Capacity").style(Style::default().fg(Color::Rgb(180, 180, 200))),
            Cell::from("Features").style(Style::default().fg(Color::Rgb(180, 180, 200))),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = rooms
            .iter()
            .map(|room| {
                Row::new(vec![
                    Cell::from(room.name.clone())
                        .style(Style::default().fg(Color::Rgb(200, 200, 220))),
                    Cell::from(room.building.clone())
                        .style(Style::default().fg(Color::Rgb(150, 150, 170))),
                    Cell::from(format!("{}", room.capacity))
                        .style(Style::default().fg(Color::Rgb(150, 150, 170))),
                    Cell::from(room.resources.join(", "))
                        .style(Style::default().fg(Color::Rgb(130, 170, 150))),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(35),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
                    .title(" Rooms ")
                    .title_style(Style::default().fg(Color::Rgb(180, 180, 200))),
            )
            .row_highlight_style(
                Style::default()
                    .bg(Color::Rgb(40, 40, 60))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(" > ");

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans = vec![Span::raw("  ")];
        if let Some(ref msg) = self.status_message {
            spans.push(Span::styled(
                format!("{} | ", msg),
                Style::default().fg(Color::Rgb(255, 200, 100)),
            ));
        }
        match self.focus {
            BrowseFocus::Filters => spans.extend_from_slice(&[
                Span::styled("[Tab]", Style::default().fg(Color::Rgb(100, 200, 255))),
                Span::styled(" Next field  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[<-/->]", Style::default().fg(Color::Rgb(200, 150, 255))),
                Span::styled(" Choose  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[Enter]", Style::default().fg(Color::Rgb(100, 255, 150))),
                Span::styled(" Apply  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[Esc]", Style::default().fg(Color::Rgb(255, 150, 100))),
                Span::styled(" Back to list", Style::default().fg(Color::Rgb(120, 120, 140))),
            ]),
            BrowseFocus::Results => spans.extend_from_slice(&[
                Span::styled("[F]", Style::default().fg(Color::Rgb(100, 200, 255))),
                Span::styled(" Filter  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[N]", Style::default().fg(Color::Rgb(100, 255, 150))),
                Span::styled(" New  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[E]", Style::default().fg(Color::Rgb(200, 150, 255))),
                Span::styled(" Edit  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[D]", Style::default().fg(Color::Rgb(255, 150, 100))),
                Span::styled(" Delete  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[Enter]", Style::default().fg(Color::Rgb(100, 255, 150))),
                Span::styled(" Reserve  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[R]", Style::default().fg(Color::Rgb(255, 200, 100))),
                Span::styled(" Reload  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[?]", Style::default().fg(Color::Rgb(180, 180, 200))),
                Span::styled(" Help  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled("[Q]", Style::default().fg(Color::Rgb(255, 150, 100))),
                Span::styled(" Quit", Style::default().fg(Color::Rgb(120, 120, 140))),
            ]),
        }
        let help = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 80))),
        );
        frame.render_widget(help, area);
    }
}

fn select_label(value: &str) -> String {
    if value.is_empty() {
        "(any)".to_string()
    } else {
        value.to_string()
    }
}

/// Step a select control through "" (any) followed by the option list. A
/// value that no longer exists in the options restarts the cycle from "any".
pub fn cycle_select(current: &str, options: &[String], forward: bool) -> String {
    let len = options.len() + 1;
    let pos = if current.is_empty() {
        0
    } else {
        options
            .iter()
            .position(|o| o == current)
            .map(|i| i + 1)
            .unwrap_or(0)
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_select_forward_through_any() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert_eq!(cycle_select("", &options, true), "A");
        assert_eq!(cycle_select("A", &options, true), "B");
        assert_eq!(cycle_select("B", &options, true), "");
    }

    #[test]
    fn test_cycle_select_backward() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert_eq!(cycle_select("", &options, false), "B");
        assert_eq!(cycle_select("A", &options, false), "");
    }

    #[test]
    fn test_cycle_select_stale_value_restarts() {
        let options = vec!["A".to_string()];
        // "Z" was an option before a refresh removed it
        assert_eq!(cycle_select("Z", &options, true), "A");
    }

    #[test]
    fn test_cycle_select_no_options() {
        assert_eq!(cycle_select("", &[], true), "");
    }
}
