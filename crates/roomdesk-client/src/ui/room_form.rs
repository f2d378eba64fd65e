use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use roomdesk_common::room::Room;

use super::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Building,
    Capacity,
    Features,
    NewFeature,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Building,
        FormField::Capacity,
        FormField::Features,
        FormField::NewFeature,
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

/// Modal form used for both creating and editing a room. `target` carries the
/// id of the room being edited; `None` means create.
#[derive(Debug, Clone)]
pub struct RoomForm {
    pub target: Option<u64>,
    pub name: String,
    pub building: String,
    pub capacity: String,
    /// Known feature tags with their selected state.
    pub features: Vec<(String, bool)>,
    pub feature_cursor: usize,
    /// Free-text entry for a tag the snapshot does not know yet.
    pub new_feature: String,
    pub active_field: FormField,
    pub error_message: Option<String>,
}

impl RoomForm {
    pub fn create(known_features: &[String]) -> Self {
        Self {
            target: None,
            name: String::new(),
            building: String::new(),
            capacity: String::new(),
            features: known_features
                .iter()
                .map(|tag| (tag.clone(), false))
                .collect(),
            feature_cursor: 0,
            new_feature: String::new(),
            active_field: FormField::Name,
            error_message: None,
        }
    }

    pub fn edit(room: &Room, known_features: &[String]) -> Self {
        let mut features: Vec<(String, bool)> = known_features
            .iter()
            .map(|tag| (tag.clone(), room.resources.contains(tag)))
            .collect();
        // The room may carry tags the snapshot never surfaced
        for tag in &room.resources {
            if !features.iter().any(|(known, _)| known == tag) {
                features.push((tag.clone(), true));
            }
        }
        Self {
            target: Some(room.id),
            name: room.name.clone(),
            building: room.building.clone(),
            capacity: room.capacity.to_string(),
            features,
            feature_cursor: 0,
            new_feature: String::new(),
            active_field: FormField::Name,
            error_message: None,
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
            FormField::Name => self.name.push(c),
            FormField::Building => self.building.push(c),
            FormField::Capacity => self.capacity.push(c),
            FormField::NewFeature => self.new_feature.push(c),
            FormField::Features => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Building => {
                self.building.pop();
            }
            FormField::Capacity => {
                self.capacity.pop();
            }
            FormField::NewFeature => {
                self.new_feature.pop();
            }
            FormField::Features => {}
        }
    }

    /// Left/Right on the building field steps through the known buildings,
    /// without preventing free-typed ones.
    pub fn cycle_building(&mut self, buildings: &[String], forward: bool) {
        if self.active_field == FormField::Building {
            self.building = super::browse::cycle_select(&self.building, buildings, forward);
        }
    }

    pub fn feature_up(&mut self) {
        if self.active_field == FormField::Features && self.feature_cursor > 0 {
            self.feature_cursor -= 1;
        }
    }

    pub fn feature_down(&mut self) {
        if self.active_field == FormField::Features
            && self.feature_cursor + 1 < self.features.len()
        {
            self.feature_cursor += 1;
        }
    }

    pub fn toggle_feature(&mut self) {
        if let Some((_, selected)) = self.features.get_mut(self.feature_cursor) {
            *selected = !*selected;
        }
    }

    /// Move the free-text tag into the feature list, pre-selected.
    pub fn add_new_feature(&mut self) {
        let tag = self.new_feature.trim().to_string();
        if tag.is_empty() {
            return;
        }
        if let Some((_, selected)) = self.features.iter_mut().find(|(known, _)| *known == tag) {
            *selected = true;
        } else {
            self.features.push((tag, true));
        }
        self.new_feature.clear();
    }

    pub fn selected_features(&self) -> Vec<String> {
        self.features
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(55, 80, frame.area());
        frame.render_widget(Clear, area);

        let title = if self.target.is_some() {
            " Edit Room "
        } else {
            " New Room "
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
            .title(title)
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
                Constraint::Length(3), // Name
                Constraint::Length(3), // Building
                Constraint::Length(3), // Capacity
                Constraint::Min(4),    // Feature list
                Constraint::Length(3), // New feature
                Constraint::Length(1), // Error
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let text_fields = [
            (FormField::Name, " Name ", &self.name, chunks[0]),
            (FormField::Building, " Building (arrows to pick) ", &self.building, chunks[1]),
            (FormField::Capacity, " Capacity ", &self.capacity, chunks[2]),
            (FormField::NewFeature, " Add feature ", &self.new_feature, chunks[4]),
        ];
        for (field, label, value, rect) in text_fields {
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

        // Feature toggle list
        let features_active = self.active_field == FormField::Features;
        let items: Vec<ListItem> = self
            .features
            .iter()
            .map(|(tag, selected)| {
                let mark = if *selected { "[x]" } else { "[ ]" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", mark),
                        Style::default().fg(if *selected {
                            Color::Rgb(100, 255, 150)
                        } else {
                            Color::Rgb(120, 120, 140)
                        }),
                    ),
                    Span::styled(tag.clone(), Style::default().fg(Color::Rgb(200, 200, 220))),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if features_active {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Rgb(80, 80, 100))
                    })
                    .title(" Features (space toggles) "),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(40, 40, 60))
                    .add_modifier(Modifier::BOLD),
            );
        let mut list_state = ListState::default();
        if features_active && !self.features.is_empty() {
            list_state.select(Some(self.feature_cursor));
        }
        frame.render_stateful_widget(list, chunks[3], &mut list_state);

        if let Some(ref err) = self.error_message {
            let error = Paragraph::new(format!("  {}", err))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(error, chunks[5]);
        }

        let help = Paragraph::new(
            "  [Tab] Next field  [Enter] Save  [Esc] Cancel",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[6]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room {
            id: 9,
            name: "Alpha".to_string(),
            building: "X".to_string(),
            capacity: 10,
            resources: vec!["projector".to_string(), "lectern".to_string()],
        }
    }

    #[test]
    fn test_edit_preselects_room_tags() {
        let known = vec!["projector".to_string(), "whiteboard".to_string()];
        let form = RoomForm::edit(&room(), &known);

        assert_eq!(form.target, Some(9));
        // known tags keep snapshot order; the room-only tag lands at the end
        assert_eq!(
            form.features,
            vec![
                ("projector".to_string(), true),
                ("whiteboard".to_string(), false),
                ("lectern".to_string(), true),
            ]
        );
        assert_eq!(form.selected_features(), vec!["projector", "lectern"]);
    }

    #[test]
    fn test_toggle_feature() {
        let known = vec!["projector".to_string()];
        let mut form = RoomForm::create(&known);
        form.active_field = FormField::Features;
        form.toggle_feature();
        assert_eq!(form.selected_features(), vec!["projector"]);
        form.toggle_feature();
        assert!(form.selected_features().is_empty());
    }

    #[test]
    fn test_add_new_feature() {
        let mut form = RoomForm::create(&[]);
        form.new_feature = "screen".to_string();
        form.add_new_feature();
        assert_eq!(form.selected_features(), vec!["screen"]);
        assert!(form.new_feature.is_empty());
    }

    #[test]
    fn test_add_existing_feature_selects_it() {
        let known = vec!["projector".to_string()];
        let mut form = RoomForm::create(&known);
        form.new_feature = "projector".to_string();
        form.add_new_feature();
        assert_eq!(form.features.len(), 1);
        assert_eq!(form.selected_features(), vec!["projector"]);
    }
}
