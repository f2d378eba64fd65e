use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use roomdesk_common::filter::{filter_rooms, FilterCriteria};
use roomdesk_common::options::{distinct_buildings, distinct_features};
use roomdesk_common::room::{Room, RoomDraft};

use crate::api::ApiClient;
use crate::event::{self, AppEvent};
use crate::input::{self, Action};
use crate::ui::browse::{BrowseFocus, BrowseScreen};
use crate::ui::confirm;
use crate::ui::help_popup;
use crate::ui::reserve::ReserveForm;
use crate::ui::room_form::{FormField, RoomForm};

#[derive(Debug)]
pub enum Modal {
    RoomForm(RoomForm),
    Reserve(ReserveForm),
    ConfirmDelete { id: u64, name: String },
    Help,
}

/// Top-level view controller. Owns the snapshot, everything derived from it,
/// and the modal state; handlers get at all of it through here instead of
/// through ambient globals.
pub struct App {
    api: ApiClient,
    /// Rooms as of the last fetch.
    snapshot: Vec<Room>,
    /// Rooms passing the last applied criteria, in snapshot order.
    visible: Vec<Room>,
    buildings: Vec<String>,
    features: Vec<String>,
    /// Last applied criteria, re-run after every refresh.
    criteria: FilterCriteria,
    pub browse: BrowseScreen,
    pub modal: Option<Modal>,
    running: bool,
}

pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    api: ApiClient,
    snapshot: Vec<Room>,
) -> anyhow::Result<()> {
    let mut app = App::new(api, snapshot);

    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(64);
    tokio::spawn(event::event_loop(event_tx));

    while app.running {
        terminal.draw(|frame| app.draw(frame))?;

        let event = match event_rx.recv().await {
            Some(e) => e,
            None => break,
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = input::map_key(key, &app) {
                    app.dispatch(action).await;
                }
            }
        }
    }

    Ok(())
}

impl App {
    pub fn new(api: ApiClient, snapshot: Vec<Room>) -> Self {
        let buildings = distinct_buildings(&snapshot);
        let features = distinct_features(&snapshot);
        let visible = snapshot.clone();
        let mut browse = BrowseScreen::new();
        browse.reset_selection(visible.len());
        Self {
            api,
            snapshot,
            visible,
            buildings,
            features,
            criteria: FilterCriteria::default(),
            browse,
            modal: None,
            running: true,
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        self.browse.draw(frame, &self.visible, self.snapshot.len());

        match &self.modal {
            Some(Modal::RoomForm(form)) => form.draw(frame),
            Some(Modal::Reserve(form)) => form.draw(frame),
            Some(Modal::ConfirmDelete { name, .. }) => confirm::draw_delete_popup(frame, name),
            Some(Modal::Help) => help_popup::draw_help_popup(frame),
            None => {}
        }
    }

    pub fn snapshot(&self) -> &[Room] {
        &self.snapshot
    }

    pub fn visible(&self) -> &[Room] {
        &self.visible
    }

    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.modal = Some(Modal::Help),
            Action::CloseModal => self.modal = None,

            Action::TypeChar(c) => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.type_char(c),
                Some(Modal::Reserve(form)) => form.type_char(c),
                None => self.browse.type_char(c),
                _ => {}
            },
            Action::Backspace => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.backspace(),
                Some(Modal::Reserve(form)) => form.backspace(),
                None => self.browse.backspace(),
                _ => {}
            },
            Action::NextField => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.next_field(),
                Some(Modal::Reserve(form)) => form.next_field(),
                None => self.browse.next_field(),
                _ => {}
            },
            Action::PrevField => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.prev_field(),
                Some(Modal::Reserve(form)) => form.prev_field(),
                None => self.browse.prev_field(),
                _ => {}
            },

            Action::CycleLeft => self.cycle(false),
            Action::CycleRight => self.cycle(true),

            Action::NavigateUp => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.feature_up(),
                None => self.browse.select_prev(self.visible.len()),
                _ => {}
            },
            Action::NavigateDown => match &mut self.modal {
                Some(Modal::RoomForm(form)) => form.feature_down(),
                None => self.browse.select_next(self.visible.len()),
                _ => {}
            },

            Action::FocusFilters => self.browse.focus = BrowseFocus::Filters,
            Action::FocusResults => self.browse.focus = BrowseFocus::Results,

            Action::ClearFilters => {
                self.browse.clear_filters();
                self.criteria = FilterCriteria::default();
                self.apply_criteria();
                self.browse.status_message = None;
            }

            Action::Submit => self.submit().await,

            Action::Refresh => self.refresh().await,

            Action::NewRoom => {
                self.modal = Some(Modal::RoomForm(RoomForm::create(&self.features)));
            }
            Action::EditSelected => {
                if let Some(room) = self.selected_room().cloned() {
                    self.modal = Some(Modal::RoomForm(RoomForm::edit(&room, &self.features)));
                }
            }
            Action::DeleteSelected => {
                if let Some(room) = self.selected_room().cloned() {
                    self.modal = Some(Modal::ConfirmDelete {
                        id: room.id,
                        name: room.name,
                    });
                }
            }
            Action::ReserveSelected => {
                if let Some(room) = self.selected_room().cloned() {
                    self.modal = Some(Modal::Reserve(ReserveForm::new(room.name)));
                }
            }

            Action::ToggleFeature => {
                if let Some(Modal::RoomForm(form)) = &mut self.modal {
                    form.toggle_feature();
                }
            }

            Action::ConfirmDelete => {
                if let Some(Modal::ConfirmDelete { id, name }) = self.modal.take() {
                    match self.api.delete_room(id).await {
                        Ok(()) => {
                            self.browse.status_message = Some(format!("Deleted '{}'", name));
                            self.refresh().await;
                        }
                        Err(e) => {
                            self.browse.status_message = Some(format!("Error: {}", e));
                        }
                    }
                }
            }
        }
    }

    fn cycle(&mut self, forward: bool) {
        match &mut self.modal {
            Some(Modal::RoomForm(form)) => form.cycle_building(&self.buildings, forward),
            None => self.browse.cycle(&self.buildings, &self.features, forward),
            _ => {}
        }
    }

    async fn submit(&mut self) {
        // Enter on the free-text feature field adds the tag instead of
        // saving the whole form
        if let Some(Modal::RoomForm(form)) = &mut self.modal {
            if form.active_field == FormField::NewFeature && !form.new_feature.trim().is_empty()
            {
                form.add_new_feature();
                return;
            }
        }

        match &self.modal {
            Some(Modal::RoomForm(_)) => self.submit_room_form().await,
            Some(Modal::Reserve(_)) => {
                // TODO: post to a reservations endpoint once the service
                // exposes one; for now the form is display-only
                self.modal = None;
                self.browse.status_message =
                    Some("Reservations are not wired to the service yet".to_string());
            }
            Some(_) => {}
            None => {
                if self.browse.focus == BrowseFocus::Filters {
                    self.apply_filter_from_controls();
                }
            }
        }
    }

    /// Build fresh criteria from whatever is in the filter controls and
    /// re-filter the snapshot with them.
    fn apply_filter_from_controls(&mut self) {
        match FilterCriteria::from_controls(
            &self.browse.building,
            &self.browse.name,
            &self.browse.feature,
            &self.browse.capacity,
        ) {
            Ok(criteria) => {
                self.criteria = criteria;
                self.apply_criteria();
                self.browse.status_message = None;
                self.browse.focus = BrowseFocus::Results;
            }
            Err(e) => {
                self.browse.status_message = Some(format!("Error: {}", e));
            }
        }
    }

    fn apply_criteria(&mut self) {
        self.visible = filter_rooms(&self.snapshot, &self.criteria);
        self.browse.reset_selection(self.visible.len());
    }

    async fn submit_room_form(&mut self) {
        let (target, draft_result) = match &self.modal {
            Some(Modal::RoomForm(form)) => (
                form.target,
                RoomDraft::from_controls(
                    &form.name,
                    &form.building,
                    &form.capacity,
                    form.selected_features(),
                ),
            ),
            _ => return,
        };

        let draft = match draft_result {
            Ok(draft) => draft,
            Err(e) => {
                if let Some(Modal::RoomForm(form)) = &mut self.modal {
                    form.error_message = Some(e.to_string());
                }
                return;
            }
        };

        let result = match target {
            Some(id) => self.api.update_room(id, &draft).await,
            None => self.api.create_room(&draft).await,
        };

        match result {
            Ok(()) => {
                self.modal = None;
                self.browse.status_message = Some(match target {
                    Some(_) => format!("Saved '{}'", draft.name),
                    None => format!("Created '{}'", draft.name),
                });
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!("room save failed: {}", e);
                if let Some(Modal::RoomForm(form)) = &mut self.modal {
                    form.error_message = Some(format!("{}", e));
                }
            }
        }
    }

    /// Re-fetch the snapshot and rebuild everything derived from it. Runs
    /// after every mutation so the list never shows pre-mutation data.
    async fn refresh(&mut self) {
        match self.api.list_rooms().await {
            Ok(rooms) => {
                self.snapshot = rooms;
                self.buildings = distinct_buildings(&self.snapshot);
                self.features = distinct_features(&self.snapshot);
                self.apply_criteria();
            }
            Err(e) => {
                tracing::warn!("refresh failed: {}", e);
                self.browse.status_message = Some(format!("Error: {}", e));
            }
        }
    }

    fn selected_room(&self) -> Option<&Room> {
        self.browse
            .table_state
            .selected()
            .and_then(|i| self.visible.get(i))
    }
}
