use roomdesk_common::room::{Room, RoomDraft};

/// In-memory room storage. Ids come from a counter that never reuses a value,
/// so a delete followed by a create cannot resurrect an old id.
pub struct RoomStore {
    rooms: Vec<Room>,
    next_id: u64,
}

impl RoomStore {
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            next_id: 1,
        }
    }

    /// A handful of rooms for local development, so the client has something
    /// to browse without a POST first.
    pub fn with_sample_rooms() -> Self {
        let mut store = Self::new();
        for (name, building, capacity, resources) in [
            ("Alpha", "Block X", 10, vec!["projector"]),
            ("Beta", "Block Y", 5, vec![]),
            ("Gamma Lab", "Block X", 30, vec!["projector", "whiteboard"]),
            ("Auditorium", "Block Z", 120, vec!["projector", "microphone"]),
        ] {
            store.create(RoomDraft {
                name: name.to_string(),
                building: building.to_string(),
                capacity,
                resources: resources.into_iter().map(str::to_string).collect(),
            });
        }
        store
    }

    pub fn list(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    pub fn create(&mut self, draft: RoomDraft) -> Room {
        let room = Room {
            id: self.next_id,
            name: draft.name,
            building: draft.building,
            capacity: draft.capacity,
            resources: draft.resources,
        };
        self.next_id += 1;
        self.rooms.push(room.clone());
        room
    }

    pub fn update(&mut self, id: u64, draft: RoomDraft) -> Option<Room> {
        let room = self.rooms.iter_mut().find(|room| room.id == id)?;
        room.name = draft.name;
        room.building = draft.building;
        room.capacity = draft.capacity;
        room.resources = draft.resources;
        Some(room.clone())
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|room| room.id != id);
        self.rooms.len() < before
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> RoomDraft {
        RoomDraft {
            name: name.to_string(),
            building: "X".to_string(),
            capacity: 10,
            resources: Vec::new(),
        }
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = RoomStore::new();
        let a = store.create(draft("a"));
        let b = store.create(draft("b"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = RoomStore::new();
        store.create(draft("a"));
        store.create(draft("b"));
        store.create(draft("c"));
        let names: Vec<String> = store.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_existing_room() {
        let mut store = RoomStore::new();
        let room = store.create(draft("a"));

        let mut new_draft = draft("renamed");
        new_draft.capacity = 99;
        let updated = store.update(room.id, new_draft).unwrap();

        assert_eq!(updated.id, room.id);
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.capacity, 99);
        assert_eq!(store.list()[0].name, "renamed");
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let mut store = RoomStore::new();
        assert!(store.update(42, draft("x")).is_none());
    }

    #[test]
    fn test_delete() {
        let mut store = RoomStore::new();
        let room = store.create(draft("a"));
        assert!(store.delete(room.id));
        assert!(store.list().is_empty());
        assert!(!store.delete(room.id));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = RoomStore::new();
        let a = store.create(draft("a"));
        store.delete(a.id);
        let b = store.create(draft("b"));
        assert!(b.id > a.id);
    }
}
