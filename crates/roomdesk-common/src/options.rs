use std::collections::HashSet;

use crate::room::Room;

/// Distinct buildings in the snapshot, in first-seen order. Every select fed
/// from one populate pass gets this same list, so the ordering only has to be
/// stable, not meaningful.
pub fn distinct_buildings(rooms: &[Room]) -> Vec<String> {
    distinct(rooms.iter().map(|room| room.building.as_str()))
}

/// Distinct feature tags across all rooms, in first-seen order. Rooms with an
/// empty resources list contribute nothing.
pub fn distinct_features(rooms: &[Room]) -> Vec<String> {
    distinct(
        rooms
            .iter()
            .flat_map(|room| room.resources.iter().map(String::as_str)),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(building: &str, resources: &[&str]) -> Room {
        Room {
            id: 0,
            name: "room".to_string(),
            building: building.to_string(),
            capacity: 10,
            resources: resources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_buildings_deduplicated() {
        let rooms = vec![room("A", &[]), room("A", &[]), room("B", &[])];
        assert_eq!(distinct_buildings(&rooms), vec!["A", "B"]);
    }

    #[test]
    fn test_buildings_first_seen_order() {
        let rooms = vec![room("Z", &[]), room("A", &[]), room("Z", &[]), room("M", &[])];
        assert_eq!(distinct_buildings(&rooms), vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_features_flatten_and_deduplicate() {
        let rooms = vec![
            room("A", &["projector", "whiteboard"]),
            room("B", &["projector", "screen"]),
        ];
        assert_eq!(
            distinct_features(&rooms),
            vec!["projector", "whiteboard", "screen"]
        );
    }

    #[test]
    fn test_empty_resources_contribute_nothing() {
        let rooms = vec![room("A", &[]), room("B", &["projector"])];
        assert_eq!(distinct_features(&rooms), vec!["projector"]);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(distinct_buildings(&[]).is_empty());
        assert!(distinct_features(&[]).is_empty());
    }
}
