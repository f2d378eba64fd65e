use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A bookable room as the booking service stores it. The client only ever
/// holds a point-in-time copy of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub name: String,
    pub building: String,
    pub capacity: u32,
    /// Amenity tags ("projector", "whiteboard", ...). Some rooms in the wild
    /// omit the field entirely, so absent deserializes as empty.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Body shape for create and update calls. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub name: String,
    pub building: String,
    pub capacity: u32,
    pub resources: Vec<String>,
}

impl RoomDraft {
    /// Build a draft from raw form field values, validating what the form
    /// cannot: a non-empty name and building, and a numeric capacity.
    pub fn from_controls(
        name: &str,
        building: &str,
        capacity: &str,
        resources: Vec<String>,
    ) -> Result<Self, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("room name cannot be empty".into()));
        }
        let building = building.trim();
        if building.is_empty() {
            return Err(ApiError::Validation("building cannot be empty".into()));
        }
        let capacity = parse_capacity(capacity)?;
        Ok(Self {
            name: name.to_string(),
            building: building.to_string(),
            capacity,
            resources,
        })
    }
}

/// Parse a capacity field. Empty is rejected here; filters that treat empty
/// as "no bound" check for that before calling.
pub fn parse_capacity(raw: &str) -> Result<u32, ApiError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ApiError::Validation(format!("capacity must be a non-negative number, got '{}'", raw.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_deserializes_without_resources() {
        let json = r#"{"id":7,"name":"Lab A","building":"X","capacity":12}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, 7);
        assert!(room.resources.is_empty());
    }

    #[test]
    fn test_room_round_trips_resources() {
        let json = r#"{"id":1,"name":"Alpha","building":"X","capacity":10,"resources":["projector","whiteboard"]}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.resources, vec!["projector", "whiteboard"]);
    }

    #[test]
    fn test_draft_from_controls_valid() {
        let draft =
            RoomDraft::from_controls("Lab A", "Block X", " 30 ", vec!["projector".into()]).unwrap();
        assert_eq!(draft.name, "Lab A");
        assert_eq!(draft.building, "Block X");
        assert_eq!(draft.capacity, 30);
        assert_eq!(draft.resources, vec!["projector"]);
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let result = RoomDraft::from_controls("  ", "X", "10", Vec::new());
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_draft_rejects_non_numeric_capacity() {
        let result = RoomDraft::from_controls("Lab", "X", "lots", Vec::new());
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_parse_capacity_rejects_negative() {
        assert!(parse_capacity("-3").is_err());
    }
}
