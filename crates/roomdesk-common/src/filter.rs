use crate::error::ApiError;
use crate::room::{parse_capacity, Room};

/// One filter submission. Built fresh from the form controls each time the
/// user applies the filter and discarded after the matching render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact building match, case-sensitive.
    pub building: Option<String>,
    /// Case-insensitive substring of the room name.
    pub name_contains: Option<String>,
    /// A tag that must appear in the room's resources, case-sensitive.
    pub feature: Option<String>,
    /// Inclusive upper bound on capacity.
    pub max_capacity: Option<u32>,
}

impl FilterCriteria {
    /// Build criteria from raw control values. Empty fields impose no
    /// constraint; a non-empty, non-numeric capacity is a validation error.
    pub fn from_controls(
        building: &str,
        name: &str,
        feature: &str,
        max_capacity: &str,
    ) -> Result<Self, ApiError> {
        let max_capacity = match max_capacity.trim() {
            "" => None,
            raw => Some(parse_capacity(raw)?),
        };
        Ok(Self {
            building: non_empty(building),
            name_contains: non_empty(name),
            feature: non_empty(feature),
            max_capacity,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.building.is_none()
            && self.name_contains.is_none()
            && self.feature.is_none()
            && self.max_capacity.is_none()
    }

    fn matches(&self, room: &Room) -> bool {
        if let Some(ref building) = self.building {
            if &room.building != building {
                return false;
            }
        }
        if let Some(ref fragment) = self.name_contains {
            if !room
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref feature) = self.feature {
            if !room.resources.iter().any(|tag| tag == feature) {
                return false;
            }
        }
        if let Some(bound) = self.max_capacity {
            if room.capacity > bound {
                return false;
            }
        }
        true
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Apply the criteria to a snapshot. All set criteria must hold; unset ones
/// pass everything. Output preserves snapshot order.
pub fn filter_rooms(rooms: &[Room], criteria: &FilterCriteria) -> Vec<Room> {
    rooms
        .iter()
        .filter(|room| criteria.matches(room))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: u64, name: &str, building: &str, capacity: u32, resources: &[&str]) -> Room {
        Room {
            id,
            name: name.to_string(),
            building: building.to_string(),
            capacity,
            resources: resources.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Room> {
        vec![
            room(1, "Alpha", "X", 10, &["projector"]),
            room(2, "Beta", "Y", 5, &[]),
            room(3, "Gamma Lab", "X", 30, &["whiteboard", "projector"]),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let rooms = sample();
        let result = filter_rooms(&rooms, &FilterCriteria::default());
        assert_eq!(result, rooms);
    }

    #[test]
    fn test_building_exact_match() {
        let criteria = FilterCriteria {
            building: Some("X".into()),
            ..Default::default()
        };
        let result = filter_rooms(&sample(), &criteria);
        assert_eq!(result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_building_is_case_sensitive() {
        let criteria = FilterCriteria {
            building: Some("x".into()),
            ..Default::default()
        };
        assert!(filter_rooms(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_name_substring_is_case_insensitive() {
        let rooms = vec![room(1, "Lab A", "X", 10, &[])];
        let criteria = FilterCriteria {
            name_contains: Some("lab".into()),
            ..Default::default()
        };
        assert_eq!(filter_rooms(&rooms, &criteria).len(), 1);

        let criteria = FilterCriteria {
            name_contains: Some("LAB".into()),
            ..Default::default()
        };
        assert_eq!(filter_rooms(&rooms, &criteria).len(), 1);
    }

    #[test]
    fn test_capacity_bound_is_inclusive() {
        let rooms = vec![room(1, "A", "X", 30, &[]), room(2, "B", "X", 31, &[])];
        let criteria = FilterCriteria {
            max_capacity: Some(30),
            ..Default::default()
        };
        let result = filter_rooms(&rooms, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_feature_requires_exact_tag() {
        let rooms = vec![room(1, "A", "X", 10, &["projector"])];

        let hit = FilterCriteria {
            feature: Some("projector".into()),
            ..Default::default()
        };
        assert_eq!(filter_rooms(&rooms, &hit).len(), 1);

        // Tag matching is case-sensitive, unlike name matching
        let wrong_case = FilterCriteria {
            feature: Some("Projector".into()),
            ..Default::default()
        };
        assert!(filter_rooms(&rooms, &wrong_case).is_empty());

        let missing = FilterCriteria {
            feature: Some("screen".into()),
            ..Default::default()
        };
        assert!(filter_rooms(&rooms, &missing).is_empty());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let criteria = FilterCriteria {
            building: Some("X".into()),
            feature: Some("whiteboard".into()),
            ..Default::default()
        };
        let result = filter_rooms(&sample(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn test_output_preserves_snapshot_order() {
        let criteria = FilterCriteria {
            max_capacity: Some(30),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_rooms(&sample(), &criteria)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_spec_example_end_to_end() {
        let rooms = vec![
            room(1, "Alpha", "X", 10, &["projector"]),
            room(2, "Beta", "Y", 5, &[]),
        ];

        let by_building = FilterCriteria {
            building: Some("X".into()),
            ..Default::default()
        };
        let result = filter_rooms(&rooms, &by_building);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alpha");

        let by_capacity = FilterCriteria {
            max_capacity: Some(5),
            ..Default::default()
        };
        let result = filter_rooms(&rooms, &by_capacity);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Beta");

        assert_eq!(filter_rooms(&rooms, &FilterCriteria::default()), rooms);
    }

    #[test]
    fn test_from_controls_empty_fields_are_unset() {
        let criteria = FilterCriteria::from_controls("", "  ", "", "").unwrap();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_from_controls_parses_capacity() {
        let criteria = FilterCriteria::from_controls("X", "lab", "projector", "25").unwrap();
        assert_eq!(criteria.building.as_deref(), Some("X"));
        assert_eq!(criteria.name_contains.as_deref(), Some("lab"));
        assert_eq!(criteria.feature.as_deref(), Some("projector"));
        assert_eq!(criteria.max_capacity, Some(25));
    }

    #[test]
    fn test_from_controls_rejects_non_numeric_capacity() {
        let result = FilterCriteria::from_controls("", "", "", "ten");
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
