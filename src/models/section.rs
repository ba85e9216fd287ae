use serde::{Deserialize, Serialize};
use crate::constants::{EDGE_DISTANCE, EDGE_DURATION};

/// Body of a section (edge) creation request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub pre_station_id: u64,
    pub station_id: u64,
    pub distance: u32,
    pub duration: u32,
}

impl SectionRequest {
    /// Build a request between two resolved stations
    ///
    /// Distance and duration are not taken from user input; every new section
    /// carries `EDGE_DISTANCE` and `EDGE_DURATION`.
    #[must_use]
    pub fn new(pre_station_id: u64, station_id: u64) -> Self {
        Self {
            pre_station_id,
            station_id,
            distance: EDGE_DISTANCE,
            duration: EDGE_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_fixed_distance_and_duration() {
        let request = SectionRequest::new(4, 9);
        assert_eq!(request.pre_station_id, 4);
        assert_eq!(request.station_id, 9);
        assert_eq!(request.distance, 10);
        assert_eq!(request.duration, 10);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SectionRequest::new(1, 2)).expect("Failed to serialize request");
        assert_eq!(
            json,
            serde_json::json!({
                "preStationId": 1,
                "stationId": 2,
                "distance": 10,
                "duration": 10
            })
        );
    }
}
