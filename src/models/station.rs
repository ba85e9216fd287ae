use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub id: u64,
    pub name: String,
}

impl Station {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Look up the id of the first station whose name matches `name`
///
/// Surrounding whitespace in `name` is ignored; the comparison is otherwise exact.
#[must_use]
pub fn find_station_id(stations: &[Station], name: &str) -> Option<u64> {
    let name = name.trim();
    stations
        .iter()
        .find(|station| station.name == name)
        .map(|station| station.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new(1, "Gangnam"),
            Station::new(2, "Yeoksam"),
            Station::new(3, "Gangnam"),
        ]
    }

    #[test]
    fn test_find_station_id_returns_first_match() {
        assert_eq!(find_station_id(&stations(), "Gangnam"), Some(1));
        assert_eq!(find_station_id(&stations(), "Yeoksam"), Some(2));
    }

    #[test]
    fn test_find_station_id_trims_input() {
        assert_eq!(find_station_id(&stations(), "  Yeoksam "), Some(2));
    }

    #[test]
    fn test_find_station_id_unknown_name() {
        assert_eq!(find_station_id(&stations(), "Jamsil"), None);
        assert_eq!(find_station_id(&[], "Gangnam"), None);
    }

    #[test]
    fn test_station_deserializes_from_server_json() {
        let station: Station = serde_json::from_str(r#"{"id": 7, "name": "Seolleung"}"#)
            .expect("Failed to deserialize station");
        assert_eq!(station, Station::new(7, "Seolleung"));
    }
}
