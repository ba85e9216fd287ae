use serde::{Deserialize, Deserializer, Serialize};
use super::Station;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Line {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: String,
    /// Stations in travel order. The server sends `null` for lines without sections.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stations: Vec<Station>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Station>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Station>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Line {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, stations: Vec<Station>) -> Self {
        Self {
            id,
            name: name.into(),
            color: String::new(),
            stations,
        }
    }

    /// Remove a station from this line, keeping the order of the rest
    ///
    /// Returns `false` if the station is not on the line.
    pub fn remove_station(&mut self, station_id: u64) -> bool {
        let before = self.stations.len();
        self.stations.retain(|station| station.id != station_id);
        self.stations.len() != before
    }

    /// CSS class for the slide header, falling back to a neutral color
    #[must_use]
    pub fn header_color(&self) -> &str {
        if self.color.is_empty() {
            "bg-gray-300"
        } else {
            &self.color
        }
    }
}

/// Entry of the line select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOption {
    pub value: String,
    pub label: String,
}

impl From<&Line> for LineOption {
    fn from(line: &Line) -> Self {
        Self {
            value: line.id.to_string(),
            label: line.name.clone(),
        }
    }
}
