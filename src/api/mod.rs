mod http;

pub use http::HttpApi;

use crate::models::{Line, SectionRequest};

/// Client for the subway administration REST API
#[allow(async_fn_in_trait)]
pub trait SubwayApi {
    /// List every line with its stations in travel order
    async fn get_lines(&self) -> Result<Vec<Line>, String>;

    /// Resolve a station display name to its server-assigned id
    async fn get_station_id(&self, name: &str) -> Result<u64, String>;

    /// Add a section to a line
    async fn create_line_station(&self, line_id: u64, request: &SectionRequest) -> Result<(), String>;

    /// Remove a station from a line, merging its neighbouring sections
    async fn delete_line_station(&self, line_id: u64, station_id: u64) -> Result<(), String>;
}
