use reqwest::{Client, Response};
use super::SubwayApi;
use crate::constants::{LINES_PATH, STATIONS_PATH};
use crate::models::{find_station_id, Line, SectionRequest, Station};

/// `SubwayApi` over HTTP/JSON
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Build a client talking to the origin the page was served from
    ///
    /// # Errors
    ///
    /// Returns an error if there is no browser window or its origin cannot be read.
    pub fn from_window() -> Result<Self, String> {
        let window = web_sys::window().ok_or("No window available")?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| format!("Failed to read page origin: {e:?}"))?;
        Ok(Self::new(origin))
    }

    fn lines_url(&self) -> String {
        format!("{}{LINES_PATH}", self.base_url)
    }

    fn stations_url(&self) -> String {
        format!("{}{STATIONS_PATH}", self.base_url)
    }

    fn sections_url(&self, line_id: u64) -> String {
        format!("{}{LINES_PATH}/{line_id}/sections", self.base_url)
    }

    async fn get_stations(&self) -> Result<Vec<Station>, String> {
        let response = self
            .client
            .get(self.stations_url())
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        check_status(response)?
            .json::<Vec<Station>>()
            .await
            .map_err(|e| format!("Failed to deserialize stations: {e}"))
    }
}

fn check_status(response: Response) -> Result<Response, String> {
    response
        .error_for_status()
        .map_err(|e| format!("Server rejected request: {e}"))
}

impl SubwayApi for HttpApi {
    async fn get_lines(&self) -> Result<Vec<Line>, String> {
        let response = self
            .client
            .get(self.lines_url())
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        check_status(response)?
            .json::<Vec<Line>>()
            .await
            .map_err(|e| format!("Failed to deserialize lines: {e}"))
    }

    async fn get_station_id(&self, name: &str) -> Result<u64, String> {
        let stations = self.get_stations().await?;
        find_station_id(&stations, name).ok_or_else(|| format!("Station not found: {}", name.trim()))
    }

    async fn create_line_station(&self, line_id: u64, request: &SectionRequest) -> Result<(), String> {
        let response = self
            .client
            .post(self.sections_url(line_id))
            .json(request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        check_status(response)?;
        Ok(())
    }

    async fn delete_line_station(&self, line_id: u64, station_id: u64) -> Result<(), String> {
        let response = self
            .client
            .delete(self.sections_url(line_id))
            .query(&[("stationId", station_id)])
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;
        check_status(response)?;
        Ok(())
    }
}
