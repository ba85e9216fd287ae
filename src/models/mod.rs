mod line;
mod section;
mod station;

pub use line::{Line, LineOption};
pub use section::SectionRequest;
pub use station::{Station, find_station_id};
