/// Path of the line collection endpoint
pub const LINES_PATH: &str = "/lines";

/// Path of the station collection endpoint
pub const STATIONS_PATH: &str = "/stations";

/// Distance sent with every new section
pub const EDGE_DISTANCE: u32 = 10;

/// Duration sent with every new section
pub const EDGE_DURATION: u32 = 10;

/// Class of the slider container; also used as the carousel container selector
pub const SLIDER_CONTAINER_CLASS: &str = "subway-lines-slider";

/// Id of the element that holds the carousel prev/next controls
pub const SLIDER_CONTROLS_ID: &str = "slider-controls";

/// Id of the line select in the create-edge form
pub const LINE_SELECT_ID: &str = "station-select-options";

/// Class carried by the delete icon of a station row
pub const DELETE_ICON_CLASS: &str = "mdi-delete";

/// Selector of the station row enclosing a delete icon
pub const LIST_ITEM_SELECTOR: &str = ".list-item";

/// Carousel transition speed in milliseconds
pub const SLIDER_SPEED_MS: u32 = 400;

/// Horizontal padding around the carousel viewport in pixels
pub const SLIDER_EDGE_PADDING_PX: u32 = 25;

/// Minimum horizontal mouse travel that counts as a carousel drag
pub const DRAG_THRESHOLD_PX: i32 = 50;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 3_000;
