use crate::api::SubwayApi;
use crate::logging::log;
use crate::models::{Line, LineOption, SectionRequest};

/// The three tracked fields of the create-edge form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeForm {
    /// Value of the line select (a line id, or empty when nothing is selected)
    pub line_id: String,
    pub pre_station_name: String,
    pub station_name: String,
}

impl EdgeForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the selected line id and check that both station names are filled in
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or malformed field.
    pub fn validate(&self) -> Result<u64, String> {
        let line_id = self.line_id.trim();
        if line_id.is_empty() {
            return Err("Select a line first".to_string());
        }
        let line_id = line_id
            .parse::<u64>()
            .map_err(|e| format!("Invalid line id {line_id:?}: {e}"))?;
        if self.pre_station_name.trim().is_empty() {
            return Err("Enter the preceding station".to_string());
        }
        if self.station_name.trim().is_empty() {
            return Err("Enter the station to add".to_string());
        }
        Ok(line_id)
    }
}

/// Station row targeted by a click on its delete icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTarget {
    pub line_id: u64,
    pub station_id: u64,
}

impl DeleteTarget {
    /// Resolve a delete target from a click
    ///
    /// `is_delete_icon` tells whether the clicked element carries the delete icon
    /// class; the ids come from the data attributes of the enclosing list item.
    /// Anything else resolves to `None`.
    #[must_use]
    pub fn resolve(is_delete_icon: bool, line_id: Option<&str>, station_id: Option<&str>) -> Option<Self> {
        if !is_delete_icon {
            return None;
        }
        Some(Self {
            line_id: line_id?.parse().ok()?,
            station_id: station_id?.parse().ok()?,
        })
    }
}

/// Lines shown in the slider, in the order the server returns them
///
/// # Errors
///
/// Propagates the API error.
pub async fn fetch_slider_lines<A: SubwayApi>(api: &A) -> Result<Vec<Line>, String> {
    let lines = api.get_lines().await?;
    log!("Loaded {} lines for the slider", lines.len());
    Ok(lines)
}

/// Options of the line select, one per line, in server order
///
/// # Errors
///
/// Propagates the API error.
pub async fn fetch_line_options<A: SubwayApi>(api: &A) -> Result<Vec<LineOption>, String> {
    let lines = api.get_lines().await?;
    Ok(lines.iter().map(LineOption::from).collect())
}

/// Resolve both station names, then add the section to the selected line
///
/// Both lookups complete before the request is built. Returns the request
/// that was accepted by the server.
///
/// # Errors
///
/// Returns an error if the form is incomplete, a station name is unknown or
/// the server rejects the section.
pub async fn create_edge<A: SubwayApi>(api: &A, form: &EdgeForm) -> Result<SectionRequest, String> {
    let line_id = form.validate()?;
    let pre_station_id = api.get_station_id(&form.pre_station_name).await?;
    let station_id = api.get_station_id(&form.station_name).await?;

    let request = SectionRequest::new(pre_station_id, station_id);
    log!("Creating section on line {line_id}: {request:?}");
    api.create_line_station(line_id, &request).await?;
    Ok(request)
}

/// Submit the form and clear it, whatever the outcome
///
/// # Errors
///
/// Same as [`create_edge`]; the form is cleared before the error is returned.
pub async fn submit_edge_form<A: SubwayApi>(api: &A, form: &mut EdgeForm) -> Result<SectionRequest, String> {
    let result = create_edge(api, form).await;
    form.clear();
    result
}

/// Ask the server to remove a station from a line
///
/// # Errors
///
/// Propagates the API error.
pub async fn remove_station<A: SubwayApi>(api: &A, target: DeleteTarget) -> Result<(), String> {
    api.delete_line_station(target.line_id, target.station_id).await?;
    log!("Removed station {} from line {}", target.station_id, target.line_id);
    Ok(())
}

/// Mirror a confirmed removal in the lines shown by the slider
///
/// Returns `false` if the station was not found on that line.
pub fn apply_removal(lines: &mut [Line], target: DeleteTarget) -> bool {
    lines
        .iter_mut()
        .find(|line| line.id == target.line_id)
        .is_some_and(|line| line.remove_station(target.station_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;

    fn filled_form() -> EdgeForm {
        EdgeForm {
            line_id: "2".to_string(),
            pre_station_name: "Gangnam".to_string(),
            station_name: "Yeoksam".to_string(),
        }
    }

    #[test]
    fn test_form_validate_returns_line_id() {
        assert_eq!(filled_form().validate(), Ok(2));
    }

    #[test]
    fn test_form_requires_line() {
        let form = EdgeForm {
            line_id: String::new(),
            ..filled_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_rejects_malformed_line_id() {
        let form = EdgeForm {
            line_id: "two".to_string(),
            ..filled_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_requires_station_names() {
        let missing_pre = EdgeForm {
            pre_station_name: "  ".to_string(),
            ..filled_form()
        };
        assert!(missing_pre.validate().is_err());

        let missing_station = EdgeForm {
            station_name: String::new(),
            ..filled_form()
        };
        assert!(missing_station.validate().is_err());
    }

    #[test]
    fn test_form_clear_resets_all_fields() {
        let mut form = filled_form();
        form.clear();
        assert_eq!(form, EdgeForm::default());
    }

    #[test]
    fn test_delete_target_from_delete_icon() {
        assert_eq!(
            DeleteTarget::resolve(true, Some("2"), Some("11")),
            Some(DeleteTarget { line_id: 2, station_id: 11 })
        );
    }

    #[test]
    fn test_delete_target_ignores_other_elements() {
        assert_eq!(DeleteTarget::resolve(false, Some("2"), Some("11")), None);
    }

    #[test]
    fn test_apply_removal_only_touches_target() {
        let original = vec![
            Line::new(1, "Line 1", vec![Station::new(1, "Seoul"), Station::new(10, "City Hall")]),
            Line::new(2, "Line 2", vec![Station::new(10, "City Hall"), Station::new(11, "Euljiro")]),
        ];
        let mut lines = original.clone();

        assert!(apply_removal(&mut lines, DeleteTarget { line_id: 2, station_id: 10 }));

        assert_eq!(lines[0], original[0]);
        let remaining: Vec<_> = lines[1].stations.iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec![11]);
    }

    #[test]
    fn test_apply_removal_unknown_target() {
        let original = vec![Line::new(1, "Line 1", vec![Station::new(1, "Seoul")])];
        let mut lines = original.clone();

        assert!(!apply_removal(&mut lines, DeleteTarget { line_id: 1, station_id: 5 }));
        assert!(!apply_removal(&mut lines, DeleteTarget { line_id: 9, station_id: 1 }));
        assert_eq!(lines, original);
    }

    #[test]
    fn test_delete_target_needs_both_ids() {
        assert_eq!(DeleteTarget::resolve(true, None, Some("11")), None);
        assert_eq!(DeleteTarget::resolve(true, Some("2"), Some("x")), None);
    }
}
