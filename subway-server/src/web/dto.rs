//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Section, Station, StationId};
use crate::service::LineView;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Station name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    /// Station id
    pub id: StationId,

    /// Station name
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    /// Line name
    pub name: String,

    /// Display color (e.g., "bg-red-600")
    pub color: String,

    /// Upstream station of the first section
    pub up_station_id: StationId,

    /// Downstream station of the first section
    pub down_station_id: StationId,

    /// Length of the first section
    pub distance: i64,
}

/// Request to change a line's name and color.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    /// New line name
    pub name: String,

    /// New display color
    pub color: String,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    /// Upstream station
    pub up_station_id: StationId,

    /// Downstream station
    pub down_station_id: StationId,

    /// Section length
    pub distance: i64,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
pub struct RemoveStationQuery {
    /// Station to remove
    pub station_id: StationId,
}

/// A section in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Upstream station id
    pub up_station_id: StationId,

    /// Downstream station id
    pub down_station_id: StationId,

    /// Section length
    pub distance: u64,
}

/// A line in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    /// Line id
    pub id: LineId,

    /// Line name
    pub name: String,

    /// Display color
    pub color: String,

    /// Stations from the start of the line to its end
    pub stations: Vec<StationResponse>,

    /// Sections in the same order as `stations`
    pub sections: Vec<SectionResult>,

    /// Sum of all section distances
    pub total_distance: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl SectionResult {
    /// Create from a domain Section.
    pub fn from_section(section: &Section) -> Self {
        Self {
            up_station_id: section.up_station(),
            down_station_id: section.down_station(),
            distance: section.distance().get(),
        }
    }
}

impl LineResponse {
    /// Create from a resolved line.
    pub fn from_view(view: &LineView) -> Self {
        Self {
            id: view.line.id(),
            name: view.line.name().to_string(),
            color: view.line.color().to_string(),
            stations: view
                .stations
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            sections: view
                .sections
                .iter()
                .map(SectionResult::from_section)
                .collect(),
            total_distance: view.total_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewLine, StationName};

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), StationName::new(name.to_string()).unwrap())
    }

    fn make_view() -> LineView {
        let mut line = NewLine::new("Shinbundang", "bg-red-600", StationId(1), StationId(2), 10)
            .unwrap()
            .into_line(LineId(3));
        line.add_section(StationId(1), StationId(4), 4).unwrap();

        let sections = line
            .path()
            .unwrap()
            .sections()
            .iter()
            .map(|s| (*s).clone())
            .collect();

        LineView {
            line,
            stations: vec![
                station(1, "Gangnam"),
                station(4, "Sinchon"),
                station(2, "Gyodae"),
            ],
            sections,
            total_distance: 10,
        }
    }

    #[test]
    fn line_response_from_view() {
        let response = LineResponse::from_view(&make_view());

        assert_eq!(response.id, LineId(3));
        assert_eq!(response.name, "Shinbundang");
        assert_eq!(response.color, "bg-red-600");

        let names: Vec<_> = response.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Gangnam", "Sinchon", "Gyodae"]);

        assert_eq!(
            response.sections,
            vec![
                SectionResult {
                    up_station_id: StationId(1),
                    down_station_id: StationId(4),
                    distance: 4,
                },
                SectionResult {
                    up_station_id: StationId(4),
                    down_station_id: StationId(2),
                    distance: 6,
                },
            ]
        );
        assert_eq!(response.total_distance, 10);
    }

    #[test]
    fn line_response_json_shape() {
        let response = LineResponse::from_view(&make_view());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["stations"][1]["id"], 4);
        assert_eq!(json["stations"][1]["name"], "Sinchon");
        assert_eq!(json["sections"][0]["up_station_id"], 1);
        assert_eq!(json["total_distance"], 10);

        let back: LineResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn section_request_from_json() {
        let req: SectionRequest =
            serde_json::from_str(r#"{"up_station_id": 1, "down_station_id": 2, "distance": -4}"#)
                .unwrap();

        assert_eq!(req.up_station_id, StationId(1));
        assert_eq!(req.down_station_id, StationId(2));
        assert_eq!(req.distance, -4);
    }
}
