//! Map camera placement for the location screen

use serde::Serialize;

use crate::constants::map::*;
use crate::locations;
use crate::types::{Character, CharacterId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapFocus {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// Span of the initial visible region, both axes
    pub region_delta: f64,
    /// Pool point the character was placed on, if any
    pub place: Option<&'static str>,
}

impl MapFocus {
    /// Centre on `character`, or on the city overview when there is none
    pub fn for_character(character: Option<&Character>) -> Self {
        match character {
            Some(c) => Self {
                latitude: c.latitude,
                longitude: c.longitude,
                altitude: FOCUSED_ALTITUDE,
                region_delta: REGION_DELTA,
                place: locations::point_at(c.id as usize).map(|p| p.name),
            },
            None => Self::overview(),
        }
    }

    pub fn overview() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            altitude: OVERVIEW_ALTITUDE,
            region_delta: REGION_DELTA,
            place: None,
        }
    }
}

/// One pin on the overview map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place: Option<&'static str>,
}

/// A marker per character, in list order
pub fn markers(characters: &[Character]) -> Vec<MapMarker> {
    characters
        .iter()
        .map(|c| MapMarker {
            id: c.id,
            name: c.name.clone(),
            description: c.description.clone(),
            latitude: c.latitude,
            longitude: c.longitude,
            place: locations::point_at(c.id as usize).map(|p| p.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: CharacterId, name: &str) -> Character {
        let point = locations::LOCATION_POOL[id as usize];
        Character {
            id,
            name: name.to_string(),
            description: format!("{name} bio"),
            image_url: String::new(),
            latitude: point.latitude,
            longitude: point.longitude,
            comics_count: 0,
            series_count: 0,
            events_count: 0,
        }
    }

    #[test]
    fn test_overview_centres_on_rotterdam() {
        let focus = MapFocus::for_character(None);
        assert_eq!((focus.latitude, focus.longitude), (51.9225, 4.47917));
        assert_eq!(focus.altitude, 1.0);
        assert_eq!(focus.place, None);
    }

    #[test]
    fn test_character_focus_uses_its_point() {
        let point = locations::LOCATION_POOL[3];
        let character = placed(3, "Gambit");

        let focus = MapFocus::for_character(Some(&character));
        assert_eq!((focus.latitude, focus.longitude), (point.latitude, point.longitude));
        assert_eq!(focus.altitude, 3.0);
        assert_eq!(focus.place, Some("Snackbar 4"));
    }

    #[test]
    fn test_markers_follow_list_order() {
        let characters = vec![placed(0, "Hulk"), placed(1, "Thor")];

        let pins = markers(&characters);
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[1].name, "Thor");
        assert_eq!(pins[1].description, "Thor bio");
        assert_eq!(pins[1].place, Some("Snackbar 2"));
        assert_eq!((pins[0].latitude, pins[0].longitude), (51.917744, 4.478421));
        assert!(markers(&[]).is_empty());
    }
}
