//! `OpenStreetMap` address model shared by Nominatim-style providers.
//!
//! Nominatim reports an address as a flat object whose keys depend on the
//! kind of place found: a pedestrian zone has `pedestrian` instead of `road`,
//! a small settlement has `village` instead of `city`. [`OsmAddress::street`]
//! and [`OsmAddress::locality`] collapse those alternatives.

use serde::{Deserialize, Deserializer};

/// JSON keys recognized in a Nominatim `address` object.
pub const ADDRESS_FIELDS: &[&str] = &[
    "house_number",
    "road",
    "pedestrian",
    "footway",
    "cycleway",
    "highway",
    "path",
    "suburb",
    "city",
    "town",
    "village",
    "hamlet",
    "county",
    "country",
    "country_code",
    "state",
    "state_district",
    "postcode",
];

/// The `address` object of a Nominatim response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OsmAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub road: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pedestrian: String,
    #[serde(deserialize_with = "null_as_default")]
    pub footway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cycleway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub highway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suburb: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub town: String,
    #[serde(deserialize_with = "null_as_default")]
    pub village: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hamlet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postcode: String,
}

impl OsmAddress {
    /// Street name: the first non-empty of road, pedestrian, path, cycleway,
    /// footway, highway.
    #[must_use]
    pub fn street(&self) -> &str {
        first_non_empty(&[
            &self.road,
            &self.pedestrian,
            &self.path,
            &self.cycleway,
            &self.footway,
            &self.highway,
        ])
    }

    /// Locality name: the first non-empty of city, town, village, hamlet.
    #[must_use]
    pub fn locality(&self) -> &str {
        first_non_empty(&[&self.city, &self.town, &self.village, &self.hamlet])
    }
}

/// Deserializes a value that providers sometimes send as JSON `null`,
/// treating `null` like an absent field.
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither `null` nor a `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|s| !s.is_empty())
        .map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_prefers_road() {
        let addr = OsmAddress {
            road: "Broadway".to_owned(),
            pedestrian: "Times Square".to_owned(),
            ..OsmAddress::default()
        };
        assert_eq!(addr.street(), "Broadway");
    }

    #[test]
    fn street_falls_back_through_alternatives() {
        let addr = OsmAddress {
            cycleway: "Hudson River Greenway".to_owned(),
            highway: "West Side Highway".to_owned(),
            ..OsmAddress::default()
        };
        assert_eq!(addr.street(), "Hudson River Greenway");
    }

    #[test]
    fn street_is_empty_when_nothing_is_set() {
        assert_eq!(OsmAddress::default().street(), "");
    }

    #[test]
    fn locality_prefers_city_then_town_village_hamlet() {
        let mut addr = OsmAddress {
            hamlet: "Smallville".to_owned(),
            ..OsmAddress::default()
        };
        assert_eq!(addr.locality(), "Smallville");

        addr.village = "Middleton".to_owned();
        assert_eq!(addr.locality(), "Middleton");

        addr.town = "Springfield".to_owned();
        assert_eq!(addr.locality(), "Springfield");

        addr.city = "New York".to_owned();
        assert_eq!(addr.locality(), "New York");
    }

    #[test]
    fn deserializes_partial_object_with_defaults() {
        let addr: OsmAddress = serde_json::from_value(serde_json::json!({
            "road": "Main Street",
            "town": "Greenville",
            "country_code": "us",
            "unknown_key": "ignored"
        }))
        .expect("partial address should deserialize");

        assert_eq!(addr.street(), "Main Street");
        assert_eq!(addr.locality(), "Greenville");
        assert_eq!(addr.country_code, "us");
        assert!(addr.postcode.is_empty());
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let addr: OsmAddress = serde_json::from_value(serde_json::json!({
            "road": null,
            "pedestrian": "Königstraße",
            "city": null,
            "village": "Musterdorf",
            "country_code": null
        }))
        .expect("null fields should be tolerated");

        assert_eq!(addr.street(), "Königstraße");
        assert_eq!(addr.locality(), "Musterdorf");
        assert!(addr.country_code.is_empty());
    }

    #[test]
    fn address_fields_cover_every_struct_field() {
        let json: serde_json::Map<String, serde_json::Value> = ADDRESS_FIELDS
            .iter()
            .map(|k| ((*k).to_owned(), serde_json::Value::String((*k).to_owned())))
            .collect();
        let addr: OsmAddress =
            serde_json::from_value(serde_json::Value::Object(json)).expect("should deserialize");

        assert_eq!(addr.house_number, "house_number");
        assert_eq!(addr.highway, "highway");
        assert_eq!(addr.state_district, "state_district");
        assert_eq!(addr.postcode, "postcode");
    }
}
