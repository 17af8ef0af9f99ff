use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Used when the browser cannot or will not report a position.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 37.7749,
    longitude: -122.4194,
};

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_COORDINATES
    }
}

impl Coordinates {
    /// Accept a reported position only when both axes are finite and in range.
    #[must_use]
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// A place suggested by the location service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Metres from the search position.
    #[serde(default)]
    pub distance: Option<f64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl Business {
    #[must_use]
    pub fn distance_label(&self) -> Option<String> {
        self.distance.map(format_distance)
    }
}

/// Render a distance in metres for display: whole metres below 1 km, one
/// decimal place of kilometres above.
#[must_use]
pub fn format_distance(metres: f64) -> String {
    let metres = metres.max(0.0);
    if metres < 1000.0 {
        format!("{metres:.0} m")
    } else {
        format!("{:.1} km", metres / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_distances() {
        assert_eq!(format_distance(850.4), "850 m");
        assert_eq!(format_distance(1234.0), "1.2 km");
        assert_eq!(format_distance(-5.0), "0 m");
    }

    #[test]
    fn business_tolerates_sparse_payloads() {
        let business: Business = serde_json::from_str(
            r#"{"name":"Corner Cafe","address":"1 Main St","phone":"","categories":["cafe"]}"#,
        )
        .unwrap();
        assert_eq!(business.phone, None);
        assert_eq!(business.website, None);
        assert_eq!(business.distance_label(), None);
    }

    #[test]
    fn rejects_out_of_range_positions() {
        assert!(Coordinates::checked(91.0, 0.0).is_none());
        assert!(Coordinates::checked(f64::NAN, 0.0).is_none());
        assert_eq!(
            Coordinates::checked(51.5, -0.12),
            Some(Coordinates {
                latitude: 51.5,
                longitude: -0.12
            })
        );
    }
}
