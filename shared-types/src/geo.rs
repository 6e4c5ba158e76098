use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatLngParseError {
    #[error("location not provided in latitude, longitude format: {0}")]
    WrongArity(String),
    #[error("invalid value types for latitude, longitude format: {0}")]
    NotNumeric(String),
    #[error("latitude must be within ±90 and longitude within ±180: {0}")]
    OutOfRange(String),
}

impl LatLng {
    /// Parses `"lat,lng"`. Whitespace around either number is ignored. Pairs
    /// that are numeric but not a point on the globe, such as two ZIP codes,
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self, LatLngParseError> {
        let parts: Vec<&str> = input.split(',').collect();
        let [lat, lng] = parts.as_slice() else {
            return Err(LatLngParseError::WrongArity(input.to_string()));
        };

        let parse = |s: &str| {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LatLngParseError::NotNumeric(input.to_string()))
        };

        let point = LatLng {
            latitude: parse(*lat)?,
            longitude: parse(*lng)?,
        };
        if !(-90.0..=90.0).contains(&point.latitude)
            || !(-180.0..=180.0).contains(&point.longitude)
        {
            return Err(LatLngParseError::OutOfRange(input.to_string()));
        }
        Ok(point)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Mean position of `points` computed on the unit sphere.
pub fn geographic_center(points: &[LatLng]) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }

    let (mut x_total, mut y_total, mut z_total) = (0.0, 0.0, 0.0);
    points.iter().for_each(|point| {
        let lat_rad = point.latitude.to_radians();
        let long_rad = point.longitude.to_radians();

        x_total += lat_rad.cos() * long_rad.cos();
        y_total += lat_rad.cos() * long_rad.sin();
        z_total += lat_rad.sin();
    });

    let count = points.len() as f64;
    let x_avg = x_total / count;
    let y_avg = y_total / count;
    let z_avg = z_total / count;

    let longitude = y_avg.atan2(x_avg).to_degrees();
    let hyp = (x_avg.powi(2) + y_avg.powi(2)).sqrt();
    let latitude = z_avg.atan2(hyp).to_degrees();

    Some(LatLng {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lat_lng_pair() {
        assert_eq!(
            LatLng::parse("40.7978417, -77.8556184"),
            Ok(LatLng {
                latitude: 40.7978417,
                longitude: -77.8556184
            })
        );
    }

    #[test]
    fn rejects_single_value() {
        assert_eq!(
            LatLng::parse("Philadelphia"),
            Err(LatLngParseError::WrongArity("Philadelphia".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_pair() {
        assert_eq!(
            LatLng::parse("Hello, World"),
            Err(LatLngParseError::NotNumeric("Hello, World".to_string()))
        );
    }

    #[test]
    fn rejects_numbers_off_the_globe() {
        assert_eq!(
            LatLng::parse("90210, 10001"),
            Err(LatLngParseError::OutOfRange("90210, 10001".to_string()))
        );
        assert!(LatLng::parse("45.0, 181").is_err());
        assert_eq!(
            LatLng::parse("-90, 180"),
            Ok(LatLng {
                latitude: -90.0,
                longitude: 180.0
            })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let point = LatLng {
            latitude: 47.6,
            longitude: -122.3,
        };
        assert_eq!(point.to_string(), "47.6,-122.3");
        assert_eq!(LatLng::parse(&point.to_string()), Ok(point));
    }

    #[test]
    fn center_of_nothing_is_none() {
        assert_eq!(geographic_center(&[]), None);
    }

    #[test]
    fn center_of_one_point_is_that_point() {
        let point = LatLng {
            latitude: 47.6,
            longitude: -122.3,
        };
        let center = geographic_center(&[point]).unwrap();
        assert!((center.latitude - point.latitude).abs() < 1e-9);
        assert!((center.longitude - point.longitude).abs() < 1e-9);
    }

    #[test]
    fn center_lies_between_two_points() {
        let a = LatLng {
            latitude: 47.0,
            longitude: -122.0,
        };
        let b = LatLng {
            latitude: 48.0,
            longitude: -123.0,
        };
        let center = geographic_center(&[a, b]).unwrap();
        assert!(center.latitude > 47.0 && center.latitude < 48.0);
        assert!(center.longitude < -122.0 && center.longitude > -123.0);
    }
}
