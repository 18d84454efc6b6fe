use crate::constants::{
    FOCUS_PIN_BIAS, FOCUS_REGION_LAT_DELTA, FOCUS_REGION_LON_DELTA, KM_PER_DEGREE_LAT,
    MAX_REGION_LATITUDE_DEG,
};
use crate::types::{Coordinate, Region};

/// Region framing `radius_km` around `center`, using the 111 km-per-degree
/// small-angle approximation. The latitude fed into the cosine correction
/// is clamped so the longitude span stays finite near the poles.
pub fn region_for(center: Coordinate, radius_km: f64) -> Region {
    let latitude_delta = radius_km / KM_PER_DEGREE_LAT;
    let clamped = center
        .latitude
        .clamp(-MAX_REGION_LATITUDE_DEG, MAX_REGION_LATITUDE_DEG);
    let longitude_delta = radius_km / (KM_PER_DEGREE_LAT * clamped.to_radians().cos());
    Region {
        center,
        latitude_delta,
        longitude_delta,
    }
}

/// Tighter region used while a single restaurant is focused. The center is
/// nudged south of the pin so the pin sits in the upper part of the map,
/// above the detail card.
pub fn region_for_restaurant(position: Coordinate) -> Region {
    let center = Coordinate::new(
        position.latitude - FOCUS_REGION_LAT_DELTA * FOCUS_PIN_BIAS,
        position.longitude,
    );
    Region {
        center,
        latitude_delta: FOCUS_REGION_LAT_DELTA,
        longitude_delta: FOCUS_REGION_LON_DELTA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_match_the_radius_at_the_equator() {
        let region = region_for(Coordinate::new(0.0, 10.0), 111.0);
        assert!((region.latitude_delta - 1.0).abs() < 1e-9);
        assert!((region.longitude_delta - 1.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_span_widens_with_latitude() {
        // cos(60 deg) = 0.5, so the longitude span doubles.
        let region = region_for(Coordinate::new(60.0, 0.0), 11.1);
        assert!((region.latitude_delta - 0.1).abs() < 1e-9);
        assert!((region.longitude_delta - 0.2).abs() < 1e-9);
    }

    #[test]
    fn near_pole_span_stays_finite() {
        let region = region_for(Coordinate::new(89.9, 0.0), 5.0);
        assert!(region.longitude_delta.is_finite());
        let reference = region_for(Coordinate::new(MAX_REGION_LATITUDE_DEG, 0.0), 5.0);
        assert!((region.longitude_delta - reference.longitude_delta).abs() < 1e-9);
    }

    #[test]
    fn focused_region_offsets_the_pin_upward() {
        let pin = Coordinate::new(43.05, -87.9);
        let region = region_for_restaurant(pin);
        assert!(region.center.latitude < pin.latitude);
        assert_eq!(region.center.longitude, pin.longitude);
        assert_eq!(region.latitude_delta, FOCUS_REGION_LAT_DELTA);
        assert_eq!(region.longitude_delta, FOCUS_REGION_LON_DELTA);
    }
}
