//! Flat-earth travel distance between coordinates.

use geo::Coord;

/// Kilometres per degree used to scale planar coordinate differences.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default starting point for itineraries: central Kathmandu.
pub const CITY_CENTRE: Coord<f64> = Coord {
    x: 85.3488,
    y: 27.7104,
};

/// Approximate the distance in kilometres between two coordinates.
///
/// Treats degrees of latitude and longitude as a flat plane and scales the
/// Euclidean length by [`KM_PER_DEGREE`]. The result is symmetric and zero
/// only for identical points; it is not a geodesic distance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sojourn_core::distance_km;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 0.0, y: 1.0 };
/// assert_eq!(distance_km(a, b), 111.0);
/// assert_eq!(distance_km(a, b), distance_km(b, a));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance is a scaled planar norm"
)]
#[must_use]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let delta = a - b;
    delta.y.hypot(delta.x) * KM_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(CITY_CENTRE, CITY_CENTRE), 0.0);
    }

    #[rstest]
    #[case(Coord { x: 85.2906, y: 27.7149 }, 6.479_487)]
    #[case(Coord { x: 83.9856, y: 28.2096 }, 161.142_0)]
    fn matches_reference_distances(#[case] other: Coord<f64>, #[case] expected: f64) {
        let distance = distance_km(CITY_CENTRE, other);
        assert!(
            (distance - expected).abs() < 1e-3,
            "expected ~{expected}, got {distance}"
        );
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 85.3170, y: 27.7125 };
        let b = Coord { x: 85.5472, y: 27.5886 };
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < TOLERANCE);
    }
}
