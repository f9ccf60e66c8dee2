//! Great-circle distance between latitude/longitude pairs.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two points using the haversine formula.
pub fn haversine_km(p1: [f64; 2], p2: [f64; 2]) -> f64 {
    let d_lat = (p2[0] - p1[0]).to_radians();
    let d_lng = (p2[1] - p1[1]).to_radians();

    let lat1 = p1[0].to_radians();
    let lat2 = p2[0].to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::haversine_km;

    #[test]
    fn test_zero_distance() {
        assert_eq!(haversine_km([41.39, 2.16], [41.39, 2.16]), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Paris to London, roughly 344 km
        let d = haversine_km([48.8566, 2.3522], [51.5074, -0.1278]);
        assert!((d - 344.0).abs() < 5.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_symmetry() {
        let a = [41.39, 2.16];
        let b = [40.42, -3.70];
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }
}
