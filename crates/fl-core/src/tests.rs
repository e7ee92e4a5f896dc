//! Unit tests for fl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DestinationId, StepId};

    #[test]
    fn index_roundtrip() {
        let id = StepId(5);
        assert_eq!(id.index(), 5);
        assert_eq!(StepId::try_from(5usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StepId(0) < StepId(1));
        assert!(DestinationId(3) > DestinationId(2));
    }

    #[test]
    fn display() {
        assert_eq!(DestinationId(7).to_string(), "DestinationId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn lerp_endpoints_exact() {
        let origin = GeoPoint::new(46.5891, -112.0391);
        let target = GeoPoint::new(47.5058, -111.3008);
        assert_eq!(origin.lerp(target, 0.0), origin);
        assert_eq!(origin.lerp(target, 1.0), target);
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(10.0, -20.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 5.0).abs() < 1e-12);
        assert!((mid.lon + 10.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_stays_on_segment() {
        // Every coordinate of the result is a convex combination of the
        // endpoints for all fractions in [0, 1].
        let a = GeoPoint::new(46.0, -112.0);
        let b = GeoPoint::new(48.0, -110.0);
        for i in 0..=100 {
            let f = i as f64 / 100.0;
            let p = a.lerp(b, f);
            assert!(p.lat >= a.lat && p.lat <= b.lat, "lat out of bounds at f={f}");
            assert!(p.lon >= a.lon && p.lon <= b.lon, "lon out of bounds at f={f}");
        }
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(46.5891, -112.0391);
        assert!(p.distance_km(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(46.0, -112.0);
        let b = GeoPoint::new(47.0, -112.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn arithmetic_and_ordering() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert!(Tick(10) < Tick(11));
        assert_eq!(Tick::ZERO, Tick(0));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod rng {
    use crate::DemoRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DemoRng::new(12345);
        let mut r2 = DemoRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = DemoRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_index_covers_all_slots() {
        let mut rng = DemoRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.choose_index(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "every index should be selectable: {seen:?}");
    }

    #[test]
    fn choose_index_empty_is_none() {
        let mut rng = DemoRng::new(0);
        assert_eq!(rng.choose_index(0), None);
    }

    #[test]
    fn fill_bytes_is_deterministic() {
        let mut r1 = DemoRng::new(99);
        let mut r2 = DemoRng::new(99);
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        r1.fill_bytes(&mut a);
        r2.fill_bytes(&mut b);
        assert_eq!(a, b);
    }
}
