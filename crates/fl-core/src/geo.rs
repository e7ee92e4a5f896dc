//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude in decimal degrees.  The demo
//! tracks a handful of fixed points, so there is no pressure to halve memory
//! with `f32` — and the interpolation contract requires that the marker land
//! *exactly* on the target at full progress, which double precision plus the
//! convex-combination form of [`GeoPoint::lerp`] guarantees.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The point `fraction` of the way along the straight line from `self`
    /// to `target`.
    ///
    /// Each coordinate is the convex combination
    /// `self * (1 - fraction) + target * fraction`, so `fraction = 0.0`
    /// returns `self` exactly and `fraction = 1.0` returns `target` exactly
    /// (the `a + (b - a) * f` form would drift at the far endpoint).
    ///
    /// Total over real inputs; callers are responsible for clamping
    /// `fraction` to `[0, 1]` beforehand.
    #[inline]
    pub fn lerp(self, target: GeoPoint, fraction: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat * (1.0 - fraction) + target.lat * fraction,
            lon: self.lon * (1.0 - fraction) + target.lon * fraction,
        }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Display-grade accuracy; the demo uses it for catalog distance labels,
    /// not for routing.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R_KM: f64 = 6_371.0; // mean Earth radius

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
