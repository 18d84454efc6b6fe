use std::time::Duration;

/// Bounds of the distance slider, in kilometers.
pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Seed coordinate used until a place search or locate-me fires.
pub const DEFAULT_SEARCH_CENTER: (f64, f64) = (43.038_902_5, -87.906_473_6);

/// Quiet period before a radius change triggers a remote re-fetch. Local
/// filtering is not debounced.
pub const FETCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Kilometers per degree of latitude (small-angle approximation).
pub const KM_PER_DEGREE_LAT: f64 = 111.0;

/// Latitudes beyond this are clamped before the cosine span correction,
/// keeping the longitude span finite near the poles.
pub const MAX_REGION_LATITUDE_DEG: f64 = 85.0;

/// Duration requested for viewport animations, in milliseconds.
pub const REGION_ANIMATION_MS: u64 = 1000;

/// Span of the tighter region used while a single restaurant is focused.
pub const FOCUS_REGION_LAT_DELTA: f64 = 0.09;
pub const FOCUS_REGION_LON_DELTA: f64 = 0.035;

/// Fraction of the latitude span the focused pin sits above the region
/// center, leaving room for the detail card at the bottom of the screen.
pub const FOCUS_PIN_BIAS: f64 = 0.15;

pub const DEFAULT_API_BASE_URL: &str = "https://eliteeats.io/api";
