//! Engine-wide constants: feed endpoints, composition defaults, and the
//! depth color table. Keeping them in a single place makes it easier to
//! tweak magic numbers shared between profiles, styles, and the legend.

/// USGS summary feed covering the past day.
pub const ALL_DAY_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// USGS summary feed covering the past 30 days.
pub const ALL_MONTH_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// Tectonic plate boundaries (PB2002 dataset).
pub const TECTONIC_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_plates.json";

/// Meters of circle radius per unit of magnitude (daily composition).
pub const DAILY_MAGNITUDE_SCALE: f64 = 10_000.0;

/// Meters of circle radius per unit of magnitude (monthly composition).
pub const MONTHLY_MAGNITUDE_SCALE: f64 = 40_000.0;

/// Initial view for the daily composition (contiguous United States).
pub const DAILY_CENTER: (f64, f64) = (37.09, -95.71);
pub const DAILY_ZOOM: f64 = 5.0;

/// Initial view for the monthly composition (mid-Atlantic, whole-world framing).
pub const MONTHLY_CENTER: (f64, f64) = (27.50651684881357, -40.81444808324838);
pub const MONTHLY_ZOOM: f64 = 3.0;

/// Depth bands as (upper bound in km, fill color), ascending. The tail
/// bound is far beyond any recorded hypocenter and acts as a catch-all.
pub const DEPTH_BANDS: [(f64, &str); 6] = [
    (10.0, "#3af256"),
    (30.0, "#04bfc2"),
    (50.0, "#266ad1"),
    (70.0, "#0437c2"),
    (90.0, "#a404bd"),
    (1000.0, "#bd040d"),
];

/// Display floor for the first legend row. Shallow events can sit above
/// sea level, so the scale starts below zero.
pub const DEPTH_FLOOR_KM: f64 = -10.0;

/// Default zoom ceiling for base tile layers.
pub const MAX_ZOOM: u8 = 18;

/// User agent sent with every feed request so that public servers
/// don't reject us.
pub const FEED_USER_AGENT: &str = "quakemap/0.1 (+https://github.com/PoHsuanLai/quakemap)";
