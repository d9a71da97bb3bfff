// Single source of truth for all default values.

// --- Linking ---
pub const DEFAULT_LINK_WINDOW_HOURS: f64 = 24.0;
pub const DEFAULT_LOOSE_LINK_WINDOW_HOURS: f64 = 48.0;
pub const DEFAULT_AMOUNT_TOLERANCE_RATIO: f64 = 0.02;
pub const DEFAULT_LOOSE_AMOUNT_TOLERANCE_RATIO: f64 = 0.05;
pub const DEFAULT_AMOUNT_TOLERANCE_FLOOR: f64 = 1.00;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
pub const DEFAULT_MIN_LINK_SIMILARITY: f64 = 0.5;
pub const DEFAULT_AMOUNT_WEIGHT: f64 = 0.5;
pub const DEFAULT_TIME_WEIGHT: f64 = 0.3;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.2;

// --- Anomaly: spikes ---
pub const DEFAULT_SPIKE_Z_THRESHOLD: f64 = 3.0;
pub const DEFAULT_SPIKE_WINDOW_DAYS: usize = 28;
pub const DEFAULT_SPIKE_MIN_HISTORY_DAYS: usize = 7;
pub const DEFAULT_SPIKE_MIN_STDDEV_FRACTION: f64 = 0.1;
pub const DEFAULT_SPIKE_SEVERITY_PER_SIGMA: f64 = 1.0;
pub const DEFAULT_SPIKE_SEVERITY_CAP: f64 = 8.0;

// --- Anomaly: round numbers ---
pub const DEFAULT_ROUND_NUMBER_BASE: u32 = 50;
pub const DEFAULT_ROUND_NUMBER_RATIO: f64 = 0.4;
pub const DEFAULT_ROUND_NUMBER_MIN_ENTRIES: usize = 5;
pub const DEFAULT_ROUND_NUMBER_SEVERITY: f64 = 2.0;

// --- Anomaly: duplicates ---
pub const DEFAULT_DUPLICATE_WINDOW_SECS: i64 = 60;
pub const DEFAULT_DUPLICATE_SEVERITY_PER_ENTRY: f64 = 2.5;
pub const DEFAULT_DUPLICATE_SEVERITY_CAP: f64 = 10.0;

// --- Anomaly: gaps and intervals ---
pub const DEFAULT_MISSING_PERIOD_SEVERITY: f64 = 0.0;
pub const DEFAULT_UNIFORM_MIN_ENTRIES: usize = 10;
pub const DEFAULT_UNIFORM_MAX_CV: f64 = 0.02;
pub const DEFAULT_UNIFORM_SEVERITY: f64 = 2.0;

// --- Scoring ---
pub const DEFAULT_ACTIVITY_PER_ACTIVE_WEEK: f64 = 1.5;
pub const DEFAULT_ACTIVITY_PER_WEEKLY_TRANSACTION: f64 = 2.0;
pub const DEFAULT_CONSISTENCY_MIN_WEEKS: usize = 2;
pub const DEFAULT_LONGEVITY_DAYS_PER_POINT: f64 = 9.0;
pub const DEFAULT_CROSS_SOURCE_POINTS_PER_PAIR: f64 = 3.0;
pub const DEFAULT_HIGH_MIN_SCORE: u8 = 60;
pub const DEFAULT_HIGH_MIN_ENTRIES: usize = 20;
pub const DEFAULT_MEDIUM_MIN_SCORE: u8 = 30;
pub const DEFAULT_MEDIUM_MIN_ENTRIES: usize = 5;

// --- Insights ---
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 14;
pub const DEFAULT_PEAK_RUNNER_UP_RATIO: f64 = 0.75;
pub const DEFAULT_RECOMMENDATION_RATIO: f64 = 0.6;
pub const DEFAULT_MIN_CHANNELS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
