/// Upper bound of the rating scale. The rating rule rejects anything above
/// this; it has no lower bound (see `services::validate`).
pub const MAX_RATING: f64 = 5.0;

/// Default timeout for the catalog fetch, overridable via `timeout_ms` in the
/// config file.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
