/// Production storefront host.
pub const STORE_BASE_URL: &str = "http://store.steampowered.com";

/// Path of the app-details endpoint under the storefront host.
pub const APP_DETAILS_PATH: &str = "/api/appdetails/";

/// Maximum number of identifiers the app-details endpoint accepts per request.
pub const MAX_IDS_PER_REQUEST: usize = 50;

/// Protocol version sent with every query.
pub const DEFAULT_API_VERSION: u64 = 1;
