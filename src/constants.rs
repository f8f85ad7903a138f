/// Production base address of the Meridian Energy customer portal
pub const DEFAULT_BASE_URL: &str = "https://secure.meridianenergy.co.nz/";
/// Path of the login form submission endpoint, relative to the base address
pub const LOGIN_PATH: &str = "customer/login";
/// Path of the detailed consumption export endpoint, relative to the base address
pub const EXPORT_PATH: &str = "reports/consumption_data/detailed_export";
/// Default number of days to look back when fetching consumption data
pub const DAYS_TO_BACK_LOOK: i64 = 365;
/// Date format the portal expects in the export query parameters
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// Default timeout in seconds for portal requests
///
/// The portal occasionally stalls on the export endpoint; without a timeout a
/// refresh cycle can hang indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the portal
pub const USER_AGENT: &str = "meridian-client/0.1.0";
/// Name of the hidden form input carrying the CSRF token on the landing page
pub const TOKEN_INPUT_NAME: &str = "authenticity_token";
/// Value of the submit button the portal expects in the login form
pub const LOGIN_COMMIT: &str = "Login";
