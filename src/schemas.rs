use common::{ComparisonRow, HistoricalRow, TemperatureReport};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Country used when a request names none
    pub default_country: String,
}

/// Query parameters accepted by the report page and the report API
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Country name as stored in the reference data (e.g. "Germany")
    #[serde(rename = "countryName")]
    pub country_name: Option<String>,
}

impl ReportQuery {
    /// The requested country, falling back to `default` when the parameter
    /// is missing or blank.
    pub fn country_or(query: Option<&ReportQuery>, default: &str) -> String {
        query
            .and_then(|q| q.country_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::report::report_page,
        crate::handlers::temperatures::get_temperature_report,
    ),
    components(
        schemas(
            ApiResponse<TemperatureReport>,
            ErrorResponse,
            HealthResponse,
            TemperatureReport,
            ComparisonRow,
            HistoricalRow,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "report", description = "Rendered temperature comparison page"),
        (name = "temperatures", description = "Temperature report data endpoints"),
    ),
    info(
        title = "Temperature Report API",
        description = "Predicted versus official temperatures per country",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
