use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::TemperatureReport;
use tracing::{debug, error, info, instrument, trace};

use crate::handlers::report::load_report;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, ReportQuery};

/// Get the temperature report for a country as data
#[utoipa::path(
    get,
    path = "/api/v1/temperatures",
    tag = "temperatures",
    params(ReportQuery),
    responses(
        (status = 200, description = "Temperature report retrieved successfully", body = ApiResponse<TemperatureReport>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_temperature_report(
    State(state): State<AppState>,
    query: Option<Query<ReportQuery>>,
) -> Result<Json<ApiResponse<TemperatureReport>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_temperature_report function");
    let country_name = ReportQuery::country_or(query.as_deref(), &state.default_country);
    debug!("Fetching temperature report for country: {}", country_name);

    match load_report(&state.db, &country_name).await {
        Ok(report) => {
            info!(
                "Successfully retrieved temperature report for {} ({} compared years)",
                country_name,
                report.comparison.len()
            );
            let response = ApiResponse {
                data: report,
                message: "Temperature report retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(e) => {
            error!("Failed to build temperature report for '{}': {}", country_name, e);
            let error_response = ErrorResponse {
                error: "Temperature data is unavailable".to_string(),
                code: "DATABASE_ERROR".to_string(),
                success: false,
            };
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)))
        }
    }
}
