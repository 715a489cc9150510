use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use common::TemperatureReport;
use compute::build_report;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, error, info, instrument, trace};

use crate::error::ReportError;
use crate::pages::temperature::{render_error_page, render_report_page};
use crate::schemas::{AppState, ReportQuery};

/// Assemble the report for `country_name` on a single connection.
///
/// The transaction only scopes the connection for the three lookups; it
/// never writes.
pub async fn load_report(
    db: &DatabaseConnection,
    country_name: &str,
) -> Result<TemperatureReport, ReportError> {
    trace!("Opening read transaction for report on {}", country_name);
    let txn = db.begin().await?;
    let report = build_report(&txn, country_name).await?;
    txn.commit().await?;
    Ok(report)
}

/// Predicted vs official temperature page for one country
#[utoipa::path(
    get,
    path = "/",
    tag = "report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Rendered comparison page", body = String, content_type = "text/html"),
        (status = 500, description = "Temperature data unavailable", body = String, content_type = "text/html")
    )
)]
#[instrument(skip(state))]
pub async fn report_page(
    State(state): State<AppState>,
    query: Option<Query<ReportQuery>>,
) -> (StatusCode, Html<String>) {
    trace!("Entering report_page function");
    let country_name = ReportQuery::country_or(query.as_deref(), &state.default_country);
    debug!("Rendering temperature page for country: {}", country_name);

    let rendered = load_report(&state.db, &country_name)
        .await
        .and_then(|report| Ok(render_report_page(&report)?));

    match rendered {
        Ok(page) => {
            info!("Rendered temperature page for {}", country_name);
            (StatusCode::OK, Html(page))
        }
        Err(e) => {
            error!("Failed to render temperature page for '{}': {}", country_name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error_page()))
        }
    }
}
