//! Assembly of a [`TemperatureReport`] from the three store lookups.

use std::ops::RangeInclusive;

use common::{ComparisonRow, HistoricalRow, Reading, TemperatureReport};
use model::entities::predicted_temperature;
use model::official::{self, OfficialRow, HISTORY_YEARS, month_column};
use sea_orm::ConnectionTrait;
use tracing::{debug, info, instrument};

use crate::error::Result;

/// Pair each predicted year with the official reading stored under that
/// year's column. Rows keep the order of `predicted`.
pub fn compare_with_official(
    predicted: &[predicted_temperature::Model],
    official: &OfficialRow,
) -> Vec<ComparisonRow> {
    predicted
        .iter()
        .map(|row| ComparisonRow {
            year: row.year,
            predicted: row.predicted_temperature,
            official: Reading::from(official.get(&month_column(row.year))),
        })
        .collect()
}

/// One row for every year in `years`, whether or not a reading exists.
pub fn official_history(official: &OfficialRow, years: RangeInclusive<i32>) -> Vec<HistoricalRow> {
    years
        .map(|year| HistoricalRow {
            year,
            official: Reading::from(official.get(&month_column(year))),
        })
        .collect()
}

/// Run the predicted, recent official and historical official lookups for
/// `country_name` and merge them. Missing data never fails; only store
/// errors do.
#[instrument(skip(db))]
pub async fn build_report<C>(db: &C, country_name: &str) -> Result<TemperatureReport>
where
    C: ConnectionTrait,
{
    let predicted = predicted_temperature::find_by_country_name(db, country_name).await?;
    debug!("Loaded {} predicted rows", predicted.len());

    let recent = official::find_recent(db, country_name).await?;
    let historical = official::find_history(db, country_name).await?;

    let comparison = compare_with_official(&predicted, &recent);
    let history = official_history(&historical, HISTORY_YEARS);

    let missing = history.iter().filter(|row| row.official.is_missing()).count();
    info!(
        "Built report for {}: {} compared years, {} of {} historical years missing",
        country_name,
        comparison.len(),
        missing,
        history.len()
    );

    Ok(TemperatureReport {
        country_name: country_name.to_string(),
        comparison,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;
    use crate::testing::{create_country, create_prediction, insert_official_row, setup_test_db};
    use sea_orm::{ConnectionTrait, Database};

    fn prediction(year: i32, value: f64) -> predicted_temperature::Model {
        predicted_temperature::Model {
            id: year,
            country_code: "DEU".to_string(),
            year,
            predicted_temperature: value,
        }
    }

    #[test]
    fn test_compare_substitutes_missing_official() {
        let predicted = vec![prediction(2015, 1.1), prediction(2016, 1.3)];
        let official: OfficialRow = [("2015-07".to_string(), 0.9)].into_iter().collect();

        let rows = compare_with_official(&predicted, &official);

        assert_eq!(
            rows,
            vec![
                ComparisonRow { year: 2015, predicted: 1.1, official: Reading::Recorded(0.9) },
                ComparisonRow { year: 2016, predicted: 1.3, official: Reading::Missing },
            ]
        );
    }

    #[test]
    fn test_compare_without_predictions_is_empty() {
        let official: OfficialRow = [("2015-07".to_string(), 0.9)].into_iter().collect();
        assert!(compare_with_official(&[], &official).is_empty());
    }

    #[test]
    fn test_history_covers_every_year() {
        let rows = official_history(&OfficialRow::default(), HISTORY_YEARS);

        assert_eq!(rows.len(), 71);
        assert_eq!(rows.first().map(|r| r.year), Some(1950));
        assert_eq!(rows.last().map(|r| r.year), Some(2020));
        assert!(rows.iter().all(|r| r.official.is_missing()));
    }

    #[test]
    fn test_history_reads_zero_as_a_value() {
        let official: OfficialRow = [("1960-07".to_string(), 0.0)].into_iter().collect();
        let rows = official_history(&official, 1959..=1961);

        assert_eq!(
            rows.iter().map(|r| r.official).collect::<Vec<_>>(),
            vec![Reading::Missing, Reading::Recorded(0.0), Reading::Missing]
        );
    }

    #[tokio::test]
    async fn test_build_report_merges_by_year() {
        let db = setup_test_db().await;
        create_country(&db, "DEU", "Germany").await;
        create_prediction(&db, "DEU", 2015, 1.1).await;
        create_prediction(&db, "DEU", 2016, 1.3).await;
        create_prediction(&db, "DEU", 2024, 2.0).await;
        insert_official_row(&db, "DEU", "Germany", &[(1950, Some(16.0)), (2015, Some(0.9)), (2016, None)]).await;

        let report = build_report(&db, "Germany").await.unwrap();

        assert_eq!(report.country_name, "Germany");
        assert_eq!(
            report.comparison,
            vec![
                ComparisonRow { year: 2015, predicted: 1.1, official: Reading::Recorded(0.9) },
                ComparisonRow { year: 2016, predicted: 1.3, official: Reading::Missing },
                // No official column exists for predicted-only years
                ComparisonRow { year: 2024, predicted: 2.0, official: Reading::Missing },
            ]
        );
        assert_eq!(report.history.len(), 71);
        assert_eq!(report.history[0].official, Reading::Recorded(16.0));
        assert_eq!(report.history[65].year, 2015);
        assert_eq!(report.history[65].official, Reading::Recorded(0.9));
        assert_eq!(report.history[66].official, Reading::Missing);
    }

    #[tokio::test]
    async fn test_build_report_for_unknown_country() {
        let db = setup_test_db().await;
        create_country(&db, "DEU", "Germany").await;
        create_prediction(&db, "DEU", 2015, 1.1).await;

        let report = build_report(&db, "Atlantis").await.unwrap();

        assert!(report.comparison.is_empty());
        assert_eq!(report.history.len(), 71);
        assert!(report.history.iter().all(|r| r.official.is_missing()));
    }

    #[tokio::test]
    async fn test_build_report_inside_transaction() {
        use sea_orm::TransactionTrait;

        let db = setup_test_db().await;
        create_country(&db, "DEU", "Germany").await;
        create_prediction(&db, "DEU", 2015, 1.1).await;

        let txn = db.begin().await.unwrap();
        let report = build_report(&txn, "Germany").await.unwrap();
        txn.commit().await.unwrap();

        assert_eq!(report.comparison.len(), 1);
    }

    #[tokio::test]
    async fn test_build_report_fails_without_schema() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let result = build_report(&db, "Germany").await;
        assert!(matches!(result, Err(ComputeError::Database(_))));

        // Sanity check that the connection itself is fine
        assert!(db.execute_unprepared("SELECT 1").await.is_ok());
    }
}
