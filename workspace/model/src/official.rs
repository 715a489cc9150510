//! Reader for the wide `OfficialAnnualTemperatures` table.
//!
//! The table keeps one row per country and one nullable column per sampled
//! year-month, named like `"1987-07"`. Column names are data here, so the
//! table is queried through `sea_query` rather than a derived entity; the
//! country name is always a bound parameter.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use sea_orm::sea_query::{Asterisk, Expr, Iden, Query};
use sea_orm::{ConnectionTrait, DbErr, QueryResult};
use tracing::{debug, trace};

/// Month sampled for each year's official reading.
pub const REFERENCE_MONTH: u32 = 7;

/// Years whose columns are selected by the recent-comparison lookup.
pub const RECENT_YEARS: RangeInclusive<i32> = 2015..=2020;

/// Years covered by the historical table.
pub const HISTORY_YEARS: RangeInclusive<i32> = 1950..=2020;

/// Column key holding the official reading for `year`, e.g. `"2015-07"`.
pub fn month_column(year: i32) -> String {
    format!("{year}-{REFERENCE_MONTH:02}")
}

/// Fixed identifiers of the wide table.
#[derive(Debug, Clone, Copy)]
pub enum OfficialAnnualTemperatures {
    Table,
    Id,
    CountryCode,
    CountryName,
}

impl Iden for OfficialAnnualTemperatures {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let name = match self {
            Self::Table => "OfficialAnnualTemperatures",
            Self::Id => "id",
            Self::CountryCode => "country_code",
            Self::CountryName => "country_name",
        };
        let _ = s.write_str(name);
    }
}

/// The present, non-null readings of one country's row, keyed by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficialRow {
    readings: HashMap<String, f64>,
}

impl OfficialRow {
    /// Reading stored under `column`, if the column exists and is not null.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.readings.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Pick the given columns out of a result row. Columns the row does not
    /// carry, nulls and non-numeric cells are all treated as absent.
    fn from_query_result<I>(row: &QueryResult, columns: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let readings = columns
            .into_iter()
            .filter_map(|column| {
                let value = row.try_get::<Option<f64>>("", &column).ok().flatten()?;
                Some((column, value))
            })
            .collect();
        Self { readings }
    }
}

impl FromIterator<(String, f64)> for OfficialRow {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

/// Fetch the country's row and pick `years` out of it. Both a missing row
/// and a column the table lacks leave the reading absent; only a failing
/// query is an error.
async fn find_years<C>(
    db: &C,
    country_name: &str,
    years: RangeInclusive<i32>,
) -> Result<OfficialRow, DbErr>
where
    C: ConnectionTrait,
{
    let select = Query::select()
        .column(Asterisk)
        .from(OfficialAnnualTemperatures::Table)
        .and_where(Expr::col(OfficialAnnualTemperatures::CountryName).eq(country_name))
        .limit(1)
        .to_owned();

    let statement = db.get_database_backend().build(&select);
    match db.query_one(statement).await? {
        Some(row) => Ok(OfficialRow::from_query_result(&row, years.map(month_column))),
        None => {
            debug!("No official row for country: {}", country_name);
            Ok(OfficialRow::default())
        }
    }
}

/// Official readings for [`RECENT_YEARS`].
/// A country without a row yields an empty [`OfficialRow`].
pub async fn find_recent<C>(db: &C, country_name: &str) -> Result<OfficialRow, DbErr>
where
    C: ConnectionTrait,
{
    trace!("Entering find_recent for country: {}", country_name);
    let row = find_years(db, country_name, RECENT_YEARS).await?;
    debug!("Found {} recent official readings for {}", row.len(), country_name);
    Ok(row)
}

/// Full official row, probed for every year of [`HISTORY_YEARS`].
pub async fn find_history<C>(db: &C, country_name: &str) -> Result<OfficialRow, DbErr>
where
    C: ConnectionTrait,
{
    trace!("Entering find_history for country: {}", country_name);
    let row = find_years(db, country_name, HISTORY_YEARS).await?;
    debug!("Found {} historical official readings for {}", row.len(), country_name);
    Ok(row)
}
