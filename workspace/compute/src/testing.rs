//! Store fixtures for the compute tests.

use migration::{Migrator, MigratorTrait};
use model::entities::{country_info, predicted_temperature};
use model::official::{OfficialAnnualTemperatures, month_column};
use sea_orm::sea_query::{Alias, Query, SimpleExpr};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};

/// Create an in-memory SQLite database with the schema applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn create_country(db: &DatabaseConnection, code: &str, name: &str) {
    country_info::ActiveModel {
        country_code: Set(code.to_string()),
        country_name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create country");
}

pub async fn create_prediction(db: &DatabaseConnection, code: &str, year: i32, value: f64) {
    predicted_temperature::ActiveModel {
        country_code: Set(code.to_string()),
        year: Set(year),
        predicted_temperature: Set(value),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create prediction");
}

/// Insert a wide official row; `None` stores an explicit NULL.
pub async fn insert_official_row(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    readings: &[(i32, Option<f64>)],
) {
    let mut columns = vec![Alias::new("country_code"), Alias::new("country_name")];
    let mut values: Vec<SimpleExpr> = vec![code.into(), name.into()];
    for (year, value) in readings {
        columns.push(Alias::new(month_column(*year)));
        values.push((*value).into());
    }

    let insert = Query::insert()
        .into_table(OfficialAnnualTemperatures::Table)
        .columns(columns)
        .values_panic(values)
        .to_owned();
    db.execute(db.get_database_backend().build(&insert))
        .await
        .expect("Failed to insert official row");
}
