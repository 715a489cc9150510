//! SeaORM entities for the normalized reference tables.
//! The wide `OfficialAnnualTemperatures` table has one column per year-month
//! and is read through [`crate::official`] instead of a derived entity.

pub mod country_info;
pub mod predicted_temperature;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::country_info::Entity as CountryInfo;
    pub use super::predicted_temperature::Entity as PredictedTemperature;
}
