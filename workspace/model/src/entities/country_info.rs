use sea_orm::entity::prelude::*;

/// Reference data mapping an ISO country code to its display name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "CountryInfo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub country_code: String,
    pub country_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A country has one predicted temperature per modeled year.
    #[sea_orm(has_many = "super::predicted_temperature::Entity")]
    PredictedTemperature,
}

impl Related<super::predicted_temperature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PredictedTemperature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
