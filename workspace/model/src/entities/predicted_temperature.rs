use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder, QuerySelect};

/// A modeled yearly temperature for one country.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "PredictedTemperatures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub country_code: String,
    pub year: i32,
    /// Degrees Celsius.
    pub predicted_temperature: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country_info::Entity",
        from = "Column::CountryCode",
        to = "super::country_info::Column::CountryCode"
    )]
    CountryInfo,
}

impl Related<super::country_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountryInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// All predicted temperatures for the country with the given display name,
/// ordered by year ascending. An unknown name yields an empty list.
pub async fn find_by_country_name<C>(db: &C, country_name: &str) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    Entity::find()
        .join(sea_orm::JoinType::InnerJoin, Relation::CountryInfo.def())
        .filter(super::country_info::Column::CountryName.eq(country_name))
        .order_by_asc(Column::Year)
        .all(db)
        .await
}
