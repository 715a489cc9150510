use crate::entity_iden::{ColumnIden, EntityIden};
use model::entities::prelude::*;
use model::entities::{country_info, predicted_temperature};
use model::official::{month_column, OfficialAnnualTemperatures, HISTORY_YEARS};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create CountryInfo table
        manager
            .create_table(
                Table::create()
                    .table(CountryInfo::table())
                    .if_not_exists()
                    .col(pk_auto(CountryInfo::column(country_info::Column::Id)))
                    .col(
                        string_len(CountryInfo::column(country_info::Column::CountryCode), 3)
                            .unique_key(),
                    )
                    .col(string_len(
                        CountryInfo::column(country_info::Column::CountryName),
                        100,
                    ))
                    .to_owned(),
            )
            .await?;

        // Create PredictedTemperatures table
        manager
            .create_table(
                Table::create()
                    .table(PredictedTemperature::table())
                    .if_not_exists()
                    .col(pk_auto(PredictedTemperature::column(
                        predicted_temperature::Column::Id,
                    )))
                    .col(string_len(
                        PredictedTemperature::column(predicted_temperature::Column::CountryCode),
                        3,
                    ))
                    .col(integer(PredictedTemperature::column(
                        predicted_temperature::Column::Year,
                    )))
                    .col(double(PredictedTemperature::column(
                        predicted_temperature::Column::PredictedTemperature,
                    )))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_predicted_temperatures_country")
                            .from(
                                PredictedTemperature::table(),
                                PredictedTemperature::column(
                                    predicted_temperature::Column::CountryCode,
                                ),
                            )
                            .to(
                                CountryInfo::table(),
                                CountryInfo::column(country_info::Column::CountryCode),
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_predicted_temperatures_country_year")
                    .table(PredictedTemperature::table())
                    .col(PredictedTemperature::column(
                        predicted_temperature::Column::CountryCode,
                    ))
                    .col(PredictedTemperature::column(predicted_temperature::Column::Year))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create OfficialAnnualTemperatures table, one nullable column per sampled year-month
        let mut official = Table::create()
            .table(OfficialAnnualTemperatures::Table)
            .if_not_exists()
            .col(pk_auto(OfficialAnnualTemperatures::Id))
            .col(string_len_null(OfficialAnnualTemperatures::CountryCode, 3))
            .col(string_len(OfficialAnnualTemperatures::CountryName, 100))
            .to_owned();
        for year in HISTORY_YEARS {
            official.col(double_null(ColumnIden::new(month_column(year))));
        }
        manager.create_table(official).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_official_annual_temperatures_country_name")
                    .table(OfficialAnnualTemperatures::Table)
                    .col(OfficialAnnualTemperatures::CountryName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OfficialAnnualTemperatures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PredictedTemperature::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CountryInfo::table()).to_owned())
            .await?;

        Ok(())
    }
}
