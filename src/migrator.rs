use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_buffaloes_table::Migration),
            Box::new(m20240101_000003_create_milk_production_table::Migration),
            Box::new(m20240101_000004_create_breeding_records_table::Migration),
            Box::new(m20240101_000005_create_health_records_table::Migration),
            Box::new(m20240101_000006_create_calf_records_table::Migration),
            Box::new(m20240101_000007_create_heat_events_table::Migration),
            Box::new(m20240101_000008_create_vaccination_records_table::Migration),
            Box::new(m20240101_000009_create_feed_stock_table::Migration),
            Box::new(m20240101_000010_create_financial_records_table::Migration),
            Box::new(m20240101_000011_create_milk_buyers_table::Migration),
            Box::new(m20240101_000012_create_labor_records_table::Migration),
        ]
    }
}

mod m20240101_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::FullName).string().not_null())
                        .col(ColumnDef::new(Users::Mobile).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().null())
                        .col(ColumnDef::new(Users::District).string().not_null())
                        .col(ColumnDef::new(Users::Village).string().not_null())
                        .col(ColumnDef::new(Users::UserType).string().not_null())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Users {
        Table,
        Id,
        Username,
        PasswordHash,
        FullName,
        Mobile,
        Email,
        District,
        Village,
        UserType,
        CreatedAt,
    }
}

mod m20240101_000002_create_buffaloes_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_buffaloes_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Buffaloes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Buffaloes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Buffaloes::UserId).integer().not_null())
                        .col(
                            ColumnDef::new(Buffaloes::TagNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Buffaloes::Name).string().null())
                        .col(ColumnDef::new(Buffaloes::Breed).string().not_null())
                        .col(ColumnDef::new(Buffaloes::DateOfBirth).date().not_null())
                        .col(ColumnDef::new(Buffaloes::PurchaseDate).date().null())
                        .col(ColumnDef::new(Buffaloes::PurchasePrice).decimal().null())
                        .col(
                            ColumnDef::new(Buffaloes::CurrentLactation)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Buffaloes::Status).string().not_null())
                        .col(
                            ColumnDef::new(Buffaloes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_buffaloes_user")
                                .from(Buffaloes::Table, Buffaloes::UserId)
                                .to(
                                    super::m20240101_000001_create_users_table::Users::Table,
                                    super::m20240101_000001_create_users_table::Users::Id,
                                ),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Buffaloes::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Buffaloes {
        Table,
        Id,
        UserId,
        TagNumber,
        Name,
        Breed,
        DateOfBirth,
        PurchaseDate,
        PurchasePrice,
        CurrentLactation,
        Status,
        CreatedAt,
    }
}

mod m20240101_000003_create_milk_production_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_milk_production_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // No uniqueness on (buffalo_id, date): duplicate same-day entries
            // are allowed.
            manager
                .create_table(
                    Table::create()
                        .table(MilkProduction::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MilkProduction::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MilkProduction::UserId).integer().not_null())
                        .col(
                            ColumnDef::new(MilkProduction::BuffaloId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MilkProduction::Date).date().not_null())
                        .col(
                            ColumnDef::new(MilkProduction::MorningYield)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MilkProduction::EveningYield)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MilkProduction::TotalYield)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MilkProduction::FatPercentage)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MilkProduction::SnfPercentage)
                                .double()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MilkProduction::PricePerLiter)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MilkProduction::Notes).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_milk_production_user_date")
                        .table(MilkProduction::Table)
                        .col(MilkProduction::UserId)
                        .col(MilkProduction::Date)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MilkProduction::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum MilkProduction {
        Table,
        Id,
        UserId,
        BuffaloId,
        Date,
        MorningYield,
        EveningYield,
        TotalYield,
        FatPercentage,
        SnfPercentage,
        PricePerLiter,
        Notes,
    }
}

mod m20240101_000004_create_breeding_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_breeding_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(BreedingRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BreedingRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(BreedingRecords::UserId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BreedingRecords::BuffaloId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BreedingRecords::BreedingDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BreedingRecords::BreedingType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(BreedingRecords::BullDetails).string().null())
                        .col(
                            ColumnDef::new(BreedingRecords::ExpectedCalvingDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BreedingRecords::ActualCalvingDate)
                                .date()
                                .null(),
                        )
                        .col(ColumnDef::new(BreedingRecords::CalfGender).string().null())
                        .col(ColumnDef::new(BreedingRecords::Status).string().not_null())
                        .col(ColumnDef::new(BreedingRecords::Notes).string().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(BreedingRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum BreedingRecords {
        Table,
        Id,
        UserId,
        BuffaloId,
        BreedingDate,
        BreedingType,
        BullDetails,
        ExpectedCalvingDate,
        ActualCalvingDate,
        CalfGender,
        Status,
        Notes,
    }
}

mod m20240101_000005_create_health_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_health_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(HealthRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(HealthRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(HealthRecords::UserId).integer().not_null())
                        .col(
                            ColumnDef::new(HealthRecords::BuffaloId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(HealthRecords::Date).date().not_null())
                        .col(
                            ColumnDef::new(HealthRecords::RecordType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(HealthRecords::DiseaseName).string().null())
                        .col(ColumnDef::new(HealthRecords::Symptoms).string().null())
                        .col(ColumnDef::new(HealthRecords::Treatment).string().null())
                        .col(ColumnDef::new(HealthRecords::Medicine).string().null())
                        .col(ColumnDef::new(HealthRecords::Veterinarian).string().null())
                        .col(
                            ColumnDef::new(HealthRecords::Cost)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(HealthRecords::FollowUpDate).date().null())
                        .col(ColumnDef::new(HealthRecords::Notes).string().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(HealthRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum HealthRecords {
        Table,
        Id,
        UserId,
        BuffaloId,
        Date,
        RecordType,
        DiseaseName,
        Symptoms,
        Treatment,
        Medicine,
        Veterinarian,
        Cost,
        FollowUpDate,
        Notes,
    }
}

mod m20240101_000006_create_calf_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_calf_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CalfRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CalfRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CalfRecords::UserId).integer().not_null())
                        .col(ColumnDef::new(CalfRecords::MotherId).integer().not_null())
                        .col(
                            ColumnDef::new(CalfRecords::TagNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(CalfRecords::DateOfBirth).date().not_null())
                        .col(ColumnDef::new(CalfRecords::Gender).string().not_null())
                        .col(ColumnDef::new(CalfRecords::BirthWeightKg).double().null())
                        .col(ColumnDef::new(CalfRecords::Status).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CalfRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum CalfRecords {
        Table,
        Id,
        UserId,
        MotherId,
        TagNumber,
        DateOfBirth,
        Gender,
        BirthWeightKg,
        Status,
    }
}

mod m20240101_000007_create_heat_events_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_heat_events_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(HeatEvents::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(HeatEvents::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(HeatEvents::UserId).integer().not_null())
                        .col(ColumnDef::new(HeatEvents::BuffaloId).integer().not_null())
                        .col(ColumnDef::new(HeatEvents::Date).date().not_null())
                        .col(ColumnDef::new(HeatEvents::Intensity).string().not_null())
                        .col(
                            ColumnDef::new(HeatEvents::Bred)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(HeatEvents::Notes).string().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(HeatEvents::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum HeatEvents {
        Table,
        Id,
        UserId,
        BuffaloId,
        Date,
        Intensity,
        Bred,
        Notes,
    }
}

mod m20240101_000008_create_vaccination_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_vaccination_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(VaccinationRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(VaccinationRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(VaccinationRecords::UserId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VaccinationRecords::BuffaloId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VaccinationRecords::Vaccine)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(VaccinationRecords::Date).date().not_null())
                        .col(
                            ColumnDef::new(VaccinationRecords::NextDueDate)
                                .date()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_vaccinations_user_due")
                        .table(VaccinationRecords::Table)
                        .col(VaccinationRecords::UserId)
                        .col(VaccinationRecords::NextDueDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(VaccinationRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum VaccinationRecords {
        Table,
        Id,
        UserId,
        BuffaloId,
        Vaccine,
        Date,
        NextDueDate,
    }
}

mod m20240101_000009_create_feed_stock_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000009_create_feed_stock_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(FeedStock::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FeedStock::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(FeedStock::UserId).integer().not_null())
                        .col(ColumnDef::new(FeedStock::Name).string().not_null())
                        .col(ColumnDef::new(FeedStock::FeedType).string().not_null())
                        .col(
                            ColumnDef::new(FeedStock::CurrentStockKg)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FeedStock::ReorderLevelKg)
                                .double()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Upsert key: one row per feed name per farm.
            manager
                .create_index(
                    Index::create()
                        .name("idx_feed_stock_user_name")
                        .table(FeedStock::Table)
                        .col(FeedStock::UserId)
                        .col(FeedStock::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FeedStock::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum FeedStock {
        Table,
        Id,
        UserId,
        Name,
        FeedType,
        CurrentStockKg,
        ReorderLevelKg,
    }
}

mod m20240101_000010_create_financial_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000010_create_financial_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(FinancialRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FinancialRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(FinancialRecords::UserId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(FinancialRecords::Date).date().not_null())
                        .col(
                            ColumnDef::new(FinancialRecords::Category)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinancialRecords::TransactionType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinancialRecords::Amount)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(FinancialRecords::Description).string().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FinancialRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum FinancialRecords {
        Table,
        Id,
        UserId,
        Date,
        Category,
        TransactionType,
        Amount,
        Description,
    }
}

mod m20240101_000011_create_milk_buyers_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000011_create_milk_buyers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MilkBuyers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MilkBuyers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MilkBuyers::UserId).integer().not_null())
                        .col(ColumnDef::new(MilkBuyers::BuyerName).string().not_null())
                        .col(ColumnDef::new(MilkBuyers::Contact).string().not_null())
                        .col(
                            ColumnDef::new(MilkBuyers::PricePerLiter)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MilkBuyers::PaymentTerms).string().null())
                        .col(
                            ColumnDef::new(MilkBuyers::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MilkBuyers::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum MilkBuyers {
        Table,
        Id,
        UserId,
        BuyerName,
        Contact,
        PricePerLiter,
        PaymentTerms,
        Active,
    }
}

mod m20240101_000012_create_labor_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000012_create_labor_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(LaborRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(LaborRecords::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(LaborRecords::UserId).integer().not_null())
                        .col(ColumnDef::new(LaborRecords::WorkerName).string().not_null())
                        .col(ColumnDef::new(LaborRecords::Role).string().not_null())
                        .col(
                            ColumnDef::new(LaborRecords::MonthlySalary)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(LaborRecords::JoinDate).date().not_null())
                        .col(
                            ColumnDef::new(LaborRecords::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(LaborRecords::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum LaborRecords {
        Table,
        Id,
        UserId,
        WorkerName,
        Role,
        MonthlySalary,
        JoinDate,
        Active,
    }
}
