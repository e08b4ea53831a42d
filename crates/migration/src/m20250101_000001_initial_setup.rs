use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
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
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create farms table
        manager
            .create_table(
                Table::create()
                    .table(Farms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Farms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Farms::Name).string().not_null())
                    .col(ColumnDef::new(Farms::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Farms::Address).string().not_null())
                    .col(ColumnDef::new(Farms::SizeInHectares).decimal_len(10, 2))
                    .col(ColumnDef::new(Farms::Telephone).string().not_null())
                    .col(ColumnDef::new(Farms::AccountNumber).string().not_null())
                    .col(ColumnDef::new(Farms::Email).string().not_null())
                    .col(ColumnDef::new(Farms::Sector).string().not_null())
                    .col(
                        ColumnDef::new(Farms::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Farms::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farm_owner")
                            .from(Farms::Table, Farms::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create site_visits table
        manager
            .create_table(
                Table::create()
                    .table(SiteVisits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteVisits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteVisits::FarmId).integer().not_null())
                    .col(ColumnDef::new(SiteVisits::AgentId).integer())
                    .col(ColumnDef::new(SiteVisits::VisitDate).date().not_null())
                    .col(ColumnDef::new(SiteVisits::Notes).text().not_null())
                    .col(
                        ColumnDef::new(SiteVisits::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(SiteVisits::ResolutionNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SiteVisits::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SiteVisits::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_visit_farm")
                            .from(SiteVisits::Table, SiteVisits::FarmId)
                            .to(Farms::Table, Farms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_visit_agent")
                            .from(SiteVisits::Table, SiteVisits::AgentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create notices table
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notices::Title).string().not_null())
                    .col(ColumnDef::new(Notices::Message).text().not_null())
                    .col(ColumnDef::new(Notices::IssuedBy).integer())
                    .col(
                        ColumnDef::new(Notices::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Notices::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Notices::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notice_issuer")
                            .from(Notices::Table, Notices::IssuedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create statements table
        manager
            .create_table(
                Table::create()
                    .table(Statements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Statements::FarmId).integer().not_null())
                    .col(ColumnDef::new(Statements::PeriodStart).date().not_null())
                    .col(ColumnDef::new(Statements::PeriodEnd).date().not_null())
                    .col(
                        ColumnDef::new(Statements::TotalSales)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Statements::TotalExpenses)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Statements::Balance)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Statements::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Statements::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statement_farm")
                            .from(Statements::Table, Statements::FarmId)
                            .to(Farms::Table, Farms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create farm_employee_stats table
        manager
            .create_table(
                Table::create()
                    .table(FarmEmployeeStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FarmEmployeeStats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::FarmId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::ReportingMonth)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::EmploymentType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::CitizenMale)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::CitizenFemale)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::ExpatriateMale)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::ExpatriateFemale)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::BasicPayUsd)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::BasicPayZwl)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::EmployeesContributionUsd)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::EmployeesContributionZwl)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::EmployersContributionUsd)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::EmployersContributionZwl)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::ArrearsUsd)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::ArrearsZwl)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::TotalContributionUsd)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::TotalContributionZwl)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FarmEmployeeStats::CreatedBy).integer())
                    .col(
                        ColumnDef::new(FarmEmployeeStats::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FarmEmployeeStats::Updated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_stats_farm")
                            .from(FarmEmployeeStats::Table, FarmEmployeeStats::FarmId)
                            .to(Farms::Table, Farms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_stats_author")
                            .from(FarmEmployeeStats::Table, FarmEmployeeStats::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per farm, month and employment type
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_stats_farm_month_type")
                    .table(FarmEmployeeStats::Table)
                    .col(FarmEmployeeStats::FarmId)
                    .col(FarmEmployeeStats::ReportingMonth)
                    .col(FarmEmployeeStats::EmploymentType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FarmEmployeeStats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Statements::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SiteVisits::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Farms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Email,
    Role,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum Farms {
    Table,
    Id,
    Name,
    OwnerId,
    Address,
    SizeInHectares,
    Telephone,
    AccountNumber,
    Email,
    Sector,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum SiteVisits {
    Table,
    Id,
    FarmId,
    AgentId,
    VisitDate,
    Notes,
    Status,
    ResolutionNotes,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum Notices {
    Table,
    Id,
    Title,
    Message,
    IssuedBy,
    IsActive,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum Statements {
    Table,
    Id,
    FarmId,
    PeriodStart,
    PeriodEnd,
    TotalSales,
    TotalExpenses,
    Balance,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum FarmEmployeeStats {
    Table,
    Id,
    FarmId,
    ReportingMonth,
    EmploymentType,
    CitizenMale,
    CitizenFemale,
    ExpatriateMale,
    ExpatriateFemale,
    BasicPayUsd,
    BasicPayZwl,
    EmployeesContributionUsd,
    EmployeesContributionZwl,
    EmployersContributionUsd,
    EmployersContributionZwl,
    ArrearsUsd,
    ArrearsZwl,
    TotalContributionUsd,
    TotalContributionZwl,
    CreatedBy,
    Created,
    Updated,
}
