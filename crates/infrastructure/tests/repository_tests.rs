//! Repository tests against an in-memory SQLite database with the real
//! schema applied. These cover what the application-level fakes cannot:
//! the scope-to-SQL join, the unique index and the delete rules.

use chrono::{NaiveDate, Utc};
use migration::{Migrator, MigratorTrait};
use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use domain::farm::{Farm, FarmRepository, Sector};
use domain::query::{FarmFilter, PageRequest};
use domain::scope::FarmScope;
use domain::stats::{EmployeeStatsRepository, EmploymentType, FarmEmployeeStats};
use domain::statement::{Statement, StatementRepository};
use domain::user::{Role, User, UserRepository};
use domain::visit::{SiteVisit, SiteVisitRepository, VisitStatus};
use domain::DomainError;

use infrastructure::{
    SeaOrmEmployeeStatsRepository, SeaOrmFarmRepository, SeaOrmSiteVisitRepository,
    SeaOrmStatementRepository, SeaOrmUserRepository,
};

async fn connect() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    db
}

async fn seed_user(db: &DatabaseConnection, username: &str, role: Role) -> User {
    let now = Utc::now();
    SeaOrmUserRepository::new(db.clone())
        .insert(User {
            id: 0,
            username: username.to_string(),
            first_name: username.to_string(),
            last_name: "Test".to_string(),
            email: format!("{username}@example.com"),
            role,
            created: now,
            updated: now,
        })
        .await
        .expect("seed user")
}

async fn seed_farm(db: &DatabaseConnection, owner_id: i32, name: &str) -> Farm {
    let now = Utc::now();
    SeaOrmFarmRepository::new(db.clone())
        .insert(Farm {
            id: 0,
            name: name.to_string(),
            owner_id,
            address: "Plot 1".to_string(),
            size_in_hectares: Some(dec!(10.00)),
            telephone: String::new(),
            account_number: "AC-1".to_string(),
            email: String::new(),
            sector: Sector::Horticulture,
            created: now,
            updated: now,
        })
        .await
        .expect("seed farm")
}

async fn seed_visit(db: &DatabaseConnection, farm_id: i32, agent_id: Option<i32>) -> SiteVisit {
    let now = Utc::now();
    SeaOrmSiteVisitRepository::new(db.clone())
        .insert(SiteVisit {
            id: 0,
            farm_id,
            agent_id,
            visit_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            notes: String::new(),
            status: VisitStatus::Pending,
            resolution_notes: String::new(),
            created: now,
            updated: now,
        })
        .await
        .expect("seed visit")
}

fn stats_record(farm_id: i32, employment_type: EmploymentType) -> FarmEmployeeStats {
    let now = Utc::now();
    FarmEmployeeStats {
        id: 0,
        farm_id,
        reporting_month: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        employment_type,
        citizen_male: 5,
        citizen_female: 3,
        expatriate_male: 0,
        expatriate_female: 0,
        basic_pay_usd: dec!(1000.00),
        basic_pay_zwl: dec!(0.00),
        employees_contribution_usd: dec!(45.00),
        employees_contribution_zwl: dec!(0.00),
        employers_contribution_usd: dec!(45.00),
        employers_contribution_zwl: dec!(0.00),
        arrears_usd: dec!(0.00),
        arrears_zwl: dec!(0.00),
        total_contribution_usd: dec!(90.00),
        total_contribution_zwl: dec!(0.00),
        created_by: None,
        created: now,
        updated: now,
    }
}

#[tokio::test]
async fn visit_scope_joins_through_the_owning_farm() {
    let db = connect().await;
    let m1 = seed_user(&db, "m1", Role::Manager).await;
    let m2 = seed_user(&db, "m2", Role::Manager).await;
    let f1 = seed_farm(&db, m1.id, "Riverside").await;
    let f2 = seed_farm(&db, m2.id, "Hilltop").await;
    seed_visit(&db, f1.id, None).await;
    seed_visit(&db, f1.id, None).await;
    seed_visit(&db, f2.id, None).await;

    let repo = SeaOrmSiteVisitRepository::new(db);
    let page = PageRequest::new(1, 20);

    let all = repo.list(&FarmScope::All, None, page).await.unwrap();
    assert_eq!(all.total_items, 3);

    let owned = repo
        .list(&FarmScope::OwnedBy(m1.id), None, page)
        .await
        .unwrap();
    assert_eq!(owned.total_items, 2);
    assert!(owned.items.iter().all(|v| v.farm_id == f1.id));

    let empty = repo.list(&FarmScope::Empty, None, page).await.unwrap();
    assert_eq!(empty.total_items, 0);
    assert_eq!(repo.count(&FarmScope::Empty).await.unwrap(), 0);
}

#[tokio::test]
async fn farm_filter_narrows_within_the_scope() {
    let db = connect().await;
    let m1 = seed_user(&db, "m1", Role::Manager).await;
    let f1 = seed_farm(&db, m1.id, "Riverside").await;
    let f2 = seed_farm(&db, m1.id, "Hilltop").await;
    seed_visit(&db, f1.id, None).await;
    seed_visit(&db, f2.id, None).await;

    let repo = SeaOrmSiteVisitRepository::new(db);
    let page = PageRequest::new(1, 20);

    let filtered = repo
        .list(&FarmScope::All, Some(FarmFilter::ById(f2.id)), page)
        .await
        .unwrap();
    assert_eq!(filtered.total_items, 1);
    assert_eq!(filtered.items[0].farm_id, f2.id);

    let ignored = repo
        .list(&FarmScope::All, Some(FarmFilter::Ignored), page)
        .await
        .unwrap();
    assert_eq!(ignored.total_items, 2);
}

#[tokio::test]
async fn duplicate_stats_keys_surface_as_conflicts() {
    let db = connect().await;
    let m1 = seed_user(&db, "m1", Role::Manager).await;
    let farm = seed_farm(&db, m1.id, "Riverside").await;

    let repo = SeaOrmEmployeeStatsRepository::new(db);
    repo.insert(stats_record(farm.id, EmploymentType::Permanent))
        .await
        .unwrap();

    let err = repo
        .insert(stats_record(farm.id, EmploymentType::Permanent))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    // A different employment type is a distinct key
    repo.insert(stats_record(farm.id, EmploymentType::Seasonal))
        .await
        .unwrap();
    assert_eq!(repo.count(&FarmScope::All).await.unwrap(), 2);
}

#[tokio::test]
async fn deleting_a_farm_cascades_and_deleting_an_agent_detaches() {
    let db = connect().await;
    let m1 = seed_user(&db, "m1", Role::Manager).await;
    let agent = seed_user(&db, "agent", Role::DesignatedAgent).await;
    let farm = seed_farm(&db, m1.id, "Riverside").await;
    let visit = seed_visit(&db, farm.id, Some(agent.id)).await;

    let now = Utc::now();
    let statements = SeaOrmStatementRepository::new(db.clone());
    statements
        .insert(Statement {
            id: 0,
            farm_id: farm.id,
            period_start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            total_sales: dec!(100.00),
            total_expenses: dec!(40.00),
            balance: dec!(60.00),
            created: now,
            updated: now,
        })
        .await
        .unwrap();

    let users = SeaOrmUserRepository::new(db.clone());
    let visits = SeaOrmSiteVisitRepository::new(db.clone());

    // Removing the agent's account leaves the visit without an agent
    users.delete(agent.id).await.unwrap();
    let detached = visits.find_by_id(visit.id).await.unwrap().unwrap();
    assert_eq!(detached.agent_id, None);

    // Removing the farm takes its visits and statements with it
    let farms = SeaOrmFarmRepository::new(db);
    farms.delete(farm.id).await.unwrap();
    assert!(visits.find_by_id(visit.id).await.unwrap().is_none());
    assert_eq!(statements.count(&FarmScope::All).await.unwrap(), 0);

    let err = farms.delete(farm.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn designated_agents_come_back_ordered_by_name() {
    let db = connect().await;
    seed_user(&db, "zoe", Role::DesignatedAgent).await;
    seed_user(&db, "amos", Role::DesignatedAgent).await;
    seed_user(&db, "mary", Role::Manager).await;

    let users = SeaOrmUserRepository::new(db);
    let agents = users.designated_agents().await.unwrap();
    let names: Vec<&str> = agents.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, vec!["amos", "zoe"]);
}
