//! In-memory fakes for the domain repository ports.
#![allow(dead_code)]
//!
//! The fakes honour the same contracts the SeaORM implementations do:
//! scope predicates, lenient farm filters, newest-first ordering, and
//! the compound uniqueness rule on employee stats.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use domain::error::Result;
use domain::farm::{Farm, FarmRepository, Sector};
use domain::notice::{Notice, NoticeRepository};
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::FarmScope;
use domain::statement::{Statement, StatementRepository};
use domain::stats::{EmployeeStatsRepository, FarmEmployeeStats};
use domain::user::{Role, User, UserRepository};
use domain::visit::{SiteVisit, SiteVisitRepository, VisitStatus};
use domain::DomainError;

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    farms: Vec<Farm>,
    visits: Vec<SiteVisit>,
    statements: Vec<Statement>,
    stats: Vec<FarmEmployeeStats>,
    notices: Vec<Notice>,
    next_id: i32,
}

impl Inner {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn owner_of(&self, farm_id: i32) -> Option<i32> {
        self.farms.iter().find(|f| f.id == farm_id).map(|f| f.owner_id)
    }

    fn farm_in_scope(&self, scope: &FarmScope, farm_id: i32) -> bool {
        self.owner_of(farm_id)
            .map(|owner| scope.allows_owner(owner))
            .unwrap_or(false)
    }
}

#[derive(Default)]
pub struct TestStore {
    inner: Mutex<Inner>,
}

impl TestStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn stats_count(&self) -> usize {
        self.inner.lock().unwrap().stats.len()
    }
}

fn page_of<T: Clone>(mut items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = (request.offset() as usize).min(items.len());
    let end = (start + request.page_size as usize).min(items.len());
    let items = items.drain(start..end).collect();
    Page::new(items, request, total)
}

fn matches_filter(filter: Option<FarmFilter>, farm_id: i32) -> bool {
    match filter.and_then(|f| f.farm_id()) {
        Some(id) => farm_id == id,
        None => true,
    }
}

// --- Fixture builders ---

pub fn user(id: i32, role: Role, first: &str, last: &str) -> User {
    User {
        id,
        username: format!("{first}.{last}").to_lowercase(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{first}@example.com").to_lowercase(),
        role,
        created: Utc::now(),
        updated: Utc::now(),
    }
}

pub fn farm(owner_id: i32, name: &str) -> Farm {
    Farm {
        id: 0,
        name: name.to_string(),
        owner_id,
        address: "1 Plot Road".into(),
        size_in_hectares: None,
        telephone: String::new(),
        account_number: "ACC-001".into(),
        email: String::new(),
        sector: Sector::Horticulture,
        created: Utc::now(),
        updated: Utc::now(),
    }
}

pub fn visit(farm_id: i32, date: chrono::NaiveDate) -> SiteVisit {
    SiteVisit {
        id: 0,
        farm_id,
        agent_id: None,
        visit_date: date,
        notes: String::new(),
        status: VisitStatus::Pending,
        resolution_notes: String::new(),
        created: Utc::now(),
        updated: Utc::now(),
    }
}

pub fn statement(farm_id: i32) -> Statement {
    Statement {
        id: 0,
        farm_id,
        period_start: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        period_end: chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        total_sales: Decimal::ZERO,
        total_expenses: Decimal::ZERO,
        balance: Decimal::ZERO,
        created: Utc::now(),
        updated: Utc::now(),
    }
}

// --- Port implementations ---

pub struct Users(pub Arc<TestStore>);

#[async_trait]
impl UserRepository for Users {
    async fn insert(&self, mut user: User) -> Result<User> {
        let mut inner = self.0.inner.lock().unwrap();
        user.id = inner.next_id();
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut inner = self.0.inner.lock().unwrap();
        let slot = inner
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DomainError::NotFound(format!("user {}", user.id)))?;
        *slot = user.clone();
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Page<User>> {
        let mut users = self.0.inner.lock().unwrap().users.clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(users, page))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.0.inner.lock().unwrap().users.len() as u64)
    }

    async fn designated_agents(&self) -> Result<Vec<User>> {
        let mut agents: Vec<User> = self
            .0
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| u.role == Role::DesignatedAgent)
            .cloned()
            .collect();
        agents.sort_by(|a, b| {
            (a.first_name.as_str(), a.last_name.as_str())
                .cmp(&(b.first_name.as_str(), b.last_name.as_str()))
        });
        Ok(agents)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut inner = self.0.inner.lock().unwrap();
        inner.users.retain(|u| u.id != id);
        // Strong ownership: owned farms go, weak references null out
        let owned: Vec<i32> = inner
            .farms
            .iter()
            .filter(|f| f.owner_id == id)
            .map(|f| f.id)
            .collect();
        inner.farms.retain(|f| f.owner_id != id);
        inner.visits.retain(|v| !owned.contains(&v.farm_id));
        inner.statements.retain(|s| !owned.contains(&s.farm_id));
        inner.stats.retain(|s| !owned.contains(&s.farm_id));
        for v in &mut inner.visits {
            if v.agent_id == Some(id) {
                v.agent_id = None;
            }
        }
        for n in &mut inner.notices {
            if n.issued_by == Some(id) {
                n.issued_by = None;
            }
        }
        for s in &mut inner.stats {
            if s.created_by == Some(id) {
                s.created_by = None;
            }
        }
        Ok(())
    }
}

pub struct Farms(pub Arc<TestStore>);

#[async_trait]
impl FarmRepository for Farms {
    async fn insert(&self, mut farm: Farm) -> Result<Farm> {
        let mut inner = self.0.inner.lock().unwrap();
        farm.id = inner.next_id();
        inner.farms.push(farm.clone());
        Ok(farm)
    }

    async fn update(&self, farm: Farm) -> Result<Farm> {
        let mut inner = self.0.inner.lock().unwrap();
        let slot = inner
            .farms
            .iter_mut()
            .find(|f| f.id == farm.id)
            .ok_or_else(|| DomainError::NotFound(format!("farm {}", farm.id)))?;
        *slot = farm.clone();
        Ok(farm)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Farm>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .farms
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn list(&self, scope: &FarmScope, page: PageRequest) -> Result<Page<Farm>> {
        let mut farms: Vec<Farm> = self
            .0
            .inner
            .lock()
            .unwrap()
            .farms
            .iter()
            .filter(|f| scope.allows_owner(f.owner_id))
            .cloned()
            .collect();
        farms.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(farms, page))
    }

    async fn list_all(&self, scope: &FarmScope) -> Result<Vec<Farm>> {
        let mut farms: Vec<Farm> = self
            .0
            .inner
            .lock()
            .unwrap()
            .farms
            .iter()
            .filter(|f| scope.allows_owner(f.owner_id))
            .cloned()
            .collect();
        farms.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(farms)
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Farm>> {
        let mut farms = self.list_all(scope).await?;
        farms.truncate(limit as usize);
        Ok(farms)
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .farms
            .iter()
            .filter(|f| scope.allows_owner(f.owner_id))
            .count() as u64)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut inner = self.0.inner.lock().unwrap();
        inner.farms.retain(|f| f.id != id);
        inner.visits.retain(|v| v.farm_id != id);
        inner.statements.retain(|s| s.farm_id != id);
        inner.stats.retain(|s| s.farm_id != id);
        Ok(())
    }
}

pub struct Visits(pub Arc<TestStore>);

#[async_trait]
impl SiteVisitRepository for Visits {
    async fn insert(&self, mut visit: SiteVisit) -> Result<SiteVisit> {
        let mut inner = self.0.inner.lock().unwrap();
        visit.id = inner.next_id();
        inner.visits.push(visit.clone());
        Ok(visit)
    }

    async fn update(&self, visit: SiteVisit) -> Result<SiteVisit> {
        let mut inner = self.0.inner.lock().unwrap();
        let slot = inner
            .visits
            .iter_mut()
            .find(|v| v.id == visit.id)
            .ok_or_else(|| DomainError::NotFound(format!("site visit {}", visit.id)))?;
        *slot = visit.clone();
        Ok(visit)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SiteVisit>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .visits
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<SiteVisit>> {
        let inner = self.0.inner.lock().unwrap();
        let mut visits: Vec<SiteVisit> = inner
            .visits
            .iter()
            .filter(|v| inner.farm_in_scope(scope, v.farm_id))
            .filter(|v| matches_filter(filter, v.farm_id))
            .cloned()
            .collect();
        visits.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(visits, page))
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<SiteVisit>> {
        let inner = self.0.inner.lock().unwrap();
        let mut visits: Vec<SiteVisit> = inner
            .visits
            .iter()
            .filter(|v| inner.farm_in_scope(scope, v.farm_id))
            .cloned()
            .collect();
        visits.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        visits.truncate(limit as usize);
        Ok(visits)
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .visits
            .iter()
            .filter(|v| inner.farm_in_scope(scope, v.farm_id))
            .count() as u64)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.0.inner.lock().unwrap().visits.retain(|v| v.id != id);
        Ok(())
    }
}

pub struct Statements(pub Arc<TestStore>);

#[async_trait]
impl StatementRepository for Statements {
    async fn insert(&self, mut statement: Statement) -> Result<Statement> {
        let mut inner = self.0.inner.lock().unwrap();
        statement.id = inner.next_id();
        inner.statements.push(statement.clone());
        Ok(statement)
    }

    async fn update(&self, statement: Statement) -> Result<Statement> {
        let mut inner = self.0.inner.lock().unwrap();
        let slot = inner
            .statements
            .iter_mut()
            .find(|s| s.id == statement.id)
            .ok_or_else(|| DomainError::NotFound(format!("statement {}", statement.id)))?;
        *slot = statement.clone();
        Ok(statement)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Statement>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .statements
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<Statement>> {
        let inner = self.0.inner.lock().unwrap();
        let mut statements: Vec<Statement> = inner
            .statements
            .iter()
            .filter(|s| inner.farm_in_scope(scope, s.farm_id))
            .filter(|s| matches_filter(filter, s.farm_id))
            .cloned()
            .collect();
        statements.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(statements, page))
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Statement>> {
        let inner = self.0.inner.lock().unwrap();
        let mut statements: Vec<Statement> = inner
            .statements
            .iter()
            .filter(|s| inner.farm_in_scope(scope, s.farm_id))
            .cloned()
            .collect();
        statements.sort_by(|a, b| b.id.cmp(&a.id));
        statements.truncate(limit as usize);
        Ok(statements)
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .statements
            .iter()
            .filter(|s| inner.farm_in_scope(scope, s.farm_id))
            .count() as u64)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.0
            .inner
            .lock()
            .unwrap()
            .statements
            .retain(|s| s.id != id);
        Ok(())
    }
}

pub struct Stats(pub Arc<TestStore>);

impl Stats {
    fn duplicate_key(inner: &Inner, candidate: &FarmEmployeeStats) -> bool {
        inner.stats.iter().any(|s| {
            s.id != candidate.id
                && s.farm_id == candidate.farm_id
                && s.reporting_month == candidate.reporting_month
                && s.employment_type == candidate.employment_type
        })
    }
}

#[async_trait]
impl EmployeeStatsRepository for Stats {
    async fn insert(&self, mut stats: FarmEmployeeStats) -> Result<FarmEmployeeStats> {
        let mut inner = self.0.inner.lock().unwrap();
        if Self::duplicate_key(&inner, &stats) {
            return Err(DomainError::Conflict(
                "duplicate (farm, reporting_month, employment_type)".into(),
            ));
        }
        stats.id = inner.next_id();
        inner.stats.push(stats.clone());
        Ok(stats)
    }

    async fn update(&self, stats: FarmEmployeeStats) -> Result<FarmEmployeeStats> {
        let mut inner = self.0.inner.lock().unwrap();
        if Self::duplicate_key(&inner, &stats) {
            return Err(DomainError::Conflict(
                "duplicate (farm, reporting_month, employment_type)".into(),
            ));
        }
        let slot = inner
            .stats
            .iter_mut()
            .find(|s| s.id == stats.id)
            .ok_or_else(|| DomainError::NotFound(format!("employee stats {}", stats.id)))?;
        *slot = stats.clone();
        Ok(stats)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FarmEmployeeStats>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .stats
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<FarmEmployeeStats>> {
        let inner = self.0.inner.lock().unwrap();
        let mut stats: Vec<FarmEmployeeStats> = inner
            .stats
            .iter()
            .filter(|s| inner.farm_in_scope(scope, s.farm_id))
            .filter(|s| matches_filter(filter, s.farm_id))
            .cloned()
            .collect();
        stats.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(stats, page))
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .stats
            .iter()
            .filter(|s| inner.farm_in_scope(scope, s.farm_id))
            .count() as u64)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.0.inner.lock().unwrap().stats.retain(|s| s.id != id);
        Ok(())
    }
}

pub struct Notices(pub Arc<TestStore>);

#[async_trait]
impl NoticeRepository for Notices {
    async fn insert(&self, mut notice: Notice) -> Result<Notice> {
        let mut inner = self.0.inner.lock().unwrap();
        notice.id = inner.next_id();
        inner.notices.push(notice.clone());
        Ok(notice)
    }

    async fn update(&self, notice: Notice) -> Result<Notice> {
        let mut inner = self.0.inner.lock().unwrap();
        let slot = inner
            .notices
            .iter_mut()
            .find(|n| n.id == notice.id)
            .ok_or_else(|| DomainError::NotFound(format!("notice {}", notice.id)))?;
        *slot = notice.clone();
        Ok(notice)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Notice>> {
        Ok(self
            .0
            .inner
            .lock()
            .unwrap()
            .notices
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Notice>> {
        let mut notices = self.0.inner.lock().unwrap().notices.clone();
        notices.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(page_of(notices, page))
    }

    async fn active_recent(&self, limit: u64) -> Result<Vec<Notice>> {
        let mut notices: Vec<Notice> = self
            .0
            .inner
            .lock()
            .unwrap()
            .notices
            .iter()
            .filter(|n| n.is_active)
            .cloned()
            .collect();
        notices.sort_by(|a, b| b.id.cmp(&a.id));
        notices.truncate(limit as usize);
        Ok(notices)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.0.inner.lock().unwrap().notices.retain(|n| n.id != id);
        Ok(())
    }
}
