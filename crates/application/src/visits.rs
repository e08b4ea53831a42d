use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use domain::error::Result;
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::{EntityKind, FarmScope};
use domain::screen::SITE_VISIT_SCREEN;
use domain::user::{Role, User, UserRepository};
use domain::visit::{SiteVisit, SiteVisitRepository, VisitStatus};
use domain::{DomainError, FieldError};

#[derive(Debug, Clone, Deserialize)]
pub struct SiteVisitDraft {
    pub farm_id: i32,
    pub agent_id: Option<i32>,
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default)]
    pub resolution_notes: String,
}

pub struct SiteVisitService {
    repo: Arc<dyn SiteVisitRepository>,
    users: Arc<dyn UserRepository>,
}

impl SiteVisitService {
    pub fn new(repo: Arc<dyn SiteVisitRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repo, users }
    }

    /// Visits within the caller's scope. The raw farm filter goes
    /// through the lenient parse: non-numeric input means no filter.
    pub async fn list(
        &self,
        user: &User,
        farm_filter: Option<&str>,
        page: u64,
    ) -> Result<Page<SiteVisit>> {
        let scope = FarmScope::resolve(user, EntityKind::SiteVisit);
        let filter = FarmFilter::parse(farm_filter);
        self.repo
            .list(
                &scope,
                filter,
                PageRequest::new(page, SITE_VISIT_SCREEN.page_size),
            )
            .await
    }

    pub async fn get(&self, id: i32) -> Result<SiteVisit> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("site visit {id}")))
    }

    /// Users a visit may be assigned to, ordered by first then last name.
    pub async fn agent_choices(&self) -> Result<Vec<User>> {
        self.users.designated_agents().await
    }

    pub async fn create(&self, draft: SiteVisitDraft) -> Result<SiteVisit> {
        self.check_agent_eligibility(draft.agent_id).await?;
        let now = Utc::now();
        let visit = SiteVisit {
            id: 0,
            farm_id: draft.farm_id,
            agent_id: draft.agent_id,
            visit_date: draft.visit_date,
            notes: draft.notes,
            status: draft.status,
            resolution_notes: draft.resolution_notes,
            created: now,
            updated: now,
        };
        let visit = self.repo.insert(visit).await?;
        tracing::info!(visit_id = visit.id, farm_id = visit.farm_id, "Site visit created");
        Ok(visit)
    }

    pub async fn update(&self, id: i32, draft: SiteVisitDraft) -> Result<SiteVisit> {
        self.check_agent_eligibility(draft.agent_id).await?;
        let mut visit = self.get(id).await?;
        visit.farm_id = draft.farm_id;
        visit.agent_id = draft.agent_id;
        visit.visit_date = draft.visit_date;
        visit.notes = draft.notes;
        visit.status = draft.status;
        visit.resolution_notes = draft.resolution_notes;
        visit.updated = Utc::now();
        self.repo.update(visit).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await
    }

    /// An assigned agent must hold the DesignatedAgent role. This is an
    /// assignment-eligibility rule, not a visibility rule.
    async fn check_agent_eligibility(&self, agent_id: Option<i32>) -> Result<()> {
        let Some(agent_id) = agent_id else {
            return Ok(());
        };
        let agent = self
            .users
            .find_by_id(agent_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {agent_id}")))?;
        if agent.role != Role::DesignatedAgent {
            return Err(DomainError::Validation(vec![FieldError::new(
                "agent",
                "must be a designated agent",
            )]));
        }
        Ok(())
    }
}
