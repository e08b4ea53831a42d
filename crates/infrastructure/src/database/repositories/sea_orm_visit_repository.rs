use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use domain::error::Result;
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::FarmScope;
use domain::visit::{SiteVisit, SiteVisitRepository, VisitStatus};
use domain::DomainError;

use super::{map_db_err, not_found};
use crate::database::entities::{farms, site_visits};

pub struct SeaOrmSiteVisitRepository {
    db: DatabaseConnection,
}

impl SeaOrmSiteVisitRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_visit(model: site_visits::Model) -> Result<SiteVisit> {
        let status = VisitStatus::parse(&model.status).ok_or_else(|| {
            DomainError::Repository(format!("unknown visit status: {}", model.status))
        })?;
        Ok(SiteVisit {
            id: model.id,
            farm_id: model.farm_id,
            agent_id: model.agent_id,
            visit_date: model.visit_date,
            notes: model.notes,
            status,
            resolution_notes: model.resolution_notes,
            created: model.created,
            updated: model.updated,
        })
    }

    fn to_active_model(visit: &SiteVisit) -> site_visits::ActiveModel {
        site_visits::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            farm_id: Set(visit.farm_id),
            agent_id: Set(visit.agent_id),
            visit_date: Set(visit.visit_date),
            notes: Set(visit.notes.clone()),
            status: Set(visit.status.as_str().to_string()),
            resolution_notes: Set(visit.resolution_notes.clone()),
            created: Set(visit.created),
            updated: Set(visit.updated),
        }
    }

    /// Scope site visits through their farm's owner. Callers handle the
    /// empty scope before reaching here.
    fn scoped(scope: &FarmScope) -> Select<site_visits::Entity> {
        match scope {
            FarmScope::All | FarmScope::Empty => site_visits::Entity::find(),
            FarmScope::OwnedBy(owner) => site_visits::Entity::find()
                .join(JoinType::InnerJoin, site_visits::Relation::Farm.def())
                .filter(farms::Column::OwnerId.eq(*owner)),
        }
    }
}

#[async_trait]
impl SiteVisitRepository for SeaOrmSiteVisitRepository {
    async fn insert(&self, mut visit: SiteVisit) -> Result<SiteVisit> {
        let result = site_visits::Entity::insert(Self::to_active_model(&visit))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        visit.id = result.last_insert_id;
        Ok(visit)
    }

    async fn update(&self, visit: SiteVisit) -> Result<SiteVisit> {
        let mut active = Self::to_active_model(&visit);
        active.id = Set(visit.id);
        let model = site_visits::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Self::model_to_visit(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SiteVisit>> {
        let model = site_visits::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        model.map(Self::model_to_visit).transpose()
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<SiteVisit>> {
        if scope.is_empty() {
            return Ok(Page::empty(page));
        }
        let mut query = Self::scoped(scope);
        if let Some(farm_id) = filter.and_then(|f| f.farm_id()) {
            query = query.filter(site_visits::Column::FarmId.eq(farm_id));
        }
        let paginator = query
            .order_by_desc(site_visits::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        let items = models
            .into_iter()
            .map(Self::model_to_visit)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(items, page, total))
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<SiteVisit>> {
        if scope.is_empty() {
            return Ok(Vec::new());
        }
        let models = Self::scoped(scope)
            .order_by_desc(site_visits::Column::VisitDate)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models.into_iter().map(Self::model_to_visit).collect()
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        if scope.is_empty() {
            return Ok(0);
        }
        Self::scoped(scope).count(&self.db).await.map_err(map_db_err)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = site_visits::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("site visit", id));
        }
        Ok(())
    }
}
