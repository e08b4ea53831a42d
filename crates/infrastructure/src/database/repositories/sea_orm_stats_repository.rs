use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use domain::error::Result;
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::FarmScope;
use domain::stats::{EmployeeStatsRepository, EmploymentType, FarmEmployeeStats};
use domain::DomainError;

use super::{map_db_err, not_found};
use crate::database::entities::{farm_employee_stats as stats, farms};

pub struct SeaOrmEmployeeStatsRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_stats(model: stats::Model) -> Result<FarmEmployeeStats> {
        let employment_type = EmploymentType::parse(&model.employment_type).ok_or_else(|| {
            DomainError::Repository(format!(
                "unknown employment type: {}",
                model.employment_type
            ))
        })?;
        Ok(FarmEmployeeStats {
            id: model.id,
            farm_id: model.farm_id,
            reporting_month: model.reporting_month,
            employment_type,
            citizen_male: model.citizen_male,
            citizen_female: model.citizen_female,
            expatriate_male: model.expatriate_male,
            expatriate_female: model.expatriate_female,
            basic_pay_usd: model.basic_pay_usd,
            basic_pay_zwl: model.basic_pay_zwl,
            employees_contribution_usd: model.employees_contribution_usd,
            employees_contribution_zwl: model.employees_contribution_zwl,
            employers_contribution_usd: model.employers_contribution_usd,
            employers_contribution_zwl: model.employers_contribution_zwl,
            arrears_usd: model.arrears_usd,
            arrears_zwl: model.arrears_zwl,
            total_contribution_usd: model.total_contribution_usd,
            total_contribution_zwl: model.total_contribution_zwl,
            created_by: model.created_by,
            created: model.created,
            updated: model.updated,
        })
    }

    fn to_active_model(s: &FarmEmployeeStats) -> stats::ActiveModel {
        stats::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            farm_id: Set(s.farm_id),
            reporting_month: Set(s.reporting_month),
            employment_type: Set(s.employment_type.as_str().to_string()),
            citizen_male: Set(s.citizen_male),
            citizen_female: Set(s.citizen_female),
            expatriate_male: Set(s.expatriate_male),
            expatriate_female: Set(s.expatriate_female),
            basic_pay_usd: Set(s.basic_pay_usd),
            basic_pay_zwl: Set(s.basic_pay_zwl),
            employees_contribution_usd: Set(s.employees_contribution_usd),
            employees_contribution_zwl: Set(s.employees_contribution_zwl),
            employers_contribution_usd: Set(s.employers_contribution_usd),
            employers_contribution_zwl: Set(s.employers_contribution_zwl),
            arrears_usd: Set(s.arrears_usd),
            arrears_zwl: Set(s.arrears_zwl),
            total_contribution_usd: Set(s.total_contribution_usd),
            total_contribution_zwl: Set(s.total_contribution_zwl),
            created_by: Set(s.created_by),
            created: Set(s.created),
            updated: Set(s.updated),
        }
    }

    fn scoped(scope: &FarmScope) -> Select<stats::Entity> {
        match scope {
            FarmScope::All | FarmScope::Empty => stats::Entity::find(),
            FarmScope::OwnedBy(owner) => stats::Entity::find()
                .join(JoinType::InnerJoin, stats::Relation::Farm.def())
                .filter(farms::Column::OwnerId.eq(*owner)),
        }
    }
}

#[async_trait]
impl EmployeeStatsRepository for SeaOrmEmployeeStatsRepository {
    async fn insert(&self, mut s: FarmEmployeeStats) -> Result<FarmEmployeeStats> {
        // A duplicate (farm, reporting_month, employment_type) trips the
        // unique index and surfaces as DomainError::Conflict
        let result = stats::Entity::insert(Self::to_active_model(&s))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        s.id = result.last_insert_id;
        Ok(s)
    }

    async fn update(&self, s: FarmEmployeeStats) -> Result<FarmEmployeeStats> {
        let mut active = Self::to_active_model(&s);
        active.id = Set(s.id);
        let model = stats::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Self::model_to_stats(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FarmEmployeeStats>> {
        let model = stats::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        model.map(Self::model_to_stats).transpose()
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<FarmEmployeeStats>> {
        if scope.is_empty() {
            return Ok(Page::empty(page));
        }
        let mut query = Self::scoped(scope);
        if let Some(farm_id) = filter.and_then(|f| f.farm_id()) {
            query = query.filter(stats::Column::FarmId.eq(farm_id));
        }
        let paginator = query
            .order_by_desc(stats::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        let items = models
            .into_iter()
            .map(Self::model_to_stats)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(items, page, total))
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        if scope.is_empty() {
            return Ok(0);
        }
        Self::scoped(scope).count(&self.db).await.map_err(map_db_err)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = stats::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("employee stats", id));
        }
        Ok(())
    }
}
