use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use domain::error::Result;
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::FarmScope;
use domain::statement::{Statement, StatementRepository};

use super::{map_db_err, not_found};
use crate::database::entities::{farms, statements};

pub struct SeaOrmStatementRepository {
    db: DatabaseConnection,
}

impl SeaOrmStatementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_statement(model: statements::Model) -> Statement {
        Statement {
            id: model.id,
            farm_id: model.farm_id,
            period_start: model.period_start,
            period_end: model.period_end,
            total_sales: model.total_sales,
            total_expenses: model.total_expenses,
            balance: model.balance,
            created: model.created,
            updated: model.updated,
        }
    }

    fn to_active_model(statement: &Statement) -> statements::ActiveModel {
        statements::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            farm_id: Set(statement.farm_id),
            period_start: Set(statement.period_start),
            period_end: Set(statement.period_end),
            total_sales: Set(statement.total_sales),
            total_expenses: Set(statement.total_expenses),
            balance: Set(statement.balance),
            created: Set(statement.created),
            updated: Set(statement.updated),
        }
    }

    fn scoped(scope: &FarmScope) -> Select<statements::Entity> {
        match scope {
            FarmScope::All | FarmScope::Empty => statements::Entity::find(),
            FarmScope::OwnedBy(owner) => statements::Entity::find()
                .join(JoinType::InnerJoin, statements::Relation::Farm.def())
                .filter(farms::Column::OwnerId.eq(*owner)),
        }
    }
}

#[async_trait]
impl StatementRepository for SeaOrmStatementRepository {
    async fn insert(&self, mut statement: Statement) -> Result<Statement> {
        let result = statements::Entity::insert(Self::to_active_model(&statement))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        statement.id = result.last_insert_id;
        Ok(statement)
    }

    async fn update(&self, statement: Statement) -> Result<Statement> {
        let mut active = Self::to_active_model(&statement);
        active.id = Set(statement.id);
        let model = statements::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(Self::model_to_statement(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Statement>> {
        let model = statements::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Self::model_to_statement))
    }

    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<Statement>> {
        if scope.is_empty() {
            return Ok(Page::empty(page));
        }
        let mut query = Self::scoped(scope);
        if let Some(farm_id) = filter.and_then(|f| f.farm_id()) {
            query = query.filter(statements::Column::FarmId.eq(farm_id));
        }
        let paginator = query
            .order_by_desc(statements::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        Ok(Page::new(
            models.into_iter().map(Self::model_to_statement).collect(),
            page,
            total,
        ))
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Statement>> {
        if scope.is_empty() {
            return Ok(Vec::new());
        }
        let models = Self::scoped(scope)
            .order_by_desc(statements::Column::Created)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Self::model_to_statement).collect())
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        if scope.is_empty() {
            return Ok(0);
        }
        Self::scoped(scope).count(&self.db).await.map_err(map_db_err)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = statements::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("statement", id));
        }
        Ok(())
    }
}
