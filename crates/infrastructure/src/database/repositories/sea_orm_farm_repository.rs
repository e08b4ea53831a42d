use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use domain::error::Result;
use domain::farm::{Farm, FarmRepository, Sector};
use domain::query::{Page, PageRequest};
use domain::scope::FarmScope;
use domain::DomainError;

use super::{map_db_err, not_found};
use crate::database::entities::farms;

pub struct SeaOrmFarmRepository {
    db: DatabaseConnection,
}

impl SeaOrmFarmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_farm(model: farms::Model) -> Result<Farm> {
        let sector = Sector::parse(&model.sector)
            .ok_or_else(|| DomainError::Repository(format!("unknown sector: {}", model.sector)))?;
        Ok(Farm {
            id: model.id,
            name: model.name,
            owner_id: model.owner_id,
            address: model.address,
            size_in_hectares: model.size_in_hectares,
            telephone: model.telephone,
            account_number: model.account_number,
            email: model.email,
            sector,
            created: model.created,
            updated: model.updated,
        })
    }

    fn to_active_model(farm: &Farm) -> farms::ActiveModel {
        farms::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(farm.name.clone()),
            owner_id: Set(farm.owner_id),
            address: Set(farm.address.clone()),
            size_in_hectares: Set(farm.size_in_hectares),
            telephone: Set(farm.telephone.clone()),
            account_number: Set(farm.account_number.clone()),
            email: Set(farm.email.clone()),
            sector: Set(farm.sector.as_str().to_string()),
            created: Set(farm.created),
            updated: Set(farm.updated),
        }
    }

    /// Base select with the scope predicate applied. Callers handle the
    /// empty scope before reaching here.
    fn scoped(scope: &FarmScope) -> Select<farms::Entity> {
        match scope {
            FarmScope::All | FarmScope::Empty => farms::Entity::find(),
            FarmScope::OwnedBy(owner) => {
                farms::Entity::find().filter(farms::Column::OwnerId.eq(*owner))
            }
        }
    }
}

#[async_trait]
impl FarmRepository for SeaOrmFarmRepository {
    async fn insert(&self, mut farm: Farm) -> Result<Farm> {
        let result = farms::Entity::insert(Self::to_active_model(&farm))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        farm.id = result.last_insert_id;
        Ok(farm)
    }

    async fn update(&self, farm: Farm) -> Result<Farm> {
        let mut active = Self::to_active_model(&farm);
        active.id = Set(farm.id);
        let model = farms::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Self::model_to_farm(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Farm>> {
        let model = farms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        model.map(Self::model_to_farm).transpose()
    }

    async fn list(&self, scope: &FarmScope, page: PageRequest) -> Result<Page<Farm>> {
        if scope.is_empty() {
            return Ok(Page::empty(page));
        }
        let paginator = Self::scoped(scope)
            .order_by_desc(farms::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        let items = models
            .into_iter()
            .map(Self::model_to_farm)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(items, page, total))
    }

    async fn list_all(&self, scope: &FarmScope) -> Result<Vec<Farm>> {
        if scope.is_empty() {
            return Ok(Vec::new());
        }
        let models = Self::scoped(scope)
            .order_by_desc(farms::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models.into_iter().map(Self::model_to_farm).collect()
    }

    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Farm>> {
        if scope.is_empty() {
            return Ok(Vec::new());
        }
        let models = Self::scoped(scope)
            .order_by_desc(farms::Column::Created)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models.into_iter().map(Self::model_to_farm).collect()
    }

    async fn count(&self, scope: &FarmScope) -> Result<u64> {
        if scope.is_empty() {
            return Ok(0);
        }
        Self::scoped(scope).count(&self.db).await.map_err(map_db_err)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = farms::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("farm", id));
        }
        Ok(())
    }
}
