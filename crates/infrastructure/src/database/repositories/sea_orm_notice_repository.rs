use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use domain::error::Result;
use domain::notice::{Notice, NoticeRepository};
use domain::query::{Page, PageRequest};

use super::{map_db_err, not_found};
use crate::database::entities::notices;

pub struct SeaOrmNoticeRepository {
    db: DatabaseConnection,
}

impl SeaOrmNoticeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_notice(model: notices::Model) -> Notice {
        Notice {
            id: model.id,
            title: model.title,
            message: model.message,
            issued_by: model.issued_by,
            is_active: model.is_active,
            created: model.created,
            updated: model.updated,
        }
    }

    fn to_active_model(notice: &Notice) -> notices::ActiveModel {
        notices::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            title: Set(notice.title.clone()),
            message: Set(notice.message.clone()),
            issued_by: Set(notice.issued_by),
            is_active: Set(notice.is_active),
            created: Set(notice.created),
            updated: Set(notice.updated),
        }
    }
}

#[async_trait]
impl NoticeRepository for SeaOrmNoticeRepository {
    async fn insert(&self, mut notice: Notice) -> Result<Notice> {
        let result = notices::Entity::insert(Self::to_active_model(&notice))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        notice.id = result.last_insert_id;
        Ok(notice)
    }

    async fn update(&self, notice: Notice) -> Result<Notice> {
        let mut active = Self::to_active_model(&notice);
        active.id = Set(notice.id);
        let model = notices::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(Self::model_to_notice(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Notice>> {
        let model = notices::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Self::model_to_notice))
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Notice>> {
        let paginator = notices::Entity::find()
            .order_by_desc(notices::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        Ok(Page::new(
            models.into_iter().map(Self::model_to_notice).collect(),
            page,
            total,
        ))
    }

    async fn active_recent(&self, limit: u64) -> Result<Vec<Notice>> {
        let models = notices::Entity::find()
            .filter(notices::Column::IsActive.eq(true))
            .order_by_desc(notices::Column::Created)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Self::model_to_notice).collect())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = notices::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("notice", id));
        }
        Ok(())
    }
}
