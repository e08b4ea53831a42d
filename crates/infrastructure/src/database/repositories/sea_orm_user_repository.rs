use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use domain::error::Result;
use domain::query::{Page, PageRequest};
use domain::user::{Role, User, UserRepository};
use domain::DomainError;

use super::{map_db_err, not_found};
use crate::database::entities::users;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> Result<User> {
        let role = Role::parse(&model.role)
            .ok_or_else(|| DomainError::Repository(format!("unknown role: {}", model.role)))?;
        Ok(User {
            id: model.id,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            role,
            created: model.created,
            updated: model.updated,
        })
    }

    fn to_active_model(user: &User) -> users::ActiveModel {
        users::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            username: Set(user.username.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            role: Set(user.role.as_str().to_string()),
            created: Set(user.created),
            updated: Set(user.updated),
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, mut user: User) -> Result<User> {
        let result = users::Entity::insert(Self::to_active_model(&user))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        user.id = result.last_insert_id;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut active = Self::to_active_model(&user);
        active.id = Set(user.id);
        let model = users::Entity::update(active)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Self::model_to_user(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        model.map(Self::model_to_user).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Page<User>> {
        let paginator = users::Entity::find()
            .order_by_desc(users::Column::Created)
            .paginate(&self.db, page.page_size);
        let total = paginator.num_items().await.map_err(map_db_err)?;
        let models = paginator.fetch_page(page.index()).await.map_err(map_db_err)?;
        let items = models
            .into_iter()
            .map(Self::model_to_user)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(items, page, total))
    }

    async fn count(&self) -> Result<u64> {
        users::Entity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn designated_agents(&self) -> Result<Vec<User>> {
        let models = users::Entity::find()
            .filter(users::Column::Role.eq(Role::DesignatedAgent.as_str()))
            .order_by_asc(users::Column::FirstName)
            .order_by_asc(users::Column::LastName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        models.into_iter().map(Self::model_to_user).collect()
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(not_found("user", id));
        }
        Ok(())
    }
}
