use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::auth::domain::StaffRecord;
use crate::auth::errors::AuthError;
use crate::auth::repository::StaffRepository;

pub struct SeaOrmStaffRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl StaffRepository for SeaOrmStaffRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, AuthError> {
        // seeding stores emails lower-cased
        let res = models::staff_account::Entity::find()
            .filter(models::staff_account::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|a| StaffRecord { id: a.id, email: a.email, password: a.password, role: a.role }))
    }
}
