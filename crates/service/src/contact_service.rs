use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::{info, warn};

use models::contact::{self, NewContact};
use crate::errors::ServiceError;

/// Result of the diagnostic table probe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCheck {
    pub table_exists: bool,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validate and persist one inquiry. The server stamps `created_date`.
pub async fn submit_contact(db: &DatabaseConnection, input: &NewContact) -> Result<contact::Model, ServiceError> {
    let created = contact::create(db, input).await?;
    info!(id = created.id, "contact_submitted");
    Ok(created)
}

/// All submissions, newest first.
pub async fn list_contacts(db: &DatabaseConnection) -> Result<Vec<contact::Model>, ServiceError> {
    Ok(contact::list_newest_first(db).await?)
}

/// Never fails: a broken or missing table reports `table_exists = false`.
pub async fn check_table(db: &DatabaseConnection) -> TableCheck {
    match contact::Entity::find().count(db).await {
        Ok(count) => TableCheck { table_exists: true, count, error: None },
        Err(e) => {
            warn!(error = %e, "contact table check failed");
            TableCheck { table_exists: false, count: 0, error: Some(e.to_string()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_env;
    use sea_orm::ConnectionTrait;

    fn inquiry(details: &str) -> NewContact {
        NewContact {
            full_name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: None,
            event_details: details.into(),
        }
    }

    #[tokio::test]
    async fn duplicates_are_all_accepted() -> anyhow::Result<()> {
        let env = get_env().await?;
        submit_contact(&env.db, &inquiry("Same")).await?;
        submit_contact(&env.db, &inquiry("Same")).await?;
        assert_eq!(list_contacts(&env.db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn empty_details_rejected_without_row() -> anyhow::Result<()> {
        let env = get_env().await?;
        let err = submit_contact(&env.db, &inquiry("")).await.unwrap_err();
        assert!(err.is_validation());
        assert!(list_contacts(&env.db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn table_check_reports_count_and_absence() -> anyhow::Result<()> {
        let env = get_env().await?;
        submit_contact(&env.db, &inquiry("One")).await?;
        let check = check_table(&env.db).await;
        assert!(check.table_exists);
        assert_eq!(check.count, 1);

        env.db.execute_unprepared("DROP TABLE contact").await?;
        let check = check_table(&env.db).await;
        assert!(!check.table_exists);
        assert!(check.error.is_some());
        Ok(())
    }
}
