use crate::entities::{admin_config_entity as admin_configs, participant_entity as participants};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{generate_event_name, hash_pin, slugify_event_name, validate_pin, verify_pin};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

#[derive(Clone)]
pub struct EventService {
    pool: DatabaseConnection,
}

impl EventService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建活动并保存管理 PIN
    /// 名称规范化为 slug，留空时自动生成；重名拒绝
    pub async fn create_event(&self, request: CreateEventRequest) -> AppResult<CreateEventResponse> {
        validate_pin(&request.pin)?;

        let event_name = match request.name.as_deref() {
            Some(raw) => {
                let slug = slugify_event_name(raw);
                if slug.is_empty() {
                    return Err(AppError::ValidationError(
                        "Event name must contain at least one letter or digit".to_string(),
                    ));
                }
                slug
            }
            None => generate_event_name(&mut rand::thread_rng()),
        };

        let existing = admin_configs::Entity::find()
            .filter(admin_configs::Column::EventName.eq(&event_name))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "Event '{event_name}' already exists"
            )));
        }

        let model = admin_configs::ActiveModel {
            event_name: Set(event_name.clone()),
            pin_hash: Set(hash_pin(&request.pin)?),
            ..Default::default()
        };
        // 预检与插入之间可能有并发创建，唯一约束冲突同样按重名处理
        if let Err(e) = model.insert(&self.pool).await {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                return Err(AppError::ValidationError(format!(
                    "Event '{event_name}' already exists"
                )));
            }
            return Err(e.into());
        }

        log::info!("Created event: {event_name}");
        Ok(CreateEventResponse { event_name })
    }

    /// 校验活动的管理 PIN；活动不存在视为校验失败
    pub async fn verify_event_pin(&self, event_name: &str, pin: &str) -> AppResult<bool> {
        let config = admin_configs::Entity::find()
            .filter(admin_configs::Column::EventName.eq(event_name))
            .one(&self.pool)
            .await?;

        match config {
            Some(config) => verify_pin(pin, &config.pin_hash),
            None => Ok(false),
        }
    }

    /// 管理接口的 PIN 门禁，校验失败返回 401
    pub async fn require_admin(&self, event_name: &str, pin: &str) -> AppResult<()> {
        if self.verify_event_pin(event_name, pin).await? {
            Ok(())
        } else {
            Err(AppError::AuthError("Invalid admin PIN".to_string()))
        }
    }

    /// 清空活动的全部数据（参与者 + 管理配置）
    pub async fn clear_event(&self, event_name: &str) -> AppResult<u64> {
        let removed = participants::Entity::delete_many()
            .filter(participants::Column::EventName.eq(event_name))
            .exec(&self.pool)
            .await?;
        admin_configs::Entity::delete_many()
            .filter(admin_configs::Column::EventName.eq(event_name))
            .exec(&self.pool)
            .await?;

        log::info!(
            "Cleared event {event_name}: {} participant(s) removed",
            removed.rows_affected
        );
        Ok(removed.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_event_rejects_duplicate_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![admin_configs::Model {
                id: 1,
                event_name: "office-party-2025".to_string(),
                pin_hash: "$2b$12$placeholderplaceholderplace".to_string(),
                created_at: None,
            }]])
            .into_connection();

        let service = EventService::new(db);
        let err = service
            .create_event(CreateEventRequest {
                name: Some("Office Party 2025".to_string()),
                pin: "4711".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(msg)
            if msg.contains("office-party-2025")));
    }

    #[tokio::test]
    async fn test_verify_pin_for_unknown_event_is_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<admin_configs::Model>::new()])
            .into_connection();

        let service = EventService::new(db);
        let ok = service
            .verify_event_pin("no-such-event", "4711")
            .await
            .unwrap();
        assert!(!ok);
    }
}
