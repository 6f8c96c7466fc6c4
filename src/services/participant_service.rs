use crate::entities::{admin_config_entity as admin_configs, participant_entity as participants};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{EmojiPool, add_emoji_to_name, generate_token, strip_emoji_prefix};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct ParticipantService {
    pool: DatabaseConnection,
    base_url: String,
}

impl ParticipantService {
    pub fn new(pool: DatabaseConnection, base_url: String) -> Self {
        Self { pool, base_url }
    }

    /// 批量报名参与者
    /// 每人分配 UUID 令牌与 emoji 前缀名；整批在一个事务内写入
    pub async fn register_participants(
        &self,
        event_name: &str,
        request: RegisterParticipantsRequest,
    ) -> AppResult<Vec<ParticipantResponse>> {
        if request.participants.is_empty() {
            return Err(AppError::ValidationError(
                "At least one participant is required".to_string(),
            ));
        }
        for p in &request.participants {
            if p.name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Participant name must not be empty".to_string(),
                ));
            }
        }
        self.ensure_event_exists(event_name).await?;

        // emoji 池按批次持有，批内不重复
        let mut rng = rand::thread_rng();
        let mut emoji_pool = EmojiPool::new(&mut rng);

        let txn = self.pool.begin().await?;
        let mut created = Vec::with_capacity(request.participants.len());
        for form in &request.participants {
            let emoji = emoji_pool.next_emoji(&mut rng);
            let model = participants::ActiveModel {
                id: Set(Uuid::new_v4()),
                event_name: Set(event_name.to_string()),
                name: Set(add_emoji_to_name(form.name.trim(), emoji)),
                email: Set(normalize_contact(form.email.as_deref())),
                sms: Set(normalize_contact(form.sms.as_deref())),
                token: Set(generate_token()),
                assigned_to_id: Set(None),
                gift_ready: Set(false),
                ..Default::default()
            };
            created.push(model.insert(&txn).await?);
        }
        txn.commit().await?;

        log::info!(
            "Registered {} participant(s) for event {event_name}",
            created.len()
        );
        Ok(created
            .into_iter()
            .map(|m| ParticipantResponse::from_model(m, &self.base_url))
            .collect())
    }

    /// 参与者凭私有令牌查看自己的信息与抽签结果
    pub async fn get_assignment_by_token(&self, token: Uuid) -> AppResult<AssignmentResponse> {
        let me = self.find_by_token(token).await?;

        let assigned_to = match me.assigned_to_id {
            Some(assigned_to_id) => {
                let recipient = participants::Entity::find_by_id(assigned_to_id)
                    .one(&self.pool)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(format!(
                            "Assigned participant {assigned_to_id} is missing"
                        ))
                    })?;
                Some(RecipientResponse::from(recipient))
            }
            None => None,
        };

        Ok(AssignmentResponse {
            event_name: me.event_name.clone(),
            display_name: strip_emoji_prefix(&me.name),
            name: me.name,
            gift_ready: me.gift_ready,
            assigned_to,
        })
    }

    /// 参与者凭令牌更新礼物准备状态（重复设置相同值不改变存储结果）
    pub async fn set_gift_ready(&self, token: Uuid, gift_ready: bool) -> AppResult<AssignmentResponse> {
        let me = self.find_by_token(token).await?;

        let mut model = me.into_active_model();
        model.gift_ready = Set(gift_ready);
        model.update(&self.pool).await?;

        self.get_assignment_by_token(token).await
    }

    /// 管理端分页列出活动的参与者（按报名时间升序）
    pub async fn list_participants(
        &self,
        event_name: &str,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ParticipantResponse>> {
        self.ensure_event_exists(event_name).await?;

        let base_query = participants::Entity::find()
            .filter(participants::Column::EventName.eq(event_name));

        let total = base_query.clone().count(&self.pool).await? as i64;

        let items = base_query
            .order_by_asc(participants::Column::CreatedAt)
            .offset(params.get_offset() as u64)
            .limit(params.get_limit() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items
                .into_iter()
                .map(|m| ParticipantResponse::from_model(m, &self.base_url))
                .collect(),
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(20),
            total,
        ))
    }

    async fn find_by_token(&self, token: Uuid) -> AppResult<participants::Model> {
        participants::Entity::find()
            .filter(participants::Column::Token.eq(token))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Unknown token".to_string()))
    }

    async fn ensure_event_exists(&self, event_name: &str) -> AppResult<()> {
        let exists = admin_configs::Entity::find()
            .filter(admin_configs::Column::EventName.eq(event_name))
            .one(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Event '{event_name}' not found")));
        }
        Ok(())
    }
}

/// 空字符串按未提供处理
fn normalize_contact(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_contact() {
        assert_eq!(normalize_contact(None), None);
        assert_eq!(normalize_contact(Some("")), None);
        assert_eq!(normalize_contact(Some("   ")), None);
        assert_eq!(
            normalize_contact(Some(" kari@example.com ")),
            Some("kari@example.com".to_string())
        );
    }
}
