use crate::entities::participant_entity as participants;
use crate::error::AppResult;
use crate::models::DrawResponse;
use crate::utils::shuffle_assignments;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct DrawService {
    pool: DatabaseConnection,
}

impl DrawService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 抽签 (Draw)
    ///
    /// 逻辑:
    /// 1. 按报名顺序读取活动的全部参与者
    /// 2. 生成错排映射（不足2人直接失败，不写任何数据）
    /// 3. 在同一事务内逐条写入 assigned_to_id，全部成功才提交
    ///
    /// 重复抽签会整体覆盖该活动之前的分配结果。
    pub async fn run_draw(&self, event_name: &str) -> AppResult<DrawResponse> {
        let txn = self.pool.begin().await?;

        let list = participants::Entity::find()
            .filter(participants::Column::EventName.eq(event_name))
            .order_by_asc(participants::Column::CreatedAt)
            .all(&txn)
            .await?;

        let ids: Vec<Uuid> = list.iter().map(|p| p.id).collect();
        let mapping = shuffle_assignments(&ids, &mut rand::thread_rng())?;

        // 按报名顺序写入，重放同一映射产生完全相同的更新语句
        for participant_id in &ids {
            let assigned_to_id = mapping[participant_id];
            participants::Entity::update_many()
                .col_expr(
                    participants::Column::AssignedToId,
                    Expr::value(Some(assigned_to_id)),
                )
                .filter(participants::Column::Id.eq(*participant_id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        log::info!(
            "Draw complete for event {event_name}: {} assignment(s) written",
            mapping.len()
        );
        Ok(DrawResponse {
            assigned_count: mapping.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn participant(id: Uuid, assigned_to: Option<Uuid>) -> participants::Model {
        participants::Model {
            id,
            event_name: "office-party-2025".to_string(),
            name: "🎁 Kari".to_string(),
            email: None,
            sms: None,
            token: Uuid::from_u128(0xfeed),
            assigned_to_id: assigned_to,
            gift_ready: false,
            created_at: Some(Utc.timestamp_opt(1_764_547_200, 0).unwrap()),
        }
    }

    /// 重放已持久化的映射必须是纯覆盖：两次抽签发出的语句完全一致,
    /// 存储状态不变（n=2 的错排唯一，映射确定）
    #[tokio::test]
    async fn test_replaying_same_mapping_is_pure_overwrite() {
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                // 第一次抽签前无分配
                vec![participant(a, None), participant(b, None)],
                // 第二次在已持久化的结果上重抽
                vec![participant(a, Some(b)), participant(b, Some(a))],
            ])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let service = DrawService::new(db.clone());
        let first = service.run_draw("office-party-2025").await.unwrap();
        let second = service.run_draw("office-party-2025").await.unwrap();
        assert_eq!(first.assigned_count, 2);
        assert_eq!(second.assigned_count, 2);

        // 两个事务（SELECT + 两条 UPDATE）逐语句相同
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], log[1]);
    }

    #[tokio::test]
    async fn test_draw_fails_before_any_write_when_too_few() {
        let a = Uuid::from_u128(1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![participant(a, None)]])
            .into_connection();

        let service = DrawService::new(db.clone());
        let err = service.run_draw("office-party-2025").await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientParticipants(1)));

        // 事务内只有 SELECT，没有任何 UPDATE 落盘
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
    }
}

