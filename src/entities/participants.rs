use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 参与者实体
/// 概念说明:
/// - event_name: 分区键，参与者只属于一个活动，不跨活动
/// - token: 私有令牌，参与者凭它查看自己的抽签结果
/// - assigned_to_id: 抽签后写入的送礼对象 (NULL = 尚未抽签)
/// - name: 存储时带 emoji 前缀
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_name: String,
    pub name: String,
    pub email: Option<String>,
    pub sms: Option<String>,
    #[sea_orm(unique)]
    pub token: Uuid,
    pub assigned_to_id: Option<Uuid>,
    pub gift_ready: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Model {
    /// 是否已参加过抽签
    pub fn has_assignment(&self) -> bool {
        self.assigned_to_id.is_some()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
