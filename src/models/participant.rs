use crate::entities::participant_entity as participants;
use crate::utils::{assignment_url, strip_emoji_prefix};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 单个参与者的报名数据
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantFormData {
    #[schema(example = "Kari Nordmann")]
    pub name: String,
    #[schema(example = "kari@example.com")]
    pub email: Option<String>,
    #[schema(example = "+4740012345")]
    pub sms: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterParticipantsRequest {
    pub participants: Vec<ParticipantFormData>,
}

/// 管理端视角的参与者信息（含私有令牌与分发链接）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub event_name: String,
    /// 存储名（带 emoji 前缀）
    pub name: String,
    /// 去掉 emoji 前缀的展示名
    pub display_name: String,
    pub email: Option<String>,
    pub sms: Option<String>,
    pub token: Uuid,
    pub assignment_url: String,
    pub gift_ready: bool,
    pub has_assignment: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl ParticipantResponse {
    pub fn from_model(model: participants::Model, base_url: &str) -> Self {
        let url = assignment_url(base_url, &model.token);
        Self {
            display_name: strip_emoji_prefix(&model.name),
            has_assignment: model.has_assignment(),
            id: model.id,
            event_name: model.event_name,
            name: model.name,
            email: model.email,
            sms: model.sms,
            token: model.token,
            assignment_url: url,
            gift_ready: model.gift_ready,
            created_at: model.created_at,
        }
    }
}

/// 参与者本人视角（凭令牌查询时返回）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub event_name: String,
    pub name: String,
    pub display_name: String,
    pub gift_ready: bool,
    /// 送礼对象；抽签尚未进行时为 null
    pub assigned_to: Option<RecipientResponse>,
}

/// 送礼对象只暴露名字，联系方式不外泄
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipientResponse {
    pub name: String,
    pub display_name: String,
}

impl From<participants::Model> for RecipientResponse {
    fn from(model: participants::Model) -> Self {
        Self {
            display_name: strip_emoji_prefix(&model.name),
            name: model.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenQuery {
    pub token: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GiftStatusRequest {
    pub gift_ready: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ParticipantListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// 抽签结果统计
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DrawResponse {
    /// 本次写入的分配数（等于参与者人数）
    pub assigned_count: usize,
}
