use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// 活动名称，留空时自动生成
    #[schema(example = "Office Party 2025")]
    pub name: Option<String>,
    /// 管理 PIN（4-8位数字）
    #[schema(example = "4711")]
    pub pin: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventResponse {
    /// 规范化后的活动名（URL slug，同时是分区键）
    #[schema(example = "office-party-2025")]
    pub event_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPinRequest {
    #[schema(example = "4711")]
    pub pin: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPinResponse {
    pub valid: bool,
}
