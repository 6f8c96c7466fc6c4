use crate::models::*;
use crate::services::ParticipantService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/assignment",
    tag = "assignment",
    params(
        ("token" = Uuid, Query, description = "参与者私有令牌")
    ),
    responses(
        (status = 200, description = "获取抽签结果成功", body = AssignmentResponse),
        (status = 404, description = "令牌无效")
    )
)]
/// 参与者凭私有令牌查看自己的抽签结果
/// 抽签尚未进行时 assigned_to 为 null；送礼对象只返回名字
pub async fn get_assignment(
    service: web::Data<ParticipantService>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse> {
    match service.get_assignment_by_token(query.token).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/assignment/gift-status",
    tag = "assignment",
    params(
        ("token" = Uuid, Query, description = "参与者私有令牌")
    ),
    request_body = GiftStatusRequest,
    responses(
        (status = 200, description = "更新礼物状态成功", body = AssignmentResponse),
        (status = 404, description = "令牌无效")
    )
)]
/// 参与者标记礼物是否已准备好
pub async fn update_gift_status(
    service: web::Data<ParticipantService>,
    query: web::Query<TokenQuery>,
    body: web::Json<GiftStatusRequest>,
) -> Result<HttpResponse> {
    match service.set_gift_ready(query.token, body.gift_ready).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn assignment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignment")
            .route("", web::get().to(get_assignment))
            .route("/gift-status", web::put().to(update_gift_status)),
    );
}
