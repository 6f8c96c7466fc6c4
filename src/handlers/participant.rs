use crate::models::*;
use crate::services::{EventService, ParticipantService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

/// 从请求头获取管理 PIN (X-Admin-Pin)
fn admin_pin_from_request(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("X-Admin-Pin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[utoipa::path(
    post,
    path = "/events/{event_name}/participants",
    tag = "participant",
    params(
        ("event_name" = String, Path, description = "活动名 (slug)")
    ),
    request_body = RegisterParticipantsRequest,
    security(
        ("admin_pin" = [])
    ),
    responses(
        (status = 200, description = "报名成功，返回含私有链接的参与者列表", body = [ParticipantResponse]),
        (status = 400, description = "报名数据不合法"),
        (status = 401, description = "PIN 无效"),
        (status = 404, description = "活动不存在")
    )
)]
/// 批量报名参与者，返回每人的私有令牌与分发链接
pub async fn register_participants(
    event_service: web::Data<EventService>,
    service: web::Data<ParticipantService>,
    path: web::Path<String>,
    body: web::Json<RegisterParticipantsRequest>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let event_name = path.into_inner();
    let pin = admin_pin_from_request(&req).unwrap_or_default();
    if let Err(e) = event_service.require_admin(&event_name, &pin).await {
        return Ok(e.error_response());
    }

    match service
        .register_participants(&event_name, body.into_inner())
        .await
    {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/events/{event_name}/participants",
    tag = "participant",
    params(
        ("event_name" = String, Path, description = "活动名 (slug)"),
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("admin_pin" = [])
    ),
    responses(
        (status = 200, description = "获取参与者列表成功", body = PaginatedResponse<ParticipantResponse>),
        (status = 401, description = "PIN 无效"),
        (status = 404, description = "活动不存在")
    )
)]
/// 管理端分页获取参与者（按报名时间升序）
pub async fn list_participants(
    event_service: web::Data<EventService>,
    service: web::Data<ParticipantService>,
    path: web::Path<String>,
    query: web::Query<ParticipantListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let event_name = path.into_inner();
    let pin = admin_pin_from_request(&req).unwrap_or_default();
    if let Err(e) = event_service.require_admin(&event_name, &pin).await {
        return Ok(e.error_response());
    }

    let params = PaginationParams::new(query.page, query.per_page);
    match service.list_participants(&event_name, &params).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn participant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/events/{event_name}/participants")
            .route(web::post().to(register_participants))
            .route(web::get().to(list_participants)),
    );
}
