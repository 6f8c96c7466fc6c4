use crate::models::*;
use crate::services::EventService;
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
    path = "/events",
    tag = "event",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "创建活动成功", body = CreateEventResponse),
        (status = 400, description = "名称或PIN不合法 / 活动已存在")
    )
)]
/// 创建活动并设置管理 PIN
/// 名称会被规范化为 URL slug；未提供名称时自动生成
pub async fn create_event(
    service: web::Data<EventService>,
    body: web::Json<CreateEventRequest>,
) -> Result<HttpResponse> {
    match service.create_event(body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/events/{event_name}/verify-pin",
    tag = "event",
    params(
        ("event_name" = String, Path, description = "活动名 (slug)")
    ),
    request_body = VerifyPinRequest,
    responses(
        (status = 200, description = "校验完成", body = VerifyPinResponse)
    )
)]
/// 校验管理 PIN（活动不存在时返回 valid=false，不泄露活动是否存在）
pub async fn verify_pin(
    service: web::Data<EventService>,
    path: web::Path<String>,
    body: web::Json<VerifyPinRequest>,
) -> Result<HttpResponse> {
    let event_name = path.into_inner();
    match service.verify_event_pin(&event_name, &body.pin).await {
        Ok(valid) => Ok(HttpResponse::Ok()
            .json(json!({ "success": true, "data": VerifyPinResponse { valid } }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/events/{event_name}",
    tag = "event",
    params(
        ("event_name" = String, Path, description = "活动名 (slug)")
    ),
    security(
        ("admin_pin" = [])
    ),
    responses(
        (status = 200, description = "活动数据已清空"),
        (status = 401, description = "PIN 无效")
    )
)]
/// 清空活动的全部数据（参与者与管理配置），不可恢复
pub async fn clear_event(
    service: web::Data<EventService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let event_name = path.into_inner();
    let pin = admin_pin_from_request(&req).unwrap_or_default();
    if let Err(e) = service.require_admin(&event_name, &pin).await {
        return Ok(e.error_response());
    }

    match service.clear_event(&event_name).await {
        Ok(removed) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "removed_participants": removed },
            "message": "Event data cleared"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
/// 活动相关路径彼此嵌套，使用精确 resource 避免前缀遮蔽
pub fn event_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/events").route(web::post().to(create_event)))
        .service(
            web::resource("/events/{event_name}/verify-pin").route(web::post().to(verify_pin)),
        )
        .service(web::resource("/events/{event_name}").route(web::delete().to(clear_event)));
}
