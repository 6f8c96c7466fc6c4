use crate::models::DrawResponse;
use crate::services::{DrawService, EventService};
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
    path = "/events/{event_name}/draw",
    tag = "draw",
    params(
        ("event_name" = String, Path, description = "活动名 (slug)")
    ),
    security(
        ("admin_pin" = [])
    ),
    responses(
        (status = 200, description = "抽签完成", body = DrawResponse),
        (status = 400, description = "参与者不足2人，未写入任何分配"),
        (status = 401, description = "PIN 无效")
    )
)]
/// 进行一次抽签:
/// 1. 读取活动全部参与者
/// 2. 生成无自配对的置换映射
/// 3. 在一个事务内写入全部 assigned_to_id（重抽整体覆盖旧结果）
pub async fn run_draw(
    event_service: web::Data<EventService>,
    service: web::Data<DrawService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let event_name = path.into_inner();
    let pin = admin_pin_from_request(&req).unwrap_or_default();
    if let Err(e) = event_service.require_admin(&event_name, &pin).await {
        return Ok(e.error_response());
    }

    match service.run_draw(&event_name).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": result }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/events/{event_name}/draw").route(web::post().to(run_draw)));
}
