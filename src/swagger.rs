use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "admin_pin",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Admin-Pin"))),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::event::create_event,
        handlers::event::verify_pin,
        handlers::event::clear_event,
        handlers::participant::register_participants,
        handlers::participant::list_participants,
        handlers::draw::run_draw,
        handlers::assignment::get_assignment,
        handlers::assignment::update_gift_status,
    ),
    components(
        schemas(
            CreateEventRequest,
            CreateEventResponse,
            VerifyPinRequest,
            VerifyPinResponse,
            ParticipantFormData,
            RegisterParticipantsRequest,
            ParticipantResponse,
            AssignmentResponse,
            RecipientResponse,
            GiftStatusRequest,
            DrawResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "event", description = "活动创建与管理"),
        (name = "participant", description = "参与者报名与管理列表"),
        (name = "draw", description = "抽签"),
        (name = "assignment", description = "参与者凭令牌查看结果")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
