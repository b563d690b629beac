use crate::{
    error::PopifyError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use popify_api_structs::track_widget_event::*;
use popify_domain::{DailyAnalytics, EventKind};
use popify_infra::PopifyContext;

fn handle_error(e: UseCaseErrors) -> PopifyError {
    match e {
        UseCaseErrors::MissingParameters => {
            PopifyError::BadClientData("Missing parameters".into())
        }
        UseCaseErrors::InvalidKey => PopifyError::Unauthorized("Invalid API key".into()),
        UseCaseErrors::StorageError => PopifyError::InternalError,
    }
}

pub async fn track_widget_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PopifyContext>,
) -> Result<HttpResponse, PopifyError> {
    let body = body.0;
    let usecase = TrackWidgetEventUseCase {
        api_key: body.key,
        kind: body.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(handle_error)
}

/// Counts one widget `EventKind` on today's analytics row of the `Site`
#[derive(Debug)]
pub struct TrackWidgetEventUseCase {
    pub api_key: Option<String>,
    pub kind: Option<EventKind>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingParameters,
    InvalidKey,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for TrackWidgetEventUseCase {
    type Response = DailyAnalytics;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PopifyContext) -> Result<Self::Response, Self::Errors> {
        let (api_key, kind) = match (self.api_key.as_deref(), self.kind) {
            (Some(key), Some(kind)) if !key.is_empty() => (key, kind),
            _ => return Err(UseCaseErrors::MissingParameters),
        };

        let site = ctx
            .repos
            .sites
            .find_by_api_key(api_key)
            .await
            .ok_or(UseCaseErrors::InvalidKey)?;

        let today = ctx.sys.now().date_naive();
        ctx.repos
            .analytics
            .increment(&site.id, today, kind)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
