use crate::{
    error::PopifyError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use popify_api_structs::get_widget_feed::*;
use popify_domain::{Notification, Site};
use popify_infra::PopifyContext;

fn handle_error(e: UseCaseErrors) -> PopifyError {
    match e {
        UseCaseErrors::MissingKey => PopifyError::BadClientData("Missing API key".into()),
        UseCaseErrors::InvalidKey => PopifyError::Unauthorized("Invalid API key".into()),
        UseCaseErrors::StorageError => PopifyError::InternalError,
    }
}

pub async fn get_widget_feed_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<PopifyContext>,
) -> Result<HttpResponse, PopifyError> {
    let usecase = GetWidgetFeedUseCase {
        api_key: query.0.key,
    };

    execute(usecase, &ctx)
        .await
        .map(|(site, notifications)| {
            HttpResponse::Ok().json(APIResponse::new(&site, notifications))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetWidgetFeedUseCase {
    pub api_key: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingKey,
    InvalidKey,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetWidgetFeedUseCase {
    type Response = (Site, Vec<Notification>);

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PopifyContext) -> Result<Self::Response, Self::Errors> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(UseCaseErrors::MissingKey),
        };
        let site = ctx
            .repos
            .sites
            .find_by_api_key(api_key)
            .await
            .ok_or(UseCaseErrors::InvalidKey)?;

        let notifications = ctx
            .repos
            .notifications
            .find_newest_by_site(&site.id, ctx.config.feed_limit)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok((site, notifications))
    }
}
