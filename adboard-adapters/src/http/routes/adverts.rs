use adboard_application::{CreateAdvertUseCase, DeleteAdvertUseCase, UpdateAdvertUseCase};
use adboard_core::{Advert, AdvertChanges, AdvertStoreError, NewAdvert};
use axum::{
    Json,
    extract::{Extension, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{AppState, middleware::AuthContext};

use super::ApiError;

#[derive(Debug, Serialize)]
pub struct AdvertResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub owner: String,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Advert> for AdvertResponse {
    fn from(advert: Advert) -> Self {
        Self {
            id: advert.id,
            title: advert.title,
            description: advert.description,
            price: advert.price,
            owner: advert.owner.as_str().to_string(),
            image_urls: advert.image_urls,
            created_at: advert.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateAdvertRequest {
    pub title: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateAdvertRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_urls: Option<Vec<String>>,
}

#[tracing::instrument(name = "ListAdverts", skip_all)]
pub async fn list_adverts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let adverts = state
        .advert_store
        .list_adverts()
        .await
        .map_err(|e| ApiError::UnexpectedError(e.to_string()))?;

    let body: Vec<AdvertResponse> = adverts.into_iter().map(AdvertResponse::from).collect();
    Ok(Json(body))
}

#[tracing::instrument(name = "GetAdvert", skip_all, fields(advert_id = id))]
pub async fn get_advert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let advert = state.advert_store.get_advert(id).await.map_err(|e| match e {
        AdvertStoreError::AdvertNotFound => ApiError::NotFound("advert not found".to_string()),
        AdvertStoreError::UnexpectedError(msg) => ApiError::UnexpectedError(msg),
    })?;

    Ok(Json(AdvertResponse::from(advert)))
}

#[tracing::instrument(name = "CreateAdvert", skip_all)]
pub async fn create_advert(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    request: Result<Json<CreateAdvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;

    let use_case = CreateAdvertUseCase::new(&*state.advert_store);
    let advert = use_case
        .execute(
            auth.subject,
            NewAdvert {
                title: request.title,
                description: request.description,
                price: request.price,
                image_urls: request.image_urls,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AdvertResponse::from(advert))))
}

#[tracing::instrument(name = "UpdateAdvert", skip_all, fields(advert_id = id))]
pub async fn update_advert(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
    request: Result<Json<UpdateAdvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;

    let use_case = UpdateAdvertUseCase::new(&*state.advert_store);
    let advert = use_case
        .execute(
            &auth.subject,
            id,
            AdvertChanges {
                title: request.title,
                description: request.description,
                price: request.price,
                image_urls: request.image_urls,
            },
        )
        .await?;

    Ok(Json(AdvertResponse::from(advert)))
}

#[tracing::instrument(name = "DeleteAdvert", skip_all, fields(advert_id = id))]
pub async fn delete_advert(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = DeleteAdvertUseCase::new(&*state.advert_store);
    use_case.execute(&auth.subject, id).await?;

    Ok(Json(serde_json::json!({ "message": "Advert deleted" })))
}
