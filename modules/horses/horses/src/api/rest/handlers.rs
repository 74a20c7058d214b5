use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::Json;
use stable_errors::{ApiResult, Problem};

use super::dto::{
    HorseDetailDto, HorseListDto, HorseSearchQuery, HorseWriteRequest, OwnerCreateRequest,
    OwnerDto, OwnerSearchQuery,
};
use super::error::{domain_error_to_problem, json_rejection, path_rejection, query_rejection};
use crate::domain::error::DomainError;
use crate::domain::service::{HorsesService, OwnersService};

type PathId = Result<Path<i64>, PathRejection>;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

fn path_id(id: PathId, uri: &Uri) -> ApiResult<i64> {
    id.map(|Path(id)| id).map_err(|r| path_rejection(&r, uri.path()))
}

/// List horses, optionally filtered
#[utoipa::path(
    get,
    path = "/horses",
    tag = "Horses",
    params(HorseSearchQuery),
    responses(
        (status = 200, description = "Matching horses", body = [HorseListDto]),
        (status = 400, description = "Malformed query", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal error", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn list_horses(
    Extension(svc): Extension<Arc<HorsesService>>,
    uri: Uri,
    query: Result<Query<HorseSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<HorseListDto>>> {
    let Query(query) = query.map_err(|r| query_rejection(&r, uri.path()))?;
    let horses = svc.search(&query.into()).await.map_err(at(&uri))?;
    Ok(Json(horses.into_iter().map(Into::into).collect()))
}

/// Get a horse by id
#[utoipa::path(
    get,
    path = "/horses/{id}",
    tag = "Horses",
    params(("id" = i64, Path, description = "Horse id")),
    responses(
        (status = 200, description = "Horse found", body = HorseDetailDto),
        (status = 404, description = "No such horse", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn get_horse(
    Extension(svc): Extension<Arc<HorsesService>>,
    uri: Uri,
    id: PathId,
) -> ApiResult<Json<HorseDetailDto>> {
    let id = path_id(id, &uri)?;
    let horse = svc.get_by_id(id).await.map_err(at(&uri))?;
    Ok(Json(horse.into()))
}

/// Create a horse
#[utoipa::path(
    post,
    path = "/horses",
    tag = "Horses",
    request_body = HorseWriteRequest,
    responses(
        (status = 201, description = "Horse created", body = HorseDetailDto),
        (status = 400, description = "Invalid horse", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Referenced parent or owner missing", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn create_horse(
    Extension(svc): Extension<Arc<HorsesService>>,
    uri: Uri,
    body: Result<Json<HorseWriteRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body.map_err(|r| json_rejection(&r, uri.path()))?;
    let horse = svc.create(req.into()).await.map_err(at(&uri))?;
    let dto: HorseDetailDto = horse.into();
    let location = format!("/horses/{}", dto.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Replace all fields of a horse
#[utoipa::path(
    put,
    path = "/horses/{id}",
    tag = "Horses",
    params(("id" = i64, Path, description = "Horse id")),
    request_body = HorseWriteRequest,
    responses(
        (status = 200, description = "Horse updated", body = HorseDetailDto),
        (status = 400, description = "Invalid horse", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Horse or referenced entity missing", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn update_horse(
    Extension(svc): Extension<Arc<HorsesService>>,
    uri: Uri,
    id: PathId,
    body: Result<Json<HorseWriteRequest>, JsonRejection>,
) -> ApiResult<Json<HorseDetailDto>> {
    let id = path_id(id, &uri)?;
    let Json(req) = body.map_err(|r| json_rejection(&r, uri.path()))?;
    let update = horses_sdk::NewHorse::from(req).into_update(id);
    let horse = svc.update(update).await.map_err(at(&uri))?;
    Ok(Json(horse.into()))
}

/// Delete a horse
#[utoipa::path(
    delete,
    path = "/horses/{id}",
    tag = "Horses",
    params(("id" = i64, Path, description = "Horse id")),
    responses(
        (status = 204, description = "Horse deleted"),
        (status = 404, description = "No such horse", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn delete_horse(
    Extension(svc): Extension<Arc<HorsesService>>,
    uri: Uri,
    id: PathId,
) -> ApiResult<StatusCode> {
    let id = path_id(id, &uri)?;
    svc.delete(id).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search owners by name
#[utoipa::path(
    get,
    path = "/owners",
    tag = "Owners",
    params(OwnerSearchQuery),
    responses(
        (status = 200, description = "Matching owners", body = [OwnerDto]),
        (status = 400, description = "Malformed query", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn search_owners(
    Extension(svc): Extension<Arc<OwnersService>>,
    uri: Uri,
    query: Result<Query<OwnerSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<OwnerDto>>> {
    let Query(query) = query.map_err(|r| query_rejection(&r, uri.path()))?;
    let owners = svc.search(&query.into()).await.map_err(at(&uri))?;
    Ok(Json(owners.into_iter().map(Into::into).collect()))
}

/// Get an owner by id
#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "Owners",
    params(("id" = i64, Path, description = "Owner id")),
    responses(
        (status = 200, description = "Owner found", body = OwnerDto),
        (status = 404, description = "No such owner", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn get_owner(
    Extension(svc): Extension<Arc<OwnersService>>,
    uri: Uri,
    id: PathId,
) -> ApiResult<Json<OwnerDto>> {
    let id = path_id(id, &uri)?;
    let owner = svc.get_by_id(id).await.map_err(at(&uri))?;
    Ok(Json(owner.into()))
}

/// Create an owner
#[utoipa::path(
    post,
    path = "/owners",
    tag = "Owners",
    request_body = OwnerCreateRequest,
    responses(
        (status = 201, description = "Owner created", body = OwnerDto),
        (status = 400, description = "Invalid owner", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn create_owner(
    Extension(svc): Extension<Arc<OwnersService>>,
    uri: Uri,
    body: Result<Json<OwnerCreateRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body.map_err(|r| json_rejection(&r, uri.path()))?;
    let owner = svc.create(req.into()).await.map_err(at(&uri))?;
    let location = format!("/owners/{}", owner.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OwnerDto::from(owner)),
    ))
}

/// Delete an owner no horse refers to
#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "Owners",
    params(("id" = i64, Path, description = "Owner id")),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 404, description = "No such owner", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Owner still owns horses", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(path = %uri.path()))]
pub async fn delete_owner(
    Extension(svc): Extension<Arc<OwnersService>>,
    uri: Uri,
    id: PathId,
) -> ApiResult<StatusCode> {
    let id = path_id(id, &uri)?;
    svc.delete(id).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}
