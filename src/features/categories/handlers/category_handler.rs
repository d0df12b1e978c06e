use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all categories, newest first
#[utoipa::path(
    get,
    path = "/categories-data",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories-data",
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 422, description = "Validation error")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let input = dto.into_input()?;
    let category = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Categoría creada exitosamente".to_string()),
            None,
        )),
    ))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories-data/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Update a category; an omitted `description` or `active` keeps its stored value
#[utoipa::path(
    put,
    path = "/categories-data/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let input = dto.into_input()?;
    let category = service.update(id, input).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Categoría actualizada exitosamente".to_string()),
        None,
    )))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories-data/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Categoría eliminada exitosamente".to_string()),
        None,
    )))
}
