use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use minijinja::context;

use crate::core::error::{AppError, HtmlError};
use crate::core::extractor::AppForm;
use crate::features::marcas::dtos::{MarcaFormDto, MarcaFormValues};
use crate::features::marcas::flash::{set_flash, take_flash, Flash};
use crate::features::marcas::services::MarcaService;
use crate::shared::templates::render_page;
use crate::shared::types::FieldErrors;

type PageResult<T> = std::result::Result<T, HtmlError>;

const INDEX_PATH: &str = "/marcas";

/// Index page; shows and clears the pending flash message
pub async fn index(
    State(service): State<Arc<MarcaService>>,
    jar: CookieJar,
) -> PageResult<(CookieJar, Html<String>)> {
    let marcas: Vec<_> = service
        .list()
        .await?
        .into_iter()
        .map(|m| {
            context! {
                id => m.id,
                nombre => m.nombre,
                descripcion => m.descripcion,
                activo => m.activo,
                created_at => m.created_at.format("%d/%m/%Y %H:%M").to_string(),
            }
        })
        .collect();

    let (jar, flash) = take_flash(jar);
    let page = render_page(
        "marcas/index.html",
        context! {
            title => "Marcas",
            marcas => marcas,
            flash => flash.map(Flash::message),
        },
    )?;

    Ok((jar, page))
}

/// Empty creation form
pub async fn create() -> PageResult<Html<String>> {
    render_form(None, &MarcaFormValues::default(), &FieldErrors::new())
}

/// Create a marca from the submitted form
pub async fn store(
    State(service): State<Arc<MarcaService>>,
    jar: CookieJar,
    AppForm(dto): AppForm<MarcaFormDto>,
) -> PageResult<Response> {
    let input = match dto.into_input() {
        Ok(input) => input,
        Err(errors) => return invalid_form(None, &dto, &errors),
    };

    service.create(input).await?;
    Ok(redirect_with(jar, Flash::Created))
}

/// Marcas have no detail page
pub async fn show(Path(id): Path<i64>) -> Redirect {
    Redirect::to(&format!("{}/{}/edit", INDEX_PATH, id))
}

/// Edit form prefilled with the stored values
pub async fn edit(
    State(service): State<Arc<MarcaService>>,
    Path(id): Path<i64>,
) -> PageResult<Html<String>> {
    let marca = service.get(id).await?;
    render_form(Some(id), &MarcaFormValues::from(marca), &FieldErrors::new())
}

/// PUT / PATCH
pub async fn update(
    State(service): State<Arc<MarcaService>>,
    Path(id): Path<i64>,
    jar: CookieJar,
    AppForm(dto): AppForm<MarcaFormDto>,
) -> PageResult<Response> {
    update_marca(&service, id, jar, dto).await
}

pub async fn destroy(
    State(service): State<Arc<MarcaService>>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> PageResult<Response> {
    destroy_marca(&service, id, jar).await
}

/// HTML forms can only POST; `_method` selects the real verb
pub async fn dispatch_method(
    State(service): State<Arc<MarcaService>>,
    Path(id): Path<i64>,
    jar: CookieJar,
    AppForm(dto): AppForm<MarcaFormDto>,
) -> PageResult<Response> {
    match dto.spoofed_method().as_deref() {
        Some("PUT" | "PATCH") => update_marca(&service, id, jar, dto).await,
        Some("DELETE") => destroy_marca(&service, id, jar).await,
        other => Err(AppError::BadRequest(format!(
            "Unsupported form method {:?} for /marcas/{}",
            other, id
        ))
        .into()),
    }
}

async fn update_marca(
    service: &MarcaService,
    id: i64,
    jar: CookieJar,
    dto: MarcaFormDto,
) -> PageResult<Response> {
    // 404 takes precedence over validation errors
    service.get(id).await?;

    let input = match dto.into_input() {
        Ok(input) => input,
        Err(errors) => return invalid_form(Some(id), &dto, &errors),
    };

    service.update(id, input).await?;
    Ok(redirect_with(jar, Flash::Updated))
}

async fn destroy_marca(service: &MarcaService, id: i64, jar: CookieJar) -> PageResult<Response> {
    service.delete(id).await?;
    Ok(redirect_with(jar, Flash::Deleted))
}

fn redirect_with(jar: CookieJar, flash: Flash) -> Response {
    (set_flash(jar, flash), Redirect::to(INDEX_PATH)).into_response()
}

/// Re-render the form with the submitted values and field errors
fn invalid_form(id: Option<i64>, dto: &MarcaFormDto, errors: &FieldErrors) -> PageResult<Response> {
    tracing::debug!("Marca form rejected: {:?}", errors);
    let page = render_form(id, &dto.values(), errors)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}

/// `id: None` renders the creation form
fn render_form(
    id: Option<i64>,
    values: &MarcaFormValues,
    errors: &FieldErrors,
) -> PageResult<Html<String>> {
    let ctx = match id {
        None => context! {
            title => "Nueva marca",
            action => INDEX_PATH,
            form => values,
            errors => errors,
        },
        Some(id) => context! {
            title => "Editar marca",
            action => format!("{}/{}", INDEX_PATH, id),
            method => "PUT",
            form => values,
            errors => errors,
        },
    };

    Ok(render_page("marcas/form.html", ctx)?)
}
