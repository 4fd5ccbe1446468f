//! Component listing routes.
//!
//! Query parameters arrive as raw strings (they come straight off a URL) and
//! are normalized into `ComponentFilters` here: absent and empty values mean
//! "no constraint", boolean flags only bind on a literal `true`/`false`, and
//! the tag dimensions accept comma-separated lists. The listing handlers
//! never fail; the fetch façade already degraded any backend error to an
//! empty page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter_list;
use crate::pagination;
use crate::services::component::{self, Component, ComponentFilters};
use crate::services::saved;
use crate::state::AppState;

// =============================================================================
// PARAMETER PARSING
// =============================================================================

/// Raw listing query parameters, all optional strings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub free: Option<String>,
    pub interactive: Option<String>,
    pub layout: Option<String>,
    pub elements: Option<String>,
    pub organization: Option<String>,
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw.map(str::trim) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

fn parse_tag_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Build typed filter criteria from raw query parameters.
pub(crate) fn filters_from_params(params: &ListParams) -> ComponentFilters {
    ComponentFilters {
        page_index: pagination::page_from_query_param(params.page.as_deref()),
        per_page: pagination::PER_PAGE,
        search: parse_text(params.search.as_deref()),
        category: parse_text(params.category.as_deref()),
        free: parse_flag(params.free.as_deref()),
        interactive: parse_flag(params.interactive.as_deref()),
        layout: parse_tag_list(params.layout.as_deref()),
        elements: parse_tag_list(params.elements.as_deref()),
    }
}

// =============================================================================
// LISTINGS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub components: Vec<Component>,
    pub count: i64,
    pub page_index: i64,
    pub page_count: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub saved_component_ids: Vec<Uuid>,
}

fn to_listing(filters: &ComponentFilters, page: component::ComponentPage) -> ListingResponse {
    ListingResponse {
        page_count: pagination::page_count(page.count, filters.per_page),
        page_index: filters.page_index,
        count: page.count,
        components: page.components,
    }
}

/// `GET /api/components` — dashboard listing with saved-state annotation.
/// Requires an `organization` query parameter; both reads run concurrently.
pub async fn list_dashboard_components(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<DashboardResponse>, StatusCode> {
    let Some(organization) = parse_text(params.organization.as_deref()) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let filters = filters_from_params(&params);

    let (page, saved_ids) = tokio::join!(
        component::fetch_components(&state.pool, &filters),
        saved::fetch_saved_component_ids(&state.pool, &organization),
    );

    let mut saved_component_ids: Vec<Uuid> = saved_ids.into_iter().collect();
    saved_component_ids.sort_unstable();

    Ok(Json(DashboardResponse {
        listing: to_listing(&filters, page),
        saved_component_ids,
    }))
}

/// `GET /api/browse` — public listing across all categories.
pub async fn browse_components(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListingResponse> {
    let filters = filters_from_params(&params);
    let page = component::fetch_components(&state.pool, &filters).await;
    Json(to_listing(&filters, page))
}

/// `GET /api/browse/{category}` — public listing constrained to one
/// category. The path segment wins over any `category` query parameter.
pub async fn browse_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<ListingResponse> {
    let mut filters = filters_from_params(&params);
    filters.category = Some(category);
    let page = component::fetch_components(&state.pool, &filters).await;
    Json(to_listing(&filters, page))
}

// =============================================================================
// FILTER TAXONOMY
// =============================================================================

#[derive(Debug, Serialize)]
pub struct FilterListsResponse {
    pub categories: &'static [filter_list::CategoryOption],
    pub text_layout: &'static [filter_list::FilterOption],
    pub visual_layout: &'static [filter_list::FilterOption],
    pub column_layout: &'static [filter_list::FilterOption],
    pub elements: &'static [filter_list::FilterOption],
    pub layout_properties: &'static [filter_list::FilterOption],
    pub all_properties: &'static [filter_list::FilterOption],
}

/// `GET /api/filters` — the static taxonomy the filter sidebar renders.
pub async fn filter_lists() -> Json<FilterListsResponse> {
    Json(FilterListsResponse {
        categories: filter_list::CATEGORIES,
        text_layout: filter_list::TEXT_LAYOUT,
        visual_layout: filter_list::VISUAL_LAYOUT,
        column_layout: filter_list::COLUMN_LAYOUT,
        elements: filter_list::ELEMENTS,
        layout_properties: &filter_list::LAYOUT_PROPERTIES,
        all_properties: &filter_list::ALL_PROPERTIES,
    })
}

#[cfg(test)]
#[path = "components_test.rs"]
mod tests;
