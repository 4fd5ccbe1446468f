//! Component listing service — query composition and the fetch façade.
//!
//! DESIGN
//! ======
//! `ComponentFilters` carries the optional filter dimensions of one listing
//! request. Composition is conjunctive: each supplied dimension adds one
//! predicate, absent or empty dimensions add nothing at all. Values are not
//! validated against the taxonomy here; an unknown category simply matches
//! no rows, the database being the source of truth.
//!
//! ERROR HANDLING
//! ==============
//! `fetch_components` is the façade the listing pages call. It never fails:
//! a database error is logged and collapsed into an empty, zero-count page.
//! Callers therefore cannot tell "no matches" from "read failed"; the
//! fallible `query_components` underneath keeps the distinction for anything
//! that needs it.

use serde::Serialize;
use sqlx::postgres::Postgres;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::pagination::{self, PER_PAGE};

// =============================================================================
// TYPES
// =============================================================================

/// A catalog component row. Authored out-of-band; read-only here.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub is_free: bool,
    pub is_interactive: bool,
    pub layout_properties: Vec<String>,
    pub elements: Vec<String>,
    pub src: String,
    pub image: Option<String>,
}

/// Filter criteria for one listing request, built fresh from URL params.
#[derive(Debug, Clone)]
pub struct ComponentFilters {
    /// 1-based page index. Always >= 1.
    pub page_index: i64,
    pub per_page: i64,
    pub search: Option<String>,
    pub category: Option<String>,
    pub free: Option<bool>,
    pub interactive: Option<bool>,
    /// Layout tags the component must all carry.
    pub layout: Vec<String>,
    /// Element tags the component must all carry.
    pub elements: Vec<String>,
}

impl Default for ComponentFilters {
    fn default() -> Self {
        Self {
            page_index: 1,
            per_page: PER_PAGE,
            search: None,
            category: None,
            free: None,
            interactive: None,
            layout: Vec::new(),
            elements: Vec::new(),
        }
    }
}

/// One page of components plus the total match count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentPage {
    pub components: Vec<Component>,
    pub count: i64,
}

impl ComponentPage {
    #[must_use]
    pub fn empty() -> Self {
        Self { components: Vec::new(), count: 0 }
    }
}

// =============================================================================
// QUERY COMPOSITION
// =============================================================================

fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

/// Append the conjunctive filter predicates for `filters`. Called twice per
/// listing query: once under the count aggregate and once for the page
/// selection, so both see the same filtered set.
fn push_filter_predicates(builder: &mut QueryBuilder<'static, Postgres>, filters: &ComponentFilters) {
    let mut has_where = false;

    if let Some(category) = filters.category.as_deref() {
        push_predicate(builder, &mut has_where);
        builder.push("category = ");
        builder.push_bind(category.to_owned());
    }
    if let Some(free) = filters.free {
        push_predicate(builder, &mut has_where);
        builder.push("is_free = ");
        builder.push_bind(free);
    }
    if let Some(interactive) = filters.interactive {
        push_predicate(builder, &mut has_where);
        builder.push("is_interactive = ");
        builder.push_bind(interactive);
    }
    if let Some(search) = filters.search.as_deref() {
        let pattern = format!("%{search}%");
        push_predicate(builder, &mut has_where);
        builder.push("(name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if !filters.layout.is_empty() {
        push_predicate(builder, &mut has_where);
        builder.push("layout_properties @> ");
        builder.push_bind(filters.layout.clone());
    }
    if !filters.elements.is_empty() {
        push_predicate(builder, &mut has_where);
        builder.push("elements @> ");
        builder.push_bind(filters.elements.clone());
    }
}

/// Build the listing query for the given filters. The filtered count is
/// laterally joined with the page selection, so one round trip serves both
/// the page and the total — and the total survives a page index past the end
/// of the result set, where the page itself comes back empty.
pub(crate) fn build_component_query(filters: &ComponentFilters) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT total_count, id, name, description, category, is_free, is_interactive, \
         layout_properties, elements, src, image \
         FROM (SELECT count(*) AS total_count FROM components",
    );
    push_filter_predicates(&mut builder, filters);
    builder.push(
        ") AS counted LEFT JOIN LATERAL (\
         SELECT id, name, description, category, is_free, is_interactive, \
         layout_properties, elements, src, image FROM components",
    );
    push_filter_predicates(&mut builder, filters);

    let (offset, limit) = pagination::page_bounds(filters.page_index, filters.per_page);
    builder.push(" ORDER BY name ASC, id ASC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    builder.push(") AS page ON TRUE ORDER BY name ASC, id ASC");

    builder
}

// =============================================================================
// FETCH
// =============================================================================

// The count row is always present; the component columns are NULL when the
// requested page holds no rows.
type ComponentTuple = (
    i64,
    Option<Uuid>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<bool>,
    Option<bool>,
    Option<Vec<String>>,
    Option<Vec<String>>,
    Option<String>,
    Option<String>,
);

/// Run the composed listing query.
///
/// # Errors
///
/// Returns a database error if the read fails.
pub(crate) async fn query_components(
    pool: &PgPool,
    filters: &ComponentFilters,
) -> Result<ComponentPage, sqlx::Error> {
    let mut builder = build_component_query(filters);
    let rows = builder
        .build_query_as::<ComponentTuple>()
        .fetch_all(pool)
        .await?;

    let count = rows.first().map_or(0, |row| row.0);
    let components = rows
        .into_iter()
        .filter_map(
            |(_, id, name, description, category, is_free, is_interactive, layout_properties, elements, src, image)| {
                // A NULL id is the empty-page marker from the outer join.
                let id = id?;
                Some(Component {
                    id,
                    name: name.unwrap_or_default(),
                    description,
                    category: category.unwrap_or_default(),
                    is_free: is_free.unwrap_or_default(),
                    is_interactive: is_interactive.unwrap_or_default(),
                    layout_properties: layout_properties.unwrap_or_default(),
                    elements: elements.unwrap_or_default(),
                    src: src.unwrap_or_default(),
                    image,
                })
            },
        )
        .collect();

    Ok(ComponentPage { components, count })
}

/// Fetch one page of components. Never fails: a backend read error is logged
/// and degraded to an empty, zero-count page.
pub async fn fetch_components(pool: &PgPool, filters: &ComponentFilters) -> ComponentPage {
    match query_components(pool, filters).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, "component listing query failed; returning empty page");
            ComponentPage::empty()
        }
    }
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
