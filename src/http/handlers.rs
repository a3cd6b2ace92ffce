use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::error::{PlateError, Result};
use crate::http::AppState;
use crate::models::{ImpactSummary, Ingredient, Plate};
use crate::scoring::calculate_impact;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct AddItemQuery {
    pub session_id: String,
    pub ingredient_id: u32,
    pub quantity_g: u32,
}

#[derive(Deserialize)]
pub struct RemoveItemQuery {
    pub session_id: String,
    pub ingredient_id: u32,
}

#[derive(Serialize)]
pub struct ExplanationResponse {
    pub session_id: String,
    pub explanation: String,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ingredients": state.catalog.len(),
        "sessions": state.store.session_count(),
    }))
}

pub async fn list_ingredients(State(state): State<Arc<AppState>>) -> Json<Vec<Ingredient>> {
    Json(state.catalog.all().into_iter().cloned().collect())
}

pub async fn get_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Ingredient>> {
    let ingredient = state
        .catalog
        .get(id)
        .cloned()
        .ok_or(PlateError::IngredientNotFound(id))?;
    Ok(Json(ingredient))
}

pub async fn start_session(State(state): State<Arc<AppState>>) -> Json<Plate> {
    let plate = state.store.start_session();
    info!(session_id = %plate.session_id, "session started");
    Json(plate)
}

pub async fn read_plate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Plate>> {
    let plate = state
        .store
        .get(&query.session_id)
        .ok_or(PlateError::SessionNotFound(query.session_id))?;
    Ok(Json(plate))
}

pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddItemQuery>,
) -> Result<Json<Plate>> {
    let plate = state.store.add_item(
        &state.catalog,
        &query.session_id,
        query.ingredient_id,
        query.quantity_g,
    )?;
    info!(
        session_id = %query.session_id,
        ingredient_id = query.ingredient_id,
        quantity_g = query.quantity_g,
        "item set on plate"
    );
    Ok(Json(plate))
}

pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RemoveItemQuery>,
) -> Json<Plate> {
    let plate = state
        .store
        .remove_item(&query.session_id, query.ingredient_id);
    Json(plate)
}

pub async fn impact_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ImpactSummary>> {
    let plate = state
        .store
        .get(&query.session_id)
        .ok_or(PlateError::SessionNotFound(query.session_id))?;
    Ok(Json(calculate_impact(&plate, &state.catalog)))
}

pub async fn impact_explanation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ExplanationResponse>> {
    let explainer = state
        .explainer
        .as_ref()
        .ok_or(PlateError::ExplanationUnavailable)?;

    let plate = state
        .store
        .get(&query.session_id)
        .ok_or(PlateError::SessionNotFound(query.session_id))?;

    let summary = calculate_impact(&plate, &state.catalog);
    let explanation = explainer.explain(&summary).await?;

    Ok(Json(ExplanationResponse {
        session_id: summary.session_id,
        explanation,
    }))
}
