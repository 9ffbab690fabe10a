//! Activity catalog API handlers
//!
//! Contains HTTP request handlers for listing activities, signing students
//! up, and removing participants.

use crate::error::AppError;
use crate::state::{Activity, ActivityName, Catalog};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Activity response type
///
/// The activity name is the key of the enclosing mapping, so it is not
/// repeated in the value.
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    /// Display-only description of the activity
    pub description: String,
    /// Human-readable meeting schedule
    pub schedule: String,
    /// Informational capacity (not enforced on signup)
    pub max_participants: u32,
    /// Emails of enrolled students, in signup order
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// Email query parameter shared by signup and removal
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email; treated as an opaque identifier, no format validation
    pub email: String,
}

/// GET /activities - List the full activity catalog
pub async fn list_activities(
    State(catalog): State<Arc<RwLock<Catalog>>>,
) -> Result<Json<BTreeMap<ActivityName, ActivityResponse>>, AppError> {
    let catalog = catalog.read().await;
    let activities: BTreeMap<ActivityName, ActivityResponse> = catalog
        .activities_list()
        .into_iter()
        .map(|activity| (activity.name.clone(), ActivityResponse::from(activity)))
        .collect();

    Ok(Json(activities))
}

/// POST /activities/:name/signup - Sign a student up for an activity
pub async fn signup_for_activity(
    State(catalog): State<Arc<RwLock<Catalog>>>,
    Path(name): Path<ActivityName>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut catalog = catalog.write().await;
    catalog.signup(&name, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
        status: "ok".to_string(),
    }))
}

/// DELETE /activities/:name/participants - Remove a participant from an activity
pub async fn remove_participant(
    State(catalog): State<Arc<RwLock<Catalog>>>,
    Path(name): Path<ActivityName>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut catalog = catalog.write().await;
    catalog.withdraw(&name, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Removed {} from {}", query.email, name),
        status: "ok".to_string(),
    }))
}
