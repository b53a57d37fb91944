use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ApiError;
use crate::group::NewExpense;
use crate::schemas::Group;

/// Groups kept in process memory, keyed by group id. Nothing survives a
/// restart.
#[derive(Default)]
pub struct GroupStore {
    groups: RwLock<HashMap<String, Group>>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read<T>(&self, id: &str, f: impl FnOnce(&Group) -> T) -> Result<T, ApiError> {
        let groups = self.groups.read().await;
        let group = groups
            .get(id)
            .ok_or_else(|| ApiError::GroupNotFound(id.to_string()))?;
        Ok(f(group))
    }

    async fn write<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Group) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(id)
            .ok_or_else(|| ApiError::GroupNotFound(id.to_string()))?;
        f(group)
    }
}

#[derive(Deserialize, Serialize)]
pub struct NameJson {
    pub name: String,
}

#[put("/groups/{id}")]
async fn add_group(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
    json: web::Json<NameJson>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let mut groups = store.groups.write().await;
    if groups.contains_key(&id) {
        return Err(ApiError::GroupExists(id));
    }
    let group = Group::new(id.clone(), json.into_inner().name);
    info!(group = %id, "group created");
    groups.insert(id, group.clone());
    Ok(HttpResponse::Created().json(group))
}

#[get("/groups/{id}")]
async fn get_group(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let group = store.read(&id, Group::clone).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[post("/groups/{id}/reset")]
async fn reset_group(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    store
        .write(&id, |group| {
            group.reset();
            Ok(())
        })
        .await?;
    info!(group = %id, "group reset");
    Ok(HttpResponse::Ok().body("Group reset"))
}

#[post("/groups/{id}/participants")]
async fn add_participant(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
    json: web::Json<NameJson>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let participant = store
        .write(&id, |group| Ok(group.add_participant(&json.name)?))
        .await?;
    Ok(HttpResponse::Created().json(participant))
}

#[delete("/groups/{id}/participants/{participant_id}")]
async fn remove_participant(
    store: web::Data<GroupStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, participant_id) = path.into_inner();
    let participant = store
        .write(&id, |group| Ok(group.remove_participant(&participant_id)?))
        .await?;
    Ok(HttpResponse::Ok().json(participant))
}

#[post("/groups/{id}/expenses")]
async fn add_expense(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
    expense: web::Json<NewExpense>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let expense = store
        .write(&id, |group| Ok(group.add_expense(expense.into_inner())?))
        .await?;
    Ok(HttpResponse::Created().json(expense))
}

#[delete("/groups/{id}/expenses/{expense_id}")]
async fn remove_expense(
    store: web::Data<GroupStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, expense_id) = path.into_inner();
    let expense = store
        .write(&id, |group| Ok(group.remove_expense(&expense_id)?))
        .await?;
    Ok(HttpResponse::Ok().json(expense))
}

#[get("/groups/{id}/balance")]
async fn get_balance(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let balances = store.read(&id, Group::balances).await?;
    Ok(HttpResponse::Ok().json(balances))
}

#[get("/groups/{id}/settlements")]
async fn get_settlements(
    store: web::Data<GroupStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let settlements = store.read(&id, Group::settlements).await?;
    Ok(HttpResponse::Ok().json(settlements))
}

/// Registers every group route. The store itself is attached by the caller
/// through `App::app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_group)
        .service(get_group)
        .service(reset_group)
        .service(add_participant)
        .service(remove_participant)
        .service(add_expense)
        .service(remove_expense)
        .service(get_balance)
        .service(get_settlements);
}
