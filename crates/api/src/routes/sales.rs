//! Sale lifecycle endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::SaleId;
use domain::{SalesService, SearchSummary, UserDirectory};
use sale_store::{Sale, SaleStore};
use users::{InMemoryUserStore, UserService};

use crate::error::ApiError;

/// Shared application state holding the sales service and the user
/// subsystem behind the user API routes.
pub struct AppState<S: SaleStore, D: UserDirectory> {
    pub sales: SalesService<S, D>,
    pub users: UserService<InMemoryUserStore>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub user_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSaleStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchSalesQuery {
    pub user_id: String,
    pub status: Option<String>,
}

/// Wire representation of a sale record.
#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            user_id: sale.user_id.to_string(),
            amount: sale.amount,
            status: sale.status.to_string(),
            created_at: sale.created_at.to_rfc3339(),
            updated_at: sale.updated_at.to_rfc3339(),
            version: sale.version.as_i64(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchSalesResponse {
    pub results: Vec<SaleResponse>,
    pub summary: SearchSummary,
}

fn parse_sale_id(raw: &str) -> Result<SaleId, ApiError> {
    Uuid::parse_str(raw)
        .map(SaleId::from_uuid)
        .map_err(|_| ApiError::BadRequest(format!("invalid sale ID: {raw}")))
}

/// Creates a new sale for a user.
pub async fn create<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Json(request): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let sale = state
        .sales
        .create_sale(request.user_id.into(), request.amount)
        .await?;
    Ok((StatusCode::CREATED, Json(sale.into())))
}

/// Transitions a pending sale to a terminal status.
pub async fn update_status<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSaleStatusRequest>,
) -> Result<Json<SaleResponse>, ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let id = parse_sale_id(&id)?;
    let sale = state.sales.update_status(id, &request.status).await?;
    Ok(Json(sale.into()))
}

/// Searches a user's sales, optionally filtered by status, with an
/// aggregate summary over the matched records.
pub async fn search<S, D>(
    State(state): State<Arc<AppState<S, D>>>,
    Query(query): Query<SearchSalesQuery>,
) -> Result<Json<SearchSalesResponse>, ApiError>
where
    S: SaleStore,
    D: UserDirectory,
{
    let outcome = state
        .sales
        .search(query.user_id.into(), query.status.as_deref())
        .await?;

    Ok(Json(SearchSalesResponse {
        results: outcome.sales.into_iter().map(SaleResponse::from).collect(),
        summary: outcome.summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sale_id_rejects_malformed_input() {
        assert!(parse_sale_id("not-a-uuid").is_err());
        assert!(parse_sale_id("").is_err());
    }

    #[test]
    fn parse_sale_id_accepts_canonical_uuids() {
        let id = SaleId::new();
        assert_eq!(parse_sale_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn sale_response_flattens_wrapper_types() {
        let sale = Sale {
            id: SaleId::new(),
            user_id: "u1".into(),
            amount: Decimal::new(15075, 2),
            status: sale_store::SaleStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            version: common::Version::first(),
        };

        let response = SaleResponse::from(sale.clone());
        assert_eq!(response.id, sale.id.to_string());
        assert_eq!(response.user_id, "u1");
        assert_eq!(response.status, "pending");
        assert_eq!(response.version, 1);
    }
}
