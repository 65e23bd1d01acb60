use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::billing::{CreateBillDto, UpdateBillDto, UpdatePaymentDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::billing::BillingService,
        state::AppState,
    },
};

/// POST /api/billing
/// Creates a bill for a reservation. Staff only.
pub async fn create_bill(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let bill = BillingService::new(&state.db, &state.mailer).create(dto).await?;

    tracing::info!(bill_id = bill.id, invoice_number = %bill.invoice_number, "Bill created");

    Ok((StatusCode::CREATED, Json(bill)))
}

/// GET /api/billing/{id}
/// Gets a bill. Owner or staff.
pub async fn get_bill(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bill = BillingService::new(&state.db, &state.mailer)
        .get_by_id(&user, id)
        .await?;

    Ok(Json(bill))
}

/// PUT /api/billing/{id}
/// Updates a bill's charges and recomputes its total. Staff only.
pub async fn update_bill(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let bill = BillingService::new(&state.db, &state.mailer).update(id, dto).await?;

    Ok(Json(bill))
}

/// PUT /api/billing/{id}/payment
/// Records a payment status change. Staff only.
pub async fn update_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let bill = BillingService::new(&state.db, &state.mailer)
        .update_payment(id, dto)
        .await?;

    Ok(Json(bill))
}
