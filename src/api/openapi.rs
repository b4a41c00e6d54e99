use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, PreviewSplitRequest},
    core::models::{
        AppLog, AssistantBasis, CustomRates, EffectiveRates, MonthlySummary, NewTransaction, PaymentAmounts,
        PaymentMethod, RateConfig, RevenueSplit, Transaction, UpdateTransaction, YearlySummary,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::get_rates,
        super::handlers::preview_split,
        super::handlers::create_transaction,
        super::handlers::list_transactions,
        super::handlers::get_transaction,
        super::handlers::update_transaction,
        super::handlers::recalculate_transaction,
        super::handlers::delete_transaction,
        super::handlers::get_monthly_summary,
        super::handlers::get_yearly_summary,
        super::handlers::get_app_logs
    ),
    components(schemas(
        PreviewSplitRequest,
        NewTransaction,
        UpdateTransaction,
        ErrorResponse,
        PaymentAmounts,
        PaymentMethod,
        CustomRates,
        RateConfig,
        AssistantBasis,
        EffectiveRates,
        RevenueSplit,
        Transaction,
        MonthlySummary,
        YearlySummary,
        AppLog
    )),
    info(
        title = "Comanda API",
        description = "Revenue split calculation and transaction tracking for salon comandas",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
