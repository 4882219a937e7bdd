use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use cosec_fees_core::estimator::{estimate, schedule};
use cosec_fees_core::services::{catalog, packages};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Fee Estimation
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_fees(input_json: String) -> NapiResult<String> {
    let input: estimate::FinancialInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = estimate::estimate_fees(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Convenience entry point for JS callers holding plain numbers. Non-finite
/// values fall back to zero, matching the calculator's loose coercion.
#[napi]
pub fn estimate_fees_from_numbers(
    revenue: Option<f64>,
    total_assets: Option<f64>,
    total_expenses: Option<f64>,
) -> NapiResult<String> {
    let to_money = |v: Option<f64>| v.and_then(Decimal::from_f64_retain);
    let input = estimate::FinancialInputs {
        revenue: to_money(revenue),
        total_assets: to_money(total_assets),
        total_expenses: to_money(total_expenses),
    };
    let output = estimate::estimate_fees(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn fee_schedules() -> NapiResult<String> {
    let payload = serde_json::json!({
        "audit": schedule::AUDIT_FEE_SCHEDULE,
        "tax": schedule::TAX_FEE_SCHEDULE,
        "surcharge": schedule::PROFESSIONAL_SURCHARGE_SCHEDULE,
        "top_tax_surcharge": schedule::TOP_TAX_SURCHARGE,
    });
    serde_json::to_string(&payload).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Services & Packages
// ---------------------------------------------------------------------------

#[napi]
pub fn service_catalog() -> NapiResult<String> {
    serde_json::to_string(&catalog::service_catalog()).map_err(to_napi_error)
}

#[napi]
pub fn pricing_packages() -> NapiResult<String> {
    let payload = serde_json::json!({
        "incorporation": packages::incorporation_package(),
        "retainer_plans": packages::retainer_plans(),
    });
    serde_json::to_string(&payload).map_err(to_napi_error)
}
