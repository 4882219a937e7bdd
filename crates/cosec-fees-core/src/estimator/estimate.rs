use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CosecFeesError;
use crate::estimator::schedule;
use crate::types::{with_metadata, ComputationOutput, FeeKind, Money};
use crate::CosecFeesResult;

// ---------------------------------------------------------------------------
// Fee Estimation Types
// ---------------------------------------------------------------------------

/// A company's headline financials, in RM. Absent fields count as zero; the
/// estimator never rejects, so callers wanting strict validation should run
/// [`FinancialInputs::validate`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialInputs {
    pub revenue: Option<Money>,
    pub total_assets: Option<Money>,
    pub total_expenses: Option<Money>,
}

/// Estimated annual compliance fees.
///
/// A base fee of 0 is a sentinel meaning the financial level exceeds the
/// standard schedule and the engagement must be quoted manually. It is never
/// a literal zero-cost fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub financial_level: Money,
    pub audit_fee: Money,
    pub audit_surcharge: Money,
    pub tax_fee: Money,
    pub tax_surcharge: Money,
    pub accounting_fee_range: String,
}

impl FinancialInputs {
    /// Strict validation: reject negative figures instead of clamping them.
    pub fn validate(&self) -> CosecFeesResult<()> {
        for (field, value) in [
            ("revenue", self.revenue),
            ("total_assets", self.total_assets),
            ("total_expenses", self.total_expenses),
        ] {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(CosecFeesError::InvalidInput {
                        field: field.to_string(),
                        reason: format!("must be non-negative, got {}", v),
                    });
                }
            }
        }
        Ok(())
    }
}

impl FeeEstimate {
    pub fn audit_requires_assessment(&self) -> bool {
        self.audit_fee == Decimal::ZERO
    }

    pub fn tax_requires_assessment(&self) -> bool {
        self.tax_fee == Decimal::ZERO
    }

    /// Base fee plus surcharge, or None when the engagement needs a manual
    /// quote. Consumers must render a message, never "RM0".
    pub fn total_audit(&self) -> Option<Money> {
        if self.audit_requires_assessment() {
            None
        } else {
            Some(self.audit_fee + self.audit_surcharge)
        }
    }

    pub fn total_tax(&self) -> Option<Money> {
        if self.tax_requires_assessment() {
            None
        } else {
            Some(self.tax_fee + self.tax_surcharge)
        }
    }
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// The single scalar driving the audit/tax fee lookup: the highest of
/// revenue, total assets, and total expenses after normalization.
pub fn financial_level(inputs: &FinancialInputs) -> Money {
    normalize(inputs.revenue)
        .max(normalize(inputs.total_assets))
        .max(normalize(inputs.total_expenses))
}

/// Monthly bookkeeping fee range, a function of revenue alone.
pub fn accounting_fee_range(revenue: Money) -> &'static str {
    if revenue < Decimal::from(500_000) {
        "RM300–RM800"
    } else if revenue <= Decimal::from(2_000_000) {
        "RM800–RM2,000"
    } else {
        "RM2,000–RM5,000+"
    }
}

/// Estimate annual audit, tax agent, and monthly accounting fees from a
/// company's headline financials.
///
/// Pure lookup against the firm's published schedules: no I/O, no state.
/// Negative inputs are clamped to zero with a warning.
pub fn estimate_fees(
    inputs: &FinancialInputs,
) -> CosecFeesResult<ComputationOutput<FeeEstimate>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    for (field, value) in [
        ("revenue", inputs.revenue),
        ("total_assets", inputs.total_assets),
        ("total_expenses", inputs.total_expenses),
    ] {
        if value.is_some_and(|v| v < Decimal::ZERO) {
            warnings.push(format!("Negative {} treated as zero.", field));
        }
    }

    let revenue = normalize(inputs.revenue);
    let level = financial_level(inputs);

    let audit_fee = schedule::audit_fee(level);
    let tax_fee = schedule::tax_fee(level);
    let audit_surcharge = schedule::professional_surcharge(audit_fee, FeeKind::Audit);
    let tax_surcharge = schedule::professional_surcharge(tax_fee, FeeKind::Tax);

    if audit_fee == Decimal::ZERO {
        warnings.push(format!(
            "Financial level RM{} exceeds the standard fee schedule; audit and \
             tax fees require manual assessment.",
            level
        ));
    }

    let estimate = FeeEstimate {
        financial_level: level,
        audit_fee,
        audit_surcharge,
        tax_fee,
        tax_surcharge,
        accounting_fee_range: accounting_fee_range(revenue).to_string(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compliance fee estimation: financial level (max of revenue, assets, \
         expenses) looked up against the firm's audit and tax fee schedules, \
         with professional surcharge by base-fee bracket and a revenue-based \
         monthly accounting fee range",
        &serde_json::json!({
            "revenue": revenue.to_string(),
            "total_assets": normalize(inputs.total_assets).to_string(),
            "total_expenses": normalize(inputs.total_expenses).to_string(),
            "financial_level": level.to_string(),
        }),
        warnings,
        elapsed,
        estimate,
    ))
}

/// Absent inputs count as zero; negative figures are clamped. Either way a
/// normalized value lands in the bottom bracket, matching the source system's
/// loose-coercion behavior.
fn normalize(value: Option<Money>) -> Money {
    value.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inputs(revenue: Money, assets: Money, expenses: Money) -> FinancialInputs {
        FinancialInputs {
            revenue: Some(revenue),
            total_assets: Some(assets),
            total_expenses: Some(expenses),
        }
    }

    #[test]
    fn test_estimate_small_company() {
        // Level 600k: audit 2000 (base ≤2999 -> surcharge 250),
        // tax 1500 (base ≤1999 -> surcharge 150)
        let result = estimate_fees(&inputs(dec!(600_000), dec!(500_000), dec!(400_000))).unwrap();
        let est = &result.result;
        assert_eq!(est.financial_level, dec!(600_000));
        assert_eq!(est.audit_fee, dec!(2_000));
        assert_eq!(est.audit_surcharge, dec!(250));
        assert_eq!(est.tax_fee, dec!(1_500));
        assert_eq!(est.tax_surcharge, dec!(150));
        assert_eq!(est.accounting_fee_range, "RM800–RM2,000");
        assert_eq!(est.total_audit(), Some(dec!(2_250)));
        assert_eq!(est.total_tax(), Some(dec!(1_650)));
    }

    #[test]
    fn test_estimate_all_zero_inputs() {
        let result = estimate_fees(&FinancialInputs::default()).unwrap();
        let est = &result.result;
        assert_eq!(est.financial_level, dec!(0));
        assert_eq!(est.audit_fee, dec!(1_500));
        assert_eq!(est.audit_surcharge, dec!(200));
        assert_eq!(est.tax_fee, dec!(1_200));
        assert_eq!(est.tax_surcharge, dec!(150));
        assert_eq!(est.accounting_fee_range, "RM300–RM800");
    }

    #[test]
    fn test_estimate_above_schedule_requires_manual_assessment() {
        let result = estimate_fees(&inputs(dec!(11_000_000), dec!(0), dec!(0))).unwrap();
        let est = &result.result;
        assert!(est.audit_requires_assessment());
        assert!(est.tax_requires_assessment());
        assert_eq!(est.audit_surcharge, dec!(0));
        assert_eq!(est.tax_surcharge, dec!(0));
        assert_eq!(est.total_audit(), None);
        assert_eq!(est.total_tax(), None);
        assert_eq!(est.accounting_fee_range, "RM2,000–RM5,000+");
        assert!(result.warnings.iter().any(|w| w.contains("manual assessment")));
    }

    #[test]
    fn test_estimate_top_scheduled_bracket() {
        // Level 9.5M: audit 11000 (base ≤12999 -> surcharge 650),
        // tax 4500 (base ≤4999 -> surcharge 250)
        let result = estimate_fees(&inputs(dec!(9_500_000), dec!(9_500_000), dec!(0))).unwrap();
        let est = &result.result;
        assert_eq!(est.audit_fee, dec!(11_000));
        assert_eq!(est.audit_surcharge, dec!(650));
        assert_eq!(est.tax_fee, dec!(4_500));
        assert_eq!(est.tax_surcharge, dec!(250));
    }

    #[test]
    fn test_level_is_max_of_the_three_inputs() {
        assert_eq!(
            financial_level(&inputs(dec!(100), dec!(3_000_000), dec!(200))),
            dec!(3_000_000)
        );
        assert_eq!(
            financial_level(&inputs(dec!(100), dec!(200), dec!(4_500_000))),
            dec!(4_500_000)
        );
    }

    #[test]
    fn test_accounting_range_depends_on_revenue_only() {
        let result = estimate_fees(&inputs(dec!(499_999), dec!(9_000_000_000), dec!(9_000_000_000)))
            .unwrap();
        assert_eq!(result.result.accounting_fee_range, "RM300–RM800");
        // Audit/tax still follow the (huge) level
        assert!(result.result.audit_requires_assessment());
    }

    #[test]
    fn test_accounting_range_boundaries() {
        assert_eq!(accounting_fee_range(dec!(499_999)), "RM300–RM800");
        assert_eq!(accounting_fee_range(dec!(500_000)), "RM800–RM2,000");
        assert_eq!(accounting_fee_range(dec!(2_000_000)), "RM800–RM2,000");
        assert_eq!(accounting_fee_range(dec!(2_000_001)), "RM2,000–RM5,000+");
    }

    #[test]
    fn test_negative_inputs_clamped_with_warning() {
        let result = estimate_fees(&inputs(dec!(-100_000), dec!(0), dec!(0))).unwrap();
        let est = &result.result;
        assert_eq!(est.financial_level, dec!(0));
        assert_eq!(est.audit_fee, dec!(1_500));
        assert_eq!(est.accounting_fee_range, "RM300–RM800");
        assert!(result.warnings.iter().any(|w| w.contains("Negative revenue")));
    }

    #[test]
    fn test_strict_validation_rejects_negatives() {
        let bad = inputs(dec!(1), dec!(-2), dec!(3));
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("total_assets"));
        assert!(inputs(dec!(1), dec!(2), dec!(3)).validate().is_ok());
    }

    #[test]
    fn test_inputs_deserialize_from_plain_json_numbers() {
        let fin: FinancialInputs =
            serde_json::from_str(r#"{"revenue": 600000, "total_assets": 500000}"#).unwrap();
        assert_eq!(fin.revenue, Some(dec!(600_000)));
        assert_eq!(fin.total_assets, Some(dec!(500_000)));
        assert_eq!(fin.total_expenses, None);
    }
}
