use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{FeeKind, Money};

// ---------------------------------------------------------------------------
// Fee Schedule Tables
// ---------------------------------------------------------------------------

/// One step of a fee schedule: the fee charged for any financial level up to
/// and including `upper_bound`. Amounts are whole RM.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeBracket {
    pub upper_bound: i64,
    pub fee: i64,
}

/// One step of the professional surcharge table, keyed by the base fee the
/// surcharge is layered on. Audit and tax surcharges diverge per bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurchargeBracket {
    pub upper_bound: i64,
    pub audit: i64,
    pub tax: i64,
}

/// Statutory audit fee by financial level. Levels above the top bracket have
/// no scheduled fee and must be assessed manually (sentinel 0).
pub const AUDIT_FEE_SCHEDULE: &[FeeBracket] = &[
    FeeBracket { upper_bound: 500_000, fee: 1_500 },
    FeeBracket { upper_bound: 1_000_000, fee: 2_000 },
    FeeBracket { upper_bound: 2_000_000, fee: 3_000 },
    FeeBracket { upper_bound: 3_000_000, fee: 4_000 },
    FeeBracket { upper_bound: 4_000_000, fee: 5_000 },
    FeeBracket { upper_bound: 5_000_000, fee: 6_000 },
    FeeBracket { upper_bound: 6_000_000, fee: 7_000 },
    FeeBracket { upper_bound: 7_000_000, fee: 8_000 },
    FeeBracket { upper_bound: 8_000_000, fee: 9_000 },
    FeeBracket { upper_bound: 9_000_000, fee: 10_000 },
    FeeBracket { upper_bound: 10_000_000, fee: 11_000 },
];

/// Tax agent (compliance) fee by financial level. Same bracket bounds as the
/// audit schedule, lower fees.
pub const TAX_FEE_SCHEDULE: &[FeeBracket] = &[
    FeeBracket { upper_bound: 500_000, fee: 1_200 },
    FeeBracket { upper_bound: 1_000_000, fee: 1_500 },
    FeeBracket { upper_bound: 2_000_000, fee: 1_800 },
    FeeBracket { upper_bound: 3_000_000, fee: 2_100 },
    FeeBracket { upper_bound: 4_000_000, fee: 2_400 },
    FeeBracket { upper_bound: 5_000_000, fee: 2_700 },
    FeeBracket { upper_bound: 6_000_000, fee: 3_000 },
    FeeBracket { upper_bound: 7_000_000, fee: 3_300 },
    FeeBracket { upper_bound: 8_000_000, fee: 3_500 },
    FeeBracket { upper_bound: 9_000_000, fee: 4_000 },
    FeeBracket { upper_bound: 10_000_000, fee: 4_500 },
];

/// Professional surcharge by base fee. Above the top bracket the audit
/// surcharge becomes unassessed (sentinel 0) while the tax surcharge stays a
/// flat TOP_TAX_SURCHARGE. Asymmetric on purpose: this reproduces the firm's
/// published table and is pending product-owner confirmation, do not "fix".
pub const PROFESSIONAL_SURCHARGE_SCHEDULE: &[SurchargeBracket] = &[
    SurchargeBracket { upper_bound: 1_000, audit: 150, tax: 150 },
    SurchargeBracket { upper_bound: 1_999, audit: 200, tax: 150 },
    SurchargeBracket { upper_bound: 2_999, audit: 250, tax: 200 },
    SurchargeBracket { upper_bound: 3_999, audit: 300, tax: 230 },
    SurchargeBracket { upper_bound: 4_999, audit: 350, tax: 250 },
    SurchargeBracket { upper_bound: 5_999, audit: 400, tax: 300 },
    SurchargeBracket { upper_bound: 6_999, audit: 450, tax: 300 },
    SurchargeBracket { upper_bound: 7_999, audit: 500, tax: 300 },
    SurchargeBracket { upper_bound: 8_999, audit: 550, tax: 300 },
    SurchargeBracket { upper_bound: 9_999, audit: 600, tax: 350 },
    SurchargeBracket { upper_bound: 12_999, audit: 650, tax: 350 },
];

/// Flat tax surcharge for base fees beyond the top surcharge bracket.
pub const TOP_TAX_SURCHARGE: i64 = 400;

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Generic step-function lookup: the fee of the first bracket whose bound is
/// at or above `level`, or None when the level exceeds the whole schedule.
pub fn lookup_fee(schedule: &[FeeBracket], level: Money) -> Option<Money> {
    schedule
        .iter()
        .find(|bracket| level <= Decimal::from(bracket.upper_bound))
        .map(|bracket| Decimal::from(bracket.fee))
}

/// Audit fee for a financial level. Sentinel 0 means "to be assessed".
pub fn audit_fee(level: Money) -> Money {
    lookup_fee(AUDIT_FEE_SCHEDULE, level).unwrap_or(Decimal::ZERO)
}

/// Tax agent fee for a financial level. Sentinel 0 means "to be assessed".
pub fn tax_fee(level: Money) -> Money {
    lookup_fee(TAX_FEE_SCHEDULE, level).unwrap_or(Decimal::ZERO)
}

/// Professional surcharge layered on a base fee.
///
/// A base fee of 0 is the manual-assessment sentinel: no schedule fee means
/// no schedule surcharge either.
pub fn professional_surcharge(base_fee: Money, kind: FeeKind) -> Money {
    if base_fee == Decimal::ZERO {
        return Decimal::ZERO;
    }
    for bracket in PROFESSIONAL_SURCHARGE_SCHEDULE {
        if base_fee <= Decimal::from(bracket.upper_bound) {
            let surcharge = match kind {
                FeeKind::Audit => bracket.audit,
                FeeKind::Tax => bracket.tax,
            };
            return Decimal::from(surcharge);
        }
    }
    match kind {
        FeeKind::Audit => Decimal::ZERO,
        FeeKind::Tax => Decimal::from(TOP_TAX_SURCHARGE),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_audit_fee_bracket_boundaries() {
        assert_eq!(audit_fee(dec!(0)), dec!(1_500));
        assert_eq!(audit_fee(dec!(500_000)), dec!(1_500));
        assert_eq!(audit_fee(dec!(500_001)), dec!(2_000));
        assert_eq!(audit_fee(dec!(2_000_000)), dec!(3_000));
        assert_eq!(audit_fee(dec!(9_500_000)), dec!(11_000));
        assert_eq!(audit_fee(dec!(10_000_000)), dec!(11_000));
    }

    #[test]
    fn test_tax_fee_bracket_boundaries() {
        assert_eq!(tax_fee(dec!(0)), dec!(1_200));
        assert_eq!(tax_fee(dec!(500_000)), dec!(1_200));
        assert_eq!(tax_fee(dec!(500_001)), dec!(1_500));
        assert_eq!(tax_fee(dec!(8_000_001)), dec!(4_000));
        assert_eq!(tax_fee(dec!(10_000_000)), dec!(4_500));
    }

    #[test]
    fn test_fees_above_top_bracket_are_sentinel_zero() {
        assert_eq!(audit_fee(dec!(10_000_001)), Decimal::ZERO);
        assert_eq!(audit_fee(dec!(11_000_000)), Decimal::ZERO);
        assert_eq!(tax_fee(dec!(10_000_001)), Decimal::ZERO);
        assert_eq!(tax_fee(dec!(50_000_000)), Decimal::ZERO);
    }

    #[test]
    fn test_schedules_are_nondecreasing_step_functions() {
        for schedule in [AUDIT_FEE_SCHEDULE, TAX_FEE_SCHEDULE] {
            for pair in schedule.windows(2) {
                assert!(pair[0].upper_bound < pair[1].upper_bound);
                assert!(pair[0].fee <= pair[1].fee);
            }
        }
        for pair in PROFESSIONAL_SURCHARGE_SCHEDULE.windows(2) {
            assert!(pair[0].upper_bound < pair[1].upper_bound);
            assert!(pair[0].audit <= pair[1].audit);
            assert!(pair[0].tax <= pair[1].tax);
        }
    }

    #[test]
    fn test_surcharge_zero_base_fee_has_zero_surcharge() {
        assert_eq!(professional_surcharge(dec!(0), FeeKind::Audit), dec!(0));
        assert_eq!(professional_surcharge(dec!(0), FeeKind::Tax), dec!(0));
    }

    #[test]
    fn test_surcharge_bottom_bracket_is_symmetric() {
        assert_eq!(professional_surcharge(dec!(1_000), FeeKind::Audit), dec!(150));
        assert_eq!(professional_surcharge(dec!(1_000), FeeKind::Tax), dec!(150));
    }

    #[test]
    fn test_surcharge_mid_brackets() {
        // 1500 and 1200 are the bottom schedule fees. The two columns
        // diverge from the 1999 bracket on: same base fee, different charge.
        assert_eq!(professional_surcharge(dec!(1_500), FeeKind::Audit), dec!(200));
        assert_eq!(professional_surcharge(dec!(1_500), FeeKind::Tax), dec!(150));
        assert_eq!(professional_surcharge(dec!(1_200), FeeKind::Tax), dec!(150));
        // 4500 is the top scheduled tax fee
        assert_eq!(professional_surcharge(dec!(4_500), FeeKind::Audit), dec!(350));
        assert_eq!(professional_surcharge(dec!(4_500), FeeKind::Tax), dec!(250));
        // 2000 sits just past the 1999 bound
        assert_eq!(professional_surcharge(dec!(2_000), FeeKind::Audit), dec!(250));
        assert_eq!(professional_surcharge(dec!(2_000), FeeKind::Tax), dec!(200));
        // 11000 is the top scheduled audit fee
        assert_eq!(professional_surcharge(dec!(11_000), FeeKind::Audit), dec!(650));
        assert_eq!(professional_surcharge(dec!(11_000), FeeKind::Tax), dec!(350));
    }

    #[test]
    fn test_surcharge_top_bracket_asymmetry() {
        // Above 12,999 the audit surcharge is unassessed while the tax
        // surcharge stays flat. Published table behavior, kept verbatim.
        assert_eq!(professional_surcharge(dec!(13_000), FeeKind::Audit), dec!(0));
        assert_eq!(professional_surcharge(dec!(13_000), FeeKind::Tax), dec!(400));
        assert_eq!(professional_surcharge(dec!(100_000), FeeKind::Tax), dec!(400));
    }
}
