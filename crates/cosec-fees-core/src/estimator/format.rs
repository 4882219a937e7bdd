//! Consumer-side rendering of fee figures. The sentinel 0 must never be
//! shown as "RM0"; these helpers carry the firm's standard wording.

use crate::types::Money;
use rust_decimal::Decimal;

/// Format a whole-RM amount with thousands separators, e.g. "RM11,000".
pub fn format_rm(amount: Money) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("RM{}{}", sign, grouped)
}

/// A base fee or surcharge, with the manual-assessment sentinel spelled out.
pub fn format_fee(fee: Money) -> String {
    if fee == Decimal::ZERO {
        "To be assessed".to_string()
    } else {
        format_rm(fee)
    }
}

/// A fee-plus-surcharge total; None means no scheduled fee exists.
pub fn format_total(total: Option<Money>) -> String {
    match total {
        Some(t) => format_rm(t),
        None => "Contact for Quote".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_rm_groups_thousands() {
        assert_eq!(format_rm(dec!(0)), "RM0");
        assert_eq!(format_rm(dec!(800)), "RM800");
        assert_eq!(format_rm(dec!(1_500)), "RM1,500");
        assert_eq!(format_rm(dec!(11_000)), "RM11,000");
        assert_eq!(format_rm(dec!(2_500_000)), "RM2,500,000");
        assert_eq!(format_rm(dec!(-4_000)), "RM-4,000");
    }

    #[test]
    fn test_sentinel_fee_renders_as_assessment_message() {
        assert_eq!(format_fee(dec!(0)), "To be assessed");
        assert_eq!(format_fee(dec!(2_000)), "RM2,000");
    }

    #[test]
    fn test_missing_total_renders_as_quote_message() {
        assert_eq!(format_total(None), "Contact for Quote");
        assert_eq!(format_total(Some(dec!(2_250))), "RM2,250");
    }
}
