//! The firm's published ad-hoc secretarial rate card. Professional fees
//! exclude government/agency charges (SSM, LHDN) except where a line says
//! otherwise; disbursements are billed separately.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CosecFeesError;
use crate::types::Money;
use crate::CosecFeesResult;

/// How a catalog line is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pricing {
    /// Flat fee.
    Fixed { amount: Money },
    /// Starting price; final quote depends on complexity.
    From { amount: Money },
    /// Charged per unit (per transfer, per day, per account...).
    PerUnit { amount: Money, unit: String },
    /// No list price; quoted per engagement.
    Quote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceFee {
    pub name: String,
    pub pricing: Pricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub category: String,
    pub services: Vec<ServiceFee>,
}

fn fixed(name: &str, amount: Money, notes: &str) -> ServiceFee {
    ServiceFee {
        name: name.to_string(),
        pricing: Pricing::Fixed { amount },
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    }
}

fn from(name: &str, amount: Money, notes: &str) -> ServiceFee {
    ServiceFee {
        name: name.to_string(),
        pricing: Pricing::From { amount },
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    }
}

fn per_unit(name: &str, amount: Money, unit: &str, notes: &str) -> ServiceFee {
    ServiceFee {
        name: name.to_string(),
        pricing: Pricing::PerUnit {
            amount,
            unit: unit.to_string(),
        },
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    }
}

fn quote(name: &str, notes: &str) -> ServiceFee {
    ServiceFee {
        name: name.to_string(),
        pricing: Pricing::Quote,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    }
}

fn category(name: &str, services: Vec<ServiceFee>) -> ServiceCategory {
    ServiceCategory {
        category: name.to_string(),
        services,
    }
}

/// The full ad-hoc rate card, grouped the way the firm publishes it.
pub fn service_catalog() -> Vec<ServiceCategory> {
    vec![
        category(
            "Annual Submission Service",
            vec![
                fixed(
                    "Annual Return Filing",
                    dec!(400),
                    "up to 5 directors/shareholders, +50 per additional (excl. SSM fees)",
                ),
                fixed(
                    "Unaudited/Audited Financial Statement Submission",
                    dec!(300),
                    "excl. SSM filing fees and online data entry",
                ),
                fixed(
                    "Beneficial Owner (BO) Submission/Update",
                    dec!(300),
                    "up to 3 beneficial owners, +100 each additional",
                ),
                fixed(
                    "SSM Fees for Annual Submission",
                    dec!(200),
                    "government filing fees",
                ),
            ],
        ),
        category(
            "Company Updates & Changes",
            vec![
                per_unit("Change of Business/Branch Address", dec!(100), "change", ""),
                per_unit(
                    "Company Name Reservation",
                    dec!(100),
                    "name",
                    "incl. SSM fees",
                ),
                per_unit("Change of Accounting Records Address", dec!(100), "change", ""),
                fixed("Change of Company Name", dec!(400), "incl. SSM fees"),
                fixed(
                    "Application for EPC (Exempt Private Company)",
                    dec!(800),
                    "incl. SSM fees",
                ),
                fixed("Change of Nature of Business", dec!(250), ""),
            ],
        ),
        category(
            "Constitution & Share Capital",
            vec![
                from(
                    "Preparation of Term Sheet",
                    dec!(1_500),
                    "drafting key investment terms",
                ),
                from(
                    "Preparation of Shareholder Agreement",
                    dec!(3_000),
                    "custom agreement for rights & protections",
                ),
                from(
                    "Preparation of Constitution",
                    dec!(2_000),
                    "drafting the company's governing rules",
                ),
                fixed("Adoption of Constitution", dec!(100), ""),
                fixed("Amendment/Abolition of M&A", dec!(500), "incl. SSM fees"),
                fixed(
                    "Share Allotment (first 3 allotments)",
                    dec!(300),
                    "+50/additional allotment, existing shareholders only",
                ),
                per_unit("Transfer of Shares", dec!(300), "transfer", "excl. stamp duty"),
                from(
                    "Capital Reduction/Conversion/Subdivision of Shares",
                    dec!(1_000),
                    "",
                ),
            ],
        ),
        category(
            "Directors & Shareholders",
            vec![
                per_unit("Update Director/Shareholder Particulars", dec!(100), "update", ""),
                fixed(
                    "Appointment of Corporate Representative & Authorized Representatives",
                    dec!(200),
                    "",
                ),
                per_unit("Appointment of Director", dec!(100), "director", ""),
                per_unit("Resignation of Director", dec!(100), "director", ""),
                fixed("Removal of Director", dec!(200), "excl. meeting/notice costs"),
                per_unit("Update BO Details", dec!(50), "BO", ""),
                per_unit("Cease as BO", dec!(50), "BO", ""),
            ],
        ),
        category(
            "Auditor, Tax Agent & Financial Year",
            vec![
                fixed(
                    "Fixing of 1st FYE & Appointment of Auditor/Tax Agent",
                    dec!(200),
                    "",
                ),
                fixed("Change of Auditor", dec!(150), ""),
                fixed("Change of Tax Agent", dec!(100), ""),
                fixed("Change of FYE", dec!(150), ""),
                fixed("Extension of Time for FS (EOT)", dec!(350), "incl. SSM fees"),
            ],
        ),
        category(
            "Dividends, Resolutions & Certifications",
            vec![
                fixed(
                    "Dividend Declaration",
                    dec!(300),
                    "for first, then +50 for 2nd onwards",
                ),
                fixed("Purchase of SSM Profile/Form", dec!(50), "incl. SSM fees"),
                per_unit(
                    "Bank Resolutions (Open/Close/Change Signatories)",
                    dec!(150),
                    "account",
                    "incl. CTC",
                ),
                per_unit("Certified True Copy (CTC) Documents", dec!(5), "form", ""),
            ],
        ),
        category(
            "Meetings, Delivery & Misc.",
            vec![
                per_unit("Secretary Meeting Attendance", dec!(700), "day", "AGM / EGM"),
                per_unit(
                    "Attending Matters Outside Office",
                    dec!(300),
                    "hour/pax",
                    "other than AGM / EGM, excl. travel",
                ),
                fixed("Courier Service", dec!(10), "+ delivery fee"),
                from("Instant Delivery", dec!(50), "+ delivery fee"),
                per_unit(
                    "Virtual Business Address (mail notification & scanning)",
                    dec!(1_800),
                    "year",
                    "",
                ),
            ],
        ),
        category(
            "Termination, Strike-Off & Winding Up",
            vec![
                from(
                    "Strike-Off Application (Dormant Co.)",
                    dec!(3_000),
                    "excl. SSM fees",
                ),
                from("Members' Voluntary Winding Up", dec!(10_000), ""),
            ],
        ),
        category(
            "Business & Corporate Services",
            vec![
                fixed(
                    "LLP Registration",
                    dec!(1_888),
                    "incl. SSM fee, complete registration package",
                ),
                quote("Business License", "various license types available"),
                quote("Accounting & Bookkeeping", "dormant: 800, monthly: 1,800"),
                from("Tax Filing", dec!(1_500), "corporate tax preparation"),
                per_unit("Audit", dec!(1_500), "report", "starting price per report"),
                from(
                    "Employment Pass (Expatriates)",
                    dec!(10_000),
                    "complete EP application",
                ),
                from("HR & Employment", dec!(1_500), "HR consultation & setup"),
                per_unit(
                    "Payroll Outsourcing",
                    dec!(80),
                    "headcount",
                    "monthly management, starting price",
                ),
                quote("Trademark Registration", "intellectual property protection"),
                from("Corporate Website", dec!(4_500), "professional web development"),
            ],
        ),
    ]
}

/// Case-insensitive substring search across all catalog lines.
pub fn find_service(query: &str) -> Option<ServiceFee> {
    let needle = query.to_lowercase();
    service_catalog()
        .into_iter()
        .flat_map(|c| c.services)
        .find(|s| s.name.to_lowercase().contains(&needle))
}

/// One category by (case-insensitive) name.
pub fn catalog_for(category_name: &str) -> CosecFeesResult<ServiceCategory> {
    let needle = category_name.to_lowercase();
    service_catalog()
        .into_iter()
        .find(|c| c.category.to_lowercase().contains(&needle))
        .ok_or_else(|| CosecFeesError::UnknownCategory(category_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_has_all_published_categories() {
        let catalog = service_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.iter().all(|c| !c.services.is_empty()));
    }

    #[test]
    fn test_find_service_is_case_insensitive() {
        let fee = find_service("annual return").unwrap();
        assert_eq!(fee.pricing, Pricing::Fixed { amount: dec!(400) });
        assert!(find_service("no such service").is_none());
    }

    #[test]
    fn test_catalog_for_matches_partial_category() {
        let cat = catalog_for("directors").unwrap();
        assert_eq!(cat.category, "Directors & Shareholders");
        assert_eq!(cat.services.len(), 7);
    }

    #[test]
    fn test_catalog_for_unknown_category_errors() {
        let err = catalog_for("payroll taxes").unwrap_err();
        assert!(err.to_string().contains("Unknown service category"));
    }

    #[test]
    fn test_per_unit_pricing_carries_its_unit() {
        let transfer = find_service("Transfer of Shares").unwrap();
        match transfer.pricing {
            Pricing::PerUnit { amount, ref unit } => {
                assert_eq!(amount, dec!(300));
                assert_eq!(unit, "transfer");
            }
            ref other => panic!("expected per-unit pricing, got {:?}", other),
        }
    }
}
