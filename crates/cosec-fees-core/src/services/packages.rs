//! Fixed-price packages: company incorporation and the ongoing secretarial
//! retainer plans.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncorporationPackage {
    pub list_price: Money,
    pub promo_price: Money,
    /// SSM incorporation fee, already included in both prices.
    pub ssm_filing_fee: Money,
    pub inclusions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetainerPlan {
    pub name: String,
    pub price: Money,
    pub cycle: BillingCycle,
    pub features: Vec<String>,
}

/// The one-time incorporation package for a Sdn. Bhd.
pub fn incorporation_package() -> IncorporationPackage {
    IncorporationPackage {
        list_price: dec!(1_800),
        promo_price: dec!(1_499),
        ssm_filing_fee: dec!(1_010),
        inclusions: vec![
            "Company Name Registration".to_string(),
            "SSM Filing Fees Included".to_string(),
            "1 set Bank Account Opening Resolution".to_string(),
            "First Board Resolution".to_string(),
            "24/7 Access to Client Portal".to_string(),
        ],
    }
}

/// Ongoing secretarial retainer plans, cheapest first.
pub fn retainer_plans() -> Vec<RetainerPlan> {
    vec![
        RetainerPlan {
            name: "Basic".to_string(),
            price: dec!(89),
            cycle: BillingCycle::Monthly,
            features: vec![
                "Registered Office Address".to_string(),
                "Licensed Company Secretary".to_string(),
                "Basic Compliance Alerts".to_string(),
                "Document Storage Portal".to_string(),
                "Secure Digital Identity & Signature".to_string(),
            ],
        },
        RetainerPlan {
            name: "Annual Package".to_string(),
            price: dec!(1_500),
            cycle: BillingCycle::Yearly,
            features: vec![
                "All Features in Basic Plan".to_string(),
                "Annual General Meeting (AGM) Preparation".to_string(),
                "Annual Filing with SSM (Annual Return, AFS, BO)".to_string(),
                "Priority Compliance Support".to_string(),
                "Priority Support Response".to_string(),
            ],
        },
    ]
}
