use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use cosec_fees_core::estimator::estimate::{self, FinancialInputs};

use crate::input;

/// Arguments for fee estimation
#[derive(Args)]
pub struct EstimateArgs {
    /// Total revenue (RM)
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Total assets (RM)
    #[arg(long)]
    pub assets: Option<Decimal>,

    /// Total expenses (RM)
    #[arg(long)]
    pub expenses: Option<Decimal>,

    /// Path to JSON input file (alternative to the flags above)
    #[arg(long, conflicts_with_all = ["revenue", "assets", "expenses"])]
    pub input: Option<String>,

    /// Reject negative figures instead of treating them as zero
    #[arg(long)]
    pub strict: bool,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = gather_inputs(&args)?;
    if args.strict {
        fin.validate()?;
    }
    let result = estimate::estimate_fees(&fin)?;
    Ok(serde_json::to_value(result)?)
}

fn gather_inputs(args: &EstimateArgs) -> Result<FinancialInputs, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if args.revenue.is_some() || args.assets.is_some() || args.expenses.is_some() {
        return Ok(FinancialInputs {
            revenue: args.revenue,
            total_assets: args.assets,
            total_expenses: args.expenses,
        });
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Err("--revenue/--assets/--expenses, --input <file.json>, or piped stdin required".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flags_map_to_financial_inputs() {
        let args = EstimateArgs {
            revenue: Some(dec!(600_000)),
            assets: None,
            expenses: Some(dec!(400_000)),
            input: None,
            strict: false,
        };
        let fin = gather_inputs(&args).unwrap();
        assert_eq!(fin.revenue, Some(dec!(600_000)));
        assert_eq!(fin.total_assets, None);
        assert_eq!(fin.total_expenses, Some(dec!(400_000)));
    }

    #[test]
    fn test_strict_flag_rejects_negative_revenue() {
        let args = EstimateArgs {
            revenue: Some(dec!(-1)),
            assets: None,
            expenses: None,
            input: None,
            strict: true,
        };
        assert!(run_estimate(args).is_err());
    }
}
