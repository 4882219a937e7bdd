use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use cosec_fees_core::estimator::schedule::{
    FeeBracket, AUDIT_FEE_SCHEDULE, PROFESSIONAL_SURCHARGE_SCHEDULE, TAX_FEE_SCHEDULE,
    TOP_TAX_SURCHARGE,
};

/// Arguments for printing a fee schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Which schedule to print
    #[arg(long, value_enum, default_value = "audit")]
    pub kind: ScheduleKind,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ScheduleKind {
    Audit,
    Tax,
    Surcharge,
}

/// One printable row of a base-fee schedule. `level_up_to` of None marks the
/// open top bracket, where the fee requires manual assessment.
#[derive(Serialize)]
struct FeeRow {
    level_up_to: Option<i64>,
    fee: Option<i64>,
}

#[derive(Serialize)]
struct SurchargeRow {
    base_fee_up_to: Option<i64>,
    audit_surcharge: Option<i64>,
    tax_surcharge: i64,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = match args.kind {
        ScheduleKind::Audit => fee_rows(AUDIT_FEE_SCHEDULE)?,
        ScheduleKind::Tax => fee_rows(TAX_FEE_SCHEDULE)?,
        ScheduleKind::Surcharge => surcharge_rows()?,
    };
    Ok(rows)
}

fn fee_rows(schedule: &[FeeBracket]) -> Result<Value, Box<dyn std::error::Error>> {
    let mut rows: Vec<FeeRow> = schedule
        .iter()
        .map(|b| FeeRow {
            level_up_to: Some(b.upper_bound),
            fee: Some(b.fee),
        })
        .collect();
    rows.push(FeeRow {
        level_up_to: None,
        fee: None,
    });
    Ok(serde_json::to_value(rows)?)
}

fn surcharge_rows() -> Result<Value, Box<dyn std::error::Error>> {
    let mut rows: Vec<SurchargeRow> = PROFESSIONAL_SURCHARGE_SCHEDULE
        .iter()
        .map(|b| SurchargeRow {
            base_fee_up_to: Some(b.upper_bound),
            audit_surcharge: Some(b.audit),
            tax_surcharge: b.tax,
        })
        .collect();
    // Top bracket: audit unassessed, tax flat
    rows.push(SurchargeRow {
        base_fee_up_to: None,
        audit_surcharge: None,
        tax_surcharge: TOP_TAX_SURCHARGE,
    });
    Ok(serde_json::to_value(rows)?)
}
