use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use cosec_fees_core::estimator::format::{format_fee, format_rm, format_total};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_object_table(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        if !print_estimate_table(res_map) {
            print_object_table(result);
        }
    } else {
        print_object_table(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Render a fee estimate the way the firm quotes it: sentinel fees become
/// "To be assessed" and missing totals become "Contact for Quote".
fn print_estimate_table(res_map: &serde_json::Map<String, Value>) -> bool {
    let (Some(level), Some(audit_fee), Some(audit_sur), Some(tax_fee), Some(tax_sur)) = (
        decimal_field(res_map, "financial_level"),
        decimal_field(res_map, "audit_fee"),
        decimal_field(res_map, "audit_surcharge"),
        decimal_field(res_map, "tax_fee"),
        decimal_field(res_map, "tax_surcharge"),
    ) else {
        return false;
    };

    let total = |fee: Decimal, surcharge: Decimal| {
        (fee != Decimal::ZERO).then(|| fee + surcharge)
    };

    let mut builder = Builder::default();
    builder.push_record(["Item", "Estimate"]);
    builder.push_record(["Financial Level", &format_rm(level)]);
    builder.push_record(["Audit Fee (annual)", &format_fee(audit_fee)]);
    builder.push_record(["Audit Surcharge", &format_fee(audit_sur)]);
    builder.push_record(["Total Audit", &format_total(total(audit_fee, audit_sur))]);
    builder.push_record(["Tax Agent Fee (annual)", &format_fee(tax_fee)]);
    builder.push_record(["Tax Surcharge", &format_fee(tax_sur)]);
    builder.push_record(["Total Tax", &format_total(total(tax_fee, tax_sur))]);
    if let Some(Value::String(range)) = res_map.get("accounting_fee_range") {
        builder.push_record(["Accounting (monthly)", range]);
    }
    println!("{}", Table::from(builder));
    true
}

fn decimal_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<Decimal> {
    match map.get(key)? {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

fn print_object_table(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers from the first object; rows missing a key print blank
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "—".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
