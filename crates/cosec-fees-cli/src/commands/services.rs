use clap::Args;
use serde_json::Value;

use cosec_fees_core::services::catalog;
use cosec_fees_core::services::packages;

/// Arguments for browsing the service rate card
#[derive(Args)]
pub struct ServicesArgs {
    /// Show a single category (case-insensitive substring match)
    #[arg(long)]
    pub category: Option<String>,

    /// Look up a single service by name
    #[arg(long, conflicts_with = "category")]
    pub find: Option<String>,
}

pub fn run_services(args: ServicesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(ref query) = args.find {
        let service = catalog::find_service(query)
            .ok_or_else(|| format!("No service matching '{}'", query))?;
        return Ok(serde_json::to_value(service)?);
    }
    if let Some(ref name) = args.category {
        let category = catalog::catalog_for(name)?;
        return Ok(serde_json::to_value(category)?);
    }
    Ok(serde_json::to_value(catalog::service_catalog())?)
}

pub fn run_packages() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::json!({
        "incorporation": packages::incorporation_package(),
        "retainer_plans": packages::retainer_plans(),
    }))
}
