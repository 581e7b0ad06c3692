use clap::Args;
use serde::Serialize;
use serde_json::Value;

use house_hunt_core::listings::{price_history_series, Listing};
use house_hunt_core::types::{Money, Percent};

use crate::input;

/// Arguments for listing a catalog
#[derive(Args)]
pub struct ListingsArgs {
    /// Path to a listing catalog (JSON or YAML). Defaults to the bundled sample
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for price history
#[derive(Args)]
pub struct PriceHistoryArgs {
    /// Path to a listing catalog (JSON or YAML). Defaults to the bundled sample
    #[arg(long)]
    pub catalog: Option<String>,

    /// Only this listing id; all listings when omitted
    #[arg(long)]
    pub listing: Option<String>,
}

#[derive(Serialize)]
struct ListingSummary<'a> {
    id: &'a str,
    address: &'a str,
    neighborhood: &'a str,
    price: Money,
    price_per_sqft: Money,
    taxes_monthly: Money,
    common_charges_monthly: Money,
    min_down_pct: Percent,
    default_down_pct: Percent,
}

impl<'a> From<&'a Listing> for ListingSummary<'a> {
    fn from(l: &'a Listing) -> Self {
        ListingSummary {
            id: &l.id,
            address: l.display_name(),
            neighborhood: &l.neighborhood,
            price: l.price,
            price_per_sqft: l.price_per_area().round_dp(2),
            taxes_monthly: l.taxes_monthly,
            common_charges_monthly: l.common_charges_monthly,
            min_down_pct: l.min_down_pct,
            default_down_pct: l.default_down_pct(),
        }
    }
}

pub fn run_listings(args: ListingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    let summaries: Vec<ListingSummary> =
        catalog.listings.iter().map(ListingSummary::from).collect();
    Ok(serde_json::to_value(summaries)?)
}

pub fn run_price_history(args: PriceHistoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;

    let listings: Vec<&Listing> = match args.listing.as_deref() {
        Some(id) => vec![catalog.get(id).ok_or_else(|| {
            let known = catalog.ids().collect::<Vec<_>>().join(", ");
            format!("No listing with identifier '{id}' (known: {known})")
        })?],
        None => catalog.listings.iter().collect(),
    };

    let series = listings
        .into_iter()
        .map(price_history_series)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_value(series)?)
}
