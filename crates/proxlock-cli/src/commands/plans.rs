use anyhow::Result;

use proxlock_core::billing::PlanFetcher;
use proxlock_core::plans::{self, build_feature_rows, find_plan};
use proxlock_core::AppConfig;

/// Fetch the plan catalog and print it to stdout.
pub async fn run(config: &AppConfig) -> Result<()> {
    let fetcher = PlanFetcher::new(&config.billing)?;
    let fetched = fetcher.fetch_plans().await?;

    for plan in &fetched {
        println!("{} ({})", plan.name, plan.id);
        if let Some(fee) = &plan.fee {
            println!("  price: {}/mo", fee.amount_formatted);
        }
        if let Some(days) = plan.free_trial_days {
            if days > 0 {
                println!("  trial: {days} days");
            }
        }
        if let Some(description) = &plan.description {
            println!("  {description}");
        }
        println!();
    }

    let rows = build_feature_rows(
        find_plan(&fetched, plans::FREE_PLAN_ID),
        find_plan(&fetched, plans::PLUS_PLAN_ID),
        find_plan(&fetched, plans::PRO_PLAN_ID),
    );
    if !rows.is_empty() {
        println!(
            "{:<30} {:>12} {:>12} {:>12}",
            "Feature", "Free", "Plus", "Pro"
        );
        for row in rows {
            println!(
                "{:<30} {:>12} {:>12} {:>12}",
                row.label, row.free, row.plus, row.pro
            );
        }
    }

    Ok(())
}
