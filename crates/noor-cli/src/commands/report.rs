use anyhow::Result;

use noor_application::ReportService;

use super::AppContext;

pub async fn run(context: &AppContext) -> Result<()> {
    let report = ReportService::new(context.store.clone()).weekly_report().await;
    println!("{}", report);
    Ok(())
}
