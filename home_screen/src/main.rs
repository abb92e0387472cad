use std::sync::Arc;

use anyhow::Context;
use locality_search::contracts::LocalityFinder;
use region_selector::contracts::Navigator;
use region_selector::data_transfer::{RegionCode, ScreenTarget, SelectionParams, SubRegionName};
use region_selector::selector::RegionSelector;

const USAGE: &str = "usage: home_screen <REGION_CODE> <SUB_REGION_NAME>";

/// Stand-in for the mobile navigation stack: the committed selection is
/// logged instead of pushing a screen.
struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, target: ScreenTarget, params: SelectionParams) {
        tracing::info!(
            screen = %target,
            region = %params.region,
            sub_region = %params.sub_region,
            "navigating"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::init_tracing("home_screen");
    start().await
}

async fn start() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let region = args.next().context(USAGE)?;
    let sub_region = args.next().context(USAGE)?;

    let selector = RegionSelector::new(
        Arc::new(LocalityFinder::new()),
        Arc::new(TracingNavigator),
        ScreenTarget::from("points"),
    );

    selector.initialize().await?;
    let regions = selector.regions().await;
    tracing::info!(count = regions.len(), "loaded region codes");

    selector.select_region(RegionCode::from(region)).await?;
    let sub_regions = selector.sub_regions().await;
    let status = selector.sub_region_status().await;
    tracing::info!(count = sub_regions.len(), status = %status, "loaded sub-regions");

    selector
        .select_sub_region(SubRegionName::from(sub_region))
        .await;
    selector.commit().await?;
    Ok(())
}
