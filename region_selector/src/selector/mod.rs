use std::sync::Arc;

use itertools::Itertools;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::contracts::{FetchError, LocalityApi, Navigator};
use crate::data_transfer::{
    RegionCode, ScreenTarget, Selection, SelectionParams, SubRegionLoadStatus, SubRegionName,
    UNSET_SENTINEL,
};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("a region and a sub-region must both be selected")]
    IncompleteSelection,
}

#[derive(Default)]
struct SelectorState {
    regions: Vec<RegionCode>,
    sub_regions: Vec<SubRegionName>,
    selection: Selection,
    status: SubRegionLoadStatus,
    generation: u64,
}

/// Dependent-selection flow behind the landing screen: a list of region
/// codes, a list of sub-region names scoped to the selected region, and a
/// commit that hands the confirmed pair to the navigator.
///
/// Every fetch of sub-regions is tagged with a generation. A result is only
/// applied while its generation is still current, so a fetch superseded by a
/// newer region selection cannot overwrite the newer list.
pub struct RegionSelector {
    api: Arc<dyn LocalityApi>,
    navigator: Arc<dyn Navigator>,
    destination: ScreenTarget,
    state: Mutex<SelectorState>,
}

impl RegionSelector {
    pub fn new(
        api: Arc<dyn LocalityApi>,
        navigator: Arc<dyn Navigator>,
        destination: ScreenTarget,
    ) -> Self {
        Self {
            api,
            navigator,
            destination,
            state: Mutex::new(SelectorState::default()),
        }
    }

    /// Loads the full set of region codes, stored sorted ascending.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn initialize(&self) -> Result<(), FetchError> {
        let regions = self.api.list_regions().await?;
        let mut state = self.state.lock().await;
        state.regions = regions.into_iter().sorted().collect_vec();
        Ok(())
    }

    /// Records the selected region and fetches the sub-regions that belong
    /// to it. The sentinel value clears the selection without a fetch.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn select_region(&self, code: RegionCode) -> Result<(), FetchError> {
        if code == *UNSET_SENTINEL {
            let mut state = self.state.lock().await;
            state.selection = Selection::default();
            return Ok(());
        }

        let generation = {
            let mut state = self.state.lock().await;
            state.status = SubRegionLoadStatus::Loading;
            state.selection.region = Some(code.clone());
            state.selection.sub_region = None;
            state.sub_regions.clear();
            state.generation += 1;
            state.generation
        };

        let outcome = self.api.list_sub_regions(&code).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(region = %code, "discarding result of a superseded sub-region fetch");
            return Ok(());
        }
        match outcome {
            Ok(names) => {
                state.sub_regions = names.into_iter().sorted().collect_vec();
                state.status = SubRegionLoadStatus::Idle;
                Ok(())
            }
            Err(err) => {
                state.status = SubRegionLoadStatus::Failed;
                Err(err)
            }
        }
    }

    /// Membership in the currently loaded list is not checked.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn select_sub_region(&self, name: SubRegionName) {
        let mut state = self.state.lock().await;
        state.selection.sub_region = Some(name);
    }

    /// Hands the confirmed pair to the navigator. Does not wait for
    /// outstanding sub-region fetches.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn commit(&self) -> Result<(), SelectionError> {
        let selection = self.state.lock().await.selection.clone();
        let (Some(region), Some(sub_region)) = (selection.region, selection.sub_region) else {
            return Err(SelectionError::IncompleteSelection);
        };
        self.navigator.navigate(
            self.destination.clone(),
            SelectionParams { region, sub_region },
        );
        Ok(())
    }

    pub async fn regions(&self) -> Vec<RegionCode> {
        self.state.lock().await.regions.clone()
    }

    pub async fn sub_regions(&self) -> Vec<SubRegionName> {
        self.state.lock().await.sub_regions.clone()
    }

    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.clone()
    }

    pub async fn sub_region_status(&self) -> SubRegionLoadStatus {
        self.state.lock().await.status
    }
}
