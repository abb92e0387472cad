use serde::Serialize;
use shared_kernel::string_key;

string_key!(RegionCode);
string_key!(SubRegionName);
string_key!(ScreenTarget);

/// Picker value reserved for "nothing selected".
pub const UNSET_SENTINEL: &str = "0";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Selection {
    pub region: Option<RegionCode>,
    pub sub_region: Option<SubRegionName>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.region.is_some() && self.sub_region.is_some()
    }
}

/// Payload handed to the navigator when the user confirms their selection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SelectionParams {
    pub region: RegionCode,
    pub sub_region: SubRegionName,
}

/// Status of the sub-region list. `Failed` is a terminal state; selecting a
/// region again starts a fresh fetch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubRegionLoadStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

impl SubRegionLoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubRegionLoadStatus::Idle => "pick a sub-region",
            SubRegionLoadStatus::Loading => "loading sub-regions...",
            SubRegionLoadStatus::Failed => "failed to load sub-regions",
        }
    }
}

impl std::fmt::Display for SubRegionLoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
