use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Species filter
// ---------------------------------------------------------------------------

/// The species checked in the sidebar. An empty set selects nothing.
pub type SpeciesSet = BTreeSet<Species>;

/// Every species selected (the initial sidebar state).
pub fn all_species() -> SpeciesSet {
    Species::ALL.into_iter().collect()
}

/// Return indices of observations whose species is in `selected`, in
/// dataset order.
pub fn filtered_indices(dataset: &PenguinDataset, selected: &SpeciesSet) -> Vec<usize> {
    dataset
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| selected.contains(&obs.species))
        .map(|(i, _)| i)
        .collect()
}

/// Build the filtered view: a new dataset holding exactly the observations
/// whose species is selected, preserving their relative order.
pub fn filter_species(dataset: &PenguinDataset, selected: &SpeciesSet) -> PenguinDataset {
    let observations = filtered_indices(dataset, selected)
        .into_iter()
        .map(|i| dataset.observations[i].clone())
        .collect();
    PenguinDataset::new(observations)
}
