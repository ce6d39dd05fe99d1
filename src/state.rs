use std::sync::Arc;

use crate::color::SpeciesColors;
use crate::data::filter::{all_species, filter_species, SpeciesSet};
use crate::data::model::{Attribute, Column, PenguinDataset, Species};
use crate::data::summary::{
    histogram, row_order, scatter_series, species_counts, Histogram, IslandLookup, ScatterSeries,
    SortKey, SpeciesCount,
};
use crate::reactive::Memo;

/// Bounds of the seaborn bin slider.
pub const SEABORN_BINS_RANGE: std::ops::RangeInclusive<u32> = 10..=100;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Current value of every sidebar control.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub attribute: Attribute,
    /// Bins of the interactive bill-length histogram (at least 1).
    pub plotly_bins: u32,
    /// Seaborn slider value, within [`SEABORN_BINS_RANGE`].
    pub seaborn_bins: u32,
    pub species: SpeciesSet,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            attribute: Attribute::default(),
            plotly_bins: 30,
            seaborn_bins: 30,
            species: all_species(),
        }
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// The five output cards of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    FilteredTable,
    FullGrid,
    BillHistogram,
    SpeciesChart,
    Scatter,
}

impl Card {
    pub fn title(self) -> &'static str {
        match self {
            Card::FilteredTable => "Data Table of Penguins",
            Card::FullGrid => "Data Grid of Penguins",
            Card::BillHistogram => "Distribution of Penguins bill length",
            Card::SpeciesChart => "Distribution of Penguin Species Studied",
            Card::Scatter => "Bill Length vs. Body Mass Visual with Plotly",
        }
    }
}

/// Click-to-sort state of one table, plus its memoised row order.
#[derive(Debug, Default)]
pub struct TableState {
    pub sort: Option<SortKey>,
    /// Keyed on (sort, generation of the source view).
    order: Memo<(Option<SortKey>, usize), Vec<usize>>,
}

impl TableState {
    /// Header click: sort ascending by a new column, or flip direction.
    pub fn click_header(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(key) if key.column == column => Some(SortKey {
                column,
                descending: !key.descending,
            }),
            _ => Some(SortKey {
                column,
                descending: false,
            }),
        };
    }

    /// Display order of `data`, recomputed when the sort or `generation`
    /// changes.
    pub fn row_order(&mut self, data: &PenguinDataset, generation: usize) -> &[usize] {
        let sort = self.sort;
        self.order.get(&(sort, generation), |_| {
            log::debug!("Sorting {} rows by {sort:?}", data.len());
            row_order(data, sort)
        })
    }

    #[cfg(test)]
    pub fn sort_runs(&self) -> usize {
        self.order.runs()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The dataset, loaded once before the window opens.
    pub dataset: Arc<PenguinDataset>,

    /// Sidebar inputs.
    pub selection: SelectionState,

    pub filtered_table: TableState,
    pub full_grid: TableState,

    pub colors: SpeciesColors,

    /// Whether the right-hand sidebar is shown.
    pub sidebar_open: bool,

    /// Card currently expanded to fill the central panel.
    pub full_screen: Option<Card>,

    filtered: Memo<SpeciesSet, Arc<PenguinDataset>>,
    bill_histogram: Memo<u32, Histogram>,
    species_chart: Memo<(), Vec<SpeciesCount>>,
    scatter: Memo<(), Vec<ScatterSeries>>,
    islands: Memo<(), Arc<IslandLookup>>,
}

impl AppState {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            selection: SelectionState::default(),
            filtered_table: TableState::default(),
            full_grid: TableState::default(),
            colors: SpeciesColors::default(),
            sidebar_open: true,
            full_screen: None,
            filtered: Memo::new(),
            bill_histogram: Memo::new(),
            species_chart: Memo::new(),
            scatter: Memo::new(),
            islands: Memo::new(),
        }
    }

    /// Observations of the selected species. Recomputed only when the
    /// species selection changes.
    pub fn filtered_view(&mut self) -> Arc<PenguinDataset> {
        let dataset = &self.dataset;
        self.filtered
            .get(&self.selection.species, |species| {
                log::debug!("Filtering by species {species:?}");
                Arc::new(filter_species(dataset, species))
            })
            .clone()
    }

    /// Generation of the filtered view, bumped on every recomputation.
    pub fn filtered_generation(&self) -> usize {
        self.filtered.runs()
    }

    /// Bill-length histogram over the full dataset with the requested bins.
    pub fn bill_histogram(&mut self) -> &Histogram {
        let dataset = &self.dataset;
        self.bill_histogram.get(&self.selection.plotly_bins, |&bins| {
            log::debug!("Binning bill_length_mm into {bins} bins");
            histogram(dataset, Attribute::BillLength, bins as usize)
        })
    }

    /// Observation count per species over the full dataset.
    pub fn species_chart(&mut self) -> &[SpeciesCount] {
        let dataset = &self.dataset;
        self.species_chart.get(&(), |_| {
            log::debug!("Counting species");
            species_counts(dataset)
        })
    }

    /// Bill length vs body mass points over the full dataset.
    pub fn scatter(&mut self) -> &[ScatterSeries] {
        let dataset = &self.dataset;
        self.scatter.get(&(), |_| bill_vs_mass(dataset))
    }

    /// Hover lookup for the scatter points, built once.
    pub fn scatter_islands(&mut self) -> Arc<IslandLookup> {
        let dataset = &self.dataset;
        let series = self.scatter.get(&(), |_| bill_vs_mass(dataset));
        self.islands
            .get(&(), |_| Arc::new(IslandLookup::from_series(series)))
            .clone()
    }

    /// Toggle a single species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        let selected = &mut self.selection.species;
        if !selected.remove(&species) {
            selected.insert(species);
        }
    }

    /// Select all species.
    pub fn select_all(&mut self) {
        self.selection.species = all_species();
    }

    /// Deselect all species.
    pub fn select_none(&mut self) {
        self.selection.species.clear();
    }

    /// Expand `card`, or restore the grid if it is already expanded.
    pub fn toggle_full_screen(&mut self, card: Card) {
        self.full_screen = match self.full_screen {
            Some(current) if current == card => None,
            _ => Some(card),
        };
    }
}

fn bill_vs_mass(dataset: &PenguinDataset) -> Vec<ScatterSeries> {
    log::debug!("Building scatter series");
    scatter_series(dataset, Attribute::BillLength, Attribute::BodyMass)
}
