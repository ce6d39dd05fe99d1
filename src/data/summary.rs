use std::collections::HashMap;

use super::model::{Attribute, Column, Island, PenguinDataset, Sex, Species};

// ---------------------------------------------------------------------------
// Equal-width histogram
// ---------------------------------------------------------------------------

/// Counts of a numeric column bucketed into equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    fn empty() -> Self {
        Histogram {
            start: 0.0,
            bin_width: 0.0,
            counts: Vec::new(),
        }
    }

    /// Centre of bin `i` on the value axis.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Largest bin count `histogram` will allocate; larger requests are clamped.
pub const MAX_BINS: usize = 1_000;

/// Bucket `attribute` into `bins` equal-width bins spanning the observed
/// min..max. Missing values are skipped and the maximum lands in the last bin.
pub fn histogram(dataset: &PenguinDataset, attribute: Attribute, bins: usize) -> Histogram {
    let bins = bins.min(MAX_BINS);
    let values: Vec<f64> = dataset
        .iter()
        .filter_map(|o| o.measurement(attribute))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() || bins == 0 {
        return Histogram::empty();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Every value identical: one unit-wide bin centred on it.
    if max <= min {
        return Histogram {
            start: min - 0.5,
            bin_width: 1.0,
            counts: vec![values.len()],
        };
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = ((v - min) / bin_width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Histogram {
        start: min,
        bin_width,
        counts,
    }
}

// ---------------------------------------------------------------------------
// Categorical counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesCount {
    pub species: Species,
    pub count: usize,
}

/// Observations per species, in order of first appearance.
pub fn species_counts(dataset: &PenguinDataset) -> Vec<SpeciesCount> {
    let mut counts: Vec<SpeciesCount> = Vec::new();
    for obs in dataset.iter() {
        match counts.iter_mut().find(|c| c.species == obs.species) {
            Some(c) => c.count += 1,
            None => counts.push(SpeciesCount {
                species: obs.species,
                count: 1,
            }),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Scatter series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub island: Island,
}

/// All plotted points sharing one species (colour) and sex (marker).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub sex: Option<Sex>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSeries {
    /// Legend label, e.g. `Adelie, male`.
    pub fn name(&self) -> String {
        let sex = self.sex.map(Sex::label).unwrap_or("unknown");
        format!("{}, {sex}", self.species)
    }
}

/// Group `x` vs `y` points by (species, sex) in order of first appearance.
/// Rows missing either coordinate are skipped.
pub fn scatter_series(dataset: &PenguinDataset, x: Attribute, y: Attribute) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for obs in dataset.iter() {
        let (Some(px), Some(py)) = (obs.measurement(x), obs.measurement(y)) else {
            continue;
        };
        let point = ScatterPoint {
            x: px,
            y: py,
            island: obs.island,
        };
        match series
            .iter_mut()
            .find(|s| s.species == obs.species && s.sex == obs.sex)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                species: obs.species,
                sex: obs.sex,
                points: vec![point],
            }),
        }
    }
    series
}

/// Island of every scatter point, keyed by series name and exact coordinates.
/// Points sharing a position within one series keep the first island seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IslandLookup {
    by_series: HashMap<String, HashMap<(u64, u64), Island>>,
}

impl IslandLookup {
    pub fn from_series(series: &[ScatterSeries]) -> Self {
        let mut by_series: HashMap<String, HashMap<(u64, u64), Island>> = HashMap::new();
        for s in series {
            let points = by_series.entry(s.name()).or_default();
            for p in &s.points {
                points.entry((p.x.to_bits(), p.y.to_bits())).or_insert(p.island);
            }
        }
        IslandLookup { by_series }
    }

    pub fn get(&self, series: &str, x: f64, y: f64) -> Option<Island> {
        self.by_series
            .get(series)?
            .get(&(x.to_bits(), y.to_bits()))
            .copied()
    }
}

// ---------------------------------------------------------------------------
// Table row order
// ---------------------------------------------------------------------------

/// Sort applied to a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub descending: bool,
}

/// Display order of the rows of `dataset`. Without a key this is dataset
/// order; with one the sort is stable and missing values go last in both
/// directions.
pub fn row_order(dataset: &PenguinDataset, sort: Option<SortKey>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dataset.len()).collect();
    let Some(key) = sort else {
        return order;
    };
    let rows = &dataset.observations;
    order.sort_by(|&a, &b| {
        let (ra, rb) = (&rows[a], &rows[b]);
        match ra.compare(rb, key.column) {
            Some(ord) if key.descending => ord.reverse(),
            Some(ord) => ord,
            None => ra
                .is_missing(key.column)
                .cmp(&rb.is_missing(key.column)),
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::tests::obs;
    use crate::data::model::Species::{Adelie, Chinstrap, Gentoo};

    fn sample() -> PenguinDataset {
        let mut rows = vec![
            obs(Gentoo, 50.0, 5000.0),
            obs(Adelie, 40.0, 3750.0),
            obs(Chinstrap, 45.0, 3700.0),
            obs(Adelie, 30.0, 3200.0),
            obs(Gentoo, 35.0, 4600.0),
        ];
        rows[2].sex = Some(Sex::Male);
        rows[4].sex = None;
        PenguinDataset::new(rows)
    }

    #[test]
    fn histogram_spans_min_to_max() {
        let h = histogram(&sample(), Attribute::BillLength, 4);
        assert_eq!(h.start, 30.0);
        assert_eq!(h.bin_width, 5.0);
        // 30 | 35 | 40 | 45, 50 (max is in the last bin)
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.bin_center(0), 32.5);
    }

    #[test]
    fn histogram_skips_missing_values() {
        let mut ds = sample();
        ds.observations[0].bill_length_mm = None;
        let h = histogram(&ds, Attribute::BillLength, 7);
        assert_eq!(h.counts.len(), 7);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn histogram_degenerate_inputs() {
        assert!(histogram(&sample(), Attribute::BillLength, 0).counts.is_empty());
        assert!(histogram(&PenguinDataset::default(), Attribute::BillLength, 30)
            .counts
            .is_empty());

        let flat = PenguinDataset::new(vec![obs(Adelie, 40.0, 1.0), obs(Gentoo, 40.0, 1.0)]);
        let h = histogram(&flat, Attribute::BillLength, 30);
        assert_eq!(h.counts, vec![2]);
        assert_eq!(h.bin_center(0), 40.0);
    }

    #[test]
    fn histogram_clamps_huge_bin_counts() {
        let ds = crate::data::loader::load_penguins().unwrap();
        let h = histogram(&ds, Attribute::BillLength, u32::MAX as usize);
        assert_eq!(h.counts.len(), MAX_BINS);
        assert_eq!(h.total(), 342);

        let h = histogram(&sample(), Attribute::BillLength, MAX_BINS + 1);
        assert_eq!(h.counts.len(), MAX_BINS);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn embedded_dataset_summaries() {
        let ds = crate::data::loader::load_penguins().unwrap();

        let h = histogram(&ds, Attribute::BillLength, 30);
        assert_eq!(h.counts.len(), 30);
        assert_eq!(h.total(), 342);
        assert_eq!(h.start, 32.1);

        let counts: Vec<(Species, usize)> =
            species_counts(&ds).iter().map(|c| (c.species, c.count)).collect();
        assert_eq!(counts, vec![(Adelie, 152), (Gentoo, 124), (Chinstrap, 68)]);

        let plotted: usize = scatter_series(&ds, Attribute::BillLength, Attribute::BodyMass)
            .iter()
            .map(|s| s.points.len())
            .sum();
        assert_eq!(plotted, 342);
    }

    #[test]
    fn species_counts_follow_first_appearance() {
        assert_eq!(
            species_counts(&sample()),
            vec![
                SpeciesCount { species: Gentoo, count: 2 },
                SpeciesCount { species: Adelie, count: 2 },
                SpeciesCount { species: Chinstrap, count: 1 },
            ]
        );
    }

    #[test]
    fn scatter_groups_by_species_and_sex() {
        let mut ds = sample();
        ds.observations[3].body_mass_g = None;
        let series = scatter_series(&ds, Attribute::BillLength, Attribute::BodyMass);

        let names: Vec<String> = series.iter().map(ScatterSeries::name).collect();
        assert_eq!(
            names,
            vec!["Gentoo, female", "Adelie, female", "Chinstrap, male", "Gentoo, unknown"]
        );
        // The Adelie row without body mass is dropped.
        assert_eq!(series[1].points.len(), 1);
        assert_eq!(series[1].points[0].y, 3750.0);
        let plotted: usize = series.iter().map(|s| s.points.len()).sum();
        assert_eq!(plotted, 4);
    }

    #[test]
    fn island_lookup_finds_hovered_points() {
        let mut ds = sample();
        ds.observations[0].island = Island::Biscoe;
        ds.observations[1].island = Island::Torgersen;
        let series = scatter_series(&ds, Attribute::BillLength, Attribute::BodyMass);
        let lookup = IslandLookup::from_series(&series);

        assert_eq!(lookup.get("Gentoo, female", 50.0, 5000.0), Some(Island::Biscoe));
        assert_eq!(lookup.get("Adelie, female", 40.0, 3750.0), Some(Island::Torgersen));
        // Right position, wrong series.
        assert_eq!(lookup.get("Adelie, male", 40.0, 3750.0), None);
        assert_eq!(lookup.get("Adelie, female", 40.0, 3750.5), None);
    }

    #[test]
    fn island_lookup_covers_every_embedded_point() {
        let ds = crate::data::loader::load_penguins().unwrap();
        let series = scatter_series(&ds, Attribute::BillLength, Attribute::BodyMass);
        let lookup = IslandLookup::from_series(&series);
        for s in &series {
            let name = s.name();
            assert!(s.points.iter().all(|p| lookup.get(&name, p.x, p.y).is_some()));
        }
    }

    #[test]
    fn row_order_sorts_stably_with_missing_last() {
        let mut ds = sample();
        ds.observations[1].body_mass_g = None;

        assert_eq!(row_order(&ds, None), vec![0, 1, 2, 3, 4]);

        let asc = SortKey { column: Column::BodyMass, descending: false };
        assert_eq!(row_order(&ds, Some(asc)), vec![3, 2, 4, 0, 1]);

        let desc = SortKey { descending: true, ..asc };
        assert_eq!(row_order(&ds, Some(desc)), vec![0, 4, 2, 3, 1]);

        // Ties keep dataset order.
        let by_species = SortKey { column: Column::Species, descending: false };
        assert_eq!(row_order(&ds, Some(by_species)), vec![1, 3, 0, 4, 2]);
    }
}
