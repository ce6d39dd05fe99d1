use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical labels
// ---------------------------------------------------------------------------

/// A label in a categorical column that is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label '{label}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Penguin species. Declaration order is the order of first appearance in
/// the dataset, which is also the category order of the species chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn label(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub fn label(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

impl FromStr for Species {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|sp| sp.label() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "species",
                label: s.to_string(),
            })
    }
}

impl FromStr for Island {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Biscoe" => Ok(Island::Biscoe),
            "Dream" => Ok(Island::Dream),
            "Torgersen" => Ok(Island::Torgersen),
            other => Err(ParseLabelError {
                kind: "island",
                label: other.to_string(),
            }),
        }
    }
}

impl FromStr for Sex {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            other => Err(ParseLabelError {
                kind: "sex",
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// One of the four numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attribute {
    #[default]
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLength,
        Attribute::BillDepth,
        Attribute::FlipperLength,
        Attribute::BodyMass,
    ];

    pub fn column(self) -> Column {
        match self {
            Attribute::BillLength => Column::BillLength,
            Attribute::BillDepth => Column::BillDepth,
            Attribute::FlipperLength => Column::FlipperLength,
            Attribute::BodyMass => Column::BodyMass,
        }
    }

    pub fn name(self) -> &'static str {
        self.column().name()
    }
}

/// Every column of the dataset, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Species,
    Island,
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
    Sex,
    Year,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::BillLength,
        Column::BillDepth,
        Column::FlipperLength,
        Column::BodyMass,
        Column::Sex,
        Column::Year,
    ];

    /// Header name as it appears in `penguins.csv`.
    pub fn name(self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::BillLength => "bill_length_mm",
            Column::BillDepth => "bill_depth_mm",
            Column::FlipperLength => "flipper_length_mm",
            Column::BodyMass => "body_mass_g",
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the dataset
// ---------------------------------------------------------------------------

/// One measured penguin. Measurements and sex are missing for a handful of
/// rows in the source data.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub species: Species,
    pub island: Island,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: u16,
}

impl Observation {
    pub fn measurement(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::BillLength => self.bill_length_mm,
            Attribute::BillDepth => self.bill_depth_mm,
            Attribute::FlipperLength => self.flipper_length_mm,
            Attribute::BodyMass => self.body_mass_g,
        }
    }

    /// Cell text for the table views; missing values render as `NA`.
    pub fn cell(&self, column: Column) -> String {
        fn or_na<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_else(|| "NA".to_string())
        }
        match column {
            Column::Species => self.species.to_string(),
            Column::Island => self.island.to_string(),
            Column::BillLength => or_na(self.bill_length_mm),
            Column::BillDepth => or_na(self.bill_depth_mm),
            Column::FlipperLength => or_na(self.flipper_length_mm),
            Column::BodyMass => or_na(self.body_mass_g),
            Column::Sex => or_na(self.sex),
            Column::Year => self.year.to_string(),
        }
    }

    /// Ascending order of two rows on one column. `None` marks a missing
    /// value on either side so the caller can place it last.
    pub fn compare(&self, other: &Self, column: Column) -> Option<Ordering> {
        fn both<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Option<Ordering> {
            Some(cmp(a.as_ref()?, b.as_ref()?))
        }
        match column {
            Column::Species => Some(self.species.cmp(&other.species)),
            Column::Island => Some(self.island.cmp(&other.island)),
            Column::BillLength => both(self.bill_length_mm, other.bill_length_mm, f64::total_cmp),
            Column::BillDepth => both(self.bill_depth_mm, other.bill_depth_mm, f64::total_cmp),
            Column::FlipperLength => {
                both(self.flipper_length_mm, other.flipper_length_mm, f64::total_cmp)
            }
            Column::BodyMass => both(self.body_mass_g, other.body_mass_g, f64::total_cmp),
            Column::Sex => both(self.sex, other.sex, Sex::cmp),
            Column::Year => Some(self.year.cmp(&other.year)),
        }
    }

    /// Whether the value in `column` is missing.
    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::BillLength => self.bill_length_mm.is_none(),
            Column::BillDepth => self.bill_depth_mm.is_none(),
            Column::FlipperLength => self.flipper_length_mm.is_none(),
            Column::BodyMass => self.body_mass_g.is_none(),
            Column::Sex => self.sex.is_none(),
            Column::Species | Column::Island | Column::Year => false,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered, read-only table of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenguinDataset {
    pub observations: Vec<Observation>,
}

impl PenguinDataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Number of observations of the given species.
    pub fn count_species(&self, species: Species) -> usize {
        self.iter().filter(|o| o.species == species).count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a fully measured observation.
    pub(crate) fn obs(species: Species, bill_length: f64, body_mass: f64) -> Observation {
        Observation {
            species,
            island: Island::Dream,
            bill_length_mm: Some(bill_length),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(body_mass),
            sex: Some(Sex::Female),
            year: 2008,
        }
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for sp in Species::ALL {
            assert_eq!(sp.label().parse::<Species>(), Ok(sp));
        }
        assert_eq!("Torgersen".parse::<Island>(), Ok(Island::Torgersen));
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert_eq!(err.kind, "species");
        assert_eq!(err.to_string(), "unknown species label 'Emperor'");
        assert!("NA".parse::<Sex>().is_err());
    }

    #[test]
    fn missing_cells_render_as_na() {
        let mut o = obs(Species::Gentoo, 46.1, 4500.0);
        o.sex = None;
        o.bill_depth_mm = None;
        assert_eq!(o.cell(Column::Sex), "NA");
        assert_eq!(o.cell(Column::BillDepth), "NA");
        assert_eq!(o.cell(Column::BillLength), "46.1");
        assert_eq!(o.cell(Column::BodyMass), "4500");
        assert_eq!(o.cell(Column::Species), "Gentoo");
    }

    #[test]
    fn compare_reports_missing_values() {
        let a = obs(Species::Adelie, 39.1, 3750.0);
        let mut b = obs(Species::Chinstrap, 46.5, 3500.0);
        assert_eq!(a.compare(&b, Column::BillLength), Some(Ordering::Less));
        assert_eq!(a.compare(&b, Column::BodyMass), Some(Ordering::Greater));
        assert_eq!(a.compare(&b, Column::Species), Some(Ordering::Less));
        b.body_mass_g = None;
        assert_eq!(a.compare(&b, Column::BodyMass), None);
        assert!(b.is_missing(Column::BodyMass));
    }

    #[test]
    fn attribute_maps_to_numeric_column() {
        let o = obs(Species::Adelie, 39.1, 3750.0);
        assert_eq!(Attribute::BodyMass.name(), "body_mass_g");
        assert_eq!(o.measurement(Attribute::BillLength), Some(39.1));
        assert_eq!(Attribute::default(), Attribute::BillLength);
    }
}
