use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Observation, PenguinDataset, Species};

/// The Palmer Penguins table (`penguins.csv`), embedded at build time.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

/// Marker used by the source data for a missing value.
const MISSING: &str = "NA";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the Palmer Penguins dataset.
///
/// Called once before the window opens; the result is never mutated.
pub fn load_penguins() -> Result<PenguinDataset> {
    let dataset = parse_csv(PENGUINS_CSV).context("parsing embedded penguins.csv")?;
    log::info!(
        "Loaded {} penguins ({})",
        dataset.len(),
        Species::ALL
            .iter()
            .map(|&sp| format!("{sp}: {}", dataset.count_species(sp)))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV record. Columns are matched by header name, so column order
/// in the file does not matter.
#[derive(Debug, Deserialize)]
struct RawRecord {
    species: String,
    island: String,
    bill_length_mm: String,
    bill_depth_mm: String,
    flipper_length_mm: String,
    body_mass_g: String,
    sex: String,
    year: u16,
}

/// Parse a `penguins.csv`-shaped document. `NA` or an empty field marks a
/// missing measurement or sex; species and island are required.
fn parse_csv(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut observations = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        // The header is line 1.
        let line = row_no + 2;
        let raw = result.with_context(|| format!("line {line}"))?;
        let obs = Observation {
            species: raw
                .species
                .parse()
                .with_context(|| format!("line {line}, species"))?,
            island: raw
                .island
                .parse()
                .with_context(|| format!("line {line}, island"))?,
            bill_length_mm: parse_measurement(&raw.bill_length_mm, line, "bill_length_mm")?,
            bill_depth_mm: parse_measurement(&raw.bill_depth_mm, line, "bill_depth_mm")?,
            flipper_length_mm: parse_measurement(
                &raw.flipper_length_mm,
                line,
                "flipper_length_mm",
            )?,
            body_mass_g: parse_measurement(&raw.body_mass_g, line, "body_mass_g")?,
            sex: match missing_or(&raw.sex) {
                None => None,
                Some(s) => Some(
                    s.parse()
                        .with_context(|| format!("line {line}, sex"))?,
                ),
            },
            year: raw.year,
        };
        observations.push(obs);
    }

    Ok(PenguinDataset::new(observations))
}

fn missing_or(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() || s == MISSING {
        None
    } else {
        Some(s)
    }
}

fn parse_measurement(s: &str, line: usize, col: &str) -> Result<Option<f64>> {
    missing_or(s)
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("line {line}, {col}: '{tok}' is not a number"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::{Column, Island, Sex};

    const HEADER: &str =
        "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n";

    #[test]
    fn embedded_dataset_has_expected_shape() {
        let ds = load_penguins().unwrap();
        assert_eq!(ds.len(), 344);
        assert_eq!(ds.count_species(Species::Adelie), 152);
        assert_eq!(ds.count_species(Species::Gentoo), 124);
        assert_eq!(ds.count_species(Species::Chinstrap), 68);

        let no_measurements = ds
            .iter()
            .filter(|o| o.bill_length_mm.is_none() && o.body_mass_g.is_none())
            .count();
        assert_eq!(no_measurements, 2);
        assert_eq!(ds.iter().filter(|o| o.is_missing(Column::Sex)).count(), 11);
    }

    #[test]
    fn first_row_is_parsed_field_by_field() {
        let ds = load_penguins().unwrap();
        let first = &ds.observations[0];
        assert_eq!(first.species, Species::Adelie);
        assert_eq!(first.island, Island::Torgersen);
        assert_eq!(first.bill_length_mm, Some(39.1));
        assert_eq!(first.bill_depth_mm, Some(18.7));
        assert_eq!(first.flipper_length_mm, Some(181.0));
        assert_eq!(first.body_mass_g, Some(3750.0));
        assert_eq!(first.sex, Some(Sex::Male));
        assert_eq!(first.year, 2007);
    }

    #[test]
    fn na_and_empty_fields_are_missing() {
        let text = format!("{HEADER}Gentoo,Biscoe,NA,,NA,NA,NA,2009\n");
        let ds = parse_csv(&text).unwrap();
        let o = &ds.observations[0];
        assert_eq!(o.bill_length_mm, None);
        assert_eq!(o.bill_depth_mm, None);
        assert_eq!(o.sex, None);
        assert_eq!(o.species, Species::Gentoo);
    }

    #[test]
    fn bad_measurement_names_row_and_column() {
        let text = format!("{HEADER}Adelie,Dream,abc,18,190,3700,male,2008\n");
        let err = parse_csv(&text).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2, bill_length_mm"), "{msg}");
    }

    #[test]
    fn unknown_species_is_an_error() {
        let text = format!("{HEADER}Emperor,Dream,39,18,190,3700,male,2008\n");
        let msg = format!("{:#}", parse_csv(&text).unwrap_err());
        assert!(msg.contains("unknown species label 'Emperor'"), "{msg}");
        assert!(msg.contains("line 2, species"), "{msg}");
    }

    #[test]
    fn errors_report_the_file_line() {
        let text = format!(
            "{HEADER}Adelie,Dream,39,18,190,3700,male,2008\nAdelie,Dream,39,18,190,3700,unknown,2008\n"
        );
        let msg = format!("{:#}", parse_csv(&text).unwrap_err());
        assert!(msg.contains("line 3, sex"), "{msg}");
    }
}
