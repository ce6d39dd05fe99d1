use std::collections::BTreeMap;

use eframe::egui::Color32;
use egui_plot::MarkerShape;
use palette::{FromColor, Hsl, Srgb};

use crate::data::model::{Sex, Species};

// ---------------------------------------------------------------------------
// Species palette
// ---------------------------------------------------------------------------

/// Hue in degrees for each species: orange, teal, purple.
fn species_hue(species: Species) -> f32 {
    match species {
        Species::Adelie => 28.0,
        Species::Gentoo => 185.0,
        Species::Chinstrap => 285.0,
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsl).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Species → colour, sex → marker
// ---------------------------------------------------------------------------

/// Fixed colour per species, shared by the sidebar checkboxes and the
/// scatter plot.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<Species, Color32>,
}

impl Default for SpeciesColors {
    fn default() -> Self {
        let mapping = Species::ALL
            .into_iter()
            .map(|sp| (sp, hsl_to_color32(Hsl::new(species_hue(sp), 0.7, 0.5))))
            .collect();
        SpeciesColors { mapping }
    }
}

impl SpeciesColors {
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

/// Marker used for each sex in the scatter plot.
pub fn marker_for(sex: Option<Sex>) -> MarkerShape {
    match sex {
        Some(Sex::Male) => MarkerShape::Circle,
        Some(Sex::Female) => MarkerShape::Diamond,
        None => MarkerShape::Square,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_conversion_hits_primaries() {
        assert_eq!(hsl_to_color32(Hsl::new(0.0, 1.0, 0.5)), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_color32(Hsl::new(120.0, 1.0, 0.5)), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_to_color32(Hsl::new(0.0, 0.0, 1.0)), Color32::WHITE);
    }

    #[test]
    fn species_get_distinct_colours() {
        let colors = SpeciesColors::default();
        let a = colors.color_for(Species::Adelie);
        let g = colors.color_for(Species::Gentoo);
        let c = colors.color_for(Species::Chinstrap);
        assert!(a != g && g != c && a != c);
        assert!(Species::ALL.iter().all(|&sp| colors.color_for(sp) != Color32::GRAY));
        // Adelie is warm, Gentoo is cool.
        assert!(a.r() > a.b());
        assert!(g.b() > g.r());
    }

    #[test]
    fn each_sex_has_its_own_marker() {
        assert_ne!(marker_for(Some(Sex::Male)), marker_for(Some(Sex::Female)));
        assert_ne!(marker_for(None), marker_for(Some(Sex::Male)));
    }
}
