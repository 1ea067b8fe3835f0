//! Built-in plant catalog
//!
//! Used whenever no catalog file is present. Covers common aquaponic
//! leafy greens, herbs, fruiting crops and one legume.

use crate::profile::PlantProfile;

/// Number of species in the built-in catalog
pub const FALLBACK_PLANT_COUNT: usize = 15;

fn plant(
    name: &str,
    category: &str,
    ph: (f64, f64),
    temp: (f64, f64),
    dissolved_oxygen: (f64, f64),
    nitrate: (f64, f64),
    description: &str,
) -> PlantProfile {
    PlantProfile {
        name: name.to_string(),
        category: category.to_string(),
        ph_min: ph.0,
        ph_max: ph.1,
        temp_min: temp.0,
        temp_max: temp.1,
        do_min: dissolved_oxygen.0,
        do_max: dissolved_oxygen.1,
        ammonia_max: 0.5,
        nitrate_min: nitrate.0,
        nitrate_max: nitrate.1,
        description: description.to_string(),
    }
}

/// The built-in species, in catalog order
pub fn fallback_plants() -> Vec<PlantProfile> {
    vec![
        plant(
            "Lettuce", "Leafy Green",
            (6.0, 7.0), (15.0, 20.0), (5.0, 8.0), (50.0, 400.0),
            "Fast-growing leafy green, perfect for aquaponics. High yield and nutrient-rich.",
        ),
        plant(
            "Basil", "Herb",
            (5.5, 6.5), (18.0, 25.0), (4.0, 7.0), (50.0, 400.0),
            "Aromatic herb that thrives in warm conditions. Great for culinary use.",
        ),
        plant(
            "Tomato", "Fruit Vegetable",
            (5.5, 6.5), (18.0, 24.0), (6.0, 8.0), (100.0, 300.0),
            "Popular aquaponic crop. Requires good oxygen levels and stable pH.",
        ),
        plant(
            "Cucumber", "Fruit Vegetable",
            (5.5, 6.5), (20.0, 25.0), (5.0, 7.0), (100.0, 300.0),
            "Fast-growing vine crop. Needs warm temperatures and good water quality.",
        ),
        plant(
            "Spinach", "Leafy Green",
            (6.0, 7.5), (10.0, 20.0), (4.0, 6.0), (50.0, 400.0),
            "Cold-tolerant leafy green. Rich in iron and vitamins.",
        ),
        plant(
            "Kale", "Leafy Green",
            (6.0, 7.5), (8.0, 22.0), (4.0, 7.0), (50.0, 400.0),
            "Superfood green. Very cold-tolerant and nutrient-dense.",
        ),
        plant(
            "Pepper", "Fruit Vegetable",
            (5.5, 6.5), (20.0, 26.0), (5.0, 8.0), (100.0, 300.0),
            "Warm-season crop. Requires consistent warm temperatures.",
        ),
        plant(
            "Mint", "Herb",
            (6.0, 7.0), (15.0, 22.0), (4.0, 6.0), (50.0, 400.0),
            "Hardy herb that grows well in aquaponics. Spreads quickly.",
        ),
        plant(
            "Swiss Chard", "Leafy Green",
            (6.0, 7.0), (10.0, 24.0), (4.0, 7.0), (50.0, 400.0),
            "Colorful and nutritious. Tolerates a wide temperature range.",
        ),
        plant(
            "Cilantro", "Herb",
            (6.0, 7.0), (10.0, 20.0), (4.0, 6.0), (50.0, 400.0),
            "Cool-season herb. Best grown in cooler temperatures.",
        ),
        plant(
            "Arugula", "Leafy Green",
            (6.0, 7.0), (10.0, 20.0), (4.0, 6.0), (50.0, 400.0),
            "Peppery leafy green. Fast-growing and cold-tolerant.",
        ),
        plant(
            "Strawberry", "Fruit",
            (5.5, 6.5), (15.0, 22.0), (5.0, 7.0), (100.0, 300.0),
            "Sweet fruit crop. Requires careful pH and temperature management.",
        ),
        plant(
            "Watercress", "Aquatic Plant",
            (6.0, 7.5), (10.0, 18.0), (6.0, 8.0), (50.0, 400.0),
            "Aquatic plant that loves high oxygen. Very nutritious.",
        ),
        plant(
            "Pak Choi", "Leafy Green",
            (6.0, 7.0), (12.0, 22.0), (4.0, 7.0), (50.0, 400.0),
            "Asian leafy green. Fast-growing and versatile in cooking.",
        ),
        plant(
            "Beans", "Legume",
            (6.0, 7.0), (18.0, 24.0), (5.0, 7.0), (50.0, 400.0),
            "Nitrogen-fixing legume. Good for aquaponic systems.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_size() {
        assert_eq!(fallback_plants().len(), FALLBACK_PLANT_COUNT);
    }

    #[test]
    fn test_fallback_names_unique() {
        let plants = fallback_plants();
        let names: HashSet<&str> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), plants.len());
    }

    #[test]
    fn test_fallback_bands_well_formed() {
        for p in fallback_plants() {
            assert!(p.inverted_bands().is_empty(), "{} has inverted bands", p.name);
        }
    }
}
