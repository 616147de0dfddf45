use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::sound::{Cat, Cow, Dog};
use crate::types::{AnimalSpec, Farm, Species};

/// The animals that live on the farm when no farm file is given
pub fn default_animals() -> (Dog, Cat, Cow) {
    (Dog::new("Buddy"), Cat::new("Whiskers"), Cow::new("Bessie"))
}

/// Same animals as `default_animals`, as farm file entries
pub fn default_farm() -> Farm {
    let (dog, cat, cow) = default_animals();
    vec![
        AnimalSpec::new(dog.name, Species::Dog),
        AnimalSpec::new(cat.name, Species::Cat),
        AnimalSpec::new(cow.name, Species::Cow),
    ]
}

// Parse farm JSON text
pub fn parse_farm(source: &str) -> Result<Farm> {
    let farm: Farm = serde_json::from_str(source)?;
    Ok(farm)
}

// Read a farm file from disk
pub fn load_farm(path: &Path) -> Result<Farm> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read farm file {}", path.display()))?;
    let farm = parse_farm(&source)
        .with_context(|| format!("Failed to parse farm file {}", path.display()))?;

    debug!("loaded {} animals from {}", farm.len(), path.display());
    Ok(farm)
}
