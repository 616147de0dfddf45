use serde::{Serialize, Deserialize};

use crate::sound::{Cat, Cow, Dog, SoundMaker};

/// Species enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Cow,
}

impl Species {
    pub fn as_str(&self) -> &str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Cow => "cow",
        }
    }
}

/// One animal as written in a farm file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalSpec {
    pub name: String,
    pub species: Species,
}

impl AnimalSpec {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        AnimalSpec {
            name: name.into(),
            species,
        }
    }

    /// Build the concrete animal and hide it behind the capability
    pub fn into_sound_maker(self) -> Box<dyn SoundMaker> {
        match self.species {
            Species::Dog => Box::new(Dog::new(self.name)),
            Species::Cat => Box::new(Cat::new(self.name)),
            Species::Cow => Box::new(Cow::new(self.name)),
        }
    }
}

/// What an animal said, for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    pub name: String,
    pub species: Species,
    pub sound: String,
}

impl From<&AnimalSpec> for Announcement {
    fn from(spec: &AnimalSpec) -> Self {
        Announcement {
            name: spec.name.clone(),
            species: spec.species,
            sound: spec.clone().into_sound_maker().make_sound(),
        }
    }
}

/// Root structure
pub type Farm = Vec<AnimalSpec>;
