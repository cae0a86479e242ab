use serde::{Deserialize, Serialize};

/// `{name, url}` reference used all over the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One row of the species listing.
///
/// `name` is the canonical catalog key (English, lowercase), `url` points at
/// the species detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesPage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub results: Vec<SpeciesDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDetail {
    pub name: String,
    /// Absent on some malformed records; those are skipped by the resolver
    #[serde(default)]
    pub names: Option<Vec<LocalizedName>>,
}

impl SpeciesDetail {
    /// Display name for the given language tag ("fr", "en", ...)
    pub fn localized_name(&self, language: &str) -> Option<&str> {
        self.names
            .as_ref()?
            .iter()
            .find(|n| n.language.as_ref().is_some_and(|l| l.name == language))
            .map(|n| n.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    #[serde(default)]
    pub language: Option<NamedResource>,
}

/// Catalog entry as returned by `pokemon/{key}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    pub species: NamedResource,
}

impl PokemonEntry {
    /// Official artwork first, then the default front sprite
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}
