//! Species records consumed by spawners: plumage variants, calls and the asset
//! references a presentation layer resolves to sprites and audio.
//!
//! Records are plain data and immutable once loaded. Enum values deserialize
//! case-insensitively; object keys accept camelCase as well as PascalCase.
use serde::{Deserialize, Serialize};

/// Plumage state tied to the breeding cycle and age of the bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PlumageType {
    Breeding,
    NonBreeding,
    Molting,
    Juvenile,
}

impl PlumageType {
    pub const ALL: [PlumageType; 4] = [
        PlumageType::Breeding,
        PlumageType::NonBreeding,
        PlumageType::Molting,
        PlumageType::Juvenile,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CallType {
    Song,
    Call,
    Alarm,
    Flight,
}

impl CallType {
    pub const ALL: [CallType; 4] = [
        CallType::Song,
        CallType::Call,
        CallType::Alarm,
        CallType::Flight,
    ];
}

/// How hard a species or variant is to identify.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
        DifficultyTier::Expert,
    ];
}

impl_case_insensitive_parse!(PlumageType, "plumage type");
impl_case_insensitive_parse!(Gender, "gender");
impl_case_insensitive_parse!(CallType, "call type");
impl_case_insensitive_parse!(DifficultyTier, "difficulty tier");

/// Engine resource path, e.g. `res://Assets/Birds/robin.png`.
///
/// Deserializes from either a bare string or a `{ "path": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "AssetReferenceRepr")]
pub struct AssetReference {
    pub path: String,
}

impl AssetReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetReferenceRepr {
    Bare(String),
    Object {
        #[serde(alias = "Path")]
        path: String,
    },
}

impl From<AssetReferenceRepr> for AssetReference {
    fn from(repr: AssetReferenceRepr) -> Self {
        match repr {
            AssetReferenceRepr::Bare(path) | AssetReferenceRepr::Object { path } => Self { path },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlumageVariant {
    #[serde(alias = "PlumageType")]
    pub plumage_type: PlumageType,
    #[serde(alias = "Gender")]
    pub gender: Gender,
    #[serde(default, alias = "SpritePath")]
    pub sprite_path: AssetReference,
    #[serde(default, alias = "DifficultyRating")]
    pub difficulty_rating: DifficultyTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdCall {
    #[serde(rename = "type", alias = "Type", alias = "callType")]
    pub call_type: CallType,
    #[serde(default, alias = "AudioPath")]
    pub audio_path: AssetReference,
    #[serde(default, alias = "SpectrogramPath")]
    pub spectrogram_path: AssetReference,
}

/// A species as described by the bird data document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdDefinition {
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, alias = "CommonName")]
    pub common_name: String,
    #[serde(default, alias = "ScientificName")]
    pub scientific_name: String,
    #[serde(default, alias = "Tier")]
    pub tier: DifficultyTier,
    /// Short identification tags such as `orange_breast`.
    #[serde(default, alias = "FieldMarks")]
    pub field_marks: Vec<String>,
    #[serde(default, alias = "Variants")]
    pub variants: Vec<PlumageVariant>,
    #[serde(default, alias = "Calls")]
    pub calls: Vec<BirdCall>,
}

impl BirdDefinition {
    pub fn has_field_mark(&self, mark: &str) -> bool {
        self.field_marks.iter().any(|m| m == mark)
    }

    /// Variants whose plumage type is one of `types`, in document order.
    pub fn variants_with_plumage<'a>(
        &'a self,
        types: &'a [PlumageType],
    ) -> impl Iterator<Item = &'a PlumageVariant> + 'a {
        self.variants
            .iter()
            .filter(move |v| types.contains(&v.plumage_type))
    }
}
