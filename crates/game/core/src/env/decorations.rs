/// Kind of decoration, used by renderers to pick a layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DecorationKind {
    Plant,
    Rock,
    Toy,
}

/// Shop entry for a decoration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoration {
    pub id: String,
    pub name: String,
    /// Asset key resolved by the renderer.
    pub asset: String,
    pub price: u64,
    pub kind: DecorationKind,
}

impl Decoration {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset: impl Into<String>,
        price: u64,
        kind: DecorationKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset: asset.into(),
            price,
            kind,
        }
    }
}

pub trait DecorationCatalog: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Decoration>;

    /// Every decoration offered in the shop, in display order.
    fn all(&self) -> Vec<Decoration>;
}
