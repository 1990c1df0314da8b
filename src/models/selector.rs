//! Selecting the model a request refers to.

use super::{CatalogModel, RadioModel};

/// The radio model a web API call is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelRef {
    /// Identifier forwarded as-is; the web API rejects unknown names.
    Name(String),
    Catalog(CatalogModel),
    Model(RadioModel),
}

impl ModelRef {
    /// Identifier sent as `radio_model`.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Catalog(model) => model.name(),
            Self::Model(model) => model.name(),
        }
    }

    /// A local descriptor, when one is available without asking the web API.
    ///
    /// Plain names are looked up in the catalog.
    pub fn local_model(&self) -> Option<RadioModel> {
        match self {
            Self::Name(name) => CatalogModel::from_name(name).map(CatalogModel::model),
            Self::Catalog(model) => Some(model.model()),
            Self::Model(model) => Some(model.clone()),
        }
    }
}

impl From<&str> for ModelRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ModelRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<CatalogModel> for ModelRef {
    fn from(model: CatalogModel) -> Self {
        Self::Catalog(model)
    }
}

impl From<RadioModel> for ModelRef {
    fn from(model: RadioModel) -> Self {
        Self::Model(model)
    }
}

impl From<&RadioModel> for ModelRef {
    fn from(model: &RadioModel) -> Self {
        Self::Model(model.clone())
    }
}
