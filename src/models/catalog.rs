//! Built-in radio model templates for offline validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use super::RadioModel;
use crate::error::RadioError;

/// Radio models known to the SDK without asking the web API.
///
/// `EclipseEsn` carries the name `"toyota-erc"`, the same as `ToyotaErc`,
/// with different serial rules. Name lookups resolve to `ToyotaErc`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
pub enum CatalogModel {
    RenaultDacia,
    ChryslerPanasonicTm9,
    FordMSeries,
    FordVSeries,
    FordTravelpilot,
    FiatStiloBravoVisteon,
    FiatDaiichi,
    ToyotaErc,
    JeepCherokee,
    NissanGloveBox,
    EclipseEsn,
    JaguarAlpine,
}

/// Validation parameters of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTemplate {
    pub name: &'static str,
    pub serial_max_len: usize,
    pub serial_pattern: &'static str,
    pub extra_max_len: usize,
    pub extra_pattern: Option<&'static str>,
}

impl ModelTemplate {
    const fn serial_only(
        name: &'static str,
        serial_max_len: usize,
        serial_pattern: &'static str,
    ) -> Self {
        Self {
            name,
            serial_max_len,
            serial_pattern,
            extra_max_len: 0,
            extra_pattern: None,
        }
    }
}

impl CatalogModel {
    pub fn template(self) -> ModelTemplate {
        match self {
            Self::RenaultDacia => {
                ModelTemplate::serial_only("renault-dacia", 4, "/^([A-Z]{1}[0-9]{3})$/")
            }
            Self::ChryslerPanasonicTm9 => {
                ModelTemplate::serial_only("chrysler-panasonic-tm9", 4, "/^([0-9]{4})$/")
            }
            Self::FordMSeries => ModelTemplate::serial_only("ford-m-series", 6, "/^([0-9]{6})$/"),
            Self::FordVSeries => ModelTemplate::serial_only("ford-v-series", 6, "/^([0-9]{6})$/"),
            Self::FordTravelpilot => {
                ModelTemplate::serial_only("ford-travelpilot", 7, "/^([0-9]{7})$/")
            }
            Self::FiatStiloBravoVisteon => {
                ModelTemplate::serial_only("fiat-stilo-bravo-visteon", 6, "/^([a-zA-Z0-9]{6})$/")
            }
            Self::FiatDaiichi => ModelTemplate::serial_only("fiat-daiichi", 4, "/^([0-9]{4})$/"),
            Self::ToyotaErc => {
                ModelTemplate::serial_only("toyota-erc", 16, "/^([a-zA-Z0-9]{16})$/")
            }
            Self::JeepCherokee => {
                ModelTemplate::serial_only("jeep-cherokee", 14, "/^([a-zA-Z0-9]{10}[0-9]{4})$/")
            }
            Self::NissanGloveBox => {
                ModelTemplate::serial_only("nissan-glove-box", 12, "/^([a-zA-Z0-9]{12})$/")
            }
            Self::EclipseEsn => ModelTemplate::serial_only("toyota-erc", 6, "/^([a-zA-Z0-9]{6})$/"),
            Self::JaguarAlpine => ModelTemplate::serial_only("jaguar-alpine", 5, "/^([0-9]{5})$/"),
        }
    }

    /// The identifier sent to the web API.
    pub fn name(self) -> &'static str {
        self.template().name
    }

    /// Build a fresh [`RadioModel`] from this template.
    pub fn model(self) -> RadioModel {
        let template = self.template();
        let model = RadioModel::new(
            template.name,
            template.serial_max_len,
            template.serial_pattern,
        );
        match template.extra_pattern {
            Some(extra) => model.with_extra(template.extra_max_len, extra),
            None => model,
        }
    }

    /// First catalog entry carrying `name`, in declaration order.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|model| model.name() == name)
    }

    /// Every catalog entry as a [`RadioModel`].
    pub fn all_models() -> Vec<RadioModel> {
        Self::iter().map(Self::model).collect()
    }
}

impl FromStr for CatalogModel {
    type Err = RadioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RadioError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for CatalogModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
