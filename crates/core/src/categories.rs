//! Categories

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a category name cannot be recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Product category shared by the catalog and damage reports.
///
/// Stored identifiers are English; the Portuguese labels used by older data are accepted as
/// aliases when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// TVs, notebooks, phones.
    #[serde(alias = "Eletrônicos")]
    Electronics,

    /// Fridges, stoves, washing machines.
    #[serde(alias = "Eletrodomesticos", alias = "Eletrodomésticos")]
    Appliances,

    /// Wardrobes, beds, tables.
    #[serde(alias = "Móveis")]
    Furniture,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [
        Category::Electronics,
        Category::Appliances,
        Category::Furniture,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Eletrônicos",
            Category::Appliances => "Eletrodomésticos",
            Category::Furniture => "Móveis",
        }
    }

    /// Stable identifier used in storage and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Appliances => "appliances",
            Category::Furniture => "furniture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        Category::ALL
            .into_iter()
            .find(|category| {
                needle == category.as_str()
                    || needle == category.label().to_lowercase()
                    || (*category == Category::Appliances && needle == "eletrodomesticos")
                    || (*category == Category::Electronics && needle == "eletronicos")
                    || (*category == Category::Furniture && needle == "moveis")
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
