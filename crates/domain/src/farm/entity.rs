use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Agricultural sector a farm operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Agro,
    #[serde(rename = "General Agriculture")]
    GeneralAgriculture,
    Horticulture,
    Kapenta,
    Timber,
    #[serde(rename = "Tea & Coffee")]
    TeaAndCoffee,
    Sugarcane,
}

impl Sector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Agro => "Agro",
            Sector::GeneralAgriculture => "General Agriculture",
            Sector::Horticulture => "Horticulture",
            Sector::Kapenta => "Kapenta",
            Sector::Timber => "Timber",
            Sector::TeaAndCoffee => "Tea & Coffee",
            Sector::Sugarcane => "Sugarcane",
        }
    }

    pub fn parse(s: &str) -> Option<Sector> {
        match s {
            "Agro" => Some(Sector::Agro),
            "General Agriculture" => Some(Sector::GeneralAgriculture),
            "Horticulture" => Some(Sector::Horticulture),
            "Kapenta" => Some(Sector::Kapenta),
            "Timber" => Some(Sector::Timber),
            "Tea & Coffee" => Some(Sector::TeaAndCoffee),
            "Sugarcane" => Some(Sector::Sugarcane),
            _ => None,
        }
    }
}

/// A registered farm. The owner is set once at creation to the creating
/// user and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub address: String,
    pub size_in_hectares: Option<Decimal>,
    pub telephone: String,
    pub account_number: String,
    pub email: String,
    pub sector: Sector,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}
