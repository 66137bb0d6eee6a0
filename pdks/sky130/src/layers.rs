//! The set of PDK layers.
#![allow(missing_docs)]

use geometry::dir::Dir;
use motu::MotuLayer;
use serde::{Deserialize, Serialize};

/// The metal stack available to macro routing.
///
/// Serde names match the layer names used by the layout editor, so a
/// plan written as TOML names layers the same way the output script
/// paints them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Sky130Layer {
    /// Local interconnect.
    #[serde(rename = "li")]
    Li1,
    /// Local interconnect to met1 cut.
    #[serde(rename = "viali")]
    Mcon,
    #[serde(rename = "met1")]
    Met1,
    /// Met1 to met2 cut.
    #[serde(rename = "m2c")]
    Via,
    #[serde(rename = "met2")]
    Met2,
    /// Met2 to met3 cut.
    #[serde(rename = "m3c")]
    Via2,
    #[serde(rename = "met3")]
    Met3,
    /// Met3 to met4 cut.
    #[serde(rename = "via3")]
    Via3,
    #[serde(rename = "met4")]
    Met4,
}

impl MotuLayer for Sky130Layer {
    fn magic_name(&self) -> &'static str {
        match self {
            Self::Li1 => "li",
            Self::Mcon => "viali",
            Self::Met1 => "met1",
            Self::Via => "m2c",
            Self::Met2 => "met2",
            Self::Via2 => "m3c",
            Self::Met3 => "met3",
            Self::Via3 => "via3",
            Self::Met4 => "met4",
        }
    }

    fn routing_dir(&self) -> Option<Dir> {
        match self {
            Self::Met1 | Self::Met3 => Some(Dir::Horiz),
            Self::Met2 | Self::Met4 => Some(Dir::Vert),
            _ => None,
        }
    }

    fn line(&self) -> i64 {
        match self {
            Self::Li1 | Self::Met1 | Self::Met2 => 140,
            Self::Mcon => 170,
            Self::Via => 150,
            Self::Via2 | Self::Via3 => 200,
            Self::Met3 | Self::Met4 => 300,
        }
    }
}
