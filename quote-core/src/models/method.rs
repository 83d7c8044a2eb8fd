use serde::{Deserialize, Serialize};

/// Curtain construction method selected for a quote session.
///
/// The method determines which fabric-consumption formula applies and which
/// form fields are meaningful (panel count, window/door kind). Changing the
/// method mid-session discards every entered item, so the session only ever
/// holds items consistent with one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Eyelet/grommet header, fixed fullness ratio of 2.5.
    Smokering,
    /// Kupu-kupu pinch-pleat header, computed per panel.
    ButterflyPleat,
    /// Flat-mounted roller blind, no gathering.
    Blind,
}

impl CalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smokering => "smokering",
            Self::ButterflyPleat => "kupu-kupu",
            Self::Blind => "blind",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "smokering" => Some(Self::Smokering),
            "kupu-kupu" => Some(Self::ButterflyPleat),
            "blind" => Some(Self::Blind),
            _ => None,
        }
    }

    /// Display name used in the order message header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Smokering => "Smokering",
            Self::ButterflyPleat => "Kupu-Kupu",
            Self::Blind => "Blind",
        }
    }

    /// Whether the panel-count field is meaningful for this method.
    /// Smokering and Blind items are fixed at a single panel.
    pub fn uses_panels(&self) -> bool {
        matches!(self, Self::ButterflyPleat)
    }

    /// Whether the window/door kind is meaningful for this method.
    pub fn uses_item_kind(&self) -> bool {
        !matches!(self, Self::Blind)
    }
}
