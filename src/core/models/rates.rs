use crate::constants::{
    DEFAULT_ASSISTANT_RATE, DEFAULT_CREDIT_FEE_RATE, DEFAULT_DEBIT_FEE_RATE, DEFAULT_PROFESSIONAL_RATE,
    DEFAULT_STUDIO_RATE,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the assistant rate is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssistantBasis {
    /// A cut of the professional's share.
    #[default]
    ProfessionalShare,
    /// A percentage of the whole net total.
    NetTotal,
}

impl std::str::FromStr for AssistantBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional_share" | "professional" => Ok(AssistantBasis::ProfessionalShare),
            "net_total" | "net" => Ok(AssistantBasis::NetTotal),
            other => Err(format!("unknown assistant basis: {}", other)),
        }
    }
}

impl std::fmt::Display for AssistantBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssistantBasis::ProfessionalShare => "professional_share",
            AssistantBasis::NetTotal => "net_total",
        };
        write!(f, "{}", s)
    }
}

/// Defaults handed to the calculator. All rates are percentage points (60.0 == 60%).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateConfig {
    pub debit_fee_rate: f64,
    pub credit_fee_rate: f64,
    pub studio_rate: f64,
    pub professional_rate: f64,
    pub assistant_rate: f64,
    pub assistant_basis: AssistantBasis,
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig {
            debit_fee_rate: DEFAULT_DEBIT_FEE_RATE,
            credit_fee_rate: DEFAULT_CREDIT_FEE_RATE,
            studio_rate: DEFAULT_STUDIO_RATE,
            professional_rate: DEFAULT_PROFESSIONAL_RATE,
            assistant_rate: DEFAULT_ASSISTANT_RATE,
            assistant_basis: AssistantBasis::default(),
        }
    }
}

/// Per-transaction override of the split. Missing fields fall back to the configured defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomRates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_rate: Option<f64>,
}

impl CustomRates {
    pub fn is_empty(&self) -> bool {
        self.studio_rate.is_none() && self.professional_rate.is_none() && self.assistant_rate.is_none()
    }
}

/// The rates that actually produced a split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EffectiveRates {
    pub debit_fee_rate: f64,
    pub credit_fee_rate: f64,
    pub studio_rate: f64,
    pub professional_rate: f64,
    pub assistant_rate: f64,
    pub assistant_basis: AssistantBasis,
    /// True when any custom override was applied.
    pub custom: bool,
}
