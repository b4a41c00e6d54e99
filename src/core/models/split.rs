use super::rates::EffectiveRates;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fee and share breakdown of one transaction. Monetary fields are rounded to cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevenueSplit {
    pub gross_total: f64,
    pub debit_fee: f64,
    pub credit_fee: f64,
    pub net_total: f64,
    pub studio_share: f64,
    pub professional_share: f64,
    pub assistant_share: f64,
    pub rates: EffectiveRates,
}

impl RevenueSplit {
    pub fn total_fees(&self) -> f64 {
        self.debit_fee + self.credit_fee
    }
}
