use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    InstantTransfer,
    Debit,
    Credit,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::InstantTransfer,
        PaymentMethod::Debit,
        PaymentMethod::Credit,
    ];

    /// Field name used in requests and validation messages.
    pub fn field_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::InstantTransfer => "instant_transfer",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Gross amounts collected for one comanda, per payment method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentAmounts {
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub instant_transfer: f64,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

impl PaymentAmounts {
    pub fn new(cash: f64, instant_transfer: f64, debit: f64, credit: f64) -> Self {
        PaymentAmounts {
            cash,
            instant_transfer,
            debit,
            credit,
        }
    }

    pub fn get(&self, method: PaymentMethod) -> f64 {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::InstantTransfer => self.instant_transfer,
            PaymentMethod::Debit => self.debit,
            PaymentMethod::Credit => self.credit,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaymentMethod, f64)> + '_ {
        PaymentMethod::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Unrounded sum of the four amounts.
    pub fn sum(&self) -> f64 {
        self.cash + self.instant_transfer + self.debit + self.credit
    }
}
