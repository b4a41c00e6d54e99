use super::payment::PaymentAmounts;
use super::rates::CustomRates;
use super::split::RevenueSplit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amounts: PaymentAmounts,
    pub custom_rates: Option<CustomRates>,
    pub split: RevenueSplit,
    pub reference_month: u32,
    pub reference_year: i32,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Transaction {
    pub fn is_in_period(&self, month: u32, year: i32) -> bool {
        self.reference_month == month && self.reference_year == year
    }
}

/// Input of the creation flow.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewTransaction {
    pub description: String,
    pub amounts: PaymentAmounts,
    #[serde(default)]
    pub custom_rates: Option<CustomRates>,
    pub reference_month: u32,
    pub reference_year: i32,
}

/// Explicit edit. Absent fields keep their current value; the split is always recomputed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTransaction {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amounts: Option<PaymentAmounts>,
    /// `Some(None)` clears the override, `None` keeps it.
    #[serde(default, with = "double_option")]
    #[schema(value_type = Option<CustomRates>)]
    pub custom_rates: Option<Option<CustomRates>>,
    #[serde(default)]
    pub reference_month: Option<u32>,
    #[serde(default)]
    pub reference_year: Option<i32>,
}

// Distinguishes a missing `custom_rates` key from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
