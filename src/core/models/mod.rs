pub mod audit;
pub mod payment;
pub mod rates;
pub mod split;
pub mod summary;
pub mod transaction;

pub use audit::AppLog;
pub use payment::{PaymentAmounts, PaymentMethod};
pub use rates::{AssistantBasis, CustomRates, EffectiveRates, RateConfig};
pub use split::RevenueSplit;
pub use summary::{MonthlySummary, YearlySummary};
pub use transaction::{NewTransaction, Transaction, UpdateTransaction};
