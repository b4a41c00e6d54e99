//! Revenue split calculation.
//!
//! Splits the gross amounts of a comanda into processor fees and the
//! studio / professional / assistant shares. Everything here is pure: the
//! calculator holds only its [`RateConfig`] and performs no I/O.
//!
//! Rates are percentage points. Monetary results are rounded to cents, fees
//! first, so that `gross_total - debit_fee - credit_fee == net_total` holds
//! exactly at cent precision.

use crate::constants::{MAX_PAYMENT_AMOUNT, RECONCILIATION_TOLERANCE};
use crate::core::errors::ComandaError;
use crate::core::models::{
    AssistantBasis, CustomRates, EffectiveRates, PaymentAmounts, RateConfig, RevenueSplit,
};
use log::{debug, error};

// Absorbs binary representation error when comparing cent values.
const EPSILON: f64 = 1e-9;

/// Rounds a currency value to 2 decimal places, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid handing out -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[derive(Clone, Debug, Default)]
pub struct RevenueSplitCalculator {
    config: RateConfig,
}

impl RevenueSplitCalculator {
    pub fn new(config: RateConfig) -> Result<Self, ComandaError> {
        validate_rate("debit_fee_rate", config.debit_fee_rate)?;
        validate_rate("credit_fee_rate", config.credit_fee_rate)?;
        validate_rate("studio_rate", config.studio_rate)?;
        validate_rate("professional_rate", config.professional_rate)?;
        validate_rate("assistant_rate", config.assistant_rate)?;
        validate_split_total(config.studio_rate, config.professional_rate)?;
        Ok(RevenueSplitCalculator { config })
    }

    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Rejects negative, non-finite and over-ceiling inputs, and inputs whose
    /// gross rounds to zero cents.
    pub fn validate_amounts(&self, amounts: &PaymentAmounts) -> Result<(), ComandaError> {
        for (method, amount) in amounts.iter() {
            let field = method.field_name();
            if !amount.is_finite() {
                return Err(ComandaError::invalid_input(
                    field,
                    "Invalid Amount",
                    "Amount must be a finite number",
                ));
            }
            if amount < 0.0 {
                return Err(ComandaError::invalid_input(
                    field,
                    "Invalid Amount",
                    "Values must be non-negative",
                ));
            }
            if amount > MAX_PAYMENT_AMOUNT {
                return Err(ComandaError::invalid_input(
                    field,
                    "Amount Too Large",
                    "Amount cannot exceed 1,000,000",
                ));
            }
        }
        if round_currency(amounts.sum()) <= 0.0 {
            return Err(ComandaError::invalid_input(
                "amounts",
                "Empty Transaction",
                "Transaction must have at least one positive value",
            ));
        }
        Ok(())
    }

    /// Applies custom overrides on top of the configured defaults.
    pub fn resolve_rates(&self, custom: Option<&CustomRates>) -> Result<EffectiveRates, ComandaError> {
        let custom = custom.filter(|c| !c.is_empty());
        let pick = |field: &str, value: Option<f64>, default: f64| -> Result<f64, ComandaError> {
            match value {
                Some(rate) => {
                    validate_rate(field, rate)?;
                    Ok(rate)
                }
                None => Ok(default),
            }
        };

        let studio_rate = pick(
            "studio_rate",
            custom.and_then(|c| c.studio_rate),
            self.config.studio_rate,
        )?;
        let professional_rate = pick(
            "professional_rate",
            custom.and_then(|c| c.professional_rate),
            self.config.professional_rate,
        )?;
        let assistant_rate = pick(
            "assistant_rate",
            custom.and_then(|c| c.assistant_rate),
            self.config.assistant_rate,
        )?;
        validate_split_total(studio_rate, professional_rate)?;

        Ok(EffectiveRates {
            debit_fee_rate: self.config.debit_fee_rate,
            credit_fee_rate: self.config.credit_fee_rate,
            studio_rate,
            professional_rate,
            assistant_rate,
            assistant_basis: self.config.assistant_basis,
            custom: custom.is_some(),
        })
    }

    pub fn calculate(
        &self,
        amounts: &PaymentAmounts,
        custom: Option<&CustomRates>,
    ) -> Result<RevenueSplit, ComandaError> {
        self.validate_amounts(amounts)?;
        let rates = self.resolve_rates(custom)?;

        let gross_total = round_currency(amounts.sum());
        let debit_fee = round_currency(amounts.debit * rates.debit_fee_rate / 100.0);
        let credit_fee = round_currency(amounts.credit * rates.credit_fee_rate / 100.0);
        let net_total = round_currency(gross_total - debit_fee - credit_fee);

        let studio_share = round_currency(net_total * rates.studio_rate / 100.0);
        let professional_share = if rates.studio_rate + rates.professional_rate >= 100.0 - EPSILON {
            // Full split: the professional takes the remainder so no cent is lost.
            round_currency(net_total - studio_share)
        } else {
            round_currency(net_total * rates.professional_rate / 100.0)
        };
        let assistant_base = match rates.assistant_basis {
            AssistantBasis::ProfessionalShare => professional_share,
            AssistantBasis::NetTotal => net_total,
        };
        let assistant_share = round_currency(assistant_base * rates.assistant_rate / 100.0);

        debug!(
            "split computed: gross={} fees={}+{} net={} studio={} professional={} assistant={}",
            gross_total, debit_fee, credit_fee, net_total, studio_share, professional_share, assistant_share
        );

        Ok(RevenueSplit {
            gross_total,
            debit_fee,
            credit_fee,
            net_total,
            studio_share,
            professional_share,
            assistant_share,
            rates,
        })
    }

    /// Reconciles a split against the amounts it was computed from.
    ///
    /// A failure here means the calculation is wrong, not the input.
    pub fn verify_integrity(&self, amounts: &PaymentAmounts, split: &RevenueSplit) -> Result<(), ComandaError> {
        let expected_gross = round_currency(amounts.sum());
        if (expected_gross - split.gross_total).abs() > RECONCILIATION_TOLERANCE + EPSILON {
            return Err(violation(format!(
                "gross total {} does not match payment amounts {}",
                split.gross_total, expected_gross
            )));
        }
        if split.net_total > split.gross_total + EPSILON {
            return Err(violation(format!(
                "net total {} exceeds gross total {}",
                split.net_total, split.gross_total
            )));
        }
        let expected_net = split.gross_total - split.total_fees();
        if (expected_net - split.net_total).abs() > RECONCILIATION_TOLERANCE + EPSILON {
            return Err(violation(format!(
                "net total {} does not match gross minus fees {}",
                split.net_total, expected_net
            )));
        }
        let distributed = split.studio_share + split.professional_share;
        if distributed > split.net_total + RECONCILIATION_TOLERANCE + EPSILON {
            return Err(violation(format!(
                "studio and professional shares {} exceed net total {}",
                distributed, split.net_total
            )));
        }
        for (name, value) in [
            ("debit_fee", split.debit_fee),
            ("credit_fee", split.credit_fee),
            ("net_total", split.net_total),
            ("studio_share", split.studio_share),
            ("professional_share", split.professional_share),
            ("assistant_share", split.assistant_share),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(violation(format!("{} is negative or not finite: {}", name, value)));
            }
        }
        Ok(())
    }
}

fn violation(message: String) -> ComandaError {
    error!("revenue split integrity violation: {}", message);
    ComandaError::IntegrityViolation(message)
}

fn validate_rate(field: &str, rate: f64) -> Result<(), ComandaError> {
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(ComandaError::invalid_input(
            field,
            "Invalid Rate",
            "Rate must be a percentage between 0 and 100",
        ));
    }
    Ok(())
}

fn validate_split_total(studio_rate: f64, professional_rate: f64) -> Result<(), ComandaError> {
    if studio_rate + professional_rate > 100.0 + EPSILON {
        return Err(ComandaError::invalid_input(
            "custom_rates",
            "Invalid Split",
            format!(
                "Studio and professional rates add up to {}%, more than 100%",
                studio_rate + professional_rate
            ),
        ));
    }
    Ok(())
}
