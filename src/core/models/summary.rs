use super::payment::PaymentAmounts;
use super::transaction::Transaction;
use crate::core::calculator::round_currency;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Totals over every transaction of one reference month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlySummary {
    pub reference_month: u32,
    pub reference_year: i32,
    pub transaction_count: usize,
    pub gross_by_method: PaymentAmounts,
    pub gross_total: f64,
    pub debit_fees: f64,
    pub credit_fees: f64,
    pub net_total: f64,
    pub studio_total: f64,
    pub professional_total: f64,
    pub assistant_total: f64,
}

impl MonthlySummary {
    pub fn empty(reference_month: u32, reference_year: i32) -> Self {
        MonthlySummary {
            reference_month,
            reference_year,
            transaction_count: 0,
            gross_by_method: PaymentAmounts::default(),
            gross_total: 0.0,
            debit_fees: 0.0,
            credit_fees: 0.0,
            net_total: 0.0,
            studio_total: 0.0,
            professional_total: 0.0,
            assistant_total: 0.0,
        }
    }

    pub fn from_transactions(reference_month: u32, reference_year: i32, transactions: &[Transaction]) -> Self {
        let mut summary = Self::empty(reference_month, reference_year);
        for tx in transactions
            .iter()
            .filter(|tx| tx.is_in_period(reference_month, reference_year))
        {
            summary.add(tx);
        }
        summary.round();
        summary
    }

    fn add(&mut self, tx: &Transaction) {
        self.transaction_count += 1;
        self.gross_by_method.cash += tx.amounts.cash;
        self.gross_by_method.instant_transfer += tx.amounts.instant_transfer;
        self.gross_by_method.debit += tx.amounts.debit;
        self.gross_by_method.credit += tx.amounts.credit;
        self.gross_total += tx.split.gross_total;
        self.debit_fees += tx.split.debit_fee;
        self.credit_fees += tx.split.credit_fee;
        self.net_total += tx.split.net_total;
        self.studio_total += tx.split.studio_share;
        self.professional_total += tx.split.professional_share;
        self.assistant_total += tx.split.assistant_share;
    }

    // Sums of cent values drift in binary floating point.
    fn round(&mut self) {
        for value in [
            &mut self.gross_by_method.cash,
            &mut self.gross_by_method.instant_transfer,
            &mut self.gross_by_method.debit,
            &mut self.gross_by_method.credit,
            &mut self.gross_total,
            &mut self.debit_fees,
            &mut self.credit_fees,
            &mut self.net_total,
            &mut self.studio_total,
            &mut self.professional_total,
            &mut self.assistant_total,
        ] {
            *value = round_currency(*value);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YearlySummary {
    pub reference_year: i32,
    pub months: Vec<MonthlySummary>,
    pub transaction_count: usize,
    pub gross_total: f64,
    pub net_total: f64,
    pub studio_total: f64,
    pub professional_total: f64,
    pub assistant_total: f64,
}

impl YearlySummary {
    pub fn from_months(reference_year: i32, months: Vec<MonthlySummary>) -> Self {
        let total = |f: fn(&MonthlySummary) -> f64| round_currency(months.iter().map(f).sum());
        YearlySummary {
            reference_year,
            transaction_count: months.iter().map(|m| m.transaction_count).sum(),
            gross_total: total(|m| m.gross_total),
            net_total: total(|m| m.net_total),
            studio_total: total(|m| m.studio_total),
            professional_total: total(|m| m.professional_total),
            assistant_total: total(|m| m.assistant_total),
            months,
        }
    }
}
