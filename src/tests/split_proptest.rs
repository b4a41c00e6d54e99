use crate::constants::RECONCILIATION_TOLERANCE;
use crate::core::calculator::{RevenueSplitCalculator, round_currency};
use crate::core::models::{CustomRates, PaymentAmounts, RateConfig};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;
// Float noise on sums of cent values up to a few million.
const SUM_NOISE: f64 = 1e-6;

fn cents() -> impl Strategy<Value = f64> {
    (0u64..=100_000_000).prop_map(|c| c as f64 / 100.0)
}

fn cent_amounts() -> impl Strategy<Value = PaymentAmounts> {
    (cents(), cents(), cents(), cents())
        .prop_map(|(cash, instant, debit, credit)| PaymentAmounts::new(cash, instant, debit, credit))
        .prop_filter("needs a positive gross", |a| a.sum() > 0.0)
}

// Includes sub-cent values, which may round the gross down to nothing.
fn any_amount() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..0.01, 0.0f64..=1_000_000.0]
}

fn any_amounts() -> impl Strategy<Value = PaymentAmounts> {
    (any_amount(), any_amount(), any_amount(), any_amount())
        .prop_map(|(cash, instant, debit, credit)| PaymentAmounts::new(cash, instant, debit, credit))
}

/// Studio and professional rates in basis points, never above 100% together.
fn split_rates() -> impl Strategy<Value = CustomRates> {
    (0u32..=10_000)
        .prop_flat_map(|studio| (Just(studio), 0u32..=10_000 - studio, 0u32..=10_000))
        .prop_map(|(studio, professional, assistant)| CustomRates {
            studio_rate: Some(studio as f64 / 100.0),
            professional_rate: Some(professional as f64 / 100.0),
            assistant_rate: Some(assistant as f64 / 100.0),
        })
}

fn full_split_rates() -> impl Strategy<Value = CustomRates> {
    (0u32..=100).prop_map(|studio| CustomRates {
        studio_rate: Some(studio as f64),
        professional_rate: Some(100.0 - studio as f64),
        assistant_rate: None,
    })
}

proptest! {
    #[test]
    fn gross_matches_sum_and_net_never_exceeds_gross(amounts in cent_amounts()) {
        let calc = RevenueSplitCalculator::new(RateConfig::default()).unwrap();
        let split = calc.calculate(&amounts, None).unwrap();

        prop_assert!((split.gross_total - amounts.sum()).abs() <= RECONCILIATION_TOLERANCE + EPSILON);
        prop_assert!(split.net_total <= split.gross_total + EPSILON);
        prop_assert!(split.net_total >= 0.0);
    }

    #[test]
    fn full_split_shares_add_up_to_net(amounts in cent_amounts(), custom in full_split_rates()) {
        let calc = RevenueSplitCalculator::new(RateConfig::default()).unwrap();

        let split = calc.calculate(&amounts, None).unwrap();
        prop_assert!((split.studio_share + split.professional_share - split.net_total).abs() < SUM_NOISE);

        let split = calc.calculate(&amounts, Some(&custom)).unwrap();
        prop_assert!((split.studio_share + split.professional_share - split.net_total).abs() < SUM_NOISE);
    }

    #[test]
    fn calculated_splits_always_reconcile(amounts in cent_amounts(), custom in split_rates()) {
        let calc = RevenueSplitCalculator::new(RateConfig::default()).unwrap();
        let split = calc.calculate(&amounts, Some(&custom)).unwrap();

        prop_assert!(
            split.studio_share + split.professional_share <= split.net_total + RECONCILIATION_TOLERANCE + EPSILON
        );
        prop_assert!(calc.verify_integrity(&amounts, &split).is_ok(), "integrity failed for {:?}", split);
    }

    #[test]
    fn accepted_inputs_have_a_positive_gross(amounts in any_amounts()) {
        let calc = RevenueSplitCalculator::new(RateConfig::default()).unwrap();
        match calc.calculate(&amounts, None) {
            Ok(split) => {
                prop_assert!(split.gross_total > 0.0);
                prop_assert!(calc.verify_integrity(&amounts, &split).is_ok(), "integrity failed for {:?}", split);
            }
            Err(err) => {
                prop_assert_eq!(err.field_error().map(|f| f.field.as_str()), Some("amounts"));
                prop_assert!(round_currency(amounts.sum()) <= 0.0);
            }
        }
    }
}
