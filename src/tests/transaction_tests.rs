// src/tests/transaction_tests.rs

use super::{assert_money, create_test_service, create_test_service_with_storage, new_transaction};
use crate::constants::{TRANSACTION_CREATED, TRANSACTION_DELETED, TRANSACTION_RECALCULATED, TRANSACTION_UPDATED};
use crate::core::errors::ComandaError;
use crate::core::models::{CustomRates, PaymentAmounts, RateConfig, UpdateTransaction};
use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[tokio::test]
async fn test_create_transaction_computes_split() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let tx = service
        .create_transaction(new_transaction(
            "Corte e escova",
            PaymentAmounts::new(0.0, 0.0, 100.0, 0.0),
            3,
            2024,
        ))
        .await
        .unwrap();

    assert!(!tx.id.is_empty());
    assert_eq!(tx.split.debit_fee, 1.61);
    assert_eq!(tx.split.net_total, 98.39);
    assert_eq!(tx.reference_month, 3);
    assert_eq!(tx.created_at, tx.updated_at);

    let stored = service.get_transaction(&tx.id).await.unwrap();
    assert_eq!(stored.split, tx.split);

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, TRANSACTION_CREATED);
    assert_eq!(logs[0].transaction_id.as_deref(), Some(tx.id.as_str()));
}

#[tokio::test]
async fn test_create_transaction_with_custom_rates() {
    let service = create_test_service();
    let mut new = new_transaction("Coloracao", PaymentAmounts::new(200.0, 0.0, 0.0, 0.0), 5, 2024);
    new.custom_rates = Some(CustomRates {
        studio_rate: Some(50.0),
        professional_rate: Some(50.0),
        assistant_rate: None,
    });

    let tx = service.create_transaction(new).await.unwrap();
    assert_eq!(tx.split.studio_share, 100.0);
    assert_eq!(tx.split.professional_share, 100.0);
    assert_eq!(tx.split.assistant_share, 10.0);
    assert!(tx.custom_rates.is_some());
}

#[tokio::test]
async fn test_create_transaction_rejects_invalid_input() {
    let service = create_test_service();

    let result = service
        .create_transaction(new_transaction("Zero", PaymentAmounts::default(), 1, 2024))
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(_, _))));

    let result = service
        .create_transaction(new_transaction("   ", PaymentAmounts::new(10.0, 0.0, 0.0, 0.0), 1, 2024))
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(field, _)) if field == "description"));

    let result = service
        .create_transaction(new_transaction(
            "<script>",
            PaymentAmounts::new(10.0, 0.0, 0.0, 0.0),
            1,
            2024,
        ))
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(field, _)) if field == "description"));

    let result = service
        .create_transaction(new_transaction("Month", PaymentAmounts::new(10.0, 0.0, 0.0, 0.0), 13, 2024))
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(field, _)) if field == "reference_month"));

    let result = service
        .create_transaction(new_transaction("Year", PaymentAmounts::new(10.0, 0.0, 0.0, 0.0), 1, 1999))
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(field, _)) if field == "reference_year"));

    // nothing stored, nothing logged
    assert!(service.list_transactions(1, 2024).await.unwrap().is_empty());
    assert!(service.get_app_logs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_transaction_recomputes_split() {
    let service = create_test_service();
    let tx = service
        .create_transaction(new_transaction("Manicure", PaymentAmounts::new(100.0, 0.0, 0.0, 0.0), 6, 2024))
        .await
        .unwrap();
    assert_eq!(tx.split.net_total, 100.0);

    let updated = service
        .update_transaction(
            &tx.id,
            UpdateTransaction {
                amounts: Some(PaymentAmounts::new(0.0, 0.0, 0.0, 200.0)),
                ..UpdateTransaction::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, tx.id);
    assert_eq!(updated.description, "Manicure");
    assert_eq!(updated.created_at, tx.created_at);
    assert_eq!(updated.split.credit_fee, 7.02);
    assert_eq!(updated.split.net_total, 192.98);
    assert_money(
        updated.split.studio_share + updated.split.professional_share,
        updated.split.net_total,
    );

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, TRANSACTION_UPDATED);
}

#[tokio::test]
async fn test_update_transaction_sets_and_clears_custom_rates() {
    let service = create_test_service();
    let tx = service
        .create_transaction(new_transaction("Pedicure", PaymentAmounts::new(100.0, 0.0, 0.0, 0.0), 6, 2024))
        .await
        .unwrap();

    let with_rates = service
        .update_transaction(
            &tx.id,
            UpdateTransaction {
                custom_rates: Some(Some(CustomRates {
                    studio_rate: Some(70.0),
                    professional_rate: Some(30.0),
                    assistant_rate: Some(0.0),
                })),
                ..UpdateTransaction::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(with_rates.split.studio_share, 70.0);
    assert_eq!(with_rates.split.assistant_share, 0.0);

    // absent key keeps the override
    let renamed = service
        .update_transaction(
            &tx.id,
            UpdateTransaction {
                description: Some("Pedicure completa".to_string()),
                ..UpdateTransaction::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.split.studio_share, 70.0);

    let cleared = service
        .update_transaction(
            &tx.id,
            UpdateTransaction {
                custom_rates: Some(None),
                ..UpdateTransaction::default()
            },
        )
        .await
        .unwrap();
    assert!(cleared.custom_rates.is_none());
    assert_eq!(cleared.split.studio_share, 60.0);
    assert!(!cleared.split.rates.custom);
}

#[tokio::test]
async fn test_invalid_update_keeps_stored_transaction() {
    let service = create_test_service();
    let tx = service
        .create_transaction(new_transaction("Escova", PaymentAmounts::new(80.0, 0.0, 0.0, 0.0), 2, 2024))
        .await
        .unwrap();

    let result = service
        .update_transaction(
            &tx.id,
            UpdateTransaction {
                amounts: Some(PaymentAmounts::new(-10.0, 0.0, 0.0, 0.0)),
                ..UpdateTransaction::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ComandaError::InvalidInput(_, _))));

    let stored = service.get_transaction(&tx.id).await.unwrap();
    assert_eq!(stored.amounts.cash, 80.0);
    assert_eq!(stored.split, tx.split);
}

#[tokio::test]
async fn test_recalculate_applies_current_rates() {
    let storage = InMemoryStorage::new();
    let old_rates = create_test_service_with_storage(storage.clone(), RateConfig::default());
    let tx = old_rates
        .create_transaction(new_transaction("Hidratacao", PaymentAmounts::new(100.0, 0.0, 0.0, 0.0), 4, 2024))
        .await
        .unwrap();
    assert_eq!(tx.split.studio_share, 60.0);

    // unchanged rates: nothing to do
    let same = old_rates.recalculate_transaction(&tx.id).await.unwrap();
    assert_eq!(same.updated_at, tx.updated_at);

    let new_rates = create_test_service_with_storage(
        storage,
        RateConfig {
            studio_rate: 55.0,
            professional_rate: 45.0,
            ..RateConfig::default()
        },
    );
    let recalculated = new_rates.recalculate_transaction(&tx.id).await.unwrap();
    assert_eq!(recalculated.split.studio_share, 55.0);
    assert_eq!(recalculated.split.professional_share, 45.0);
    assert_eq!(recalculated.split.assistant_share, 4.5);

    let stored = old_rates.get_transaction(&tx.id).await.unwrap();
    assert_eq!(stored.split.studio_share, 55.0);

    let logs = new_rates.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, TRANSACTION_RECALCULATED);
}

#[tokio::test]
async fn test_delete_transaction() {
    let service = create_test_service();
    let tx = service
        .create_transaction(new_transaction("Sobrancelha", PaymentAmounts::new(40.0, 0.0, 0.0, 0.0), 7, 2024))
        .await
        .unwrap();

    let removed = service.delete_transaction(&tx.id).await.unwrap();
    assert_eq!(removed.id, tx.id);

    let result = service.get_transaction(&tx.id).await;
    assert!(matches!(result, Err(ComandaError::TransactionNotFound(_))));

    let result = service.delete_transaction(&tx.id).await;
    assert!(matches!(result, Err(ComandaError::TransactionNotFound(_))));

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, TRANSACTION_DELETED);
}

#[tokio::test]
async fn test_unknown_transaction_not_found() {
    let service = create_test_service();
    assert!(matches!(
        service.get_transaction("missing").await,
        Err(ComandaError::TransactionNotFound(id)) if id == "missing"
    ));
    assert!(matches!(
        service
            .update_transaction("missing", UpdateTransaction::default())
            .await,
        Err(ComandaError::TransactionNotFound(_))
    ));
    assert!(matches!(
        service.recalculate_transaction("missing").await,
        Err(ComandaError::TransactionNotFound(_))
    ));
}

#[tokio::test]
async fn test_list_transactions_by_period() {
    let service = create_test_service();
    let march = service
        .create_transaction(new_transaction("A", PaymentAmounts::new(10.0, 0.0, 0.0, 0.0), 3, 2024))
        .await
        .unwrap();
    service
        .create_transaction(new_transaction("B", PaymentAmounts::new(20.0, 0.0, 0.0, 0.0), 4, 2024))
        .await
        .unwrap();
    service
        .create_transaction(new_transaction("C", PaymentAmounts::new(30.0, 0.0, 0.0, 0.0), 3, 2023))
        .await
        .unwrap();

    let listed = service.list_transactions(3, 2024).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, march.id);

    assert!(service.list_transactions(0, 2024).await.is_err());
}

#[test]
fn test_preview_split_does_not_store() {
    let service = create_test_service();
    let split = service
        .preview_split(&PaymentAmounts::new(100.0, 0.0, 0.0, 0.0), None)
        .unwrap();
    assert_eq!(split.studio_share, 60.0);
    assert_eq!(service.rate_config().studio_rate, 60.0);
}
