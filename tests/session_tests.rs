use rust_decimal_macros::dec;
use savvyplan::application::session::SessionManager;
use savvyplan::domain::debt::{DebtDraft, DebtRegistry};
use savvyplan::domain::ports::KeyValueStore;
use savvyplan::infrastructure::in_memory::InMemoryKeyValueStore;

const PLAN_KEY: &str = "plans/default";

#[tokio::test]
async fn test_session_lifecycle() {
    let store = InMemoryKeyValueStore::new();
    let sessions = SessionManager::new(Box::new(store));

    assert_eq!(sessions.current().await.unwrap(), None);

    let profile = sessions.sign_up("Jamie", "jamie@example.com").await.unwrap();
    assert!(!profile.has_history);
    assert_eq!(sessions.current().await.unwrap(), Some(profile));

    let returning = sessions.log_in("jamie@example.com").await.unwrap();
    assert!(returning.has_history);
    assert_eq!(returning.name, "jamie");

    sessions.log_out().await.unwrap();
    assert_eq!(sessions.current().await.unwrap(), None);
}

#[tokio::test]
async fn test_registry_round_trips_through_store() {
    let store = InMemoryKeyValueStore::new();

    let mut registry = DebtRegistry::new();
    registry
        .add_debt(DebtDraft {
            name: "Credit Card".to_string(),
            balance: dec!(15000),
            interest_rate: dec!(18),
            min_payment: dec!(500),
        })
        .unwrap();
    registry
        .add_debt(DebtDraft {
            name: "Car Loan".to_string(),
            balance: dec!(120000),
            interest_rate: dec!(9),
            min_payment: dec!(3500),
        })
        .unwrap();
    registry.save(&store, PLAN_KEY).await.unwrap();

    let loaded = DebtRegistry::load(&store, PLAN_KEY).await.unwrap();
    assert_eq!(loaded, registry);

    // New ids keep advancing after a reload.
    let mut loaded = loaded;
    let id = loaded
        .add_debt(DebtDraft {
            name: "Personal Loan".to_string(),
            balance: dec!(50000),
            interest_rate: dec!(15),
            min_payment: dec!(2000),
        })
        .unwrap();
    assert_eq!(id, 2);
}

#[tokio::test]
async fn test_missing_plan_loads_empty_registry() {
    let store = InMemoryKeyValueStore::new();
    let registry = DebtRegistry::load(&store, "plans/absent").await.unwrap();
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_sessions_and_plans_share_a_store() {
    let store = InMemoryKeyValueStore::new();
    let sessions = SessionManager::new(Box::new(store.clone()));

    sessions.log_in("jamie@example.com").await.unwrap();
    let mut registry = DebtRegistry::new();
    registry
        .add_debt(DebtDraft {
            name: "Loan".to_string(),
            balance: dec!(100),
            interest_rate: dec!(5),
            min_payment: dec!(10),
        })
        .unwrap();
    registry.save(&store, PLAN_KEY).await.unwrap();

    // Logging out clears the session but not the saved plan.
    sessions.log_out().await.unwrap();
    assert!(store.get(PLAN_KEY).await.unwrap().is_some());
}
