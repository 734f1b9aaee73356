//! PostgreSQL store against a live database. Run with:
//! `DATABASE_URL=postgres://... cargo test --test pg_store -- --ignored`

use user_service::{ensure_users_table, NewUser, PgUserStore, UserFilter, UserPatch, UserStore};
use uuid::Uuid;

async fn store() -> (PgUserStore, String) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    let table = format!("users_test_{}", Uuid::new_v4().simple());
    ensure_users_table(&pool, &table).await.unwrap();
    (PgUserStore::new(pool, &table), table)
}

fn new_user(name: &str) -> NewUser {
    NewUser {
        email: format!("{}@example.com", name),
        name: name.into(),
        phone: "555".into(),
        address: "Main St".into(),
    }
}

#[tokio::test]
#[ignore]
async fn crud_round_trip() {
    let (store, table) = store().await;
    store.ping().await.unwrap();

    let alice = store.create(new_user("Alice")).await.unwrap();
    store.create(new_user("Bob")).await.unwrap();
    assert_eq!(store.find_many(&UserFilter::default()).await.unwrap().len(), 2);

    let by_name = UserFilter { name: Some("Alice".into()), ..Default::default() };
    assert_eq!(store.find_many(&by_name).await.unwrap(), vec![alice.clone()]);

    let patch = UserPatch { phone: Some("999".into()), ..Default::default() };
    let updated = store.update(alice.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.phone, "999");
    assert_eq!(updated.name, "Alice");
    assert_eq!(store.update(alice.id, &UserPatch::default()).await.unwrap(), Some(updated));
    assert_eq!(store.update(Uuid::new_v4(), &patch).await.unwrap(), None);

    assert!(store.delete(alice.id).await.unwrap().is_some());
    assert_eq!(store.delete(alice.id).await.unwrap(), None);
    assert_eq!(store.find_unique(alice.id).await.unwrap(), None);

    sqlx::query(&format!("DROP TABLE {}", user_service::sql::quoted(&table)))
        .execute(store.pool())
        .await
        .unwrap();
}
