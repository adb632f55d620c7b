mod common;

use rust_decimal_macros::dec;

use buffalomitra_api::services::feed::{FeedService, UpsertFeedStockInput};
use buffalomitra_api::services::finance::{AddTransactionInput, FinanceService};
use common::{date, seed_user, setup_db};

#[tokio::test]
async fn financial_summary_totals_income_and_expense() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "fin1").await;
    let finance = FinanceService::new(db.clone());

    let empty = finance.summary(farmer.id, None, None).await.unwrap();
    assert_eq!(empty.total_income, dec!(0));
    assert_eq!(empty.total_expense, dec!(0));
    assert_eq!(empty.net_profit, dec!(0));

    for (category, kind, amount) in [
        ("Milk Sale", "Income", dec!(15000)),
        ("Calf Sale", "Income", dec!(8000)),
        ("Feed", "Expense", dec!(6000)),
        ("Veterinary", "Expense", dec!(1500)),
    ] {
        finance
            .add_transaction(
                farmer.id,
                AddTransactionInput {
                    date: date(2024, 4, 10),
                    category: category.to_string(),
                    transaction_type: kind.to_string(),
                    amount,
                    description: None,
                },
            )
            .await
            .unwrap();
    }

    let summary = finance.summary(farmer.id, None, None).await.unwrap();
    assert_eq!(summary.total_income, dec!(23000));
    assert_eq!(summary.total_expense, dec!(7500));
    assert_eq!(summary.net_profit, dec!(15500));
}

#[tokio::test]
async fn summary_respects_date_range() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "fin2").await;
    let finance = FinanceService::new(db.clone());

    for (month, amount) in [(1, dec!(1000)), (2, dec!(2000)), (3, dec!(4000))] {
        finance
            .add_transaction(
                farmer.id,
                AddTransactionInput {
                    date: date(2024, month, 15),
                    category: "Milk Sale".to_string(),
                    transaction_type: "Income".to_string(),
                    amount,
                    description: None,
                },
            )
            .await
            .unwrap();
    }

    let february = finance
        .summary(farmer.id, Some(date(2024, 2, 1)), Some(date(2024, 2, 29)))
        .await
        .unwrap();
    assert_eq!(february.total_income, dec!(2000));
}

#[tokio::test]
async fn feed_upsert_updates_in_place() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "fin3").await;
    let feed = FeedService::new(db.clone());

    let first = feed
        .upsert_stock(
            farmer.id,
            UpsertFeedStockInput {
                name: "Berseem".to_string(),
                feed_type: "Green Fodder".to_string(),
                current_stock_kg: 400.0,
                reorder_level_kg: 100.0,
            },
        )
        .await
        .unwrap();

    let second = feed
        .upsert_stock(
            farmer.id,
            UpsertFeedStockInput {
                name: "Berseem".to_string(),
                feed_type: "Green Fodder".to_string(),
                current_stock_kg: 250.0,
                reorder_level_kg: 120.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.current_stock_kg, 250.0);

    let stock = feed.list_stock(farmer.id).await.unwrap();
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].reorder_level_kg, 120.0);
}

#[tokio::test]
async fn feed_stock_is_scoped_per_farmer() {
    let db = setup_db().await;
    let farmer = seed_user(&db, "fin4").await;
    let neighbor = seed_user(&db, "fin5").await;
    let feed = FeedService::new(db.clone());

    for user_id in [farmer.id, neighbor.id] {
        feed.upsert_stock(
            user_id,
            UpsertFeedStockInput {
                name: "Berseem".to_string(),
                feed_type: "Green Fodder".to_string(),
                current_stock_kg: 400.0,
                reorder_level_kg: 100.0,
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(feed.list_stock(farmer.id).await.unwrap().len(), 1);
    assert_eq!(feed.list_stock(neighbor.id).await.unwrap().len(), 1);
}
