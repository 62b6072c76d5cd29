//! Database seeder for Assetra development and testing.
//!
//! Seeds a demo user, a few categories, and a handful of assets in
//! various lifecycle states for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use assetra_core::auth::hash_password;
use assetra_db::entities::{assets, categories, sea_orm_active_enums::AssetStatus, users};

/// Demo user ID (consistent for all seeds)
const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo user password
const DEMO_PASSWORD: &str = "password123";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = assetra_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo user...");
    seed_demo_user(&db).await;

    println!("Seeding categories...");
    let category_ids = seed_categories(&db).await;

    println!("Seeding assets...");
    seed_assets(&db, &category_ids).await;

    println!("Seeding complete!");
    println!("  Login: demo@assetra.dev / {DEMO_PASSWORD}");
}

fn demo_user_id() -> Uuid {
    Uuid::parse_str(DEMO_USER_ID).unwrap()
}

/// Seeds a demo user for development.
async fn seed_demo_user(db: &DatabaseConnection) {
    if users::Entity::find_by_id(demo_user_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Demo user already exists, skipping...");
        return;
    }

    let now = Utc::now().into();
    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");

    let user = users::ActiveModel {
        id: Set(demo_user_id()),
        email: Set("demo@assetra.dev".to_string()),
        password_hash: Set(password_hash),
        full_name: Set("Demo User".to_string()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user.insert(db).await.expect("Failed to insert demo user");
}

/// Seeds a few categories and returns their IDs.
async fn seed_categories(db: &DatabaseConnection) -> Vec<Uuid> {
    let names = [
        ("Office Equipment", "Desks, chairs, and office fittings"),
        ("IT Hardware", "Laptops, servers, and peripherals"),
        ("Vehicles", "Company cars and delivery vans"),
    ];

    let now = Utc::now().into();
    let mut ids = Vec::new();

    for (name, description) in names {
        let id = Uuid::new_v4();

        let category = categories::ActiveModel {
            id: Set(id),
            user_id: Set(demo_user_id()),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match category.insert(db).await {
            Ok(_) => ids.push(id),
            Err(e) => println!("  Skipping category '{name}': {e}"),
        }
    }

    ids
}

/// Seeds assets across lifecycle states.
#[allow(clippy::too_many_lines)]
async fn seed_assets(db: &DatabaseConnection, category_ids: &[Uuid]) {
    let now = Utc::now().into();

    let laptop = assets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo_user_id()),
        category_id: Set(category_ids.get(1).copied()),
        name: Set("MacBook Pro 14\"".to_string()),
        description: Set(Some("Development laptop".to_string())),
        location: Set(Some("Head Office".to_string())),
        assignee: Set(Some("Avery Chen".to_string())),
        purchase_price: Set(dec!(2400)),
        purchase_date: Set(date(2024, 2, 15)),
        useful_life_years: Set(Some(3)),
        current_value: Set(None),
        status: Set(AssetStatus::Active),
        disposal_value: Set(None),
        disposed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let desk = assets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo_user_id()),
        category_id: Set(category_ids.first().copied()),
        name: Set("Standing Desk".to_string()),
        description: Set(None),
        location: Set(Some("Head Office".to_string())),
        assignee: Set(None),
        purchase_price: Set(dec!(650)),
        purchase_date: Set(date(2023, 6, 1)),
        useful_life_years: Set(Some(10)),
        current_value: Set(None),
        status: Set(AssetStatus::Active),
        disposal_value: Set(None),
        disposed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let van = assets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo_user_id()),
        category_id: Set(category_ids.get(2).copied()),
        name: Set("Delivery Van".to_string()),
        description: Set(Some("Ford Transit, plate AB-123-CD".to_string())),
        location: Set(Some("Depot".to_string())),
        assignee: Set(Some("Morgan Reyes".to_string())),
        purchase_price: Set(dec!(32000)),
        purchase_date: Set(date(2022, 9, 12)),
        useful_life_years: Set(Some(8)),
        current_value: Set(None),
        status: Set(AssetStatus::Maintenance),
        disposal_value: Set(None),
        disposed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    // A legacy record with no stored useful life, exercising the
    // reverse-calculation path.
    let printer = assets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo_user_id()),
        category_id: Set(category_ids.first().copied()),
        name: Set("Office Printer".to_string()),
        description: Set(None),
        location: Set(Some("Head Office".to_string())),
        assignee: Set(None),
        purchase_price: Set(dec!(1200)),
        purchase_date: Set(date(2021, 3, 20)),
        useful_life_years: Set(None),
        current_value: Set(Some(dec!(300))),
        status: Set(AssetStatus::Active),
        disposal_value: Set(None),
        disposed_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let old_server = assets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(demo_user_id()),
        category_id: Set(category_ids.get(1).copied()),
        name: Set("Rack Server".to_string()),
        description: Set(Some("Retired and sold for parts".to_string())),
        location: Set(None),
        assignee: Set(None),
        purchase_price: Set(dec!(5500)),
        purchase_date: Set(date(2019, 1, 10)),
        useful_life_years: Set(Some(5)),
        current_value: Set(None),
        status: Set(AssetStatus::Disposed),
        disposal_value: Set(Some(dec!(150))),
        disposed_at: Set(Some(now)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    for asset in [laptop, desk, van, printer, old_server] {
        if let Err(e) = asset.insert(db).await {
            println!("  Skipping asset: {e}");
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
