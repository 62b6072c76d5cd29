//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Asset and category repositories take the owning user's ID
//! on every call; rows belonging to other users behave as not-found.

pub mod asset;
pub mod category;
pub mod session;
pub mod user;

pub use asset::{AssetError, AssetRepository, AssetWithCategory, CreateAssetInput, UpdateAssetInput};
pub use category::{CategoryError, CategoryRepository};
pub use session::SessionRepository;
pub use user::UserRepository;
