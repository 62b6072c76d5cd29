//! `SeaORM` entity definitions.

pub mod assets;
pub mod categories;
pub mod sea_orm_active_enums;
pub mod sessions;
pub mod users;
