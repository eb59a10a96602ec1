//! Database entities (SeaORM models).

pub mod user;
