pub mod alias;
pub mod cache;
pub mod columns;
pub mod path;
