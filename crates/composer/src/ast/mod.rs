pub mod column;
pub mod filter;
pub mod join;
