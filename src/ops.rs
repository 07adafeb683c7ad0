pub mod filter;
pub mod tap;
