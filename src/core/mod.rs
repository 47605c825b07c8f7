pub mod add;
pub mod analyzer;
pub mod del;
pub mod edit;
