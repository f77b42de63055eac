pub mod records;
pub mod slugs;
