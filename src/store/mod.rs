mod cache;
mod product;
pub mod storage;

pub use cache::{ProductCache, ProductStore};
pub use product::SavedProduct;
