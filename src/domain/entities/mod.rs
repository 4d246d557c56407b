pub mod product;
pub mod view;
