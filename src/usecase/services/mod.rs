pub mod catalog_service;
pub mod view_service;
