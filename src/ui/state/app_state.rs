use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::product::Product;
use crate::domain::entities::view::TableQuery;

pub struct AppState {
    pub products: Signal<Vec<Product>>,
    pub query: Signal<TableQuery>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            products: use_signal(Vec::<Product>::new),
            query: use_signal(TableQuery::default),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
