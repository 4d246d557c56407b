use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::view::{SortKey, PAGE_SIZE_OPTIONS};
use crate::infra::http::dummyjson::DummyJsonSource;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::view_service::build_table_page;
use crate::{format_price, sort_button_style, table_container_style, table_header_cell_style};

#[component]
pub fn App() -> Element {
    let AppState {
        mut products,
        mut query,
        mut busy,
        mut status,
    } = AppState::new();

    use_effect(move || {
        *busy.write() = true;
        *status.write() = "Loading products...".to_string();
        spawn(async move {
            let config = AppConfig::load().unwrap_or_else(|err| {
                tracing::warn!("using default config: {err:#}");
                AppConfig::default()
            });

            let load_result = match DummyJsonSource::new(&config) {
                Ok(source) => CatalogService::new(Arc::new(source)).load().await,
                Err(err) => Err(err),
            };

            match load_result {
                Ok(loaded) => {
                    let count = loaded.len();
                    *products.write() = loaded;
                    *status.write() = format!(
                        "Loaded {count} products at {}",
                        Local::now().format("%H:%M:%S")
                    );
                }
                Err(err) => {
                    tracing::error!("product fetch failed: {err}");
                    *products.write() = Vec::new();
                    *status.write() = format!("Failed to load products: {err}");
                }
            }
            *busy.write() = false;
        });
    });

    let current_query = query();
    let table = build_table_page(&products(), &current_query);
    let total_pages = table.total_pages;
    let on_first_page = current_query.page <= 1;
    let on_last_page = current_query.page >= total_pages;

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px; background: #fff; min-height: 100vh;",

            h2 { "Product Data Table" }

            div {
                style: "display: flex; gap: 8px; align-items: center; justify-content: space-between; margin-bottom: 12px;",
                span { " {status}" }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    label { "Records per page: " }
                    select {
                        disabled: busy(),
                        value: "{current_query.page_size}",
                        onchange: move |event| {
                            let Ok(page_size) = event.value().parse::<usize>() else {
                                return;
                            };
                            query.write().set_page_size(page_size);
                        },
                        for size in PAGE_SIZE_OPTIONS {
                            option { value: "{size}", "{size}" }
                        }
                    }
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            {SortKey::all().into_iter().map(|key| {
                                let label = key.label();
                                let arrow_style = sort_button_style(current_query.sort_key == key);
                                rsx!(
                                    th { style: "{table_header_cell_style()}",
                                        "{label} "
                                        button {
                                            style: "{arrow_style}",
                                            disabled: busy(),
                                            onclick: move |_| {
                                                query.write().select_sort(key);
                                            },
                                            "↑"
                                        }
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if table.rows.is_empty() {
                            tr {
                                td { style: "border: 1px solid #bbb; padding: 6px 8px; text-align: center;",
                                    colspan: 4,
                                    "No products"
                                }
                            }
                        } else {
                            {table.rows.iter().map(|product| {
                                let title = product.title.clone();
                                let brand = product.brand.clone();
                                let category = product.category.clone();
                                let price = format_price(product.price);
                                rsx!(
                                    tr {
                                        td { style: "border: 1px solid #bbb; padding: 6px 8px; text-transform: capitalize;", "{title}" }
                                        td { style: "border: 1px solid #bbb; padding: 6px 8px; text-transform: capitalize;", "{brand}" }
                                        td { style: "border: 1px solid #bbb; padding: 6px 8px; text-transform: capitalize;", "{category}" }
                                        td { style: "border: 1px solid #bbb; padding: 6px 8px; text-align: right;", "{price}" }
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; justify-content: center; margin-top: 12px;",
                button {
                    disabled: busy() || on_first_page,
                    onclick: move |_| {
                        query.write().go_to_page(1);
                    },
                    "First"
                }
                button {
                    disabled: busy() || on_first_page,
                    onclick: move |_| {
                        let previous = query().page.saturating_sub(1);
                        query.write().go_to_page(previous);
                    },
                    "Previous"
                }
                span { "Page {current_query.page} of {total_pages}" }
                button {
                    disabled: busy() || on_last_page,
                    onclick: move |_| {
                        let next = query().page + 1;
                        query.write().go_to_page(next);
                    },
                    "Next"
                }
                button {
                    disabled: busy() || on_last_page,
                    onclick: move |_| {
                        query.write().go_to_page(total_pages);
                    },
                    "Last"
                }
                span { style: "color: #777;", "({table.total_rows} products)" }
            }
        }
    }
}
