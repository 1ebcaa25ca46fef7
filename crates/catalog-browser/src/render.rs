//! Text render layer. Pure: the same view always produces the same frame.

use catalog_core::{FilterState, Product};

pub const LOADING_TEXT: &str = "Loading products...";
pub const EMPTY_TEXT: &str = "No products found.";

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub loading: bool,
    pub products: &'a [Product],
    pub filters: &'a FilterState,
    pub categories: &'a [String],
}

#[must_use]
pub fn render(view: &View<'_>) -> String {
    let mut out = String::from("Product catalog\n");

    let filters = view.filters;
    out.push_str(&format!("search: \"{}\"", filters.search_term));
    if filters.search_pending() {
        out.push_str(" (typing)");
    }
    out.push_str(&format!(
        " | category: {} | price: {}..{} | sort: {}\n",
        filters.selected_category,
        filters.min_price,
        filters.max_price,
        filters.sort_option.label()
    ));

    if !view.categories.is_empty() {
        out.push_str(&format!("categories: {}\n", view.categories.join(" | ")));
    }
    out.push_str("----\n");

    if view.loading {
        out.push_str(LOADING_TEXT);
        out.push('\n');
    } else if view.products.is_empty() {
        out.push_str(EMPTY_TEXT);
        out.push('\n');
    } else {
        for product in view.products {
            out.push_str(&format!(
                "[{}] {}  ${}\n",
                product.category, product.name, product.price
            ));
        }
    }

    out
}
