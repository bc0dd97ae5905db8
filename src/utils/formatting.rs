use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::line_item::LineItem;

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_cart_table(items: &[LineItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<LineItemRow> = items
        .iter()
        .enumerate()
        .map(|(index, item)| LineItemRow {
            position: index + 1,
            name: if item.name.chars().count() > 30 {
                format!("{}...", item.name.chars().take(27).collect::<String>())
            } else {
                item.name.clone()
            },
            price: format_price(item.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

pub fn format_total(total: f64) -> String {
    format!("{}: {}", style("Total").bold(), style(format_price(total)).green())
}
