//! Console report: runs the eight catalog queries in order and writes their results.
//!
//! Each task gets a `--- Task N ---` header followed by one line per element, or one line for
//! scalar results. Task 3 discounts toys in place, so the catalog is taken mutably.

use std::io::Write;

use tracing::info_span;

use crate::error::CatalogResult;
use crate::query;
use crate::types::{Catalog, Order, Product};

/// Write the full report for `catalog` to `out`.
///
/// # Errors
///
/// I/O errors from `out`, and [`crate::CatalogError::DuplicateOrderId`] from task 7.
pub fn write_report<W: Write>(catalog: &mut Catalog, out: &mut W) -> CatalogResult<()> {
    section(catalog, out, 1, |catalog, out| {
        for p in query::books_with_price(catalog) {
            writeln!(out, "{}", product_line(p))?;
        }
        Ok(())
    })?;

    section(catalog, out, 2, |catalog, out| {
        for o in query::orders_with_baby_products(catalog) {
            writeln!(out, "{}", order_line(catalog, o))?;
        }
        Ok(())
    })?;

    section(catalog, out, 3, |catalog, out| {
        for p in query::apply_discount_to_toys(catalog) {
            writeln!(out, "{}", product_line(&p))?;
        }
        Ok(())
    })?;

    section(catalog, out, 4, |catalog, out| {
        match query::cheapest_book(catalog) {
            Some(p) => writeln!(out, "{}", product_line(p))?,
            None => writeln!(out, "none")?,
        }
        Ok(())
    })?;

    section(catalog, out, 5, |catalog, out| {
        for o in query::recent_orders(catalog) {
            writeln!(out, "{}", order_line(catalog, o))?;
        }
        Ok(())
    })?;

    section(catalog, out, 6, |catalog, out| {
        writeln!(out, "{}", query::books_stats(catalog))?;
        Ok(())
    })?;

    section(catalog, out, 7, |catalog, out| {
        for (id, count) in query::orders_products_map(catalog)? {
            writeln!(out, "{id} : {count}")?;
        }
        Ok(())
    })?;

    section(catalog, out, 8, |catalog, out| {
        for (name, ids) in query::products_by_category(catalog) {
            writeln!(out, "{name} : {ids:?}")?;
        }
        Ok(())
    })?;

    Ok(())
}

fn section<W, F>(catalog: &mut Catalog, out: &mut W, number: u32, body: F) -> CatalogResult<()>
where
    W: Write,
    F: FnOnce(&mut Catalog, &mut W) -> CatalogResult<()>,
{
    let _span = info_span!("task", number).entered();
    if number > 1 {
        writeln!(out)?;
    }
    writeln!(out, "--- Task {number} ---")?;
    body(catalog, out)
}

fn product_line(p: &Product) -> String {
    format!(
        "Product{{id={}, name='{}', category='{}', price={:.2}}}",
        p.id, p.name, p.category, p.price
    )
}

fn order_line(catalog: &Catalog, o: &Order) -> String {
    let customer = catalog.customer(o.customer_id).map_or("?", |c| c.name.as_str());
    format!(
        "Order{{id={}, order_date={}, customer='{}', products={:?}}}",
        o.id, o.order_date, customer, o.products
    )
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::error::CatalogError;
    use crate::sample::sample_catalog;

    fn render() -> String {
        let mut catalog = sample_catalog();
        let mut out = Vec::new();
        write_report(&mut catalog, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_has_eight_sections_in_order() {
        let text = render();
        let headers: Vec<_> = text.lines().filter(|l| l.starts_with("--- Task")).collect();
        assert_eq!(headers.len(), 8);
        assert_eq!(headers[0], "--- Task 1 ---");
        assert_eq!(headers[7], "--- Task 8 ---");
    }

    #[test]
    fn report_lists_discounted_toys_and_grouped_categories() {
        let text = render();
        assert!(text.contains("Product{id=5, name='Wooden Train Set', category='Toys', price=34.00}"));
        assert!(text.contains("Books : [1, 2, 3, 4]"));
        assert!(text.contains("7 : 4"));
    }

    #[test]
    fn report_orders_show_customer_names() {
        let text = render();
        assert!(text.contains(
            "Order{id=7, order_date=2021-04-01, customer='Ariane Rodriguez', products=[3, 1, 2, 4]}"
        ));
    }

    #[test]
    fn report_orders_with_unknown_customer_show_placeholder() {
        let mut catalog = sample_catalog();
        catalog.customers.clear();
        let mut out = Vec::new();
        write_report(&mut catalog, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Order{id=7, order_date=2021-04-01, customer='?'"));
    }

    #[test]
    fn report_fails_on_duplicate_order_ids() {
        let mut catalog = sample_catalog();
        let dup = catalog.orders[0].clone();
        catalog.orders.push(dup);
        let err = write_report(&mut catalog, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOrderId { id: 1 }));
    }
}
