//! Reductions over product prices: minimum selection and summary statistics.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{category, Catalog, Product};

/// Running count/sum/min/max/average over `f64` samples.
///
/// Sums are accumulated with Kahan compensation. A NaN sample makes `min()`, `max()`, `sum()`
/// and `average()` NaN. An empty accumulator reports fixed sentinels
/// instead of failing:
///
/// | accessor    | empty value          |
/// |-------------|----------------------|
/// | `count()`   | `0`                  |
/// | `sum()`     | `0.0`                |
/// | `average()` | `0.0`                |
/// | `max()`     | `f64::NEG_INFINITY`  |
/// | `min()`     | `f64::INFINITY`      |
///
/// ```rust
/// use catalog_queries::query::SummaryStatistics;
///
/// let stats: SummaryStatistics = [3.0, 1.0, 2.0].into_iter().collect();
/// assert_eq!(stats.count(), 3);
/// assert_eq!(stats.min(), 1.0);
/// assert_eq!(stats.average(), 2.0);
///
/// let empty = SummaryStatistics::new();
/// assert_eq!(empty.max(), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    count: u64,
    sum: f64,
    compensation: f64,
    simple_sum: f64,
    min: f64,
    max: f64,
}

impl SummaryStatistics {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            compensation: 0.0,
            simple_sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Record one sample.
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.simple_sum += value;
        self.add_compensated(value);
        self.min = nan_min(self.min, value);
        self.max = nan_max(self.max, value);
    }

    /// Merge the samples recorded by `other` into `self`.
    pub fn combine(&mut self, other: &SummaryStatistics) {
        self.count += other.count;
        self.simple_sum += other.simple_sum;
        self.add_compensated(other.sum);
        // Subtract: compensation carries the negated low-order bits.
        self.add_compensated(-other.compensation);
        self.min = nan_min(self.min, other.min);
        self.max = nan_max(self.max, other.max);
    }

    fn add_compensated(&mut self, value: f64) {
        let adjusted = value - self.compensation;
        let next = self.sum + adjusted;
        self.compensation = (next - self.sum) - adjusted;
        self.sum = next;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Compensated sum; falls back to the plain sum when compensation produced NaN from
    /// infinite inputs.
    pub fn sum(&self) -> f64 {
        let total = self.sum - self.compensation;
        if total.is_nan() && self.simple_sum.is_infinite() {
            self.simple_sum
        } else {
            total
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean, or `0.0` when no samples were recorded.
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum() / self.count as f64
        } else {
            0.0
        }
    }
}

// Unlike `f64::min`/`f64::max`, a NaN operand wins.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for SummaryStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.accept(v);
        }
    }
}

impl FromIterator<f64> for SummaryStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count = {}, average = {:.6}, max = {:.6}, min = {:.6}, sum = {:.6}",
            self.count(),
            self.average(),
            self.max(),
            self.min(),
            self.sum()
        )
    }
}

/// Cheapest product of `category`, or `None` when the category has no products.
///
/// Ties go to the product that comes first in collection order. NaN prices rank above every
/// number, so they are only picked when nothing else is available.
pub fn cheapest_in<'a>(catalog: &'a Catalog, category: &str) -> Option<&'a Product> {
    // `Iterator::min_by` keeps the first of equal elements.
    catalog
        .products
        .iter()
        .filter(|p| p.is_in(category))
        .min_by(|a, b| compare_price(a, b))
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    match (a.price.is_nan(), b.price.is_nan()) {
        (false, false) => a.price.total_cmp(&b.price),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Cheapest book, see [`cheapest_in`].
pub fn cheapest_book(catalog: &Catalog) -> Option<&Product> {
    cheapest_in(catalog, category::BOOKS)
}

/// Price statistics over the products of `category`.
pub fn price_stats(catalog: &Catalog, category: &str) -> SummaryStatistics {
    catalog.products_in(category).map(|p| p.price).collect()
}

/// Price statistics over all books.
pub fn books_stats(catalog: &Catalog) -> SummaryStatistics {
    price_stats(catalog, category::BOOKS)
}

#[cfg(test)]
mod tests {
    use super::{books_stats, cheapest_book, cheapest_in, price_stats, SummaryStatistics};
    use crate::types::{category, Catalog, Product};

    fn products(items: &[(u32, &str, f64)]) -> Catalog {
        Catalog::new(
            vec![],
            items
                .iter()
                .map(|(id, cat, price)| Product::new(*id, format!("p{id}"), *cat, *price))
                .collect(),
            vec![],
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cheapest_book_picks_minimum_price() {
        let c = products(&[
            (1, category::BOOKS, 150.0),
            (2, category::BOOKS, 50.0),
            (3, category::TOYS, 20.0),
        ]);
        let book = cheapest_book(&c).unwrap();
        assert_eq!((book.id, book.price), (2, 50.0));
        for p in c.products_in(category::BOOKS) {
            assert!(book.price <= p.price);
        }
    }

    #[test]
    fn cheapest_book_tie_resolves_to_first_in_collection_order() {
        let c = products(&[
            (1, category::BOOKS, 30.0),
            (2, category::BOOKS, 10.0),
            (3, category::BOOKS, 10.0),
        ]);
        assert_eq!(cheapest_book(&c).map(|p| p.id), Some(2));
    }

    #[test]
    fn cheapest_book_never_prefers_nan_prices() {
        let c = products(&[
            (1, category::BOOKS, 50.0),
            (2, category::BOOKS, -f64::NAN),
            (3, category::BOOKS, f64::NAN),
            (4, category::BOOKS, 70.0),
        ]);
        assert_eq!(cheapest_book(&c).map(|p| p.id), Some(1));

        let only_nan = products(&[(1, category::BOOKS, f64::NAN)]);
        assert_eq!(cheapest_book(&only_nan).map(|p| p.id), Some(1));
    }

    #[test]
    fn cheapest_is_none_without_matching_products() {
        let c = products(&[(1, category::TOYS, 5.0)]);
        assert!(cheapest_book(&c).is_none());
        assert!(cheapest_in(&Catalog::default(), category::TOYS).is_none());
    }

    #[test]
    fn books_stats_over_books_only() {
        let c = products(&[
            (1, category::BOOKS, 150.0),
            (2, category::BOOKS, 50.0),
            (3, category::TOYS, 20.0),
            (4, category::BOOKS, 100.0),
        ]);
        let s = books_stats(&c);
        assert_eq!(s.count(), 3);
        assert!(approx(s.sum(), 300.0));
        assert!(approx(s.average(), 100.0));
        assert_eq!(s.max(), 150.0);
        assert_eq!(s.min(), 50.0);
    }

    #[test]
    fn stats_over_empty_input_report_sentinels() {
        let c = products(&[(1, category::TOYS, 5.0)]);
        let s = books_stats(&c);
        assert_eq!(s.count(), 0);
        assert_eq!(s.sum(), 0.0);
        assert_eq!(s.average(), 0.0);
        assert_eq!(s.max(), f64::NEG_INFINITY);
        assert_eq!(s.min(), f64::INFINITY);
        assert_eq!(s, SummaryStatistics::default());
    }

    #[test]
    fn compensated_sum_beats_naive_sum() {
        let values = std::iter::repeat(0.1).take(10);
        let s: SummaryStatistics = values.collect();
        assert_eq!(s.sum(), 1.0);
        assert_eq!(s.count(), 10);
    }

    #[test]
    fn sum_of_infinities_falls_back_to_plain_sum() {
        let s: SummaryStatistics = [f64::INFINITY, 1.0].into_iter().collect();
        assert_eq!(s.sum(), f64::INFINITY);
    }

    #[test]
    fn nan_sample_poisons_every_aggregate() {
        let s: SummaryStatistics = [50.0, -f64::NAN, f64::NAN].into_iter().collect();
        assert_eq!(s.count(), 3);
        assert!(s.sum().is_nan());
        assert!(s.average().is_nan());
        assert!(s.min().is_nan());
        assert!(s.max().is_nan());

        let mut merged: SummaryStatistics = [1.0].into_iter().collect();
        merged.combine(&s);
        assert!(merged.min().is_nan());
        assert!(merged.max().is_nan());
    }

    #[test]
    fn combine_merges_two_accumulators() {
        let mut left: SummaryStatistics = [1.0, 2.0].into_iter().collect();
        let right: SummaryStatistics = [10.0, -4.0, 3.0].into_iter().collect();
        left.combine(&right);

        assert_eq!(left.count(), 5);
        assert!(approx(left.sum(), 12.0));
        assert_eq!(left.min(), -4.0);
        assert_eq!(left.max(), 10.0);

        let mut empty = SummaryStatistics::new();
        empty.combine(&SummaryStatistics::new());
        assert_eq!(empty, SummaryStatistics::new());
    }

    #[test]
    fn price_stats_for_unknown_category_is_empty() {
        let c = products(&[(1, category::BOOKS, 5.0)]);
        assert_eq!(price_stats(&c, "Garden").count(), 0);
    }

    #[test]
    fn display_uses_six_decimals() {
        let s: SummaryStatistics = [1.5, 2.5].into_iter().collect();
        assert_eq!(
            s.to_string(),
            "count = 2, average = 2.000000, max = 2.500000, min = 1.500000, sum = 4.000000"
        );
    }
}
