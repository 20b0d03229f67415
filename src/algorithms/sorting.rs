//! Sorting product sequences by identifier, price or name.
//!
//! ## Design notes
//!
//! * **Partition sorts** (identifier, price) always pivot on the last element.
//!   Elements strictly below the pivot go left, everything else goes right,
//!   both sides keeping scan order. Pending work lives on a heap-allocated
//!   stack, so an adversarial input costs O(n²) time but never call-stack depth.
//! * **Merge sort** (name) splits at `n / 2` and prefers the left run on ties,
//!   which makes it stable. Recursion depth is bounded by `log2 n`.
//! * Every function consumes its input and returns a newly ordered `Vec`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::{cmp_ignore_case, Product, ProductRef};

/// Key a product sequence can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Price,
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SortKey::Id => "id",
            SortKey::Price => "price",
            SortKey::Name => "name",
        };
        f.write_str(key)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

/// Orders `products` with the algorithm assigned to `key`.
pub fn sort_by(key: SortKey, products: Vec<ProductRef>) -> Vec<ProductRef> {
    match key {
        SortKey::Id => partition_sort_by_id(products),
        SortKey::Price => partition_sort_by_price(products),
        SortKey::Name => merge_sort_by_name(products),
    }
}

/// Ascending by identifier. Not stable; see the module notes for tie order.
pub fn partition_sort_by_id(products: Vec<ProductRef>) -> Vec<ProductRef> {
    partition_sort_by(products, |p| p.id)
}

/// Ascending by price, with the same pivot and tie policy as [`partition_sort_by_id`].
pub fn partition_sort_by_price(products: Vec<ProductRef>) -> Vec<ProductRef> {
    partition_sort_by(products, |p| p.price)
}

enum Work {
    Sort(Vec<ProductRef>),
    Emit(ProductRef),
}

fn partition_sort_by<K, F>(products: Vec<ProductRef>, key: F) -> Vec<ProductRef>
where
    K: Ord,
    F: Fn(&Product) -> K,
{
    let mut sorted = Vec::with_capacity(products.len());
    let mut pending = vec![Work::Sort(products)];

    // Pushed in reverse so the left partition is finished first:
    // left ++ [pivot] ++ right.
    while let Some(work) = pending.pop() {
        match work {
            Work::Emit(product) => sorted.push(product),
            Work::Sort(mut run) => {
                if run.len() <= 1 {
                    sorted.append(&mut run);
                    continue;
                }
                let Some(pivot) = run.pop() else { continue };
                let pivot_key = key(&pivot);
                let (left, right): (Vec<_>, Vec<_>) =
                    run.into_iter().partition(|p| key(p) < pivot_key);

                if !right.is_empty() {
                    pending.push(Work::Sort(right));
                }
                pending.push(Work::Emit(pivot));
                if !left.is_empty() {
                    pending.push(Work::Sort(left));
                }
            }
        }
    }

    sorted
}

/// Ascending by name, ignoring case. Stable.
pub fn merge_sort_by_name(products: Vec<ProductRef>) -> Vec<ProductRef> {
    if products.len() <= 1 {
        return products;
    }
    let mut left = products;
    let right = left.split_off(left.len() / 2);
    merge_by_name(merge_sort_by_name(left), merge_sort_by_name(right))
}

fn merge_by_name(left: Vec<ProductRef>, right: Vec<ProductRef>) -> Vec<ProductRef> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp_ignore_case(&r.name, &l.name) != Ordering::Less,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
