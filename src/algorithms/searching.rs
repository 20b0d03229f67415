//! Searching product sequences while counting probes.

use std::fmt;

use crate::algorithms::partition_sort_by_id;
use crate::domain::{eq_ignore_case, ProductRef};

/// Result of a search: the product found, if any, and the number of probes made.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub product: Option<ProductRef>,
    pub iterations: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.product.is_some()
    }
}

/// What to look for, and therefore which algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Binary search on the identifier.
    Id(i32),
    /// Linear, case-insensitive search on the name.
    Name(String),
}

impl SearchQuery {
    pub fn algorithm(&self) -> &'static str {
        match self {
            SearchQuery::Id(_) => "binary search",
            SearchQuery::Name(_) => "linear search",
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Id(id) => write!(f, "id={id}"),
            SearchQuery::Name(name) => write!(f, "name={name}"),
        }
    }
}

/// Runs `query` against `products`.
///
/// Identifier queries sort the sequence by identifier first, since binary
/// search needs that order; name queries scan the sequence as given.
pub fn search(products: Vec<ProductRef>, query: &SearchQuery) -> SearchOutcome {
    match query {
        SearchQuery::Id(id) => binary_search_by_id(&partition_sort_by_id(products), *id),
        SearchQuery::Name(name) => linear_search_by_name(&products, name),
    }
}

/// Binary search for `id`. `products` must be sorted ascending by identifier;
/// otherwise the result is unspecified.
///
/// `iterations` counts every midpoint evaluated, including the matching one.
pub fn binary_search_by_id(products: &[ProductRef], id: i32) -> SearchOutcome {
    let mut iterations = 0;
    // Half-open [low, high); the midpoint equals floor((low + last) / 2).
    let mut low = 0;
    let mut high = products.len();

    while low < high {
        iterations += 1;
        let mid = low + (high - 1 - low) / 2;
        let candidate = &products[mid];

        if candidate.id == id {
            return SearchOutcome {
                product: Some(candidate.clone()),
                iterations,
            };
        } else if candidate.id < id {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    SearchOutcome {
        product: None,
        iterations,
    }
}

/// First product whose name equals `name` ignoring case.
///
/// `iterations` is the 1-based position of the match, or the sequence
/// length when nothing matches.
pub fn linear_search_by_name(products: &[ProductRef], name: &str) -> SearchOutcome {
    let mut iterations = 0;
    for product in products {
        iterations += 1;
        if eq_ignore_case(&product.name, name) {
            return SearchOutcome {
                product: Some(product.clone()),
                iterations,
            };
        }
    }
    SearchOutcome {
        product: None,
        iterations,
    }
}
