//! Stable top-down merge sort over item sequences.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity};

use crate::item::Item;

/// Numeric field to order by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    Qty,
    Id,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Qty => "qty",
            SortField::Id => "id",
        }
    }

    /// Compare two items on this field only.
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            // Prices are validated finite, so `partial_cmp` only sees comparable values.
            SortField::Price => a.price().partial_cmp(&b.price()).unwrap_or(Ordering::Equal),
            SortField::Qty => a.qty().cmp(&b.qty()),
            SortField::Id => a.id().cmp(&b.id()),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortField::Price),
            "qty" | "quantity" => Ok(SortField::Qty),
            "id" => Ok(SortField::Id),
            other => Err(DomainError::validation(format!("unknown sort field '{other}'"))),
        }
    }
}

/// Return `items` reordered by `field`.
///
/// Stable in both directions: items with equal keys keep their input order
/// (descending does not reverse ties). Works on owned items or on borrowed
/// views (`Vec<&Item>`); elements are moved, never modified.
pub fn sort<T>(items: Vec<T>, field: SortField, ascending: bool) -> Vec<T>
where
    T: Borrow<Item>,
{
    let precedes = |a: &Item, b: &Item| {
        let ord = field.compare(a, b);
        if ascending {
            ord == Ordering::Less
        } else {
            ord == Ordering::Greater
        }
    };
    merge_sort(items, &precedes)
}

fn merge_sort<T, F>(mut items: Vec<T>, precedes: &F) -> Vec<T>
where
    T: Borrow<Item>,
    F: Fn(&Item, &Item) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, precedes);
    let right = merge_sort(right, precedes);
    merge(left, right, precedes)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, precedes: &F) -> Vec<T>
where
    T: Borrow<Item>,
    F: Fn(&Item, &Item) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Right wins only when strictly ahead; ties go to the left run.
        let next = if precedes(r.borrow(), l.borrow()) {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }
    out.extend(left);
    out.extend(right);
    out
}
