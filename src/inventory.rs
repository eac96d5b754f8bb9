use crate::{InvsError, Result};
use indexmap::IndexMap;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Item name to quantity, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    pub(crate) items: IndexMap<String, i64>,
}

pub fn parse_item(text: &str) -> Result<&str> {
    if text.is_empty() {
        return Err(InvsError::InvalidItem(text.to_owned()).logged());
    }
    Ok(text)
}

pub fn parse_qty(item: &str, text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        InvsError::InvalidQty {
            item: item.to_owned(),
            qty: text.to_owned(),
        }
        .logged()
    })
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory {
            items: IndexMap::new(),
        }
    }

    pub fn add(&mut self, item: &str, qty: i64) -> Result<()> {
        let item = parse_item(item)?;
        let current = self.items.get(item).copied().unwrap_or(0);
        let total = current
            .checked_add(qty)
            .ok_or_else(|| out_of_range(item, current, '+', qty))?;
        self.items.insert(item.to_owned(), total);
        info!("Added {qty} of {item}.");
        self.settle(item, total);
        Ok(())
    }

    pub fn remove(&mut self, item: &str, qty: i64) -> Result<()> {
        let item = parse_item(item)?;
        let current = match self.items.get_mut(item) {
            Some(current) => current,
            None => {
                warn!("Failed to remove '{item}'. Item not in stock.");
                return Err(InvsError::NotFound(item.to_owned()));
            }
        };
        let left = current
            .checked_sub(qty)
            .ok_or_else(|| out_of_range(item, *current, '-', qty))?;
        *current = left;
        info!("Removed {qty} of {item}.");
        self.settle(item, left);
        Ok(())
    }

    /// `add` for values of unknown shape, e.g. straight out of a JSON document.
    pub fn add_raw(&mut self, item: &Value, qty: &Value) -> Result<()> {
        let (item, qty) = untyped(item, qty)?;
        self.add(item, qty)
    }

    pub fn remove_raw(&mut self, item: &Value, qty: &Value) -> Result<()> {
        let (item, qty) = untyped(item, qty)?;
        self.remove(item, qty)
    }

    /// Quantity held for `item`, or `None` when it is not stocked.
    pub fn get(&self, item: &str) -> Option<i64> {
        self.items.get(item).copied()
    }

    /// Like [`Inventory::get`], but an absent item reads as `0` and is
    /// reported as a warning.
    pub fn get_qty(&self, item: &str) -> i64 {
        match self.get(item) {
            Some(qty) => qty,
            None => {
                warn!("Item '{item}' not found in stock.");
                0
            }
        }
    }

    /// Names of the items holding strictly less than `threshold`.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn render_report(&self) -> String {
        let mut report = String::from("--- Items Report ---\n");
        if self.items.is_empty() {
            report.push_str("Inventory is empty.\n");
        }
        for (item, qty) in &self.items {
            report.push_str(&format!("{item} -> {qty}\n"));
        }
        report.push_str("--------------------\n");
        report
    }

    /// Items and their quantities, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Number of stocked items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // an item never stays stocked at or below zero after a mutation
    fn settle(&mut self, item: &str, qty: i64) {
        if qty <= 0 {
            self.items.shift_remove(item);
            info!("Item {item} removed (quantity <= 0).");
        }
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_report())
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Inventory {
        Inventory {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn out_of_range(item: &str, current: i64, op: char, qty: i64) -> InvsError {
    InvsError::QtyOutOfRange {
        item: item.to_owned(),
        current,
        op,
        qty,
    }
    .logged()
}

fn untyped<'a>(item: &'a Value, qty: &Value) -> Result<(&'a str, i64)> {
    let item = match item.as_str() {
        Some(item) => parse_item(item)?,
        None => return Err(InvsError::InvalidItem(item.to_string()).logged()),
    };
    match qty.as_i64() {
        Some(qty) => Ok((item, qty)),
        None => Err(InvsError::InvalidQty {
            item: item.to_owned(),
            qty: qty.to_string(),
        }
        .logged()),
    }
}
