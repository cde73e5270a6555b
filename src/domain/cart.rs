use indexmap::IndexMap;

use super::{Money, Product};

/// A catalog product together with how many of it the shopper wants.
///
/// A line item never holds a quantity of zero; the cart drops it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// What a single add or remove did to its line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Inserted,
    Incremented { quantity: u32 },
    Decremented { quantity: u32 },
    Removed,
    /// Nothing changed: `remove` of an id not in the cart, or `add` on a line
    /// already at `u32::MAX`.
    Unchanged,
}

/// The shopping cart state engine.
///
/// Line items are keyed by product id and kept in the order they were first
/// added. Quantity changes never move an item.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: IndexMap<String, CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, appending a new line if the product is not
    /// in the cart yet.
    pub fn add(&mut self, product: Product) -> LineChange {
        match self.lines.get_mut(&product.id) {
            Some(item) => match item.quantity.checked_add(1) {
                Some(quantity) => {
                    item.quantity = quantity;
                    LineChange::Incremented { quantity }
                }
                None => LineChange::Unchanged,
            },
            None => {
                self.lines
                    .insert(product.id.clone(), CartItem { product, quantity: 1 });
                LineChange::Inserted
            }
        }
    }

    /// Takes one unit of `product_id` out of the cart. The last unit removes the
    /// line entirely; an unknown id is ignored.
    pub fn remove(&mut self, product_id: &str) -> LineChange {
        let Some(item) = self.lines.get_mut(product_id) else {
            return LineChange::Unchanged;
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            LineChange::Decremented {
                quantity: item.quantity,
            }
        } else {
            // shift_remove keeps the remaining lines in insertion order
            self.lines.shift_remove(product_id);
            LineChange::Removed
        }
    }

    /// Empties the cart and returns what it held.
    pub fn clear(&mut self) -> CartSnapshot {
        let dropped = self.snapshot();
        self.lines.clear();
        dropped
    }

    pub fn total_price(&self) -> Money {
        self.iter().map(CartItem::line_total).sum()
    }

    /// A copy of the current line items in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.lines.values()
    }

    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.lines.get(product_id).map(|item| item.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items(),
            total_price: self.total_price(),
        }
    }
}

/// Cart contents and total captured at the same instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total_price: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
