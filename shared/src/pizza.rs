//! Pizza pricing/description chain
//!
//! A [`PizzaItem`] is a [`BasePizza`] with an ordered stack of [`Topping`]s
//! layered on top. Cost, description and preparation steps are always
//! derived from the whole chain, innermost (base) first. The chain is built
//! bottom-up with a consuming builder and is immutable once constructed;
//! a different combination requires building a new chain from the base.

use crate::money::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Size
// ============================================================================

/// Pizza size with its fixed base price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl PizzaSize {
    /// Base price for this size
    pub fn base_price(&self) -> Decimal {
        match self {
            PizzaSize::Small => Decimal::new(899, 2),
            PizzaSize::Medium => Decimal::new(1099, 2),
            PizzaSize::Large => Decimal::new(1299, 2),
            PizzaSize::ExtraLarge => Decimal::new(1499, 2),
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
            PizzaSize::ExtraLarge => "Extra Large",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Base
// ============================================================================

/// The core pizza every chain starts from: a size and a crust type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasePizza {
    pub size: PizzaSize,
    pub crust: String,
}

impl BasePizza {
    pub fn new(size: PizzaSize, crust: impl Into<String>) -> Self {
        Self {
            size,
            crust: crust.into(),
        }
    }

    /// Fixed price keyed by size
    pub fn cost(&self) -> Decimal {
        self.size.base_price()
    }

    pub fn describe(&self) -> String {
        format!("{} {} crust pizza", self.size, self.crust)
    }

    fn preparation_steps(&self) -> Vec<String> {
        vec![
            format!("Preparing {} crust", self.crust),
            format!("Baking {} size pizza", self.size),
        ]
    }
}

// ============================================================================
// Toppings
// ============================================================================

/// A single topping layer with a fixed price increment
///
/// Variants carry their kind where the original menu distinguishes one
/// (cheese, olives, vegetables); the increment is fixed per variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Cheese { kind: String },
    Pepperoni,
    Mushroom,
    Bacon,
    Olive { kind: String },
    Vegetable { kind: String },
}

impl Topping {
    /// Fixed incremental cost of this topping
    pub fn cost(&self) -> Decimal {
        match self {
            Topping::Cheese { .. } => Decimal::new(150, 2),
            Topping::Pepperoni => Decimal::new(200, 2),
            Topping::Mushroom => Decimal::new(125, 2),
            Topping::Bacon => Decimal::new(250, 2),
            Topping::Olive { .. } => Decimal::new(100, 2),
            Topping::Vegetable { .. } => Decimal::new(75, 2),
        }
    }

    /// Textual fragment appended to the chain description
    pub fn fragment(&self) -> String {
        match self {
            Topping::Cheese { kind } => format!("{} cheese", kind),
            Topping::Pepperoni => "pepperoni".to_string(),
            Topping::Mushroom => "mushrooms".to_string(),
            Topping::Bacon => "crispy bacon".to_string(),
            Topping::Olive { kind } => format!("{} olives", kind),
            Topping::Vegetable { kind } => kind.clone(),
        }
    }

    /// Human-readable preparation step for this layer
    pub fn preparation_step(&self) -> String {
        let what = match self {
            Topping::Cheese { kind } => format!("{} cheese", kind),
            Topping::Pepperoni => "pepperoni slices".to_string(),
            Topping::Mushroom => "fresh mushrooms".to_string(),
            Topping::Bacon => "crispy bacon strips".to_string(),
            Topping::Olive { kind } => format!("{} olives", kind),
            Topping::Vegetable { kind } => kind.clone(),
        };
        format!("Adding {} (+{})", what, format_amount(self.cost()))
    }
}

// ============================================================================
// Chain
// ============================================================================

/// A priced order item: base pizza plus zero or more stacked toppings
///
/// Cost and description are always the sum/concatenation of the chain
/// evaluated innermost-first; attaching a topping never mutates existing
/// layers. A chain with zero toppings is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PizzaItem {
    base: BasePizza,
    toppings: Vec<Topping>,
}

impl PizzaItem {
    pub fn new(size: PizzaSize, crust: impl Into<String>) -> Self {
        Self {
            base: BasePizza::new(size, crust),
            toppings: Vec::new(),
        }
    }

    /// Wrap the chain with one more topping (builder, bottom-up)
    pub fn with_topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn base(&self) -> &BasePizza {
        &self.base
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Total cost: base price plus every topping increment, O(n)
    pub fn cost(&self) -> Decimal {
        self.toppings
            .iter()
            .fold(self.base.cost(), |acc, t| acc + t.cost())
    }

    /// Full description in wrap order, e.g.
    /// `Medium thin crust pizza, mozzarella cheese, pepperoni`
    pub fn describe(&self) -> String {
        let mut description = self.base.describe();
        for topping in &self.toppings {
            description.push_str(", ");
            description.push_str(&topping.fragment());
        }
        description
    }

    /// Ordered preparation steps, base first then toppings in wrap order
    pub fn preparation_steps(&self) -> Vec<String> {
        let mut steps = self.base.preparation_steps();
        steps.extend(self.toppings.iter().map(Topping::preparation_step));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices_by_size() {
        assert_eq!(PizzaSize::Small.base_price(), Decimal::new(899, 2));
        assert_eq!(PizzaSize::Medium.base_price(), Decimal::new(1099, 2));
        assert_eq!(PizzaSize::Large.base_price(), Decimal::new(1299, 2));
        assert_eq!(PizzaSize::ExtraLarge.base_price(), Decimal::new(1499, 2));
    }

    #[test]
    fn test_zero_toppings_is_valid() {
        let pizza = PizzaItem::new(PizzaSize::Medium, "thin");
        assert_eq!(pizza.cost(), Decimal::new(1099, 2));
        assert_eq!(pizza.describe(), "Medium thin crust pizza");
        assert_eq!(
            pizza.preparation_steps(),
            vec![
                "Preparing thin crust".to_string(),
                "Baking Medium size pizza".to_string(),
            ]
        );
    }

    #[test]
    fn test_cost_accumulates_per_topping() {
        let pizza = PizzaItem::new(PizzaSize::Medium, "thin").with_topping(Topping::Cheese {
            kind: "mozzarella".to_string(),
        });
        assert_eq!(pizza.cost(), Decimal::new(1249, 2)); // 10.99 + 1.50

        let pizza = pizza
            .with_topping(Topping::Pepperoni)
            .with_topping(Topping::Mushroom);
        assert_eq!(pizza.cost(), Decimal::new(1574, 2)); // + 2.00 + 1.25
    }

    #[test]
    fn test_cost_is_wrap_order_independent() {
        let a = PizzaItem::new(PizzaSize::Large, "stuffed")
            .with_topping(Topping::Bacon)
            .with_topping(Topping::Olive {
                kind: "black".to_string(),
            });
        let b = PizzaItem::new(PizzaSize::Large, "stuffed")
            .with_topping(Topping::Olive {
                kind: "black".to_string(),
            })
            .with_topping(Topping::Bacon);
        assert_eq!(a.cost(), b.cost());
        assert_ne!(a.describe(), b.describe());
    }

    #[test]
    fn test_description_preserves_wrap_order() {
        let pizza = PizzaItem::new(PizzaSize::Small, "thick")
            .with_topping(Topping::Cheese {
                kind: "cheddar".to_string(),
            })
            .with_topping(Topping::Vegetable {
                kind: "bell peppers".to_string(),
            });
        assert_eq!(
            pizza.describe(),
            "Small thick crust pizza, cheddar cheese, bell peppers"
        );
    }

    #[test]
    fn test_preparation_steps_innermost_first() {
        let pizza = PizzaItem::new(PizzaSize::ExtraLarge, "pan")
            .with_topping(Topping::Pepperoni)
            .with_topping(Topping::Bacon);
        assert_eq!(
            pizza.preparation_steps(),
            vec![
                "Preparing pan crust".to_string(),
                "Baking Extra Large size pizza".to_string(),
                "Adding pepperoni slices (+$2.00)".to_string(),
                "Adding crispy bacon strips (+$2.50)".to_string(),
            ]
        );
    }

    #[test]
    fn test_wrapping_does_not_mutate_inner_layers() {
        let plain = PizzaItem::new(PizzaSize::Medium, "thin");
        let plain_cost = plain.cost();
        let loaded = plain.clone().with_topping(Topping::Bacon);
        assert_eq!(plain.cost(), plain_cost);
        assert_eq!(loaded.cost(), plain_cost + Decimal::new(250, 2));
    }

    #[test]
    fn test_size_wire_naming() {
        assert_eq!(
            serde_json::to_string(&PizzaSize::ExtraLarge).unwrap(),
            "\"EXTRA_LARGE\""
        );
    }
}
