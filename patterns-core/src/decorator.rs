//! Decorator pattern
//!
//! Toppings wrap a pizza and delegate to it, adding to the description and the
//! price. No inheritance, only composition.

use serde::{Deserialize, Serialize};

/// Capability set shared by the base pizza and every decorator
pub trait Pizza {
    fn description(&self) -> String;
    fn price(&self) -> u32;
}

impl<P: Pizza + ?Sized> Pizza for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn price(&self) -> u32 {
        (**self).price()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPizza;

impl Pizza for PlainPizza {
    fn description(&self) -> String {
        "Pizza".to_string()
    }

    fn price(&self) -> u32 {
        5
    }
}

#[derive(Debug, Clone)]
pub struct CheeseDecorator<P> {
    pizza: P,
}

impl<P: Pizza> CheeseDecorator<P> {
    pub fn new(pizza: P) -> Self {
        Self { pizza }
    }
}

impl<P: Pizza> Pizza for CheeseDecorator<P> {
    fn description(&self) -> String {
        self.pizza.description() + ", phô mai"
    }

    fn price(&self) -> u32 {
        self.pizza.price() + 1
    }
}

#[derive(Debug, Clone)]
pub struct SausageDecorator<P> {
    pizza: P,
}

impl<P: Pizza> SausageDecorator<P> {
    pub fn new(pizza: P) -> Self {
        Self { pizza }
    }
}

impl<P: Pizza> Pizza for SausageDecorator<P> {
    fn description(&self) -> String {
        self.pizza.description() + ", xúc xích"
    }

    fn price(&self) -> u32 {
        self.pizza.price() + 1
    }
}

/// Topping names usable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Cheese,
    Sausage,
}

impl Topping {
    /// Wrap `pizza` in the decorator for this topping
    pub fn wrap(self, pizza: Box<dyn Pizza>) -> Box<dyn Pizza> {
        match self {
            Topping::Cheese => Box::new(CheeseDecorator::new(pizza)),
            Topping::Sausage => Box::new(SausageDecorator::new(pizza)),
        }
    }
}

/// Build a plain pizza wrapped in `toppings`, innermost first
pub fn build_pizza(toppings: &[Topping]) -> Box<dyn Pizza> {
    toppings
        .iter()
        .fold(Box::new(PlainPizza) as Box<dyn Pizza>, |pizza, topping| topping.wrap(pizza))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_chain() {
        let pizza = SausageDecorator::new(CheeseDecorator::new(PlainPizza));
        assert_eq!(pizza.description(), "Pizza, phô mai, xúc xích");
        assert_eq!(pizza.price(), 7);
    }

    #[test]
    fn test_build_from_toppings() {
        let pizza = build_pizza(&[Topping::Sausage, Topping::Sausage, Topping::Cheese]);
        assert_eq!(pizza.description(), "Pizza, xúc xích, xúc xích, phô mai");
        assert_eq!(pizza.price(), 8);
    }

    #[test]
    fn test_no_toppings() {
        let pizza = build_pizza(&[]);
        assert_eq!(pizza.description(), "Pizza");
        assert_eq!(pizza.price(), 5);
    }
}
