//! Prototype pattern
//!
//! New objects are produced by copying an existing one. `Clone` already is
//! the prototype operation; [`Prototype`] just names it.

use serde::{Deserialize, Serialize};

/// Objects that can be produced by copying a prototype
pub trait Prototype: Clone {
    fn clone_prototype(&self) -> Self {
        self.clone()
    }
}

impl<T: Clone> Prototype for T {}

/// The prototype used in the showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub wheels: u32,
}

impl Car {
    pub fn start(&self) -> &'static str {
        "started"
    }
}

impl Default for Car {
    fn default() -> Self {
        Self { wheels: 4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_fields_and_behaviour() {
        let car = Car::default();
        let copy = car.clone_prototype();

        assert_eq!(copy.wheels, 4);
        assert_eq!(copy.start(), "started");
    }

    #[test]
    fn test_clone_is_independent() {
        let car = Car::default();
        let mut copy = car.clone_prototype();
        copy.wheels = 6;

        assert_eq!(car.wheels, 4);
        assert_eq!(copy.wheels, 6);
    }
}
