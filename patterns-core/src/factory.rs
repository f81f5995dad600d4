//! Factory pattern
//!
//! A [`GadgetFactory`] maps a type name to a constructor. Callers ask for a
//! gadget by name and hand over loose attributes; missing numbers fall back to
//! zero, a missing name to an empty string and a missing network to `"0"`.

use crate::types::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Loose attributes accepted by every constructor
///
/// Unknown keys are ignored when deserializing, so a config entry may carry
/// fields a given gadget type does not use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetAttributes {
    #[serde(default)]
    pub ram: Option<u32>,
    #[serde(default)]
    pub hdd: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
}

impl GadgetAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set RAM in GB
    pub fn with_ram(mut self, ram: u32) -> Self {
        self.ram = Some(ram);
        self
    }

    /// Builder method: set disk size in GB
    pub fn with_hdd(mut self, hdd: u32) -> Self {
        self.hdd = Some(hdd);
        self
    }

    /// Builder method: set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: set network type (e.g. "4G")
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    pub ram: u32,
    pub hdd: u32,
    pub name: String,
}

impl Laptop {
    pub fn from_attributes(attributes: &GadgetAttributes) -> Self {
        Self {
            ram: attributes.ram.unwrap_or(0),
            hdd: attributes.hdd.unwrap_or(0),
            name: attributes.name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tablet {
    pub ram: u32,
    pub hdd: u32,
    pub network: String,
    pub name: String,
}

impl Tablet {
    pub fn from_attributes(attributes: &GadgetAttributes) -> Self {
        Self {
            ram: attributes.ram.unwrap_or(0),
            hdd: attributes.hdd.unwrap_or(0),
            network: attributes.network.clone().unwrap_or_else(|| "0".to_string()),
            name: attributes.name.clone().unwrap_or_default(),
        }
    }
}

/// Anything the factory can build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Gadget {
    Laptop(Laptop),
    Tablet(Tablet),
}

impl Gadget {
    pub fn name(&self) -> &str {
        match self {
            Gadget::Laptop(laptop) => &laptop.name,
            Gadget::Tablet(tablet) => &tablet.name,
        }
    }

    /// Render as a single JSON line
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Constructor registered under a type name
pub type GadgetConstructor = fn(&GadgetAttributes) -> Gadget;

/// Type-keyed constructor lookup
#[derive(Debug, Clone, Default)]
pub struct GadgetFactory {
    constructors: HashMap<String, GadgetConstructor>,
}

impl GadgetFactory {
    /// Create a factory with no registered types
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory that knows `Laptop` and `Tablet`
    pub fn with_builtin() -> Self {
        let mut factory = Self::new();
        factory.register("Laptop", |attrs| Gadget::Laptop(Laptop::from_attributes(attrs)));
        factory.register("Tablet", |attrs| Gadget::Tablet(Tablet::from_attributes(attrs)));
        factory
    }

    /// Register (or replace) the constructor for `kind`
    pub fn register(&mut self, kind: impl Into<String>, constructor: GadgetConstructor) {
        let kind = kind.into();
        if self.constructors.insert(kind.clone(), constructor).is_some() {
            log::debug!("Replaced constructor for gadget type '{}'", kind);
        }
    }

    /// Build a gadget of the given type
    pub fn create_gadget(&self, kind: &str, attributes: &GadgetAttributes) -> Result<Gadget> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| PatternError::UnknownGadget(kind.to_string()))?;

        log::debug!("Creating gadget of type '{}'", kind);
        Ok(constructor(attributes))
    }

    /// Registered type names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_kinds() {
        let factory = GadgetFactory::with_builtin();
        assert_eq!(factory.kinds(), vec!["Laptop", "Tablet"]);
    }

    #[test]
    fn test_create_laptop_with_defaults() {
        let factory = GadgetFactory::with_builtin();
        let attributes = GadgetAttributes::new()
            .with_ram(8)
            .with_name("Bab's MacBook Pro");

        let gadget = factory.create_gadget("Laptop", &attributes).unwrap();

        assert_eq!(
            gadget,
            Gadget::Laptop(Laptop {
                ram: 8,
                hdd: 0,
                name: "Bab's MacBook Pro".to_string(),
            })
        );
    }

    #[test]
    fn test_create_tablet() {
        let factory = GadgetFactory::with_builtin();
        let attributes = GadgetAttributes::new()
            .with_ram(4)
            .with_hdd(128)
            .with_name("Bab's iPad")
            .with_network("4G");

        let gadget = factory.create_gadget("Tablet", &attributes).unwrap();

        assert_eq!(gadget.name(), "Bab's iPad");
        assert_eq!(
            gadget.to_json().unwrap(),
            r#"{"type":"Tablet","ram":4,"hdd":128,"network":"4G","name":"Bab's iPad"}"#
        );
    }

    #[test]
    fn test_tablet_without_network_defaults_to_zero() {
        let factory = GadgetFactory::with_builtin();
        let gadget = factory
            .create_gadget("Tablet", &GadgetAttributes::new().with_ram(2))
            .unwrap();

        assert_eq!(
            gadget.to_json().unwrap(),
            r#"{"type":"Tablet","ram":2,"hdd":0,"network":"0","name":""}"#
        );
    }

    #[test]
    fn test_unknown_kind() {
        let factory = GadgetFactory::with_builtin();
        let result = factory.create_gadget("Phone", &GadgetAttributes::new());
        assert!(matches!(result, Err(PatternError::UnknownGadget(kind)) if kind == "Phone"));
    }

    #[test]
    fn test_register_alias() {
        let mut factory = GadgetFactory::new();
        factory.register("Notebook", |attrs| Gadget::Laptop(Laptop::from_attributes(attrs)));

        let gadget = factory.create_gadget("Notebook", &GadgetAttributes::new()).unwrap();
        assert!(matches!(gadget, Gadget::Laptop(_)));
    }

    #[test]
    fn test_attributes_ignore_unknown_keys() {
        let attributes: GadgetAttributes =
            serde_json::from_str(r#"{"ram": 8, "ssd": 256, "name": "Laptop"}"#).unwrap();
        assert_eq!(attributes.ram, Some(8));
        assert_eq!(attributes.hdd, None);
    }
}
