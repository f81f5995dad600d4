//! Pattern Showcase Library
//!
//! Small, self-contained implementations of classic design patterns, each of
//! which reports its behaviour to an injectable output sink.
//!
//! # Architecture
//!
//! The only component with a real contract is the [`Broadcaster`]
//! (Observer / publish-subscribe):
//! - Subscribers are opaque handles compared by identity
//! - Delivery is synchronous and in subscription order
//! - Subscriber errors abort the broadcast by default ([`DeliveryPolicy::FailFast`])
//!   or are collected ([`DeliveryPolicy::Isolate`])
//!
//! The other patterns are illustrations:
//! - [`Counter`] - Module and Revealing Module
//! - [`Prototype`] / [`Car`] - cloning from a prototype
//! - [`Singleton`] - one lazily created instance
//! - [`GadgetFactory`] - type-keyed constructor lookup
//! - [`Pizza`] and its decorators - composition by delegation
//!
//! [`Showcase`] runs them all in order, driven by a [`ShowcaseConfig`].
//!
//! # Example Usage
//!
//! ```
//! use patterns_core::{MemorySink, Showcase, ShowcaseConfig, PatternKind};
//! use std::rc::Rc;
//!
//! let sink = MemorySink::new();
//! let config = ShowcaseConfig::new()
//!     .with_patterns(vec![PatternKind::Observer])
//!     .with_message("ping");
//!
//! let summary = Showcase::new(config, Rc::new(sink.clone())).run().unwrap();
//!
//! assert_eq!(summary.patterns_run, vec![PatternKind::Observer]);
//! assert_eq!(sink.lines()[1], "Callback was executed with data ping");
//! ```

// Public modules
pub mod broadcaster;
pub mod counter;
pub mod decorator;
pub mod factory;
pub mod prototype;
pub mod showcase;
pub mod singleton;
pub mod sink;
pub mod types;

// Re-export main types for convenience
pub use broadcaster::{Broadcaster, DeliveryPolicy, Subscriber, SubscriberResult};
pub use counter::{Counter, CounterStep, CounterStyle};
pub use decorator::{build_pizza, CheeseDecorator, Pizza, PlainPizza, SausageDecorator, Topping};
pub use factory::{Gadget, GadgetAttributes, GadgetConstructor, GadgetFactory, Laptop, Tablet};
pub use prototype::{Car, Prototype};
pub use showcase::{
    builtin_subscriber, CounterConfig, DecoratorConfig, FactoryConfig, GadgetOrder,
    ObserverConfig, PatternKind, Showcase, ShowcaseConfig, ShowcaseSummary, BUILTIN_SUBSCRIBERS,
};
pub use singleton::Singleton;
pub use sink::{ConsoleSink, LogSink, MemorySink, OutputSink, SharedSink};
pub use types::{BoxError, PatternError, Result, SubscriberFault};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty broadcaster delivers to nobody
        let broadcaster: Broadcaster<String> = Broadcaster::new();
        assert!(broadcaster.is_empty());
        assert!(!VERSION.is_empty());
    }
}
