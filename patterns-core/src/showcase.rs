//! Showcase runner
//!
//! Replays every pattern in a fixed order against an output sink, the way a
//! tutorial script would. What runs, and with which inputs, comes from
//! [`ShowcaseConfig`]; its defaults reproduce the classic walkthrough.

use crate::broadcaster::{Broadcaster, DeliveryPolicy, Subscriber};
use crate::counter::{Counter, CounterStep, CounterStyle};
use crate::decorator::{build_pizza, Topping};
use crate::factory::{GadgetAttributes, GadgetFactory};
use crate::prototype::{Car, Prototype};
use crate::sink::{CountingSink, SharedSink};
use crate::singleton::Singleton;
use crate::types::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Subscriber names understood by [`builtin_subscriber`]
pub const BUILTIN_SUBSCRIBERS: [&str; 4] = ["console", "shout", "length", "reject"];

/// The patterns the showcase knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Module,
    RevealingModule,
    Observer,
    Prototype,
    Singleton,
    Factory,
    Decorator,
}

impl PatternKind {
    /// Every pattern, in walkthrough order
    pub const ALL: [PatternKind; 7] = [
        PatternKind::Module,
        PatternKind::RevealingModule,
        PatternKind::Observer,
        PatternKind::Prototype,
        PatternKind::Singleton,
        PatternKind::Factory,
        PatternKind::Decorator,
    ];

    /// Identifier used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Module => "module",
            PatternKind::RevealingModule => "revealing-module",
            PatternKind::Observer => "observer",
            PatternKind::Prototype => "prototype",
            PatternKind::Singleton => "singleton",
            PatternKind::Factory => "factory",
            PatternKind::Decorator => "decorator",
        }
    }

    /// Heading written before the pattern runs
    pub fn title(self) -> &'static str {
        match self {
            PatternKind::Module => "Module Pattern",
            PatternKind::RevealingModule => "Revealing Module Pattern",
            PatternKind::Observer => "Observer Pattern",
            PatternKind::Prototype => "Prototype Design Pattern",
            PatternKind::Singleton => "Singleton Design Pattern",
            PatternKind::Factory => "Factory Pattern",
            PatternKind::Decorator => "Decorator Pattern",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = PatternKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown pattern '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Configuration for a showcase run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Patterns to run, in order
    pub patterns: Vec<PatternKind>,
    pub observer: ObserverConfig,
    pub counter: CounterConfig,
    pub factory: FactoryConfig,
    pub decorator: DecoratorConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            patterns: PatternKind::ALL.to_vec(),
            observer: ObserverConfig::default(),
            counter: CounterConfig::default(),
            factory: FactoryConfig::default(),
            decorator: DecoratorConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: run only these patterns
    pub fn with_patterns(mut self, patterns: Vec<PatternKind>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Builder method: set the observer payload
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.observer.message = message.into();
        self
    }

    /// Builder method: set the observer subscribers by name
    pub fn with_subscribers(mut self, subscribers: Vec<String>) -> Self {
        self.observer.subscribers = subscribers;
        self
    }

    /// Builder method: set the observer delivery policy
    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.observer.policy = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Payload broadcast to every subscriber
    pub message: String,
    /// Built-in subscriber names, in subscribe order
    pub subscribers: Vec<String>,
    pub policy: DeliveryPolicy,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            message: "Hello I Tran Huu Tai".to_string(),
            subscribers: vec!["console".to_string()],
            policy: DeliveryPolicy::FailFast,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Steps applied to both the module and the revealing module counter
    pub steps: Vec<CounterStep>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: vec![
                CounterStep::Increase,
                CounterStep::Increase,
                CounterStep::Decrease,
                CounterStep::Reset,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub gadgets: Vec<GadgetOrder>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            gadgets: vec![
                GadgetOrder {
                    kind: "Laptop".to_string(),
                    attributes: GadgetAttributes::new()
                        .with_ram(8)
                        .with_name("Bab's MacBook Pro"),
                },
                GadgetOrder {
                    kind: "Tablet".to_string(),
                    attributes: GadgetAttributes::new()
                        .with_ram(4)
                        .with_hdd(128)
                        .with_name("Bab's iPad")
                        .with_network("4G"),
                },
            ],
        }
    }
}

/// One gadget to build: a type name plus its attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetOrder {
    pub kind: String,
    #[serde(flatten)]
    pub attributes: GadgetAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Toppings applied innermost first
    pub toppings: Vec<Topping>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            toppings: vec![Topping::Cheese, Topping::Sausage],
        }
    }
}

/// What a showcase run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowcaseSummary {
    pub patterns_run: Vec<PatternKind>,
    pub lines_written: usize,
    /// Subscriber failures absorbed under the isolating policy
    pub subscriber_failures: usize,
}

/// Resolve a built-in subscriber by name
///
/// Every built-in writes to `sink`; `reject` always fails, which makes the
/// delivery policy visible.
pub fn builtin_subscriber(name: &str, sink: &SharedSink) -> Result<Subscriber<String>> {
    let sink = Rc::clone(sink);
    let subscriber = match name {
        "console" => Subscriber::new(move |data: &String| {
            sink.write_line(&format!("Callback was executed with data {}", data));
        }),
        "shout" => Subscriber::new(move |data: &String| sink.write_line(&data.to_uppercase())),
        "length" => Subscriber::new(move |data: &String| {
            sink.write_line(&format!("Received {} characters", data.chars().count()));
        }),
        "reject" => Subscriber::fallible(|data: &String| {
            Err(format!("refused to handle {:?}", data).into())
        }),
        other => return Err(PatternError::InvalidSubscriber(other.to_string())),
    };
    Ok(subscriber.with_name(name))
}

/// Runs the configured patterns against a sink
pub struct Showcase {
    config: ShowcaseConfig,
    counting: Rc<CountingSink>,
    sink: SharedSink,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig, sink: SharedSink) -> Self {
        let counting = Rc::new(CountingSink::new(sink));
        let sink: SharedSink = counting.clone();
        Self { config, counting, sink }
    }

    /// Run every configured pattern in order
    ///
    /// Stops at the first error. Under the isolating policy subscriber
    /// failures are reported to the sink and counted instead.
    pub fn run(&self) -> Result<ShowcaseSummary> {
        let lines_before = self.counting.count();
        let mut summary = ShowcaseSummary::default();

        for &kind in &self.config.patterns {
            summary.subscriber_failures += self.execute(kind)?;
            summary.patterns_run.push(kind);
        }

        summary.lines_written = self.counting.count() - lines_before;
        log::info!(
            "Showcase finished: {} pattern(s), {} line(s)",
            summary.patterns_run.len(),
            summary.lines_written
        );
        Ok(summary)
    }

    /// Run a single pattern, regardless of the configured list
    pub fn run_pattern(&self, kind: PatternKind) -> Result<()> {
        self.execute(kind).map(|_| ())
    }

    fn execute(&self, kind: PatternKind) -> Result<usize> {
        log::info!("Running {}", kind.title());
        self.sink.write_line(&format!("~ {}", kind.title()));

        match kind {
            PatternKind::Module => self.run_counter(CounterStyle::Module),
            PatternKind::RevealingModule => self.run_counter(CounterStyle::Revealing),
            PatternKind::Observer => return self.run_observer(),
            PatternKind::Prototype => self.run_prototype(),
            PatternKind::Singleton => self.run_singleton(),
            PatternKind::Factory => self.run_factory()?,
            PatternKind::Decorator => self.run_decorator(),
        }
        Ok(0)
    }

    fn run_counter(&self, style: CounterStyle) {
        let mut counter = Counter::new(style, Rc::clone(&self.sink));
        for &step in &self.config.counter.steps {
            counter.apply(step);
        }
    }

    fn run_observer(&self) -> Result<usize> {
        let config = &self.config.observer;
        let mut broadcaster = Broadcaster::new().with_policy(config.policy);
        for name in &config.subscribers {
            broadcaster.subscribe(builtin_subscriber(name, &self.sink)?);
        }

        match broadcaster.broadcast(&config.message) {
            Ok(()) => Ok(0),
            Err(PatternError::SubscriberFailures(faults)) => {
                for fault in &faults {
                    self.sink.write_line(&format!("Subscriber failed: {}", fault));
                }
                Ok(faults.len())
            }
            Err(e) => Err(e),
        }
    }

    fn run_prototype(&self) {
        let car = Car::default();
        let copy = car.clone_prototype();
        self.sink.write_line(&format!("wheels: {}", copy.wheels));
        self.sink.write_line(&format!("start(): {}", copy.start()));
    }

    fn run_singleton(&self) {
        let first = Singleton::instance();
        let second = Singleton::instance();
        self.sink
            .write_line(&format!("same instance: {}", Singleton::is_same(first, second)));
    }

    fn run_factory(&self) -> Result<()> {
        let factory = GadgetFactory::with_builtin();
        for order in &self.config.factory.gadgets {
            let gadget = factory.create_gadget(&order.kind, &order.attributes)?;
            self.sink
                .write_line(&format!("{}: {}", order.kind, gadget.to_json()?));
        }
        Ok(())
    }

    fn run_decorator(&self) {
        let pizza = build_pizza(&self.config.decorator.toppings);
        self.sink
            .write_line(&format!("description: {}", pizza.description()));
        self.sink.write_line(&format!("price: {}", pizza.price()));
    }
}
