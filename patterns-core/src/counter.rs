//! Module and Revealing Module patterns
//!
//! Both styles boil down to the same thing in Rust: a struct with private
//! state whose methods are the only mutators. The style only changes the
//! labels written to the sink.

use crate::sink::SharedSink;
use serde::{Deserialize, Serialize};

/// Which flavour of the module pattern a counter reports as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterStyle {
    #[default]
    Module,
    Revealing,
}

impl CounterStyle {
    fn label(self, step: CounterStep) -> &'static str {
        match (self, step) {
            (CounterStyle::Module, CounterStep::Increase) => "increase",
            (CounterStyle::Module, CounterStep::Decrease) => "decrease",
            (CounterStyle::Module, CounterStep::Reset) => "reset",
            (CounterStyle::Revealing, CounterStep::Increase) => "increaseRevealing",
            (CounterStyle::Revealing, CounterStep::Decrease) => "decreaseRevealing",
            (CounterStyle::Revealing, CounterStep::Reset) => "resetRevealing",
        }
    }
}

/// A single counter operation, as listed in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStep {
    Increase,
    Decrease,
    Reset,
}

/// Counter with private state that reports every change
pub struct Counter {
    count: i64,
    style: CounterStyle,
    sink: SharedSink,
}

impl Counter {
    /// Create a counter starting at zero
    pub fn new(style: CounterStyle, sink: SharedSink) -> Self {
        Self { count: 0, style, sink }
    }

    pub fn increase(&mut self) -> i64 {
        self.count += 1;
        self.report(CounterStep::Increase)
    }

    pub fn decrease(&mut self) -> i64 {
        self.count -= 1;
        self.report(CounterStep::Decrease)
    }

    pub fn reset(&mut self) -> i64 {
        self.count = 0;
        self.report(CounterStep::Reset)
    }

    /// Apply one configured step
    pub fn apply(&mut self, step: CounterStep) -> i64 {
        match step {
            CounterStep::Increase => self.increase(),
            CounterStep::Decrease => self.decrease(),
            CounterStep::Reset => self.reset(),
        }
    }

    /// Current value
    pub fn value(&self) -> i64 {
        self.count
    }

    fn report(&self, step: CounterStep) -> i64 {
        let label = self.style.label(step);
        log::trace!("Counter {} -> {}", label, self.count);
        self.sink.write_line(&format!("{} {}", label, self.count));
        self.count
    }
}
