//! Singleton pattern
//!
//! One lazily created, process-wide instance.

use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// The process-wide instance
#[derive(Debug)]
pub struct Singleton {
    greeting: String,
}

impl Singleton {
    /// Get the instance, creating it on first use
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            log::debug!("Creating singleton instance");
            Singleton {
                greeting: "Im Tran Huu Tai".to_string(),
            }
        })
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// True if both references point at the same instance
    pub fn is_same(a: &Singleton, b: &Singleton) -> bool {
        std::ptr::eq(a, b)
    }
}
