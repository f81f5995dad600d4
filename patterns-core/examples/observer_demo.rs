//! Standalone broadcaster demo
//!
//! Subscribes a few callbacks, broadcasts, unsubscribes one and broadcasts
//! again. Run with `RUST_LOG=debug` to see the broadcaster's own logging.
//!
//! Usage:
//!   cargo run -p patterns-core --example observer_demo [message]

use patterns_core::{Broadcaster, DeliveryPolicy, PatternError, Subscriber};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let message = env::args().nth(1).unwrap_or_else(|| "Hello subscribers".to_string());

    println!("=== Broadcaster Demo ===\n");

    let printer = Subscriber::new(|data: &String| {
        println!("  printer got: {}", data);
    })
    .with_name("printer");
    let counter = Subscriber::new(|data: &String| {
        println!("  counter got {} bytes", data.len());
    })
    .with_name("counter");

    let mut broadcaster = Broadcaster::new();
    broadcaster.subscribe(printer.clone());
    broadcaster.subscribe(counter.clone());
    broadcaster.subscribe(printer.clone());

    println!("Broadcast with {} subscriber entries:", broadcaster.len());
    broadcaster.broadcast(&message)?;

    let removed = broadcaster.unsubscribe(&printer);
    println!("\nRemoved {} printer entries", removed);
    println!("Broadcast with {} subscriber entries:", broadcaster.len());
    broadcaster.broadcast(&message)?;

    println!("\nIsolating policy with a failing subscriber:");
    let mut isolated = Broadcaster::new().with_policy(DeliveryPolicy::Isolate);
    isolated.subscribe(Subscriber::fallible(|_: &String| Err("not today".into())).with_name("grumpy"));
    isolated.subscribe(counter);

    match isolated.broadcast(&message) {
        Ok(()) => println!("  all subscribers succeeded"),
        Err(PatternError::SubscriberFailures(faults)) => {
            for fault in faults {
                println!("  ✗ {}", fault);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
