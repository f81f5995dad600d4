// Delivery, removal and duplicate behaviour of the public Broadcaster API
use patterns_core::{Broadcaster, DeliveryPolicy, PatternError, Subscriber};
use std::cell::RefCell;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<(usize, String)>>>;

fn tagged(id: usize, calls: &Calls) -> Subscriber<String> {
    let calls = Rc::clone(calls);
    Subscriber::new(move |data: &String| calls.borrow_mut().push((id, data.clone())))
}

#[test]
fn distinct_subscribers_each_called_once_in_order() {
    for count in 0..8 {
        let calls: Calls = Rc::default();
        let mut broadcaster = Broadcaster::new();
        for id in 0..count {
            broadcaster.subscribe(tagged(id, &calls));
        }

        broadcaster.broadcast(&"d".to_string()).unwrap();

        let expected: Vec<(usize, String)> = (0..count).map(|id| (id, "d".to_string())).collect();
        assert_eq!(*calls.borrow(), expected, "with {} subscribers", count);
    }
}

#[test]
fn subscribe_a_b_unsubscribe_a() {
    let calls: Calls = Rc::default();
    let a = tagged(0, &calls);
    let b = tagged(1, &calls);

    let mut broadcaster = Broadcaster::new();
    broadcaster.subscribe(a.clone());
    broadcaster.subscribe(b.clone());
    broadcaster.unsubscribe(&a);

    broadcaster.broadcast(&"y".to_string()).unwrap();

    assert_eq!(*calls.borrow(), vec![(1, "y".to_string())]);
    assert!(!broadcaster.contains(&a));
    assert!(broadcaster.contains(&b));
}

#[test]
fn subscribing_twice_delivers_twice() {
    let calls: Calls = Rc::default();
    let a = tagged(0, &calls);

    let mut broadcaster = Broadcaster::new();
    broadcaster.subscribe(a.clone());
    broadcaster.subscribe(a);

    broadcaster.broadcast(&"z".to_string()).unwrap();

    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn double_unsubscribe_is_idempotent() {
    let calls: Calls = Rc::default();
    let a = tagged(0, &calls);

    let mut broadcaster = Broadcaster::new();
    broadcaster.subscribe(a.clone());

    assert_eq!(broadcaster.unsubscribe(&a), 1);
    assert!(broadcaster.is_empty());
    assert_eq!(broadcaster.unsubscribe(&a), 0);
    assert!(broadcaster.is_empty());

    broadcaster.broadcast(&"gone".to_string()).unwrap();
    assert!(calls.borrow().is_empty());
}

#[test]
fn unsubscribe_never_subscribed_is_noop() {
    let calls: Calls = Rc::default();
    let mut broadcaster = Broadcaster::new();
    broadcaster.subscribe(tagged(0, &calls));

    let stranger = tagged(9, &calls);
    assert_eq!(broadcaster.unsubscribe(&stranger), 0);

    broadcaster.broadcast(&"still".to_string()).unwrap();
    assert_eq!(*calls.borrow(), vec![(0, "still".to_string())]);
}

#[test]
fn fail_fast_and_isolate_differ_only_in_what_runs_after_a_failure() {
    for policy in [DeliveryPolicy::FailFast, DeliveryPolicy::Isolate] {
        let calls: Calls = Rc::default();
        let mut broadcaster = Broadcaster::new().with_policy(policy);
        broadcaster.subscribe(tagged(0, &calls));
        broadcaster.subscribe(Subscriber::fallible(|_: &String| Err("nope".into())));
        broadcaster.subscribe(tagged(2, &calls));

        let result = broadcaster.broadcast(&"p".to_string());

        let delivered: Vec<usize> = calls.borrow().iter().map(|(id, _)| *id).collect();
        match policy {
            DeliveryPolicy::FailFast => {
                assert_eq!(delivered, vec![0]);
                assert!(matches!(result, Err(PatternError::SubscriberFailure { position: 1, .. })));
            }
            DeliveryPolicy::Isolate => {
                assert_eq!(delivered, vec![0, 2]);
                match result {
                    Err(PatternError::SubscriberFailures(faults)) => {
                        assert_eq!(faults.len(), 1);
                        assert_eq!(faults[0].position, 1);
                    }
                    other => panic!("unexpected result: {:?}", other),
                }
            }
        }
    }
}
