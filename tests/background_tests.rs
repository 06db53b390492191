//! Integration tests for background execution and foreground delivery.

#![cfg(feature = "background")]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use functional::background::pending;
use functional::prelude::*;
use rstest::rstest;

#[rstest]
fn completion_receives_generator_result() {
    let results = Rc::new(RefCell::new(Vec::new()));
    for input in 1..=3_i64 {
        let results = Rc::clone(&results);
        background(
            move || Ok(Value::from(input * 100)),
            move |result| results.borrow_mut().push(result),
        );
    }
    assert_eq!(run_until_idle(), 3);
    let mut received: Vec<i64> = results
        .borrow()
        .iter()
        .map(|result| result.as_ref().ok().and_then(Value::as_integer).unwrap_or(0))
        .collect();
    received.sort_unstable();
    assert_eq!(received, vec![100, 200, 300]);
}

#[rstest]
fn completion_waits_for_the_foreground_queue() {
    let (release, gate) = mpsc::channel::<()>();
    let delivered = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&delivered);
    background(
        move || {
            gate.recv_timeout(Duration::from_secs(5))
                .map_err(|error| FunctionalError::custom(error.to_string()))?;
            Ok(Value::Nil)
        },
        move |_| *flag.borrow_mut() = true,
    );
    assert_eq!(run_pending(), 0);
    assert!(!*delivered.borrow());
    release.send(()).unwrap();
    assert!(run_next());
    assert!(*delivered.borrow());
}

#[rstest]
fn generator_error_is_delivered_unchanged() {
    let received = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&received);
    background(
        || Err(FunctionalError::custom("no data")),
        move |result| *slot.borrow_mut() = Some(result),
    );
    run_until_idle();
    assert_eq!(
        *received.borrow(),
        Some(Err(FunctionalError::custom("no data")))
    );
}

#[rstest]
fn panicking_generator_reports_background_error() {
    let received = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&received);
    background(
        || panic!("worker failed"),
        move |result| *slot.borrow_mut() = Some(result),
    );
    run_until_idle();
    assert!(matches!(
        *received.borrow(),
        Some(Err(FunctionalError::Background(_)))
    ));
}

#[rstest]
fn each_thread_drains_only_its_own_queue() {
    background(|| Ok(Value::from(1)), |_| {});
    let other = thread::spawn(|| (pending(), run_until_idle())).join().unwrap();
    assert_eq!(other, (0, 0));
    assert_eq!(pending(), 1);
    assert_eq!(run_until_idle(), 1);
}

#[rstest]
fn completion_can_use_thread_bound_callables() {
    let count = transform_from_selector("count").unwrap();
    let received = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&received);
    background(
        || Ok(Value::from(array![1, 2, 3])),
        move |result| *slot.borrow_mut() = Some(result.and_then(|value| count(&value))),
    );
    run_until_idle();
    assert_eq!(*received.borrow(), Some(Ok(Value::from(3))));
}
