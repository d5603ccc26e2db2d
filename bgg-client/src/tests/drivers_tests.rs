use std::cell::RefCell;

use tokio::time::{Duration, sleep};

use super::*;

#[tokio::test(start_paused = true)]
async fn gather_keeps_request_order_not_completion_order() {
    let finished = RefCell::new(Vec::new());
    let finished = &finished;

    let slow_base = async move {
        sleep(Duration::from_millis(50)).await;
        finished.borrow_mut().push("base");
        Ok::<_, String>(vec!["A", "B"])
    };
    let fast_expansions = async move {
        finished.borrow_mut().push("expansions");
        Ok::<_, String>(vec!["C"])
    };

    let combined = gather([
        Box::pin(slow_base) as std::pin::Pin<Box<dyn Future<Output = _>>>,
        Box::pin(fast_expansions),
    ])
    .await
    .unwrap();

    assert_eq!(combined, vec!["A", "B", "C"]);
    assert_eq!(*finished.borrow(), vec!["expansions", "base"]);
}

#[tokio::test]
async fn gather_waits_for_every_request_before_failing() {
    let completed = RefCell::new(0);
    let completed = &completed;

    let failing = async move {
        *completed.borrow_mut() += 1;
        Err::<Vec<i32>, _>("boom")
    };
    let succeeding = async move {
        tokio::task::yield_now().await;
        *completed.borrow_mut() += 1;
        Ok(vec![1])
    };

    let result = gather([
        Box::pin(failing) as std::pin::Pin<Box<dyn Future<Output = _>>>,
        Box::pin(succeeding),
    ])
    .await;

    assert_eq!(result, Err("boom"));
    assert_eq!(*completed.borrow(), 2);
}

#[tokio::test]
async fn gather_of_nothing_is_empty() {
    let requests: Vec<std::future::Ready<Result<Vec<u8>, ()>>> = Vec::new();
    assert_eq!(gather(requests).await, Ok(Vec::new()));
}

#[tokio::test]
async fn paginate_stops_once_total_is_covered() {
    let mut requested = Vec::new();
    let items = paginate(150, 100, |page| {
        requested.push(page);
        let count = if page == 1 { 100 } else { 50 };
        std::future::ready(Ok::<_, ()>(vec![page; count]))
    })
    .await
    .unwrap();

    assert_eq!(requested, vec![1, 2]);
    assert_eq!(items.len(), 150);
    assert!(items[..100].iter().all(|&p| p == 1));
    assert!(items[100..].iter().all(|&p| p == 2));
}

#[tokio::test]
async fn paginate_exact_multiple_does_not_fetch_extra_page() {
    let mut requested = Vec::new();
    paginate(200, 100, |page| {
        requested.push(page);
        std::future::ready(Ok::<Vec<u32>, ()>(Vec::new()))
    })
    .await
    .unwrap();
    assert_eq!(requested, vec![1, 2]);
}

#[tokio::test]
async fn paginate_zero_total_fetches_nothing() {
    let mut calls = 0;
    let items = paginate(0, 100, |_| {
        calls += 1;
        std::future::ready(Ok::<Vec<u32>, ()>(vec![1]))
    })
    .await
    .unwrap();
    assert_eq!(calls, 0);
    assert!(items.is_empty());
}

#[tokio::test]
async fn paginate_stops_at_first_failing_page() {
    let mut requested = Vec::new();
    let result = paginate(300, 100, |page| {
        requested.push(page);
        std::future::ready(if page == 2 { Err("page 2") } else { Ok(vec![page]) })
    })
    .await;

    assert_eq!(result, Err("page 2"));
    assert_eq!(requested, vec![1, 2]);
}
