//! Shared work queue with acknowledgment-based completion tracking

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// A thread-safe FIFO of pending paths.
///
/// Every item is delivered to exactly one caller of [`dequeue`]; the
/// lock around the backing deque is what makes dequeue linearizable.
/// The outstanding counter tracks enqueued-but-not-yet-acked items:
/// it reaches zero exactly when the scan may be considered complete.
/// The lock is never held across an await.
///
/// [`dequeue`]: WorkQueue::dequeue
#[derive(Debug, Default)]
pub struct WorkQueue {
    pending: Mutex<VecDeque<String>>,
    outstanding: AtomicUsize,
    drained: Notify,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item to the back of the queue
    pub fn enqueue(&self, item: String) {
        let mut pending = self.pending.lock().expect("queue lock poisoned");
        pending.push_back(item);
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Removes and returns the front item, or `None` when drained.
    ///
    /// All items are enqueued before workers start, so an empty queue
    /// means no more work will ever arrive.
    pub fn dequeue(&self) -> Option<String> {
        self.pending.lock().expect("queue lock poisoned").pop_front()
    }

    /// Marks one dequeued item as fully processed
    pub fn ack(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.drained.notify_waiters();
        }
    }

    /// Waits until every enqueued item has been acked
    pub async fn join(&self) {
        loop {
            let notified = self.drained.notified();
            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Number of items not yet dequeued
    pub fn len(&self) -> usize {
        self.pending.lock().expect("queue lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items enqueued but not yet acked
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}
