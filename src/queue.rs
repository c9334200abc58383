//! Ordered FIFO queue with optional uniqueness, plus a shared handle with a
//! blocking, timeout-bounded pull for simple producer/consumer use.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::MathError;

/// First-in, first-out queue. In unique mode, items already present are
/// silently dropped on push.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    unique: bool,
}

impl<T: PartialEq> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
            unique: false,
        }
    }

    /// Queue that rejects duplicate items on push.
    pub fn unique() -> Self {
        Queue {
            items: VecDeque::new(),
            unique: true,
        }
    }

    /// Append an item at the back. In unique mode a duplicate is a no-op.
    pub fn push(&mut self, item: T) {
        if self.unique && self.items.contains(&item) {
            return;
        }
        self.items.push_back(item);
    }

    /// Take the oldest item, if any.
    pub fn pull(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Empty this queue into a fresh one, preserving order and mode.
    pub fn flush(&mut self) -> Queue<T> {
        Queue {
            items: std::mem::take(&mut self.items),
            unique: self.unique,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: PartialEq> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Queue::new();
        q.extend(iter);
        q
    }
}

/// Iteration drains the queue front-to-back, matching pull order.
impl<T: PartialEq> Iterator for Queue<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "< empty >");
        }
        write!(f, "< ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, " >")
    }
}

/// Cloneable handle to a mutex-guarded [`Queue`], for handing the same queue
/// to a producer and a consumer thread.
#[derive(Debug)]
pub struct SharedQueue<T> {
    inner: Arc<Mutex<Queue<T>>>,
}

impl<T> Clone for SharedQueue<T> {
    fn clone(&self) -> Self {
        SharedQueue {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: PartialEq> SharedQueue<T> {
    pub fn new(queue: Queue<T>) -> Self {
        SharedQueue {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Queue<T>> {
        self.inner.lock().expect("queue mutex poisoned")
    }

    pub fn push(&self, item: T) {
        self.lock().push(item);
    }

    pub fn pull(&self) -> Option<T> {
        self.lock().pull()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Pull the oldest item, waiting up to `timeout` for one to arrive.
    ///
    /// The queue is re-checked every `poll_interval` (a bounded busy-wait,
    /// not a condition variable); expiry surfaces as
    /// [`MathError::QueueTimeout`].
    pub fn pull_timeout(&self, timeout: Duration, poll_interval: Duration) -> Result<T, MathError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(item) = self.pull() {
                return Ok(item);
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(MathError::QueueTimeout(timeout));
            }
            thread::sleep(poll_interval.min(deadline - now));
        }
    }
}
