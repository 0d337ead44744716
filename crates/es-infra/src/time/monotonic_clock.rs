use std::sync::atomic::{AtomicI64, Ordering};

use es_core::ports::ClockPort;

/// Wraps a clock so that successive readings strictly increase.
///
/// Scan timestamps double as the history sort key, so two saves within the
/// same millisecond (or a wall clock stepping backwards) must still produce
/// distinct, ordered values.
pub struct MonotonicClock<C> {
    inner: C,
    last_ms: AtomicI64,
}

impl<C: ClockPort> MonotonicClock<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            last_ms: AtomicI64::new(i64::MIN),
        }
    }
}

impl<C: ClockPort> ClockPort for MonotonicClock<C> {
    fn now_ms(&self) -> i64 {
        let observed = self.inner.now_ms();
        let mut last = self.last_ms.load(Ordering::Relaxed);
        loop {
            let next = if observed > last { observed } else { last.saturating_add(1) };
            match self
                .last_ms
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}
