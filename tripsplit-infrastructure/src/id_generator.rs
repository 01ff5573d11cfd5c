use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tripsplit_application::IdGenerator;

/// Issues ids from the wall clock in milliseconds.
///
/// Ids are strictly increasing for the lifetime of the generator even when
/// several are requested within the same millisecond.
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: AtomicU64,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn ids_track_the_clock() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = ClockIdGenerator::new().next_id();

        assert!(id >= before);
    }

    #[test]
    fn ids_strictly_increase() {
        let generator = ClockIdGenerator::new();
        let ids: Vec<u64> = (0..1000).map(|_| generator.next_id()).collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ids_unique_across_threads() {
        let generator = Arc::new(ClockIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..250).map(|_| generator.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("thread"))
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 1000);
    }
}
