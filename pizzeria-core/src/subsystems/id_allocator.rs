//! Order identifier allocation
//!
//! One allocator instance is created at startup and handed to the manager —
//! explicit shared state instead of a lazily initialized global singleton.
//! Allocation is the only operation in the system that must stay correct
//! under concurrent callers.

use std::sync::atomic::{AtomicU64, Ordering};

/// First identifier handed out
pub const FIRST_ORDER_ID: u64 = 1000;

/// Process-wide monotonic order-id counter
#[derive(Debug)]
pub struct OrderIdAllocator {
    next: AtomicU64,
}

impl OrderIdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(FIRST_ORDER_ID),
        }
    }

    /// Allocate the next identifier; unique and monotonically increasing
    /// across threads for the process lifetime
    pub fn next(&self) -> u64 {
        // Uniqueness needs only the atomicity of fetch_add
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for OrderIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_fixed_value_and_increases() {
        let ids = OrderIdAllocator::new();
        assert_eq!(ids.next(), 1000);
        assert_eq!(ids.next(), 1001);
        assert_eq!(ids.next(), 1002);
    }

    #[test]
    fn test_no_duplicates_under_concurrent_allocation() {
        let ids = Arc::new(OrderIdAllocator::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let ids = Arc::clone(&ids);
            handles.push(thread::spawn(move || {
                (0..25).map(|_| ids.next()).collect::<Vec<u64>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("allocator thread panicked") {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 200);
        assert!(seen.iter().all(|id| (1000..1200).contains(id)));
    }
}
