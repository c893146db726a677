/// Identifier generation
///
/// Stores never mint identifiers themselves; they are handed an
/// [`IdGenerator`] at construction so tests can substitute a deterministic one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces a fresh identifier on every call.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Random UUIDv4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// `"{prefix}-{n}"` with `n` counting up from 1
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_unique() {
        let gen = UuidGenerator;
        let ids: HashSet<String> = (0..100).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_sequential_generator() {
        let gen = SequentialGenerator::new("tenant");
        assert_eq!(gen.next_id(), "tenant-1");
        assert_eq!(gen.next_id(), "tenant-2");
    }

    #[test]
    fn test_closure_generator() {
        let gen = || "fixed".to_string();
        assert_eq!(gen.next_id(), "fixed");
    }
}
