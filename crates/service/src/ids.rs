//! External identifier generation.
//!
//! Every entity gets a ULID at creation: 48 bits of millisecond timestamp
//! followed by 80 random bits, rendered as 26 Crockford base32 characters.
//! A single process-wide monotonic generator guarantees that ids handed out
//! within the same millisecond still sort in creation order.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use ulid::Generator;

use crate::errors::ServiceError;

static GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

/// Next sortable external id.
pub fn next_external_id() -> Result<String, ServiceError> {
    let mut generator = GENERATOR.lock().unwrap_or_else(PoisonError::into_inner);
    generator
        .generate()
        .map(|ulid| ulid.to_string())
        .map_err(|e| ServiceError::IdGeneration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_26_chars_and_parse_back() {
        let id = next_external_id().unwrap();
        assert_eq!(id.len(), 26);
        assert!(ulid::Ulid::from_string(&id).is_ok());
    }

    #[test]
    fn sequential_ids_strictly_increase() {
        let ids: Vec<String> = (0..1_000).map(|_| next_external_id().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| next_external_id().unwrap()).collect::<Vec<_>>()))
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 1_000);
    }
}
