use std::hash::Hasher;

use twox_hash::XxHash64;

/// Derives a monotonic change counter from successive content observations.
///
/// Backends without a native change count are sampled; the counter moves
/// whenever the content hash differs from the previous sample. Re-copying
/// identical text is therefore invisible, which the history treats as a
/// head duplicate anyway.
#[derive(Debug, Default)]
pub struct HashChangeCounter {
    last_hash: Option<Option<u64>>,
    count: u64,
}

impl HashChangeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation (`None` for "no text") and returns the counter.
    pub fn observe(&mut self, text: Option<&str>) -> u64 {
        let hash = text.map(content_hash);
        match self.last_hash {
            Some(previous) if previous == hash => {}
            Some(_) => {
                self.count += 1;
                self.last_hash = Some(hash);
            }
            None => self.last_hash = Some(hash),
        }
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

pub fn content_hash(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_the_baseline() {
        let mut counter = HashChangeCounter::new();
        assert_eq!(counter.observe(Some("a")), 0);
        assert_eq!(counter.observe(Some("a")), 0);
    }

    #[test]
    fn counter_moves_on_every_content_change() {
        let mut counter = HashChangeCounter::new();
        counter.observe(None);
        assert_eq!(counter.observe(Some("a")), 1);
        assert_eq!(counter.observe(Some("b")), 2);
        assert_eq!(counter.observe(None), 3);
        assert_eq!(counter.observe(None), 3);
        assert_eq!(counter.count(), 3);
    }
}
