// Identifier sources for new tasks

use crate::error::TaskError;
use crate::models::now_ms;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source of task ids
///
/// Every id returned by one generator must be distinct from all ids it
/// returned before.
pub trait IdGenerator {
    fn next_id(&mut self) -> i64;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> i64 {
        (**self).next_id()
    }
}

/// Wall-clock millisecond ids
///
/// Two calls within the same millisecond (or after the clock steps back)
/// get the last issued id plus one.
#[derive(Debug, Clone)]
pub struct ClockIds {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::with_clock(now_ms)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> i64 {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id
    }
}

/// Counter ids starting at 1
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: i64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> i64 {
        self.last += 1;
        self.last
    }
}

/// Id strategy selectable from config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Clock,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Clock => Box::new(ClockIds::new()),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(IdStrategy::Clock),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(TaskError::UnknownIdStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Clock => write!(f, "clock"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn test_clock_ids_use_wall_clock() {
        let before = now_ms();
        let id = ClockIds::new().next_id();
        assert!(id >= before);
    }

    #[test]
    fn test_clock_ids_same_millisecond() {
        let mut ids = ClockIds::with_clock(frozen_clock);
        assert_eq!(ids.next_id(), 1_700_000_000_000);
        assert_eq!(ids.next_id(), 1_700_000_000_001);
        assert_eq!(ids.next_id(), 1_700_000_000_002);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_boxed_generator() {
        let mut ids = IdStrategy::Sequential.generator();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_id_strategy_parse() {
        assert_eq!("clock".parse::<IdStrategy>().unwrap(), IdStrategy::Clock);
        assert_eq!("sequential".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
        assert!("uuid".parse::<IdStrategy>().is_err());
        assert_eq!(IdStrategy::Sequential.to_string(), "sequential");
    }
}
