//! Ranking strategies for the "top events" selection.

use rand::seq::SliceRandom;

use crate::event::Event;

/// Orders a set of events for the "top events" selection.
///
/// Callers truncate the returned order, so a strategy only decides the order.
pub trait Ranking: Send + Sync {
    fn rank<'a>(&self, events: &'a [Event]) -> Vec<&'a Event>;
}

/// Uniform random shuffle. Stands in until there is a popularity signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRanking;

impl Ranking for RandomRanking {
    fn rank<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut ranked: Vec<&Event> = events.iter().collect();
        ranked.shuffle(&mut rand::thread_rng());
        ranked
    }
}

/// Soonest first, dataset order for ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronologicalRanking;

impl Ranking for ChronologicalRanking {
    fn rank<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut ranked: Vec<&Event> = events.iter().collect();
        ranked.sort_by_key(|e| e.starts_at_utc);
        ranked
    }
}
