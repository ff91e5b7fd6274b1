//! Per-label time accounting over a task's status intervals.

use std::collections::BTreeMap;

use crate::app::{db::StatusInterval, domain::TaskStatusLabel};

/// Summed durations (seconds) and interval counts per status label.
/// Only labels that occurred are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTimeline {
    pub durations: BTreeMap<TaskStatusLabel, i64>,
    pub counts: BTreeMap<TaskStatusLabel, i64>,
}

impl StatusTimeline {
    /// Fold intervals in any order. The ongoing interval ends at `now`; an
    /// interval whose end precedes its start contributes zero.
    pub fn accumulate(intervals: &[StatusInterval], now: i64) -> Self {
        let mut timeline = Self::default();
        for interval in intervals {
            let end = interval.set_till.unwrap_or(now);
            let duration = (end - interval.set_at).max(0);
            *timeline.durations.entry(interval.label).or_insert(0) += duration;
            *timeline.counts.entry(interval.label).or_insert(0) += 1;
        }
        timeline
    }

    pub fn total_duration(&self) -> i64 {
        self.durations.values().sum()
    }

    pub fn intervals_count(&self) -> i64 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatusLabel::*;

    fn interval(label: TaskStatusLabel, set_at: i64, set_till: Option<i64>) -> StatusInterval {
        StatusInterval {
            id: format!("{label}-{set_at}"),
            task_id: "task".to_string(),
            label,
            set_at,
            set_till,
            set_by: "frneek".to_string(),
        }
    }

    #[test]
    fn empty_intervals_yield_empty_timeline() {
        let timeline = StatusTimeline::accumulate(&[], 1_000);
        assert!(timeline.durations.is_empty());
        assert_eq!(timeline.total_duration(), 0);
        assert_eq!(timeline.intervals_count(), 0);
    }

    #[test]
    fn ongoing_interval_closes_at_now() {
        let intervals = vec![
            interval(Todo, 100, Some(160)),
            interval(InProgress, 160, Some(400)),
            interval(Resolved, 400, None),
        ];
        let timeline = StatusTimeline::accumulate(&intervals, 1_000);
        assert_eq!(timeline.durations[&Todo], 60);
        assert_eq!(timeline.durations[&InProgress], 240);
        assert_eq!(timeline.durations[&Resolved], 600);
        assert_eq!(timeline.total_duration(), 900);
    }

    #[test]
    fn repeated_labels_are_summed_and_counted() {
        let intervals = vec![
            interval(InProgress, 300, None),
            interval(Todo, 0, Some(100)),
            interval(InProgress, 100, Some(200)),
            interval(Todo, 200, Some(300)),
        ];
        let timeline = StatusTimeline::accumulate(&intervals, 350);
        assert_eq!(timeline.durations[&Todo], 200);
        assert_eq!(timeline.durations[&InProgress], 150);
        assert_eq!(timeline.counts[&Todo], 2);
        assert_eq!(timeline.counts[&InProgress], 2);
        assert!(!timeline.durations.contains_key(&Resolved));
    }

    #[test]
    fn total_matches_sum_of_interval_lengths() {
        let intervals = vec![
            interval(Todo, 10, Some(25)),
            interval(InProgress, 25, Some(70)),
            interval(Todo, 70, None),
        ];
        let now = 100;
        let expected: i64 = intervals
            .iter()
            .map(|i| i.set_till.unwrap_or(now) - i.set_at)
            .sum();
        let timeline = StatusTimeline::accumulate(&intervals, now);
        assert_eq!(timeline.total_duration(), expected);
        assert_eq!(timeline.intervals_count(), 3);
    }

    #[test]
    fn clock_behind_start_contributes_zero() {
        let timeline = StatusTimeline::accumulate(&[interval(Todo, 500, None)], 400);
        assert_eq!(timeline.durations[&Todo], 0);
    }
}
