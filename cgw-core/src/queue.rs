//! Deferred chart rendering with a declared order.
//!
//! Opening a popup populates the DOM synchronously and then schedules the
//! two chart draws: percentile strictly before time series. The queue is
//! drained on the next tick, after layout has settled enough for the host
//! to report real container dimensions. Tasks for a site whose popup is no
//! longer open are dropped at drain time, so a close racing a deferred
//! draw is a no-op rather than a draw into a hidden region.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Percentile,
    TimeSeries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTask {
    pub site_no: String,
    pub kind: ChartKind,
}

#[derive(Debug, Default)]
pub struct ChartQueue {
    tasks: VecDeque<ChartTask>,
}

impl ChartQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the popup charts for a site. Pending tasks from a previous
    /// popup are superseded.
    pub fn schedule_popup_charts(&mut self, site_no: &str, percentile: bool, time_series: bool) {
        self.tasks.clear();
        if percentile {
            self.tasks.push_back(ChartTask {
                site_no: site_no.to_string(),
                kind: ChartKind::Percentile,
            });
        }
        if time_series {
            self.tasks.push_back(ChartTask {
                site_no: site_no.to_string(),
                kind: ChartKind::TimeSeries,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take all tasks still valid for the currently open site. Stale tasks
    /// (popup closed or reopened for another site) are discarded.
    pub fn drain(&mut self, open_site: Option<&str>) -> Vec<ChartTask> {
        let mut due = Vec::new();
        while let Some(task) = self.tasks.pop_front() {
            match open_site {
                Some(site) if task.site_no == site => due.push(task),
                _ => log::debug!(
                    "dropping stale chart task for site {} ({:?})",
                    task.site_no,
                    task.kind
                ),
            }
        }
        due
    }
}
