//! Render surface that keeps a bar chart and broadcasts every mutation.

use sortvis_core::{BarChart, RenderSurface, Value};
use tokio::sync::broadcast;

use crate::events::{ChartSnapshot, SurfaceEvent};

/// Wraps a [`BarChart`] and fans each change out to subscribed clients.
///
/// Sends never block and never fail the run: with no subscribers, or with a
/// lagging one, events are simply dropped for that receiver.
pub struct StreamingSurface {
    chart: BarChart,
    controls_enabled: bool,
    tx: broadcast::Sender<SurfaceEvent>,
}

impl StreamingSurface {
    /// Create an empty surface for a container of the given width.
    pub fn new(container_width: u32, capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            chart: BarChart::new(container_width),
            controls_enabled: true,
            tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SurfaceEvent> {
        self.tx.subscribe()
    }

    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot::from_chart(&self.chart, self.controls_enabled)
    }

    fn emit(&self, event: SurfaceEvent) {
        // Err only means nobody is listening
        let _ = self.tx.send(event);
    }
}

impl RenderSurface for StreamingSurface {
    fn rebuild(&mut self, values: &[Value]) {
        self.chart.rebuild(values);
        self.emit(SurfaceEvent::Rebuild {
            values: values.to_vec(),
            bar_width: self.chart.bar_width(),
        });
    }

    fn set_value(&mut self, index: usize, value: Value) {
        self.chart.set_value(index, value);
        if let Some(bar) = self.chart.bars().get(index) {
            self.emit(SurfaceEvent::SetValue {
                index,
                value,
                height_pct: bar.height_pct,
            });
        }
    }

    fn mark_compare(&mut self, i: usize, j: usize) {
        self.chart.mark_compare(i, j);
        self.emit(SurfaceEvent::MarkCompare { i, j });
    }

    fn unmark_compare(&mut self, i: usize, j: usize) {
        self.chart.unmark_compare(i, j);
        self.emit(SurfaceEvent::UnmarkCompare { i, j });
    }

    fn mark_sorted(&mut self, index: usize) {
        self.chart.mark_sorted(index);
        self.emit(SurfaceEvent::MarkSorted { index });
    }

    fn clear_marks(&mut self) {
        self.chart.clear_marks();
        self.emit(SurfaceEvent::ClearMarks);
    }

    fn reflow(&mut self, container_width: u32) {
        self.chart.reflow(container_width);
        self.emit(SurfaceEvent::Reflow {
            container_width,
            bar_width: self.chart.bar_width(),
        });
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
        self.emit(SurfaceEvent::Controls { enabled });
    }
}
