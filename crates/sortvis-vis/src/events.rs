//! Surface events streamed to the browser frontend.

use serde::{Deserialize, Serialize};
use sortvis_core::{Bar, BarChart, Value};

/// One bar as the frontend draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarView {
    pub value: Value,
    pub height_pct: u8,
    pub comparing: bool,
    pub sorted: bool,
}

impl From<&Bar> for BarView {
    fn from(bar: &Bar) -> Self {
        Self {
            value: bar.value,
            height_pct: bar.height_pct,
            comparing: bar.is_comparing(),
            sorted: bar.is_sorted(),
        }
    }
}

/// Full chart state, sent on connect and whenever a client falls behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub bars: Vec<BarView>,
    pub bar_width: u32,
    pub container_width: u32,
    pub controls_enabled: bool,
}

impl ChartSnapshot {
    pub fn from_chart(chart: &BarChart, controls_enabled: bool) -> Self {
        Self {
            bars: chart.bars().iter().map(BarView::from).collect(),
            bar_width: chart.bar_width(),
            container_width: chart.container_width(),
            controls_enabled,
        }
    }
}

/// Every mutation of the render surface, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// Complete chart state
    Snapshot(ChartSnapshot),

    /// All bars replaced
    Rebuild { values: Vec<Value>, bar_width: u32 },

    /// Bar widths recomputed for a new container width
    Reflow { container_width: u32, bar_width: u32 },

    /// One bar changed value
    SetValue { index: usize, value: Value, height_pct: u8 },

    /// Two bars are being compared
    MarkCompare { i: usize, j: usize },

    /// Comparison between two bars is over
    UnmarkCompare { i: usize, j: usize },

    /// A bar reached its final value
    MarkSorted { index: usize },

    /// All marks removed
    ClearMarks,

    /// Interactive controls switched on or off
    Controls { enabled: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::RenderSurface;

    #[test]
    fn event_serialization() {
        let event = SurfaceEvent::SetValue {
            index: 4,
            value: 42,
            height_pct: 42,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"set_value""#));

        let parsed: SurfaceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn snapshot_flattens_into_tagged_object() {
        let mut chart = BarChart::new(100);
        chart.rebuild(&[10, 20]);
        chart.mark_sorted(1);

        let event = SurfaceEvent::Snapshot(ChartSnapshot::from_chart(&chart, true));
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "snapshot");
        assert_eq!(json["bars"][1]["sorted"], true);
        assert_eq!(json["bars"][0]["sorted"], false);
        assert_eq!(json["controls_enabled"], true);
    }

    #[test]
    fn snapshot_default() {
        let snap = ChartSnapshot::default();
        assert!(snap.bars.is_empty());
        assert!(!snap.controls_enabled);
    }
}
