//! Render surface contract and the in-memory bar chart.

use bitflags::bitflags;

use crate::sequence::{Value, MAX_VALUE};

/// Horizontal gap between adjacent bars, in pixels.
pub const BAR_GAP: u32 = 6;

/// Bars never get narrower than this, however many there are.
pub const MIN_BAR_WIDTH: u32 = 2;

bitflags! {
    /// Visual marks carried by a bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Marks: u8 {
        /// Transient: the bar takes part in the current comparison.
        const COMPARING = 1 << 0;
        /// Persistent until rebuild: the bar holds its final value.
        const SORTED = 1 << 1;
    }
}

/// Everything a sorting run needs from the display layer.
///
/// Algorithms only ever reach a surface through these calls, in the exact
/// order they issue them. Indices outside the current bar count are ignored.
pub trait RenderSurface {
    /// Drop all bars and create one per value.
    fn rebuild(&mut self, values: &[Value]);

    /// Update one bar's value and height.
    fn set_value(&mut self, index: usize, value: Value);

    /// Flag two bars as being compared.
    fn mark_compare(&mut self, i: usize, j: usize);

    /// Clear the comparison flag on two bars.
    fn unmark_compare(&mut self, i: usize, j: usize);

    /// Flag a bar as holding its final value.
    fn mark_sorted(&mut self, index: usize);

    /// Remove every comparing and sorted flag.
    fn clear_marks(&mut self);

    /// Recompute bar widths for a new container width. Values are untouched.
    fn reflow(&mut self, container_width: u32);

    /// Enable or disable the interactive controls around the surface.
    fn set_controls_enabled(&mut self, _enabled: bool) {}
}

/// Width of each bar so that `count` bars and `count - 1` gaps fit in
/// `container_width`, floored at [`MIN_BAR_WIDTH`].
pub fn bar_width(container_width: u32, count: usize) -> u32 {
    if count == 0 {
        return MIN_BAR_WIDTH;
    }
    let count = count as u32;
    let gaps = (count - 1).saturating_mul(BAR_GAP);
    (container_width.saturating_sub(gaps) / count).max(MIN_BAR_WIDTH)
}

/// Bar height as a percentage of the chart, capped at 100.
fn height_pct(value: Value) -> u8 {
    (value.min(MAX_VALUE) * 100 / MAX_VALUE) as u8
}

/// One displayed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub value: Value,
    pub height_pct: u8,
    pub marks: Marks,
}

impl Bar {
    fn new(value: Value) -> Self {
        Self {
            value,
            height_pct: height_pct(value),
            marks: Marks::empty(),
        }
    }

    pub fn is_comparing(&self) -> bool {
        self.marks.contains(Marks::COMPARING)
    }

    pub fn is_sorted(&self) -> bool {
        self.marks.contains(Marks::SORTED)
    }
}

/// Headless bar chart. Keeps the authoritative display state that other
/// surfaces mirror or stream.
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    bars: Vec<Bar>,
    container_width: u32,
    bar_width: u32,
}

impl BarChart {
    /// Create an empty chart inside a container of the given inner width.
    pub fn new(container_width: u32) -> Self {
        Self {
            bars: Vec::new(),
            container_width,
            bar_width: bar_width(container_width, 0),
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    /// Indices currently flagged as compared.
    pub fn comparing(&self) -> Vec<usize> {
        self.indices_with(Marks::COMPARING)
    }

    /// Indices currently flagged as sorted.
    pub fn sorted(&self) -> Vec<usize> {
        self.indices_with(Marks::SORTED)
    }

    fn indices_with(&self, mark: Marks) -> Vec<usize> {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.marks.contains(mark))
            .map(|(i, _)| i)
            .collect()
    }

    fn mark(&mut self, index: usize, mark: Marks, on: bool) {
        if let Some(bar) = self.bars.get_mut(index) {
            bar.marks.set(mark, on);
        }
    }
}

impl RenderSurface for BarChart {
    fn rebuild(&mut self, values: &[Value]) {
        self.bars = values.iter().copied().map(Bar::new).collect();
        self.bar_width = bar_width(self.container_width, self.bars.len());
    }

    fn set_value(&mut self, index: usize, value: Value) {
        if let Some(bar) = self.bars.get_mut(index) {
            bar.value = value;
            bar.height_pct = height_pct(value);
        }
    }

    fn mark_compare(&mut self, i: usize, j: usize) {
        self.mark(i, Marks::COMPARING, true);
        self.mark(j, Marks::COMPARING, true);
    }

    fn unmark_compare(&mut self, i: usize, j: usize) {
        self.mark(i, Marks::COMPARING, false);
        self.mark(j, Marks::COMPARING, false);
    }

    fn mark_sorted(&mut self, index: usize) {
        self.mark(index, Marks::SORTED, true);
    }

    fn clear_marks(&mut self) {
        for bar in &mut self.bars {
            bar.marks = Marks::empty();
        }
    }

    fn reflow(&mut self, container_width: u32) {
        self.container_width = container_width;
        self.bar_width = bar_width(container_width, self.bars.len());
    }
}
