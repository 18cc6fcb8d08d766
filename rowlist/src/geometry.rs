use core::cmp;

/// Fixed-row viewport geometry.
///
/// Derives, from the available pixel height and the session-constant row
/// height, how many slots the pool needs and how the scrollbar's content
/// proxy maps to row offsets. Recomputed (cheaply, it is all arithmetic)
/// whenever the viewport resizes or the entry count changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowGeometry {
    /// Height of one row in pixels. Measured once from the unrendered
    /// template slot; fixed for the session.
    pub row_height: u32,
    /// Pixel height available for rows (host height minus reserved regions).
    pub viewport_height: u32,
}

impl RowGeometry {
    pub fn new(row_height: u32, viewport_height: u32) -> Self {
        Self {
            row_height,
            viewport_height,
        }
    }

    /// Number of whole rows that fit the viewport.
    ///
    /// Floored: a partially clipped trailing row is never materialized.
    /// Returns 0 when `row_height` is 0.
    pub fn rows_that_fit(&self) -> usize {
        if self.row_height == 0 {
            return 0;
        }
        (self.viewport_height / self.row_height) as usize
    }

    /// Slots the pool needs: never more than the data can fill.
    pub fn needed_rows(&self, entry_count: usize) -> usize {
        cmp::min(entry_count, self.rows_that_fit())
    }

    /// Total virtual scrollable height in pixels.
    ///
    /// Sizes the scrollbar's content proxy so its native range matches row
    /// granularity.
    pub fn scroll_extent(&self, entry_count: usize) -> u64 {
        entry_count as u64 * self.row_height as u64
    }

    /// Maps an absolute scrollbar pixel position to a row offset.
    ///
    /// Rounds half-up: a thumb resting exactly halfway between two rows
    /// resolves to the later row. Callers clamp the result against their own
    /// bounds.
    pub fn offset_for_thumb(&self, thumb_px: u64) -> usize {
        if self.row_height == 0 {
            return 0;
        }
        let row = self.row_height as u64;
        let index = thumb_px.saturating_add(row / 2) / row;
        index.try_into().unwrap_or(usize::MAX)
    }
}
