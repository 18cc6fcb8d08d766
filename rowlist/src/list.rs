use core::cmp;
use core::fmt;

use crate::geometry::RowGeometry;
use crate::options::RowListOptions;
use crate::pool::{PoolDelta, SurfacePool};
use crate::store::EntryStore;
use crate::types::{ScrollDirection, Window};

/// A windowed list engine over an append-only record store.
///
/// Owns the single authoritative scroll offset (an index into the store),
/// keeps the slot pool sized to `min(entry_count, rows_that_fit)`, and
/// rebinds each pooled slot to the record at `offset + slot_index` after any
/// change to the offset, the entry count, or the viewport.
///
/// Two uncoordinated scroll input sources feed it: wheel ticks are a relative
/// nudge ([`RowList::on_wheel`]), the scrollbar is an absolute authority
/// ([`RowList::on_scrollbar_position`]). They never talk to each other; both
/// resolve through the same clamped offset, which is what keeps them from
/// diverging.
///
/// All mutation takes `&mut self`, so events run to completion in order; the
/// engine itself is single-threaded by construction.
pub struct RowList<R, S> {
    options: RowListOptions<R, S>,
    store: EntryStore<R>,
    pool: SurfacePool<S>,
    geometry: RowGeometry,
    offset: usize,
    scroll_direction: Option<ScrollDirection>,
    batch_depth: usize,
    refresh_pending: bool,
}

impl<R, S: Clone> RowList<R, S> {
    /// Creates an empty list.
    ///
    /// `template` is the unrendered slot every pooled slot is cloned from.
    /// No refresh fires until data or geometry arrives.
    pub fn new(template: S, options: RowListOptions<R, S>) -> Self {
        let geometry = RowGeometry::new(options.row_height, options.viewport_height);
        ldebug!(
            row_height = geometry.row_height,
            viewport_height = geometry.viewport_height,
            wheel_step = options.wheel_step,
            "RowList::new"
        );
        Self {
            options,
            store: EntryStore::new(),
            pool: SurfacePool::new(template),
            geometry,
            offset: 0,
            scroll_direction: None,
            batch_depth: 0,
            refresh_pending: false,
        }
    }

    pub fn options(&self) -> &RowListOptions<R, S> {
        &self.options
    }

    pub fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    pub fn store(&self) -> &EntryStore<R> {
        &self.store
    }

    pub fn pool(&self) -> &SurfacePool<S> {
        &self.pool
    }

    /// The pooled slots in on-screen order.
    pub fn slots(&self) -> &[S] {
        self.pool.slots()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Index of the first visible record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Largest valid offset: the window may not extend past the last record.
    pub fn max_offset(&self) -> usize {
        self.store.len().saturating_sub(self.pool.len())
    }

    /// The record range currently mapped to pooled slots.
    pub fn window(&self) -> Window {
        Window {
            start: self.offset,
            end: self.offset + self.pool.len(),
        }
    }

    /// Total virtual scrollable height, for the scrollbar's content proxy.
    pub fn scroll_extent(&self) -> u64 {
        self.geometry.scroll_extent(self.store.len())
    }

    /// True when the content fits the viewport and the scrollbar proxy
    /// should be hidden.
    pub fn scrollbar_hidden(&self) -> bool {
        self.scroll_extent() <= self.geometry.viewport_height as u64
    }

    /// Appends one record and runs a resize/refresh cycle.
    pub fn push(&mut self, record: R) {
        self.store.push(record);
        self.sync_geometry();
    }

    /// Appends many records with exactly one resize/refresh cycle.
    ///
    /// Semantically equivalent to repeated [`RowList::push`], but a bulk load
    /// of 10^5 records costs one layout pass, not 10^5.
    pub fn extend(&mut self, records: impl IntoIterator<Item = R>) {
        let before = self.store.len();
        self.store.extend(records);
        ldebug!(
            appended = self.store.len() - before,
            total = self.store.len(),
            "extend"
        );
        self.sync_geometry();
    }

    /// Applies a new available pixel height from the host.
    ///
    /// Returns what happened to the pool so the host can mirror the
    /// structural change.
    pub fn set_viewport_height(&mut self, viewport_height: u32) -> PoolDelta {
        if self.geometry.viewport_height == viewport_height {
            return PoolDelta::Unchanged;
        }
        ltrace!(viewport_height, "set_viewport_height");
        self.geometry.viewport_height = viewport_height;
        self.sync_geometry()
    }

    /// One wheel tick: a relative nudge of `wheel_step` rows.
    ///
    /// Positive `delta` scrolls forward, negative backward; the offset stays
    /// clamped to `[0, max_offset]`. Always triggers a refresh.
    pub fn on_wheel(&mut self, delta: i32) {
        ltrace!(delta, offset = self.offset, "on_wheel");
        let step = self.options.wheel_step;
        if delta > 0 {
            self.apply_offset(self.offset.saturating_add(step));
        } else if delta < 0 {
            self.apply_offset(self.offset.saturating_sub(step));
        }
        self.request_refresh();
    }

    /// Absolute scrollbar position, in content-proxy pixels.
    ///
    /// The scrollbar is authoritative for position: the pixel value is
    /// converted to a row offset (round-half-up) and then clamped. Always
    /// triggers a refresh.
    pub fn on_scrollbar_position(&mut self, thumb_px: u64) {
        ltrace!(thumb_px, "on_scrollbar_position");
        let target = self.geometry.offset_for_thumb(thumb_px);
        self.apply_offset(target);
        self.request_refresh();
    }

    /// Programmatic scroll to a record index (clamped).
    pub fn set_offset_clamped(&mut self, offset: usize) {
        self.apply_offset(offset);
        self.request_refresh();
    }

    /// Coalesces multiple mutations into at most one refresh.
    ///
    /// Pool resizes and offset clamping still happen eagerly inside the
    /// closure; only the rebind (and the `on_refresh` notification) is
    /// deferred to the end of the outermost batch.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && self.refresh_pending {
            self.refresh_pending = false;
            self.refresh_now();
        }
    }

    /// Rebinds every pooled slot to the record at `offset + slot_index`.
    ///
    /// Idempotent: with unchanged state, a second call produces identical
    /// slot contents. Inside [`RowList::batch_update`] the rebind is
    /// deferred to the end of the batch.
    pub fn refresh(&mut self) {
        self.request_refresh();
    }

    fn apply_offset(&mut self, target: usize) {
        let clamped = cmp::min(target, self.max_offset());
        self.scroll_direction = match clamped.cmp(&self.offset) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.offset = clamped;
    }

    /// Entry count or viewport size changed: resize the pool, re-clamp the
    /// offset against the new bounds, refresh.
    fn sync_geometry(&mut self) -> PoolDelta {
        let needed = self.geometry.needed_rows(self.store.len());
        let delta = self.pool.resize(needed);
        if delta != PoolDelta::Unchanged {
            ldebug!(?delta, pool = self.pool.len(), "pool resized");
        }
        self.apply_offset(self.offset);
        self.request_refresh();
        delta
    }

    fn request_refresh(&mut self) {
        if self.batch_depth > 0 {
            self.refresh_pending = true;
            return;
        }
        self.refresh_now();
    }

    fn refresh_now(&mut self) {
        let offset = self.offset;
        for i in 0..self.pool.len() {
            match self.store.get(offset + i) {
                Some(record) => (self.options.fill)(self.pool.slot_mut(i), record),
                None => {
                    // Window ran past the stored count; keep the stale
                    // content until the next valid rebind.
                    ltrace!(index = offset + i, len = self.store.len(), "rebind miss");
                }
            }
        }
        if let Some(cb) = &self.options.on_refresh {
            cb(self);
        }
    }
}

impl<R: Clone, S: Clone> Clone for RowList<R, S> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            store: self.store.clone(),
            pool: self.pool.clone(),
            geometry: self.geometry,
            offset: self.offset,
            scroll_direction: self.scroll_direction,
            // A clone starts outside any batch.
            batch_depth: 0,
            refresh_pending: false,
        }
    }
}

impl<R, S> fmt::Debug for RowList<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowList")
            .field("len", &self.store.len())
            .field("offset", &self.offset)
            .field("pool", &self.pool.len())
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
