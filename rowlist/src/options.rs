use alloc::sync::Arc;
use core::fmt;

use crate::list::RowList;

/// Paints one record into one pooled slot.
///
/// Invoked at most once per slot per refresh. Must not panic for any record,
/// including partially populated ones; missing data should render as blank,
/// not fail.
pub type FillCallback<R, S> = Arc<dyn Fn(&mut S, &R) + Send + Sync>;

/// Fired once after every completed rebind of the visible window.
///
/// This is the explicit subscribe/notify seam for hosts that need to react
/// to content changes (repaint scheduling, scrollbar mirroring, ...).
pub type OnRefreshCallback<R, S> = Arc<dyn Fn(&RowList<R, S>) + Send + Sync>;

/// Rows scrolled per wheel tick.
pub const DEFAULT_WHEEL_STEP: usize = 3;

/// Configuration for [`RowList`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct RowListOptions<R, S> {
    /// Fixed row height in pixels, measured once by the host before any rows
    /// materialize.
    pub row_height: u32,
    /// Initial viewport height in pixels. Later changes go through
    /// [`RowList::set_viewport_height`].
    pub viewport_height: u32,
    /// Rows scrolled per wheel tick.
    pub wheel_step: usize,
    pub fill: FillCallback<R, S>,
    pub on_refresh: Option<OnRefreshCallback<R, S>>,
}

impl<R, S> RowListOptions<R, S> {
    /// Creates options with the given row height and fill callback.
    ///
    /// The viewport height starts at 0 (no rows fit until the host reports
    /// its size) and the wheel step at [`DEFAULT_WHEEL_STEP`].
    pub fn new(row_height: u32, fill: impl Fn(&mut S, &R) + Send + Sync + 'static) -> Self {
        Self {
            row_height,
            viewport_height: 0,
            wheel_step: DEFAULT_WHEEL_STEP,
            fill: Arc::new(fill),
            on_refresh: None,
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_wheel_step(mut self, wheel_step: usize) -> Self {
        self.wheel_step = wheel_step;
        self
    }

    pub fn with_fill(mut self, fill: impl Fn(&mut S, &R) + Send + Sync + 'static) -> Self {
        self.fill = Arc::new(fill);
        self
    }

    pub fn with_on_refresh(
        mut self,
        on_refresh: Option<impl Fn(&RowList<R, S>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_refresh = on_refresh.map(|f| Arc::new(f) as _);
        self
    }
}

impl<R, S> Clone for RowListOptions<R, S> {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            wheel_step: self.wheel_step,
            fill: Arc::clone(&self.fill),
            on_refresh: self.on_refresh.clone(),
        }
    }
}

impl<R, S> fmt::Debug for RowListOptions<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowListOptions")
            .field("row_height", &self.row_height)
            .field("viewport_height", &self.viewport_height)
            .field("wheel_step", &self.wheel_step)
            .finish_non_exhaustive()
    }
}
