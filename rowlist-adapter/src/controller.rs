use alloc::vec::Vec;

use rowlist::{RowList, RowListOptions};

use crate::surface::{HostSurface, SurfaceError};

/// Wires a [`rowlist::RowList`] to a [`HostSurface`].
///
/// Construction validates the surface (fail fast on a malformed host),
/// detaches and measures the row template, and seeds the engine with the
/// surface's available height. Afterwards the controller routes scroll input
/// to the engine and mirrors every geometry change back into the scrollbar
/// proxy (extent + visibility), which the engine cannot reach on its own.
pub struct ListController<R, H: HostSurface> {
    surface: H,
    list: RowList<R, H::Slot>,
}

impl<R, H: HostSurface> ListController<R, H> {
    /// Builds a windowed list on `surface`.
    ///
    /// `options.row_height` and `options.viewport_height` are overwritten
    /// with the measured template height and the surface's reported height;
    /// everything else (fill callback, wheel step, refresh listener) is taken
    /// as given.
    pub fn new(
        mut surface: H,
        options: RowListOptions<R, H::Slot>,
    ) -> Result<Self, SurfaceError> {
        if !surface.has_header() {
            return Err(SurfaceError::MissingHeader);
        }
        let template = surface
            .take_row_template()
            .ok_or(SurfaceError::MissingRowTemplate)?;

        let measured = surface.measure_row(&template);
        if measured == 0 {
            return Err(SurfaceError::InvalidRowHeight { measured });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "rowlist_adapter",
            row_height = measured,
            available_height = surface.available_height(),
            "ListController::new"
        );

        let options = options
            .with_row_height(measured)
            .with_viewport_height(surface.available_height());
        let list = RowList::new(template, options);

        let mut controller = Self { surface, list };
        controller.sync_scrollbar();
        Ok(controller)
    }

    pub fn list(&self) -> &RowList<R, H::Slot> {
        &self.list
    }

    /// Direct engine access. Mutations made here bypass the scrollbar proxy
    /// mirroring; call [`ListController::on_resize`] or append through the
    /// controller to keep it in sync.
    pub fn list_mut(&mut self) -> &mut RowList<R, H::Slot> {
        &mut self.list
    }

    pub fn surface(&self) -> &H {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut H {
        &mut self.surface
    }

    pub fn into_parts(self) -> (H, RowList<R, H::Slot>) {
        (self.surface, self.list)
    }

    /// Appends one record and mirrors the new extent to the scrollbar.
    pub fn append(&mut self, record: R) {
        self.list.push(record);
        self.sync_scrollbar();
    }

    /// Appends many records in one resize/refresh cycle.
    pub fn append_many(&mut self, records: impl IntoIterator<Item = R>) {
        self.list.extend(records);
        self.sync_scrollbar();
    }

    /// Appends a large batch in chunks, one resize/refresh cycle per chunk.
    ///
    /// For hosts with a responsiveness budget: `between_chunks` runs after
    /// every full chunk so the caller can yield to its event loop. A
    /// `chunk_size` of 0 is treated as 1.
    pub fn append_chunked(
        &mut self,
        records: impl IntoIterator<Item = R>,
        chunk_size: usize,
        mut between_chunks: impl FnMut(),
    ) {
        let chunk_size = chunk_size.max(1);
        let mut chunk: Vec<R> = Vec::with_capacity(chunk_size);
        for record in records {
            chunk.push(record);
            if chunk.len() == chunk_size {
                self.list.extend(chunk.drain(..));
                self.sync_scrollbar();
                between_chunks();
            }
        }
        if !chunk.is_empty() {
            self.list.extend(chunk);
            self.sync_scrollbar();
        }
    }

    /// Routes one wheel tick to the engine.
    pub fn on_wheel(&mut self, delta: i32) {
        self.list.on_wheel(delta);
    }

    /// Routes an absolute scrollbar thumb position (content-proxy pixels) to
    /// the engine.
    pub fn on_scrollbar_position(&mut self, thumb_px: u64) {
        self.list.on_scrollbar_position(thumb_px);
    }

    /// Re-polls the surface's available height after a host resize.
    pub fn on_resize(&mut self) {
        let height = self.surface.available_height();
        self.list.set_viewport_height(height);
        self.sync_scrollbar();
    }

    fn sync_scrollbar(&mut self) {
        self.surface.set_scroll_extent(self.list.scroll_extent());
        self.surface
            .set_scrollbar_hidden(self.list.scrollbar_hidden());
    }
}
