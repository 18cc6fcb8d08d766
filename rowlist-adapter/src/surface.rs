use thiserror::Error;

/// What a hosting surface must expose for a windowed list to be built on it.
///
/// The engine never touches the host directly; a [`crate::ListController`]
/// drives both sides. A surface provides, at minimum:
/// - one unrendered row template to clone slots from
/// - a header region (its presence is validated, its contents are not this
///   crate's concern)
/// - the pixel height available for rows
/// - a way to measure the template's height, once, before any rows exist
/// - a scrollbar content proxy (extent + visibility)
pub trait HostSurface {
    type Slot: Clone;

    /// Detaches the row template from the surface, if one exists.
    ///
    /// Called exactly once during construction; the template never renders.
    fn take_row_template(&mut self) -> Option<Self::Slot>;

    /// Whether the surface carries a header region.
    fn has_header(&self) -> bool;

    /// Pixel height available for rows (surface height minus reserved
    /// header/margin space).
    fn available_height(&self) -> u32;

    /// Measures the pixel height of one row slot.
    fn measure_row(&self, slot: &Self::Slot) -> u32;

    /// Sizes the scrollbar's content proxy to the total virtual height.
    fn set_scroll_extent(&mut self, extent: u64);

    /// Shows/hides the scrollbar proxy.
    fn set_scrollbar_hidden(&mut self, hidden: bool);
}

/// Fatal construction-time problems with the hosting surface.
///
/// These indicate a malformed host and abort initialization; everything else
/// the engine recovers from silently (clamping, tolerated lookup misses).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("host surface has no row template to clone slots from")]
    MissingRowTemplate,
    #[error("host surface has no header region")]
    MissingHeader,
    #[error("row template measured a non-positive height ({measured}px)")]
    InvalidRowHeight { measured: u32 },
}
