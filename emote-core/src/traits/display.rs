//! Display sink trait

/// Trait for the display collaborator that renders the active asset
///
/// The sink owns decoding and composition; it only receives the handle of
/// the asset to show. Calls are synchronous and must not block.
pub trait DisplaySink<H> {
    /// Make `handle` the active image
    fn show(&mut self, handle: H);
}

impl<H, D: DisplaySink<H> + ?Sized> DisplaySink<H> for &mut D {
    fn show(&mut self, handle: H) {
        (**self).show(handle)
    }
}
