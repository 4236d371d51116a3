//! Source/destination geometry reconciliation

use crate::error::{Error, Result};
use crate::geometry::BufferGeometry;

/// Fields two buffers must agree on before a verbatim copy
///
/// Only the visible resolution and depth are compared. The copy itself is
/// sized from the source's virtual resolution, so two buffers with equal
/// visible geometry but different virtual heights still reconcile.
pub fn comparable_fields(geometry: &BufferGeometry) -> (u32, u32, u32) {
    (
        geometry.width(),
        geometry.height(),
        geometry.bits_per_pixel(),
    )
}

/// Fail unless `source` and `dest` agree on [`comparable_fields`]
///
/// # Errors
///
/// [`Error::GeometryMismatch`] carrying both geometries.
pub fn reconcile(source: &BufferGeometry, dest: &BufferGeometry) -> Result<()> {
    if comparable_fields(source) != comparable_fields(dest) {
        return Err(Error::GeometryMismatch {
            source_geometry: *source,
            dest_geometry: *dest,
        });
    }
    Ok(())
}
