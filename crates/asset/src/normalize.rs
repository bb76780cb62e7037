//! Recenter and rescale a loaded mesh so it fits a small cube at the origin.

use corelib::Vec3;

use crate::{
    error::{MeshError, MeshResult},
    mesh::MeshData,
};

/// Side length of the cube a mesh is fitted into by default, in meters.
pub const DEFAULT_TARGET_EXTENT: f32 = 0.2;

/// What [`normalize`] applied to a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    /// Bounding-box center before normalization.
    pub center: Vec3,
    /// Per-axis `|max - min|` before normalization.
    pub extent: Vec3,
    /// Axes with zero (or non-finite) extent that were centered but not scaled.
    pub flat_axes: [bool; 3],
}

impl Normalization {
    pub fn is_degenerate(&self) -> bool {
        self.flat_axes.iter().any(|&flat| flat)
    }
}

/// Center the mesh on the origin and scale each axis independently so its
/// span becomes `target_extent`.
///
/// Each coordinate becomes `(p - mid) * (target_extent / extent)`; for the
/// default extent of 0.2 that is `(p - mid) / (5 * extent)`. An axis whose
/// extent is zero, or whose scale factor would not be finite, is only
/// centered; a non-finite center is not applied. An empty mesh is left
/// untouched and reported as [`MeshError::EmptyMesh`].
pub fn normalize(mesh: &mut MeshData, target_extent: f32) -> MeshResult<Normalization> {
    if !(target_extent.is_finite() && target_extent > 0.0) {
        return Err(MeshError::InvalidExtent(target_extent));
    }
    let bounds = mesh.bounds().ok_or(MeshError::EmptyMesh)?;

    let center = bounds.center();
    let extent = bounds.extent();
    let mut flat_axes = [false; 3];
    let mut shift = [0.0_f32; 3];
    let mut scale = [1.0_f32; 3];
    for axis in 0..3 {
        let (c, e) = (center[axis], extent[axis]);
        if c.is_finite() {
            shift[axis] = c;
        }
        let s = target_extent / e;
        if e > 0.0 && e.is_finite() && s.is_finite() && s > 0.0 {
            scale[axis] = s;
        } else {
            flat_axes[axis] = true;
        }
    }

    if flat_axes.iter().any(|&flat| flat) {
        log::warn!(
            "Mesh is flat along axes {:?} (extent {:?}); those axes are centered but not scaled",
            flat_axes,
            extent
        );
    }

    for vertex in &mut mesh.vertices {
        for axis in 0..3 {
            vertex.position[axis] = (vertex.position[axis] - shift[axis]) * scale[axis];
        }
    }

    log::debug!(
        "Normalized {} vertices: center={:?}, extent={:?}",
        mesh.vertices.len(),
        center,
        extent
    );

    Ok(Normalization {
        center,
        extent,
        flat_axes,
    })
}
