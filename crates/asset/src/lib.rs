//! Asset loading: OBJ-subset meshes into renderer-ready vertex/index lists.
//! Parsing, index checks and normalization into a fixed-size cube.

pub mod error;
pub mod mesh;
pub mod normalize;
pub mod obj;

pub use error::{MalformedReason, MeshError, MeshResult};
pub use mesh::{MeshData, Vertex};
pub use normalize::{DEFAULT_TARGET_EXTENT, Normalization, normalize};
pub use obj::{
    ObjLoad, ObjLoadOptions, ParseSummary, load_obj_from_path, load_obj_from_reader,
    load_obj_from_str, parse_obj, try_load_obj_from_path,
};
