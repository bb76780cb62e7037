//! OBJ-subset loader producing a position+color triangle list.
//!
//! Understood directives:
//! - `vn x y z` starts a new vertex; the normalized normal becomes its color.
//! - `v x y z [r g b]` sets the position of the most recent vertex. The color
//!   triple is validated but not applied.
//! - `f a b c` adds a triangle from 1-based indices (`a/...` suffixes are
//!   ignored), emitted as `c b a` to flip the winding.
//!
//! Any line containing `#`, blank lines and other directives are ignored.
//! Malformed lines are skipped and reported as diagnostics; loading never
//! fails because of file contents.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use corelib::Vec3;

use crate::{
    error::{MalformedReason, MeshError, MeshResult},
    mesh::{MeshData, Vertex},
    normalize::{DEFAULT_TARGET_EXTENT, Normalization, normalize},
};

/// Emit a progress message every this many lines by default.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Knobs for the OBJ loader.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjLoadOptions {
    /// Center and rescale the mesh after parsing.
    pub normalize: bool,
    /// Span of every axis after normalization.
    pub target_extent: f32,
    /// Lines between progress messages; `0` disables them.
    pub progress_interval: usize,
}

impl Default for ObjLoadOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            target_extent: DEFAULT_TARGET_EXTENT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Result of the raw parse phase.
#[derive(Debug, Default)]
pub struct ParseSummary {
    pub lines_read: usize,
    pub diagnostics: Vec<MeshError>,
}

/// A finished load: the mesh plus everything worth telling the caller.
#[derive(Debug, Default)]
pub struct ObjLoad {
    pub mesh: MeshData,
    pub diagnostics: Vec<MeshError>,
    pub lines_read: usize,
    /// `None` when normalization was disabled or could not run.
    pub normalization: Option<Normalization>,
}

impl ObjLoad {
    /// Number of lines dropped because they were malformed or orphaned.
    pub fn skipped_lines(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| {
                matches!(
                    d,
                    MeshError::MalformedLine { .. } | MeshError::OrphanPosition { .. }
                )
            })
            .count()
    }
}

/// Load an OBJ mesh from a file path, failing only if the file can't be opened.
pub fn try_load_obj_from_path(
    path: impl AsRef<Path>,
    options: &ObjLoadOptions,
) -> MeshResult<ObjLoad> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeshError::StreamUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loading OBJ mesh from {}", path.display());
    Ok(load_obj_from_reader(BufReader::new(file), options))
}

/// Load an OBJ mesh from a file path. An unreadable file yields an empty mesh
/// carrying a [`MeshError::StreamUnavailable`] diagnostic.
pub fn load_obj_from_path(path: impl AsRef<Path>, options: &ObjLoadOptions) -> ObjLoad {
    match try_load_obj_from_path(path, options) {
        Ok(load) => load,
        Err(err) => {
            log::warn!("{err}");
            ObjLoad {
                diagnostics: vec![err],
                ..Default::default()
            }
        }
    }
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str, options: &ObjLoadOptions) -> ObjLoad {
    load_obj_from_reader(io::Cursor::new(contents), options)
}

/// Load an OBJ mesh from a [`BufRead`] implementation: parse, check indices,
/// then normalize if requested.
pub fn load_obj_from_reader<R: BufRead>(reader: R, options: &ObjLoadOptions) -> ObjLoad {
    let mut mesh = MeshData::default();
    let ParseSummary {
        lines_read,
        mut diagnostics,
    } = parse_obj(reader, &mut mesh, options.progress_interval);

    if let Some(index) = mesh.out_of_range_indices().max() {
        let err = MeshError::IndexOutOfRange {
            index,
            vertex_count: mesh.vertices.len(),
        };
        log::warn!("{err}");
        diagnostics.push(err);
    }

    let normalization = if options.normalize {
        match normalize(&mut mesh, options.target_extent) {
            Ok(n) => Some(n),
            Err(err) => {
                log::warn!("Skipping normalization: {err}");
                diagnostics.push(err);
                None
            }
        }
    } else {
        None
    };

    log::info!(
        "Loaded OBJ mesh: {} vertices, {} triangles from {} lines ({} diagnostics)",
        mesh.vertices.len(),
        mesh.triangle_count(),
        lines_read,
        diagnostics.len()
    );

    ObjLoad {
        mesh,
        diagnostics,
        lines_read,
        normalization,
    }
}

/// Parse every line of `reader` into `mesh`, replacing whatever it held.
///
/// Per-line problems are collected in the returned summary and the line is
/// skipped. A read error stops parsing and keeps what was read so far.
pub fn parse_obj<R: BufRead>(
    mut reader: R,
    mesh: &mut MeshData,
    progress_interval: usize,
) -> ParseSummary {
    mesh.vertices.clear();
    mesh.indices.clear();

    let mut summary = ParseSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => {
                let err = MeshError::ReadFailed {
                    line: summary.lines_read,
                    source,
                };
                log::warn!("{err}");
                summary.diagnostics.push(err);
                break;
            }
        }

        summary.lines_read += 1;
        let line_no = summary.lines_read;
        if progress_interval > 0 && line_no % progress_interval == 0 {
            log::debug!("{line_no} lines parsed");
        }

        if let Err(err) = parse_line(strip_line_ending(&buf), line_no, mesh) {
            log::warn!("Skipping line: {err}");
            summary.diagnostics.push(err);
        }
    }

    summary
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_line(bytes: &[u8], line_no: usize, mesh: &mut MeshData) -> MeshResult<()> {
    // A '#' anywhere drops the whole line, not just the tail.
    if bytes.is_empty() || bytes.contains(&b'#') {
        return Ok(());
    }
    let line =
        std::str::from_utf8(bytes).map_err(|_| malformed(line_no, MalformedReason::NotUtf8))?;

    let record = split_record(line);
    let Some((&tag, fields)) = record.split_first() else {
        return Ok(());
    };

    match tag {
        "vn" => {
            check_token_count(line_no, "vn", "4", record.len(), record.len() == 4)?;
            let normal = parse_vec3(&fields[..3], line_no)?;
            mesh.vertices
                .push(Vertex::from_normal(normal.normalize_or_zero().to_array()));
        }
        "v" => {
            check_token_count(
                line_no,
                "v",
                "4 or 7",
                record.len(),
                record.len() == 4 || record.len() == 7,
            )?;
            let position = parse_vec3(&fields[..3], line_no)?;
            if fields.len() == 6 {
                // Per-vertex color: must be numeric, but normals drive the color.
                parse_vec3(&fields[3..], line_no)?;
            }
            let vertex = mesh
                .vertices
                .last_mut()
                .ok_or(MeshError::OrphanPosition { line: line_no })?;
            vertex.position = position.to_array();
        }
        "f" => {
            check_token_count(line_no, "f", "4", record.len(), record.len() == 4)?;
            let a = parse_face_index(fields[0], line_no)?;
            let b = parse_face_index(fields[1], line_no)?;
            let c = parse_face_index(fields[2], line_no)?;
            mesh.indices.extend_from_slice(&[c, b, a]);
        }
        _ => {
            // Ignore other directives (vt/o/g/s/usemtl/etc.)
        }
    }

    Ok(())
}

/// Split on single spaces: runs of spaces yield empty tokens, a single
/// trailing space does not.
fn split_record(line: &str) -> Vec<&str> {
    line.strip_suffix(' ').unwrap_or(line).split(' ').collect()
}

fn check_token_count(
    line_no: usize,
    tag: &'static str,
    expected: &'static str,
    found: usize,
    ok: bool,
) -> MeshResult<()> {
    if ok {
        Ok(())
    } else {
        Err(malformed(
            line_no,
            MalformedReason::TokenCount {
                tag,
                expected,
                found,
            },
        ))
    }
}

fn parse_vec3(tokens: &[&str], line_no: usize) -> MeshResult<Vec3> {
    Ok(Vec3::new(
        parse_f32(tokens[0], line_no)?,
        parse_f32(tokens[1], line_no)?,
        parse_f32(tokens[2], line_no)?,
    ))
}

fn parse_f32(token: &str, line_no: usize) -> MeshResult<f32> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| malformed(line_no, MalformedReason::InvalidFloat(token.to_owned())))
}

/// 1-based `idx[/...]` to a 0-based index.
fn parse_face_index(token: &str, line_no: usize) -> MeshResult<u32> {
    let position = token.split_once('/').map_or(token, |(p, _)| p);
    position
        .parse::<u32>()
        .ok()
        .and_then(|raw| raw.checked_sub(1))
        .ok_or_else(|| malformed(line_no, MalformedReason::InvalidIndex(token.to_owned())))
}

fn malformed(line: usize, reason: MalformedReason) -> MeshError {
    MeshError::MalformedLine { line, reason }
}
