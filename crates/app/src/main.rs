//! Entry point for holoobj: load an OBJ mesh and report what the renderer
//! would receive.

use std::path::PathBuf;

use anyhow::{Result, bail};
use asset::{ObjLoadOptions, load_obj_from_path};

#[derive(Debug, PartialEq)]
struct Args {
    input: PathBuf,
    options: ObjLoadOptions,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    // Accept: --input=PATH | PATH, --no-normalize, --extent=F, --progress-every=N
    let mut input: Option<PathBuf> = None;
    let mut options = ObjLoadOptions::default();

    for arg in args {
        if let Some(val) = arg.strip_prefix("--input=") {
            input = Some(PathBuf::from(val));
        } else if arg == "--no-normalize" {
            options.normalize = false;
        } else if let Some(val) = arg.strip_prefix("--extent=") {
            match val.parse::<f32>() {
                Ok(e) if e.is_finite() && e > 0.0 => options.target_extent = e,
                _ => bail!("--extent expects a positive number, got '{}'", val),
            }
        } else if let Some(val) = arg.strip_prefix("--progress-every=") {
            match val.parse::<usize>() {
                Ok(n) => options.progress_interval = n,
                Err(_) => bail!("--progress-every expects a line count, got '{}'", val),
            }
        } else if arg.starts_with("--") {
            log::warn!("Unknown flag '{}', ignoring.", arg);
        } else {
            input = Some(PathBuf::from(arg));
        }
    }

    let Some(input) = input else {
        bail!("usage: holoobj [--no-normalize] [--extent=F] [--progress-every=N] <file.obj>");
    };
    Ok(Args { input, options })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    log::info!(
        "Starting holoobj. input={}, normalize={}, extent={}, progress_every={}",
        args.input.display(),
        args.options.normalize,
        args.options.target_extent,
        args.options.progress_interval
    );

    let load = load_obj_from_path(&args.input, &args.options);
    let mesh = &load.mesh;

    log::info!(
        "Vertex buffer: {} vertices ({} bytes), index buffer: {} indices ({} bytes)",
        mesh.vertices.len(),
        mesh.vertex_bytes().len(),
        mesh.indices.len(),
        mesh.index_bytes().len()
    );
    match mesh.bounds() {
        Some(b) => log::info!("Bounds: min={:?} max={:?}", b.min, b.max),
        None => log::info!("Mesh is empty"),
    }
    if let Some(n) = &load.normalization {
        log::info!(
            "Normalized from center={:?}, extent={:?}, flat_axes={:?}",
            n.center,
            n.extent,
            n.flat_axes
        );
    }
    if !load.diagnostics.is_empty() {
        log::warn!(
            "{} diagnostics, {} lines skipped",
            load.diagnostics.len(),
            load.skipped_lines()
        );
    }

    Ok(())
}
