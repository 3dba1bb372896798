use std::io::Write;
use std::path::{Path, PathBuf};

use tpf_core::container::toc::sequential_starts;
use tpf_core::error::Result;
use tpf_core::{
    Compression, Decompressor, FlateGunzip, GzipCommand, Mode, TarCommand, UnpackOptions,
    locate_input, read_toc, unpack,
};

use crate::presentation::cli::{Gunzip, InputArgs};

fn decompressor_from_args(input: &InputArgs) -> Box<dyn Decompressor> {
    match (input.gunzip, &input.gzip) {
        (Gunzip::Builtin, _) => Box::new(FlateGunzip),
        (Gunzip::External, Some(prog)) => Box::new(GzipCommand::new(prog.clone())),
        (Gunzip::External, None) => Box::new(GzipCommand::detect()),
    }
}

fn input_path(input: &InputArgs) -> Result<PathBuf> {
    locate_input(input.file.as_deref(), Path::new("."))
}

pub fn handle_info(input: InputArgs) -> Result<()> {
    let path = input_path(&input)?;
    let opts = UnpackOptions {
        mode: Mode::Informational,
        decompressor: decompressor_from_args(&input),
        ..Default::default()
    };
    let mut out = std::io::stdout().lock();
    unpack(&path, &opts, &mut out)?;
    Ok(())
}

pub fn handle_unpack(input: InputArgs, out_dir: PathBuf, tar: String) -> Result<()> {
    let path = input_path(&input)?;
    std::fs::create_dir_all(&out_dir)?;
    let opts = UnpackOptions {
        mode: Mode::Extract,
        out_dir,
        decompressor: decompressor_from_args(&input),
        extractor: Box::new(TarCommand::new(tar)),
    };
    let mut out = std::io::stdout().lock();
    let summary = unpack(&path, &opts, &mut out)?;
    eprintln!(
        "unpack: {} -> {} ({} items)",
        path.display(),
        opts.out_dir.display(),
        summary.written.len()
    );
    Ok(())
}

pub fn handle_toc(input: InputArgs, json: bool) -> Result<()> {
    let path = input_path(&input)?;
    let form = read_toc(&path, decompressor_from_args(&input).as_ref())?;
    let mut out = std::io::stdout().lock();

    if json {
        let text = serde_json::to_string_pretty(&form)
            .map_err(std::io::Error::other)?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    let compression = match form.compression {
        Compression::None => "uncompressed",
        Compression::Gzip => "gzip",
    };
    writeln!(
        out,
        "{}: version {}, {} sections, {}",
        path.display(),
        form.header.version,
        form.header.section_count,
        compression
    )?;

    let expected = sequential_starts(&form.sections);
    for (i, (s, want)) in form.sections.iter().zip(expected).enumerate() {
        write!(
            out,
            "#{:<3} type=0x{:02x} {:<12} start={:<10} size={}",
            i,
            s.kind.code(),
            s.kind,
            s.start,
            s.size
        )?;
        if s.start as u64 != want {
            tracing::warn!(section = i, start = s.start, expected = want, "start offset disagrees with layout");
            write!(out, "  (expected start={want})")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
