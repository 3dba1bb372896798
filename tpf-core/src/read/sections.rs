use crate::container::index::for_each_entry;
use crate::container::section::{Lifecycle, SectionKind};
use crate::container::toc::SectionDescriptor;
use crate::error::{Result, TpfError};
use crate::tools::ArchiveExtractor;
use crate::util::cursor::Cursor;

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const DESC_FILE: &str = "desc.xml";
pub const INDEX_FILE: &str = "index";
pub const DESTDIR: &str = "destdir";

/// Largest slice of a payload held in memory while streaming it to disk.
pub const COPY_CHUNK: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Report what the container holds; only the metadata text is printed.
    #[default]
    Informational,
    /// Materialize every known section under the output directory.
    Extract,
}

/// Where decoders send their side effects.
pub struct SectionSink<'a> {
    pub mode: Mode,
    pub out_dir: &'a Path,
    pub report: &'a mut dyn Write,
    pub extractor: &'a dyn ArchiveExtractor,
    /// Artifacts created so far, in creation order.
    pub written: Vec<PathBuf>,
}

impl<'a> SectionSink<'a> {
    pub fn new(
        mode: Mode,
        out_dir: &'a Path,
        report: &'a mut dyn Write,
        extractor: &'a dyn ArchiveExtractor,
    ) -> Self {
        Self {
            mode,
            out_dir,
            report,
            extractor,
            written: Vec::new(),
        }
    }

    fn extracting(&self) -> bool {
        self.mode == Mode::Extract
    }

    fn create(&mut self, name: &str) -> Result<File> {
        let path = self.out_dir.join(name);
        let f = File::create(&path)?;
        self.written.push(path);
        Ok(f)
    }
}

/// Decode one section. On success the cursor sits exactly `desc.size` bytes
/// past where it started.
pub fn decode_section<R: Read>(
    desc: &SectionDescriptor,
    cur: &mut Cursor<R>,
    sink: &mut SectionSink<'_>,
) -> Result<()> {
    let size = desc.size as u64;
    let begin = cur.position();
    tracing::debug!(kind = %desc.kind, start = desc.start, size, offset = begin, "section");

    match desc.kind {
        SectionKind::Metadata => decode_metadata(size, cur, sink)?,
        SectionKind::FileIndex => decode_index(size, cur, sink)?,
        SectionKind::Script(hook) => decode_script(hook, size, cur, sink)?,
        SectionKind::Archive => decode_archive(size, cur, sink)?,
        SectionKind::Signature => {
            writeln!(sink.report, "Skipping signature section.")?;
            cur.skip(size)?;
        }
        SectionKind::Unknown(code) => {
            writeln!(sink.report, "Skipping unknown section of type 0x{code:02x}.")?;
            cur.skip(size)?;
        }
    }

    let consumed = cur.position() - begin;
    if consumed != size {
        return Err(TpfError::Format(format!(
            "{} section consumed {consumed} bytes, declared size is {size}",
            desc.kind
        )));
    }
    Ok(())
}

fn decode_metadata<R: Read>(size: u64, cur: &mut Cursor<R>, sink: &mut SectionSink<'_>) -> Result<()> {
    if sink.extracting() {
        let mut f = sink.create(DESC_FILE)?;
        cur.copy_to(size, &mut f, COPY_CHUNK)?;
        writeln!(sink.report, "wrote {DESC_FILE}.")?;
        return Ok(());
    }

    // Printed as text, so it has to be held and decoded.
    let offset = cur.position();
    let raw = cur.read_bytes(size as usize)?;
    let text = String::from_utf8(raw).map_err(|source| TpfError::Encoding { offset, source })?;
    writeln!(sink.report, "{text}")?;
    Ok(())
}

fn decode_index<R: Read>(size: u64, cur: &mut Cursor<R>, sink: &mut SectionSink<'_>) -> Result<()> {
    if !sink.extracting() {
        writeln!(sink.report, "Have index.")?;
        return cur.skip(size);
    }

    let f = sink.create(INDEX_FILE)?;
    let mut out = BufWriter::new(f);
    let n = for_each_entry(cur, size, |entry| {
        writeln!(out, "{entry}")?;
        Ok(())
    })?;
    out.flush()?;
    tracing::debug!(entries = n, "index written");
    writeln!(sink.report, "wrote {INDEX_FILE}.")?;
    Ok(())
}

fn decode_script<R: Read>(
    hook: Lifecycle,
    size: u64,
    cur: &mut Cursor<R>,
    sink: &mut SectionSink<'_>,
) -> Result<()> {
    let name = hook.name();
    if !sink.extracting() {
        writeln!(sink.report, "Have script `{name}'.")?;
        return cur.skip(size);
    }

    let mut f = sink.create(name)?;
    cur.copy_to(size, &mut f, COPY_CHUNK)?;
    writeln!(sink.report, "wrote {name} script.")?;
    Ok(())
}

fn decode_archive<R: Read>(size: u64, cur: &mut Cursor<R>, sink: &mut SectionSink<'_>) -> Result<()> {
    if !sink.extracting() {
        writeln!(sink.report, "Have archive.")?;
        return cur.skip(size);
    }

    let dest = sink.out_dir.join(DESTDIR);
    if dest.exists() {
        fs::remove_dir_all(&dest)?;
    }
    fs::create_dir(&dest)?;
    sink.written.push(dest.clone());

    let mut tmp = tempfile::NamedTempFile::new()?;
    cur.copy_to(size, tmp.as_file_mut(), COPY_CHUNK)?;
    tmp.as_file_mut().flush()?;

    tracing::info!(tool = sink.extractor.name(), bytes = size, dest = %dest.display(), "extracting archive");
    sink.extractor.extract(tmp.path(), &dest)?;
    writeln!(sink.report, "extracted archive into {DESTDIR}.")?;
    Ok(())
}
