use crate::codec::{Decompressor, GzipCommand};
use crate::container::header::{Compression, Header};
use crate::container::toc::{SectionDescriptor, read_toc as read_toc_records};
use crate::error::Result;
use crate::read::sections::{Mode, SectionSink, decode_section};
use crate::tools::{ArchiveExtractor, TarCommand};
use crate::util::cursor::Cursor;

use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct UnpackOptions {
    pub mode: Mode,
    /// Directory that receives extracted artifacts.
    pub out_dir: PathBuf,
    pub decompressor: Box<dyn Decompressor>,
    pub extractor: Box<dyn ArchiveExtractor>,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Informational,
            out_dir: PathBuf::from("."),
            decompressor: Box::new(GzipCommand::detect()),
            extractor: Box::new(TarCommand::default()),
        }
    }
}

/// Header and table of contents of one transport form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportForm {
    pub compression: Compression,
    pub header: Header,
    pub sections: Vec<SectionDescriptor>,
}

#[derive(Debug, Clone)]
pub struct UnpackSummary {
    pub form: TransportForm,
    /// Bytes read from the (decompressed) stream.
    pub bytes_consumed: u64,
    pub written: Vec<PathBuf>,
}

type Stream = Cursor<BufReader<File>>;

/// Sniff the gzip magic and hand back a cursor over the raw form. Compressed
/// input is decompressed into an anonymous scratch file first.
fn open_stream(input: &Path, decompressor: &dyn Decompressor) -> Result<(Compression, Stream)> {
    let mut f = File::open(input)?;
    let mut prefix = Vec::with_capacity(2);
    (&mut f).take(2).read_to_end(&mut prefix)?;
    let compression = Compression::sniff(&prefix);

    let raw = match compression {
        Compression::Gzip => {
            let mut scratch = tempfile::tempfile()?;
            let n = decompressor.decompress(input, &mut scratch)?;
            tracing::info!(tool = decompressor.name(), bytes = n, "decompressed transport form");
            scratch.seek(SeekFrom::Start(0))?;
            scratch
        }
        Compression::None => {
            f.seek(SeekFrom::Start(0))?;
            f
        }
    };
    Ok((compression, Cursor::new(BufReader::new(raw))))
}

fn read_form(compression: Compression, cur: &mut Stream) -> Result<TransportForm> {
    let header = Header::read_from(cur)?;
    let sections = read_toc_records(cur, header.section_count)?;
    Ok(TransportForm {
        compression,
        header,
        sections,
    })
}

/// Read only the header and table of contents.
pub fn read_toc(input: &Path, decompressor: &dyn Decompressor) -> Result<TransportForm> {
    let (compression, mut cur) = open_stream(input, decompressor)?;
    read_form(compression, &mut cur)
}

/// Parse `input` and run every section through its decoder in TOC order.
/// Report lines go to `report`; extracted artifacts land in `opts.out_dir`.
pub fn unpack(input: &Path, opts: &UnpackOptions, report: &mut dyn Write) -> Result<UnpackSummary> {
    let (compression, mut cur) = open_stream(input, opts.decompressor.as_ref())?;
    let form = read_form(compression, &mut cur)?;
    tracing::debug!(
        version = form.header.version,
        sections = form.header.section_count,
        ?compression,
        "read table of contents"
    );

    let mut sink = SectionSink::new(opts.mode, &opts.out_dir, report, opts.extractor.as_ref());
    for desc in &form.sections {
        decode_section(desc, &mut cur, &mut sink)?;
    }

    Ok(UnpackSummary {
        bytes_consumed: cur.position(),
        written: sink.written,
        form,
    })
}
