#![forbid(unsafe_code)]

pub mod error;
pub mod input;

pub mod util {
    pub mod cursor;
}

pub mod codec;
pub mod tools;

pub mod container {
    pub mod header;
    pub mod index;
    pub mod section;
    pub mod toc;
}

pub mod read {
    pub mod sections;
    pub mod unpack;
}

// Re-exports: stable API surface
pub use codec::{Decompressor, FlateGunzip, GzipCommand};
pub use container::header::{Compression, Header};
pub use container::section::{Lifecycle, SectionKind};
pub use container::toc::SectionDescriptor;
pub use input::locate_input;
pub use read::sections::Mode;
pub use read::unpack::{TransportForm, UnpackOptions, UnpackSummary, read_toc, unpack};
pub use tools::{ArchiveExtractor, TarCommand};
