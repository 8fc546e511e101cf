//! Generated audio output and the run manifest.

mod writer;

pub use writer::{
    MANIFEST_FILE_NAME, ManifestEntry, OutputError, OutputWriter, RunManifest,
    reader_duration, variation_file_name, wav_duration,
};
