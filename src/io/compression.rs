//! Transparent compression for table I/O.
//!
//! A [`CompressionCodec`] wraps readers and writers. Writers are picked from the
//! path extension only; readers try the extension first and then sniff the magic
//! bytes, so a gzip file read under any name still decodes.
//!
//! Encoders need an explicit end-of-stream step (the gzip trailer), so wrapped
//! writers are [`EncodedWrite`] trait objects that must be [`close`]d. Dropping one
//! without closing may leave a truncated file.
//!
//! [`close`]: EncodedWrite::close

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A writer whose stream has to be terminated explicitly.
pub trait EncodedWrite: Write {
    /// Flush buffered data, write any trailer, and flush the sink.
    fn close(self: Box<Self>) -> io::Result<()>;
}

impl<W: Write> EncodedWrite for BufWriter<W> {
    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.flush()
    }
}

impl<W: Write> EncodedWrite for GzEncoder<W> {
    fn close(self: Box<Self>) -> io::Result<()> {
        let mut sink = GzEncoder::finish(*self)?;
        sink.flush()
    }
}

/// A compression format usable for both reading and writing.
pub trait CompressionCodec: Sync {
    /// Short name used in error context, e.g. `gzip`.
    fn name(&self) -> &str;

    /// Lower-case path suffixes including the dot, e.g. `.gz`.
    fn extensions(&self) -> &[&str];

    /// Leading bytes of every stream in this format, if there is a reliable one.
    fn magic_bytes(&self) -> Option<&[u8]>;

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>>;

    fn wrap_writer(&self, writer: Box<dyn Write>) -> io::Result<Box<dyn EncodedWrite>>;
}

/// Single-stream gzip via `flate2`.
pub struct GzipCodec;

impl CompressionCodec for GzipCodec {
    fn name(&self) -> &str {
        "gzip"
    }

    fn extensions(&self) -> &[&str] {
        &[".gz", ".gzip"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x1f, 0x8b])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    fn wrap_writer(&self, writer: Box<dyn Write>) -> io::Result<Box<dyn EncodedWrite>> {
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }
}

static CODECS: &[&dyn CompressionCodec] = &[&GzipCodec];

/// Codec whose extension ends `path`, compared case-insensitively.
pub fn codec_for_path(path: impl AsRef<Path>) -> Option<&'static dyn CompressionCodec> {
    let name = path.as_ref().to_string_lossy().to_lowercase();
    CODECS
        .iter()
        .copied()
        .find(|c| c.extensions().iter().any(|ext| name.ends_with(ext)))
}

// Peeks without consuming.
fn codec_for_magic<R: BufRead>(reader: &mut R) -> Option<&'static dyn CompressionCodec> {
    let head = reader.fill_buf().ok()?;
    CODECS.iter().copied().find(|c| {
        c.magic_bytes()
            .is_some_and(|magic| !head.is_empty() && head.starts_with(magic))
    })
}

/// Wrap `reader` with a decoder when `path_hint` or the stream itself says it is
/// compressed; otherwise return it buffered.
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn Read>> {
    if let Some(codec) = codec_for_path(&path_hint) {
        return codec
            .wrap_reader(Box::new(BufReader::new(reader)))
            .with_context(|| format!("wrap reader with {} codec", codec.name()));
    }

    let mut buffered = BufReader::new(reader);
    if let Some(codec) = codec_for_magic(&mut buffered) {
        return codec
            .wrap_reader(Box::new(buffered))
            .with_context(|| format!("wrap reader with {} codec", codec.name()));
    }
    Ok(Box::new(buffered))
}

/// Wrap `writer` with an encoder chosen from the extension of `path_hint`.
/// Unrecognised extensions get a plain buffered writer.
pub fn auto_detect_writer<W: Write + 'static>(
    writer: W,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn EncodedWrite>> {
    let buffered = BufWriter::new(writer);
    match codec_for_path(&path_hint) {
        Some(codec) => codec
            .wrap_writer(Box::new(buffered))
            .with_context(|| format!("wrap writer with {} codec", codec.name())),
        None => Ok(Box::new(buffered)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn extension_detection_is_case_insensitive() {
        assert_eq!(codec_for_path("out.CSV.GZ").map(|c| c.name()), Some("gzip"));
        assert!(codec_for_path("out.csv").is_none());
        assert!(codec_for_path("gz").is_none());
    }

    #[test]
    fn magic_sniffing_does_not_consume() {
        let mut r = BufReader::new(Cursor::new(vec![0x1f, 0x8b, 0x08]));
        assert!(codec_for_magic(&mut r).is_some());
        assert_eq!(r.fill_buf().unwrap().len(), 3);

        let mut plain = BufReader::new(Cursor::new(b"id,name\n".to_vec()));
        assert!(codec_for_magic(&mut plain).is_none());

        let mut empty = BufReader::new(Cursor::new(Vec::new()));
        assert!(codec_for_magic(&mut empty).is_none());
    }
}
