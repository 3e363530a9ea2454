use std::io::Read;

use flate2::read::GzDecoder;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CompressionType {
    None,
    Gzip,
    LZ4,
}

impl CompressionType {
    /// Expands `compressed` into a freshly allocated buffer.
    ///
    /// Gzip payloads are complete gzip streams (header, deflate body and
    /// trailer); a missing trailer is reported as an error. LZ4 payloads
    /// carry the decompressed length as a little-endian `u32` prefix.
    pub fn decompress(&self, compressed: &[u8]) -> std::io::Result<Vec<u8>> {
        Ok(match *self {
            CompressionType::Gzip => {
                let mut decoder = GzDecoder::new(compressed);
                let mut decompressed = Vec::new();
                decoder.read_to_end(&mut decompressed)?;
                decompressed
            }
            CompressionType::LZ4 => lz4_flex::decompress_size_prepended(compressed)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?,
            CompressionType::None => compressed.to_owned(),
        })
    }
}
