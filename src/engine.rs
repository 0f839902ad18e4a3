//! Session orchestration: configuration, payload preparation, and the
//! embed/extract pipelines.

use crate::codec;
use crate::constants::{DEFAULT_BITS_PER_SAMPLE, LEGACY_CODE_UNIT_WIDTH, MAX_BITS_PER_SAMPLE};
use crate::crypto::{self, KeyBytes};
use crate::error::{Result, StegoError};
use crate::picture::SampleArray;
use crate::steganography;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Payload bits stored in the low end of each sample, 1 through 8.
    pub bits_per_sample: usize,

    /// Code-unit width of the retired fixed-width text codec. Accepted for
    /// compatibility; the byte-aligned codec ignores it.
    pub code_unit_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
            code_unit_width: LEGACY_CODE_UNIT_WIDTH,
        }
    }
}

/// One embedding/extraction session.
///
/// Holds the key, the configuration, and the packed chunk sequence of the
/// current payload. Image data is passed by value through [`embed`] and
/// [`extract`] rather than stored; one `Engine` serves one session, and
/// concurrent sessions each get their own instance.
///
/// [`embed`]: Engine::embed
/// [`extract`]: Engine::extract
pub struct Engine {
    config: Config,
    key: KeyBytes,
    chunks: Vec<String>,
    chunk_count: usize,
}

impl Engine {
    pub fn new(key: KeyBytes) -> Result<Self> {
        Self::with_config(key, Config::default())
    }

    pub fn with_config(key: KeyBytes, config: Config) -> Result<Self> {
        if !(1..=MAX_BITS_PER_SAMPLE).contains(&config.bits_per_sample) {
            return Err(StegoError::InvalidBitDepth(config.bits_per_sample));
        }
        Ok(Self {
            config,
            key,
            chunks: Vec::new(),
            chunk_count: 0,
        })
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Number of chunks the current payload packs into. The carrier format
    /// has no length header, so this count must reach the extracting side
    /// out-of-band together with the key and the bit depth.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Encrypts the payload and packs it into per-sample chunks.
    ///
    /// # Errors
    ///
    /// Returns [`StegoError::InvalidPayload`] for an empty payload or one
    /// containing non-ASCII bytes.
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<()> {
        if payload.is_empty() {
            return Err(StegoError::InvalidPayload("payload is empty"));
        }
        if !payload.is_ascii() {
            return Err(StegoError::InvalidPayload("payload contains non-ASCII bytes"));
        }

        let sealed = crypto::encrypt(&self.key, payload)?;
        let bits = codec::encode(&sealed);
        self.chunks = codec::pack(&bits, self.config.bits_per_sample);
        self.chunk_count = self.chunks.len();
        Ok(())
    }

    /// Embeds the loaded payload into a copy of `original`.
    ///
    /// # Errors
    ///
    /// Returns [`StegoError::InvalidPayload`] if no payload has been loaded
    /// and [`StegoError::CapacityExceeded`] if the payload packs into more
    /// chunks than the image has samples. Nothing is written in either
    /// case; truncated embedding is never silent.
    pub fn embed(&self, original: &SampleArray) -> Result<SampleArray> {
        if self.chunks.is_empty() {
            return Err(StegoError::InvalidPayload("no payload has been loaded"));
        }
        let available = original.capacity();
        if self.chunks.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: self.chunks.len(),
                available,
            });
        }
        steganography::embed(original, &self.chunks, self.config.bits_per_sample)
    }

    /// Recovers the payload using the chunk count stored by the last
    /// [`set_payload`](Engine::set_payload) in this session.
    pub fn extract(&self, carrier: &SampleArray) -> Result<Vec<u8>> {
        self.extract_counted(carrier, self.chunk_count)
    }

    /// Recovers the payload from `carrier` given an explicit chunk count,
    /// for sessions where embedding happened elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`StegoError::DecodeMismatch`] if the count is zero or
    /// exceeds the carrier's capacity, [`StegoError::DecodeMismatch`] if
    /// the extracted bits do not form a byte stream, and
    /// [`StegoError::Decrypt`] if the recovered ciphertext fails
    /// authentication (wrong key, wrong count, or a tampered image).
    pub fn extract_counted(&self, carrier: &SampleArray, chunk_count: usize) -> Result<Vec<u8>> {
        if chunk_count == 0 {
            return Err(StegoError::DecodeMismatch(
                "chunk count is zero; nothing was embedded or the count was lost".to_owned(),
            ));
        }
        let available = carrier.capacity();
        if chunk_count > available {
            return Err(StegoError::DecodeMismatch(format!(
                "chunk count {chunk_count} exceeds the carrier capacity of {available} samples"
            )));
        }

        let bits = steganography::extract(carrier, chunk_count, self.config.bits_per_sample)?;
        let sealed = codec::decode(&bits)?;
        crypto::decrypt(&self.key, &sealed)
    }
}
