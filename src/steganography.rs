use crate::error::{Result, StegoError};
use crate::picture::SampleArray;

fn low_mask(bits_per_sample: usize) -> Result<u8> {
    if !(1..=8).contains(&bits_per_sample) {
        return Err(StegoError::InvalidBitDepth(bits_per_sample));
    }
    Ok(((1u16 << bits_per_sample) - 1) as u8)
}

fn chunk_value(chunk: &str, bits_per_sample: usize) -> Result<u8> {
    if chunk.len() != bits_per_sample {
        return Err(StegoError::MalformedChunk(chunk.to_owned()));
    }
    u8::from_str_radix(chunk, 2).map_err(|_| StegoError::MalformedChunk(chunk.to_owned()))
}

/// Writes each chunk into the low `bits_per_sample` bits of one sample,
/// in linear buffer order, and returns the modified copy.
///
/// Stops as soon as the chunks run out; every remaining sample keeps its
/// original value, and an empty chunk sequence yields an exact copy.
/// Chunks past the array's capacity are not written.
pub fn embed(
    original: &SampleArray,
    chunks: &[String],
    bits_per_sample: usize,
) -> Result<SampleArray> {
    let mask = low_mask(bits_per_sample)?;
    let mut carrier = original.clone();

    for (sample, chunk) in carrier.samples_mut().iter_mut().zip(chunks) {
        let bits = chunk_value(chunk, bits_per_sample)?;
        *sample = (*sample & !mask) | bits;
    }

    Ok(carrier)
}

/// Reads the low `bits_per_sample` bits of the first `chunk_count` samples,
/// most significant bit first, into one bit string.
///
/// Reads at most `carrier.capacity()` samples; a `chunk_count` beyond that
/// is a protocol violation the caller has to handle.
pub fn extract(
    carrier: &SampleArray,
    chunk_count: usize,
    bits_per_sample: usize,
) -> Result<String> {
    let mask = low_mask(bits_per_sample)?;
    let take = chunk_count.min(carrier.capacity());
    let mut bits = String::with_capacity(take * bits_per_sample);

    for sample in &carrier.samples()[..take] {
        let low = sample & mask;
        for shift in (0..bits_per_sample).rev() {
            bits.push(if (low >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }

    Ok(bits)
}
