use lsb_cloak::codec::{decode, encode, pack};
use lsb_cloak::error::StegoError;
use lsb_cloak::picture::SampleArray;
use lsb_cloak::steganography::{embed, extract};
use rand::RngCore;

fn random_array(height: usize, width: usize, channels: usize) -> SampleArray {
    let mut data = vec![0u8; height * width * channels];
    rand::rng().fill_bytes(&mut data);
    SampleArray::from_raw(height, width, channels, data).expect("shape matches buffer")
}

fn chunk_strings(chunks: &[&str]) -> Vec<String> {
    chunks.iter().map(|chunk| (*chunk).to_owned()).collect()
}

#[test]
fn embed_writes_low_bits_in_buffer_order() {
    let original = SampleArray::from_raw(1, 2, 3, vec![0; 6]).unwrap();
    let chunks = chunk_strings(&["11", "01", "10"]);

    let carrier = embed(&original, &chunks, 2).unwrap();

    // Channel varies fastest: the three chunks land in the first pixel.
    assert_eq!(carrier.sample(0, 0, 0), Some(0b11));
    assert_eq!(carrier.sample(0, 0, 1), Some(0b01));
    assert_eq!(carrier.sample(0, 0, 2), Some(0b10));
    assert_eq!(carrier.sample(0, 1, 0), Some(0));
}

#[test]
fn embed_never_touches_high_bits_or_later_samples() {
    let original = random_array(4, 5, 3);
    let bits_per_sample = 2;
    let chunks = pack(&encode(b"hi"), bits_per_sample);

    let carrier = embed(&original, &chunks, bits_per_sample).unwrap();

    for (i, (new, old)) in carrier
        .samples()
        .iter()
        .zip(original.samples())
        .enumerate()
    {
        if i < chunks.len() {
            assert_eq!(new >> bits_per_sample, old >> bits_per_sample);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn embed_with_no_chunks_is_an_exact_copy() {
    let original = random_array(3, 3, 3);
    let carrier = embed(&original, &[], 2).unwrap();
    assert_eq!(carrier, original);
}

#[test]
fn embed_stops_at_capacity() {
    let original = SampleArray::from_raw(1, 1, 3, vec![0xFF; 3]).unwrap();
    let chunks = chunk_strings(&["00", "00", "00", "00", "00"]);

    let carrier = embed(&original, &chunks, 2).unwrap();
    assert_eq!(carrier.samples(), &[0xFC, 0xFC, 0xFC]);
}

#[test]
fn embed_rejects_bad_bit_depths_and_chunks() {
    let original = random_array(2, 2, 3);
    assert!(matches!(
        embed(&original, &[], 0),
        Err(StegoError::InvalidBitDepth(0))
    ));
    assert!(matches!(
        embed(&original, &[], 9),
        Err(StegoError::InvalidBitDepth(9))
    ));
    assert!(matches!(
        embed(&original, &chunk_strings(&["111"]), 2),
        Err(StegoError::MalformedChunk(_))
    ));
    assert!(matches!(
        embed(&original, &chunk_strings(&["1x"]), 2),
        Err(StegoError::MalformedChunk(_))
    ));
}

#[test]
fn extract_reads_back_what_embed_wrote() {
    for bits_per_sample in 1..=8usize {
        let original = random_array(6, 4, 3);
        let mut payload = vec![0u8; 5];
        rand::rng().fill_bytes(&mut payload);

        let chunks = pack(&encode(&payload), bits_per_sample);
        assert!(chunks.len() <= original.capacity());

        let carrier = embed(&original, &chunks, bits_per_sample).unwrap();
        let bits = extract(&carrier, chunks.len(), bits_per_sample).unwrap();

        assert_eq!(decode(&bits).unwrap(), payload);
    }
}

#[test]
fn extract_clamps_to_capacity() {
    let carrier = SampleArray::from_raw(1, 1, 3, vec![0b11, 0b10, 0b01]).unwrap();
    let bits = extract(&carrier, 100, 2).unwrap();
    assert_eq!(bits, "111001");
}

#[test]
fn extraction_is_idempotent() {
    let original = random_array(5, 5, 3);
    let chunks = pack(&encode(b"repeatable"), 2);
    let carrier = embed(&original, &chunks, 2).unwrap();

    let first = extract(&carrier, chunks.len(), 2).unwrap();
    let second = extract(&carrier, chunks.len(), 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn two_byte_payload_at_two_bits_uses_exactly_eight_samples() {
    let original = SampleArray::from_raw(2, 2, 3, vec![0b1010_0101; 12]).unwrap();
    let chunks = pack(&encode(b"hi"), 2);
    assert_eq!(chunks.len(), 8);

    let carrier = embed(&original, &chunks, 2).unwrap();
    assert_eq!(&carrier.samples()[8..], &original.samples()[8..]);

    let bits = extract(&carrier, 8, 2).unwrap();
    assert_eq!(decode(&bits).unwrap(), b"hi");
}

#[test]
fn sample_array_reports_its_shape() {
    let array = SampleArray::from_raw(4, 5, 3, vec![0; 60]).unwrap();
    assert_eq!(array.height(), 4);
    assert_eq!(array.width(), 5);
    assert_eq!(array.channels(), 3);
    assert_eq!(array.capacity(), 60);
    assert_eq!(array.sample(4, 0, 0), None);
    assert_eq!(array.sample(0, 5, 0), None);
    assert_eq!(array.sample(0, 0, 3), None);
}

#[test]
fn from_raw_rejects_shape_mismatch() {
    assert!(matches!(
        SampleArray::from_raw(2, 2, 3, vec![0; 11]),
        Err(StegoError::ShapeMismatch {
            expected: 12,
            actual: 11
        })
    ));
}
