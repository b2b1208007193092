use crate::binary_stream::{pack, unpack, BitString};
use crate::error::Error;

const HEADER_SIZE: usize = 8;

/// Compressed file layout:
///
/// | field      | size                            |
/// |------------|---------------------------------|
/// | bit length | u64, little endian              |
/// | payload    | ceil(bit length / 8) bytes, MSB |
///
/// The last payload byte is padded with 0 bits, the header tells the
/// decoder where the code words end.
pub fn to_bytes(bits: &BitString) -> Vec<u8> {
    let packed = pack(bits);
    let mut bytes = Vec::with_capacity(HEADER_SIZE + packed.len());
    bytes.extend_from_slice(&(bits.len() as u64).to_le_bytes());
    bytes.extend_from_slice(&packed);
    bytes
}

pub fn from_bytes(bytes: &[u8]) -> crate::Result<BitString> {
    if bytes.len() < HEADER_SIZE {
        return Err(Error::MissingPayloadHeader);
    }
    let (header, payload) = bytes.split_at(HEADER_SIZE);
    let mut bit_length_bytes = [0; HEADER_SIZE];
    bit_length_bytes.copy_from_slice(header);
    let announced_bit_length = u64::from_le_bytes(bit_length_bytes);
    let bit_length = usize::try_from(announced_bit_length)
        .map_err(|_| Error::BitLengthOutOfRange(announced_bit_length))?;

    let expected_payload_size = bit_length.div_ceil(8);
    if payload.len() != expected_payload_size {
        return Err(Error::PayloadLengthMismatch(
            payload.len(),
            expected_payload_size,
        ));
    }
    unpack(payload, bit_length)
}
