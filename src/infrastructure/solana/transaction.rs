//! Legacy Solana transaction wire format for a single system transfer
//!
//! Layout: compact array of signatures, then the signed message
//! (header, account keys, recent blockhash, instructions). Array
//! lengths use the compact-u16 ("shortvec") encoding.

use ed25519_dalek::{Signature, Signer, SigningKey};

/// The system program owns native transfers; its id is all zeros.
const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// SystemInstruction::Transfer discriminant
const TRANSFER_INSTRUCTION: u32 = 2;

/// Ed25519 keypair for signing transactions
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Parse a hex-encoded secret key: either a 32-byte seed or a
    /// 64-byte solana-style secret (seed followed by public key).
    pub fn from_hex(secret: &str) -> Result<Self, String> {
        let bytes = hex::decode(secret.trim())
            .map_err(|e| format!("invalid private key hex: {}", e))?;

        let mut seed = [0u8; 32];
        match bytes.len() {
            32 | 64 => seed.copy_from_slice(&bytes[..32]),
            n => return Err(format!("private key must be 32 or 64 bytes, got {}", n)),
        }

        Ok(Self {
            signing: SigningKey::from_bytes(&seed),
        })
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }

    fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }
}

/// Decode a base58 32-byte value (address or blockhash).
pub fn decode_hash(encoded: &str) -> Result<[u8; 32], String> {
    let bytes = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| format!("invalid base58 '{}': {}", encoded, e))?;

    let mut out = [0u8; 32];
    if bytes.len() != 32 {
        return Err(format!("expected 32 bytes, got {}", bytes.len()));
    }
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Build and sign a single-instruction transfer transaction, returning
/// the wire bytes ready for base64 submission.
pub fn build_transfer(
    keypair: &Keypair,
    recipient: &str,
    lamports: u64,
    recent_blockhash: &[u8; 32],
) -> Result<Vec<u8>, String> {
    let sender = keypair.public_key();
    let to = decode_hash(recipient).map_err(|e| format!("invalid recipient address: {}", e))?;

    let message = build_message(&sender, &to, lamports, recent_blockhash);
    let signature = keypair.sign(&message);

    let mut tx = Vec::with_capacity(1 + 64 + message.len());
    encode_compact_u16(&mut tx, 1);
    tx.extend_from_slice(&signature.to_bytes());
    tx.extend_from_slice(&message);
    Ok(tx)
}

fn build_message(from: &[u8; 32], to: &[u8; 32], lamports: u64, blockhash: &[u8; 32]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(160);

    // Header: one writable signer, no readonly signers, one readonly
    // unsigned account (the system program).
    msg.push(1);
    msg.push(0);
    msg.push(1);

    // Account keys: sender, recipient, system program.
    encode_compact_u16(&mut msg, 3);
    msg.extend_from_slice(from);
    msg.extend_from_slice(to);
    msg.extend_from_slice(&SYSTEM_PROGRAM_ID);

    msg.extend_from_slice(blockhash);

    // One instruction: system program (index 2) over accounts [0, 1].
    encode_compact_u16(&mut msg, 1);
    msg.push(2);
    encode_compact_u16(&mut msg, 2);
    msg.push(0);
    msg.push(1);

    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&TRANSFER_INSTRUCTION.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    encode_compact_u16(&mut msg, data.len() as u16);
    msg.extend_from_slice(&data);

    msg
}

/// Compact-u16 encoding: 7 bits per byte, high bit marks continuation.
fn encode_compact_u16(out: &mut Vec<u8>, mut value: u16) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Verifier;

    fn test_keypair() -> Keypair {
        Keypair::from_hex(&"11".repeat(32)).unwrap()
    }

    fn encoded(value: u16) -> Vec<u8> {
        let mut out = Vec::new();
        encode_compact_u16(&mut out, value);
        out
    }

    #[test]
    fn compact_u16_encoding() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(1), vec![0x01]);
        assert_eq!(encoded(127), vec![0x7f]);
        assert_eq!(encoded(128), vec![0x80, 0x01]);
        assert_eq!(encoded(16384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn keypair_from_hex_lengths() {
        assert!(Keypair::from_hex(&"11".repeat(32)).is_ok());
        assert!(Keypair::from_hex(&"11".repeat(64)).is_ok());
        assert!(Keypair::from_hex(&"11".repeat(16)).is_err());
        assert!(Keypair::from_hex("not-hex").is_err());
    }

    #[test]
    fn seed_prefix_of_64_byte_secret_drives_signing() {
        let short = Keypair::from_hex(&"22".repeat(32)).unwrap();
        let long = Keypair::from_hex(&format!("{}{}", "22".repeat(32), "33".repeat(32))).unwrap();
        assert_eq!(short.public_key(), long.public_key());
    }

    #[test]
    fn decode_hash_round_trips() {
        let raw = [7u8; 32];
        let encoded = bs58::encode(raw).into_string();
        assert_eq!(decode_hash(&encoded).unwrap(), raw);
        assert!(decode_hash("abc").is_err());
        assert!(decode_hash("0OIl").is_err());
    }

    #[test]
    fn message_layout() {
        let from = [1u8; 32];
        let to = [2u8; 32];
        let blockhash = [3u8; 32];
        let lamports = 1_500_000_000u64;

        let msg = build_message(&from, &to, lamports, &blockhash);

        // header + key count + 3 keys + blockhash + instruction count
        // + program index + account count + 2 accounts + data length
        // + 12 bytes of data
        assert_eq!(msg.len(), 3 + 1 + 96 + 32 + 1 + 1 + 1 + 2 + 1 + 12);

        assert_eq!(&msg[0..3], &[1, 0, 1]);
        assert_eq!(msg[3], 3);
        assert_eq!(&msg[4..36], &from);
        assert_eq!(&msg[36..68], &to);
        assert_eq!(&msg[68..100], &SYSTEM_PROGRAM_ID);
        assert_eq!(&msg[100..132], &blockhash);

        // Instruction data: u32 LE discriminant 2, then u64 LE lamports.
        let data = &msg[msg.len() - 12..];
        assert_eq!(&data[0..4], &2u32.to_le_bytes());
        assert_eq!(&data[4..12], &lamports.to_le_bytes());
    }

    #[test]
    fn transfer_signature_verifies() {
        let keypair = test_keypair();
        let recipient = bs58::encode([9u8; 32]).into_string();
        let blockhash = [5u8; 32];

        let tx = build_transfer(&keypair, &recipient, 42, &blockhash).unwrap();

        // One signature, then 64 signature bytes, then the message.
        assert_eq!(tx[0], 1);
        let signature = Signature::from_slice(&tx[1..65]).unwrap();
        let message = &tx[65..];
        assert!(keypair
            .signing
            .verifying_key()
            .verify(message, &signature)
            .is_ok());
    }

    #[test]
    fn rejects_bad_recipient() {
        let keypair = test_keypair();
        let err = build_transfer(&keypair, "not-an-address!", 1, &[0u8; 32]).unwrap_err();
        assert!(err.contains("invalid recipient address"));
    }
}
