use bitarith_math::{add, divide, subtract};

// Marker written in place of a quotient when the divisor is zero
const DIV_BY_ZERO_MARKER: &[u8] = b"DIV0";

fn main() {
    let operands: Vec<i32> = vec![
        0, 1, -1, 2, -2, 3, -3, 7, -7, 15, -15, 1024, -1024,
        i32::MAX, i32::MAX - 1, i32::MIN, i32::MIN + 1,
    ];

    let mut bytes = Vec::with_capacity(operands.len() * operands.len() * 12);
    for &a in &operands {
        for &b in &operands {
            bytes.extend_from_slice(&add(a, b).to_le_bytes());
            bytes.extend_from_slice(&subtract(a, b).to_le_bytes());
            match divide(a, b) {
                Ok(q) => bytes.extend_from_slice(&q.to_le_bytes()),
                Err(_) => bytes.extend_from_slice(DIV_BY_ZERO_MARKER),
            }
        }
    }
    let digest = sha256(&bytes);
    println!("BITARITH_HASH {}", digest);
}

fn sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    let out = hasher.finalize();
    hex::encode(out)
}
