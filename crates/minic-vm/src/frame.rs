//! Call frames.

use num_bigint::BigInt;

/// One activation record. `locals` is a single contiguous slot array
/// covering parameters followed by locals, so `LOAD_LOCAL`/`STORE_LOCAL`
/// never need to know which kind of slot they're touching.
pub struct Frame {
    pub locals: Vec<BigInt>,
    pub return_addr: usize,
    pub operand_base: usize,
}

impl Frame {
    pub fn new(frame_size: usize, return_addr: usize, operand_base: usize) -> Self {
        Self {
            locals: vec![BigInt::from(0); frame_size],
            return_addr,
            operand_base,
        }
    }
}
