/// Shift-add string hash: `h = h * 31 + byte` with wrapping arithmetic.
#[inline(always)]
pub(crate) fn get_hash(key: &[u8]) -> u64 {
    let mut res: u64 = 0;
    for &byte in key {
        res = (res << 5).wrapping_sub(res).wrapping_add(byte as u64);
    }
    res
}
