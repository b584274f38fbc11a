#[inline(always)]
fn get_mask(bit_count: u8, offset: u8) -> u32 {
    ((1u32 << bit_count) - 1) << offset
}

#[inline(always)]
pub fn set_bits(source: u32, value: u16, index: u8, bit_count: u8) -> u32 {
    let mask = get_mask(bit_count, index);
    (source & !mask) | (((value as u32) << index) & mask)
}

#[inline(always)]
pub fn get_bits(source: u32, index: u8, num_bits: u8) -> u16 {
    ((source >> index) & get_mask(num_bits, 0)) as u16
}

#[inline(always)]
pub fn get_flag(source: u32, index: u8) -> bool {
    get_bits(source, index, 1) != 0
}

#[inline(always)]
pub fn set_flag(source: u32, index: u8, value: bool) -> u32 {
    set_bits(source, value as u16, index, 1)
}
