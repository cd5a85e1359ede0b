/// 字节块到定长数组的转换辅助.
pub struct Block;

impl Block {
    /// Undefined: <br>
    /// 如果`data.len() != N`可能会造成不可知的错误, 如内存越界访问等.
    pub const fn to_arr_uncheck<const N: usize>(data: &[u8]) -> [u8; N] {
        unsafe { (data.as_ptr() as *const [u8; N]).read() }
    }
}

#[cfg(test)]
mod tests {
    use super::Block;

    #[test]
    fn arr_conversion() {
        let data = [1u8, 2, 3, 4];
        assert_eq!(Block::to_arr_uncheck::<4>(&data), [1, 2, 3, 4]);
        assert_eq!(Block::to_arr_uncheck::<2>(&data[1..3]), [2, 3]);
    }
}
