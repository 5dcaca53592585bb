//! 生成文件的断言宏
//!
//! 配合 [`crate::split_blocks`] 使用，检查每个用例块的取值范围与期望值。

/// 断言值落在闭区间 `[lo, hi]` 内
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $lo:expr, $hi:expr) => {{
        let (value, lo, hi) = ($value, $lo, $hi);
        assert!(
            lo <= value && value <= hi,
            "{} 不在区间 [{}, {}] 内",
            value,
            lo,
            hi
        );
    }};
}

/// 断言 echo 块：单个输入且期望值等于输入
#[macro_export]
macro_rules! assert_echo_block {
    ($block:expr) => {{
        let block = &$block;
        assert_eq!(block.inputs.len(), 1, "echo 块应只有一个输入: {:?}", block);
        assert_eq!(block.expected, block.inputs[0], "echo 块期望值错误: {:?}", block);
    }};
}

/// 断言 sum 块：两个输入且期望值等于二者之和
#[macro_export]
macro_rules! assert_sum_block {
    ($block:expr) => {{
        let block = &$block;
        assert_eq!(block.inputs.len(), 2, "sum 块应有两个输入: {:?}", block);
        assert_eq!(
            block.expected,
            block.inputs[0] + block.inputs[1],
            "sum 块期望值错误: {:?}",
            block
        );
    }};
}
