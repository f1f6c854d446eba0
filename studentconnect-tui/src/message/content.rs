//! 内容面板消息
//!
//! 活动列表、活动详情和表单页中的操作

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表 / 字段导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter：打开详情 / 加载图片预览 / 下一字段
    Confirm,

    // ========== 搜索与筛选 ==========
    StartSearch,
    StopSearch,
    /// 上一个选项（类别筛选 / 类别字段）
    PrevOption,
    /// 下一个选项
    NextOption,

    // ========== 文字输入 ==========
    Input(char),
    Backspace,

    // ========== 表单 ==========
    NextStep,
    PrevStep,
    Submit,
}
