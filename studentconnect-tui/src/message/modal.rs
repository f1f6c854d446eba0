//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换学生 / 组织者标签
    ToggleTab,

    /// 切换登录 / 注册
    ToggleMode,

    /// 切换密码可见性
    TogglePassword,

    /// 在确认弹窗中切换按钮
    ToggleChoice,
}
