//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 页面 + 状态栏
//!         mod components;     // 导航栏、状态栏、弹窗
//!         mod pages;          // 各页面
//!         pub mod theme;      // 主题颜色
//!
//!
//!     欢迎页单独渲染（没有导航栏）；登录后按 ViewController 当前可见的视图
//!     选择页面。弹窗总是最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断文本，超出时以 … 结尾
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 按显示宽度右侧补空格
pub(crate) fn pad_width(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let fill = width.saturating_sub(UnicodeWidthStr::width(fitted.as_str()));
    format!("{fitted}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_counts_wide_characters() {
        assert_eq!(fit_width("Hackathon", 20), "Hackathon");
        assert_eq!(fit_width("Hackathon", 5), "Hack…");
        // 中文字符占两列
        assert_eq!(fit_width("黑客马拉松", 5), "黑客…");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn pad_width_fills_to_column() {
        assert_eq!(pad_width("ab", 4), "ab  ");
        assert_eq!(pad_width("黑客", 6), "黑客  ");
    }
}
