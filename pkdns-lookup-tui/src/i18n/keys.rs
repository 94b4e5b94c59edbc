//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `search.*`, `records.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 搜索页文本
    pub search: SearchTexts,
    /// 公钥历史面板文本
    pub history: HistoryTexts,
    /// 记录结果页文本
    pub records: RecordsTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub close_hint: &'static str,
    pub config_error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub resolve: &'static str,      // "解析" / "Resolve"
    pub focus_search: &'static str, // "搜索" / "Search"
    pub paste: &'static str,        // "粘贴" / "Paste"
    pub blur: &'static str,         // "离开输入框" / "Leave input"
    pub switch_panel: &'static str, // "切换面板" / "Switch panel"
    pub select: &'static str,       // "选择" / "Select"
    pub open: &'static str,         // "打开" / "Open"
    pub edit_tag: &'static str,     // "编辑标签" / "Edit tag"
    pub remove: &'static str,       // "移除" / "Remove"
    pub save: &'static str,         // "保存" / "Save"
    pub cancel: &'static str,       // "取消" / "Cancel"
    pub copy_link: &'static str,    // "复制链接" / "Copy link"
    pub copied: &'static str,       // "已复制 ✓" / "Copied ✓"
    pub retry: &'static str,        // "重试" / "Retry"
    pub dismiss: &'static str,      // "关闭提示" / "Dismiss"
}

// ============================================================================
// 页面文本
// ============================================================================

/// 搜索页文本
pub struct SearchTexts {
    pub title: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub input_title: &'static str,
    pub placeholder: &'static str,
    pub paste_failed: &'static str,
}

/// 公钥历史面板文本
pub struct HistoryTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub tag_label: &'static str,
    pub unavailable: &'static str,
}

/// 记录结果页文本
pub struct RecordsTexts {
    /// 标题前缀，后接公钥
    pub results_for: &'static str,
    pub col_name: &'static str,
    pub col_type: &'static str,
    pub col_value: &'static str,
    pub col_ttl: &'static str,
    pub no_records: &'static str,
    pub client_error_title: &'static str,
    pub retry_hint: &'static str,
    pub last_updated: &'static str,
    pub compressed_size: &'static str,
    pub copy_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub search_shortcuts: &'static str,
    pub history_shortcuts: &'static str,
    pub records_shortcuts: &'static str,
    pub record_types: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助弹窗中的动作说明
pub struct HelpActionTexts {
    pub help: &'static str,
    pub quit: &'static str,
    pub focus_search: &'static str,
    pub resolve: &'static str,
    pub paste: &'static str,
    pub blur: &'static str,
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub open: &'static str,
    pub edit_tag: &'static str,
    pub remove: &'static str,
    pub copy_link: &'static str,
    pub retry: &'static str,
    pub back: &'static str,
}
