//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, HistoryTexts, KeyNames,
    RecordsTexts, SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "PKDNS 查询",
        quit: "退出",
        back: "返回",
        help: "帮助",
        close_hint: "按 Esc 或 Enter 关闭",
        config_error: "配置错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            resolve: "解析",
            focus_search: "搜索",
            paste: "粘贴",
            blur: "离开输入框",
            switch_panel: "切换面板",
            select: "选择",
            open: "打开",
            edit_tag: "编辑标签",
            remove: "移除",
            save: "保存",
            cancel: "取消",
            copy_link: "复制链接",
            copied: "已复制 ✓",
            retry: "重试",
            dismiss: "关闭提示",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    search: SearchTexts {
        title: "搜索",
        heading: "可解析的自主密钥",
        tagline: "查找并管理任意 pubky 的 PKDNS 记录",
        input_title: "公钥",
        placeholder: "输入或粘贴一个 pubky",
        paste_failed: "从剪贴板粘贴失败",
    },

    history: HistoryTexts {
        title: "最近查询",
        empty: "暂无记录，解析过的公钥会显示在这里。",
        tag_label: "标签",
        unavailable: "历史记录不可用：无法打开存储",
    },

    records: RecordsTexts {
        results_for: "查询结果",
        col_name: "名称",
        col_type: "类型",
        col_value: "值",
        col_ttl: "TTL",
        no_records: "未找到记录",
        client_error_title: "客户端错误",
        retry_hint: "Alt+r 重试",
        last_updated: "最后更新",
        compressed_size: "压缩大小",
        copy_failed: "复制链接到剪贴板失败",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        search_shortcuts: "搜索页",
        history_shortcuts: "最近查询",
        records_shortcuts: "结果页",
        record_types: "记录类型",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            help: "帮助",
            quit: "退出",
            focus_search: "聚焦搜索框",
            resolve: "解析公钥",
            paste: "从剪贴板粘贴",
            blur: "离开输入框 / 关闭提示",
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            open: "打开选中的公钥",
            edit_tag: "编辑标签",
            remove: "从历史中移除",
            copy_link: "复制分享链接",
            retry: "重试",
            back: "返回搜索",
        },
    },
};
