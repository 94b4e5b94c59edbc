//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, HistoryTexts, KeyNames,
    RecordsTexts, SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "PKDNS Lookup",
        quit: "Quit",
        back: "Back",
        help: "Help",
        close_hint: "Press Esc or Enter to close",
        config_error: "Configuration error",
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
            resolve: "Resolve",
            focus_search: "Search",
            paste: "Paste",
            blur: "Leave input",
            switch_panel: "Switch panel",
            select: "Select",
            open: "Open",
            edit_tag: "Edit tag",
            remove: "Remove",
            save: "Save",
            cancel: "Cancel",
            copy_link: "Copy link",
            copied: "Copied ✓",
            retry: "Retry",
            dismiss: "Dismiss",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    search: SearchTexts {
        title: "Search",
        heading: "Resolvable sovereign keys, now",
        tagline: "Find and manage PKDNS records for any pubky",
        input_title: "Public key",
        placeholder: "Enter or paste a pubky",
        paste_failed: "Failed to paste from clipboard",
    },

    history: HistoryTexts {
        title: "Recent keys",
        empty: "No recent keys yet. Resolved keys show up here.",
        tag_label: "Tag",
        unavailable: "History is unavailable: storage could not be opened",
    },

    records: RecordsTexts {
        results_for: "Results for",
        col_name: "NAME",
        col_type: "TYPE",
        col_value: "VALUE",
        col_ttl: "TTL",
        no_records: "No records found",
        client_error_title: "Client error",
        retry_hint: "Alt+r retry",
        last_updated: "Last Updated",
        compressed_size: "Compressed Size",
        copy_failed: "Failed to copy link to clipboard",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        search_shortcuts: "Search page",
        history_shortcuts: "Recent keys",
        records_shortcuts: "Results page",
        record_types: "Record types",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            help: "Help",
            quit: "Quit",
            focus_search: "Focus the search box",
            resolve: "Resolve the key",
            paste: "Paste from clipboard",
            blur: "Leave input / dismiss alert",
            switch_panel: "Switch panel",
            move_up_down: "Move Up/Down",
            open: "Open the selected key",
            edit_tag: "Edit tag",
            remove: "Remove from history",
            copy_link: "Copy share link",
            retry: "Retry",
            back: "Back to search",
        },
    },
};
