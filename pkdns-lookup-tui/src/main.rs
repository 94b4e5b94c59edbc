//! PKDNS Lookup TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! PKDNS Lookup TUI 的程序入口
//!
//! 用法：
//!     pkdns-lookup                                // 打开搜索页
//!     pkdns-lookup <key>                          // 直接打开结果页
//!     pkdns-lookup /<key>  或  "/?id=<key>"       // 同上，也接受完整的分享链接
//!
//! 其执行：
//! fn `main()` {
//!
//!     Route::parse(args)      // 解析命令行参数
//!     load config             // 配置损坏时使用默认配置并弹窗提示
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     tokio runtime           // 后台查询任务运行在多线程运行时上
//!     CoreService + App       // 组装后端与应用状态
//!     init_terminal()         // 初始化终端（raw mode + 备用屏幕 + 括号粘贴）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Result;
use pkdns_lookup_core::services::Route;
use tokio::sync::mpsc;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use i18n::{set_language, t, Language};
use model::Page;
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme_index;

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析路由
    let route = Route::parse(&std::env::args().nth(1).unwrap_or_default());

    // 2. 加载配置
    let (config, config_error) = match LocalConfigService::new().load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // 3. 初始化日志（guard 存活到 main 结束）
    let _log_guard = match init_logging(&config.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    };
    if let Some(e) = &config_error {
        log::warn!("Using default config: {e}");
    }

    // 4. 语言与主题
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::EnUs
    });
    set_language(language);
    set_theme_index(config.theme.index());
    log::info!(
        "Starting PKDNS Lookup v{} ({}, {:?} theme)",
        env!("CARGO_PKG_VERSION"),
        language.code(),
        config.theme
    );

    // 5. 异步运行时与回传通道
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (sender, mut receiver) = mpsc::unbounded_channel();

    // 6. 创建应用实例
    let backend = CoreService::from_config(&config, runtime.handle().clone(), sender);
    let mut app = model::App::new(Arc::new(backend), config.share_base_url.clone());

    if let Some(e) = &config_error {
        app.modal.show_error(t().common.config_error, e);
    }
    if let Page::Records { key } = Page::from_route(route) {
        update::open_records(&mut app, key);
    }

    // 7. 初始化终端
    let mut terminal = init_terminal()?;

    // 8. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut receiver);

    // 9. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 未完成的查询不再等待
    runtime.shutdown_background();

    // 10. 返回结果
    result
}
