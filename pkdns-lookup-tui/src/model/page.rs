//! 页面状态定义

use pkdns_lookup_core::services::Route;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 搜索页
    #[default]
    Search,
    /// 记录结果页
    Records { key: String },
}

impl Page {
    /// 由路由得到页面
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::Search => Page::Search,
            Route::Lookup(key) => Page::Records { key },
        }
    }

    /// 结果页对应的公钥
    pub fn key(&self) -> Option<&str> {
        match self {
            Page::Search => None,
            Page::Records { key } => Some(key),
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::Records { .. })
    }
}
