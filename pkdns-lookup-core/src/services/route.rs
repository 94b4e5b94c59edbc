//! 路由解析与分享链接
//!
//! 公钥可以放在路径段（`/<key>`）或查询参数（`/?id=<key>`）中，两种形式等价。

use url::Url;

/// 相对输入的解析基准
const PARSE_BASE: &str = "http://localhost/";

/// 路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 搜索页（无公钥）
    Search,
    /// 结果页
    Lookup(String),
}

impl Route {
    /// 解析路由
    ///
    /// 支持 `/<key>`、`/?id=<key>`、`?id=<key>`、裸公钥以及完整 URL，
    /// 百分号编码会被解码，`pk:` 前缀会被去掉。
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = input.strip_prefix("pk:").unwrap_or(input);
        if input.is_empty() {
            return Self::Search;
        }

        let url = match Url::parse(PARSE_BASE).and_then(|base| base.join(input)) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Unparseable route {input:?}: {e}");
                return Self::Search;
            }
        };

        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "id") {
            let id = id.trim();
            if !id.is_empty() {
                return Self::Lookup(id.to_string());
            }
        }

        url.path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()))
            .map(|segment| {
                urlencoding::decode(segment)
                    .map_or_else(|_| segment.to_string(), |decoded| decoded.into_owned())
            })
            .map_or(Self::Search, Self::Lookup)
    }

    /// 当前路由的公钥
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Search => None,
            Self::Lookup(key) => Some(key),
        }
    }
}

/// 生成分享链接：`<base>/?id=<key>`
#[must_use]
pub fn share_link(base_url: &str, key: &str) -> String {
    format!(
        "{}/?id={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(key)
    )
}
