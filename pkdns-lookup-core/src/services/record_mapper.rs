//! 记录映射
//!
//! 把客户端返回的原始记录转换为表格行。映射是全函数：任何记录类型、
//! 任何字段缺失都会得到一个展示值，缺失时回退为 [`PLACEHOLDER`]。

use crate::types::{DisplayRecord, RawRData, RawRecord, SvcbData};

/// 字段缺失时的占位值
pub const PLACEHOLDER: &str = "-";

/// 区域根的名称
pub const ZONE_ROOT: &str = "@";

/// 映射单条记录
///
/// `public_key` 只用于确认最后一个标签，标签无论是否匹配都会被去掉。
#[must_use]
pub fn map_record(raw: &RawRecord, public_key: &str) -> DisplayRecord {
    DisplayRecord {
        name: relative_name(&raw.name, public_key),
        record_type: raw.rdata.record_type(),
        value: display_value(&raw.rdata),
        ttl: raw.ttl,
    }
}

/// 批量映射，保持原顺序
#[must_use]
pub fn map_records(raws: &[RawRecord], public_key: &str) -> Vec<DisplayRecord> {
    raws.iter().map(|r| map_record(r, public_key)).collect()
}

/// 去掉最后一个标签（公钥），剩余为空时返回 `@`
fn relative_name(name: &str, public_key: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    let mut labels: Vec<&str> = name.split('.').collect();
    if let Some(last) = labels.pop() {
        if !last.eq_ignore_ascii_case(public_key) {
            log::debug!("Record name {name} does not end with the looked-up key");
        }
    }

    if labels.is_empty() {
        ZONE_ROOT.to_string()
    } else {
        labels.join(".")
    }
}

fn display_value(rdata: &RawRData) -> String {
    let value = match rdata {
        RawRData::A { address } | RawRData::Aaaa { address } => address.clone(),
        RawRData::Cname { target } => target.clone(),
        RawRData::Txt { value } => value.clone(),
        RawRData::Ns { nsdname } => nsdname.clone(),
        RawRData::Https(data) | RawRData::Svcb(data) => {
            Some(format_pkarr_svcb(data).unwrap_or_else(|| format_svcb(data)))
        }
        RawRData::Other { generic, .. } => generic.clone(),
    };

    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// 是否为根目标（空串或 `.`）
fn is_root_target(target: &str) -> bool {
    target.is_empty() || target == "."
}

/// `k=v` 以空格连接，无值参数只写 key
fn join_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            if v.is_empty() {
                k.clone()
            } else {
                format!("{k}={v}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// pkarr 主页服务器记录的格式化
///
/// 以 priority 0 + 空目标发布的记录按 `1 . k=v ...` 展示。
#[must_use]
pub fn format_pkarr_svcb(data: &SvcbData) -> Option<String> {
    if data.priority != 0 || !is_root_target(&data.target) {
        return None;
    }
    let params = join_params(&data.params);
    Some(format!("1 . {params}").trim_end().to_string())
}

/// 通用格式化：优先使用客户端提供的文本，否则 `<priority> <target> k=v ...`
fn format_svcb(data: &SvcbData) -> String {
    if let Some(generic) = data.generic.as_ref().filter(|g| !g.is_empty()) {
        return generic.clone();
    }

    let target = if is_root_target(&data.target) {
        "."
    } else {
        data.target.as_str()
    };
    let mut out = format!("{} {target}", data.priority);
    if !data.params.is_empty() {
        out.push(' ');
        out.push_str(&join_params(&data.params));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{raw_record, SAMPLE_KEY};
    use crate::types::RecordType;

    fn svcb(priority: u16, target: &str, params: &[(&str, &str)]) -> SvcbData {
        SvcbData {
            priority,
            target: target.to_string(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            generic: None,
        }
    }

    #[test]
    fn test_txt_with_nested_name() {
        let raw = raw_record(
            &format!("a.b.{SAMPLE_KEY}"),
            300,
            RawRData::Txt {
                value: Some("hello".to_string()),
            },
        );
        let row = map_record(&raw, SAMPLE_KEY);
        assert_eq!(row.name, "a.b");
        assert_eq!(row.record_type, RecordType::Txt);
        assert_eq!(row.value, "hello");
        assert_eq!(row.ttl, 300);
    }

    #[test]
    fn test_bare_key_is_zone_root() {
        let rdata = RawRData::A {
            address: Some("1.2.3.4".to_string()),
        };
        assert_eq!(
            map_record(&raw_record(SAMPLE_KEY, 60, rdata.clone()), SAMPLE_KEY).name,
            "@"
        );
        assert_eq!(
            map_record(&raw_record(&format!("{SAMPLE_KEY}."), 60, rdata), SAMPLE_KEY).name,
            "@"
        );
    }

    #[test]
    fn test_cname_shows_target_only() {
        let raw = raw_record(
            &format!("www.{SAMPLE_KEY}"),
            60,
            RawRData::Cname {
                target: Some("example.com".to_string()),
            },
        );
        let row = map_record(&raw, SAMPLE_KEY);
        assert_eq!(row.value, "example.com");
        assert_eq!(row.record_type, RecordType::Cname);
    }

    #[test]
    fn test_pkarr_homeserver_format() {
        let data = svcb(0, "", &[("port", "443"), ("alpn", "h2")]);
        assert_eq!(format_pkarr_svcb(&data).as_deref(), Some("1 . port=443 alpn=h2"));

        let raw = raw_record(&format!("_pubky.{SAMPLE_KEY}"), 3600, RawRData::Https(data));
        assert_eq!(map_record(&raw, SAMPLE_KEY).value, "1 . port=443 alpn=h2");
    }

    #[test]
    fn test_svcb_generic_formatting() {
        let data = svcb(1, "homeserver.example", &[("port", "6881")]);
        assert_eq!(format_pkarr_svcb(&data), None);
        let raw = raw_record(SAMPLE_KEY, 60, RawRData::Svcb(data));
        assert_eq!(
            map_record(&raw, SAMPLE_KEY).value,
            "1 homeserver.example port=6881"
        );

        let data = svcb(1, "x.example", &[("alpn", "h3"), ("no-default-alpn", "")]);
        let raw = raw_record(SAMPLE_KEY, 60, RawRData::Https(data));
        assert_eq!(
            map_record(&raw, SAMPLE_KEY).value,
            "1 x.example alpn=h3 no-default-alpn"
        );

        let mut with_generic = svcb(2, "x.example", &[]);
        with_generic.generic = Some("2 x.example. alpn=h3".to_string());
        let raw = raw_record(SAMPLE_KEY, 60, RawRData::Https(with_generic));
        assert_eq!(map_record(&raw, SAMPLE_KEY).value, "2 x.example. alpn=h3");
    }

    #[test]
    fn test_mapping_is_total() {
        let cases = [
            RawRData::A { address: None },
            RawRData::Aaaa { address: None },
            RawRData::Cname { target: None },
            RawRData::Txt { value: None },
            RawRData::Txt {
                value: Some(String::new()),
            },
            RawRData::Ns { nsdname: None },
            RawRData::Https(SvcbData::default()),
            RawRData::Svcb(svcb(3, "", &[])),
            RawRData::Other {
                type_name: "MX".to_string(),
                generic: None,
            },
        ];
        for rdata in cases {
            for name in ["", ".", SAMPLE_KEY, "a..b", "x.y.z."] {
                let row = map_record(&raw_record(name, 0, rdata.clone()), SAMPLE_KEY);
                assert!(!row.value.is_empty());
                assert!(!row.name.is_empty());
                assert_eq!(row.record_type, rdata.record_type());
            }
        }
    }

    #[test]
    fn test_absent_fields_fall_back_to_placeholder() {
        let raw = raw_record(SAMPLE_KEY, 1, RawRData::Ns { nsdname: None });
        assert_eq!(map_record(&raw, SAMPLE_KEY).value, PLACEHOLDER);
        let raw = raw_record(
            SAMPLE_KEY,
            1,
            RawRData::Other {
                type_name: "MX".to_string(),
                generic: None,
            },
        );
        let row = map_record(&raw, SAMPLE_KEY);
        assert_eq!(row.value, PLACEHOLDER);
        assert_eq!(row.record_type, RecordType::Other("MX".to_string()));
    }

    #[test]
    fn test_map_records_keeps_order() {
        let raws = vec![
            raw_record(&format!("b.{SAMPLE_KEY}"), 1, RawRData::A { address: None }),
            raw_record(&format!("a.{SAMPLE_KEY}"), 1, RawRData::A { address: None }),
        ];
        let names: Vec<_> = map_records(&raws, SAMPLE_KEY)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["b", "a"]);
    }
}
