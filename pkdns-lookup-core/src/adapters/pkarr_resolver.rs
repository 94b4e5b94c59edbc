//! PKARR resolution client adapter
//!
//! DHT lookup, relays, signature verification and decompression all live
//! inside the `pkarr` crate. This adapter only projects its packets into
//! [`ResolvedPacket`].

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use async_trait::async_trait;
use pkarr::dns::rdata::{RData, SVCB};
use pkarr::dns::{ResourceRecord, TYPE};
use pkarr::{Client, PublicKey, SignedPacket};

use crate::error::{CoreError, CoreResult};
use crate::traits::{PacketResolver, ResolverFactory};
use crate::types::{RawRData, RawRecord, ResolvedPacket, SvcbData};

/// Builds the default pkarr client
#[derive(Debug, Clone, Copy, Default)]
pub struct PkarrClientFactory;

#[async_trait]
impl ResolverFactory for PkarrClientFactory {
    async fn build(&self) -> CoreResult<Arc<dyn PacketResolver>> {
        let client = Client::builder()
            .build()
            .map_err(|e| CoreError::ClientInitialization(e.to_string()))?;
        Ok(Arc::new(PkarrResolver::new(client)))
    }
}

/// Resolver backed by a `pkarr::Client`
pub struct PkarrResolver {
    client: Client,
}

impl PkarrResolver {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PacketResolver for PkarrResolver {
    async fn resolve(&self, public_key: &str) -> CoreResult<Option<ResolvedPacket>> {
        let public_key = PublicKey::try_from(public_key)
            .map_err(|e| CoreError::Resolution(format!("Invalid public key: {e}")))?;

        log::debug!("Resolving {public_key}");
        Ok(self
            .client
            .resolve(&public_key)
            .await
            .map(|packet| project_packet(&packet)))
    }
}

fn project_packet(packet: &SignedPacket) -> ResolvedPacket {
    ResolvedPacket {
        records: packet.all_resource_records().map(project_record).collect(),
        timestamp_micros: packet.timestamp().as_u64(),
        encoded_size: packet.encoded_packet().len(),
    }
}

fn project_record(rr: &ResourceRecord<'_>) -> RawRecord {
    RawRecord {
        name: rr.name.to_string(),
        ttl: rr.ttl,
        rdata: project_rdata(&rr.rdata),
    }
}

fn project_rdata(rdata: &RData<'_>) -> RawRData {
    match rdata {
        RData::A(a) => RawRData::A {
            address: Some(Ipv4Addr::from(a.address).to_string()),
        },
        RData::AAAA(a) => RawRData::Aaaa {
            address: Some(Ipv6Addr::from(a.address).to_string()),
        },
        RData::CNAME(c) => RawRData::Cname {
            target: Some(c.0.to_string()),
        },
        RData::NS(n) => RawRData::Ns {
            nsdname: Some(n.0.to_string()),
        },
        RData::TXT(t) => RawRData::Txt {
            value: String::try_from(t.clone()).ok(),
        },
        RData::HTTPS(h) => RawRData::Https(project_svcb(&h.0)),
        RData::SVCB(s) => RawRData::Svcb(project_svcb(s)),
        other => RawRData::Other {
            type_name: type_name(other.type_code()),
            generic: generic_text(other),
        },
    }
}

fn project_svcb(svcb: &SVCB<'_>) -> SvcbData {
    SvcbData {
        priority: svcb.priority,
        target: svcb.target.to_string(),
        params: svcb
            .iter_params()
            .map(|(key, value)| svc_param(key, value))
            .collect(),
        generic: None,
    }
}

/// Presentation name of a SvcParamKey (RFC 9460 §14.3.2)
fn svc_param_key(key: u16) -> String {
    match key {
        SVCB::MANDATORY => "mandatory".to_string(),
        SVCB::ALPN => "alpn".to_string(),
        SVCB::NO_DEFAULT_ALPN => "no-default-alpn".to_string(),
        SVCB::PORT => "port".to_string(),
        SVCB::IPV4HINT => "ipv4hint".to_string(),
        SVCB::ECH => "ech".to_string(),
        SVCB::IPV6HINT => "ipv6hint".to_string(),
        other => format!("key{other}"),
    }
}

/// Decodes a wire-format SvcParam into its presentation `(key, value)`.
///
/// Flag params such as `no-default-alpn` get an empty value. Values that do
/// not decode for their key are shown as hex.
fn svc_param(key: u16, value: &[u8]) -> (String, String) {
    let decoded = match key {
        SVCB::MANDATORY => u16_list(value).map(|keys| {
            keys.into_iter()
                .map(svc_param_key)
                .collect::<Vec<_>>()
                .join(",")
        }),
        SVCB::ALPN => alpn_ids(value).map(|ids| ids.join(",")),
        SVCB::NO_DEFAULT_ALPN if value.is_empty() => Some(String::new()),
        SVCB::PORT => <[u8; 2]>::try_from(value)
            .ok()
            .map(|port| u16::from_be_bytes(port).to_string()),
        SVCB::IPV4HINT => addresses::<4, Ipv4Addr>(value),
        SVCB::IPV6HINT => addresses::<16, Ipv6Addr>(value),
        _ => None,
    };
    (svc_param_key(key), decoded.unwrap_or_else(|| to_hex(value)))
}

fn u16_list(value: &[u8]) -> Option<Vec<u16>> {
    if value.is_empty() || value.len() % 2 != 0 {
        return None;
    }
    Some(
        value
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect(),
    )
}

/// ALPN ids are length-prefixed strings
fn alpn_ids(mut value: &[u8]) -> Option<Vec<String>> {
    let mut ids = Vec::new();
    while let Some((&len, rest)) = value.split_first() {
        let len = usize::from(len);
        if len == 0 || rest.len() < len {
            return None;
        }
        let (id, rest) = rest.split_at(len);
        ids.push(String::from_utf8_lossy(id).into_owned());
        value = rest;
    }
    (!ids.is_empty()).then_some(ids)
}

/// Comma-separated list of fixed-width addresses
fn addresses<const N: usize, A>(value: &[u8]) -> Option<String>
where
    A: From<[u8; N]> + ToString,
{
    if value.is_empty() || value.len() % N != 0 {
        return None;
    }
    let list: Vec<String> = value
        .chunks_exact(N)
        .filter_map(|chunk| <[u8; N]>::try_from(chunk).ok())
        .map(|octets| A::from(octets).to_string())
        .collect();
    Some(list.join(","))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Type mnemonic, or `TYPE<n>` (RFC 3597) for unregistered codes
fn type_name(code: TYPE) -> String {
    match code {
        TYPE::Unknown(n) => format!("TYPE{n}"),
        other => format!("{other:?}"),
    }
}

/// Zone-file presentation text for the common types; `None` for the rest
fn generic_text(rdata: &RData<'_>) -> Option<String> {
    match rdata {
        RData::MX(mx) => Some(format!("{} {}", mx.preference, mx.exchange)),
        RData::SRV(srv) => Some(format!(
            "{} {} {} {}",
            srv.priority, srv.weight, srv.port, srv.target
        )),
        RData::PTR(ptr) => Some(ptr.0.to_string()),
        RData::SOA(soa) => Some(format!(
            "{} {} {} {} {} {} {}",
            soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
        )),
        RData::CAA(caa) => String::try_from(caa.tag.clone()).ok().map(|tag| {
            format!(
                "{} {tag} \"{}\"",
                caa.flag,
                String::from_utf8_lossy(&caa.value)
            )
        }),
        RData::NULL(_, data) => {
            let bytes = data.get_data();
            Some(format!("\\# {} {}", bytes.len(), to_hex(bytes)).trim_end().to_string())
        }
        _ => None,
    }
}
