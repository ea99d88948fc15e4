//! DNS query build, exchange, and answer extraction.
//!
//! One call is one exchange: serialize a single A query, write it to the
//! transport, read one response, collect the A answers in response order.
//! Other record types in the answer section are skipped.

use super::transport::DnsTransport;
use bound_dns_domain::ResolveError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::str::FromStr;
use tracing::debug;

/// Build a recursive A query for the fully-qualified form of `host`,
/// serialized to wire format with a random ID.
pub fn build_query(host: &str) -> Result<Vec<u8>, ResolveError> {
    let name = Name::from_str(&fqdn(host)).map_err(|e| ResolveError::QueryBuild {
        host: host.to_string(),
        reason: e.to_string(),
    })?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).map_err(|e| ResolveError::QueryBuild {
        host: host.to_string(),
        reason: e.to_string(),
    })?;

    Ok(buf)
}

/// Perform exactly one query/response exchange for `host` over `transport`.
///
/// Returns the addresses of the A answers in response order; the list is
/// empty when the response carries no A records, which is not an error.
pub fn exchange(transport: &mut dyn DnsTransport, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
    let query_bytes = build_query(host)?;

    transport
        .send(&query_bytes)
        .map_err(|e| ResolveError::QueryWrite {
            host: host.to_string(),
            source: e,
        })?;

    let response_bytes = transport.recv().map_err(|e| ResolveError::QueryRead {
        host: host.to_string(),
        source: e,
    })?;

    let response =
        Message::from_vec(&response_bytes).map_err(|e| ResolveError::MalformedResponse {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

    let mut addrs = Vec::new();
    for record in response.answers() {
        if let RData::A(a) = record.data() {
            addrs.push(IpAddr::V4(a.0));
        }
    }

    debug!(
        host,
        answers = response.answers().len(),
        addresses = addrs.len(),
        "DNS response parsed"
    );

    Ok(addrs)
}

/// Fully-qualified form of a hostname: a trailing dot is appended when
/// absent.
fn fqdn(host: &str) -> String {
    if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{host}.")
    }
}
