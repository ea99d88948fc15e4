use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// What the mock server sends back for each received query.
#[derive(Clone)]
pub enum MockBehavior {
    /// Answer with these A records, in order. With `interleave_txt` a TXT
    /// record is inserted after the first A record.
    Answers {
        addrs: Vec<Ipv4Addr>,
        interleave_txt: bool,
    },
    /// Well-formed response with an empty answer section.
    Empty,
    /// Bytes that do not parse as a DNS message.
    Garbage,
    /// Never reply.
    Silent,
}

/// Minimal UDP DNS server answering on an ephemeral localhost port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(behavior: MockBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0))?;
        // Short read timeout so the serving thread notices shutdown.
        socket.set_read_timeout(Some(Duration::from_millis(25)))?;
        let addr = socket.local_addr()?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_shutdown = Arc::clone(&shutdown);

        let handle = std::thread::spawn(move || {
            let mut buf = vec![0u8; 512];
            while !thread_shutdown.load(Ordering::SeqCst) {
                match socket.recv_from(&mut buf) {
                    Ok((len, peer)) => {
                        if let Some(response) = build_response(&buf[..len], &behavior) {
                            let _ = socket.send_to(&response, peer);
                        }
                    }
                    Err(_) => continue,
                }
            }
        });

        Ok(Self {
            addr,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn build_response(query: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
    match behavior {
        MockBehavior::Silent => None,
        MockBehavior::Garbage => Some(vec![0xde, 0xad, 0xbe]),
        MockBehavior::Empty => Some(wire_response(query, &[], false)),
        MockBehavior::Answers {
            addrs,
            interleave_txt,
        } => Some(wire_response(query, addrs, *interleave_txt)),
    }
}

/// Build a raw wire-format response echoing the query's question section.
/// Answer names use a compression pointer to the question name (offset 12).
fn wire_response(query: &[u8], addrs: &[Ipv4Addr], interleave_txt: bool) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let ancount = addrs.len() as u16 + u16::from(interleave_txt);

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]); // ID
    response.push(0x81); // QR=1, RD=1
    response.push(0x80); // RA=1, RCODE=0
    response.extend_from_slice(&query[4..6]); // QDCOUNT
    response.extend_from_slice(&ancount.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
    response.extend_from_slice(&[0x00, 0x00]); // ARCOUNT
    response.extend_from_slice(&query[12..]); // question section

    let mut remaining = addrs.iter();
    if let Some(first) = remaining.next() {
        push_a_record(&mut response, *first);
    }
    if interleave_txt {
        push_txt_record(&mut response);
    }
    for addr in remaining {
        push_a_record(&mut response, *addr);
    }

    response
}

fn push_a_record(response: &mut Vec<u8>, addr: Ipv4Addr) {
    response.extend_from_slice(&[
        0xc0, 0x0c, // name: pointer to question
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
        0x00, 0x04, // RDLENGTH
    ]);
    response.extend_from_slice(&addr.octets());
}

fn push_txt_record(response: &mut Vec<u8>) {
    let text = b"ignored";
    response.extend_from_slice(&[
        0xc0, 0x0c, // name: pointer to question
        0x00, 0x10, // TYPE TXT
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
    ]);
    response.extend_from_slice(&((text.len() as u16) + 1).to_be_bytes());
    response.push(text.len() as u8);
    response.extend_from_slice(text);
}
