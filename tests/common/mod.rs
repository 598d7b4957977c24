//! Shared helpers for integration tests: a scripted UDP DNS server and a
//! minimal HTTP/1 client.

#![allow(dead_code)]

use bytes::Bytes;
use hickory_resolver::proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_resolver::proto::rr::{rdata::A, RData, Record};
use hickory_resolver::proto::serialize::binary::BinEncodable;
use http::{header, Method, Request, StatusCode};
use http_body_util::{BodyExt, Empty};
use hyper_util::rt::TokioIo;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::{TcpStream, UdpSocket};
use tokio::task::JoinHandle;

/// How the mock server answers every query.
#[derive(Debug, Clone)]
pub enum Reply {
    /// NOERROR with these A records, in this order, with a zero TTL.
    Addresses(Vec<Ipv4Addr>),
    /// NXDOMAIN.
    NxDomain,
    /// NOERROR with an empty answer section.
    Empty,
    /// SERVFAIL.
    ServFail,
    /// REFUSED.
    Refused,
    /// Never answer.
    Silent,
}

pub struct MockDns {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl MockDns {
    pub async fn start(reply: Reply) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let task = tokio::spawn(async move {
            let mut buf = [0u8; 4096];
            loop {
                let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let Ok(request) = Message::from_vec(&buf[..len]) else {
                    continue;
                };
                if let Some(bytes) = answer(&request, &reply) {
                    let _ = socket.send_to(&bytes, peer).await;
                }
            }
        });

        Self {
            addr,
            queries,
            task,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of datagrams received so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDns {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn answer(request: &Message, reply: &Reply) -> Option<Vec<u8>> {
    if matches!(reply, Reply::Silent) {
        return None;
    }

    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);
    response.add_queries(request.queries().to_vec());

    match reply {
        Reply::Addresses(ips) => {
            let name = request.queries().first()?.name().clone();
            for ip in ips {
                response.add_answer(Record::from_rdata(name.clone(), 0, RData::A(A(*ip))));
            }
        }
        Reply::NxDomain => {
            response.set_response_code(ResponseCode::NXDomain);
        }
        Reply::ServFail => {
            response.set_response_code(ResponseCode::ServFail);
        }
        Reply::Refused => {
            response.set_response_code(ResponseCode::Refused);
        }
        Reply::Empty | Reply::Silent => {}
    }

    response.to_bytes().ok()
}

/// Issue one request over a fresh HTTP/1 connection and decode the JSON body.
pub async fn request(
    addr: SocketAddr,
    method: Method,
    path: &str,
) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let stream = TcpStream::connect(addr).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(conn);

    let req = Request::builder()
        .method(method)
        .uri(path)
        .header(header::HOST, addr.to_string())
        .body(Empty::<Bytes>::new())
        .unwrap();
    let resp = sender.send_request(req).await.unwrap();

    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(addr: SocketAddr, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = request(addr, Method::GET, path).await;
    (status, body)
}
