use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// In-process resolver answering every A query with one fixed address.
pub struct MockResolver {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Vec<u8>>>>,
    task: JoinHandle<()>,
}

impl MockResolver {
    pub async fn start(answer: Ipv4Addr) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));
        let log = queries.clone();

        let task = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let query = &buf[..len];
                if len < 12 {
                    continue;
                }
                log.lock().unwrap().push(query.to_vec());
                let _ = socket.send_to(&reply(query, answer), peer).await;
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

    pub fn query_ids(&self) -> Vec<u16> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| u16::from_be_bytes([q[0], q[1]]))
            .collect()
    }

    pub fn recursion_flags(&self) -> Vec<bool> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q[2] & 0x01 == 0x01)
            .collect()
    }
}

impl Drop for MockResolver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn reply(query: &[u8], answer: Ipv4Addr) -> Vec<u8> {
    let mut response = Vec::with_capacity(query.len() + 16);
    response.extend_from_slice(&query[0..2]);
    response.push(0x80 | (query[2] & 0x01));
    response.push(0x80);
    response.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);
    response.extend_from_slice(&[
        0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2c, 0x00, 0x04,
    ]);
    response.extend_from_slice(&answer.octets());
    response
}

/// A loopback port with nothing bound to it.
pub async fn unused_port() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap()
}
