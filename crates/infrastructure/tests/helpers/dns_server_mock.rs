use dnslookup_infrastructure::dns::wire::decode_message;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

use super::ResponseBuilder;

#[derive(Debug, Clone, Copy)]
pub enum ServerBehavior {
    /// Answer every query with one A record.
    Answer,
    /// Ignore the first `n` datagrams, answer the rest.
    DropFirst(usize),
    /// Never answer.
    Silent,
    /// Answer every query, sending the first reply twice.
    DuplicateFirst,
}

/// Loopback UDP server recording every datagram it receives.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: ServerBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let datagram = buf[..len].to_vec();
                            let seen = {
                                let mut log = log.lock().unwrap();
                                log.push(datagram.clone());
                                log.len()
                            };

                            let copies = match behavior {
                                ServerBehavior::Answer => 1,
                                ServerBehavior::DropFirst(n) => usize::from(seen > n),
                                ServerBehavior::Silent => 0,
                                ServerBehavior::DuplicateFirst if seen == 1 => 2,
                                ServerBehavior::DuplicateFirst => 1,
                            };
                            if copies > 0 {
                                if let Some(response) = Self::build_mock_response(&datagram) {
                                    for _ in 0..copies {
                                        let _ = socket.send_to(&response, peer).await;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }

    fn build_mock_response(query: &[u8]) -> Option<Vec<u8>> {
        let message = decode_message(query).ok()?;
        let name = message.question()?.qname.clone();
        let response = ResponseBuilder::reply_to(&message)
            .authoritative()
            .answer(dnslookup_domain::ResourceRecord::address(
                name,
                60,
                "93.184.216.34".parse().unwrap(),
            ))
            .build();
        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
