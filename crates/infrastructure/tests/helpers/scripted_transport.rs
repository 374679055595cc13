use async_trait::async_trait;
use dnslookup_application::ports::{AttemptObserver, DnsTransport};
use dnslookup_domain::{DnsMessage, DomainError, RecordType};
use dnslookup_infrastructure::dns::wire::decode_message;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

use super::ResponseBuilder;

type Handler = Box<dyn Fn(&DnsMessage) -> Option<ResponseBuilder> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentQuery {
    pub server: IpAddr,
    pub host: String,
    pub record_type: RecordType,
}

/// In-process transport answering from per-server handlers.
///
/// A server without a handler, or a handler returning `None`, behaves like a
/// server that never answers.
#[derive(Default)]
pub struct ScriptedTransport {
    handlers: HashMap<IpAddr, Handler>,
    sent: Mutex<Vec<SentQuery>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server<F>(mut self, address: &str, handler: F) -> Self
    where
        F: Fn(&DnsMessage) -> Option<ResponseBuilder> + Send + Sync + 'static,
    {
        self.handlers
            .insert(address.parse().unwrap(), Box::new(handler));
        self
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn servers_asked(&self) -> Vec<IpAddr> {
        self.sent().into_iter().map(|q| q.server).collect()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn exchange(
        &self,
        query: &[u8],
        server: IpAddr,
        on_attempt: AttemptObserver<'_>,
    ) -> Result<Vec<u8>, DomainError> {
        on_attempt(1);

        let message = decode_message(query)?;
        let question = message
            .question()
            .cloned()
            .ok_or_else(|| DomainError::MalformedMessage("query without question".into()))?;

        self.sent.lock().unwrap().push(SentQuery {
            server,
            host: question.qname,
            record_type: question.qtype,
        });

        self.handlers
            .get(&server)
            .and_then(|handler| handler(&message))
            .map(|response| response.build())
            .ok_or(DomainError::QueryTimeout {
                server: server.to_string(),
            })
    }

    fn protocol_name(&self) -> &'static str {
        "scripted"
    }
}
