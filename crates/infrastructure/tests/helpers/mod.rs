#![allow(dead_code)]

mod dns_server_mock;
mod response_builder;
mod scripted_transport;

pub use dns_server_mock::{MockDnsServer, ServerBehavior};
pub use response_builder::ResponseBuilder;
pub use scripted_transport::{ScriptedTransport, SentQuery};
