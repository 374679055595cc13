use super::context::{QueryBudget, Referral, ResolutionContext};
use super::referral::{select_referral, ReferralDecision};
use crate::dns::transport::QueryIdAllocator;
use crate::dns::wire::{decode_message, encode_query};
use arc_swap::ArcSwap;
use async_trait::async_trait;
use dnslookup_application::ports::{
    DnsResolver, DnsTransport, NoopTraceSink, RecordStore, Resolution, ResolutionOutcome,
    TraceEvent, TraceSink,
};
use dnslookup_domain::{DnsMessage, LookupKey, RecordType, ResolverConfig, ResourceRecord};
use futures::future::{BoxFuture, FutureExt};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// States of one resolution walk.
#[derive(Debug)]
enum Step {
    /// Follow cached CNAMEs for the current key, then look in the cache.
    ResolvingCname,
    /// Send one query for the current key to the current server.
    Querying,
    /// Re-query the same key at a glue address.
    FollowingGlue(IpAddr),
    /// Resolve a name server from the root before re-querying.
    FollowingNs(String),
    Done(ResolutionOutcome, Vec<ResourceRecord>),
    Failed(ResolutionOutcome),
}

/// Iterative resolver: starts at the root server and follows referrals and
/// CNAMEs itself, caching every record it decodes along the way.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    store: Arc<dyn RecordStore>,
    trace: Arc<dyn TraceSink>,
    query_ids: QueryIdAllocator,
    root_server: ArcSwap<IpAddr>,
    max_indirection_level: u32,
    max_query_rounds: u32,
}

impl IterativeResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        store: Arc<dyn RecordStore>,
        root_server: IpAddr,
        config: &ResolverConfig,
    ) -> Self {
        info!(
            root_server = %root_server,
            protocol = transport.protocol_name(),
            max_indirection_level = config.max_indirection_level,
            max_query_rounds = config.max_query_rounds,
            "Iterative resolver created"
        );

        Self {
            transport,
            store,
            trace: Arc::new(NoopTraceSink),
            query_ids: QueryIdAllocator::new(),
            root_server: ArcSwap::from_pointee(root_server),
            max_indirection_level: config.max_indirection_level,
            max_query_rounds: config.max_query_rounds,
        }
    }

    pub fn with_trace_sink(mut self, trace: Arc<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_query_ids(mut self, query_ids: QueryIdAllocator) -> Self {
        self.query_ids = query_ids;
        self
    }

    /// Resolves `key` from the current root server. Never fails; the outcome
    /// says why the record list is what it is.
    pub async fn resolve_with_outcome(&self, key: &LookupKey) -> Resolution {
        let root = self.root_server();
        let mut budget = QueryBudget::new(self.max_query_rounds);

        debug!(
            host = %key.host_name,
            record_type = %key.record_type,
            root_server = %root,
            "Starting iterative resolution"
        );

        let (outcome, records) = self.walk(key.clone(), root, &mut budget).await;

        debug!(
            host = %key.host_name,
            record_type = %key.record_type,
            outcome = outcome.as_str(),
            records = records.len(),
            rounds_left = budget.remaining(),
            "Iterative resolution finished"
        );

        Resolution::new(key.clone(), records, outcome)
    }

    fn walk<'a>(
        &'a self,
        key: LookupKey,
        root: IpAddr,
        budget: &'a mut QueryBudget,
    ) -> BoxFuture<'a, (ResolutionOutcome, Vec<ResourceRecord>)> {
        async move {
            let mut key = key;
            let mut level = 0u32;
            let mut ctx = ResolutionContext::new(root);
            let mut step = Step::ResolvingCname;

            loop {
                step = match step {
                    Step::ResolvingCname => match self.follow_cached_cnames(&key, level) {
                        Some((rewritten, new_level)) => {
                            key = rewritten;
                            level = new_level;
                            let cached = self.store.get(&key);
                            if cached.is_empty() {
                                Step::Querying
                            } else {
                                Step::Done(ResolutionOutcome::Answered, cached)
                            }
                        }
                        None => {
                            self.report_indirection_limit(&key);
                            Step::Failed(ResolutionOutcome::IndirectionLimitExceeded)
                        }
                    },

                    Step::Querying => {
                        if !budget.try_spend() {
                            warn!(
                                host = %key.host_name,
                                limit = self.max_query_rounds,
                                "Query round budget exhausted"
                            );
                            Step::Failed(ResolutionOutcome::QueryBudgetExhausted)
                        } else {
                            self.query_round(&key, &mut ctx).await;

                            let answer = self.store.get(&key);
                            if !answer.is_empty() {
                                Step::Done(ResolutionOutcome::Answered, answer)
                            } else if let Some(target) = self.answered_cname(&key) {
                                key = LookupKey::new(target, key.record_type);
                                level += 1;
                                Step::ResolvingCname
                            } else {
                                match ctx.take_referral() {
                                    Some(Referral::Address(address)) => {
                                        Step::FollowingGlue(address)
                                    }
                                    Some(Referral::NameServer(name)) => Step::FollowingNs(name),
                                    None => Step::Done(
                                        ResolutionOutcome::Exhausted,
                                        self.store.get(&key),
                                    ),
                                }
                            }
                        }
                    }

                    Step::FollowingGlue(address) => {
                        debug!(host = %key.host_name, server = %address, "Following glue");
                        ctx.current_server = address;
                        Step::ResolvingCname
                    }

                    Step::FollowingNs(name_server) => {
                        debug!(
                            host = %key.host_name,
                            name_server = %name_server,
                            "Resolving name server address"
                        );

                        let ns_key = LookupKey::new(name_server, RecordType::A);
                        let (ns_outcome, ns_records) =
                            self.walk(ns_key, ctx.root_server, &mut *budget).await;

                        match ns_outcome {
                            ResolutionOutcome::IndirectionLimitExceeded
                            | ResolutionOutcome::QueryBudgetExhausted => Step::Failed(ns_outcome),
                            _ => match ns_records.iter().find_map(|r| r.data.as_address()) {
                                Some(address) => {
                                    ctx.current_server = address;
                                    level = 0;
                                    Step::ResolvingCname
                                }
                                None => {
                                    Step::Done(ResolutionOutcome::Exhausted, self.store.get(&key))
                                }
                            },
                        }
                    }

                    Step::Done(outcome, records) => return (outcome, records),
                    Step::Failed(outcome) => return (outcome, Vec::new()),
                };

                if level > self.max_indirection_level {
                    self.report_indirection_limit(&key);
                    step = Step::Failed(ResolutionOutcome::IndirectionLimitExceeded);
                }
            }
        }
        .boxed()
    }

    /// Rewrites `key` along cached CNAMEs, one level per hop, whatever the
    /// record type. `None` once the level passes the limit.
    fn follow_cached_cnames(&self, key: &LookupKey, level: u32) -> Option<(LookupKey, u32)> {
        let mut key = key.clone();
        let mut level = level;

        while let Some(target) = self.cached_cname(&key) {
            level += 1;
            if level > self.max_indirection_level {
                return None;
            }
            debug!(from = %key.host_name, to = %target, level, "Following cached CNAME");
            key = LookupKey::new(target, key.record_type);
        }

        Some((key, level))
    }

    /// CNAME picked up by the last query round. A CNAME lookup is answered by
    /// the record itself, so it never chases.
    fn answered_cname(&self, key: &LookupKey) -> Option<String> {
        if key.record_type == RecordType::CNAME {
            return None;
        }
        self.cached_cname(key)
    }

    fn cached_cname(&self, key: &LookupKey) -> Option<String> {
        self.store
            .get(&key.with_type(RecordType::CNAME))
            .into_iter()
            .find_map(|record| record.data.as_name().map(str::to_string))
    }

    fn report_indirection_limit(&self, key: &LookupKey) {
        warn!(
            host = %key.host_name,
            limit = self.max_indirection_level,
            "Maximum number of indirection levels reached"
        );
        if self.trace.is_enabled() {
            self.trace.emit(TraceEvent::IndirectionLimitReached {
                host: Arc::clone(&key.host_name),
                limit: self.max_indirection_level,
            });
        }
    }

    /// One query round. Any failure ends the round with the context's
    /// referral cleared, which the caller sees as "nothing to follow".
    async fn query_round(&self, key: &LookupKey, ctx: &mut ResolutionContext) {
        ctx.pending_referral = None;

        let id = self.query_ids.next_id();
        let query = match encode_query(id, key.host_name(), key.record_type) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, host = %key.host_name, "Cannot encode query");
                return;
            }
        };

        let server = ctx.current_server;
        let trace = &self.trace;
        let host = Arc::clone(&key.host_name);
        let record_type = key.record_type;
        let on_attempt = move |attempt: u32| {
            if trace.is_enabled() {
                trace.emit(TraceEvent::QuerySent {
                    id,
                    host: Arc::clone(&host),
                    record_type,
                    server,
                    attempt,
                });
            }
        };

        let response = match self.transport.exchange(&query, server, &on_attempt).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.is_round_failure() {
                    debug!(error = %e, server = %server, "Query round failed");
                } else {
                    warn!(error = %e, server = %server, "Query round failed");
                }
                return;
            }
        };

        let message = match decode_message(&response) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, server = %server, "Discarding undecodable response");
                return;
            }
        };

        self.emit_response(&message);

        for record in message.records() {
            self.store.insert(record.clone());
        }

        match select_referral(&message, key.host_name()) {
            ReferralDecision::Authoritative => {
                ctx.reset_to_root();
            }
            ReferralDecision::Glue(address) => {
                ctx.pending_referral = Some(Referral::Address(address));
            }
            ReferralDecision::NameServer(name) => {
                ctx.pending_referral = Some(Referral::NameServer(name));
                ctx.reset_to_root();
            }
            ReferralDecision::None => {}
        }
    }

    fn emit_response(&self, message: &DnsMessage) {
        if !self.trace.is_enabled() {
            return;
        }
        self.trace.emit(TraceEvent::ResponseReceived {
            id: message.id(),
            authoritative: message.is_authoritative(),
            answers: message.answers.clone(),
            authority: message.authority.clone(),
            additional: message.additional.clone(),
        });
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, key: &LookupKey) -> Resolution {
        self.resolve_with_outcome(key).await
    }

    fn root_server(&self) -> IpAddr {
        **self.root_server.load()
    }

    fn set_root_server(&self, server: IpAddr) {
        debug!(root_server = %server, "Installing new root server");
        self.root_server.store(Arc::new(server));
    }
}
