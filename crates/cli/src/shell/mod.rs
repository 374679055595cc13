//! Interactive command loop.

mod command;
mod render;

pub use command::{parse_command, Command, CommandError};
pub use render::{render_results, render_trace};

use crate::bootstrap::resolve_server_address;
use crate::di::LookupServices;
use dnslookup_application::ports::{ResolutionOutcome, TraceEvent};
use dnslookup_application::use_cases::{DumpCacheUseCase, LookupUseCase};
use dnslookup_domain::RecordType;
use dnslookup_infrastructure::dns::TraceEventEmitter;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

pub const PROMPT: &str = "DNSLOOKUP> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    lookup: Arc<LookupUseCase>,
    dump_cache: Arc<DumpCacheUseCase>,
    trace: TraceEventEmitter,
    trace_events: mpsc::UnboundedReceiver<TraceEvent>,
}

impl Shell {
    pub fn new(services: LookupServices) -> Self {
        Self {
            lookup: services.lookup,
            dump_cache: services.dump_cache,
            trace: services.trace,
            trace_events: services.trace_events,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R, O, E>(&mut self, input: R, out: &mut O, err: &mut E) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle_line(&line, out, err).await? == Flow::Quit {
                break;
            }
        }

        writeln!(out, "Goodbye!")?;
        out.flush()
    }

    pub async fn handle_line<O, E>(&mut self, line: &str, out: &mut O, err: &mut E) -> io::Result<Flow>
    where
        O: Write,
        E: Write,
    {
        match parse_command(line) {
            Ok(None) => Ok(Flow::Continue),
            Ok(Some(command)) => self.execute(command, out, err).await,
            Err(e) => {
                writeln!(err, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn execute<O, E>(&mut self, command: Command, out: &mut O, err: &mut E) -> io::Result<Flow>
    where
        O: Write,
        E: Write,
    {
        debug!(command = ?command, "Executing shell command");

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Lookup { host, record_type } => {
                self.run_lookup(&host, record_type, out, err).await?;
            }
            Command::Trace(on) => {
                self.trace.set_verbose(on);
                writeln!(
                    out,
                    "Verbose tracing is now: {}",
                    if on { "ON" } else { "OFF" }
                )?;
            }
            Command::Server(name) => match resolve_server_address(&name).await {
                Ok(address) => {
                    self.lookup.change_root_server(address);
                    writeln!(out, "Root DNS server is now: {}", address)?;
                }
                Err(e) => writeln!(err, "{:#}", e)?,
            },
            Command::Dump => {
                for entry in self.dump_cache.execute() {
                    write!(out, "{}", render_results(&entry.key, &entry.records))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    async fn run_lookup<O, E>(
        &mut self,
        host: &str,
        record_type: RecordType,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        let resolution = match self.lookup.execute(host, record_type).await {
            Ok(resolution) => resolution,
            Err(e) => {
                writeln!(err, "{}", e)?;
                return Ok(());
            }
        };

        self.flush_trace(out)?;

        if resolution.outcome == ResolutionOutcome::IndirectionLimitExceeded {
            writeln!(err, "Maximum number of indirection levels reached.")?;
        }

        write!(out, "{}", render_results(&resolution.key, &resolution.records))
    }

    /// Prints the trace events of the last lookup, in emission order.
    fn flush_trace<O: Write>(&mut self, out: &mut O) -> io::Result<()> {
        while let Ok(event) = self.trace_events.try_recv() {
            write!(out, "{}", render_trace(&event))?;
        }
        Ok(())
    }
}
