use dnslookup_domain::RecordType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup {
        host: String,
        record_type: RecordType,
    },
    Trace(bool),
    Server(String),
    Dump,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid call. Format:\n\tlookup hostName [type]")]
    LookupUsage,

    #[error("Invalid query type. Must be one of:\n\tA, AAAA, NS, MX, CNAME")]
    InvalidType,

    #[error("Invalid call. Format:\n\ttrace on|off")]
    TraceUsage,

    #[error("Invalid call. Format:\n\tserver IP")]
    ServerUsage,

    #[error(
        "Invalid command. Valid commands are:\n\tlookup fqdn [type]\n\ttrace on|off\n\tserver IP\n\tdump\n\tquit"
    )]
    Unknown,
}

/// Parses one input line. `Ok(None)` for blank lines and pure comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let args: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, rest)) = args.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "dump" => Command::Dump,
        "lookup" | "l" => match rest {
            [host] => Command::Lookup {
                host: host.to_string(),
                record_type: RecordType::A,
            },
            [host, record_type] => Command::Lookup {
                host: host.to_string(),
                record_type: record_type
                    .parse()
                    .map_err(|_| CommandError::InvalidType)?,
            },
            _ => return Err(CommandError::LookupUsage),
        },
        "trace" => match rest {
            [setting] if setting.eq_ignore_ascii_case("on") => Command::Trace(true),
            [setting] if setting.eq_ignore_ascii_case("off") => Command::Trace(false),
            _ => return Err(CommandError::TraceUsage),
        },
        "server" => match rest {
            [server] => Command::Server(server.to_string()),
            _ => return Err(CommandError::ServerUsage),
        },
        _ => return Err(CommandError::Unknown),
    };

    Ok(Some(command))
}
