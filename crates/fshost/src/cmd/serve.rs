use std::io;

use fshost_dispatch::{Host, HostConfig, LocalFileStore, Shutdown};

use crate::cmd::ServeArgs;
use crate::exit::{host_error, ExitResult, SUCCESS};

pub fn run(args: ServeArgs) -> ExitResult<i32> {
    if !args.caller.is_empty() || args.parent_window.is_some() {
        tracing::debug!(
            caller = ?args.caller,
            parent_window = ?args.parent_window,
            "launched by browser"
        );
    }

    let config = HostConfig {
        max_message_size: args.max_message_size,
        max_response_size: args.max_response_size,
    };
    let mut host = Host::with_config(
        io::stdin().lock(),
        io::stdout().lock(),
        LocalFileStore,
        config,
    );

    match host.run() {
        Ok(Shutdown::EndOfStream) => Ok(SUCCESS),
        Err(err) => Err(host_error("host stopped", &err)),
    }
}
