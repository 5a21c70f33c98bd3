//! Parse server flags from the command line, then fill the rest from the
//! environment.
//!
//! ```text
//! SERVE_LISTEN=0.0.0.0:80 cargo run -p flagenv --example serve -- --workers 8
//! ```

use std::io::{self, Write};

use flagenv::{FlagEnvError, FlagSet, is_display_request};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut flags = FlagSet::new("serve");
    flags
        .string("listen", "127.0.0.1:8080", "address to bind")?
        .uint("workers", 4, "worker threads")?
        .bool("tls", false, "serve over TLS")?
        .string("log.level", "info", "log verbosity")?;

    if let Err(err) = flags.parse_from(std::env::args_os()) {
        if is_display_request(&err)
            && let FlagEnvError::CliParsing(clap_err) = &err
        {
            clap_err.exit();
        }
        return Err(err.into());
    }

    flagenv::set_prefix("serve_");
    flagenv::set_uppercase(true);
    flagenv::register_names("log.level", ["", "RUST_LOG"]);
    let report = flagenv::parse(&mut flags);

    let mut out = io::stdout().lock();
    for flag in flags.visit_all() {
        let origin = if flags.is_explicit(flag.name()) {
            "command line".to_owned()
        } else if let Some(variable) = report.variable_for(flag.name()) {
            format!("${variable}")
        } else {
            "default".to_owned()
        };
        writeln!(out, "{} = {} ({origin})", flag.name(), flag.value_string())?;
    }
    Ok(())
}
