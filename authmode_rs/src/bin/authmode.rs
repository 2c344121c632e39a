use std::any::Any;
use std::panic;
use std::process::ExitCode;

use clap::Parser;

use authmode::cli::{Cli, run};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_broken_pipe_handler();

    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the per-file report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                cli.log_level
                    .parse::<tracing_subscriber::EnvFilter>()
                    .unwrap_or_else(|e| {
                        eprintln!("[authmode][warn] Invalid log level {}: {}", cli.log_level, e);
                        tracing_subscriber::EnvFilter::default()
                    })
            }),
        )
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[authmode] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
