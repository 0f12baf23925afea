use std::io::IsTerminal;

use rosparse::cli;

fn main() -> anyhow::Result<()> {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            cli::print_usage();
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    cli::run(cli)
}
