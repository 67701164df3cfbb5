// Interactive driver for Commander Core
//
// Reads one request per line from stdin and prints its response envelope.
// Lines starting with `{` are structured payloads, anything else is
// function-call text.

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use commander_core::{builtin_registry_with, CenterConfig, Registry, Response};

    #[derive(Parser, Debug)]
    #[command(name = "commander", about = "Call registered commands from stdin")]
    struct Args {
        /// JSON file selecting and aliasing builtin commands
        #[arg(short, long, env = "COMMANDER_CONFIG")]
        config: Option<PathBuf>,

        /// Treat every line as a structured `{"Name", "Args"}` payload
        #[arg(long)]
        json: bool,

        /// Pretty-print response envelopes
        #[arg(long)]
        pretty: bool,

        /// Print the registered command signatures and exit
        #[arg(long)]
        list: bool,
    }

    pub fn run() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();

        let args = Args::parse();

        let config = match &args.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                CenterConfig::from_json(&json)?
            }
            None => CenterConfig::default(),
        };
        let registry = builtin_registry_with(&config)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if args.list {
            for signature in registry.signatures() {
                writeln!(out, "{}", signature)?;
            }
            return Ok(());
        }

        info!(commands = registry.len(), "reading commands from stdin");

        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "exit" => break,
                _ => {}
            }

            let response = handle_line(&registry, line, args.json);
            let rendered = if args.pretty { response.to_json_pretty()? } else { response.to_json()? };
            writeln!(out, "{}", rendered)?;
            out.flush()?;
        }

        Ok(())
    }

    fn handle_line(registry: &Registry, line: &str, json_only: bool) -> Response {
        if json_only || line.starts_with('{') {
            registry.call_json(line)
        } else {
            registry.call_function_text(line)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    driver::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
