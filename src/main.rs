use anyhow::{Context, Result};
use coverage_cluster::cluster::communicator::Communicator;
use coverage_cluster::cluster::types::RunConfig;
use coverage_cluster::corpus::reader::read_corpus;
use coverage_cluster::corpus::types::{Alphabet, Corpus};
use coverage_cluster::engine::report::write_report;
use coverage_cluster::engine::rounds::execute;
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;

fn usage(program: &str) {
    eprintln!("Usage (coordinator): {} --listen <addr:port> --world-size <n> [--max-len <l>] [--capacity <c>] [--input <path>]", program);
    eprintln!("Usage (worker):      {} --join <addr:port>", program);
    eprintln!("Example: {} --listen 127.0.0.1:7000 --world-size 2", program);
    eprintln!("Example: {} --join 127.0.0.1:7000", program);
}

fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str> {
    args.get(index + 1)
        .map(|value| value.as_str())
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        usage(&args[0]);
        std::process::exit(1);
    }

    let mut listen: Option<SocketAddr> = None;
    let mut join: Option<SocketAddr> = None;
    let mut world_size: usize = 1;
    let mut config = RunConfig::default();
    let mut input: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--listen" => {
                listen = Some(flag_value(&args, i, "--listen")?.parse()?);
                i += 2;
            }
            "--join" => {
                join = Some(flag_value(&args, i, "--join")?.parse()?);
                i += 2;
            }
            "--world-size" => {
                world_size = flag_value(&args, i, "--world-size")?.parse()?;
                i += 2;
            }
            "--max-len" => {
                config.max_len = flag_value(&args, i, "--max-len")?.parse()?;
                i += 2;
            }
            "--capacity" => {
                config.capacity = flag_value(&args, i, "--capacity")?.parse()?;
                i += 2;
            }
            "--input" => {
                input = Some(flag_value(&args, i, "--input")?.to_string());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    match (listen, join) {
        (Some(addr), None) => {
            config.validate()?;
            if world_size < 1 {
                anyhow::bail!("world size must be at least 1");
            }

            tracing::info!("reading the corpus from {} ...", input.as_deref().unwrap_or("standard input"));
            let ingested: (Alphabet, Corpus) = match &input {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("opening corpus file {}", path))?;
                    read_corpus(BufReader::new(file))?
                }
                None => read_corpus(std::io::stdin().lock())?,
            };
            tracing::info!(
                "corpus ingested: {} symbol(s), alphabet of {}",
                ingested.1.len(),
                ingested.0.len()
            );

            tracing::info!("starting coordinator on {} (world size {})", addr, world_size);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding coordinator listener on {}", addr))?;
            let mut comm = Communicator::coordinator(listener, world_size, config).await?;

            let results = execute(&mut comm, Some(ingested))
                .await?
                .ok_or_else(|| anyhow::anyhow!("coordinator produced no result set"))?;

            write_report(&mut std::io::stdout().lock(), &results)?;
            tracing::info!("final dictionary printed ({} entries)", results.len());
        }
        (None, Some(addr)) => {
            tracing::info!("joining the process group at {}", addr);
            let mut comm = Communicator::worker(addr).await?;
            tracing::info!("assigned rank {} of {}", comm.rank(), comm.world_size());

            execute(&mut comm, None).await?;
            tracing::info!("rank {} done", comm.rank());
        }
        _ => {
            usage(&args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}
