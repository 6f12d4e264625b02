use std::io::Write;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;

use http_latency_bench::config::Args;
use http_latency_bench::metrics::summary::summarize;
use http_latency_bench::server::TargetServer;
use http_latency_bench::target::HttpTarget;
use http_latency_bench::{report, sampler};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(msg) = args.validate() {
        eprintln!("{msg}");
        process::exit(2);
    }

    // Banner and progress go to stdout only in text mode, so that
    // `--json` output stays machine-parseable.
    let chatty = !args.json;

    if chatty {
        println!();
        println!("╔══════════════════════════════════════════════════╗");
        println!("║   ⏱   HTTP LATENCY MICRO-BENCHMARK               ║");
        println!("╚══════════════════════════════════════════════════╝");
        println!();
        println!(
            "Run started {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }

    // ── 1. Resolve the target ────────────────────────────────────
    // An explicit --url wins; otherwise stand up the built-in server.
    let (builtin, url) = match args.url.clone() {
        Some(url) => (None, url),
        None => {
            let srv = TargetServer::spawn(args.port).await.unwrap_or_else(|e| {
                eprintln!(
                    "Failed to bind the built-in server on port {}: {e}",
                    args.port
                );
                process::exit(2);
            });
            if chatty {
                println!("Target server listening on http://{}", srv.addr());
            }
            let url = srv.test_url();
            (Some(srv), url)
        }
    };

    if chatty {
        println!("Making {} requests!", args.requests);
    }

    // ── 2. Progress ticker ───────────────────────────────────────
    let completed = Arc::new(AtomicU64::new(0));
    let ticker = chatty.then(|| {
        let completed = completed.clone();
        let total = args.requests;
        tokio::spawn(async move {
            let mut ticks =
                IntervalStream::new(tokio::time::interval(Duration::from_secs(1)));
            ticks.next().await; // consume the immediate first tick
            while ticks.next().await.is_some() {
                let done = completed.load(Ordering::Relaxed);
                print!("\r  {done} / {total} requests");
                std::io::stdout().flush().ok();
            }
        })
    });

    // ── 3. Run the sequential sampler ────────────────────────────
    let target = HttpTarget::new(url);
    let samples = sampler::run(|| target.probe(), args.requests, completed).await;

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    if chatty {
        println!("\r  {0} / {0} requests", args.requests);
        println!();
    }
    drop(builtin);

    // ── 4. Summarize & report ────────────────────────────────────
    // requests >= 1 was validated up front, so samples is non-empty.
    let stats = summarize(&samples).expect("at least one sample was recorded");

    if args.json {
        println!("{}", report::render_json(&stats));
    } else {
        print!("{}", report::render_text(&stats));
    }
}
