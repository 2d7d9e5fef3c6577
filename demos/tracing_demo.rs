//! Demonstrates the tracing events emitted by accumulation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use accrue::prelude::*;

fn parse_port(raw: &str) -> Or<u16, Every<String>> {
    match raw.parse::<u16>() {
        Ok(port) => Or::Good(port),
        Err(e) => Or::Bad(every![format!("{:?} is not a port: {}", raw, e)]),
    }
}

fn not_privileged(port: &u16) -> Validation<String> {
    Validation::check(*port >= 1024, || format!("port {} is privileged", port))
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Parsing a clean port list");
    let ports: Or<Vec<u16>, _> = vec!["8080", "8443"].validated_by(parse_port);
    tracing::info!(?ports, "clean list");

    tracing::info!("Parsing a port list with problems");
    let ports: Or<Vec<u16>, _> = vec!["80", "http", "70000"].validated_by(|raw: &str| {
        parse_port(raw).when([not_privileged])
    });
    tracing::info!(?ports, "list with problems");
}
