//! Subcommand dispatch for the CLI binary.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::annotation::{AnnotationStore, ManualAnnotation};
use crate::app::{profile_for_ip, spawn_ctrl_c_listener, AppState};
use crate::config::{AnnotateCommand, Cli, Command, Config};
use crate::lookup::discover_public_ip;
use crate::router::{parse_route, resolve_hostname, RouteCandidate, TargetSource};
use crate::server::{start_server, TargetResponse};

/// Runs the subcommand selected on the command line.
///
/// # Errors
///
/// Returns an error if startup fails, the lookup target cannot be
/// determined, or the annotation file cannot be read or written.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { bind } => serve_command(cli.config, bind).await,
        Command::Lookup { target } => {
            let state = AppState::from_config(cli.config)?;
            let response = lookup_target(&state, target.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::Annotate(command) => {
            let output = annotate(&cli.config.annotations, command)?;
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
    }
}

async fn serve_command(config: Config, bind: SocketAddr) -> Result<()> {
    let state = AppState::from_config(config)?;
    let cancel = CancellationToken::new();
    let listener = spawn_ctrl_c_listener(cancel.clone());

    let result = start_server(bind, state, cancel.clone()).await;
    cancel.cancel();
    let _ = listener.await;
    result
}

/// Profiles `target`, or this host's public address when `target` is `None`.
///
/// A hostname is resolved to its first IPv4 address. Anything that is
/// neither a literal nor a hostname is profiled as given, which yields the
/// zero seed for malformed input.
///
/// # Errors
///
/// Returns an error when a hostname has no IPv4 answer or no echo service
/// reports an address.
pub async fn lookup_target(state: &AppState, target: Option<&str>) -> Result<TargetResponse> {
    let (ip, source) = match target.map(str::trim) {
        None | Some("") => {
            let ip = discover_public_ip(&state.client, &state.config.ip_echo_services)
                .await
                .context("Could not discover this host's public address")?;
            (ip.to_string(), TargetSource::EchoService)
        }
        Some(target) => match parse_route(&format!("/ip/{}", target)) {
            RouteCandidate::Literal(ip) => (ip.to_string(), TargetSource::Path),
            RouteCandidate::Hostname(host) => {
                let ip = resolve_hostname(&state.resolver, &host)
                    .await
                    .ok_or_else(|| anyhow!("No IPv4 address found for {}", host))?;
                info!("Resolved {} to {}", host, ip);
                (ip.to_string(), TargetSource::Hostname)
            }
            _ => (target.to_string(), TargetSource::Path),
        },
    };

    let outcome = profile_for_ip(state, &ip).await;
    Ok(TargetResponse::new(ip, source, outcome))
}

/// Applies an `annotate` subcommand to the file at `path`.
///
/// Returns the text to print: nothing for edits, one address per line for
/// `list`, pretty JSON for `show`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, the address or
/// score is invalid, or the addressed entry does not exist.
pub fn annotate(path: &Path, command: AnnotateCommand) -> Result<String> {
    let mut store = AnnotationStore::load(path)
        .with_context(|| format!("Failed to load annotations from {}", path.display()))?;

    match command {
        AnnotateCommand::Add(args) => {
            let annotation = ManualAnnotation::from(&args);
            if annotation.is_empty() {
                bail!("Nothing to annotate for {}: pass at least one field", args.ip);
            }
            store.insert(&args.ip, annotation)?;
            store.save(path)?;
            info!("Annotated {}", args.ip.trim());
            Ok(String::new())
        }
        AnnotateCommand::Remove { ip } => {
            if store.remove(&ip).is_none() {
                bail!("No annotation for {}", ip);
            }
            store.save(path)?;
            info!("Removed annotation for {}", ip);
            Ok(String::new())
        }
        AnnotateCommand::List => Ok(store.ips().collect::<Vec<_>>().join("\n")),
        AnnotateCommand::Show { ip } => {
            let annotation = store
                .get(ip.trim())
                .ok_or_else(|| anyhow!("No annotation for {}", ip))?;
            Ok(serde_json::to_string_pretty(annotation)?)
        }
    }
}
