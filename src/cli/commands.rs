use std::cmp::Ordering;

use clap::ArgMatches;
use tracing::{error, info, warn};

use crate::activation;
use crate::core::config::WalkerConfig;
use crate::core::events;
use crate::enumeration::operations as enumeration_ops;
use crate::platform::dry_run::DryRunWindowApi;
use crate::platform::{self, ProcessResolver, SysinfoProcessResolver, WindowApi};
use crate::search::types::{CancelToken, SearchKind, SearchRequest, SearchResultItem};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = match WalkerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config_load_failed", error = %e);
            WalkerConfig::default()
        }
    };

    if matches.get_flag("dry-run") {
        info!(event = "cli.dry_run_enabled");
        let api = DryRunWindowApi::seeded();
        dispatch(matches, &api, &api, &config)
    } else {
        let api = platform::native_api();
        let resolver = SysinfoProcessResolver::refresh();
        dispatch(matches, api.as_ref(), &resolver, &config)
    }
}

fn dispatch(
    matches: &ArgMatches,
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches, api, processes, config),
        Some(("search", sub_matches)) => handle_search_command(sub_matches, api, processes, config),
        Some(("activate", sub_matches)) => {
            handle_activate_command(sub_matches, api, processes, config)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_list_command(
    matches: &ArgMatches,
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.list_started");

    let records = enumeration_ops::snapshot(api, processes, &config.host_process_name());

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No open windows found");
        return Ok(());
    }

    println!("Open windows ({}):", records.len());
    for record in &records {
        println!("   {}  [{}]", record, record.handle);
    }

    info!(event = "cli.list_completed", count = records.len());
    Ok(())
}

fn handle_search_command(
    matches: &ArgMatches,
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches.get_one::<String>("query").cloned();
    let tag = matches.get_one::<String>("tag").cloned();
    let limit = matches.get_one::<usize>("limit").copied();

    info!(
        event = "cli.search_started",
        query = query.as_deref().unwrap_or_default(),
        tag = tag.as_deref().unwrap_or_default()
    );

    let request = SearchRequest::new(query, tag, SearchKind::Text);
    let mut results = run_search(api, processes, config, &request);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching windows");
        return Ok(());
    }

    for item in &results {
        println!("   {:.2}  \"{}\" ({}, pid {})", item.score, item.title, item.process_name, item.pid);
    }

    info!(event = "cli.search_completed", count = results.len());
    Ok(())
}

fn handle_activate_command(
    matches: &ArgMatches,
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches.get_one::<String>("query").unwrap();

    info!(event = "cli.activate_started", query = query);

    let request = SearchRequest::text(query);
    let results = run_search(api, processes, config, &request);

    let Some(best) = results.into_iter().next() else {
        eprintln!("❌ No window matches \"{}\"", query);
        error!(event = "cli.activate_no_match", query = query);
        return Err(format!("No window matches '{}'", query).into());
    };

    // The CLI is the host here, so results go back through the host boundary.
    let outcome = activation::handler::handle_result(api, &best);
    if outcome.success {
        println!("✅ Activated \"{}\" ({})", best.title, best.process_name);
        info!(event = "cli.activate_completed", title = best.title);
        Ok(())
    } else {
        eprintln!("❌ Could not activate \"{}\"", best.title);
        let err: Box<dyn std::error::Error> =
            format!("Activation refused for '{}'", best.title).into();
        events::log_app_error(err.as_ref());
        Err(err)
    }
}

/// Run a search and sort by score, best first. The matcher yields candidates
/// in enumeration order; ranking for display is the host's job.
fn run_search(
    api: &dyn WindowApi,
    processes: &dyn ProcessResolver,
    config: &WalkerConfig,
    request: &SearchRequest,
) -> Vec<SearchResultItem> {
    let mut results: Vec<SearchResultItem> =
        crate::search::handler::search(api, processes, config, request, CancelToken::new())
            .collect();
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::dry_run::DryRunWindow;

    fn config_without_host_match() -> WalkerConfig {
        WalkerConfig::default()
    }

    #[test]
    fn test_run_search_sorts_by_score_descending() {
        let api = DryRunWindowApi::new();
        // Substring-only match scores 1.0, process-prefix match scores 1.25
        api.add_window(DryRunWindow::new(1, "Inbox - Mail", 100, "thunderbird"));
        api.add_window(DryRunWindow::new(2, "Messages", 200, "mail"));

        let config = config_without_host_match();
        let results = run_search(&api, &api, &config, &SearchRequest::text("mail"));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].process_name, "mail");
        assert_eq!(results[0].score, 1.25);
        assert_eq!(results[1].score, 1.0);
    }

    #[test]
    fn test_run_search_empty_for_foreign_tag() {
        let api = DryRunWindowApi::seeded();
        let config = config_without_host_match();
        let request = SearchRequest::text("mail").with_tag("files");
        assert!(run_search(&api, &api, &config, &request).is_empty());
    }
}
