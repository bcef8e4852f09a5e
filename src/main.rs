use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use datamuse::config::config::{Config, DisplayConfig};
use datamuse::utils::app_paths::AppPaths;
use datamuse::utils::logging::init_tracing;
use datamuse::{build_url, validate, ApiClient, Endpoint, HttpTransport, Param, Query};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

mod table_display;

use table_display::{export_to_csv, render_table};

#[derive(Parser, Debug)]
#[command(
    name = "datamuse",
    about = "Find words with the Datamuse API",
    version,
    after_help = "Examples:\n  datamuse ml=duck sp='b*' --max 10\n  datamuse -e sug s=rel\n  datamuse rel_rhy=grape --md dp"
)]
struct Cli {
    /// Query parameters as NAME=VALUE, sent in the order given
    #[arg(value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Endpoint to query: words or sug
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Maximum number of results
    #[arg(long)]
    max: Option<u32>,

    /// Metadata flags to request, e.g. "dpsrf"
    #[arg(long)]
    md: Option<String>,

    /// Print the response as pretty JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Export results to a CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<String>,

    /// Print the request URL without sending it
    #[arg(long)]
    url: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    generate_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_param(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing parameter name in \"{s}\"")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got \"{s}\"")),
    }
}

/// Command-line parameters first, then flag shorthands, then config defaults
/// for anything still unset.
fn build_query(cli: &Cli, config: &Config) -> Query {
    let mut query: Query = cli.params.iter().cloned().collect();

    if let Some(max) = cli.max {
        query.insert(Param::Max.as_str(), max);
    }
    if let Some(md) = &cli.md {
        query.insert(Param::Metadata.as_str(), md);
    }

    if !query.contains(Param::Max.as_str()) {
        if let Some(max) = config.defaults.max {
            query.insert(Param::Max.as_str(), max);
        }
    }
    if !query.contains(Param::Metadata.as_str()) {
        if let Some(md) = &config.defaults.metadata {
            query.insert(Param::Metadata.as_str(), md);
        }
    }
    query
}

fn resolve_endpoint(cli: &Cli, config: &Config) -> String {
    cli.endpoint
        .clone()
        .unwrap_or_else(|| config.defaults.endpoint.clone())
}

fn generate_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_config_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating config directory {}", parent.display()))?;
    }
    std::fs::write(&path, Config::create_default_with_comments())
        .with_context(|| format!("Error writing config file {}", path.display()))?;
    println!("Configuration file created at: {}", path.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Entries of a response body. Both endpoints answer with a JSON array.
fn response_entries(response: &Value) -> Result<Vec<Value>> {
    match response.as_array() {
        Some(entries) => Ok(entries.clone()),
        None => bail!(
            "Unexpected response shape: expected a JSON array, got {}",
            json_kind(response)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn error_line(e: &anyhow::Error, color: bool) -> String {
    let line = format!("Error: {:#}", e);
    if color {
        line.red().to_string()
    } else {
        line
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let log_dir = if config.logging.file {
        Some(AppPaths::log_dir()?)
    } else {
        None
    };
    if let Some(log_path) = init_tracing(cli.verbose, log_dir.as_deref())? {
        eprintln!("Logs are written to {}", log_path.display());
    }

    let endpoint = resolve_endpoint(&cli, &config);
    let query = build_query(&cli, &config);

    if cli.url {
        let endpoint: Endpoint = validate(&endpoint, &query)?;
        println!("{}", build_url(endpoint, &query));
        return Ok(());
    }

    let transport =
        HttpTransport::with_options(config.http.timeout(), config.http.user_agent.as_deref())?;
    let client = ApiClient::with_transport(transport);
    let response = client
        .request(&endpoint, &query)
        .with_context(|| format!("Datamuse {} query failed", endpoint))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let entries = response_entries(&response)?;

    if let Some(filename) = &cli.csv {
        export_to_csv(&entries, &config.display, filename)
            .with_context(|| format!("Failed to export results to {}", filename))?;
        println!("{} results exported to {}", entries.len(), filename);
        return Ok(());
    }

    let color = config.display.color;
    if entries.is_empty() {
        let message = "No results found.";
        if color {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
        return Ok(());
    }

    println!("{}", render_table(&entries, &config.display));
    let summary = format!("{} results", entries.len());
    if color {
        println!("\n{}", summary.green());
    } else {
        println!("\n{}", summary);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Until a config is loaded, errors use the default display style
    let mut color = DisplayConfig::default().color;
    let result = if cli.generate_config {
        generate_config(cli.config.clone())
    } else {
        load_config(&cli).and_then(|config| {
            color = config.display.color;
            run(cli, config)
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e, color));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["datamuse"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("sp=b*").unwrap(),
            ("sp".to_string(), "b*".to_string())
        );
        assert_eq!(
            parse_param("topics=a=b").unwrap(),
            ("topics".to_string(), "a=b".to_string())
        );
        assert!(parse_param("duck").is_err());
        assert!(parse_param("=duck").is_err());
    }

    #[test]
    fn test_params_keep_command_line_order() {
        let cli = cli(&["ml=duck", "sp=b*", "--max", "10"]);
        let query = build_query(&cli, &Config::default());
        let url = build_url(Endpoint::Words, &query);
        assert_eq!(url, "https://api.datamuse.com/words?ml=duck&sp=b%2A&max=10");
    }

    #[test]
    fn test_config_defaults_fill_unset_params() {
        let mut config = Config::default();
        config.defaults.max = Some(5);
        config.defaults.metadata = Some("dp".to_string());

        let query = build_query(&cli(&["ml=duck", "max=3"]), &config);
        assert_eq!(query.get("max"), Some("3"));
        assert_eq!(query.get("md"), Some("dp"));
    }

    #[test]
    fn test_endpoint_falls_back_to_config() {
        let mut config = Config::default();
        config.defaults.endpoint = "sug".to_string();
        assert_eq!(resolve_endpoint(&cli(&["s=rel"]), &config), "sug");
        assert_eq!(resolve_endpoint(&cli(&["-e", "words"]), &config), "words");
    }

    #[test]
    fn test_json_and_csv_conflict() {
        let argv = vec!["datamuse", "ml=duck", "--json", "--csv", "out.csv"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_non_array_response_is_an_error() {
        let entries = response_entries(&serde_json::json!([{"word": "duck"}])).unwrap();
        assert_eq!(entries.len(), 1);

        let err = response_entries(&serde_json::json!({"word": "duck"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: expected a JSON array, got an object"
        );
        assert!(response_entries(&serde_json::json!(null)).is_err());
    }

    #[test]
    fn test_error_line_follows_color_setting() {
        let err = anyhow::anyhow!("connection refused").context("Datamuse words query failed");

        let plain = error_line(&err, false);
        assert_eq!(
            plain,
            "Error: Datamuse words query failed: connection refused"
        );
        assert!(!plain.contains('\x1b'));

        let colored = error_line(&err, true);
        assert!(colored.contains("connection refused"));
        // crossterm drops the escape codes when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\x1b'));
        }
    }
}
