use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::PathBuf;
use std::time::Duration;

use ifc_assistant::chat::{OllamaClient, Orchestrator};
use ifc_assistant::config::{ChatConfig, LogConfig, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use ifc_assistant::export::{export_csv, export_json};
use ifc_assistant::extract::extract_ifc_data;
use ifc_assistant::logging;
use ifc_assistant::query::{dispatch, QueryContext};
use ifc_assistant::ui::App;

#[derive(Parser, Debug)]
#[command(name = "ifc-assistant")]
#[command(about = "IFC Assistant - extract element tables from IFC files and query them")]
#[command(version)]
struct Args {
    /// Path to IFC file
    #[arg(required = true)]
    file: PathBuf,

    /// Write one CSV per table into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Write all tables as one JSON document
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Run a single query tool and print its JSON result
    #[arg(long, value_name = "NAME")]
    tool: Option<String>,

    /// Tool arguments as a JSON object
    #[arg(long, value_name = "JSON", requires = "tool", default_value = "{}")]
    args: String,

    /// Ask one question and print the answer
    #[arg(long, value_name = "QUESTION", conflicts_with = "tool")]
    ask: Option<String>,

    /// Base URL of the Ollama service
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_URL)]
    ollama_url: String,

    /// Chat model name
    #[arg(long, env = "IFC_ASSISTANT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Chat request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 120)]
    timeout: u64,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn is_batch(&self) -> bool {
        self.csv.is_some() || self.json.is_some() || self.tool.is_some() || self.ask.is_some()
    }

    fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            base_url: self.ollama_url.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            verbose: self.verbose,
            file: self.log_file.clone(),
            quiet_terminal: !self.is_batch(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(&args.log_config()).wrap_err("failed to open log file")?;

    let tables = extract_ifc_data(&args.file)?;
    let chat_config = args.chat_config();

    if let Some(dir) = &args.csv {
        let written = export_csv(&tables, dir)?;
        println!("Exported {} CSV files to {}", written.len(), dir.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&tables, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    let ctx = QueryContext::new(&tables);

    if let Some(tool) = &args.tool {
        let arguments: serde_json::Value =
            serde_json::from_str(&args.args).wrap_err("--args is not valid JSON")?;
        println!("{}", dispatch(&ctx, tool, &arguments));
    }

    if let Some(question) = &args.ask {
        let client = OllamaClient::new(&chat_config)?;
        let orchestrator = Orchestrator::new(Box::new(client), &chat_config.model, ctx);
        let answer = orchestrator.ask(question)?;
        println!("{}", answer.text);
    }

    if args.is_batch() {
        return Ok(());
    }

    let client = OllamaClient::new(&chat_config)?;
    let orchestrator = Orchestrator::new(Box::new(client), &chat_config.model, ctx);
    let terminal = ratatui::init();
    let result = App::new(&tables).with_orchestrator(orchestrator).run(terminal);
    ratatui::restore();
    result
}
