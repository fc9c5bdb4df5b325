use clap::Parser;
use inquire::Text;
use slotbotti::components::google_calendar::CalendarHandle;
use slotbotti::components::ollama::OllamaClient;
use slotbotti::config::Config;
use slotbotti::error::Error;
use slotbotti::scheduler::{SchedulerSettings, SchedulingPipeline, SchedulingRequest};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Ask the local model for a free slot and put the task on the calendar
#[derive(Parser)]
#[command(name = "schedule", about = "Schedule a task in plain words")]
struct Args {
    /// Task description; prompts interactively when omitted
    #[arg(trailing_var_arg = true)]
    task: Vec<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    let args = Args::parse();
    let task = if args.task.is_empty() {
        Text::new("What do you want to schedule?")
            .prompt()
            .map_err(|e| Error::Other(format!("Failed to read task: {}", e)))?
    } else {
        args.task.join(" ")
    };

    let config = Config::load()?;
    let settings = SchedulerSettings::from_config(&config)?;
    let ollama_url = config.ollama_url.clone();
    let ollama_model = config.ollama_model.clone();
    let fallback_minutes = config.default_duration_minutes;
    let lookahead_days = config.lookahead_days;
    let config = Arc::new(RwLock::new(config));

    let calendar = CalendarHandle::new(Arc::clone(&config)).await?;
    let model = OllamaClient::new(&ollama_url, &ollama_model);
    let pipeline = SchedulingPipeline::new(Arc::new(calendar.clone()), Arc::new(model), settings);

    let request = SchedulingRequest {
        task,
        fallback_minutes,
        lookahead_days,
    };

    let outcome = pipeline.schedule(request).await;
    let _ = calendar.shutdown().await;

    match outcome {
        Ok(scheduled) => {
            println!("✅ Event created: {}", scheduled.summary);
            println!("   Start:  {}", scheduled.start);
            println!("   End:    {}", scheduled.end);
            println!("   Reason: {}", scheduled.reasoning.as_deref().unwrap_or("N/A"));
            println!("   Link:   {}", scheduled.html_link);
            Ok(())
        }
        Err(e) => {
            // Report the failure verbatim; no backtrace for an expected error
            eprintln!("⚠️ Couldn't schedule that: {}", e);
            std::process::exit(1);
        }
    }
}
