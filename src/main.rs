use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use textbench::config::Config;
use textbench::dataset;
use textbench::keywords::tagger::KeywordTagger;
use textbench::llm::openai::OpenAiClient;
use textbench::llm::rate_limiter::RateLimiter;
use textbench::output::terminal;
use textbench::pipeline;
use textbench::rouge::scorer::{OverlapScorer, RougeScorer, RougeType};

/// textbench: keyword tagging and summary evaluation for news datasets.
///
/// Sends article text to a chat-completion model for keywords and categories,
/// or scores generated summaries against references with ROUGE.
#[derive(Parser)]
#[command(name = "textbench", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keywords and categories for each article and score tag matches
    Keywords {
        /// CSV with `descr` and `tags` columns
        #[arg(long, default_value = "BBCNews.csv")]
        input: PathBuf,

        /// Only process the first N rows (default: TEXTBENCH_KEYWORD_ROWS or 100)
        #[arg(long)]
        limit: Option<usize>,

        /// Where to write the enriched CSV
        #[arg(long, default_value = "Enhanced_BBCNews.csv")]
        output: PathBuf,

        /// Skip writing the enriched CSV
        #[arg(long)]
        no_export: bool,

        /// Rows to show in the results table (default: 20)
        #[arg(long, default_value = "20")]
        preview: usize,
    },

    /// Score generated summaries against reference summaries with ROUGE
    Rouge {
        /// CSV with `text` and `article_summaries` columns
        #[arg(long, default_value = "Generated_Summaries.csv")]
        input: PathBuf,

        /// Only process the first N rows (default: TEXTBENCH_ROUGE_ROWS or 1000)
        #[arg(long)]
        limit: Option<usize>,

        /// ROUGE variant(s) to compute: rouge1, rouge2, rougeL (repeatable)
        #[arg(long = "metric", default_value = "rouge1")]
        metrics: Vec<RougeType>,

        /// Also write the scored table to this CSV
        #[arg(long)]
        output: Option<PathBuf>,

        /// Rows to show in the preview table (default: 20)
        #[arg(long, default_value = "20")]
        preview: usize,
    },

    /// Print the cleaned form of a piece of text
    Clean {
        /// The text to clean
        text: String,
    },

    /// Show the effective configuration (API key redacted)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textbench=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keywords {
            input,
            limit,
            output,
            no_export,
            preview,
        } => {
            let config = Config::load()?;
            config.require_api_key()?;

            let cap = limit.unwrap_or(config.keyword_rows);
            let mut data = dataset::load_csv(
                &input,
                &pipeline::keywords::REQUIRED_COLUMNS,
                cap,
            )?;

            println!(
                "Processing {} articles from {}...",
                data.height(),
                input.display()
            );

            let limiter = RateLimiter::with_interval(config.request_interval);
            let client = OpenAiClient::new(config.api_key.clone(), &config.api_base_url, limiter)?;
            info!(model = %config.model, base_url = %config.api_base_url, "Using chat-completion API");
            let tagger = KeywordTagger::new(Box::new(client), config.model.clone());

            let run = pipeline::keywords::run(&mut data, &tagger, true).await?;

            println!("\n{}", "Keyword extraction complete.".bold());
            terminal::display_keyword_results(&data, preview)?;
            terminal::display_keyword_summary(&run);
            terminal::display_distribution(
                "Tag Match Score Distribution",
                &data.score_column(pipeline::keywords::SCORE_COLUMN)?,
                0.2,
            );

            if !no_export {
                data.write_csv(&output)?;
                println!(
                    "\n{}",
                    format!("Enriched CSV saved to: {}", output.display()).bold()
                );
            }
        }

        Commands::Rouge {
            input,
            limit,
            mut metrics,
            output,
            preview,
        } => {
            let config = Config::load()?;

            // Repeating a metric would append the same column twice
            let mut seen = Vec::new();
            metrics.retain(|m| {
                let fresh = !seen.contains(m);
                seen.push(*m);
                fresh
            });

            let cap = limit.unwrap_or(config.rouge_rows);
            let mut data = dataset::load_csv(
                &input,
                &pipeline::overlap::REQUIRED_COLUMNS,
                cap,
            )?;

            println!(
                "Scoring {} summaries from {}...",
                data.height(),
                input.display()
            );

            let scorers: Vec<RougeScorer> = metrics.iter().copied().map(RougeScorer::new).collect();
            let scorer_refs: Vec<&dyn OverlapScorer> =
                scorers.iter().map(|s| s as &dyn OverlapScorer).collect();

            let run = pipeline::overlap::run(&mut data, &scorer_refs, true)?;

            terminal::display_overlap_results(&data, &run, preview)?;
            for summary in &run.summaries {
                terminal::display_distribution(
                    &format!("{} F1 Score Distribution", summary.column),
                    &data.score_column(&summary.column)?,
                    0.1,
                );
            }

            if let Some(path) = output {
                data.write_csv(&path)?;
                println!(
                    "\n{}",
                    format!("Scored CSV saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Clean { text } => {
            println!("{}", textbench::text::clean_text(&text));
        }

        Commands::Config => {
            let config = Config::load()?;
            println!("API key:          {}", config.redacted_api_key());
            println!("API base URL:     {}", config.api_base_url);
            println!("Model:            {}", config.model);
            println!(
                "Request interval: {} ms",
                config.request_interval.as_millis()
            );
            println!("Keyword row cap:  {}", config.keyword_rows);
            println!("ROUGE row cap:    {}", config.rouge_rows);
        }
    }

    Ok(())
}
