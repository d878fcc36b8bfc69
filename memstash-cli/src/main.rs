//! CLI entry point for memstash

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use memstash_client::{Mem0Client, MemoryRecord, MemoryStore};
use memstash_core::config::{Config, ConfigLoader};
use memstash_core::logging::init_logging;
use std::path::PathBuf;
use tracing::info;

const DEMO_TITLE: &str = "Mijn eerste memory";
const DEMO_CONTENT: &str = "Dit is een voorbeeld van data opslaan in Mem0 via Python.";

#[derive(Parser)]
#[command(name = "memstash")]
#[command(about = "Store and list memories on the hosted Mem0 service")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration directory
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the storage demo: create one memory, then list all memories
    Demo {
        /// Title for the demo record
        #[arg(short, long, default_value = DEMO_TITLE)]
        title: String,
        /// Content for the demo record
        #[arg(short, long, default_value = DEMO_CONTENT)]
        content: String,
    },
    /// Create a single memory record
    Create {
        /// Record title
        #[arg(short, long)]
        title: String,
        /// Record content
        #[arg(short, long)]
        content: String,
    },
    /// List all memory records on the account
    List,
    /// Show status information
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up MEM0_API_KEY from a local .env before the loader reads the
    // environment.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Create config loader
    let config_loader = if let Some(dir) = cli.config_dir {
        ConfigLoader::with_dir(dir)
    } else {
        ConfigLoader::new()
    };

    let config = config_loader.load()?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Demo { title, content } => {
            info!("Running storage demo");
            let client = build_client(&config);
            run_demo(&client, &title, &content).await?;
        }
        Commands::Create { title, content } => {
            info!("Creating memory record");
            let client = build_client(&config);
            let record = client.create_memory(&title, &content).await?;
            println!("Created memory: {}", format_record(&record));
        }
        Commands::List => {
            info!("Listing memory records");
            let client = build_client(&config);
            let memories = client.list_memories().await?;
            print_memories(&memories);
        }
        Commands::Status => {
            info!("Showing status");
            run_status(&config_loader, &config)?;
        }
    }

    Ok(())
}

fn build_client(config: &Config) -> Mem0Client {
    Mem0Client::new(
        config.mem0.api_key.clone(),
        Some(config.mem0.api_base.clone()),
    )
}

fn format_record(record: &MemoryRecord) -> String {
    format!(
        "ID: {}, Title: {}, Content: {}",
        record.id, record.title, record.content
    )
}

fn print_memories(memories: &[MemoryRecord]) {
    println!("{}", style("Memories:").bold().cyan());
    for memory in memories {
        println!("{}", format_record(memory));
    }
}

/// Run the storage demo against the configured account
async fn run_demo(store: &dyn MemoryStore, title: &str, content: &str) -> Result<()> {
    let record = store.create_memory(title, content).await?;
    println!("Created memory: {}", format_record(&record));

    let memories = store.list_memories().await?;
    print_memories(&memories);

    Ok(())
}

/// Show configuration status without echoing the credential
fn run_status(loader: &ConfigLoader, config: &Config) -> Result<()> {
    println!("{}", style("Memstash Status").bold().cyan());
    println!("Version: 0.1.0 (Rust)\n");

    println!("{}", style("Configuration:").bold());
    println!("  Config directory: {}", loader.config_dir().display());
    println!("  API base: {}", config.mem0.api_base);

    let credential = if config.mem0.api_key.is_empty() {
        style("not configured").red()
    } else {
        style("configured").green()
    };
    println!("  API key: {}", credential);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use memstash_client::{ClientError, ClientResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Test double that assigns ids the way the remote service would
    struct InMemoryStore {
        records: Mutex<Vec<MemoryRecord>>,
        list_calls: AtomicUsize,
        fail_create: bool,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                list_calls: AtomicUsize::new(0),
                fail_create: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_create: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl MemoryStore for InMemoryStore {
        async fn create_memory(&self, title: &str, content: &str) -> ClientResult<MemoryRecord> {
            if self.fail_create {
                return Err(ClientError::ApiError(
                    "HTTP 401 Unauthorized: Invalid API key".to_string(),
                ));
            }
            let mut records = self.records.lock().unwrap();
            let record = MemoryRecord {
                id: format!("mem-{}", records.len() + 1),
                title: title.to_string(),
                content: content.to_string(),
                created_at: None,
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn list_memories(&self) -> ClientResult<Vec<MemoryRecord>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn test_run_demo_creates_then_lists() {
        let store = InMemoryStore::new();

        run_demo(&store, DEMO_TITLE, DEMO_CONTENT).await.unwrap();

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].id.is_empty());
        assert_eq!(records[0].title, DEMO_TITLE);
        assert_eq!(records[0].content, DEMO_CONTENT);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_demo_stops_when_create_fails() {
        let store = InMemoryStore::failing();

        let err = run_demo(&store, "title", "content").await.unwrap_err();

        assert!(err.to_string().contains("401"));
        assert!(store.records.lock().unwrap().is_empty());
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_format_record_handles_arbitrary_text() {
        let record = MemoryRecord {
            id: "mem-1".to_string(),
            title: String::new(),
            content: "höhere Ebene 🚀".to_string(),
            created_at: None,
        };
        assert_eq!(
            format_record(&record),
            "ID: mem-1, Title: , Content: höhere Ebene 🚀"
        );
    }
}
