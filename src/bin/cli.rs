use clap::{Parser, Subcommand, ValueEnum};
use duckview::{catalog, executor, render, templates};
use duckview::{Database, DuckViewError, InteractiveRepl, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duckview", version, about = "Read-only DuckDB workbench")]
struct Cli {
    /// DuckDB database file to open read-only
    #[arg(long, env = "DUCKVIEW_DB", default_value = "madang.db", global = true)]
    db: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the tables in the database
    Tables,
    /// Show the first rows of a table
    Preview {
        table: String,
        #[arg(long, default_value_t = catalog::DEFAULT_PREVIEW_ROWS)]
        limit: usize,
    },
    /// Run a single query and print the result
    Query {
        /// SQL text; omit to use --template or pipe SQL on stdin
        sql: Option<String>,
        /// Run a shipped template query (1-based)
        #[arg(long, conflicts_with = "sql")]
        template: Option<usize>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Startup failure is fatal: report once, show nothing else.
    let db = match Database::open_read_only(&cli.db) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", render::error_line(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, db) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render::error_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, db: Database) -> Result<()> {
    match &cli.command {
        Some(Command::Tables) => {
            for name in catalog::list_tables(&db)? {
                println!("{name}");
            }
            Ok(())
        }
        Some(Command::Preview { table, limit }) => {
            let result = catalog::preview_table(&db, table, *limit)?;
            println!("{}", render::render_table(&result));
            println!("{}", render::row_caption(&result));
            Ok(())
        }
        Some(Command::Query {
            sql,
            template,
            format,
        }) => {
            let sql = resolve_sql(sql.as_deref(), *template)?;
            let result = executor::execute(&db, &sql)?;
            match format {
                OutputFormat::Table => {
                    println!("{}", render::render_table(&result));
                    println!("{}", render::row_caption(&result));
                    if let Some(chart) = render::chart_for_templates(&result) {
                        println!();
                        print!("{chart}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(())
        }
        None if atty::is(atty::Stream::Stdin) => InteractiveRepl::new(db)?.run(),
        None => {
            let result = executor::execute(&db, &read_stdin()?)?;
            println!("{}", render::render_table(&result));
            println!("{}", render::row_caption(&result));
            Ok(())
        }
    }
}

fn resolve_sql(sql: Option<&str>, template: Option<usize>) -> Result<String> {
    if let Some(number) = template {
        return templates::template(number)
            .map(|t| t.sql.to_string())
            .ok_or(DuckViewError::TemplateNotFound(number));
    }
    match sql {
        Some(text) => Ok(text.to_string()),
        None if !atty::is(atty::Stream::Stdin) => read_stdin(),
        None => Err(DuckViewError::Usage(
            "no SQL given; pass a query, --template <n>, or pipe SQL on stdin".to_string(),
        )),
    }
}

fn read_stdin() -> Result<String> {
    let mut sql = String::new();
    std::io::stdin().read_to_string(&mut sql)?;
    Ok(sql)
}
