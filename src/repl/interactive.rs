use super::commands::ReplCommand;
use crate::catalog;
use crate::connection::Database;
use crate::error::Result;
use crate::executor;
use crate::render;
use crate::templates;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;

const PROMPT: &str = "duckview> ";
const CONTINUE_PROMPT: &str = "     ...> ";
const HISTORY_FILE: &str = ".duckview_history";

/// The interactive workbench: one blocking engine call per user action.
/// Query failures print inline and the loop keeps going; only terminal and
/// history machinery errors abort it.
pub struct InteractiveRepl {
    db: Database,
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InteractiveRepl {
    pub fn new(db: Database) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
        if let Some(path) = &history_path {
            // Missing history is normal on first run.
            let _ = editor.load_history(path);
        }
        Ok(Self {
            db,
            editor,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let line = match self.editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(trimmed);

            if trimmed.starts_with('\\') {
                match ReplCommand::parse(trimmed) {
                    Ok(ReplCommand::Quit) => break,
                    Ok(command) => self.dispatch(command),
                    Err(message) => println!("{}", render::error_line(&message)),
                }
            } else if let Some(sql) = self.read_statement(line)? {
                self.run_sql(&sql);
            }
        }

        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(error = %e, "failed to save history");
            }
        }
        Ok(())
    }

    fn print_banner(&self) {
        println!("{}", "duckview: read-only DuckDB workbench".bold());
        println!("database file: {}", self.db.path().display());
        match catalog::list_tables(&self.db) {
            // Nothing to browse; stay quiet.
            Ok(tables) if tables.is_empty() => {}
            Ok(tables) => {
                println!("{} tables loaded: {}", tables.len(), tables.join(", "));
            }
            Err(e) => println!("{}", render::error_line(&e.to_string())),
        }
        println!("enter SQL terminated by ';', or \\help for commands");
        println!();
    }

    /// Collect continuation lines until the statement ends with `;`. An
    /// empty line submits the buffer as-is; Ctrl-C abandons it.
    fn read_statement(&mut self, first: String) -> Result<Option<String>> {
        let mut buffer = first.trim_end().to_string();
        while !buffer.ends_with(';') {
            let line = match self.editor.readline(CONTINUE_PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => return Ok(None),
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }
            buffer.push('\n');
            buffer.push_str(line.trim_end());
        }
        Ok(Some(buffer))
    }

    fn dispatch(&mut self, command: ReplCommand) {
        match command {
            ReplCommand::Tables => match catalog::list_tables(&self.db) {
                Ok(tables) if tables.is_empty() => {}
                Ok(tables) => {
                    for name in tables {
                        println!("{name}");
                    }
                }
                Err(e) => println!("{}", render::error_line(&e.to_string())),
            },
            ReplCommand::Preview { table, limit } => {
                match catalog::preview_table(&self.db, &table, limit) {
                    Ok(result) => {
                        println!("{}", render::render_table(&result));
                        println!(
                            "first {} rows of {} ({})",
                            limit,
                            table,
                            render::row_caption(&result)
                        );
                    }
                    Err(e) => println!("{}", render::error_line(&e.to_string())),
                }
            }
            ReplCommand::Template(number) => match templates::template(number) {
                Some(template) => {
                    println!("{}", template.sql.trim());
                    self.run_sql(template.sql);
                }
                None => println!(
                    "{}",
                    render::error_line(&format!(
                        "no template {number}; {} are available",
                        templates::TEMPLATES.len()
                    ))
                ),
            },
            ReplCommand::Help => print_help(),
            // Handled by the loop.
            ReplCommand::Quit => {}
        }
    }

    fn run_sql(&mut self, sql: &str) {
        match executor::execute(&self.db, sql) {
            Ok(result) => {
                println!("{}", render::success_line("query complete"));
                println!("{}", render::render_table(&result));
                println!("{}", render::row_caption(&result));
                if let Some(chart) = render::chart_for_templates(&result) {
                    println!();
                    print!("{chart}");
                }
            }
            Err(e) => println!("{}", render::error_line(&e.to_string())),
        }
    }
}

fn print_help() {
    println!("\\tables, \\t              list tables");
    println!("\\preview, \\p <t> [n]     first rows of a table (default {})", catalog::DEFAULT_PREVIEW_ROWS);
    println!("\\template <n>            run a shipped template query");
    println!("\\help, \\?                this help");
    println!("\\quit, \\q                leave the workbench");
    println!();
    println!("templates:");
    for (i, template) in templates::TEMPLATES.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, template.name, template.description);
    }
}
