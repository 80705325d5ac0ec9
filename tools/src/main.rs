mod compose_file;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use libcompose_core::{
    keysyms, ComposeEngine, ComposeEvent, ComposeTable, Config, DefaultTableProvider, KeyEvent,
    ModifierType, TableProvider, MAX_COMPOSE_LEN,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Build, inspect and try out compose tables")]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an X11 Compose file into a sorted flat table
    Convert {
        /// Compose file to read
        input: PathBuf,

        /// Output table (bincode)
        #[arg(short, long)]
        out: PathBuf,

        /// Also write the table as JSON for inspection
        #[arg(long)]
        json: Option<PathBuf>,

        /// Longest sequence to keep (defaults to the longest one found)
        #[arg(long)]
        max_seq_len: Option<usize>,
    },

    /// Print the rows of a table file
    Inspect {
        table: PathBuf,

        /// Stop after this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Feed keys through an engine and print its notifications
    ///
    /// Keys are keysym names (`dead_acute`, `e`, `Multi_key`, `U20AC`),
    /// optionally prefixed with modifiers (`ctrl+shift+U`). `up:Control_L`
    /// sends a release.
    Type {
        /// Extra table files, consulted newest (last) first
        #[arg(long = "table")]
        tables: Vec<PathBuf>,

        /// Platform overlays to install (win32, quartz, repeated-dead-key)
        #[arg(long = "overlay")]
        overlays: Vec<String>,

        /// Configuration file; --table and --overlay add to it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not consult the built-in table
        #[arg(long)]
        no_builtin: bool,

        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Convert {
            input,
            out,
            json,
            max_seq_len,
        } => convert(input, out, json, max_seq_len),
        Command::Inspect { table, limit } => inspect(table, limit),
        Command::Type {
            tables,
            overlays,
            config,
            no_builtin,
            keys,
        } => type_keys(tables, overlays, config, no_builtin, &keys),
    }
}

fn convert(
    input: PathBuf,
    out: PathBuf,
    json: Option<PathBuf>,
    max_seq_len: Option<usize>,
) -> Result<()> {
    let (entries, stats) = compose_file::read_compose_file(&input)?;

    let longest = entries.iter().map(|e| e.keys.len()).max().unwrap_or(1);
    let max_seq_len = max_seq_len.unwrap_or(longest).clamp(1, MAX_COMPOSE_LEN);

    let (table, skipped) = ComposeTable::from_entries(
        entries.into_iter().map(|e| (e.keys, e.ch as u32)),
        max_seq_len,
    )
    .context("building table")?;

    table
        .save_bincode(&out)
        .with_context(|| format!("writing {}", out.display()))?;
    if let Some(json) = json {
        let text = serde_json::to_string_pretty(&table.to_table_file())?;
        std::fs::write(&json, text).with_context(|| format!("writing {}", json.display()))?;
    }

    println!(
        "{}: {} lines, {} rows written to {} (max_seq_len {})",
        input.display(),
        stats.lines,
        table.len(),
        out.display(),
        max_seq_len
    );
    println!(
        "skipped: {} too long or unencodable, {} multi-character, {} unknown keysyms, {} malformed",
        skipped, stats.multi_char, stats.unknown_keysyms, stats.malformed
    );
    Ok(())
}

fn inspect(path: PathBuf, limit: Option<usize>) -> Result<()> {
    let table =
        ComposeTable::load(&path).with_context(|| format!("loading {}", path.display()))?;
    println!(
        "{}: {} rows, max_seq_len {}",
        path.display(),
        table.len(),
        table.max_seq_len()
    );
    for (seq, value) in table.rows().take(limit.unwrap_or(usize::MAX)) {
        let shown = char::from_u32(value)
            .filter(|c| !c.is_control())
            .map(String::from)
            .unwrap_or_default();
        println!(
            "{:<40} U+{:04X} {}",
            keysyms::describe_sequence(&seq),
            value,
            shown
        );
    }
    Ok(())
}

fn type_keys(
    tables: Vec<PathBuf>,
    overlays: Vec<String>,
    config_path: Option<PathBuf>,
    no_builtin: bool,
    keys: &[String],
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load_toml(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    config.extra_tables.extend(tables);
    config.overlays.extend(overlays);
    if no_builtin {
        config.use_builtin_table = false;
    }

    let events = keys
        .iter()
        .map(|k| parse_key(k))
        .collect::<Result<Vec<_>>>()?;

    let store = DefaultTableProvider.resolve(&config)?;
    let mut engine = ComposeEngine::with_context(store, config);

    for (name, event) in keys.iter().zip(events) {
        let consumed = engine.filter_key_event(event);
        let notes: Vec<String> = engine
            .context_mut()
            .take_events()
            .iter()
            .map(describe_event)
            .collect();
        println!(
            "{:<20} {:<9} {}",
            name,
            if consumed { "consumed" } else { "passed" },
            notes.join(", ")
        );
    }

    println!("committed: {:?}", engine.context().commit_text);
    Ok(())
}

/// Parse `[up:][mod+...]keysym`.
fn parse_key(token: &str) -> Result<KeyEvent> {
    let (release, rest) = match token.strip_prefix("up:") {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let mut parts: Vec<&str> = rest.split('+').collect();
    // a bare "+" names the plus key
    let name = match parts.pop() {
        Some("") if rest.ends_with('+') => {
            parts.pop();
            "plus"
        }
        Some(name) => name,
        None => bail!("empty key"),
    };

    let mut state = ModifierType::empty();
    for m in parts {
        state |= match m.to_ascii_lowercase().as_str() {
            "shift" => ModifierType::SHIFT,
            "ctrl" | "control" => ModifierType::CONTROL,
            "alt" | "mod1" => ModifierType::MOD1,
            "super" => ModifierType::SUPER,
            "hyper" => ModifierType::HYPER,
            "meta" => ModifierType::META,
            other => bail!("unknown modifier '{}' in '{}'", other, token),
        };
    }

    let keyval =
        keysyms::keyval_from_name(name).with_context(|| format!("unknown keysym '{}'", name))?;
    let event = if release {
        KeyEvent::release(keyval)
    } else {
        KeyEvent::press(keyval)
    };
    Ok(event.with_state(state))
}

fn describe_event(event: &ComposeEvent) -> String {
    match event {
        ComposeEvent::PreeditStart => "preedit-start".to_string(),
        ComposeEvent::PreeditChanged { text, cursor } => {
            format!("preedit {:?} @{}", text, cursor)
        }
        ComposeEvent::PreeditEnd => "preedit-end".to_string(),
        ComposeEvent::Commit(text) => format!("commit {:?}", text),
        ComposeEvent::Bell => "bell".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_key() {
        let ev = parse_key("dead_acute").unwrap();
        assert_eq!(ev.keyval, keysyms::DEAD_ACUTE);
        assert!(ev.is_press());
        assert!(ev.state.is_empty());
    }

    #[test]
    fn test_parse_modified_key() {
        let ev = parse_key("ctrl+shift+U").unwrap();
        assert_eq!(ev.keyval, keysyms::U);
        assert_eq!(ev.state, ModifierType::CONTROL | ModifierType::SHIFT);
    }

    #[test]
    fn test_parse_release_and_plus() {
        let ev = parse_key("up:ctrl+Control_L").unwrap();
        assert!(!ev.is_press());
        assert_eq!(ev.keyval, keysyms::CONTROL_L);
        assert_eq!(parse_key("+").unwrap().keyval, 0x2b);
        assert_eq!(parse_key("shift++").unwrap().state, ModifierType::SHIFT);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key("bogus_key").is_err());
        assert!(parse_key("hyperspace+a").is_err());
    }
}
