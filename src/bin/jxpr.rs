use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jxpr", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one expression from the term library and print its grouped view as JSON.
    Expr(ExprArgs),
    /// List the term sets of a scene.
    Entries(EntriesArgs),
}

#[derive(Parser, Debug)]
struct ExprArgs {
    /// Term library TOML.
    #[arg(long)]
    lib: PathBuf,

    /// Style defaults TOML (built-in defaults when omitted).
    #[arg(long)]
    defaults: Option<PathBuf>,

    #[arg(long)]
    topic: String,

    #[arg(long)]
    scene: String,

    /// Term set index within the scene (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Verb entry key, e.g. `plus`.
    #[arg(long)]
    verb: Option<String>,

    /// Equals entry key, e.g. `rightarrow`.
    #[arg(long)]
    equals: Option<String>,

    /// Part order, comma separated. Parts not listed are dropped.
    #[arg(long, value_delimiter = ',')]
    order: Vec<String>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EntriesArgs {
    /// Term library TOML.
    #[arg(long)]
    lib: PathBuf,

    #[arg(long)]
    topic: String,

    #[arg(long)]
    scene: String,
}

#[derive(serde::Serialize)]
struct ExprDump<'a> {
    topic: &'a str,
    scene: &'a str,
    index: usize,
    parts: Vec<&'a str>,
    grouped: &'a jxpr::Node,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Expr(args) => cmd_expr(args),
        Command::Entries(args) => cmd_entries(args),
    }
}

fn read_library(path: &Path) -> anyhow::Result<jxpr::Library> {
    jxpr::Library::load(path).with_context(|| format!("load library '{}'", path.display()))
}

fn cmd_expr(args: ExprArgs) -> anyhow::Result<()> {
    let library = read_library(&args.lib)?;
    let defaults = match &args.defaults {
        Some(path) => jxpr::Defaults::load(path)
            .with_context(|| format!("load defaults '{}'", path.display()))?,
        None => jxpr::Defaults::default(),
    };
    let loader = jxpr::TermLoader::new(library, jxpr::NodeFactory::new(defaults));

    let mut sets = loader.default_terms(&args.topic, &args.scene)?;
    if args.index >= sets.len() {
        anyhow::bail!(
            "term set {} out of range: '{}.{}' has {}",
            args.index,
            args.topic,
            args.scene,
            sets.len()
        );
    }
    let term = sets.swap_remove(args.index);

    let mut view = loader.expression(term, args.verb.as_deref(), args.equals.as_deref())?;
    if !args.order.is_empty() {
        let order = args.order.iter().map(String::as_str).collect::<Vec<_>>();
        view.reorder(Some(order.as_slice()))?;
    }

    let dump = ExprDump {
        topic: &args.topic,
        scene: &args.scene,
        index: args.index,
        parts: view.parts().names().collect(),
        grouped: view.grouped_view(),
    };
    let json = serde_json::to_string_pretty(&dump).context("serialize grouped view")?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_entries(args: EntriesArgs) -> anyhow::Result<()> {
    let library = read_library(&args.lib)?;
    let sets = library.terms(&args.topic, &args.scene)?;
    for (i, set) in sets.iter().enumerate() {
        println!("{i}: {}", set.names().collect::<Vec<_>>().join(", "));
    }
    Ok(())
}
