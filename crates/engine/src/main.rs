//! tuxlevel - level inspection and creation tool.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuxlevel_engine::infrastructure::config::LevelSettings;
use tuxlevel_engine::use_cases::level::LevelSummary;
use tuxlevel_engine::App;

const USAGE: &str = "Usage: tuxlevel <command>

Commands:
  probe <path>...                 print the name of each level
  load <path> [--editable]        print a JSON summary of a level
  new <basedir>                   pick a file name for a new level
  new-worldmap <basedir> <name>   pick a file name for a new worldmap

Paths are relative to TUXLEVEL_USER_DIR and TUXLEVEL_DATA_DIR.";

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tuxlevel_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = LevelSettings::from_env().context("loading configuration")?;
    tracing::debug!(roots = ?settings.search_roots(), "Search roots configured");
    let app = App::new(&settings);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("probe") => probe(&app, args.collect()),
        Some("load") => load(&app, args.collect()),
        Some("new") => new_level(&app, args.collect()),
        Some("new-worldmap") => new_worldmap(&app, args.collect()),
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

fn probe(app: &App, paths: Vec<String>) -> anyhow::Result<()> {
    if paths.is_empty() {
        anyhow::bail!("probe needs at least one path\n\n{USAGE}");
    }
    for path in &paths {
        let name = app.use_cases.level.probe.execute(path);
        println!("{path}\t{name}");
    }
    Ok(())
}

fn load(app: &App, args: Vec<String>) -> anyhow::Result<()> {
    let editable = args.iter().any(|a| a == "--editable");
    let paths: Vec<&String> = args.iter().filter(|a| a.as_str() != "--editable").collect();
    let [path] = paths.as_slice() else {
        anyhow::bail!("load takes exactly one path\n\n{USAGE}");
    };

    let level = app.use_cases.level.load.from_file(path, editable)?;
    let summary = LevelSummary::from(&level);
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing level summary")?
    );
    Ok(())
}

fn new_level(app: &App, args: Vec<String>) -> anyhow::Result<()> {
    let [basedir] = args.as_slice() else {
        anyhow::bail!("new takes exactly one directory\n\n{USAGE}");
    };
    let level = app.use_cases.level.create.level(basedir);
    println!("{}\t{}", level.filename(), level.name());
    Ok(())
}

fn new_worldmap(app: &App, args: Vec<String>) -> anyhow::Result<()> {
    let [basedir, name] = args.as_slice() else {
        anyhow::bail!("new-worldmap takes a directory and a name\n\n{USAGE}");
    };
    let level = app.use_cases.level.create.worldmap(basedir, name);
    println!("{}\t{}", level.filename(), level.name());
    Ok(())
}
