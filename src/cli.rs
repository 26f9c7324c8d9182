// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::{
    config::options::{AppOptions, ExportFormat, FailurePolicy, ReportKind},
    core::HttpFetcher,
    csv::to_export_string,
    model::{GameOutcome, LeaguesData},
    progress::Progress,
    reports, scrape, specs, store,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "League schedule and box score scraper")]
pub struct Cli {
    /// Store file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Site root to discover leagues from
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Hour of game day by which results are expected
    #[arg(long, global = true, value_name = "HOUR", value_parser = clap::value_parser!(u32).range(0..24))]
    pub check_hours: Option<u32>,

    /// Record per-game failures during update and carry on
    #[arg(long, global = true)]
    pub keep_going: bool,

    /// Echo log records to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List leagues found in the site navigation
    Leagues,
    /// Build the store from scratch and save it
    Build,
    /// Fetch results for games that are due and save
    Update,
    /// Summarize the store
    Show,
    /// List logged sessions
    Log,
    /// Print or export a report
    Report {
        /// schedule | standings | batting
        #[arg(value_parser = parse_kind)]
        kind: ReportKind,

        /// League indexes as listed by `show` (default: all)
        #[arg(short, long = "league", value_name = "N")]
        leagues: Vec<usize>,

        /// Tab-separated instead of comma-separated
        #[arg(long)]
        tsv: bool,

        /// Omit the header row
        #[arg(long)]
        no_headers: bool,

        /// Write to a file or directory (ending in '/') instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn parse_kind(s: &str) -> std::result::Result<ReportKind, String> {
    ReportKind::from_slug(s).ok_or_else(|| {
        let known: Vec<&str> = ReportKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown report '{}' (expected one of: {})", s, known.join(", "))
    })
}

impl Cli {
    /// Defaults overridden by flags.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(p) = &self.store {
            opts.store.path = p.clone();
        }
        if let Some(url) = &self.base_url {
            opts.scrape.base_url = url.clone();
        }
        if let Some(h) = self.check_hours {
            opts.scrape.check_hours = h;
        }
        if self.keep_going {
            opts.scrape.failure_policy = FailurePolicy::Continue;
        }
        opts.log.echo = self.verbose;
        opts
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.options();

    if let Err(e) = crate::log::init(&opts.log) {
        eprintln!("Warning: session log disabled ({e})");
    }
    logf!("CLI: {:?}", cli.command);

    let res = dispatch(&cli.command, &opts);
    if let Err(e) = &res {
        loge!("CLI: {:#}", e);
    }
    crate::log::finish();
    res
}

fn dispatch(command: &Command, opts: &AppOptions) -> Result<()> {
    match command {
        Command::Leagues => {
            let fetcher = HttpFetcher::new(&opts.scrape)?;
            let index = specs::leagues::locate(&fetcher, &opts.scrape.base_url)?;
            for link in &index.leagues {
                println!("{}\t{}", link.label, link.url);
            }
            eprintln!("{} leagues (as of {})", index.leagues.len(), index.discovered_at.format("%Y-%m-%d %H:%M"));
        }

        Command::Build => {
            let fetcher = HttpFetcher::new(&opts.scrape)?;
            let mut progress = CliProgress::default();
            let data = scrape::build_store(&fetcher, &opts.scrape, Some(&mut progress))?;
            store::save(&opts.store.path, &data)?;
            println!(
                "Built {} leagues, {} games → {}",
                data.league_schedules.len(),
                data.game_count(),
                opts.store.path.display()
            );
        }

        Command::Update => {
            let mut data = load_store(opts)?;
            let fetcher = HttpFetcher::new(&opts.scrape)?;
            let mut progress = CliProgress { checkpoint: Some(opts.store.path.clone()), ..CliProgress::default() };
            let now = Local::now().naive_local();
            let report = scrape::update_store(&mut data, &fetcher, &opts.scrape, now, Some(&mut progress))?;

            if report.updated > 0 {
                store::save(&opts.store.path, &data)?;
            }
            for f in &report.failures {
                eprintln!("FAILED {}: {}", f.game, f.error);
            }
            if report.is_current() {
                println!("Store is current ({} games not due yet)", report.not_due);
            } else {
                println!(
                    "Updated {} games, {} not due, {} failed",
                    report.updated,
                    report.not_due,
                    report.failures.len()
                );
            }
        }

        Command::Show => {
            let data = load_store(opts)?;
            print_summary(&data, opts.scrape.check_hours);
        }

        Command::Log => {
            let index = crate::log::read_index(&opts.log);
            for line in session_lines(&index) {
                println!("{line}");
            }
            eprintln!("{} sessions in {}", index.sessions.len(), opts.log.index_file().display());
        }

        Command::Report { kind, leagues, tsv, no_headers, out } => {
            let data = load_store(opts)?;
            let ds = reports::build_report(*kind, &data, leagues);

            let mut export = opts.export.clone();
            export.format = if *tsv { ExportFormat::Tsv } else { ExportFormat::Csv };
            export.include_headers = !*no_headers;

            match out {
                Some(path) => {
                    export.out_path = Some(path.clone());
                    let stem = if leagues.is_empty() { s!("all") } else { selection_stem(&data, leagues) };
                    let written = crate::file::write_export(&export, *kind, &stem, &ds)?;
                    println!("Wrote {} rows → {}", ds.rows.len(), written.display());
                }
                None => {
                    print!("{}", to_export_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim()));
                }
            }
        }
    }
    Ok(())
}

fn load_store(opts: &AppOptions) -> Result<LeaguesData> {
    store::load_if_exists(&opts.store.path)?
        .ok_or_else(|| eyre!("no store at {} (run `build` first)", opts.store.path.display()))
}

fn selection_stem(data: &LeaguesData, leagues: &[usize]) -> String {
    let labels: Vec<String> = leagues
        .iter()
        .filter_map(|&i| data.league_schedules.get(i))
        .map(|l| l.league_description.label())
        .collect();
    crate::core::sanitize::sanitize_filename(&labels.join(" "))
}

fn print_summary(data: &LeaguesData, check_hours: u32) {
    println!("Built {}", data.build_date.format("%Y-%m-%d %H:%M"));
    for (i, league) in data.league_schedules.iter().enumerate() {
        let (mut recorded, mut canceled, mut pending, mut due) = (0, 0, 0, 0);
        for g in &league.scheduled_games {
            match g.outcome() {
                GameOutcome::Recorded { .. } => recorded += 1,
                GameOutcome::Canceled => canceled += 1,
                GameOutcome::Scheduled => {
                    pending += 1;
                    if scrape::is_recorded(g, Some(check_hours)) {
                        due += 1;
                    }
                }
            }
        }
        println!(
            "[{i}] {}: {} games ({} recorded, {} canceled, {} pending, {} due)",
            league.league_description.label(),
            league.scheduled_games.len(),
            recorded,
            canceled,
            pending,
            due
        );
    }
}

/// One line per session, oldest first: id, start, end (or "open"), entries.
fn session_lines(index: &crate::log::SessionIndex) -> Vec<String> {
    index
        .sessions
        .iter()
        .map(|s| {
            let finished = s
                .finished
                .map(|f| f.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| s!("open"));
            format!("{}\t{}\t{}\t{}", s.id, s.started.format("%Y-%m-%d %H:%M:%S"), finished, s.entries)
        })
        .collect()
}

/// Status on stderr; saves the store after every changed game when `checkpoint` is set.
#[derive(Default)]
struct CliProgress {
    total: usize,
    checkpoint: Option<PathBuf>,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn game_updated(&mut self, data: &LeaguesData) {
        if let Some(path) = &self.checkpoint {
            if let Err(e) = store::save(path, data) {
                loge!("Store: Checkpoint failed: {}", e);
            }
        }
    }

    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Done ({} items)", self.total);
        }
    }
}
