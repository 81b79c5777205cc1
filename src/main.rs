//! Hangul Typing Trainer - Korean/English typing drills in the terminal
//!
//! Judges every keystroke live; Korean syllables are matched jamo by jamo.
//! Speed and accuracy of each finished run are appended to a per-user
//! JSON history.

mod cli;
mod clock;
mod config;
mod content;
mod error;
mod hangul;
mod logging;
mod session;
mod stats;

use clap::Parser;
use cli::{format_overview, Display, InputAction, InputHandler, RedrawGate};
use clock::{Clock, SystemClock};
use config::{parse_user_id, ConfigError, TrainerConfig};
use content::{ContentProvider, CorpusProvider, Language, PracticeType};
use error::TrainerResult;
use session::{SessionState, SessionSummary};
use stats::{JsonStatsStore, StatsOverview, StatsRecord, StatsStore};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "Hangul Typing Trainer")]
#[command(about = "Korean/English typing practice with jamo-level Hangul matching")]
struct Args {
    /// User id / nickname stats are recorded under
    #[arg(short, long)]
    user: String,

    /// Practice language
    #[arg(short, long, value_enum, default_value = "ko")]
    language: Language,

    /// Practice type
    #[arg(short, long, value_enum, default_value = "word")]
    practice: PracticeType,

    /// Number of consecutive runs
    #[arg(short, long, default_value = "1")]
    rounds: usize,

    /// Print the user's stats overview and exit
    #[arg(long)]
    stats: bool,

    /// Stats JSON file
    #[arg(long)]
    stats_path: Option<PathBuf>,

    /// Directory with <ko|en>/<type>.txt corpus overrides
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Log file
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Environment defaults with CLI flags layered on top
    fn config(&self) -> TrainerConfig {
        let mut config = TrainerConfig::from_env();
        if let Some(path) = &self.stats_path {
            config.stats_path = path.clone();
        }
        if let Some(dir) = &self.corpus_dir {
            config.corpus_dir = Some(dir.clone());
        }
        if let Some(path) = &self.log_path {
            config.log_path = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}

/// Drive one run to completion. `None` if the user quit early.
fn run_session(
    display: &Display,
    input: &InputHandler,
    session: &mut SessionState,
    clock: &impl Clock,
    header: impl Fn(&Display) -> std::io::Result<()>,
) -> TrainerResult<Option<SessionSummary>> {
    let mut buffer = String::new();
    let mut redraw = RedrawGate::new();

    loop {
        if redraw.take() {
            display.clear()?;
            header(display)?;
            display.show_content(session)?;
            display.show_input(session)?;
            display.show_progress(session)?;
            display.show_help()?;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        redraw.mark();

        match InputHandler::classify(&key) {
            InputAction::Exit => {
                info!(cursor = session.cursor(), "Session abandoned");
                return Ok(None);
            }
            // Editing the buffer is not a judged keystroke
            InputAction::Backspace => {
                buffer.pop();
                session.edit_input(&buffer);
            }
            InputAction::Char(c) => {
                buffer.push(c);
                let submission = session.submit_input(&buffer, clock)?;
                if let Some(summary) = submission.summary {
                    display.clear()?;
                    header(display)?;
                    display.show_content(session)?;
                    display.show_input(session)?;
                    display.show_summary(&summary, session.mistakes())?;
                    input.wait_any_key()?;
                    return Ok(Some(summary));
                }
            }
            InputAction::Ignore => {}
        }
    }
}

fn main() -> TrainerResult<()> {
    let args = Args::parse();
    let config = args.config();

    logging::init(&config.log_path, &config.log_level)?;

    let user = parse_user_id(&args.user)?;
    if args.rounds == 0 {
        return Err(ConfigError::NoRounds.into());
    }

    let store = JsonStatsStore::new(&config.stats_path);

    if args.stats {
        let records = store.read_all(&user)?;
        println!(
            "{}",
            format_overview(&user, StatsOverview::from_records(&records).as_ref())
        );
        return Ok(());
    }

    let provider = match &config.corpus_dir {
        Some(dir) => CorpusProvider::with_dir(dir),
        None => CorpusProvider::builtin(),
    };
    let clock = SystemClock::new();

    info!(
        %user,
        language = %args.language,
        practice = %args.practice,
        rounds = args.rounds,
        "Trainer starting"
    );

    // Fail on an empty corpus before touching the terminal; after this the
    // display's Drop restores the terminal on any early return
    let first = provider.select(args.practice, args.language)?;

    let mut display = Display::raw()?;
    let input = InputHandler::new();
    let mut completed = 0;
    let mut next_content = Some(first);

    for round in 1..=args.rounds {
        let content = match next_content.take() {
            Some(content) => content,
            None => provider.select(args.practice, args.language)?,
        };
        let mut session = SessionState::begin(content, args.language, &clock);

        let header = |d: &Display| {
            d.show_header(&user, args.language, args.practice, round, args.rounds)
        };
        let Some(summary) = run_session(&display, &input, &mut session, &clock, header)
            .inspect_err(|e| error!(error = %e, "Session failed"))?
        else {
            break;
        };

        store
            .append(&user, StatsRecord::from(&summary))
            .inspect_err(|e| error!(error = %e, "Failed to save stats"))?;
        completed += 1;
    }

    display.clear()?;
    display.shutdown()?;

    println!("Completed {} of {} runs.", completed, args.rounds);
    let records = store.read_all(&user)?;
    println!(
        "{}",
        format_overview(&user, StatsOverview::from_records(&records).as_ref())
    );

    Ok(())
}
