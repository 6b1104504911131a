use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use weaponshop::build_info;
use weaponshop::core::constants::{LOG_FILE_NAME, UI_POLL_INTERVAL_MS};
use weaponshop::core::{Action, Engine, GameConfig, GameStore, SystemClock};
use weaponshop::persistence::{FileSaveSlot, SaveSlot};
use weaponshop::ui::{self, messages, App, Command};

type Store = GameStore<SystemClock, StdRng, FileSaveSlot>;

struct CliArgs {
    config: GameConfig,
    reset: bool,
}

fn print_usage() {
    println!("Weapon Shop - Terminal Idle Shopkeeping\n");
    println!("Usage: weaponshop [options]\n");
    println!("Options:");
    println!("  --max-offline-hours N  Cap on offline catch-up (default: 24)");
    println!("  --tick-ms N            Milliseconds between game ticks (default: 1000)");
    println!("  --save PATH            Use a specific save file");
    println!("  --reset                Delete the save and start over");
    println!("  --version              Show version information");
    println!("  --help                 Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut config = GameConfig::default();
    let mut reset = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-offline-hours" => {
                i += 1;
                config.max_offline_hours = args
                    .get(i)
                    .and_then(|v| v.parse().ok())
                    .expect("--max-offline-hours requires a number");
            }
            "--tick-ms" => {
                i += 1;
                config.tick_interval_ms = args
                    .get(i)
                    .and_then(|v| v.parse().ok())
                    .filter(|ms| *ms > 0)
                    .expect("--tick-ms requires a positive number");
            }
            "--save" => {
                i += 1;
                config.save_path = Some(PathBuf::from(
                    args.get(i).expect("--save requires a path"),
                ));
            }
            "--reset" => reset = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'weaponshop --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    CliArgs { config, reset }
}

/// Sends logs to a file beside the save so the alternate screen stays clean.
fn init_logging(slot: &FileSaveSlot) -> io::Result<()> {
    let log_path = slot.path().with_file_name(LOG_FILE_NAME);
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weaponshop=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn dispatch(store: &mut Store, app: &mut App, action: Action) {
    match store.dispatch(action) {
        Ok(events) => app.messages.record_events(&events, store.state()),
        Err(rejection) => app.messages.record_rejection(&rejection),
    }
    app.clamp(store.state());
}

fn run<B: Backend>(terminal: &mut Terminal<B>, store: &mut Store, app: &mut App) -> io::Result<()> {
    let tick_interval = Duration::from_millis(store.engine().config().tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        let now = store.now_ms();
        terminal.draw(|frame| {
            ui::draw_ui(frame, app, store.state(), store.welcome_back(), now);
        })?;

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let was_welcome = app.show_welcome;
                    match app.handle_key(key.code, store.state()) {
                        Command::Quit => return Ok(()),
                        Command::Dispatch(action) => dispatch(store, app, action),
                        Command::None => {}
                    }
                    if was_welcome && !app.show_welcome {
                        store.dismiss_welcome_back();
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            dispatch(store, app, Action::Tick);
            last_tick = Instant::now();
        }
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();

    let slot = match &args.config.save_path {
        Some(path) => FileSaveSlot::at(path.clone()),
        None => FileSaveSlot::new().map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    };
    init_logging(&slot)?;

    if args.reset {
        if let Err(e) = slot.clear() {
            warn!(error = %e, "could not delete save");
        }
    }

    let mut store = GameStore::open(
        Engine::new(args.config),
        SystemClock,
        StdRng::from_entropy(),
        slot,
    );
    let mut app = App::new();
    if let Some(report) = store.welcome_back() {
        app.messages
            .push(messages::describe_offline(report), messages::Tone::Good);
        app.show_welcome = true;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut store, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    store.close();
    if let Err(e) = &result {
        error!(error = %e, "terminal loop failed");
    }
    result
}
