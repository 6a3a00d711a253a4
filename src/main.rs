use nusarasa::api::ApiClient;
use nusarasa::app::App;
use nusarasa::cli::{self, CliCommand};
use nusarasa::config::Config;
use nusarasa::events::AppEvent;
use nusarasa::harness;
use nusarasa::map::MapDefinition;
use nusarasa::ui;
use nusarasa::ui::interaction::handle_map_action;

use color_eyre::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::parse_args(std::env::args());
    let mut config = Config::from_env();
    if let Some(ref url) = args.base_url {
        config = config.with_base_url(url.clone());
    }

    match args.command {
        CliCommand::Version => {
            cli::print_version();
            Ok(())
        }
        CliCommand::ApiTest => run_api_test(&config, args.debug).await,
        CliCommand::RunTui => run_tui(config, args.debug).await,
    }
}

/// Default log filter: quiet unless the user opts in.
fn log_filter(debug: bool) -> tracing_subscriber::EnvFilter {
    let default = if debug { "nusarasa=debug" } else { "nusarasa=info" };
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}

async fn run_api_test(config: &Config, debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(io::stderr)
        .init();

    let client = ApiClient::new(config)?;
    let report = harness::run_api_tests(&client).await;
    harness::display_report(&report, client.base_url());

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_tui(config: Config, debug: bool) -> Result<()> {
    // In TUI mode logs go to a file so they don't corrupt the screen; the
    // filter controls verbosity, not whether a subscriber exists.
    let file = std::fs::File::create("nusarasa.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    info!(base_url = %config.base_url, "starting");

    let client = ApiClient::new(&config)?;
    let shapes = match &config.shapes_path {
        Some(path) => MapDefinition::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "failed to load map shapes");
            App::placeholder_shapes()
        }),
        None => App::placeholder_shapes(),
    };
    let mut app = App::new(shapes);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: ApiClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Startup health check, off the event loop.
    {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let healthy = client
                .health_check()
                .await
                .map(|health| health.status == "ok")
                .unwrap_or(false);
            let _ = tx.send(AppEvent::HealthChecked(healthy));
        });
    }

    let mut events = EventStream::new();
    // Region id of the recipe fetch currently in flight, if any.
    let mut pending_fetch: Option<&'static str> = None;

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        if app.needs_recipes() {
            if let Some(region) = app.selected {
                if pending_fetch != Some(region.id) {
                    pending_fetch = Some(region.id);
                    spawn_recipe_fetch(&client, &tx, region);
                }
            }
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_terminal_event(app, event),
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            Some(app_event) = rx.recv() => {
                match &app_event {
                    AppEvent::RecipesLoaded { region_id, .. } if pending_fetch == Some(*region_id) => {
                        pending_fetch = None;
                    }
                    AppEvent::ApiFailed { region_id, .. } if pending_fetch == Some(*region_id) => {
                        pending_fetch = None;
                    }
                    _ => {}
                }
                app.handle_event(app_event);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn spawn_recipe_fetch(
    client: &ApiClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
    region: &'static nusarasa::map::Region,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match client.list_recipes(0, 50).await {
            Ok(all) => {
                // The backend has no region filter; match on display name.
                let recipes = all
                    .into_iter()
                    .filter(|recipe| recipe.region.as_deref() == Some(region.name))
                    .collect();
                let _ = tx.send(AppEvent::RecipesLoaded {
                    region_id: region.id,
                    recipes,
                });
            }
            Err(e) => {
                let _ = tx.send(AppEvent::ApiFailed {
                    region_id: region.id,
                    message: format!("gagal memuat resep: {}", e),
                });
            }
        }
    });
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Up => app.focus_prev(),
            KeyCode::Enter => app.activate_focused(),
            KeyCode::Esc => app.clear_selection(),
            _ => {}
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => {
                let before = app.hover;
                match app.hit_areas.hover_region_at(mouse.column, mouse.row) {
                    Some(region_id) => app.hover.enter(region_id),
                    None => app.hover.leave(),
                }
                if app.hover != before {
                    app.mark_dirty();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = app.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_map_action(app, action);
                }
            }
            _ => {}
        },
        Event::Resize(_, _) => app.mark_dirty(),
        _ => {}
    }
}
