//! Interactive loop: read terminal events, turn them into actions, apply the
//! actions, advance the app clock and redraw at most `MAX_FPS` times a second.

pub mod keybindings;
pub mod lifecycle;
pub mod mouse;

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::core::app::{apply_action, App, AppAction, AppActionDispatcher};
use crate::core::theme_mode::ThemeMode;
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;
use keybindings::{build_mode_aware_registry, handle_text_input, KeyContext, KeyResult};
use keybindings::ModeAwareRegistry;
use lifecycle::{restore_terminal, setup_terminal};
use mouse::actions_for_mouse;

const MAX_FPS: u64 = 60;

pub enum UiEvent {
    Crossterm(Event),
}

/// Theme resolved for the current mode; rebuilt only when the mode flips.
struct ThemeCache {
    mode: ThemeMode,
    theme: Theme,
}

impl ThemeCache {
    fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            theme: Theme::for_mode(mode),
        }
    }

    fn sync(&mut self, mode: ThemeMode) -> &Theme {
        if mode != self.mode {
            *self = Self::new(mode);
        }
        &self.theme
    }
}

fn try_draw_frame<B: Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
    themes: &mut ThemeCache,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let theme = themes.sync(app.theme.mode());
    terminal.draw(|f| ui(f, app, theme))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct EventProcessingOutcome {
    events_processed: bool,
    actions_applied: bool,
    exit_requested: bool,
}

fn route_keyboard_event(
    app: &mut App,
    registry: &ModeAwareRegistry,
    dispatcher: &AppActionDispatcher,
    key: &KeyEvent,
) -> KeyResult {
    let context = KeyContext::from_focus(app.ui.focus);
    if registry.should_handle_as_text_input(key, &context) {
        return handle_text_input(app, key).into();
    }
    let result = registry.handle_key_event(app, dispatcher, key, context);
    if result == KeyResult::NotHandled {
        warn!(?key, ?context, "ignored key");
    }
    result
}

/// Handle every pending event. Actions queued by an event are applied before
/// the next event is routed, so a key that moves focus takes effect for the
/// keys behind it in the same batch.
fn process_ui_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
    registry: &ModeAwareRegistry,
    dispatcher: &AppActionDispatcher,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome::default();

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if route_keyboard_event(app, registry, dispatcher, &key) == KeyResult::Exit {
                    outcome.actions_applied |= drain_action_queue(app, action_rx);
                    outcome.exit_requested = true;
                    break;
                }
            }
            UiEvent::Crossterm(Event::Mouse(mouse)) => {
                dispatcher.dispatch_many(actions_for_mouse(&app.ui.hit_map, &mouse));
            }
            UiEvent::Crossterm(Event::Resize(width, height)) => {
                dispatcher.dispatch(AppAction::Resize { width, height });
            }
            UiEvent::Crossterm(Event::FocusGained) => {
                dispatcher.dispatch(AppAction::VisibilityChanged { visible: true });
            }
            UiEvent::Crossterm(Event::FocusLost) => {
                dispatcher.dispatch(AppAction::VisibilityChanged { visible: false });
            }
            UiEvent::Crossterm(Event::Paste(text)) => match app.ui.focused_field() {
                Some(field) => {
                    app.contact.field_mut(field).insert_str(text);
                }
                None => debug!("paste ignored outside the contact form"),
            },
            UiEvent::Crossterm(_) => {}
        }
        outcome.actions_applied |= drain_action_queue(app, action_rx);
    }

    outcome
}

/// Apply every queued action. Returns whether anything was applied.
fn drain_action_queue(app: &mut App, action_rx: &mut mpsc::UnboundedReceiver<AppAction>) -> bool {
    let mut applied = false;
    while let Ok(action) = action_rx.try_recv() {
        apply_action(app, action);
        applied = true;
    }
    applied
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

/// Take over the terminal and run the workbench until the user quits.
pub async fn run_workbench(mut app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;
    let size = match terminal.size() {
        Ok(size) => size,
        Err(err) => {
            restore_terminal(&mut terminal)?;
            return Err(err.into());
        }
    };
    app.bootstrap(size);

    let result = main_loop(&mut app, &mut terminal).await;
    restore_terminal(&mut terminal)?;
    info!("workbench closed");
    result
}

async fn main_loop<B: Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn Error>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);
    let registry = build_mode_aware_registry();
    let mut themes = ThemeCache::new(app.theme.mode());

    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now()
        .checked_sub(frame_duration)
        .unwrap_or_else(Instant::now);
    let mut last_tick = Instant::now();
    let mut request_redraw = true;

    let result = loop {
        if app.ui.exit_requested {
            break Ok(());
        }

        if let Err(err) = try_draw_frame(
            app,
            terminal,
            &mut themes,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        ) {
            break Err(err.into());
        }

        let outcome =
            process_ui_events(app, &mut event_rx, &mut action_rx, &registry, &dispatcher);
        let applied = outcome.actions_applied | drain_action_queue(app, &mut action_rx);
        if outcome.exit_requested {
            break Ok(());
        }

        let now = Instant::now();
        let ticked = app.advance_clock(now.duration_since(last_tick));
        last_tick = now;

        if outcome.events_processed || applied || ticked {
            request_redraw = true;
        }

        let idle = !outcome.events_processed && !applied && !request_redraw;
        if idle {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    result
}
