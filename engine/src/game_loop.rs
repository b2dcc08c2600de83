//! The two engine tasks and the handle that owns them.
//!
//! The logic task ticks the world at a fixed rate and the render task draws
//! it at another. Both share the world behind one lock. A panic inside a
//! tick or a draw pass is logged and the task carries on with the next one.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::EngineError;
use crate::game::Game;
use crate::surface::{Surface, SurfaceError};
use crate::EngineConfig;

/// The world lock shared by the logic and render tasks.
pub type SharedGame = Arc<Mutex<Game>>;

/// Lock the world, recovering it if a previous holder panicked.
pub fn lock_game(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

fn period(rate_hz: u32) -> Duration {
    Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64)
}

/// A running engine: one logic task and one render task over a shared world.
pub struct Engine {
    game: SharedGame,
    shutdown: Arc<watch::Sender<bool>>,
    logic: JoinHandle<()>,
    render: JoinHandle<Result<(), SurfaceError>>,
}

impl Engine {
    /// Spawn both tasks on the current tokio runtime.
    pub fn start(game: Game, surface: Box<dyn Surface>, config: &EngineConfig) -> Self {
        let game = Arc::new(Mutex::new(game));
        let (shutdown_tx, _) = watch::channel(false);
        let shutdown = Arc::new(shutdown_tx);

        let logic = tokio::spawn(run_logic_loop(
            game.clone(),
            config.logic_rate_hz,
            shutdown.clone(),
        ));
        let render = tokio::spawn(run_render_loop(
            game.clone(),
            surface,
            config.frame_rate_hz,
            Duration::from_secs(config.fps_log_interval_secs.max(1)),
            shutdown.subscribe(),
        ));

        tracing::info!(
            "Engine started: logic {} Hz, render {} Hz",
            config.logic_rate_hz,
            config.frame_rate_hz
        );

        Self {
            game,
            shutdown,
            logic,
            render,
        }
    }

    pub fn game(&self) -> SharedGame {
        self.game.clone()
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Resolves once shutdown has been requested, by the game or by a
    /// caller of [`Engine::request_shutdown`].
    pub async fn wait_for_exit(&self) {
        let mut rx = self.shutdown.subscribe();
        let _ = rx.wait_for(|stop| *stop).await;
    }

    pub fn request_shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// Stop both tasks and wait for them. Reports the render task's surface
    /// error if it ended on one.
    pub async fn shutdown(self) -> Result<(), EngineError> {
        self.shutdown.send_replace(true);

        self.logic
            .await
            .map_err(|e| EngineError::TaskJoin(e.to_string()))?;
        let rendered = self
            .render
            .await
            .map_err(|e| EngineError::TaskJoin(e.to_string()))?;

        tracing::info!("Engine stopped");
        rendered.map_err(EngineError::from)
    }
}

/// Fixed-rate simulation. Input is drained every tick; the simulation step
/// only runs while unpaused.
async fn run_logic_loop(game: SharedGame, rate_hz: u32, shutdown: Arc<watch::Sender<bool>>) {
    let mut stop = shutdown.subscribe();
    let mut interval = tokio::time::interval(period(rate_hz));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if *stop.borrow() {
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                let exit = {
                    let mut game = lock_game(&game);
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                        game.process_input();
                        if !game.paused() {
                            game.tick();
                        }
                    }));
                    if outcome.is_err() {
                        tracing::error!("Logic tick panicked, continuing with next tick");
                    }
                    game.exit_requested()
                };
                if exit {
                    tracing::info!("Exit requested by game");
                    shutdown.send_replace(true);
                    break;
                }
            }
            _ = stop.changed() => {}
        }
    }

    tracing::debug!("Logic loop ended");
}

/// Fixed-rate rendering. The world lock is held for the draw pass only;
/// presenting happens outside it.
async fn run_render_loop(
    game: SharedGame,
    mut surface: Box<dyn Surface>,
    rate_hz: u32,
    fps_log_every: Duration,
    mut stop: watch::Receiver<bool>,
) -> Result<(), SurfaceError> {
    let fps = lock_game(&game).fps_meter();
    fps.reset();

    let mut interval = tokio::time::interval(period(rate_hz));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_log = Instant::now();

    loop {
        if *stop.borrow() {
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                let frame = {
                    let mut game = lock_game(&game);
                    panic::catch_unwind(AssertUnwindSafe(|| game.render_frame()))
                };
                let Ok(frame) = frame else {
                    tracing::error!("Draw pass panicked, skipping frame");
                    continue;
                };

                if let Err(e) = surface.present(&frame) {
                    tracing::error!("Render loop stopping: {}", e);
                    return Err(e);
                }
                fps.record_frame();

                if last_log.elapsed() >= fps_log_every {
                    tracing::debug!("Average FPS: {:.1}", fps.average_fps());
                    last_log = Instant::now();
                }
            }
            _ = stop.changed() => {}
        }
    }

    tracing::debug!("Render loop ended");
    Ok(())
}
