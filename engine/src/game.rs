//! The game world: objects, agents, scenes and the per-tick entry points
//! the engine tasks drive.

use std::collections::{BTreeMap, HashMap};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rand_chacha::ChaCha8Rng;

use crate::agent::AiAgent;
use crate::command::Commands;
use crate::counter::ScoreCounter;
use crate::error::EngineError;
use crate::fps::FpsMeter;
use crate::input::{InputEvent, InputQueue};
use crate::object::{BoxedObject, GameObject, ObjectId, ObjectTable};
use crate::panel::{DrawContext, DrawListener, Frame, Panel, Priority};
use crate::physics::{PassSummary, PhysicsEngine};
use crate::scene::Scene;
use crate::EngineConfig;

/// The world both engine tasks operate on.
///
/// Holds the loaded scene's objects, agents and draw registrations, the
/// physics engine, the input queue and the engine flags. The logic task
/// mutates it once per tick; the render task reads it once per frame. All
/// access goes through the engine's world lock.
pub struct Game {
    objects: ObjectTable,
    agents: Vec<Box<dyn AiAgent>>,
    physics: PhysicsEngine,
    panel: Panel,
    input: InputQueue,
    commands: Commands,
    scenes: HashMap<String, Box<dyn Scene>>,
    loaded: Option<String>,
    pending_scene: Option<String>,
    counters: BTreeMap<String, Arc<ScoreCounter>>,
    rng: ChaCha8Rng,
    fps: Arc<FpsMeter>,
    paused: bool,
    dev_mode: bool,
    exit_requested: bool,
    ticks: u64,
}

impl Game {
    pub fn new(config: &EngineConfig, input: InputQueue) -> Self {
        use rand::SeedableRng;
        Self {
            objects: ObjectTable::new(),
            agents: Vec::new(),
            physics: PhysicsEngine::new(),
            panel: Panel::new(config.width, config.height),
            input,
            commands: Commands::new(),
            scenes: HashMap::new(),
            loaded: None,
            pending_scene: None,
            counters: BTreeMap::new(),
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            fps: Arc::new(FpsMeter::new()),
            paused: false,
            dev_mode: false,
            exit_requested: false,
            ticks: 0,
        }
    }

    // === Scenes ===

    pub fn add_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>) {
        self.scenes.insert(name.into(), scene);
    }

    /// Clear the world and load the named scene into it. On failure, or if
    /// `load` panics, the world is left cleared and no scene is loaded. The
    /// scene itself stays registered either way.
    pub fn load_scene(&mut self, name: &str) -> Result<(), EngineError> {
        let mut scene = self
            .scenes
            .remove(name)
            .ok_or_else(|| EngineError::UnknownScene(name.to_string()))?;

        self.clear();
        let result = panic::catch_unwind(AssertUnwindSafe(|| scene.load(self)));
        self.scenes.insert(name.to_string(), scene);

        match result {
            Ok(Ok(())) => {
                self.loaded = Some(name.to_string());
                tracing::info!(
                    "Loaded scene {:?} ({} objects, {} agents)",
                    name,
                    self.objects.len(),
                    self.agents.len()
                );
                Ok(())
            }
            Ok(Err(source)) => {
                self.clear();
                Err(EngineError::SceneLoad {
                    scene: name.to_string(),
                    source,
                })
            }
            Err(_) => {
                tracing::error!("Scene {:?} panicked while loading", name);
                self.clear();
                Err(EngineError::ScenePanicked(name.to_string()))
            }
        }
    }

    /// Load `name` at the end of the current input pass.
    pub fn request_scene(&mut self, name: impl Into<String>) {
        self.pending_scene = Some(name.into());
    }

    pub fn loaded_scene(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Empty the object mapping, agents, physics set and draw registrations,
    /// drop pending commands and zero every counter.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.agents.clear();
        self.physics.clear();
        self.panel.clear();
        self.commands.clear();
        for counter in self.counters.values() {
            counter.reset();
        }
        self.loaded = None;
    }

    // === Objects, agents, listeners ===

    /// Insert `object` under `name`, replacing any object already there,
    /// register it for drawing at the foreground tier and, if it is
    /// collidable, with the physics engine. A replacement starts with no
    /// contacts, so its first overlap is reported as a fresh collision.
    pub fn add_game_object(&mut self, name: impl Into<String>, object: BoxedObject) -> ObjectId {
        let collidable = object.collidable().is_some();
        let (id, previous) = self.objects.insert(name, object);

        self.panel.unregister_object(id);
        self.panel.register_object(Priority::Foreground, id);
        if previous.is_some() {
            self.physics.unregister(id);
        }
        if collidable {
            self.physics.register(id);
        }
        id
    }

    pub fn remove_game_object(&mut self, name: &str) -> Option<BoxedObject> {
        let (id, object) = self.objects.remove(name)?;
        self.physics.unregister(id);
        self.panel.unregister_object(id);
        Some(object)
    }

    pub fn object_id(&self, name: &str) -> Option<ObjectId> {
        self.objects.id(name)
    }

    pub fn game_object(&self, name: &str) -> Option<&(dyn GameObject + 'static)> {
        self.objects.by_name(name)
    }

    pub fn game_object_mut(&mut self, name: &str) -> Option<&mut (dyn GameObject + 'static)> {
        self.objects.by_name_mut(name)
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectTable {
        &mut self.objects
    }

    pub fn add_agent(&mut self, agent: Box<dyn AiAgent>) {
        self.agents.push(agent);
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn add_draw_listener(&mut self, priority: Priority, listener: Box<dyn DrawListener>) {
        self.panel.register_listener(priority, listener);
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn physics(&self) -> &PhysicsEngine {
        &self.physics
    }

    pub fn width(&self) -> u32 {
        self.panel.width()
    }

    pub fn height(&self) -> u32 {
        self.panel.height()
    }

    /// Named per-game counter, created on first use and zeroed by `clear`.
    pub fn counter(&mut self, name: &str) -> Arc<ScoreCounter> {
        self.counters
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(ScoreCounter::new()))
            .clone()
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Queue a world command to run after the next physics pass.
    pub fn defer(&mut self, command: impl FnOnce(&mut Game) + Send + 'static) {
        self.commands.push(command);
    }

    // === Flags ===

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn set_dev_mode(&mut self, dev_mode: bool) {
        self.dev_mode = dev_mode;
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn fps_meter(&self) -> Arc<FpsMeter> {
        self.fps.clone()
    }

    pub fn average_fps(&self) -> f64 {
        self.fps.average_fps()
    }

    /// Simulation ticks run so far. Paused ticks are not counted.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // === Per-tick entry points ===

    /// Drain pending input into the loaded scene. Runs while paused too.
    pub fn process_input(&mut self) {
        for event in self.input.drain() {
            match event {
                InputEvent::Key { code, pressed } => {
                    self.with_loaded_scene(|scene, game| scene.keyboard_input(game, code, pressed));
                }
                InputEvent::Mouse {
                    x,
                    y,
                    button,
                    pressed,
                } => {
                    self.with_loaded_scene(|scene, game| {
                        scene.mouse_input(game, (x, y), button, pressed)
                    });
                }
            }
        }

        if let Some(name) = self.pending_scene.take() {
            if let Err(e) = self.load_scene(&name) {
                tracing::warn!("Requested scene load failed: {}", e);
            }
        }
    }

    /// One simulation step: agents, then per-object logic, then the physics
    /// pass, then any commands the pass queued.
    pub fn tick(&mut self) -> PassSummary {
        for agent in &mut self.agents {
            agent.logic(&mut self.objects);
        }
        for (_, object) in self.objects.iter_mut() {
            object.run_logic();
        }

        let mut commands = std::mem::take(&mut self.commands);
        let summary = self.physics.check_collisions(&mut self.objects, &mut commands);
        commands.apply(self);
        if self.commands.is_empty() {
            self.commands = commands;
        }

        self.ticks += 1;
        summary
    }

    /// Run the draw pass over the current state and hand back the frame,
    /// leaving the pixel queue empty.
    pub fn render_frame(&mut self) -> Frame {
        let ctx = self.draw_context();
        self.panel.draw_pass(&self.objects, &ctx);
        self.panel.take_frame()
    }

    pub fn draw_context(&self) -> DrawContext {
        DrawContext {
            width: self.panel.width(),
            height: self.panel.height(),
            paused: self.paused,
            dev_mode: self.dev_mode,
        }
    }

    /// Run `f` with the loaded scene detached. A panicking handler loses
    /// only the event it was handling.
    fn with_loaded_scene(&mut self, f: impl FnOnce(&mut dyn Scene, &mut Game)) {
        let Some(name) = self.loaded.clone() else {
            return;
        };
        let Some(mut scene) = self.scenes.remove(&name) else {
            return;
        };
        let result = panic::catch_unwind(AssertUnwindSafe(|| f(scene.as_mut(), self)));
        if result.is_err() {
            tracing::error!("Scene {:?} panicked handling input, event dropped", name);
        }
        self.scenes.entry(name).or_insert(scene);
    }
}
