//! Frame-by-frame orchestration: input commands in, world/camera/FOV/stats
//! updates out, in a fixed order (quit, movement, mode toggles, confirm).

use tracing::{debug, info};

use crate::actions::{ActionMenu, discover};
use crate::camera::Camera;
use crate::config::{ConfigError, GameConfig};
use crate::interaction::Interaction;
use crate::map::GridMap;
use crate::stats::GameStats;
use crate::types::*;
use crate::visibility::VisibilityEngine;
use crate::world::World;

mod hash;
mod invariants;
mod views;

pub use views::{HudSnapshot, InspectedTile, ViewTile};

pub struct Game {
    seed: u64,
    config: GameConfig,
    world: World,
    player: ObjectId,
    camera: Camera,
    fov: VisibilityEngine,
    stats: GameStats,
    menu: ActionMenu,
    interaction: Interaction,
    log: Vec<GameEvent>,
}

impl Game {
    /// Generate the map for `seed` and place the player at the configured start.
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = World::generate(
            seed,
            config.map.width as usize,
            config.map.height as usize,
            &config.mapgen,
        );
        Self::from_world(seed, world, config)
    }

    /// Start a game on a prepared world. The map size in `config` is replaced
    /// by the world's own size.
    pub fn from_world(seed: u64, mut world: World, mut config: GameConfig) -> Result<Self, ConfigError> {
        config.map.width = world.map.width() as i32;
        config.map.height = world.map.height() as i32;
        config.validate()?;

        let start = config.player_start();
        let player = world
            .spawn_free(ObjectKind::Player, start, config.player.name.clone())
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let mut camera =
            Camera::new(config.camera.width, config.camera.height, config.map.width, config.map.height);
        camera.center_at(start);

        let mut game = Self {
            seed,
            fov: VisibilityEngine::new(config.fov),
            config,
            world,
            player,
            camera,
            stats: GameStats::new(),
            menu: ActionMenu::default(),
            interaction: Interaction::new(start),
            log: Vec::new(),
        };
        game.refresh_view();
        game.rediscover();
        info!(seed, player = %start, actions = game.menu.actions().len(), "game started");
        Ok(game)
    }

    /// Apply one frame of input.
    pub fn update(&mut self, commands: &FrameCommands) -> FrameOutcome {
        if commands.quit {
            debug!("quit requested");
            return FrameOutcome::Quit;
        }
        if let Some(direction) = commands.movement {
            self.handle_movement(direction);
        }
        if commands.toggle_action_mode {
            let player = self.player_location();
            self.interaction.toggle_action_select(&self.menu, player);
            self.log_mode_change();
        }
        if commands.toggle_inspect_mode {
            let player = self.player_location();
            self.interaction.toggle_inspect(&self.menu, player);
            self.log_mode_change();
        }
        if commands.confirm {
            self.confirm();
        }
        FrameOutcome::Continue
    }

    fn handle_movement(&mut self, direction: Direction) {
        match self.interaction.mode() {
            InteractionMode::Gameplay => self.move_player(direction),
            InteractionMode::ActionSelect => {
                self.menu.advance(direction.selection_step());
                self.interaction.follow_active(&self.menu, self.player_location());
            }
            InteractionMode::Inspect => {
                self.interaction.move_cursor(direction, self.camera.visible_rect());
            }
        }
    }

    fn move_player(&mut self, direction: Direction) {
        let from = self.player_location();
        let to = from.step(direction);
        if !self.world.map.in_bounds(to) {
            debug!(blocked = %to, "move blocked by map edge");
            self.log.push(GameEvent::MoveBlocked { target: to });
            return;
        }
        if let Err(err) = self.world.move_free(self.player, to) {
            debug!(%err, "move rejected");
            self.log.push(GameEvent::MoveBlocked { target: to });
            return;
        }
        self.camera.center_at(to);
        self.log.push(GameEvent::PlayerMoved { from, to });
        self.finish_turn();
    }

    fn confirm(&mut self) {
        if self.interaction.mode() != InteractionMode::ActionSelect {
            return;
        }
        let Some(action) = self.menu.active().cloned() else {
            return;
        };
        let response = action.act(&self.world);
        if !response.success {
            debug!(action = %action.text, cell = %action.target, "action failed");
            self.log.push(GameEvent::ActionFailed { text: action.text });
            return;
        }
        if self.world.apply_response(&response).is_err() {
            self.log.push(GameEvent::ActionFailed { text: action.text });
            return;
        }
        info!(action = %action.text, location = %response.location, "action executed");
        self.log.push(GameEvent::ActionExecuted { text: action.text, location: response.location });
        self.finish_turn();
    }

    /// Shared tail of every turn-consuming command.
    fn finish_turn(&mut self) {
        self.refresh_view();
        self.stats.advance_turn(self.config.turn.minutes_per_turn);
        self.rediscover();
        self.log.push(GameEvent::TurnCompleted { turn: self.stats.turn_count });
        debug!(
            turn = self.stats.turn_count,
            time = %self.stats.time,
            actions = self.menu.actions().len(),
            "turn completed"
        );
    }

    fn refresh_view(&mut self) {
        let player = self.player_location();
        self.fov.recompute(&mut self.world, &self.camera, player);
    }

    fn rediscover(&mut self) {
        let player = self.player_location();
        self.menu.set_actions(discover(&self.world, player));
        self.interaction.sync(&self.menu, player, self.camera.visible_rect());
    }

    fn log_mode_change(&mut self) {
        let mode = self.interaction.mode();
        debug!(?mode, cursor = %self.interaction.cursor(), "mode changed");
        self.log.push(GameEvent::ModeChanged { mode });
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn map(&self) -> &GridMap {
        &self.world.map
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn cursor(&self) -> Pos {
        self.interaction.cursor()
    }

    pub fn player_id(&self) -> ObjectId {
        self.player
    }

    pub fn player_location(&self) -> Pos {
        self.world.objects.get(self.player).map_or(Pos::default(), |player| player.location)
    }

    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }
}
