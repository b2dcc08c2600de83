use flatland_engine::game::Game;
use flatland_engine::input::{keys, KeyCode, MouseButton};
use flatland_engine::panel::Priority;
use flatland_engine::scene::{Scene, SceneError};
use flatland_engine::Vector;

use super::hud::{DividingLine, MenuOption, MenuSelection, PauseMenu, ScoreTally};
use super::{Ball, Goal, Paddle, PaddleAgent, Side, Wall};
use crate::constants::{
    AI_GOAL, AI_PADDLE, AI_SCORE, BALL, BALL_SPEED, BOTTOM_WALL, GOAL_OFFSET, MAIN_SCENE,
    PADDLE_ACCELERATION, PLAYER_GOAL, PLAYER_PADDLE, PLAYER_SCORE, TOP_WALL, WALL_THICKNESS,
};

/// Two paddles, a ball, walls and goals. The player holds the right
/// paddle; the agent drives the left one.
#[derive(Default)]
pub struct MainGame {
    menu: MenuSelection,
}

impl MainGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &MenuSelection {
        &self.menu
    }

    fn activate(&self, game: &mut Game) {
        match self.menu.current() {
            MenuOption::Resume => game.set_paused(false),
            MenuOption::Restart => {
                game.set_paused(false);
                game.request_scene(MAIN_SCENE);
            }
            MenuOption::Quit => game.request_exit(),
        }
    }

    fn nudge_player(game: &mut Game, dy: f64) {
        if let Some(paddle) = game.game_object_mut(PLAYER_PADDLE) {
            paddle.body_mut().acceleration += Vector::xy(0.0, dy);
        }
    }
}

impl Scene for MainGame {
    fn load(&mut self, game: &mut Game) -> Result<(), SceneError> {
        let (w, h) = (game.width() as f64, game.height() as f64);
        self.menu.reset();

        game.add_draw_listener(Priority::Background, Box::new(DividingLine));
        let player_score = game.counter(PLAYER_SCORE);
        let ai_score = game.counter(AI_SCORE);
        game.add_draw_listener(
            Priority::Gui,
            Box::new(ScoreTally::new(
                player_score.clone(),
                (w * 5.0 / 8.0) as i32,
                (h / 32.0) as i32,
            )),
        );
        game.add_draw_listener(
            Priority::Gui,
            Box::new(ScoreTally::new(
                ai_score.clone(),
                (w * 3.0 / 8.0) as i32,
                (h / 32.0) as i32,
            )),
        );

        let ball = game.add_game_object(
            BALL,
            Box::new(Ball::new(
                Vector::xy(w * 3.0 / 4.0, h / 2.0),
                Vector::xy(-BALL_SPEED, 0.0),
            )),
        );
        let ai_paddle = game.add_game_object(
            AI_PADDLE,
            Box::new(Paddle::new(Vector::xy(w / 8.0, h / 2.0), h)),
        );
        game.add_agent(Box::new(PaddleAgent::new(ai_paddle, ball)));
        game.add_game_object(
            PLAYER_PADDLE,
            Box::new(Paddle::new(Vector::xy(w * 7.0 / 8.0, h / 2.0), h)),
        );

        let half_wall = WALL_THICKNESS / 2.0;
        game.add_game_object(
            TOP_WALL,
            Box::new(Wall::new(w, Vector::xy(w / 2.0, -half_wall))),
        );
        game.add_game_object(
            BOTTOM_WALL,
            Box::new(Wall::new(w, Vector::xy(w / 2.0, h + half_wall - 1.0))),
        );

        game.add_game_object(
            PLAYER_GOAL,
            Box::new(Goal::new(
                Vector::xy(w * 7.0 / 8.0 + GOAL_OFFSET, h / 2.0),
                h,
                Side::Player,
                ai_score,
            )),
        );
        game.add_game_object(
            AI_GOAL,
            Box::new(Goal::new(
                Vector::xy(w / 8.0 - GOAL_OFFSET, h / 2.0),
                h,
                Side::Ai,
                player_score,
            )),
        );

        game.add_draw_listener(Priority::Gui, Box::new(PauseMenu::new(self.menu.clone())));
        Ok(())
    }

    fn keyboard_input(&mut self, game: &mut Game, key: KeyCode, pressed: bool) {
        if !pressed {
            match key {
                keys::ARROW_UP => Self::nudge_player(game, PADDLE_ACCELERATION),
                keys::ARROW_DOWN => Self::nudge_player(game, -PADDLE_ACCELERATION),
                _ => {}
            }
            return;
        }

        if game.paused() {
            match key {
                keys::ARROW_UP => self.menu.step(-1),
                keys::ARROW_DOWN => self.menu.step(1),
                keys::ENTER => {
                    self.activate(game);
                    return;
                }
                _ => {}
            }
        }

        match key {
            keys::ESCAPE => game.toggle_paused(),
            keys::L => tracing::info!("Average fps: {:.1}", game.average_fps()),
            keys::I => game.set_dev_mode(!game.dev_mode()),
            keys::ARROW_UP => Self::nudge_player(game, -PADDLE_ACCELERATION),
            keys::ARROW_DOWN => Self::nudge_player(game, PADDLE_ACCELERATION),
            _ => {}
        }
    }

    fn mouse_input(
        &mut self,
        game: &mut Game,
        _position: (i32, i32),
        button: MouseButton,
        pressed: bool,
    ) {
        if pressed && button == MouseButton::Primary && game.paused() {
            self.activate(game);
        }
    }
}
