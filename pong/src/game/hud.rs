//! Listeners that draw no game object: the centre line, the score tallies
//! and the pause menu.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use flatland_engine::counter::ScoreCounter;
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::Color;

use crate::constants::{SCORE_BLOCK, SCORE_BLOCKS_PER_ROW};

const DASH_LENGTH: i32 = 10;
const DASH_GAP: i32 = 10;
const DASH_WIDTH: i32 = 4;

/// Dashed vertical line down the middle of the court.
pub struct DividingLine;

impl DrawListener for DividingLine {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        let x = ctx.width as i32 / 2 - DASH_WIDTH / 2;
        let mut y = 0;
        while y < ctx.height as i32 {
            canvas.set_rectangle(x, y, DASH_WIDTH, DASH_LENGTH, Color::GRAY);
            y += DASH_LENGTH + DASH_GAP;
        }
    }
}

/// One side's score as rows of blocks, centred on `x`.
pub struct ScoreTally {
    counter: Arc<ScoreCounter>,
    x: i32,
    y: i32,
}

impl ScoreTally {
    pub fn new(counter: Arc<ScoreCounter>, x: i32, y: i32) -> Self {
        Self { counter, x, y }
    }
}

impl DrawListener for ScoreTally {
    fn draw(&self, canvas: &mut Canvas, _ctx: &DrawContext) {
        let score = self.counter.get();
        let step = SCORE_BLOCK + 2;
        let row_width = SCORE_BLOCKS_PER_ROW as i32 * step;
        for i in 0..score {
            let col = (i % SCORE_BLOCKS_PER_ROW) as i32;
            let row = (i / SCORE_BLOCKS_PER_ROW) as i32;
            canvas.set_rectangle(
                self.x - row_width / 2 + col * step,
                self.y + row * step,
                SCORE_BLOCK,
                SCORE_BLOCK,
                Color::WHITE,
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Resume,
    Restart,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Resume, MenuOption::Restart, MenuOption::Quit];
}

/// Pause-menu cursor, shared between the scene that moves it and the
/// listener that draws it.
#[derive(Debug, Clone, Default)]
pub struct MenuSelection(Arc<AtomicUsize>);

impl MenuSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> MenuOption {
        MenuOption::ALL[self.0.load(Ordering::Acquire) % MenuOption::ALL.len()]
    }

    /// Move the cursor by `delta` entries, wrapping at either end.
    pub fn step(&self, delta: isize) {
        let len = MenuOption::ALL.len() as isize;
        let index = self.0.load(Ordering::Acquire) as isize;
        let next = (index + delta).rem_euclid(len);
        self.0.store(next as usize, Ordering::Release);
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Release);
    }
}

const MENU_ENTRY_WIDTH: i32 = 160;
const MENU_ENTRY_HEIGHT: i32 = 30;
const MENU_ENTRY_GAP: i32 = 20;

/// Menu boxes drawn over everything while the game is paused. The
/// selected entry is highlighted.
pub struct PauseMenu {
    selection: MenuSelection,
}

impl PauseMenu {
    pub fn new(selection: MenuSelection) -> Self {
        Self { selection }
    }
}

impl DrawListener for PauseMenu {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        if !ctx.paused {
            return;
        }
        let count = MenuOption::ALL.len() as i32;
        let total = count * MENU_ENTRY_HEIGHT + (count - 1) * MENU_ENTRY_GAP;
        let x = ctx.width as i32 / 2 - MENU_ENTRY_WIDTH / 2;
        let top = ctx.height as i32 / 2 - total / 2;
        let selected = self.selection.current();

        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let color = if *option == selected {
                Color::YELLOW
            } else {
                Color::GRAY
            };
            let y = top + i as i32 * (MENU_ENTRY_HEIGHT + MENU_ENTRY_GAP);
            canvas.set_rectangle(x, y, MENU_ENTRY_WIDTH, MENU_ENTRY_HEIGHT, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(paused: bool) -> DrawContext {
        DrawContext {
            width: 800,
            height: 600,
            paused,
            dev_mode: false,
        }
    }

    #[test]
    fn selection_wraps_both_ways() {
        let selection = MenuSelection::new();
        assert_eq!(selection.current(), MenuOption::Resume);
        selection.step(-1);
        assert_eq!(selection.current(), MenuOption::Quit);
        selection.step(1);
        selection.step(1);
        assert_eq!(selection.current(), MenuOption::Restart);
        selection.reset();
        assert_eq!(selection.current(), MenuOption::Resume);
    }

    #[test]
    fn menu_draws_only_while_paused() {
        let menu = PauseMenu::new(MenuSelection::new());
        let mut canvas = Canvas::default();
        menu.draw(&mut canvas, &ctx(false));
        assert!(canvas.is_empty());

        menu.draw(&mut canvas, &ctx(true));
        let per_entry = (MENU_ENTRY_WIDTH * MENU_ENTRY_HEIGHT) as usize;
        assert_eq!(canvas.len(), 3 * per_entry);
        let highlighted = canvas
            .pixels()
            .iter()
            .filter(|p| p.color == Color::YELLOW)
            .count();
        assert_eq!(highlighted, per_entry);
    }

    #[test]
    fn tally_draws_one_block_per_point() {
        let counter = Arc::new(ScoreCounter::new());
        let tally = ScoreTally::new(counter.clone(), 300, 20);
        let mut canvas = Canvas::default();
        tally.draw(&mut canvas, &ctx(false));
        assert!(canvas.is_empty());

        for _ in 0..12 {
            counter.increment();
        }
        tally.draw(&mut canvas, &ctx(false));
        assert_eq!(canvas.len(), 12 * (SCORE_BLOCK * SCORE_BLOCK) as usize);
    }

    #[test]
    fn dividing_line_is_dashed() {
        let mut canvas = Canvas::default();
        DividingLine.draw(&mut canvas, &ctx(false));
        let dashes = 600 / (DASH_LENGTH + DASH_GAP);
        assert_eq!(canvas.len(), (dashes * DASH_LENGTH * DASH_WIDTH) as usize);
        assert!(canvas.pixels().iter().all(|p| (398..402).contains(&p.x)));
    }
}
