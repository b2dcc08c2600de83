//! Draw-listener registry and the per-frame pixel queue.

use std::collections::BTreeMap;

use crate::hitbox::Aabb;
use crate::object::{ObjectId, ObjectTable};
use crate::{Color, Pixel};

/// Draw tiers, evaluated in declaration order every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Background,
    #[default]
    Foreground,
    Gui,
}

impl Priority {
    pub const ORDER: [Priority; 3] = [Priority::Background, Priority::Foreground, Priority::Gui];
}

/// What a listener may know about the frame it is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    pub width: u32,
    pub height: u32,
    pub paused: bool,
    pub dev_mode: bool,
}

/// Producer of pixel writes, invoked once per render frame.
pub trait DrawListener: Send {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext);
}

/// Pixel queue for the frame being drawn.
#[derive(Debug, Default)]
pub struct Canvas {
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.pixels.push(Pixel::new(x, y, color));
    }

    /// Fill a rectangle with its top-left corner at (x, y).
    pub fn set_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for i in x..x + width {
            for j in y..y + height {
                self.set_pixel(i, j, color);
            }
        }
    }

    /// Fill a `size` x `size` square centered on (x, y).
    pub fn set_big_pixel(&mut self, x: i32, y: i32, size: i32, color: Color) {
        let half = size / 2;
        self.set_rectangle(x - half, y - half, size, size, color);
    }

    pub fn fill_bounds(&mut self, bounds: &Aabb, color: Color) {
        let (x, y) = (bounds.min_x.round() as i32, bounds.min_y.round() as i32);
        let (w, h) = (bounds.width().round() as i32, bounds.height().round() as i32);
        self.set_rectangle(x, y, w, h, color);
    }

    /// One-pixel outline, used for dev-mode hit box overlays.
    pub fn outline_bounds(&mut self, bounds: &Aabb, color: Color) {
        let (x0, y0) = (bounds.min_x.round() as i32, bounds.min_y.round() as i32);
        let (x1, y1) = (bounds.max_x.round() as i32, bounds.max_y.round() as i32);
        for x in x0..=x1 {
            self.set_pixel(x, y0, color);
            self.set_pixel(x, y1, color);
        }
        for y in y0 + 1..y1 {
            self.set_pixel(x0, y, color);
            self.set_pixel(x1, y, color);
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    fn take(&mut self) -> Vec<Pixel> {
        std::mem::take(&mut self.pixels)
    }
}

/// A finished frame, ready for the output surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

enum DrawTarget {
    /// A game object, drawn through the object table so it always shows the
    /// object currently stored in that slot.
    Object(ObjectId),
    Listener(Box<dyn DrawListener>),
}

/// Tiered listener registry plus the pixel queue they draw into.
pub struct Panel {
    width: u32,
    height: u32,
    tiers: BTreeMap<Priority, Vec<DrawTarget>>,
    canvas: Canvas,
    frames: u64,
}

impl Panel {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiers: BTreeMap::new(),
            canvas: Canvas::default(),
            frames: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn register_listener(&mut self, priority: Priority, listener: Box<dyn DrawListener>) {
        self.tiers
            .entry(priority)
            .or_default()
            .push(DrawTarget::Listener(listener));
    }

    pub(crate) fn register_object(&mut self, priority: Priority, id: ObjectId) {
        self.tiers
            .entry(priority)
            .or_default()
            .push(DrawTarget::Object(id));
    }

    pub(crate) fn unregister_object(&mut self, id: ObjectId) {
        for targets in self.tiers.values_mut() {
            targets.retain(|t| !matches!(t, DrawTarget::Object(o) if *o == id));
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    /// Drop every registration and any pixels queued for the current frame.
    pub fn clear(&mut self) {
        self.tiers.clear();
        self.canvas.clear();
    }

    /// Run every listener, tier by tier and in registration order within a
    /// tier, queueing their pixels. Returns the queue length afterwards.
    ///
    /// The queue starts empty, so pixels from a pass that never reached
    /// `take_frame` are dropped.
    pub fn draw_pass(&mut self, objects: &ObjectTable, ctx: &DrawContext) -> usize {
        self.canvas.clear();
        for priority in Priority::ORDER {
            let Some(targets) = self.tiers.get(&priority) else {
                continue;
            };
            for target in targets {
                match target {
                    DrawTarget::Object(id) => {
                        if let Some(object) = objects.get(*id) {
                            object.draw(&mut self.canvas, ctx);
                        }
                    }
                    DrawTarget::Listener(listener) => listener.draw(&mut self.canvas, ctx),
                }
            }
        }
        self.canvas.len()
    }

    /// Swap the queued pixels out into a frame, leaving the queue empty.
    pub fn take_frame(&mut self) -> Frame {
        self.frames += 1;
        Frame {
            index: self.frames,
            width: self.width,
            height: self.height,
            pixels: self.canvas.take(),
        }
    }

    pub fn queued(&self) -> usize {
        self.canvas.len()
    }
}
