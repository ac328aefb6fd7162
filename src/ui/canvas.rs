use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Rectangle};
use ratatui::widgets::Block;

use crate::config::WindowConfig;
use crate::entity::{Shape, Sprite};

/// Draws a game world on a canvas whose bounds are the game's own
/// coordinate system, so entities are painted at their logical positions.
pub fn render_world<F>(frame: &mut Frame, area: Rect, window: &WindowConfig, block: Block, painter: F)
where
    F: Fn(&mut Context),
{
    let canvas = Canvas::default()
        .block(block)
        .background_color(window.background)
        .marker(Marker::Braille)
        .x_bounds(window.x_bounds())
        .y_bounds(window.y_bounds())
        .paint(painter);
    frame.render_widget(canvas, area);
}

pub fn paint_sprite(ctx: &mut Context, sprite: &Sprite) {
    if !sprite.is_visible() {
        return;
    }
    let p = sprite.position();
    let (x, y) = (f64::from(p.x), f64::from(p.y));
    match sprite.shape() {
        Shape::Circle { radius } => ctx.draw(&Circle {
            x,
            y,
            radius: f64::from(radius),
            color: sprite.color(),
        }),
        Shape::Rect { width, height } => {
            let (w, h) = (f64::from(width), f64::from(height));
            ctx.draw(&Rectangle {
                x: x - w / 2.0,
                y: y - h / 2.0,
                width: w,
                height: h,
                color: sprite.color(),
            });
        }
    }
}
