use rand::Rng;
use wgpu_primer::{
    Color, ElementState, KeyCode, KeyEvent, PhysicalKey, WindowEvent,
    context::Context,
    lesson::{Lesson, LessonConstructor, run},
};

/// No geometry at all: the render pass clear does the drawing. Number keys
/// change the clear color, key 4 reports the current one to the log.
struct ClearColor;

/// The color a pressed key maps to, if any. Key 4 is handled separately
/// since it reads state instead of writing it.
fn color_for_key<R: Rng>(key: KeyCode, rng: &mut R) -> Option<Color> {
    match key {
        KeyCode::Digit1 => Some(Color {
            r: 0.2,
            g: 0.8,
            b: 0.2,
            a: 1.0,
        }),
        KeyCode::Digit2 => Some(Color {
            r: 0.2,
            g: 0.2,
            b: 0.8,
            a: 1.0,
        }),
        KeyCode::Digit3 => Some(Color {
            r: rng.gen_range(0.0..1.0),
            g: rng.gen_range(0.0..1.0),
            b: rng.gen_range(0.0..1.0),
            a: 1.0,
        }),
        _ => None,
    }
}

/// One decimal place, like the original report.
fn format_clear_color(color: &Color) -> String {
    format!(
        "clearColor = ({:.1}, {:.1}, {:.1})",
        color.r, color.g, color.b
    )
}

impl Lesson for ClearColor {
    fn on_window_events(&mut self, ctx: &mut Context, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(key),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } = event
        {
            if *key == KeyCode::Digit4 {
                log::info!("{}", format_clear_color(&ctx.clear_color));
            } else if let Some(color) = color_for_key(*key, &mut rand::thread_rng()) {
                ctx.clear_color = color;
            }
        }
    }

    fn on_render<'a>(&'a self, _ctx: &'a Context, _render_pass: &mut wgpu_primer::RenderPass<'a>) {
        // Nothing to draw; the pass has already cleared the frame.
    }
}

fn main() -> anyhow::Result<()> {
    let constructor: LessonConstructor =
        Box::new(|_ctx| Box::pin(async move { Ok(Box::new(ClearColor) as Box<dyn Lesson>) }));
    run(constructor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn key_one_selects_green() {
        let mut rng = StdRng::seed_from_u64(7);
        let color = color_for_key(KeyCode::Digit1, &mut rng).unwrap();
        assert_eq!((color.r, color.g, color.b), (0.2, 0.8, 0.2));
    }

    #[test]
    fn key_two_selects_blue() {
        let mut rng = StdRng::seed_from_u64(7);
        let color = color_for_key(KeyCode::Digit2, &mut rng).unwrap();
        assert_eq!((color.r, color.g, color.b), (0.2, 0.2, 0.8));
    }

    #[test]
    fn key_three_stays_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let color = color_for_key(KeyCode::Digit3, &mut rng).unwrap();
        for channel in [color.r, color.g, color.b] {
            assert!((0.0..1.0).contains(&channel));
        }
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn unmapped_keys_change_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(color_for_key(KeyCode::KeyA, &mut rng).is_none());
        assert!(color_for_key(KeyCode::Digit5, &mut rng).is_none());
    }

    #[test]
    fn report_rounds_to_one_decimal() {
        let color = Color {
            r: 0.2,
            g: 0.8,
            b: 0.26,
            a: 1.0,
        };
        assert_eq!(format_clear_color(&color), "clearColor = (0.2, 0.8, 0.3)");
    }
}
