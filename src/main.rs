//! Space Travel entry point
//!
//! Opens the window, pumps events into the per-tick input snapshot and runs
//! the fixed-rate loop until collision or quit.

use std::time::{SystemTime, UNIX_EPOCH};

use sfml::graphics::RenderWindow;
use sfml::window::{ContextSettings, Event, Key, Style};

use space_travel::config::Config;
use space_travel::renderer::Renderer;
use space_travel::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let config = Config::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("{} starting with seed {seed}", config.title);

    let mut window = RenderWindow::new(
        (config.width as u32, config.height as u32),
        config.title,
        Style::CLOSE,
        &ContextSettings::default(),
    )
    .expect("failed to open window");
    // Blocking frame-pacing wait lives in display()
    window.set_framerate_limit(config.tick_rate);

    let mut renderer = Renderer::new(&config).expect("no usable score font found");

    let mut state = GameState::new(seed);
    state.start();

    let mut input = TickInput::default();

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                Event::Closed => input.quit = true,
                Event::KeyPressed { code, .. } => match code {
                    Key::Up => input.up = true,
                    Key::Down => input.down = true,
                    Key::Left => input.left = true,
                    Key::Right => input.right = true,
                    _ => {}
                },
                Event::KeyReleased { code, .. } => match code {
                    Key::Up => input.up = false,
                    Key::Down => input.down = false,
                    Key::Left => input.left = false,
                    Key::Right => input.right = false,
                    _ => {}
                },
                _ => {}
            }
        }

        tick(&mut state, &input);
        renderer.draw(&mut window, &state);

        if state.phase == GamePhase::Stopped {
            break;
        }
    }

    log::info!("game over, final score {}", state.score);
    window.close();
}
