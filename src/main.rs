use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    event::{DeviceEvent, Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::{CursorGrabMode, Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::game_loop::{Clock, GameLoop};
use engine::input::{Action, InputManager};
use engine::renderer::{draw_frame, Projection, TraceRenderer};
use game::characters::{AnimationPlayer, ClipPlayer};
use game::GameState;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Scroll pixels that count as one wheel notch
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Log the frame rate every N frames
const FPS_LOG_INTERVAL: u64 = 600;

/// Hide the cursor and keep it inside the window, like a game
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    if let Err(e) = grabbed {
        warn!("Could not grab cursor: {}", e);
    }
    window.set_cursor_visible(false);
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Souls-like TPS controller...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Souls-like TPS (Mouse Camera)")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;
    grab_cursor(&window);

    info!("Window created successfully");

    let mut game_loop = GameLoop::new();
    let mut input = InputManager::default();
    let mut state = GameState::default();
    let mut animator = ClipPlayer::with_standard_clips();
    let mut renderer = TraceRenderer::new();
    let size = window.inner_size();
    let mut projection = Projection::new(size.width, size.height);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Close requested after {:.1}s, shutting down...",
                        game_loop.elapsed().as_secs_f32()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    info!("Window resized to {:?}", physical_size);
                    projection.resize(physical_size.width, physical_size.height);
                }
                WindowEvent::Focused(focused) => {
                    if focused {
                        grab_cursor(&window);
                    } else {
                        input.reset();
                    }
                    state.camera.reset_cursor();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                    if input.just_pressed(Action::Quit) {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                    }
                }
                WindowEvent::MouseInput { state: button_state, button, .. } => {
                    input.process_mouse_button(button, button_state);
                }
                WindowEvent::MouseWheel { delta, .. } if !game_loop.is_paused() => {
                    let lines = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                    };
                    state.camera.on_scroll(lines);
                }
                WindowEvent::RedrawRequested => {
                    let dt = game_loop.tick();
                    let mut frame = input.poll();
                    if frame.pause_pressed {
                        game_loop.toggle_pause();
                    }
                    if game_loop.is_paused() {
                        frame = frame.while_paused();
                    }

                    state.tick(&frame, dt, &mut animator);
                    input.end_frame();
                    animator.advance(dt);

                    let snapshot = state.snapshot(&projection);
                    draw_frame(&mut renderer, &snapshot, animator.bone_transforms());

                    if game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                        info!(
                            "{:.0} fps, {} frames drawn",
                            game_loop.fps(),
                            renderer.frames()
                        );
                        debug!(
                            "{:?} for {:.2}s (from {:?}, one-shot left {:?}), clip '{}' at {:.2}s, \
                             camera yaw {:.1} pitch {:.1} distance {:.2}",
                            state.state(),
                            state.actions.state_time(),
                            state.actions.previous_state(),
                            state.actions.time_left(),
                            animator.current_clip().name(),
                            animator.time_secs(),
                            state.camera.yaw(),
                            state.camera.pitch(),
                            state.camera.distance()
                        );
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } if !game_loop.is_paused() => {
                state.camera.on_mouse_delta(delta.0, delta.1);
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
