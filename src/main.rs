use anyhow::{Context, Result};
use lamplight::engine::assets::{AssetLoader, AssetType, Spritesheet};
use lamplight::engine::game_loop::GameLoop;
use lamplight::engine::input::{InputConfig, InputSource, PlayerInput};
use lamplight::game::settings::{props, PlayerTuning, WorldSettings};
use lamplight::game::{layout, Scene};
use log::{debug, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const ASSET_DIR: &str = "assets";
const SHEET_NAME: &str = "spritesheet.png";

/// A floor across the whole screen with a few props on it
fn build_level(scene: &mut Scene) {
    let world = scene.world();
    let floor_top = (world.height as u32 - props::GROUND_HEIGHT) as i32;
    let prop_top = floor_top - props::PROP_SIZE as i32;

    for x in (0..world.width as i32).step_by(props::GROUND_WIDTH as usize) {
        scene.spawn_ground(x, floor_top);
    }

    scene.spawn_urn(320, prop_top);
    scene.spawn_fire(640, prop_top);
    scene.spawn_fire(1180, prop_top);
    scene.spawn_lamp(1500, prop_top);
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Lamplight...");

    let loader = AssetLoader::new(ASSET_DIR);
    let sheet_path = loader.resolve_path(AssetType::Texture, SHEET_NAME);
    let sheet = Spritesheet::load(&sheet_path, layout::SHEET_TRANSPARENCY)
        .with_context(|| format!("Failed to load sprite sheet {}", sheet_path.display()))?;

    let world = WorldSettings::default();
    let mut scene = Scene::new(&sheet, PlayerTuning::default(), world)?;
    build_level(&mut scene);
    info!(
        "Level ready: {} sprites, {} platforms, {} lights",
        scene.sprite_count(),
        scene.platforms().len(),
        scene.lights().len()
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Lamplight")
        .with_inner_size(winit::dpi::LogicalSize::new(world.width, world.height))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let config = InputConfig::default();
    let mut input = PlayerInput::new();
    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(code),
                                state,
                                repeat,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                if code == KeyCode::KeyP {
                    if pressed && !repeat {
                        game_loop.toggle_pause();
                    }
                } else {
                    input.handle_source(&config, InputSource::key(code), pressed);
                }
            }
            Event::AboutToWait => {
                for _ in 0..game_loop.begin_frame() {
                    let now = game_loop.tick();
                    scene.update(&input, now);
                    input.end_tick();
                }

                if game_loop.frame_count() % 600 == 0 {
                    let player = scene.player();
                    debug!(
                        "{:.0} fps, player at {:?} {:?}",
                        game_loop.fps(),
                        player.position(),
                        player.state()
                    );
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
