use anyhow::Result;
use log::{info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::physics::body::presets;
use engine::physics::{PhysicsWorld, PlatformerBody};
use engine::sprite::FlipbookLibrary;
use game::characters::{Character, CharacterAnimations, CharacterStats};
use game::controller::PlayerController;
use game::damage::{DamageType, Damageable};
use game::items::{Item, ItemKind};

/// Anything that falls below this height is lost
const KILL_PLANE_Y: f32 = -20.0;

/// Everything the simulation owns
struct Scene {
    physics: PhysicsWorld,
    flipbooks: FlipbookLibrary,
    player: Character<PlatformerBody>,
    controller: PlayerController,
    items: Vec<Item>,
}

impl Scene {
    fn new() -> Result<Self> {
        let mut physics = PhysicsWorld::new();

        // Ground
        let ground = physics.add_rigid_body(presets::platform_body(0.0, -0.5));
        physics.add_collider(presets::platform_collider(40.0, 1.0), ground);

        let mut flipbooks = FlipbookLibrary::new();
        let animations = CharacterAnimations::standard(&mut flipbooks)?;
        if flipbooks.is_empty() {
            warn!("No flipbooks loaded, sprites will show nothing");
        } else {
            info!("Loaded {} flipbooks", flipbooks.len());
        }

        let stats = CharacterStats::default();
        let body = PlatformerBody::spawn(&mut physics, stats.movement, 0.0, 2.0);
        let player = Character::new(0, "Ninja", stats, animations, body);

        info!(
            "Spawned {} with {}/{} health, {}/{} stamina, {} coins",
            player.name,
            player.vitals().health(),
            player.vitals().max_health(),
            player.vitals().stamina(),
            player.vitals().max_stamina(),
            player.vitals().coins()
        );

        let items = vec![
            Item::spawn(&mut physics, 1, ItemKind::Coin { amount: 1 }, 3.0, 0.5),
            Item::spawn(&mut physics, 2, ItemKind::Coin { amount: 1 }, 4.0, 0.5),
            Item::spawn(&mut physics, 3, ItemKind::HealthPotion { amount: 25.0 }, 6.0, 0.5),
            Item::spawn(&mut physics, 4, ItemKind::explosive(), -5.0, 0.5),
        ];

        Ok(Self {
            physics,
            flipbooks,
            player,
            controller: PlayerController::new(),
            items,
        })
    }

    /// One fixed simulation tick
    fn tick(&mut self, dt: f32) {
        self.player.tick(dt);

        self.player.body_mut().pre_step(&mut self.physics);
        self.physics.step();
        self.player.body_mut().post_step(&self.physics);

        self.player.sprite_mut().update(&self.flipbooks, dt);

        self.collect_items();
        self.apply_kill_plane();
    }

    /// Apply whatever the player touched this step and clear used items
    fn collect_items(&mut self) {
        let collider = self.player.body().collider_handle();
        for item in &mut self.items {
            if item.overlaps(&self.physics, collider) {
                item.touched_by(&mut self.player);
            }
        }

        let physics = &mut self.physics;
        self.items.retain(|item| {
            if item.is_consumed() {
                item.despawn(physics);
                false
            } else {
                true
            }
        });
    }

    fn apply_kill_plane(&mut self) {
        if !self.player.is_alive() {
            return;
        }
        let fell = self
            .player
            .body()
            .position(&self.physics)
            .is_some_and(|position| position.y < KILL_PLANE_Y);

        if fell {
            warn!("{} fell out of the world", self.player.name);
            let lethal = self.player.vitals().health();
            let target: &mut dyn Damageable = &mut self.player;
            target.apply_damage(lethal, None, DamageType::GENERIC);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Desert Ninjas...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Desert Ninjas")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut scene = Scene::new()?;
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();

    // Main event loop
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
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => input.process_mouse_button(state, button),
            Event::WindowEvent {
                event: WindowEvent::Touch(touch),
                ..
            } => input.process_touch(touch.phase),
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Release events are lost while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.just_pressed(Action::Menu) {
                    info!("Menu requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                if !game_loop.is_paused() {
                    scene.controller.apply(&input, &mut scene.player);
                }

                let ticks = game_loop.begin_frame();
                let dt = game_loop.fixed_timestep();
                for _ in 0..ticks {
                    scene.tick(dt);
                }

                input.update();
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
