use bevy::core_pipeline::bloom::BloomSettings;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use smooth_bevy_cameras::controllers::orbit::{
    OrbitCameraBundle, OrbitCameraController, OrbitCameraPlugin,
};
use smooth_bevy_cameras::LookTransformPlugin;
use solar_orbits::{Registry, Simulation, ROOT_CENTER};

mod draw;
mod pick;
mod ui;
mod update;

const DEFAULT_REGISTRY_PATH: &str = "assets/bodies.json";

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_REGISTRY_PATH.to_string());

    // Fail fast: a malformed registry never reaches the renderer.
    let registry = match Registry::load(&path) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load body registry from {path}: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .insert_resource(Sim(Simulation::new(registry)))
        .add_plugins(DefaultPlugins)
        .add_plugins(LookTransformPlugin)
        .add_plugins(OrbitCameraPlugin::new(false))
        .add_plugins(EguiPlugin)
        .init_resource::<ui::UiState>()
        .add_systems(Startup, setup)
        .add_systems(Update, update::bodies)
        .add_systems(Update, ui::render)
        .add_systems(Update, pick::click)
        .add_systems(Update, draw::orbits)
        .run();
}

#[derive(Resource)]
struct Sim(Simulation);

#[derive(Resource)]
struct State {
    draw_orbits: bool,
    orbit_subdivisions: u32,
}

/// Index of the body in the simulation registry.
#[derive(Component)]
struct BodyIndex(usize);

const BODY_COLORS: &[Color] = &[
    Color::SILVER,
    Color::ORANGE,
    Color::BLUE,
    Color::RED,
    Color::BEIGE,
    Color::YELLOW_GREEN,
    Color::ALICE_BLUE,
    Color::MIDNIGHT_BLUE,
];

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Sim>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.01,
    });

    commands.insert_resource(State {
        draw_orbits: true,
        orbit_subdivisions: 100,
    });

    let sphere = meshes.add(
        shape::Icosphere {
            radius: 1.0,
            subdivisions: 4,
        }
        .try_into()
        .unwrap(),
    );

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 10000.0,
            range: 1000.0,
            shadows_enabled: true,
            ..default()
        },
        ..default()
    });

    for (idx, body) in sim.0.registry().bodies().enumerate() {
        let is_star = body.name == ROOT_CENTER;

        let material = if is_star {
            materials.add(StandardMaterial {
                emissive: Color::YELLOW * 100.0,
                ..Default::default()
            })
        } else {
            let color = BODY_COLORS[idx % BODY_COLORS.len()];

            materials.add(StandardMaterial {
                base_color: color,
                emissive: color * 0.2,
                perceptual_roughness: 1.0,
                ..Default::default()
            })
        };

        let mut entity = commands.spawn(PbrBundle {
            mesh: sphere.clone(),
            material,
            transform: Transform::from_translation(sim.0.position(idx))
                .with_scale(Vec3::ONE * body.sphere_radius),
            ..Default::default()
        });

        entity.insert(BodyIndex(idx)).insert(Name::new(body.name.clone()));

        if is_star {
            entity.insert(NotShadowCaster);
        }
    }

    commands
        .spawn(Camera3dBundle::default())
        .insert(BloomSettings::OLD_SCHOOL)
        .insert(OrbitCameraBundle::new(
            {
                let mut controller = OrbitCameraController::default();

                controller.mouse_rotate_sensitivity = Vec2::ONE * 1.0;
                controller.mouse_translate_sensitivity = Vec2::ONE * 10.0;

                controller
            },
            Vec3::new(0.0, 10.0, 30.0),
            Vec3::new(0., 0., 0.),
            Vec3::Y,
        ));
}
