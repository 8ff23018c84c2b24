//! Paint mode: a still, paper-like terrain to orbit around. No physics
//! props; the only geometry is a noise-displaced ground sheet.

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

use crate::game::PlaygroundMode;

const SHEET_SIZE: f32 = 200.0;
const SHEET_SUBDIVISIONS: u32 = 256;
const NOISE_OCTAVES: u32 = 5;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            setup_paper_sheet.run_if(resource_equals(PlaygroundMode::Paint)),
        );
    }
}

/// Grainy fractal noise in [-1, 1]: summed sin/cos octaves with halving
/// amplitude and doubling frequency.
pub fn fractal_noise(x: f32, y: f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 0.1;
    let mut amplitude = 1.0;
    let mut max_amplitude = 0.0;
    for _ in 0..NOISE_OCTAVES {
        total += ((x * frequency + y * frequency * 1.3).sin()
            + (y * frequency * 1.7 - x * frequency).cos())
            * amplitude;
        max_amplitude += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    total / max_amplitude
}

/// Displaces a plane mesh's vertices upward by the noise field and
/// recomputes normals.
pub fn displace_by_noise(mesh: &mut Mesh) {
    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for p in positions.iter_mut() {
            p[1] += fractal_noise(p[0] * 0.5, p[2] * 0.5);
        }
    }
    mesh.compute_normals();
}

fn setup_paper_sheet(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut mesh: Mesh = Plane3d::default()
        .mesh()
        .size(SHEET_SIZE, SHEET_SIZE)
        .subdivisions(SHEET_SUBDIVISIONS)
        .into();
    displace_by_noise(&mut mesh);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
        Transform::default(),
        GlobalTransform::default(),
        Name::new("PaperSheet"),
    ));
}
