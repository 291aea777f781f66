use bevy::pbr::wireframe::WireframeConfig;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;

use simulation::config::{
    CELL_HEIGHT, CELL_WIDTH, PLANE_HEIGHT, PLANE_SUBDIVISIONS_X, PLANE_SUBDIVISIONS_Y, PLANE_WIDTH,
};
use simulation::heightfield::{self, ScrollOffset};
use simulation::noise_field::NoiseField;
use simulation::params::TerrainParams;

#[derive(Component)]
pub struct TerrainSurface;

/// Build the flat grid surface in the XZ plane from the nominal config
/// extents. Topology is fixed for the lifetime of the scene; only vertex
/// heights mutate afterwards.
pub fn build_surface_mesh() -> Mesh {
    let verts_x = PLANE_SUBDIVISIONS_X + 1;
    let verts_y = PLANE_SUBDIVISIONS_Y + 1;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(verts_x * verts_y);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(verts_x * verts_y);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(verts_x * verts_y);
    let mut indices: Vec<u32> =
        Vec::with_capacity(PLANE_SUBDIVISIONS_X * PLANE_SUBDIVISIONS_Y * 6);

    for r in 0..verts_y {
        for c in 0..verts_x {
            let x = -PLANE_WIDTH / 2.0 + c as f32 * CELL_WIDTH;
            let z = -PLANE_HEIGHT / 2.0 + r as f32 * CELL_HEIGHT;
            positions.push([x, 0.0, z]);
            // Normals stay flat forever; the height update never recomputes
            // them.
            normals.push([0.0, 1.0, 0.0]);
            uvs.push([
                c as f32 / PLANE_SUBDIVISIONS_X as f32,
                r as f32 / PLANE_SUBDIVISIONS_Y as f32,
            ]);
        }
    }

    for r in 0..PLANE_SUBDIVISIONS_Y {
        for c in 0..PLANE_SUBDIVISIONS_X {
            let i = (r * verts_x + c) as u32;
            let right = i + 1;
            let below = i + verts_x as u32;
            let below_right = below + 1;
            indices.extend_from_slice(&[i, below_right, right, i, below, below_right]);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

pub fn spawn_terrain_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = build_surface_mesh();
    info!("terrain surface: {} vertices", mesh.count_vertices());

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 0.9,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        TerrainSurface,
    ));
}

/// Rewrite every vertex height of the terrain surface for the current frame.
///
/// The mutable borrow from `Assets<Mesh>` is what flags the position buffer
/// for GPU re-upload; no separate dirty marking is needed.
pub fn update_terrain_heights(
    mut meshes: ResMut<Assets<Mesh>>,
    noise: Res<NoiseField>,
    offset: Res<ScrollOffset>,
    params: Res<TerrainParams>,
    surfaces: Query<&Mesh3d, With<TerrainSurface>>,
) {
    for mesh_handle in &surfaces {
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        else {
            continue;
        };
        heightfield::update_heights(positions, &noise, *offset, params.height);
    }
}

/// Copy the wireframe tunable into the global wireframe config when it
/// changes.
pub fn apply_wireframe_toggle(params: Res<TerrainParams>, mut config: ResMut<WireframeConfig>) {
    if config.global != params.wireframe {
        config.global = params.wireframe;
    }
}
