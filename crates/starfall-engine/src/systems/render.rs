use crate::assets::registry::texture_slot;
use crate::components::entity::Entity;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer from a set of entities.
/// Inactive entities and entities without a mesh are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(mesh) = &entity.mesh else {
            continue;
        };
        let material = &mesh.material;

        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
            shading: material.shading.as_f32(),
            r: material.color.r,
            g: material.color.g,
            b: material.color.b,
            emissive_r: material.emissive.r,
            emissive_g: material.emissive.g,
            emissive_b: material.emissive.b,
            map: texture_slot(material.map),
            bump_map: texture_slot(material.bump_map),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::assets::registry::TextureId;
    use crate::components::color::Color;
    use crate::components::mesh::{Material, MeshComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_copies_mesh_fields() {
        let material = Material::phong(Color::from_hex(0xFF0000)).with_map(Some(TextureId(2)));
        let entities = vec![Entity::new(EntityId(1))
            .with_pos(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.5, 0.25, 0.0))
            .with_mesh(MeshComponent::sphere(6.0, material))];

        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.instances[0];
        assert_eq!((inst.x, inst.y, inst.z), (1.0, 2.0, 3.0));
        assert_eq!(inst.radius, 6.0);
        assert_eq!(inst.rot_x, 0.5);
        assert_eq!(inst.r, 1.0);
        assert_eq!(inst.map, 2.0);
        assert_eq!(inst.bump_map, -1.0);
    }

    #[test]
    fn inactive_and_meshless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1))
            .with_mesh(MeshComponent::sphere(1.0, Material::default()));
        hidden.active = false;
        let camera_rig = Entity::new(EntityId(2));
        let visible = Entity::new(EntityId(3))
            .with_mesh(MeshComponent::sphere(1.0, Material::default()));

        let entities = vec![hidden, camera_rig, visible];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
