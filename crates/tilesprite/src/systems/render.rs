use crate::api::error::EngineError;
use crate::api::types::InstanceId;
use crate::components::object::Object;
use crate::core::object_type::ObjectType;
use crate::renderer::camera::Camera;
use crate::renderer::traits::RenderTarget;

/// Draw one instance if any of it is on screen.
///
/// The destination is the instance's world rectangle shifted by the camera
/// offset. Off-screen instances are skipped silently. Returns whether a blit
/// was issued. Nothing is mutated, so this can run any number of times per
/// frame.
pub fn render_object<T>(
    object_type: &ObjectType<T>,
    id: InstanceId,
    camera: &Camera,
    target: &mut impl RenderTarget<T>,
) -> Result<bool, EngineError> {
    let object = object_type.instance(id)?;
    Ok(draw(object_type, object, camera, target))
}

/// Draw every live instance of `object_type` in slot order.
/// Returns how many were drawn.
pub fn render_all<T>(
    object_type: &ObjectType<T>,
    camera: &Camera,
    target: &mut impl RenderTarget<T>,
) -> usize {
    object_type
        .instances()
        .filter(|(_, object)| draw(object_type, object, camera, &mut *target))
        .count()
}

fn draw<T>(
    object_type: &ObjectType<T>,
    object: &Object,
    camera: &Camera,
    target: &mut impl RenderTarget<T>,
) -> bool {
    let dst = camera.world_to_screen(object.position());
    if !camera.is_visible(dst) {
        log::trace!("culled instance at ({}, {})", dst.x, dst.y);
        return false;
    }

    // Counters are wrapped here; advancing never wraps them.
    let Some(src) = object.current_frame(object_type.atlas()) else {
        return false;
    };
    target.blit(object_type.spritesheet().texture(), src, dst);
    true
}
