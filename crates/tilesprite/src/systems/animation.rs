//! Animation system — steps every instance's frame counters.

use crate::api::error::EngineError;
use crate::core::object_type::ObjectType;
use crate::core::time::AnimationClock;

/// Advance every live instance of `object_type` by `steps` frames.
///
/// Call this once per game tick, before rendering.
pub fn tick_animations<T>(object_type: &mut ObjectType<T>, steps: u32) -> Result<(), EngineError> {
    if steps == 0 {
        return Ok(());
    }
    object_type.advance_all(steps)
}

/// Feed frame time into `clock` and advance by however many steps are due.
/// Returns the number of steps taken.
pub fn tick_animations_dt<T>(
    object_type: &mut ObjectType<T>,
    clock: &mut AnimationClock,
    dt: f32,
) -> Result<u32, EngineError> {
    let steps = clock.advance(dt);
    tick_animations(object_type, steps)?;
    Ok(steps)
}
