/// Human-readable projection of an entity's current state.
///
/// Implementations must not mutate anything; reports are pure reads.
pub trait Describe {
    fn describe(&self) -> String;
}
