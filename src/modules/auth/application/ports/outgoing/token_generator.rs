/// Produces unguessable opaque tokens for sessions, email verification and
/// password resets.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
