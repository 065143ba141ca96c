use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
/// Assigned in creation order by `EngineContext::next_id` and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the browser host.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Emitted once when the session reaches its terminal state.
    pub const GAME_OVER: f32 = 1.0;
    /// Score changed; `a` carries the new score.
    pub const SCORE: f32 = 2.0;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

/// DOM-facing update requested by the game for the current frame.
/// Applied by the web runner when a DOM surface is attached, ignored otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudCommand {
    /// Replace the text of the score element.
    SetScoreText(String),
    /// Make the game-over element visible.
    RevealGameOver,
}
