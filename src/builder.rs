//! The builder: rebuild orchestration and turtle interpretation.
//!
//! The entry point is [`LSystemBuilder`]. Configure its axiom, rules, and
//! procedure table, then call [`LSystemBuilder::rebuild`] with anything
//! implementing [`Host`]. The builder never owns spawned instances; it only
//! requests creation and cleanup through the host and hands back the handle
//! of the last spawn.

use crate::grammar::{self, Rule};
use crate::turtle::{Instruction, Procedure, TurtleState, default_procedures};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Iteration counts are clamped to this bound before expansion.
pub const ITERATION_LIMIT: u32 = 10;

/// The capabilities a host engine provides to the builder.
///
/// The builder stays out of the scene graph entirely: instantiation, the
/// anchor transform, and cleanup of previously generated content are all
/// the host's business.
pub trait Host {
    /// Opaque reference to a spawned instance.
    type Handle;

    /// Instantiates the template at `template_index` with the given pose,
    /// parented under the host's anchor. Returns `None` when the index is
    /// out of range.
    fn spawn(
        &mut self,
        template_index: usize,
        position: Vec3,
        rotation: Quat,
    ) -> Option<Self::Handle>;

    /// The anchor's own pose, used to seed interpretation.
    fn current_pose(&self) -> (Vec3, Quat);

    /// Destroys all previously generated instances. Templates and other
    /// protected children are the host's to keep.
    fn clear_generated(&mut self);
}

/// When the host should trigger a rebuild. Flags combine with `|`.
///
/// The builder never schedules itself; the host consults these flags in its
/// own lifecycle (startup, editor refresh, simulation tick) and calls
/// [`LSystemBuilder::rebuild`] accordingly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebuildMode(u8);

impl RebuildMode {
    pub const NONE: Self = Self(0);

    /// Rebuild once when the host initializes.
    pub const INIT: Self = Self(1);

    /// Rebuild on every host tick while editing.
    pub const EDITOR_TICK: Self = Self(1 << 1);

    /// Rebuild on every host tick while the simulation runs.
    pub const RUNTIME_TICK: Self = Self(1 << 2);

    /// Whether every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RebuildMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RebuildMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Expands an L-System grammar and interprets it as spawn commands.
///
/// All fields are plain configuration set by the host; `steps` is the
/// recorded expansion history of the most recent rebuild, useful for
/// inspectors and debugging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LSystemBuilder {
    /// Number of rewrite passes, clamped to [`ITERATION_LIMIT`].
    pub iterations: u32,

    /// The initial symbol string.
    pub axiom: String,

    /// Rewrite rules, applied in declaration order each pass.
    pub rules: Vec<Rule>,

    /// Symbol-to-instruction table. The first procedure whose code matches
    /// a symbol wins.
    pub procedures: Vec<Procedure>,

    /// When the host should call [`rebuild`](Self::rebuild).
    pub rebuild_mode: RebuildMode,

    /// Per-pass expansion history from the last rebuild, each entry
    /// truncated to [`grammar::STEP_RECORD_LIMIT`] characters.
    pub steps: Vec<String>,
}

impl Default for LSystemBuilder {
    fn default() -> Self {
        Self {
            iterations: 5,
            axiom: String::new(),
            rules: Vec::new(),
            procedures: default_procedures(),
            rebuild_mode: RebuildMode::INIT,
            steps: Vec::new(),
        }
    }
}

impl LSystemBuilder {
    /// Clears previously generated content, re-expands the grammar, and
    /// interprets the result, so consecutive rebuilds are idempotent.
    ///
    /// Returns the handle of the last successful spawn, or `None` when the
    /// expansion spawned nothing.
    pub fn rebuild<H: Host>(&mut self, host: &mut H) -> Option<H::Handle> {
        host.clear_generated();

        let expansion = grammar::expand(
            &self.axiom,
            &self.rules,
            self.iterations.min(ITERATION_LIMIT),
        );
        self.steps = expansion.steps;

        self.interpret(&expansion.symbols, host)
    }

    /// Walks `symbols` one character at a time, executing matched procedures
    /// against a fresh turtle seeded from the host's pose.
    ///
    /// Digits `1`..`9` are shorthand for spawning template `digit - 1`
    /// directly, bypassing the procedure table. Symbols with no matching
    /// procedure are silently ignored.
    fn interpret<H: Host>(&self, symbols: &str, host: &mut H) -> Option<H::Handle> {
        let (position, rotation) = host.current_pose();
        let mut turtle = TurtleState { position, rotation };
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut last_spawn = None;

        for code in symbols.chars() {
            if ('1'..='9').contains(&code) {
                let index = code as usize - '1' as usize;
                if let Some(handle) = host.spawn(index, turtle.position, turtle.rotation) {
                    last_spawn = Some(handle);
                }
                continue;
            }

            let Some(proc) = self.procedures.iter().find(|p| p.code == code) else {
                continue;
            };

            for op in &proc.instructions {
                match *op {
                    Instruction::Push => stack.push(turtle),
                    Instruction::Pop => {
                        if let Some(saved) = stack.pop() {
                            turtle = saved;
                        }
                    }
                    Instruction::Turn(euler) => turtle.turn(euler),
                    Instruction::Move(offset) => turtle.advance(offset),
                    Instruction::Spawn(index) => {
                        let Ok(index) = usize::try_from(index) else {
                            continue;
                        };
                        if let Some(handle) = host.spawn(index, turtle.position, turtle.rotation) {
                            last_spawn = Some(handle);
                        }
                    }
                }
            }
        }

        last_spawn
    }
}
