//! Turtle state and the instruction model for structural interpretation.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The pose of the builder turtle.
///
/// Tracks the world-space cursor that spawn commands stamp instances at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the cursor.
    pub position: Vec3,

    /// Current world-space orientation.
    pub rotation: Quat,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl TurtleState {
    /// Composes the current orientation with a rotation given as Euler angles
    /// in degrees (Y-X-Z intrinsic order). Right-multiplied, so the turn is
    /// applied in the turtle's local frame.
    pub fn turn(&mut self, euler_degrees: Vec3) {
        let rot = Quat::from_euler(
            EulerRot::YXZ,
            euler_degrees.y.to_radians(),
            euler_degrees.x.to_radians(),
            euler_degrees.z.to_radians(),
        );
        self.rotation *= rot;
    }

    /// Advances the cursor by `offset` expressed in the turtle's local frame,
    /// so movement always follows the current heading.
    pub fn advance(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }
}

/// A single turtle operation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Save the current pose onto the pose stack.
    Push,

    /// Restore the most recently pushed pose. No-op on an empty stack.
    Pop,

    /// Rotate in the local frame by Euler angles in degrees.
    Turn(Vec3),

    /// Advance by a local-space offset.
    Move(Vec3),

    /// Instantiate the indexed template at the current pose.
    /// Negative or out-of-range indices spawn nothing.
    Spawn(i32),
}

/// A named instruction sequence, matched by its single-character code
/// against the expanded symbol string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    /// The symbol this procedure responds to.
    pub code: char,

    /// Instructions executed in order when the symbol is encountered.
    pub instructions: Vec<Instruction>,
}

impl Procedure {
    pub fn new(code: char, instructions: impl Into<Vec<Instruction>>) -> Self {
        Self {
            code,
            instructions: instructions.into(),
        }
    }
}

/// The conventional procedure table:
///
/// | code | operation      |
/// |------|----------------|
/// | `[`  | Push           |
/// | `]`  | Pop            |
/// | `<`  | Turn(0, 0, 30) |
/// | `>`  | Turn(0, 0, -30)|
/// | `^`  | Move(0, 1, 0)  |
/// | `v`  | Move(0, -1, 0) |
/// | `@`  | Spawn(0)       |
///
/// Digits `1`..`9` are handled by the interpreter directly and need no
/// procedure entry.
pub fn default_procedures() -> Vec<Procedure> {
    vec![
        Procedure::new('[', [Instruction::Push]),
        Procedure::new(']', [Instruction::Pop]),
        Procedure::new('<', [Instruction::Turn(Vec3::new(0.0, 0.0, 30.0))]),
        Procedure::new('>', [Instruction::Turn(Vec3::new(0.0, 0.0, -30.0))]),
        Procedure::new('^', [Instruction::Move(Vec3::Y)]),
        Procedure::new('v', [Instruction::Move(Vec3::NEG_Y)]),
        Procedure::new('@', [Instruction::Spawn(0)]),
    ]
}
