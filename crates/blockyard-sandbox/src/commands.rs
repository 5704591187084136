//! Turning raw input into sandbox commands
//!
//! Edge-triggered input (key presses, clicks, scroll) becomes discrete
//! [`Command`]s, applied in the order they are listed here. Held movement keys
//! become a [`MoveIntent`] for physics.

use crate::interaction::screen_to_cell;
use blockyard_physics::MoveIntent;
use blockyard_runtime::{actions, InputState, PointerButton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleGrid,
    Save,
    Load,
    /// 1-based hotbar slot number
    SelectSlot(usize),
    Place { x: i32, y: i32 },
    Remove { x: i32, y: i32 },
    /// Net wheel movement: negative is up
    Scroll(i32),
}

/// Commands triggered since the last tick, in application order
pub fn resolve_commands(input: &InputState, tile_size: f32) -> Vec<Command> {
    let mut commands = Vec::new();

    if input.quit_signal() || input.is_action_just_pressed(actions::QUIT) {
        commands.push(Command::Quit);
    }
    if input.is_action_just_pressed(actions::TOGGLE_GRID) {
        commands.push(Command::ToggleGrid);
    }
    if input.is_action_just_pressed(actions::SAVE) {
        commands.push(Command::Save);
    }
    if input.is_action_just_pressed(actions::LOAD) {
        commands.push(Command::Load);
    }
    for (i, action) in actions::HOTBAR_SLOTS.iter().enumerate() {
        if input.is_action_just_pressed(action) {
            commands.push(Command::SelectSlot(i + 1));
        }
    }

    let pointer = input.pointer_position();
    let (x, y) = screen_to_cell(pointer.x, pointer.y, tile_size);
    if input.is_pointer_just_pressed(PointerButton::Primary) {
        commands.push(Command::Place { x, y });
    }
    if input.is_pointer_just_pressed(PointerButton::Secondary) {
        commands.push(Command::Remove { x, y });
    }

    let steps = input.scroll_steps();
    if steps != 0 {
        commands.push(Command::Scroll(steps));
    }

    commands
}

/// Movement the player is asking for right now
pub fn movement_intent(input: &InputState) -> MoveIntent {
    MoveIntent {
        left: input.is_action_pressed(actions::MOVE_LEFT),
        right: input.is_action_pressed(actions::MOVE_RIGHT),
        jump: input.is_action_pressed(actions::JUMP),
    }
}
