//! The running sandbox: world, player, hotbar and the tick that ties them together

use crate::commands::{movement_intent, resolve_commands, Command};
use crate::config::SandboxConfig;
use crate::hotbar::Hotbar;
use crate::interaction::{self, screen_to_cell};
use crate::snapshot::{FrameSnapshot, TileView};
use blockyard_core::{Result, Vec2};
use blockyard_physics::collision::tile_rect;
use blockyard_physics::{step_player, Arena, Player};
use blockyard_runtime::{EventBus, GameClock, GameEvent, InputState};
use blockyard_world::{BlockKind, Grid, WorldStore};

/// All mutable state of one play session. Owned by whoever drives the loop.
pub struct Sandbox {
    pub grid: Grid,
    pub player: Player,
    pub hotbar: Hotbar,
    pub show_grid: bool,
    /// Cleared once quit is requested; the driver stops at the next tick boundary
    pub running: bool,
    events: EventBus,
    config: SandboxConfig,
    arena: Arena,
    hovered: Option<(i32, i32)>,
    ticks: u64,
}

impl Sandbox {
    /// Start a session on `grid` with the player at the spawn point
    pub fn new(config: SandboxConfig, grid: Grid) -> Result<Self> {
        config.validate()?;
        let hotbar = Hotbar::new(config.hotbar.clone())?;
        let player = spawn_player(&config, &grid);
        Ok(Self {
            grid,
            player,
            hotbar,
            show_grid: false,
            running: true,
            events: EventBus::new(),
            arena: config.arena(),
            config,
            hovered: None,
            ticks: 0,
        })
    }

    /// Resume the world held by `store`, or generate fresh terrain if there
    /// is nothing usable there.
    pub fn open(config: SandboxConfig, store: &dyn WorldStore) -> Result<Self> {
        let grid = match store.load() {
            Ok(grid) => {
                log::info!("Resuming world from {}", store.describe());
                grid
            }
            Err(e) => {
                log::warn!("No usable save at {} ({}), generating terrain", store.describe(), e);
                let (w, h) = config.grid_size();
                Grid::generate(w, h)
            }
        };
        Self::new(config, grid)
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Fixed ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Run one fixed tick: apply this tick's commands, then move the player.
    /// Does nothing once the session has stopped running.
    pub fn tick(&mut self, input: &InputState, store: &mut dyn WorldStore, dt: f32) {
        if !self.running {
            return;
        }

        let pointer = input.pointer_position();
        let cell = screen_to_cell(pointer.x, pointer.y, self.arena.tile_size);
        self.hovered = self.grid.in_bounds(cell.0, cell.1).then_some(cell);

        for command in resolve_commands(input, self.arena.tile_size) {
            self.apply(command, store);
        }

        let intent = movement_intent(input);
        let outcome = step_player(
            &mut self.player,
            intent,
            &self.grid,
            &self.arena,
            &self.config.physics,
            dt,
        );
        if outcome.landed {
            self.events.push(GameEvent::Landed {
                y: self.player.position.y,
            });
        }
        if outcome.hit_ceiling {
            self.events.push(GameEvent::HitCeiling {
                y: self.player.position.y,
            });
        }
        self.ticks += 1;
    }

    /// Advance the clock by `elapsed` seconds and run every fixed tick that
    /// became due. Edge-triggered input is consumed by the first of them.
    /// Returns the number of ticks run.
    pub fn frame(
        &mut self,
        clock: &mut GameClock,
        input: &mut InputState,
        store: &mut dyn WorldStore,
        elapsed: f64,
    ) -> u32 {
        clock.advance(elapsed);
        let dt = clock.step_seconds();
        let mut ran = 0;
        while self.running && clock.should_fixed_update() {
            self.tick(input, store, dt);
            input.end_frame();
            clock.consume_fixed_step();
            ran += 1;
        }
        ran
    }

    fn apply(&mut self, command: Command, store: &mut dyn WorldStore) {
        match command {
            Command::Quit => {
                if self.running {
                    self.running = false;
                    self.events.push(GameEvent::QuitRequested);
                }
            }
            Command::ToggleGrid => {
                self.show_grid = !self.show_grid;
                self.events.push(GameEvent::GridToggled(self.show_grid));
            }
            Command::Save => self.save(store),
            Command::Load => self.load(store),
            Command::SelectSlot(number) => {
                if self.hotbar.select(number) {
                    self.push_selection();
                }
            }
            Command::Scroll(steps) => {
                self.hotbar.scroll(steps);
                self.push_selection();
            }
            Command::Place { x, y } => {
                let kind = self.hotbar.selected();
                if interaction::place(&mut self.grid, (x, y), kind) {
                    self.events.push(GameEvent::BlockPlaced { x, y, kind });
                }
            }
            Command::Remove { x, y } => {
                if let Some(kind) = interaction::remove(&mut self.grid, (x, y)) {
                    self.events.push(GameEvent::BlockRemoved { x, y, kind });
                }
            }
        }
    }

    pub fn save(&mut self, store: &mut dyn WorldStore) {
        let location = store.describe();
        match store.save(&self.grid) {
            Ok(()) => self.events.push(GameEvent::WorldSaved { location }),
            Err(e) => {
                log::warn!("Saving to {} failed: {}", location, e);
                self.events.push(GameEvent::SaveFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Replace the grid with the stored one. On failure the current grid
    /// stays exactly as it was.
    pub fn load(&mut self, store: &dyn WorldStore) {
        let location = store.describe();
        match store.load() {
            Ok(grid) => {
                self.grid = grid;
                self.events.push(GameEvent::WorldLoaded { location });
            }
            Err(e) => {
                log::warn!("Loading from {} failed: {}", location, e);
                self.events.push(GameEvent::LoadFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    fn push_selection(&mut self) {
        self.events.push(GameEvent::HotbarSelected {
            index: self.hotbar.index(),
            kind: self.hotbar.selected(),
        });
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let tile = self.arena.tile_size;
        let tiles = self
            .grid
            .iter()
            .filter(|&(_, _, kind)| kind != BlockKind::Air)
            .map(|(x, y, kind)| TileView {
                x,
                y,
                kind,
                rect: tile_rect(x, y, tile),
            })
            .collect();
        FrameSnapshot {
            tile_size: tile,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            tiles,
            player: self.player.rect(),
            hotbar: self.hotbar.slots().to_vec(),
            selected: self.hotbar.index(),
            hovered: self.hovered,
            show_grid: self.show_grid,
        }
    }
}

/// Spawn point: just right of the middle column, five rows above the middle
/// row, so the player drops onto the generated surface. If terrain in that
/// column reaches higher, the player is lifted to stand on top of it.
pub fn spawn_player(config: &SandboxConfig, grid: &Grid) -> Player {
    let tile = config.tile();
    let size = config.player_size();
    let column = grid.width() / 2;
    let row = (grid.height() / 2) as f32 - 5.0;
    let mut position = Vec2::new(column as f32 * tile + 2.0, row * tile);
    if let Some(surface) = grid.surface_y(column as i32) {
        position.y = position.y.min(surface as f32 * tile - size.y);
    }
    Player::new(position, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_core::BlockyardError;
    use blockyard_runtime::{Key, PointerButton};

    const DT: f32 = 1.0 / 60.0;

    /// Keeps the saved world in memory and can be told to fail
    #[derive(Default)]
    struct MemoryStore {
        saved: Option<Grid>,
        fail_saves: bool,
    }

    impl WorldStore for MemoryStore {
        fn load(&self) -> blockyard_core::Result<Grid> {
            self.saved
                .clone()
                .ok_or_else(|| BlockyardError::SaveNotFound("memory".to_string()))
        }

        fn save(&mut self, grid: &Grid) -> blockyard_core::Result<()> {
            if self.fail_saves {
                return Err(BlockyardError::IoError(std::io::Error::other("disk full")));
            }
            self.saved = Some(grid.clone());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn sandbox() -> Sandbox {
        Sandbox::new(SandboxConfig::default(), Grid::generate(30, 20)).unwrap()
    }

    fn click(input: &mut InputState, button: PointerButton, cell: (i32, i32)) {
        input.process_pointer_move(cell.0 as f32 * 32.0 + 5.0, cell.1 as f32 * 32.0 + 5.0);
        input.process_pointer_down(button);
    }

    #[test]
    fn player_spawns_above_the_middle() {
        let sandbox = sandbox();
        assert_eq!(sandbox.player.position, Vec2::new(482.0, 160.0));
        assert_eq!(sandbox.player.size, Vec2::new(28.0, 57.6));
        assert!(!sandbox.player.on_ground);
    }

    #[test]
    fn spawn_is_lifted_above_a_tall_column() {
        let config = SandboxConfig::default();
        let mut grid = Grid::new(30, 20);
        for y in 2..20 {
            grid.set(15, y, BlockKind::Stone);
        }
        let player = spawn_player(&config, &grid);
        assert_eq!(player.position.x, 482.0);
        assert!((player.rect().bottom() - 64.0).abs() < 1e-4);
        assert!(!blockyard_physics::collision::collides(&grid, &player.rect(), config.tile()));

        // an empty column keeps the usual spawn height
        let player = spawn_player(&config, &Grid::new(30, 20));
        assert_eq!(player.position, Vec2::new(482.0, 160.0));
    }

    #[test]
    fn player_falls_onto_the_surface() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let input = InputState::new();
        for _ in 0..120 {
            sandbox.tick(&input, &mut store, DT);
        }
        assert!(sandbox.player.on_ground);
        // column 15 has its surface at row 10
        assert!((sandbox.player.rect().bottom() - 320.0).abs() < 1e-3);
        let landings: Vec<_> = sandbox
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Landed { .. }))
            .collect();
        assert_eq!(landings.len(), 1);
    }

    #[test]
    fn clicks_place_and_remove_blocks() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();

        click(&mut input, PointerButton::Primary, (3, 5));
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.grid.get(3, 5), Some(BlockKind::Dirt));
        input.process_pointer_up(PointerButton::Primary);
        input.end_frame();

        // occupied: nothing happens
        input.process_key_down(Key::Digit4);
        click(&mut input, PointerButton::Primary, (3, 5));
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.grid.get(3, 5), Some(BlockKind::Dirt));
        input.end_frame();

        click(&mut input, PointerButton::Secondary, (3, 5));
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.grid.get(3, 5), Some(BlockKind::Air));

        assert_eq!(
            sandbox.drain_events(),
            vec![
                GameEvent::BlockPlaced { x: 3, y: 5, kind: BlockKind::Dirt },
                GameEvent::HotbarSelected { index: 3, kind: BlockKind::Wood },
                GameEvent::BlockRemoved { x: 3, y: 5, kind: BlockKind::Dirt },
            ]
        );
    }

    #[test]
    fn scroll_cycles_the_hotbar() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();

        input.process_scroll(-1);
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.hotbar.index(), 3);
        input.end_frame();

        input.process_scroll(2);
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.hotbar.index(), 1);
        assert_eq!(sandbox.snapshot().status_line(), "Selected: 2 - grass");
    }

    #[test]
    fn save_then_load_restores_the_grid() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();

        sandbox.save(&mut store);
        let saved = sandbox.grid.clone();
        sandbox.grid.set(0, 0, BlockKind::Wood);
        sandbox.load(&store);

        assert_eq!(sandbox.grid, saved);
        assert_eq!(
            sandbox.drain_events(),
            vec![
                GameEvent::WorldSaved { location: "memory".to_string() },
                GameEvent::WorldLoaded { location: "memory".to_string() },
            ]
        );
    }

    #[test]
    fn failed_load_keeps_the_current_grid() {
        let mut sandbox = sandbox();
        let store = MemoryStore::default();
        sandbox.grid.set(0, 0, BlockKind::Wood);
        let before = sandbox.grid.clone();

        sandbox.load(&store);
        assert_eq!(sandbox.grid, before);
        assert!(matches!(
            sandbox.drain_events().as_slice(),
            [GameEvent::LoadFailed { .. }]
        ));
    }

    #[test]
    fn failed_save_is_reported() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore {
            fail_saves: true,
            ..Default::default()
        };
        sandbox.save(&mut store);
        match sandbox.drain_events().as_slice() {
            [GameEvent::SaveFailed { reason }] => assert!(reason.contains("disk full")),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn ctrl_shortcuts_drive_the_store() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();

        input.process_key_down(Key::ControlLeft);
        input.process_key_down(Key::S);
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(store.saved.as_ref(), Some(&sandbox.grid));
    }

    #[test]
    fn quit_stops_the_session() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();

        input.process_key_down(Key::Escape);
        sandbox.tick(&input, &mut store, DT);
        assert!(!sandbox.running);
        assert_eq!(sandbox.ticks(), 1);

        input.end_frame();
        input.process_quit_signal();
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.ticks(), 1);
        assert_eq!(sandbox.drain_events(), vec![GameEvent::QuitRequested]);
    }

    #[test]
    fn toggle_grid_shows_in_snapshot() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();

        input.process_key_down(Key::G);
        input.process_pointer_move(100.0, 50.0);
        sandbox.tick(&input, &mut store, DT);

        let snapshot = sandbox.snapshot();
        assert!(snapshot.show_grid);
        assert_eq!(snapshot.hovered, Some((3, 1)));
        assert_eq!(snapshot.grid_width, 30);
        assert_eq!(snapshot.tiles.len(), sandbox.grid.iter().filter(|c| c.2 != BlockKind::Air).count());
        assert!(snapshot.tiles.iter().all(|t| t.color().is_some()));
    }

    #[test]
    fn pointer_outside_the_grid_hovers_nothing() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();
        input.process_pointer_move(-10.0, 5000.0);
        input.process_pointer_down(PointerButton::Primary);
        sandbox.tick(&input, &mut store, DT);
        assert_eq!(sandbox.snapshot().hovered, None);
        assert!(sandbox.drain_events().is_empty());
    }

    #[test]
    fn open_falls_back_to_generated_terrain() {
        let store = MemoryStore::default();
        let sandbox = Sandbox::open(SandboxConfig::default(), &store).unwrap();
        assert_eq!(sandbox.grid, Grid::generate(30, 20));

        let mut saved = Grid::new(30, 20);
        saved.set(1, 1, BlockKind::Stone);
        let store = MemoryStore {
            saved: Some(saved.clone()),
            ..Default::default()
        };
        let sandbox = Sandbox::open(SandboxConfig::default(), &store).unwrap();
        assert_eq!(sandbox.grid, saved);
    }

    #[test]
    fn frame_runs_due_ticks_and_consumes_clicks_once() {
        let mut sandbox = sandbox();
        let mut store = MemoryStore::default();
        let mut input = InputState::new();
        let mut clock = GameClock::with_tick_rate(60);

        input.process_scroll(1);
        let ran = sandbox.frame(&mut clock, &mut input, &mut store, 3.5 / 60.0);
        assert_eq!(ran, 3);
        assert_eq!(sandbox.ticks(), 3);
        // scrolled once, not once per tick
        assert_eq!(sandbox.hotbar.index(), 1);
    }
}
