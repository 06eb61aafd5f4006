//! # TestScene: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `SeatingPlugin` and the reference host so
//! tests can place a player and some vehicles, press keys, type commands and
//! advance time without a window or an engine.
//!
//! Time advances by a fixed [`TestScene::TICK`] per update, so elapsed time
//! is exact and cooldowns or suspension windows can be stepped through.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::anti_shuffle::AntiShuffleState;
use crate::commands::ChatCommand;
use crate::config::SeatingConfig;
use crate::entry::{DefaultEntrySuppression, EntryAttempt, EntryAttemptLog};
use crate::host::{
    ActorCondition, DoorLock, EnteringVehicle, InVehicle, PlayerActor, ShuffleRestriction,
    VehicleAnchors, VehicleSeats,
};
use crate::notices::NoticeLog;
use crate::seat::SeatId;
use crate::sim_host::{ExitVehicleRequest, SimHostPlugin};
use crate::SeatingPlugin;

pub struct TestScene {
    app: App,
    player: Entity,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    /// Simulated time per update.
    pub const TICK: Duration = Duration::from_millis(50);

    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A scene with default configuration and a player at the origin.
    pub fn new() -> Self {
        Self::with_config(SeatingConfig::default())
    }

    pub fn with_config(config: SeatingConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Self::TICK));
        // No InputPlugin: presses are driven by hand and cleared in `press`.
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(config);
        app.add_plugins((SeatingPlugin, SimHostPlugin));

        let player = app
            .world_mut()
            .spawn((PlayerActor, Transform::default()))
            .id();

        // Run one update so Startup systems execute.
        app.update();
        Self { app, player }
    }

    // -----------------------------------------------------------------------
    // Scene setup
    // -----------------------------------------------------------------------

    /// Spawn an unlocked, empty vehicle at `position` facing -Z.
    pub fn spawn_vehicle(&mut self, position: Vec3, anchors: VehicleAnchors) -> Entity {
        self.app
            .world_mut()
            .spawn((
                Transform::from_translation(position),
                anchors,
                VehicleSeats::default(),
                DoorLock::unlocked(),
            ))
            .id()
    }

    pub fn spawn_car(&mut self, position: Vec3) -> Entity {
        self.spawn_vehicle(position, VehicleAnchors::four_door())
    }

    pub fn lock(&mut self, vehicle: Entity) {
        self.app
            .world_mut()
            .entity_mut(vehicle)
            .insert(DoorLock::locked());
    }

    /// Spawn a non-player occupant directly in `seat`.
    pub fn seat_npc(&mut self, vehicle: Entity, seat: SeatId) -> Entity {
        let npc = self
            .app
            .world_mut()
            .spawn((Transform::default(), InVehicle { vehicle, seat }))
            .id();
        self.set_occupant(vehicle, seat, npc);
        npc
    }

    /// Put the player straight into `seat`, bypassing entry.
    pub fn seat_player(&mut self, vehicle: Entity, seat: SeatId) {
        let player = self.player;
        self.app
            .world_mut()
            .entity_mut(player)
            .insert(InVehicle { vehicle, seat });
        self.set_occupant(vehicle, seat, player);
    }

    fn set_occupant(&mut self, vehicle: Entity, seat: SeatId, occupant: Entity) {
        if let Some(mut seats) = self.app.world_mut().get_mut::<VehicleSeats>(vehicle) {
            seats.set(seat, Some(occupant));
        }
    }

    pub fn move_player_to(&mut self, position: Vec3) {
        let player = self.player;
        if let Some(mut transform) = self.app.world_mut().get_mut::<Transform>(player) {
            transform.translation = position;
        }
    }

    pub fn set_condition(&mut self, condition: ActorCondition) {
        let player = self.player;
        self.app.world_mut().entity_mut(player).insert(condition);
    }

    pub fn set_entering(&mut self, vehicle: Entity) {
        let player = self.player;
        self.app
            .world_mut()
            .entity_mut(player)
            .insert(EnteringVehicle(vehicle));
    }

    // -----------------------------------------------------------------------
    // Input and time
    // -----------------------------------------------------------------------

    /// Press and release `key` over one update. Returns true when the press
    /// was still visible as "just pressed" after the seating systems ran,
    /// i.e. when a default handler later in the frame would have seen it.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.app.update();
        let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        let survived = input.just_pressed(key);
        input.release(key);
        input.clear();
        survived
    }

    /// Type a chat line and run one update.
    pub fn chat(&mut self, line: &str) {
        self.app.world_mut().send_event(ChatCommand::new(line));
        self.app.update();
    }

    /// Send any event and run one update.
    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
        self.app.update();
    }

    pub fn exit_vehicle(&mut self, actor: Entity) {
        self.send(ExitVehicleRequest { actor });
    }

    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Run updates until at least `duration` of simulated time has passed.
    pub fn advance(&mut self, duration: Duration) {
        let ticks = duration.as_millis().div_ceil(Self::TICK.as_millis());
        self.tick(ticks as u32);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn elapsed(&self) -> Duration {
        self.app.world().resource::<Time>().elapsed()
    }

    pub fn player_ride(&self) -> Option<InVehicle> {
        self.app.world().get::<InVehicle>(self.player).copied()
    }

    pub fn player_seat(&self) -> Option<SeatId> {
        self.player_ride().map(|ride| ride.seat)
    }

    pub fn ride_of(&self, actor: Entity) -> Option<InVehicle> {
        self.app.world().get::<InVehicle>(actor).copied()
    }

    pub fn restriction_active(&self) -> bool {
        self.app
            .world()
            .get::<ShuffleRestriction>(self.player)
            .is_some_and(|r| r.active)
    }

    pub fn seats(&self, vehicle: Entity) -> VehicleSeats {
        self.app
            .world()
            .get::<VehicleSeats>(vehicle)
            .cloned()
            .unwrap_or_default()
    }

    pub fn last_attempt(&self) -> Option<EntryAttempt> {
        self.resource::<EntryAttemptLog>().last().copied()
    }

    pub fn suppression_active(&self) -> bool {
        self.resource::<DefaultEntrySuppression>().active
    }

    pub fn notices(&self) -> &NoticeLog {
        self.resource::<NoticeLog>()
    }

    pub fn state(&self) -> &AntiShuffleState {
        self.resource::<AntiShuffleState>()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
