//! Monitor system, shutdown cleanup and plugin registration.

use bevy::prelude::*;

use crate::config::SeatingConfig;
use crate::host::{InVehicle, PlayerActor, ShuffleRestriction};
use crate::SeatingSet;

use super::state::{evaluate_restriction, AntiShuffleState, MonitorPhase};

/// System: keep each actor's restriction flag in line with its seat.
///
/// Runs every frame but only recomputes when the adaptive poll interval has
/// elapsed: fast while seated, slow on foot, short while suspended so the end
/// of a window is picked up promptly.
pub fn monitor_anti_shuffle(
    time: Res<Time>,
    config: Res<SeatingConfig>,
    mut state: ResMut<AntiShuffleState>,
    mut actors: Query<(Entity, Option<&InVehicle>, &mut ShuffleRestriction), With<PlayerActor>>,
) {
    let now = time.elapsed();
    if state.lapse_if_expired(now) {
        debug!("anti-shuffle suspension lapsed");
    }
    if !state.poll_due(now) {
        return;
    }

    let suspended = state.is_suspended(now);
    let mut interval = MonitorPhase::OnFoot.interval(&config);

    for (entity, in_vehicle, mut restriction) in &mut actors {
        let (restrict, phase) = evaluate_restriction(
            config.anti_shuffle_enabled,
            suspended,
            in_vehicle.map(|v| v.seat),
            config.restricted_seat,
        );
        interval = interval.min(phase.interval(&config));

        if restriction.active != restrict {
            debug!("shuffle restriction for {entity:?}: {restrict}");
            restriction.active = restrict;
        }
    }

    state.schedule_next(now, interval);
}

/// System: on shutdown, make sure no restriction outlives this system.
pub fn release_restrictions_on_exit(
    mut exits: EventReader<AppExit>,
    mut state: ResMut<AntiShuffleState>,
    mut restrictions: Query<&mut ShuffleRestriction>,
) {
    if exits.read().count() == 0 {
        return;
    }
    for mut restriction in &mut restrictions {
        restriction.active = false;
    }
    state.reset();
    info!("seating shutdown: shuffle restrictions cleared");
}

pub struct AntiShufflePlugin;

impl Plugin for AntiShufflePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AntiShuffleState>()
            .add_systems(Update, monitor_anti_shuffle.in_set(SeatingSet::Monitor))
            .add_systems(Last, release_restrictions_on_exit);
    }
}
