use sector_trek::cli::Session;
use sector_trek::io::test_utils::{MockInput, MockOutput};
use sector_trek::models::constants::GALAXY_SIZE;
use sector_trek::models::entity::{Entity, EntityId, EntityKind};
use sector_trek::models::galaxy::Galaxy;
use sector_trek::models::player::Player;
use sector_trek::models::position::{QuadrantPosition, SectorPosition};
use sector_trek::models::quadrant::QuadrantSummary;
use sector_trek::{
    Command, DefeatReason, GameConfig, GameEngine, GameState, GameStatus, ScriptedRandom,
};

/// Ship in quadrant (2,2) at `ship`, with the given sector contents. The
/// galaxy holds `elsewhere` more Klingons in quadrant (7,7).
fn build_state(ship: SectorPosition, others: &[(i32, i32, EntityKind)], elsewhere: u32) -> GameState {
    let config = GameConfig::default();
    let quadrant = QuadrantPosition::new(2, 2);

    let mut sector = vec![Entity::new(EntityId(0), ship, EntityKind::Ship)];
    for (i, (x, y, kind)) in others.iter().enumerate() {
        sector.push(Entity::new(EntityId(i as u32 + 1), SectorPosition::new(*x, *y), *kind));
    }

    let klingons = sector.iter().filter(|e| e.is_klingon()).count() as u32;
    let starbases = sector.iter().filter(|e| e.is_starbase()).count() as u32;
    let stars = sector.iter().filter(|e| e.kind == EntityKind::Star).count() as u32;

    let mut quadrants = [[QuadrantSummary::new(0, 0, 2); GALAXY_SIZE]; GALAXY_SIZE];
    quadrants[2][2] = QuadrantSummary::new(klingons, starbases, stars);
    quadrants[7][7].klingons = elsewhere;

    let player = Player::new(quadrant, ship, &config);
    GameState::new(Galaxy::from_quadrants(quadrants), player, sector, &config)
}

fn klingon() -> EntityKind {
    EntityKind::Klingon { hit_points: 200 }
}

#[test]
fn new_game_from_seed_is_playable() {
    let engine = GameEngine::default();
    let (state, _) = engine.new_game_seeded(42);

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.player.energy, 3000.0);
    assert_eq!(state.player.torpedoes, 10);
    assert_eq!(state.player.shields, 0.0);
    assert_eq!(state.stardate, 3100.0);
    assert_eq!(state.deadline, 3130.0);
    assert!(state.log.contains("Klingons detected:"));
}

#[test]
fn same_seed_same_command_stream() {
    let engine = GameEngine::default();
    let commands = [
        Command::LongRangeScan,
        Command::Shields,
        Command::Warp { direction: 6 },
        Command::Phasers { amount: 100.0 },
        Command::Warp { direction: 2 },
        Command::Torpedo { heading: 45.0 },
    ];

    let play = || {
        let (mut state, mut rng) = engine.new_game_seeded(99);
        for command in commands {
            state = engine.execute(&state, command, &mut rng).state;
        }
        state
    };

    assert_eq!(play(), play());
}

#[test]
fn scenario_a_phasers_into_empty_sector() {
    let state = build_state(SectorPosition::new(3, 3), &[(0, 0, EntityKind::Star)], 3);
    let mut rng = ScriptedRandom::default();
    let outcome = GameEngine::default().execute(&state, Command::Phasers { amount: 250.0 }, &mut rng);

    assert!(outcome.turn_passed);
    assert_eq!(outcome.state.player.energy, 2750.0);
    assert_eq!(outcome.state.player.shields, 0.0);
    assert!(outcome.state.log.contains("Energy dissipated into space."));
}

#[test]
fn scenario_b_phaser_damage_band_and_kill_counters() {
    let engine = GameEngine::default();
    for variance in [-10, 0, 10] {
        let state = build_state(SectorPosition::new(3, 3), &[(6, 3, klingon())], 1);
        let mut rng = ScriptedRandom::default();
        rng.push_in_range(-10, 10, variance).push_in_range(50, 250, 50);
        let outcome = engine.execute(&state, Command::Phasers { amount: 300.0 }, &mut rng);

        let hp = outcome
            .state
            .klingons()
            .next()
            .and_then(|k| k.hit_points())
            .unwrap_or(0);
        let delta = 200 - hp;
        assert!((90..=110).contains(&delta), "delta {} out of band", delta);
    }

    let state = build_state(
        SectorPosition::new(3, 3),
        &[(4, 3, EntityKind::Klingon { hit_points: 50 }), (0, 7, klingon())],
        1,
    );
    let mut rng = ScriptedRandom::default();
    rng.push_in_range(-10, 10, 0)
        .push_in_range(-10, 10, 0)
        .push_in_range(50, 250, 50);
    let outcome = engine.execute(&state, Command::Phasers { amount: 600.0 }, &mut rng);

    assert_eq!(outcome.state.remaining_klingons(), state.remaining_klingons() - 1);
    assert_eq!(
        outcome.state.current_quadrant().map(|q| q.klingons),
        state.current_quadrant().map(|q| q.klingons - 1)
    );
}

#[test]
fn scenario_c_docking_cycle() {
    let engine = GameEngine::default();
    let mut state = build_state(SectorPosition::new(2, 2), &[(4, 2, EntityKind::Starbase)], 1);
    state.player.energy = 700.0;
    state.player.torpedoes = 1;
    state.player.shields = 15.0;
    let mut rng = ScriptedRandom::default();

    let docked = engine.execute(&state, Command::Warp { direction: 6 }, &mut rng).state;
    assert!(docked.player.docked);
    assert_eq!(docked.player.energy, docked.player.max_energy);
    assert_eq!(docked.player.torpedoes, 10);
    assert_eq!(docked.player.shields, 2000.0);

    let away = engine.execute(&docked, Command::Warp { direction: 4 }, &mut rng).state;
    assert!(!away.player.docked);
}

#[test]
fn scenario_d_victory_preempts_lethal_counter_fire() {
    let mut state = build_state(SectorPosition::new(3, 3), &[(3, 4, klingon())], 0);
    state.player.energy = 260.0;
    let mut rng = ScriptedRandom::default();
    rng.push_in_range(-10, 10, 0).push_in_range(50, 250, 250);

    let outcome = GameEngine::default().execute(&state, Command::Phasers { amount: 250.0 }, &mut rng);
    assert_eq!(outcome.state.status, GameStatus::Victory);
    assert!(outcome.state.player.alive);
    assert_eq!(outcome.state.player.energy, 10.0);
}

#[test]
fn scenario_e_torpedo_out_of_sector() {
    let state = build_state(SectorPosition::new(1, 6), &[], 1);
    let mut rng = ScriptedRandom::default();
    let outcome = GameEngine::default().execute(&state, Command::Torpedo { heading: 270.0 }, &mut rng);

    assert!(outcome.turn_passed);
    assert_eq!(outcome.state.player.torpedoes, 9);
    let lines: Vec<_> = outcome
        .state
        .log
        .iter()
        .filter(|e| e.text.contains("out of range"))
        .collect();
    assert_eq!(lines.len(), 1);
}

#[test]
fn warp_across_quadrant_then_barrier() {
    let engine = GameEngine::default();
    let mut state = build_state(SectorPosition::new(0, 0), &[], 1);
    state.player.quadrant = QuadrantPosition::new(0, 1);
    let mut rng = ScriptedRandom::default();

    let crossed = engine.execute(&state, Command::Warp { direction: 8 }, &mut rng);
    assert!(crossed.turn_passed);
    assert_eq!(crossed.state.player.quadrant, QuadrantPosition::new(0, 0));
    assert_eq!(crossed.state.player.sector, SectorPosition::new(0, 7));
    assert_eq!(crossed.state.sector.len(), 3);

    let mut at_edge = crossed.state.clone();
    at_edge.player.sector = SectorPosition::new(0, 0);
    at_edge.sync_ship_entity();
    at_edge.sector.retain(|e| e.is_ship());
    let blocked = engine.execute(&at_edge, Command::Warp { direction: 4 }, &mut rng);
    assert!(!blocked.turn_passed);
    assert_eq!(blocked.state.player.quadrant, QuadrantPosition::new(0, 0));
    assert_eq!(blocked.state.player.sector, SectorPosition::new(0, 0));
    assert_eq!(blocked.state.player.energy, at_edge.player.energy - 10.0);
}

#[test]
fn friendly_fire_is_terminal() {
    let engine = GameEngine::default();
    let state = build_state(SectorPosition::new(3, 3), &[(3, 0, EntityKind::Starbase)], 1);
    let mut rng = ScriptedRandom::default();

    let outcome = engine.execute(&state, Command::Torpedo { heading: 90.0 }, &mut rng);
    assert_eq!(
        outcome.state.status,
        GameStatus::Defeat(DefeatReason::StarbaseDestroyed)
    );

    let after = engine.execute(&outcome.state, Command::Shields, &mut rng);
    assert!(!after.turn_passed);
    assert_eq!(after.state, outcome.state);
}

#[test]
fn time_runs_out_while_moving() {
    let engine = GameEngine::default();
    let mut state = build_state(SectorPosition::new(3, 3), &[], 1);
    state.stardate = 3129.85;
    let mut rng = ScriptedRandom::default();

    let first = engine.execute(&state, Command::Warp { direction: 6 }, &mut rng);
    assert_eq!(first.state.status, GameStatus::Playing);
    let second = engine.execute(&first.state, Command::Warp { direction: 6 }, &mut rng);
    assert_eq!(
        second.state.status,
        GameStatus::Defeat(DefeatReason::TimeExpired)
    );
}

#[test]
fn snapshot_serializes_for_front_ends() {
    let state = build_state(SectorPosition::new(3, 3), &[(5, 5, klingon())], 0);
    let json = serde_json::to_value(state.snapshot()).expect("snapshot serializes");

    assert_eq!(json["alert_level"], "RED");
    assert_eq!(json["remaining_klingons"], 1);
    assert_eq!(json["win"], false);
    assert_eq!(json["player"]["torpedoes"], 10);
    assert_eq!(json["sector"][1]["kind"]["type"], "Klingon");
}

#[test]
fn config_overrides_flow_into_new_game() {
    let config = GameConfig::from_json(r#"{ "initial_energy": 5000.0, "initial_torpedoes": 3 }"#)
        .expect("valid config");
    let (state, _) = GameEngine::new(config).new_game_seeded(5);
    assert_eq!(state.player.energy, 5000.0);
    assert_eq!(state.player.torpedoes, 3);
}

#[test]
fn scripted_session_plays_through() {
    let mut rng = ScriptedRandom::default();
    let mut session = Session::new(GameEngine::default(), &mut rng);
    let mut input = MockInput::new(vec!["lrs", "she", "status", "warp 5", "tor abc", "quit"]);
    let mut output = MockOutput::new();

    session.run(&mut input, &mut output).expect("session completes");
    assert!(output.contains("Long Range Scan processing..."));
    assert!(output.contains("SHIELDS"));
    assert!(output.contains("Holding position."));
    assert!(output.contains("Invalid firing angle."));
    assert!(output.contains("GOODBYE, CAPTAIN."));
}
