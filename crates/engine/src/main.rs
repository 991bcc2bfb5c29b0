//! crewroll engine - scripted demo turn.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewroll_domain::{
    Attribute, CauseRef, CheckSpec, CombatEvent, Component, ComponentType, CrewMember, DamageType,
    EntityRef, SaveSpec, SaveType, Seat, SeatRole, Skill, StatAxis, StatModifier, Vehicle,
    VehicleAttribute, VehicleId,
};
use crewroll_engine::infrastructure::{
    combat_log::InMemoryCombatLog, modifier_store::InMemoryModifierStore,
};
use crewroll_engine::{Attempt, CombatSession, EngineSettings};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    let settings = EngineSettings::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(seed = ?settings.rng_seed, "Starting crewroll demo turn");

    let rover = build_rover()?;
    let pilot = crew_in(&rover, "Cockpit")?;
    let gunner = crew_in(&rover, "Turret")?;
    let hull = component_named(&rover, "Hull")?;
    let cannon = component_named(&rover, "Autocannon")?;
    let rover_ref = EntityRef::Vehicle(rover.id());
    let raider = EntityRef::Vehicle(VehicleId::new());

    let modifiers = Arc::new(InMemoryModifierStore::new());
    modifiers.add(
        EntityRef::Character(pilot.id()),
        StatAxis::Ability(Attribute::Dex),
        StatModifier::new("Reflex stims", 1),
    );
    modifiers.add(
        EntityRef::Component(cannon.id()),
        StatAxis::Skill(Skill::Gunnery),
        StatModifier::new("Bent barrel", -1),
    );
    let log = Arc::new(InMemoryCombatLog::new());
    let mut session = CombatSession::from_settings(&settings, modifiers, log.clone());

    // Incoming fire hits the hull; whoever flies it dodges.
    let dodge = session.attempt_save(
        Some(&rover),
        &SaveSpec::character(SaveType::Evasion, "Evade raider fire"),
        14,
        Some(hull),
        CauseRef::Component(cannon.id()),
        raider,
    );
    report("Evade raider fire", &dodge);

    // Return fire: the attack and its damage are one action.
    let gunner_ref = EntityRef::Character(gunner.id());
    let cause = CauseRef::Component(cannon.id());
    let attack = session.within_action(gunner_ref, cause.clone(), Some(raider), |session| {
        let attack = session.attempt_attack(
            Some(&rover),
            &CheckSpec::skill(Skill::Gunnery, "Fire autocannon").requiring(ComponentType::Weapon),
            13,
            None,
            cause.clone(),
            raider,
        );
        if attack.succeeded() {
            let dice = if attack.outcome.is_crit() { 2 } else { 1 };
            for (amount, damage_type) in [(6 * dice, DamageType::Kinetic), (2, DamageType::Thermal)] {
                session.emit(CombatEvent::Damage {
                    source: gunner_ref,
                    target: raider,
                    cause: cause.clone(),
                    amount,
                    damage_type,
                });
            }
        }
        attack
    });
    report("Fire autocannon", &attack);

    // Nobody's action: the storm just happens.
    session.emit(CombatEvent::Damage {
        source: rover_ref,
        target: EntityRef::Component(hull.id()),
        cause: CauseRef::Environment("Dust storm".to_string()),
        amount: 3,
        damage_type: DamageType::Collision,
    });

    // The sensor mast has no station, so this never rolls.
    let scan = session.attempt_skill_check(
        Some(&rover),
        &CheckSpec::skill(Skill::Perception, "Scan the ridge").requiring(ComponentType::Sensors),
        12,
        None,
        CauseRef::Skill(Skill::Perception),
        None,
    );
    report("Scan the ridge", &scan);

    println!("{}", serde_json::to_string_pretty(&log.entries())?);
    Ok(())
}

fn build_rover() -> anyhow::Result<Vehicle> {
    let hull = Component::chassis("Hull", 40).with_base_value(VehicleAttribute::Mobility, 2);
    let cannon = Component::new("Autocannon", ComponentType::Weapon, 15);
    let mast = Component::new("Sensor mast", ComponentType::Sensors, 10);

    let pilot = CrewMember::new("Ria Voss", 5)
        .with_ability(Attribute::Dex, 16)
        .with_proficiency(Skill::Piloting);
    let gunner = CrewMember::new("Tomas Hale", 3)
        .with_ability(Attribute::Dex, 14)
        .with_proficiency(Skill::Gunnery);

    let cockpit = Seat::new("Cockpit")
        .with_role(SeatRole::Pilot)
        .controlling(hull.id())
        .with_occupant(Arc::new(pilot));
    let turret = Seat::new("Turret")
        .with_role(SeatRole::Gunner)
        .controlling(cannon.id())
        .with_occupant(Arc::new(gunner));

    Ok(Vehicle::new(
        "Dust Runner",
        vec![hull, cannon, mast],
        vec![cockpit, turret],
    )?)
}

fn crew_in<'a>(vehicle: &'a Vehicle, seat: &str) -> anyhow::Result<&'a CrewMember> {
    vehicle
        .seats()
        .iter()
        .find(|candidate| candidate.name() == seat)
        .and_then(Seat::assigned_character)
        .ok_or_else(|| anyhow::anyhow!("{} is empty", seat))
}

fn component_named<'a>(vehicle: &'a Vehicle, name: &str) -> anyhow::Result<&'a Component> {
    vehicle
        .components()
        .iter()
        .find(|component| component.name() == name)
        .ok_or_else(|| anyhow::anyhow!("no component named {}", name))
}

fn report(label: &str, attempt: &Attempt) {
    match attempt.failure_reason() {
        Some(reason) => tracing::info!(attempt = label, %reason, "Not possible"),
        None => tracing::info!(
            attempt = label,
            roll = %attempt.outcome.breakdown(),
            degree = ?attempt.outcome.degree(),
            "Rolled"
        ),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
