//! Action routing.
//!
//! Decides which component and which crew member an attempt involves, or
//! why the attempt cannot happen at all. This is the only place that reads
//! vehicle topology; everything after it works on the routed subject.
//!
//! Routing is a pure function of the vehicle state, the check or save and the hints:
//! no randomness, no hidden state, no mutation.

mod resolution;

pub use resolution::{Resolution, RoutedSubject, RoutingFailure};

use crewroll_domain::{
    CheckDomain, CheckSpec, Component, ComponentType, CrewMember, RollAxis, SaveSpec, Vehicle,
    VehicleAttribute,
};

/// Routes checks and saves to a component and/or crew member.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionRouter;

impl ActionRouter {
    pub fn new() -> Self {
        Self
    }

    /// Route a skill (or vehicle) check.
    ///
    /// `initiating` is the crew member who chose to act, if any; an explicit
    /// actor always wins over the best-modifier pick.
    pub fn route_skill_check<'a>(
        &self,
        vehicle: Option<&'a Vehicle>,
        spec: &CheckSpec,
        initiating: Option<&'a CrewMember>,
    ) -> Resolution<'a> {
        let Some(vehicle) = vehicle else {
            return Resolution::blocked(RoutingFailure::NoVehicle);
        };

        let resolution = match spec.domain {
            CheckDomain::Vehicle => route_vehicle(
                vehicle,
                spec.axis.vehicle_attribute(),
                &spec.display_name,
            ),
            CheckDomain::Character => match spec.required_component {
                Some(component_type) => route_through_component(vehicle, component_type),
                None => match initiating {
                    Some(character) => Resolution::ready(None, Some(character)),
                    None => best_crew_for_check(vehicle, spec.axis)
                        .map(|character| Resolution::ready(None, Some(character)))
                        .unwrap_or_else(|| {
                            Resolution::blocked(RoutingFailure::NoCharacterFor(
                                spec.display_name.clone(),
                            ))
                        }),
                },
            },
        };

        log_resolution(vehicle, &spec.display_name, &resolution);
        resolution
    }

    /// Route a saving throw.
    ///
    /// `target_component` is the part of the vehicle that was hit; whoever
    /// operates it resists, if that component still works and is crewed.
    pub fn route_save<'a>(
        &self,
        vehicle: Option<&'a Vehicle>,
        spec: &SaveSpec,
        target_component: Option<&'a Component>,
    ) -> Resolution<'a> {
        let Some(vehicle) = vehicle else {
            return Resolution::blocked(RoutingFailure::NoVehicle);
        };

        let resolution = match spec.domain {
            CheckDomain::Vehicle => route_vehicle(
                vehicle,
                spec.vehicle_axis().vehicle_attribute(),
                &spec.display_name,
            ),
            CheckDomain::Character => match spec.required_component {
                Some(component_type) => route_through_component(vehicle, component_type),
                None => route_crew_save(vehicle, spec, target_component),
            },
        };

        log_resolution(vehicle, &spec.display_name, &resolution);
        resolution
    }
}

/// Subsystem that answers for a vehicle attribute.
fn component_for_attribute(vehicle: &Vehicle, attribute: VehicleAttribute) -> Option<&Component> {
    match attribute {
        VehicleAttribute::Mobility => vehicle.chassis(),
        VehicleAttribute::Structure | VehicleAttribute::Systems | VehicleAttribute::Sensors => None,
    }
}

fn route_vehicle<'a>(
    vehicle: &'a Vehicle,
    attribute: Option<VehicleAttribute>,
    display_name: &str,
) -> Resolution<'a> {
    match attribute.and_then(|attr| component_for_attribute(vehicle, attr)) {
        Some(component) => Resolution::ready(Some(component), None),
        None => Resolution::blocked(RoutingFailure::NoComponentFor(display_name.to_string())),
    }
}

/// Shared by checks and saves that need a specific kind of subsystem.
fn route_through_component(vehicle: &Vehicle, component_type: ComponentType) -> Resolution<'_> {
    // Fall back to a non-operational match so the message can name it
    let Some(component) = vehicle
        .first_operational_of_type(component_type)
        .or_else(|| vehicle.first_of_type(component_type))
    else {
        return Resolution::blocked(RoutingFailure::MissingComponent(component_type));
    };

    if !component.is_operational() {
        return Resolution::blocked(RoutingFailure::NotOperational(component.name().to_string()));
    }

    let Some(seat) = vehicle.seat_controlling(component.id()) else {
        return Resolution::blocked(RoutingFailure::NoControllingSeat(
            component.name().to_string(),
        ));
    };

    match seat.assigned_character() {
        Some(character) => Resolution::ready(Some(component), Some(character)),
        None => Resolution::blocked(RoutingFailure::UnassignedSeat(seat.name().to_string())),
    }
}

fn check_modifier(character: &CrewMember, axis: RollAxis) -> i32 {
    let ability = axis
        .character_attribute()
        .map_or(0, |attribute| character.attribute_modifier(attribute));
    let proficiency = axis
        .skill()
        .map_or(0, |skill| character.proficiency_bonus_for(skill));
    ability + proficiency
}

/// Highest modifier wins; on a tie the earlier seat keeps it.
fn best_crew_by<'a>(
    vehicle: &'a Vehicle,
    modifier: impl Fn(&CrewMember) -> i32,
) -> Option<&'a CrewMember> {
    let mut best: Option<(&CrewMember, i32)> = None;
    for character in vehicle.crew() {
        let value = modifier(character);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((character, value));
        }
    }
    best.map(|(character, _)| character)
}

fn best_crew_for_check(vehicle: &Vehicle, axis: RollAxis) -> Option<&CrewMember> {
    best_crew_by(vehicle, |character| check_modifier(character, axis))
}

fn route_crew_save<'a>(
    vehicle: &'a Vehicle,
    spec: &SaveSpec,
    target_component: Option<&'a Component>,
) -> Resolution<'a> {
    // 1. Whoever operates the hit component, if it still works
    if let Some(hit) = target_component.filter(|component| component.is_operational()) {
        if let Some(character) = vehicle
            .seat_controlling(hit.id())
            .and_then(|seat| seat.assigned_character())
        {
            return Resolution::ready(Some(hit), Some(character));
        }
    }

    // 2. Best save modifier
    let attribute = spec.save.character_attribute();
    if let Some(character) = best_crew_by(vehicle, |character| character.save_modifier(attribute)) {
        return Resolution::ready(None, Some(character));
    }

    // 3. Anyone aboard
    if let Some(character) = vehicle.crew().next() {
        return Resolution::ready(None, Some(character));
    }

    Resolution::blocked(RoutingFailure::NoCharacterForSave)
}

fn log_resolution(vehicle: &Vehicle, display_name: &str, resolution: &Resolution<'_>) {
    match resolution {
        Resolution::Ready(subject) => tracing::debug!(
            vehicle = %vehicle.name(),
            spec = display_name,
            component = subject.component.map(Component::name),
            character = subject.character.map(CrewMember::name),
            "Routed attempt"
        ),
        Resolution::Blocked(failure) => tracing::debug!(
            vehicle = %vehicle.name(),
            spec = display_name,
            reason = %failure,
            "Attempt blocked"
        ),
    }
}
