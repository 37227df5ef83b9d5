//! Unit types and live unit instances.
//!
//! A [`UnitType`] is the immutable catalog entry. A [`Unit`] is a live game
//! piece with its own identity and owner. Units are owned values: moving a
//! unit to a new owner or onto a transport consumes it, so no two owners
//! ever hold the same unit.

use serde::{Deserialize, Serialize};

use crate::buildable::{Cost, Prerequisites};
use crate::error::CargoError;
use crate::ids::{CityId, MapSquare, PlayerId, UnitId};

/// Where a unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Land units.
    Land,
    /// Ships.
    Sea,
    /// Aircraft and missiles.
    Air,
}

/// Every unit type in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitKind {
    /// Air superiority fighter.
    Fighter,
    /// Heavy bomber.
    Bomber,
    /// Nuclear missile.
    Nuclear,
    /// Coastal galley.
    Trireme,
    /// Sailing ship.
    Sail,
    /// Armed sailing ship.
    Frigate,
    /// Steam-powered armored ship.
    Ironclad,
    /// Troop transport.
    Transport,
    /// Cruiser.
    Cruiser,
    /// Battleship.
    Battleship,
    /// Aircraft carrier.
    Carrier,
    /// Submarine.
    Submarine,
}

impl UnitKind {
    /// All unit types in canonical catalog order.
    pub const ALL: [Self; 12] = [
        Self::Fighter,
        Self::Bomber,
        Self::Nuclear,
        Self::Trireme,
        Self::Sail,
        Self::Frigate,
        Self::Ironclad,
        Self::Transport,
        Self::Cruiser,
        Self::Battleship,
        Self::Carrier,
        Self::Submarine,
    ];

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fighter => "fighter",
            Self::Bomber => "bomber",
            Self::Nuclear => "nuclear",
            Self::Trireme => "trireme",
            Self::Sail => "sail",
            Self::Frigate => "frigate",
            Self::Ironclad => "ironclad",
            Self::Transport => "transport",
            Self::Cruiser => "cruiser",
            Self::Battleship => "battleship",
            Self::Carrier => "carrier",
            Self::Submarine => "submarine",
        }
    }

    /// Domain this unit moves in.
    #[must_use]
    pub const fn domain(self) -> Domain {
        match self {
            Self::Fighter | Self::Bomber | Self::Nuclear => Domain::Air,
            _ => Domain::Sea,
        }
    }
}

/// Catalog descriptor for a unit type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnitType {
    /// Which unit this is.
    pub kind: UnitKind,
    /// Display name.
    pub name: String,
    /// Domain, fixed by the kind.
    pub domain: Domain,
    /// Cost attributes.
    pub cost: Cost,
    /// Technology gating, including obsolescence.
    pub prerequisites: Prerequisites,
    /// Attack strength.
    pub attack: u16,
    /// Defense strength.
    pub defense: u16,
    /// Movement points per turn.
    pub movement: u8,
    /// Turns an aircraft can stay aloft. 0 means unlimited.
    pub range: u8,
    /// Enemy players only see this unit from an adjacent square.
    pub visible_only_adjacent: bool,
    /// Units the hold can carry.
    pub capacity: u8,
    /// Domain of units the hold accepts.
    pub carries: Option<Domain>,
    /// Must end its turn next to land.
    pub coastal_only: bool,
    /// Cannot attack; exists only to ferry units.
    pub transport_only: bool,
}

impl UnitType {
    pub(crate) fn new(
        kind: UnitKind,
        name: String,
        cost: Cost,
        prerequisites: Prerequisites,
    ) -> Self {
        Self {
            kind,
            name,
            domain: kind.domain(),
            cost,
            prerequisites,
            attack: 0,
            defense: 0,
            movement: 1,
            range: 0,
            visible_only_adjacent: false,
            capacity: 0,
            carries: None,
            coastal_only: false,
            transport_only: false,
        }
    }

    pub(crate) fn with_combat(mut self, attack: u16, defense: u16, movement: u8) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.movement = movement;
        self
    }

    pub(crate) fn with_cargo(mut self, capacity: u8, carries: Option<Domain>) -> Self {
        self.capacity = capacity;
        self.carries = carries;
        self
    }

    /// Whether this unit type has a cargo hold.
    #[must_use]
    pub fn can_carry_units(&self) -> bool {
        self.capacity > 0 && self.carries.is_some()
    }

    /// Whether this unit type can attack.
    #[must_use]
    pub fn is_combatant(&self) -> bool {
        self.attack > 0 && !self.transport_only
    }
}

/// Who a live unit belongs to. Exactly one owner, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOwner {
    /// Supported by a city (fresh from its production queue).
    City(CityId),
    /// Standing on a map square for a player.
    Field {
        /// Where the unit stands.
        square: MapSquare,
        /// Who owns it.
        player: PlayerId,
    },
}

/// A live unit.
///
/// Only the catalog's factory creates units. Cloning yields a snapshot with
/// the same identity, used for event payloads and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    id: UnitId,
    kind: UnitKind,
    owner: UnitOwner,
    veteran: bool,
    moves_left: u8,
    cargo: Vec<Unit>,
}

/// A unit refused by a transport, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCargo {
    /// Why it was refused.
    pub error: CargoError,
    /// The refused unit.
    pub unit: Unit,
}

impl Unit {
    pub(crate) fn new(id: UnitId, unit_type: &UnitType, owner: UnitOwner) -> Self {
        Self {
            id,
            kind: unit_type.kind,
            owner,
            veteran: false,
            moves_left: unit_type.movement,
            cargo: Vec::new(),
        }
    }

    /// Unique identity of this unit.
    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Catalog entry this unit was built from.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> UnitOwner {
        self.owner
    }

    /// Supporting city, if city-owned.
    #[must_use]
    pub const fn home_city(&self) -> Option<CityId> {
        match self.owner {
            UnitOwner::City(city) => Some(city),
            UnitOwner::Field { .. } => None,
        }
    }

    /// Map square, if placed on the map.
    #[must_use]
    pub const fn location(&self) -> Option<MapSquare> {
        match self.owner {
            UnitOwner::Field { square, .. } => Some(square),
            UnitOwner::City(_) => None,
        }
    }

    /// Owning player, if placed on the map.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match self.owner {
            UnitOwner::Field { player, .. } => Some(player),
            UnitOwner::City(_) => None,
        }
    }

    /// Whether the unit is a veteran.
    #[must_use]
    pub const fn is_veteran(&self) -> bool {
        self.veteran
    }

    /// Movement points left this turn.
    #[must_use]
    pub const fn moves_left(&self) -> u8 {
        self.moves_left
    }

    /// Units aboard, in loading order.
    #[must_use]
    pub fn cargo(&self) -> &[Unit] {
        &self.cargo
    }

    /// Make this unit a veteran.
    pub fn promote(&mut self) {
        self.veteran = true;
    }

    /// Hand the unit to a new owner. Units aboard travel with it.
    #[must_use]
    pub fn relocate(mut self, owner: UnitOwner) -> Self {
        self.set_owner(owner);
        self
    }

    fn set_owner(&mut self, owner: UnitOwner) {
        self.owner = owner;
        for unit in &mut self.cargo {
            unit.set_owner(owner);
        }
    }

    /// Spend movement points. Returns `false` (and spends nothing) if the
    /// unit does not have enough left.
    pub fn spend_moves(&mut self, points: u8) -> bool {
        match self.moves_left.checked_sub(points) {
            Some(left) => {
                self.moves_left = left;
                true
            }
            None => false,
        }
    }

    /// Restore full movement at the start of a turn.
    pub fn reset_moves(&mut self, unit_type: &UnitType) {
        self.moves_left = unit_type.movement;
    }

    /// Put a unit aboard this one.
    ///
    /// `carrier_type` must describe this unit. The cargo takes the carrier's
    /// owner while aboard. On failure the cargo is returned untouched.
    pub fn load(
        &mut self,
        carrier_type: &UnitType,
        mut cargo: Unit,
    ) -> std::result::Result<(), RejectedCargo> {
        if let Err(error) = self.check_load(carrier_type, &cargo) {
            return Err(RejectedCargo { error, unit: cargo });
        }
        cargo.set_owner(self.owner);
        self.cargo.push(cargo);
        Ok(())
    }

    fn check_load(&self, carrier_type: &UnitType, cargo: &Unit) -> Result<(), CargoError> {
        if carrier_type.kind != self.kind {
            return Err(CargoError::TypeMismatch { unit: self.id });
        }
        let accepts = match carrier_type.carries {
            Some(domain) if carrier_type.capacity > 0 => domain,
            _ => return Err(CargoError::NotACarrier { carrier: self.id }),
        };
        let found = cargo.kind.domain();
        if found != accepts {
            return Err(CargoError::WrongDomain {
                carrier: self.id,
                cargo: cargo.id,
                accepts,
                found,
            });
        }
        if self.cargo.len() >= usize::from(carrier_type.capacity) {
            return Err(CargoError::Full {
                carrier: self.id,
                capacity: carrier_type.capacity,
            });
        }
        Ok(())
    }

    /// Take a unit off this one.
    pub fn unload(&mut self, cargo: UnitId) -> Result<Unit, CargoError> {
        let index = self
            .cargo
            .iter()
            .position(|u| u.id == cargo)
            .ok_or(CargoError::NotAboard {
                carrier: self.id,
                cargo,
            })?;
        Ok(self.cargo.remove(index))
    }
}
