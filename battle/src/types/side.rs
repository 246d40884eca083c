//! Rosters and the per-session view of one side

use netrunner_protocol::Side;

use super::daemon::Daemon;

/// Ordered list of daemons owned by one party (persisted between sessions)
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Daemon>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, daemon: Daemon) {
        self.members.push(daemon);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Daemon> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Daemon> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Daemon> {
        self.members.iter()
    }

    /// Index of the first daemon that can still fight
    pub fn first_conscious(&self) -> Option<usize> {
        self.members.iter().position(|d| d.is_conscious())
    }
}

impl From<Vec<Daemon>> for Roster {
    fn from(members: Vec<Daemon>) -> Self {
        Self { members }
    }
}

/// One side of an active battle: a borrowed roster plus its active slot
#[derive(Debug)]
pub struct SideState<'a> {
    pub side: Side,
    roster: &'a mut Roster,
    active: usize,
}

impl<'a> SideState<'a> {
    /// Open a side on its first conscious daemon, `None` if everyone has fainted
    pub fn open(side: Side, roster: &'a mut Roster) -> Option<Self> {
        let active = roster.first_conscious()?;
        Some(Self {
            side,
            roster,
            active,
        })
    }

    pub fn roster(&self) -> &Roster {
        &*self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut *self.roster
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The daemon currently on the field
    pub fn active(&self) -> &Daemon {
        &self.roster.members[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Daemon {
        &mut self.roster.members[self.active]
    }

    /// Iterate over bench daemons (not active, not fainted)
    pub fn get_bench(&self) -> impl Iterator<Item = (usize, &Daemon)> {
        let active = self.active;
        self.roster
            .members
            .iter()
            .enumerate()
            .filter(move |(idx, d)| *idx != active && d.is_conscious())
    }

    /// Whether anyone is left to send in
    pub fn has_bench(&self) -> bool {
        self.get_bench().next().is_some()
    }

    /// Swap the active daemon, clearing the outgoing daemon's combat state.
    /// Callers check the target is conscious and in range.
    pub fn set_active(&mut self, index: usize) {
        if index == self.active || index >= self.roster.members.len() {
            return;
        }
        self.roster.members[self.active].on_switch_out();
        self.active = index;
    }
}
