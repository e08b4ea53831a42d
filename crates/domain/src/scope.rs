use serde::{Deserialize, Serialize};

use crate::user::{Role, User};

/// Entity families the scope resolver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Farm,
    SiteVisit,
    Statement,
    FarmEmployeeStats,
    Notice,
}

/// A value-level predicate over farms, produced by the role-scope
/// resolver and translated into a storage filter by the repositories.
///
/// Farms are the ownership root: site visits, statements and employee
/// stats are scoped through the farm they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmScope {
    /// Match every farm
    All,
    /// Match farms owned by the given user
    OwnedBy(i32),
    /// Match nothing (default-deny / soft-deny)
    Empty,
}

impl FarmScope {
    /// Resolve the scope for a user and entity kind.
    ///
    /// Pure function of (user, kind); never fails. Notices carry no
    /// ownership and are visible to every role. For every other entity
    /// kind: Admin sees everything, a Manager sees their own farms and
    /// the records hanging off them, and the remaining roles resolve to
    /// the empty scope (default-deny, applied uniformly to visibility
    /// and to assignment choice sets).
    pub fn resolve(user: &User, kind: EntityKind) -> FarmScope {
        if kind == EntityKind::Notice {
            return FarmScope::All;
        }
        match user.role {
            Role::Admin => FarmScope::All,
            Role::Manager => FarmScope::OwnedBy(user.id),
            Role::DesignatedAgent | Role::Accountant => FarmScope::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FarmScope::Empty)
    }

    /// Whether a farm with the given owner falls inside this scope.
    /// Used by in-memory implementations and the write-side guards.
    pub fn allows_owner(&self, owner_id: i32) -> bool {
        match self {
            FarmScope::All => true,
            FarmScope::OwnedBy(user_id) => *user_id == owner_id,
            FarmScope::Empty => false,
        }
    }
}
