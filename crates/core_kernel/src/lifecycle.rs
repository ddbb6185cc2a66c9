//! Lifecycle abstraction
//!
//! Every status enum governed by the workflow implements [`Lifecycle`]: a
//! static graph of allowed transitions plus the permission tier needed to
//! edit an entity sitting in each state. Terminal states have no outgoing
//! edges and require the admin tier.

use std::collections::VecDeque;
use std::fmt;

use crate::role::{PermissionTier, Role};

pub trait Lifecycle: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every status in declaration order
    const ALL: &'static [Self];

    /// Statuses reachable in one step
    fn allowed_next(self) -> &'static [Self];

    fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    fn can_transition_to(self, target: Self) -> bool {
        self.allowed_next().contains(&target)
    }

    /// Tier a caller needs to edit an entity in this status
    fn required_tier(self) -> PermissionTier {
        if self.is_terminal() {
            PermissionTier::Admin
        } else {
            PermissionTier::Internal
        }
    }

    fn can_edit(self, role: Role) -> bool {
        self.required_tier().includes(role)
    }

    /// Statuses reachable in one or more steps, in breadth-first order
    fn reachable_from(self) -> Vec<Self> {
        let mut seen: Vec<Self> = Vec::new();
        let mut queue: VecDeque<Self> = self.allowed_next().iter().copied().collect();
        while let Some(next) = queue.pop_front() {
            if seen.contains(&next) {
                continue;
            }
            seen.push(next);
            queue.extend(next.allowed_next().iter().copied());
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl fmt::Display for Light {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl Lifecycle for Light {
        const ALL: &'static [Self] = &[Light::Off, Light::On, Light::Broken];

        fn allowed_next(self) -> &'static [Self] {
            match self {
                Light::Off => &[Light::On],
                Light::On => &[Light::Off, Light::Broken],
                Light::Broken => &[],
            }
        }
    }

    #[test]
    fn test_terminal_requires_admin() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::Broken.can_edit(Role::ClaimsAnalyst));
        assert!(Light::Broken.can_edit(Role::Admin));
        assert!(Light::On.can_edit(Role::ClaimsAnalyst));
    }

    #[test]
    fn test_reachable_handles_cycles() {
        let reachable = Light::Off.reachable_from();
        assert_eq!(reachable, vec![Light::On, Light::Off, Light::Broken]);
        assert!(Light::Broken.reachable_from().is_empty());
    }
}
