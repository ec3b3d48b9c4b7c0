//! Integration tests for the role authority
//!
//! Covers the effective-role collapse, prefix-set monotonicity, and the
//! exact-match navigation decision, including property-based checks
//! over arbitrary granted-role sets and paths.

use proptest::prelude::*;
use skillgauge_roleauth::{NavAuthority, Role};

#[test]
fn effective_role_is_highest_privilege_granted() {
    assert_eq!(Role::effective(&[Role::Hr, Role::Assessor, Role::Employee]), Role::Hr);
    assert_eq!(Role::effective(&[Role::Assessor, Role::Employee]), Role::Assessor);
    assert_eq!(Role::effective(&[Role::Employee]), Role::Employee);
    assert_eq!(Role::effective(&[]), Role::Employee);
}

#[test]
fn prefix_sets_grow_with_privilege() {
    let mut previous_len = 0;
    for role in Role::ALL {
        let prefixes = role.accessible_prefixes();
        assert!(prefixes.len() >= previous_len);
        previous_len = prefixes.len();
    }
}

#[test]
fn hr_menu_is_reachable_only_under_hr_prefix() {
    let authority = NavAuthority::new();

    for item in authority.navigation_set_for(Role::Hr).walk() {
        let current = format!("/hr{}", item.target);
        assert!(
            authority.is_active(&current, &item.target, Role::Hr),
            "hr item {} should be active at {}",
            item.target,
            current
        );
        assert!(
            !authority.is_active(&current, &item.target, Role::Employee),
            "employee must not reach {}",
            current
        );
    }
}

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Employee),
        Just(Role::Assessor),
        Just(Role::Hr),
    ]
}

proptest! {
    #[test]
    fn effective_follows_priority(granted in prop::collection::vec(any_role(), 0..6)) {
        let effective = Role::effective(&granted);
        if granted.contains(&Role::Hr) {
            prop_assert_eq!(effective, Role::Hr);
        } else if granted.contains(&Role::Assessor) {
            prop_assert_eq!(effective, Role::Assessor);
        } else {
            prop_assert_eq!(effective, Role::Employee);
        }
    }

    #[test]
    fn effective_is_max_of_granted(granted in prop::collection::vec(any_role(), 1..6)) {
        // The fixed priority scan agrees with the total privilege order
        let max = granted.iter().copied().max().unwrap();
        prop_assert_eq!(Role::effective(&granted), max);
    }

    #[test]
    fn higher_roles_keep_lower_prefixes(role in any_role()) {
        let prefixes = role.accessible_prefixes();
        for lower in Role::ALL.iter().filter(|r| **r <= role) {
            prop_assert!(prefixes.contains(&lower.prefix()));
        }
    }

    #[test]
    fn at_most_one_menu_target_active(
        role in any_role(),
        segment in "[a-z-]{1,20}",
    ) {
        let authority = NavAuthority::new();
        let current = format!("{}/{}", role.prefix(), segment);

        // Distinct targets never both match one current path exactly
        let mut distinct: Vec<&str> = authority.active_targets(&current, role);
        distinct.dedup();
        prop_assert!(distinct.len() <= 1);
    }

    #[test]
    fn unknown_role_names_default_to_employee(name in "[A-Za-z0-9_-]{0,24}") {
        let role = Role::from_name(&name);
        let known = ["employee", "assessor", "hr"];
        if !known.contains(&name.to_ascii_lowercase().as_str()) {
            prop_assert_eq!(role, Role::Employee);
        }
    }
}
