//! Property-based tests for the decision rules.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::action::{Ability, Action, Resource};
    use crate::policy::{ActivityPolicy, UserPolicy};
    use crate::rules::evaluate;
    use crate::target::Target;
    use crate::Gate;
    use landtracker_core::{ActivityRecord, Actor, Role};
    use proptest::prelude::*;

    fn role() -> impl Strategy<Value = Role> {
        prop_oneof![
            Just(Role::Administrator),
            Just(Role::Manager),
            Just(Role::Staff),
        ]
    }

    fn actor() -> impl Strategy<Value = Actor> {
        (0u64..16, role()).prop_map(|(id, role)| Actor::new(id, role))
    }

    proptest! {
        #[test]
        fn test_create_iff_admin(actor in actor()) {
            prop_assert_eq!(UserPolicy::create(&actor), actor.role == Role::Administrator);
        }

        #[test]
        fn test_self_update_always_allowed(actor in actor()) {
            prop_assert!(UserPolicy::update(&actor, &actor));
        }

        #[test]
        fn test_self_toggle_never_allowed(actor in actor()) {
            prop_assert!(!UserPolicy::toggle_status(&actor, &actor));
        }

        #[test]
        fn test_self_view_always_allowed(actor in actor()) {
            prop_assert!(UserPolicy::view(&actor, &actor));
        }

        #[test]
        fn test_delete_matches_update_for_other_accounts(a in actor(), t in actor()) {
            prop_assume!(a.id != t.id);
            prop_assert_eq!(UserPolicy::delete(&a, &t), UserPolicy::update(&a, &t));
        }

        #[test]
        fn test_toggle_matches_delete_for_other_accounts(a in actor(), t in actor()) {
            prop_assume!(a.id != t.id);
            prop_assert_eq!(UserPolicy::toggle_status(&a, &t), UserPolicy::delete(&a, &t));
        }

        #[test]
        fn test_view_activity_owner_or_supervisor(a in actor(), owner in 0u64..16) {
            let record = ActivityRecord::new(1, owner, "login", "Signed in");
            let expected = a.role != Role::Staff || a.id.get() == owner;
            prop_assert_eq!(ActivityPolicy::view(&a, &record), expected);
        }

        #[test]
        fn test_activity_records_are_read_only(a in actor(), owner in 0u64..16) {
            let target = Target::activity(owner);
            for ability in [Ability::Create, Ability::Update, Ability::Delete, Ability::ToggleStatus] {
                let action = Action::new(Resource::Activity, ability);
                prop_assert!(!evaluate(action, &a, Some(&target)).decision.is_allowed());
            }
        }

        #[test]
        fn test_decisions_are_deterministic(a in actor(), t in actor()) {
            let gate = Gate::new().with_decision_logging(false);
            let target = Target::from(&t);
            for action in Action::ALL.into_iter().filter(|x| x.resource == Resource::User) {
                let first = gate.check(&a, action, Some(&target));
                let second = gate.check(&a, action, Some(&target));
                prop_assert_eq!(first, second);
            }
        }
    }
}
