use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn public_static_final() {
    let flags = modifiers_to_int([Modifier::Public, Modifier::Static, Modifier::Final]);
    assert_eq!(flags, access::PUBLIC | access::STATIC | access::FINAL);
    assert_eq!(flags, 0x0019);
}

#[test]
fn unrecognized_kinds_are_ignored() {
    assert_eq!(modifiers_to_int([Modifier::Volatile]), 0);
    assert_eq!(
        modifiers_to_int([Modifier::Default, Modifier::Sealed, Modifier::Public]),
        access::PUBLIC
    );
}

#[test]
fn empty_fold_is_zero() {
    assert_eq!(modifiers_to_int(std::iter::empty()), 0);
}

#[test]
fn keyword_round_trip() {
    for m in Modifier::ALL {
        assert_eq!(Modifier::from_keyword(m.keyword()), Some(m));
    }
    assert_eq!(Modifier::from_keyword("const"), None);
}

#[test]
fn set_collects_from_keywords() {
    let set: Modifiers = [Modifier::Public, Modifier::Abstract].into_iter().collect();
    assert!(set.is_public());
    assert!(set.is_abstract());
    assert!(!set.is_final());
    assert!(!set.is_static());
    assert!(Modifiers::from(Modifier::Static).is_static());
    assert_eq!(
        set.modifiers().collect::<Vec<_>>(),
        vec![Modifier::Public, Modifier::Abstract]
    );
}

#[test]
fn access_flags_of_set() {
    let set = Modifiers::PRIVATE | Modifiers::TRANSIENT | Modifiers::VOLATILE;
    assert_eq!(set.access_flags(), access::PRIVATE | access::TRANSIENT);
}

fn any_modifier() -> impl Strategy<Value = Modifier> {
    (0..Modifier::ALL.len()).prop_map(|i| Modifier::ALL[i])
}

proptest! {
    #[test]
    fn fold_is_order_independent(mut mods in prop::collection::vec(any_modifier(), 0..20)) {
        let forward = modifiers_to_int(mods.iter().copied());
        mods.reverse();
        prop_assert_eq!(forward, modifiers_to_int(mods.iter().copied()));
        mods.sort();
        prop_assert_eq!(forward, modifiers_to_int(mods.iter().copied()));
    }

    #[test]
    fn fold_matches_set_encoding(mods in prop::collection::vec(any_modifier(), 0..20)) {
        let set: Modifiers = mods.iter().copied().collect();
        prop_assert_eq!(modifiers_to_int(mods), set.access_flags());
    }
}
