use crate::entity::SavedTokens;

/// Add the address when absent, remove it when present
pub fn toggle_saved_token(address: &str, saved: &SavedTokens) -> SavedTokens {
    let mut toggled = saved.clone();
    if !toggled.remove(address) {
        toggled.insert(address.to_string());
    }
    toggled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let saved = SavedTokens::new();
        let added = toggle_saved_token("zil1abc", &saved);
        assert!(added.contains("zil1abc"));
        assert!(saved.is_empty());

        let removed = toggle_saved_token("zil1abc", &added);
        assert!(removed.is_empty());
    }

    proptest! {
        #[test]
        fn toggle_is_its_own_inverse(
            existing in prop::collection::btree_set("[a-z0-9]{1,8}", 0..10),
            address in "[a-z0-9]{1,8}",
        ) {
            let once = toggle_saved_token(&address, &existing);
            prop_assert_ne!(&once, &existing);
            prop_assert_eq!(toggle_saved_token(&address, &once), existing);
        }
    }
}
