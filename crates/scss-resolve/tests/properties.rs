//! Property-based tests for candidate generation and resolution order.

use proptest::prelude::*;
use scss_resolve::fs::MemoryFs;
use scss_resolve::token::{candidates, is_external, partial_name};
use scss_resolve::{AliasMap, ImportResolver, SearchPath};
use std::path::PathBuf;

/// Plain path segments: no aliases, no dots, no slashes.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

fn token_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Only the last segment gains the underscore.
    #[test]
    fn prop_partial_touches_last_segment(segments in token_strategy()) {
        let token = segments.join("/");
        let partial = partial_name(&token);

        let mut expected = segments.clone();
        if let Some(last) = expected.last_mut() {
            last.insert(0, '_');
        }
        prop_assert_eq!(partial, expected.join("/"));
    }

    /// `.css` tokens never produce local candidates.
    #[test]
    fn prop_css_tokens_are_external(segments in token_strategy()) {
        let token = format!("{}.css", segments.join("/"));
        prop_assert!(is_external(&token));
        prop_assert!(candidates(&token).is_empty());
    }

    /// Exactly the first directory holding any candidate wins.
    #[test]
    fn prop_first_directory_wins(
        segments in token_strategy(),
        present in prop::collection::vec(prop::bool::ANY, 1..=5),
        partial in prop::bool::ANY,
    ) {
        let token = segments.join("/");
        let file = if partial { partial_name(&token) } else { token.clone() };

        let dirs: Vec<String> = (0..present.len()).map(|i| format!("/dir{i}")).collect();
        let fs = MemoryFs::new();
        for (dir, here) in dirs.iter().zip(&present) {
            if *here {
                fs.add_file(format!("{dir}/{file}.scss"));
            }
        }

        let search_path: SearchPath = dirs.iter().map(String::as_str).collect();
        let resolver = ImportResolver::new(search_path, AliasMap::new(), fs);
        let found = resolver.session().resolve(&token).unwrap();

        let expected = dirs
            .iter()
            .zip(&present)
            .find(|(_, here)| **here)
            .map(|(dir, _)| PathBuf::from(format!("{dir}/{file}.scss")));
        prop_assert_eq!(found, expected);
    }
}
