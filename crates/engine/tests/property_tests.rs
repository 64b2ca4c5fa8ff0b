use owner_lines_engine::collector::{count_lines, parse_owner_line, read_owners};
use owner_lines_engine::config::Config;
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn test_line_count_matches_str_lines(
        content in "[a-z \\n]{0,400}"
    ) {
        // str::lines treats the final newline as a terminator, not a new line
        let expected = content.lines().count() as u64;
        let counted = count_lines(&mut Cursor::new(content.as_bytes())).unwrap();
        prop_assert_eq!(counted, expected);
    }

    #[test]
    fn test_owner_identifier_never_starts_with_stripped_prefix(
        line in "[ *@;#\\[a-z]{0,20}"
    ) {
        if let Some(owner) = parse_owner_line(&line) {
            prop_assert!(!owner.starts_with('@'));
            prop_assert!(!owner.ends_with(' '));
        }
    }

    #[test]
    fn test_read_owners_keeps_every_declared_name(
        names in prop::collection::vec("[a-z]{1,6}", 0..20)
    ) {
        let manifest = names
            .iter()
            .map(|n| format!("@{n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let owners = read_owners(&mut Cursor::new(manifest)).unwrap();
        prop_assert_eq!(owners, names);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_owner_gets_one_record_per_declaration(
        manifests in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["alice", "bob", "carol"]), 0..6),
            1..5,
        )
    ) {
        let dir = tempfile::TempDir::new().unwrap();
        for (i, owners) in manifests.iter().enumerate() {
            let pkg = dir.path().join(format!("pkg{i}"));
            std::fs::create_dir_all(&pkg).unwrap();
            std::fs::write(pkg.join("owners.txt"), owners.join("\n")).unwrap();
            std::fs::write(pkg.join("main.go"), "x\n".repeat(i + 1)).unwrap();
        }

        let result = owner_lines_engine::run(&Config::new(dir.path())).unwrap();

        for owner in ["alice", "bob", "carol"] {
            let expected: Vec<(String, u64)> = manifests
                .iter()
                .enumerate()
                .flat_map(|(i, owners)| {
                    owners
                        .iter()
                        .filter(|o| **o == owner)
                        .map(move |_| (format!("pkg{i}"), i as u64 + 1))
                })
                .collect();
            let actual: Vec<(String, u64)> = result
                .report
                .packages(owner)
                .unwrap_or_default()
                .iter()
                .map(|p| (p.path.clone(), p.lines_of_code))
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
