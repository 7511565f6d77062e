use super::*;

use crate::index::Node;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Walk every node and check the per-node list invariants: bounded by K,
/// duplicate-free, sorted by the current weights, and every entry actually
/// passes through the node.
fn validate_index(corpus: &Corpus) {
    let index = corpus.index();
    let weights = corpus.weights();
    let top_k = index.top_k();

    assert!(index.root.top.is_empty(), "root must not list phrases");

    let mut stack: Vec<(String, &Node)> = vec![(String::new(), &index.root)];
    let mut nodes = 0usize;
    while let Some((path, node)) = stack.pop() {
        nodes += 1;

        assert!(node.top.len() <= top_k, "list at {path:?} exceeds K");
        for (i, phrase) in node.top.iter().enumerate() {
            assert!(
                phrase.starts_with(path.as_str()),
                "{phrase:?} listed under {path:?}"
            );
            assert!(weights.contains(phrase), "{phrase:?} not in weight table");
            assert!(
                !node.top[..i].contains(phrase),
                "{phrase:?} listed twice under {path:?}"
            );
        }
        for pair in node.top.windows(2) {
            assert_eq!(
                weights.rank(&pair[0], &pair[1]),
                std::cmp::Ordering::Less,
                "list at {path:?} out of order"
            );
        }

        for (&ch, child) in &node.children {
            let mut child_path = path.clone();
            child_path.push(ch);
            stack.push((child_path, child));
        }
    }

    assert_eq!(nodes, index.node_count(), "node count must match the tree");
}

/// Brute force: every recorded phrase starting with `prefix`, ranked, first K.
fn expected_top(model: &BTreeMap<String, u64>, prefix: &str, top_k: usize) -> Vec<Phrase> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<(&str, u64)> = model
        .iter()
        .filter(|(p, _)| p.starts_with(prefix))
        .map(|(p, w)| (p.as_str(), *w))
        .collect();
    matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    matches
        .into_iter()
        .take(top_k)
        .map(|(p, _)| Phrase::from(p))
        .collect()
}

#[derive(Clone, Debug)]
enum Op {
    Type(char),
    Lookup(String),
}

fn phrase_strategy() -> impl Strategy<Value = String> + Clone {
    // A tiny alphabet so phrases collide on prefixes constantly.
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', ' ', 'é']), 0..=6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn seed_strategy() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((phrase_strategy(), 0u64..8), 0..=40)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        60 => prop::sample::select(vec!['a', 'b', 'c', ' ', 'é']).prop_map(Op::Type),
        25 => Just(Op::Type('#')),
        15 => phrase_strategy().prop_map(Op::Lookup),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(seed in seed_strategy(), ops in ops_strategy(), top_k in 1usize..=5) {
        let (phrases, weights): (Vec<String>, Vec<u64>) = seed.into_iter().unzip();
        let config = Config::default().with_top_k(top_k);
        let mut ac = Autocomplete::with_config(config, &phrases, &weights).unwrap();

        let mut model: BTreeMap<String, u64> = BTreeMap::new();
        for (p, w) in phrases.iter().zip(&weights) {
            *model.entry(p.clone()).or_insert(0) += w;
        }
        let mut typed = String::new();

        for op in ops {
            match op {
                Op::Type('#') => {
                    let got = ac.input('#').to_vec();
                    prop_assert!(got.is_empty());
                    *model.entry(std::mem::take(&mut typed)).or_insert(0) += 1;
                }
                Op::Type(c) => {
                    typed.push(c);
                    let got = ac.input(c).to_vec();
                    prop_assert_eq!(got, expected_top(&model, &typed, top_k));
                }
                Op::Lookup(prefix) => {
                    let got = ac.corpus().suggest(&prefix).to_vec();
                    prop_assert_eq!(got, expected_top(&model, &prefix, top_k));
                }
            }

            prop_assert_eq!(ac.pending(), typed.as_str());
            prop_assert_eq!(ac.corpus().len(), model.len());
        }

        validate_index(ac.corpus());
        for (phrase, weight) in &model {
            prop_assert_eq!(ac.corpus().weight(phrase), *weight);
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_seed_order_small_set() {
    let seed: Vec<(&str, u64)> = vec![
        ("a", 2),
        ("ab", 2),
        ("abc", 1),
        ("ac", 3),
        ("b", 1),
        ("ab", 1),
    ];
    let prefixes = ["a", "ab", "abc", "ac", "b", "c"];

    let baseline = {
        let (phrases, weights): (Vec<&str>, Vec<u64>) = seed.iter().copied().unzip();
        Corpus::seed(&Config::default(), &phrases, &weights).unwrap()
    };
    assert_eq!(baseline.suggest("a"), ["ab", "ac", "a"].map(Phrase::from));

    for_each_permutation(&seed, |perm| {
        let (phrases, weights): (Vec<&str>, Vec<u64>) = perm.into_iter().unzip();
        let corpus = Corpus::seed(&Config::default(), &phrases, &weights).unwrap();

        validate_index(&corpus);
        for prefix in prefixes {
            assert_eq!(corpus.suggest(prefix), baseline.suggest(prefix), "prefix {prefix:?}");
        }
    });
}

#[test]
fn exhaustive_commit_order_small_set() {
    let commits = ["ab", "ab", "ac", "a", "a", "a"];
    let base = Autocomplete::new(&["ab", "ac", "ad", "ae"], &[1, 1, 1, 1]);

    let mut finals: Option<Vec<Phrase>> = None;
    for_each_permutation(&commits, |perm| {
        let mut ac = base.clone();
        for phrase in perm {
            for c in phrase.chars() {
                ac.input(c);
            }
            ac.input('#');
            validate_index(ac.corpus());
        }

        let got = ac.corpus().suggest("a").to_vec();
        let expected = finals.get_or_insert_with(|| got.clone());
        assert_eq!(&got, expected);
    });

    assert_eq!(finals.unwrap(), ["a", "ab", "ac"].map(Phrase::from));
}
